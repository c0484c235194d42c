//! Serde model of the vendor response envelope
//!
//! The vendor wraps every leaf as `{"type": ..., "value": "<string>"}` with
//! the value always a string, booleans included ("True"/"False") and absent
//! values included (the literal string "null"). Only `value` is read here;
//! the declared `type` is not trusted. These types stay private to the
//! crate — no string-typed value leaks past the conversion layer.

use serde::Deserialize;

use crate::error::{ConvError, ConvResult};

/// A `{type, value}` leaf. The vendor's `type` field is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct Leaf {
    pub value: String,
}

/// Top-level wrapper for the data-bearing services
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InfoData {
    pub vin: Leaf,
    pub color: Leaf,
    pub four_door_sedan: Leaf,
    pub two_door_coupe: Leaf,
    pub drive_train: Leaf,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SecurityData {
    pub doors: DoorList,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DoorList {
    pub values: Vec<DoorEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DoorEntry {
    pub location: Leaf,
    pub locked: Leaf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnergyData {
    pub tank_level: Leaf,
    pub battery_level: Leaf,
}

/// The engine-action service does not use the `data` wrapper
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ActionEnvelope {
    pub action_result: ActionResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActionResult {
    pub status: String,
}

/// Parse a raw vendor body into the expected envelope shape.
///
/// Anything serde rejects — invalid JSON, missing fields, wrong value
/// types — is a vendor contract violation, not a client error.
pub(crate) fn parse<'a, T: Deserialize<'a>>(raw: &'a str) -> ConvResult<T> {
    serde_json::from_str(raw).map_err(|e| ConvError::Envelope(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_info_envelope() {
        let raw = r#"{
            "service": "getVehicleInfo",
            "status": "200",
            "data": {
                "vin": {"type": "String", "value": "123123412412"},
                "color": {"type": "String", "value": "Metallic Silver"},
                "fourDoorSedan": {"type": "Boolean", "value": "True"},
                "twoDoorCoupe": {"type": "Boolean", "value": "False"},
                "driveTrain": {"type": "String", "value": "v8"}
            }
        }"#;
        let envelope: Envelope<InfoData> = parse(raw).unwrap();
        assert_eq!(envelope.data.vin.value, "123123412412");
        assert_eq!(envelope.data.four_door_sedan.value, "True");
    }

    #[test]
    fn test_missing_field_is_envelope_error() {
        let raw = r#"{"data": {"vin": {"value": "1"}}}"#;
        let err = parse::<Envelope<InfoData>>(raw).unwrap_err();
        assert!(matches!(err, ConvError::Envelope(_)));
    }

    #[test]
    fn test_invalid_json_is_envelope_error() {
        let err = parse::<ActionEnvelope>("not json at all").unwrap_err();
        assert!(matches!(err, ConvError::Envelope(_)));
        let err = parse::<ActionEnvelope>("").unwrap_err();
        assert!(matches!(err, ConvError::Envelope(_)));
    }
}
