//! Public-schema types served by the gateway

use serde::{Deserialize, Serialize};

/// Vehicle identification and body data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    pub vin: String,
    pub color: String,
    /// Number of doors, one of 2, 3 or 4
    pub door_count: u8,
    pub drive_train: String,
}

/// Lock state of a single door
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorStatus {
    /// Location string from the vendor, e.g. "frontLeft"
    pub location: String,
    pub locked: bool,
}

/// Fuel or battery charge as a percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyLevel {
    pub percent: f64,
}

/// Outcome of an engine start/stop request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineActionResult {
    pub status: EngineActionStatus,
}

/// Public status of an engine action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineActionStatus {
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vehicle_info_uses_camel_case_keys() {
        let info = VehicleInfo {
            vin: "123123412412".into(),
            color: "Metallic Silver".into(),
            door_count: 4,
            drive_train: "v8".into(),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "vin": "123123412412",
                "color": "Metallic Silver",
                "doorCount": 4,
                "driveTrain": "v8"
            })
        );
    }

    #[test]
    fn test_engine_status_serializes_lowercase() {
        let result = EngineActionResult {
            status: EngineActionStatus::Success,
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"status":"success"}"#
        );
        let result = EngineActionResult {
            status: EngineActionStatus::Error,
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"status":"error"}"#
        );
    }
}
