//! Error taxonomy for conversion and validation

use thiserror::Error;

/// Errors produced by the conversion and validation layer.
///
/// Every variant is attributed to either the client (400) or the vendor
/// (500) via [`ConvError::http_status`]. The 500-class variants carry their
/// kind name as a stable message prefix so callers can distinguish them
/// without matching on the enum.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvError {
    /// Vehicle id contains a non-digit character (or overflows the wire type)
    #[error("vehicle ID must be a number")]
    IdMustBeNumber,

    /// Engine action is not one of the supported commands
    #[error("action must be either START or STOP")]
    ActionNotSupported,

    /// Tank level requested for a vehicle without a tank
    #[error("You requested the tank level of an electric vehicle.  There is no tank level.")]
    NullTankLevel,

    /// Battery level requested for a vehicle without a battery
    #[error("You requested the battery level of a petroleum-powered vehicle.  There is no battery level.")]
    NullBatteryLevel,

    /// Vendor door flags are contradictory or not boolean strings
    #[error("InvalidNumberOfDoorsError: there is a problem with the manufacturer's data")]
    InvalidNumberOfDoors,

    /// A door's locked flag is not a boolean string
    #[error("InvalidDoorStatusError: there is a problem with the manufacturer's data")]
    InvalidDoorStatus,

    /// A door location does not decompose into front/back + Left/Right
    #[error("InvalidDoorRelationshipError: there is a problem with the manufacturer's data")]
    InvalidDoorRelationship,

    /// Vendor reported an engine action status outside its contract
    #[error("InvalidEngineActionError: there is a problem with the manufacturer's data")]
    InvalidEngineAction,

    /// Vendor payload is not parseable as the expected envelope
    #[error("malformed upstream payload: {0}")]
    Envelope(String),
}

/// Result type for conversion and validation operations
pub type ConvResult<T> = Result<T, ConvError>;

impl ConvError {
    /// Returns the HTTP status code this error is attributed with.
    ///
    /// 400 means the client asked for something invalid or inapplicable;
    /// 500 means the vendor returned data violating its own contract.
    pub fn http_status(&self) -> u16 {
        match self {
            ConvError::IdMustBeNumber => 400,
            ConvError::ActionNotSupported => 400,
            ConvError::NullTankLevel => 400,
            ConvError::NullBatteryLevel => 400,
            ConvError::InvalidNumberOfDoors => 500,
            ConvError::InvalidDoorStatus => 500,
            ConvError::InvalidDoorRelationship => 500,
            ConvError::InvalidEngineAction => 500,
            ConvError::Envelope(_) => 500,
        }
    }

    /// True when the failure is the client's fault (4xx attribution)
    pub fn is_client_error(&self) -> bool {
        self.http_status() < 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_attribution() {
        assert_eq!(ConvError::IdMustBeNumber.http_status(), 400);
        assert_eq!(ConvError::ActionNotSupported.http_status(), 400);
        assert_eq!(ConvError::NullTankLevel.http_status(), 400);
        assert_eq!(ConvError::NullBatteryLevel.http_status(), 400);
        assert_eq!(ConvError::InvalidNumberOfDoors.http_status(), 500);
        assert_eq!(ConvError::InvalidDoorStatus.http_status(), 500);
        assert_eq!(ConvError::InvalidDoorRelationship.http_status(), 500);
        assert_eq!(ConvError::InvalidEngineAction.http_status(), 500);
        assert_eq!(ConvError::Envelope("x".into()).http_status(), 500);
    }

    #[test]
    fn test_exact_client_messages() {
        assert_eq!(
            ConvError::NullTankLevel.to_string(),
            "You requested the tank level of an electric vehicle.  There is no tank level."
        );
        assert_eq!(
            ConvError::NullBatteryLevel.to_string(),
            "You requested the battery level of a petroleum-powered vehicle.  There is no battery level."
        );
        assert_eq!(ConvError::IdMustBeNumber.to_string(), "vehicle ID must be a number");
        assert_eq!(
            ConvError::ActionNotSupported.to_string(),
            "action must be either START or STOP"
        );
    }

    #[test]
    fn test_data_errors_carry_kind_prefix() {
        assert!(ConvError::InvalidNumberOfDoors
            .to_string()
            .starts_with("InvalidNumberOfDoorsError: "));
        assert!(ConvError::InvalidDoorStatus
            .to_string()
            .starts_with("InvalidDoorStatusError: "));
        assert!(ConvError::InvalidDoorRelationship
            .to_string()
            .starts_with("InvalidDoorRelationshipError: "));
        assert!(ConvError::InvalidEngineAction
            .to_string()
            .starts_with("InvalidEngineActionError: "));
    }
}
