//! Validation of client-supplied identifiers and commands
//!
//! Both checks run before anything is forwarded to the vendor; invalid input
//! is rejected outright rather than sanitized into something forwardable.

use std::fmt;

use crate::error::{ConvError, ConvResult};

/// A validated vehicle identifier.
///
/// The public API treats ids as opaque digit strings; the vendor protocol
/// carries them as JSON numbers. Both representations are fixed at parse
/// time so downstream code never re-validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleId {
    text: String,
    numeric: u64,
}

impl VehicleId {
    /// Validate a raw id from the request path.
    ///
    /// Accepts non-empty, digits-only input that fits the vendor's numeric
    /// wire type. Anything else fails with [`ConvError::IdMustBeNumber`] —
    /// invalid characters are never stripped.
    pub fn parse(raw: &str) -> ConvResult<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConvError::IdMustBeNumber);
        }
        let numeric = raw.parse::<u64>().map_err(|_| ConvError::IdMustBeNumber)?;
        Ok(Self {
            text: raw.to_string(),
            numeric,
        })
    }

    /// The id as originally supplied (leading zeros preserved)
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The id as the vendor wire format carries it
    pub fn as_u64(&self) -> u64 {
        self.numeric
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A validated engine command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    Start,
    Stop,
}

impl EngineCommand {
    /// Validate a raw action from the request body.
    ///
    /// Non-alphabetic characters are stripped first, then the remainder must
    /// be exactly `START` or `STOP`. A mangled action like `St@rt` reduces
    /// to `Strt` and is rejected, never auto-corrected.
    pub fn parse(raw: &str) -> ConvResult<Self> {
        let stripped: String = raw.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        match stripped.as_str() {
            "START" => Ok(EngineCommand::Start),
            "STOP" => Ok(EngineCommand::Stop),
            _ => Err(ConvError::ActionNotSupported),
        }
    }

    /// The command string the vendor's engine service expects
    pub fn upstream_command(&self) -> &'static str {
        match self {
            EngineCommand::Start => "START_VEHICLE",
            EngineCommand::Stop => "STOP_VEHICLE",
        }
    }
}
