//! Conversion of raw vendor payloads into the public schema
//!
//! Each function takes the vendor response body as text and produces either
//! a public-schema value or a classified [`ConvError`]. All functions are
//! pure and total over arbitrary input: malformed payloads fail, they never
//! hang or panic.

use crate::envelope::{self, ActionEnvelope, Envelope, EnergyData, InfoData, SecurityData};
use crate::error::{ConvError, ConvResult};
use crate::types::{DoorStatus, EnergyLevel, EngineActionResult, EngineActionStatus, VehicleInfo};

/// Sort key for a door location: front rows before back, left before right.
/// Variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Row {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Side {
    Left,
    Right,
}

/// Decompose a vendor door location into its sort key.
///
/// Locations must start with `front` or `back` and end with `Left` or
/// `Right`; anything else cannot be ordered and fails the whole conversion.
/// Validated for every element before any sort runs, so the comparator
/// itself can never fail mid-sort.
fn door_position(location: &str) -> ConvResult<(Row, Side)> {
    let row = if location.starts_with("front") {
        Row::Front
    } else if location.starts_with("back") {
        Row::Back
    } else {
        return Err(ConvError::InvalidDoorRelationship);
    };
    let side = if location.ends_with("Left") {
        Side::Left
    } else if location.ends_with("Right") {
        Side::Right
    } else {
        return Err(ConvError::InvalidDoorRelationship);
    };
    Ok((row, side))
}

/// Convert a `getVehicleInfoService` response into [`VehicleInfo`].
///
/// The vendor reports body style as two boolean strings that are not
/// guaranteed to be consistent. Exactly four combinations are meaningful;
/// a car claiming to be both a sedan and a coupe, or carrying any value
/// other than `"True"`/`"False"`, is a vendor data error.
pub fn vehicle_info(raw: &str) -> ConvResult<VehicleInfo> {
    let envelope: Envelope<InfoData> = envelope::parse(raw)?;
    let data = envelope.data;

    let door_count = match (
        data.four_door_sedan.value.as_str(),
        data.two_door_coupe.value.as_str(),
    ) {
        ("True", "True") => return Err(ConvError::InvalidNumberOfDoors),
        // neither flag set: the vendor's three-door models report this way
        ("False", "False") => 3,
        ("True", "False") => 4,
        ("False", "True") => 2,
        _ => return Err(ConvError::InvalidNumberOfDoors),
    };

    Ok(VehicleInfo {
        vin: data.vin.value,
        color: data.color.value,
        door_count,
        drive_train: data.drive_train.value,
    })
}

/// Convert a `getSecurityStatusService` response into an ordered door list.
///
/// Elements whose locked flag is not a boolean string are unconvertible; if
/// the converted list is shorter than the vendor's, the whole call fails
/// rather than returning a partial list. Ordering is front before back,
/// then left before right, and is stable for a fixed input.
pub fn security_status(raw: &str) -> ConvResult<Vec<DoorStatus>> {
    let envelope: Envelope<SecurityData> = envelope::parse(raw)?;
    let entries = envelope.data.doors.values;

    let converted: Vec<DoorStatus> = entries
        .iter()
        .filter_map(|entry| {
            let locked = match entry.locked.value.as_str() {
                "True" => true,
                "False" => false,
                _ => return None,
            };
            Some(DoorStatus {
                location: entry.location.value.clone(),
                locked,
            })
        })
        .collect();
    if converted.len() != entries.len() {
        return Err(ConvError::InvalidDoorStatus);
    }

    let mut keyed = converted
        .into_iter()
        .map(|door| door_position(&door.location).map(|position| (position, door)))
        .collect::<ConvResult<Vec<_>>>()?;
    keyed.sort_by_key(|(position, _)| *position);

    Ok(keyed.into_iter().map(|(_, door)| door).collect())
}

/// Extract one energy leaf, treating the vendor's `"null"` sentinel as the
/// facet being absent from this vehicle.
fn energy_percent(value: &str, absent: ConvError) -> ConvResult<EnergyLevel> {
    if value == "null" {
        return Err(absent);
    }
    let percent = value
        .parse::<f64>()
        .map_err(|_| ConvError::Envelope(format!("energy level is not numeric: {value:?}")))?;
    if !(0.0..=100.0).contains(&percent) {
        return Err(ConvError::Envelope(format!(
            "energy level out of range: {percent}"
        )));
    }
    Ok(EnergyLevel { percent })
}

/// Convert a `getEnergyService` response into the fuel tank level.
///
/// A `"null"` tank level means an electric vehicle — a client-attributable
/// error, since the vehicle has no tank to report.
pub fn fuel_level(raw: &str) -> ConvResult<EnergyLevel> {
    let envelope: Envelope<EnergyData> = envelope::parse(raw)?;
    energy_percent(&envelope.data.tank_level.value, ConvError::NullTankLevel)
}

/// Convert a `getEnergyService` response into the battery charge level.
pub fn battery_level(raw: &str) -> ConvResult<EnergyLevel> {
    let envelope: Envelope<EnergyData> = envelope::parse(raw)?;
    energy_percent(
        &envelope.data.battery_level.value,
        ConvError::NullBatteryLevel,
    )
}

/// Convert an `actionEngineService` response into the public action result.
pub fn engine_action(raw: &str) -> ConvResult<EngineActionResult> {
    let envelope: ActionEnvelope = envelope::parse(raw)?;
    let status = match envelope.action_result.status.as_str() {
        "EXECUTED" => EngineActionStatus::Success,
        "FAILED" => EngineActionStatus::Error,
        _ => return Err(ConvError::InvalidEngineAction),
    };
    Ok(EngineActionResult { status })
}
