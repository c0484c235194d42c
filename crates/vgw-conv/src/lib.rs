//! vgw-conv - Vendor Data Conversion Library for the Vehicle Gateway
//!
//! The decision core of the gateway: pure functions that take raw vendor
//! payloads and either produce well-typed public-schema values or classify
//! the payload as invalid with a client- or vendor-attributable error.
//!
//! The vendor encodes every leaf value as a string (`"True"`, `"False"`,
//! `"null"`, `"83.2"`), reports door counts as two booleans that can
//! contradict each other, and returns door lists in no particular order.
//! All of that is resolved here, at the boundary:
//!
//! - **Type coercion** — string booleans/numbers/null sentinels become real
//!   types; no string-typed value leaks past this crate.
//! - **Door-count resolution** — the exhaustive 2×2 split over the sedan and
//!   coupe flags, with contradictions rejected.
//! - **Deterministic ordering** — door lists sort front-before-back, then
//!   left-before-right, with locations validated before the sort runs.
//! - **Input validation** — vehicle ids and engine commands are checked
//!   before any vendor call is made.
//!
//! Everything is synchronous, allocation-light, and free of I/O; the
//! HTTP layers above own all side effects.
//!
//! # Quick Start
//!
//! ```rust
//! use vgw_conv::{convert, VehicleId};
//!
//! let id = VehicleId::parse("1234").unwrap();
//! assert_eq!(id.as_u64(), 1234);
//!
//! let raw = r#"{
//!     "data": {
//!         "vin": {"type": "String", "value": "1213231"},
//!         "color": {"type": "String", "value": "Metallic Silver"},
//!         "fourDoorSedan": {"type": "Boolean", "value": "True"},
//!         "twoDoorCoupe": {"type": "Boolean", "value": "False"},
//!         "driveTrain": {"type": "String", "value": "v8"}
//!     }
//! }"#;
//! let info = convert::vehicle_info(raw).unwrap();
//! assert_eq!(info.door_count, 4);
//! ```

pub mod convert;
mod envelope;
pub mod error;
pub mod types;
pub mod validate;

// Re-export main types
pub use error::{ConvError, ConvResult};
pub use types::{DoorStatus, EnergyLevel, EngineActionResult, EngineActionStatus, VehicleInfo};
pub use validate::{EngineCommand, VehicleId};
