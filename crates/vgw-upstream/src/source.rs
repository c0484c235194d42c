//! Trait seam between the API layer and the vendor client

use async_trait::async_trait;
use vgw_conv::{EngineCommand, VehicleId};

use crate::error::Result;

/// One logical vendor call per public operation.
///
/// Implementations return the raw response body as text; parsing and
/// normalization belong to the conversion layer, so tests can drive the API
/// with canned vendor payloads through a stub implementation.
#[async_trait]
pub trait VehicleTelemetry: Send + Sync {
    /// Fetch the raw vehicle-info payload
    async fn vehicle_info(&self, id: &VehicleId) -> Result<String>;

    /// Fetch the raw door/security payload
    async fn security_status(&self, id: &VehicleId) -> Result<String>;

    /// Fetch the raw energy payload (serves both fuel and battery reads)
    async fn energy(&self, id: &VehicleId) -> Result<String>;

    /// Execute an engine command and fetch the raw action result
    async fn engine_action(&self, id: &VehicleId, command: EngineCommand) -> Result<String>;
}
