//! Application state for the gateway API

use std::sync::Arc;

use vgw_upstream::VehicleTelemetry;

/// Application state shared across all handlers.
///
/// Holds only the vendor source; every request is otherwise self-contained,
/// so there is no per-request or cross-request mutable state.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn VehicleTelemetry>,
}

impl AppState {
    /// Create a new AppState over the given vendor source
    pub fn new(source: Arc<dyn VehicleTelemetry>) -> Self {
        Self { source }
    }

    /// Get the vendor source
    pub fn source(&self) -> &Arc<dyn VehicleTelemetry> {
        &self.source
    }
}
