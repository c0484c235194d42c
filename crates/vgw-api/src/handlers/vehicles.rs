//! Vehicle telemetry handlers
//!
//! Each handler is the same three mechanical steps: validate the
//! client-supplied pieces, await the one vendor call, convert. All decision
//! logic lives in vgw-conv; errors flow through `?` and become HTTP
//! responses at the ApiError boundary.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use vgw_conv::{
    convert, DoorStatus, EnergyLevel, EngineActionResult, EngineCommand, VehicleId, VehicleInfo,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /vehicles/{id}/engine
#[derive(Debug, Deserialize)]
pub struct EngineRequest {
    pub action: String,
}

/// GET /vehicles/{id}
/// Vehicle identification and body data
pub async fn vehicle_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VehicleInfo>, ApiError> {
    let id = VehicleId::parse(&id)?;
    let raw = state.source().vehicle_info(&id).await?;
    Ok(Json(convert::vehicle_info(&raw)?))
}

/// GET /vehicles/{id}/doors
/// Lock state per door, front-to-back then left-to-right
pub async fn door_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<DoorStatus>>, ApiError> {
    let id = VehicleId::parse(&id)?;
    let raw = state.source().security_status(&id).await?;
    Ok(Json(convert::security_status(&raw)?))
}

/// GET /vehicles/{id}/fuel
/// Tank level percentage
pub async fn fuel_level(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EnergyLevel>, ApiError> {
    let id = VehicleId::parse(&id)?;
    let raw = state.source().energy(&id).await?;
    Ok(Json(convert::fuel_level(&raw)?))
}

/// GET /vehicles/{id}/battery
/// Battery charge percentage
pub async fn battery_level(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EnergyLevel>, ApiError> {
    let id = VehicleId::parse(&id)?;
    let raw = state.source().energy(&id).await?;
    Ok(Json(convert::battery_level(&raw)?))
}

/// POST /vehicles/{id}/engine
/// Start or stop the engine
///
/// The body extractor's rejection is mapped by hand so a malformed JSON
/// body still produces the standard JSON error payload.
pub async fn engine_action(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<EngineRequest>, JsonRejection>,
) -> Result<Json<EngineActionResult>, ApiError> {
    let id = VehicleId::parse(&id)?;
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let command = EngineCommand::parse(&request.action)?;
    let raw = state.source().engine_action(&id, command).await?;
    Ok(Json(convert::engine_action(&raw)?))
}

/// Per-route fallback for verbs the endpoint does not declare
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
