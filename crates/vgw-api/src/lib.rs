//! vgw-api - Public REST API layer for the vehicle gateway
//!
//! This crate provides the HTTP adapter over the VehicleTelemetry trait:
//! five public routes, a health probe, and the error boundary that turns
//! typed conversion/transport errors into JSON responses. It holds no logic
//! of its own — validation and conversion live in vgw-conv.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use vgw_api::{create_router, AppState};
//! use vgw_upstream::UpstreamClient;
//!
//! let source = Arc::new(UpstreamClient::new("http://gmapi.azurewebsites.net")?);
//! let router = create_router(AppState::new(source));
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::vehicles;

/// Create the gateway REST API router with the given application state.
///
/// Each route declares its one allowed method; any other verb falls through
/// to the method_not_allowed handler so the 405 carries the same JSON error
/// body as every other failure.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Vehicle telemetry routes
        .route(
            "/vehicles/{id}",
            get(vehicles::vehicle_info).fallback(vehicles::method_not_allowed),
        )
        .route(
            "/vehicles/{id}/doors",
            get(vehicles::door_status).fallback(vehicles::method_not_allowed),
        )
        .route(
            "/vehicles/{id}/fuel",
            get(vehicles::fuel_level).fallback(vehicles::method_not_allowed),
        )
        .route(
            "/vehicles/{id}/battery",
            get(vehicles::battery_level).fallback(vehicles::method_not_allowed),
        )
        .route(
            "/vehicles/{id}/engine",
            post(vehicles::engine_action).fallback(vehicles::method_not_allowed),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
