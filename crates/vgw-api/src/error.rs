//! API error types and conversions

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use vgw_conv::ConvError;
use vgw_upstream::UpstreamError;

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - malformed or inapplicable client input
    BadRequest(String),
    /// 405 Method Not Allowed - wrong HTTP verb for the endpoint
    MethodNotAllowed,
    /// 500 Internal Server Error - vendor data violates its own contract
    UpstreamData(String),
    /// 502 Bad Gateway - vendor unreachable or answered outside its contract
    BadGateway(String),
    /// 500 Internal Server Error
    Internal(String),
}

/// Standard error response format
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method_not_allowed",
                "Method Not Allowed".to_string(),
            ),
            ApiError::UpstreamData(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "invalid_upstream_data", msg)
            }
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "bad_gateway", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        // Log errors at appropriate levels
        if status.is_server_error() {
            tracing::error!(error = error_type, %message, "API error");
        } else if status.is_client_error() {
            tracing::debug!(error = error_type, %message, "API client error");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<ConvError> for ApiError {
    fn from(err: ConvError) -> Self {
        let message = err.to_string();
        match err {
            ConvError::IdMustBeNumber
            | ConvError::ActionNotSupported
            | ConvError::NullTankLevel
            | ConvError::NullBatteryLevel => ApiError::BadRequest(message),
            ConvError::InvalidNumberOfDoors
            | ConvError::InvalidDoorStatus
            | ConvError::InvalidDoorRelationship
            | ConvError::InvalidEngineAction
            | ConvError::Envelope(_) => ApiError::UpstreamData(message),
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        ApiError::BadGateway(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let response = ApiError::BadRequest("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = ApiError::UpstreamData("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::BadGateway("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = ApiError::Internal("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_conv_error_classification() {
        // Client-attributable
        assert!(matches!(
            ApiError::from(ConvError::IdMustBeNumber),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(ConvError::ActionNotSupported),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(ConvError::NullTankLevel),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(ConvError::NullBatteryLevel),
            ApiError::BadRequest(_)
        ));

        // Vendor-attributable
        assert!(matches!(
            ApiError::from(ConvError::InvalidNumberOfDoors),
            ApiError::UpstreamData(_)
        ));
        assert!(matches!(
            ApiError::from(ConvError::InvalidDoorStatus),
            ApiError::UpstreamData(_)
        ));
        assert!(matches!(
            ApiError::from(ConvError::InvalidDoorRelationship),
            ApiError::UpstreamData(_)
        ));
        assert!(matches!(
            ApiError::from(ConvError::InvalidEngineAction),
            ApiError::UpstreamData(_)
        ));
        assert!(matches!(
            ApiError::from(ConvError::Envelope("bad".into())),
            ApiError::UpstreamData(_)
        ));
    }

    #[test]
    fn test_conv_error_message_is_preserved() {
        let ApiError::BadRequest(message) = ApiError::from(ConvError::NullTankLevel) else {
            panic!("expected BadRequest");
        };
        assert_eq!(
            message,
            "You requested the tank level of an electric vehicle.  There is no tank level."
        );
    }

    #[test]
    fn test_upstream_error_is_bad_gateway() {
        assert!(matches!(
            ApiError::from(UpstreamError::status(500)),
            ApiError::BadGateway(_)
        ));
    }
}
