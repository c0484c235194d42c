//! HTTP client for the vendor telemetry API
//!
//! The vendor exposes four POST-only services. Every request body is
//! `{"id": <number>, "responseType": "JSON"}`, with engine actions adding
//! `"command": "<START|STOP>_VEHICLE"`. Responses come back as JSON text
//! with all leaf values string-typed; the body is returned verbatim and
//! decoded by the conversion layer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;
use vgw_conv::{EngineCommand, VehicleId};

use crate::error::{Result, UpstreamError};
use crate::source::VehicleTelemetry;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Vendor service endpoints
const VEHICLE_INFO_SERVICE: &str = "/getVehicleInfoService";
const SECURITY_STATUS_SERVICE: &str = "/getSecurityStatusService";
const ENERGY_SERVICE: &str = "/getEnergyService";
const ACTION_ENGINE_SERVICE: &str = "/actionEngineService";

/// Request body for all vendor services
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceRequest {
    id: u64,
    response_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'static str>,
}

impl ServiceRequest {
    fn get(id: &VehicleId) -> Self {
        Self {
            id: id.as_u64(),
            response_type: "JSON",
            command: None,
        }
    }

    fn action(id: &VehicleId, command: EngineCommand) -> Self {
        Self {
            id: id.as_u64(),
            response_type: "JSON",
            command: Some(command.upstream_command()),
        }
    }
}

/// Vendor telemetry API client
///
/// One POST per logical operation; no retries (engine actions are not
/// known to be idempotent upstream).
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: Url,
}

impl UpstreamClient {
    /// Create a new client with default timeouts
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the vendor API (e.g., "http://gmapi.azurewebsites.net")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// POST to a vendor service and return the response body as text
    async fn post_service(&self, service: &str, request: &ServiceRequest) -> Result<String> {
        let url = self.base_url.join(service)?;
        debug!(%url, id = request.id, "calling vendor service");

        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl VehicleTelemetry for UpstreamClient {
    #[instrument(skip(self))]
    async fn vehicle_info(&self, id: &VehicleId) -> Result<String> {
        self.post_service(VEHICLE_INFO_SERVICE, &ServiceRequest::get(id))
            .await
    }

    #[instrument(skip(self))]
    async fn security_status(&self, id: &VehicleId) -> Result<String> {
        self.post_service(SECURITY_STATUS_SERVICE, &ServiceRequest::get(id))
            .await
    }

    #[instrument(skip(self))]
    async fn energy(&self, id: &VehicleId) -> Result<String> {
        self.post_service(ENERGY_SERVICE, &ServiceRequest::get(id))
            .await
    }

    #[instrument(skip(self))]
    async fn engine_action(&self, id: &VehicleId, command: EngineCommand) -> Result<String> {
        self.post_service(ACTION_ENGINE_SERVICE, &ServiceRequest::action(id, command))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_request_body_shape() {
        let id = VehicleId::parse("1234").unwrap();
        let body = serde_json::to_value(ServiceRequest::get(&id)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"id": 1234, "responseType": "JSON"})
        );
    }

    #[test]
    fn test_action_request_body_shape() {
        let id = VehicleId::parse("1234").unwrap();
        let body =
            serde_json::to_value(ServiceRequest::action(&id, EngineCommand::Start)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "id": 1234,
                "responseType": "JSON",
                "command": "START_VEHICLE"
            })
        );
    }

    #[test]
    fn test_base_url_join_keeps_service_paths_absolute() {
        let client = UpstreamClient::new("http://localhost:8080/ignored").unwrap();
        let url = client.base_url().join(VEHICLE_INFO_SERVICE).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/getVehicleInfoService");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(UpstreamClient::new("not a url").is_err());
    }
}
