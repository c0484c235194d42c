//! vgw-upstream - Vendor API client for the vehicle gateway
//!
//! Thin outbound plumbing: one POST per logical operation against the
//! vendor's telemetry services, returning the raw response body as text.
//! The [`VehicleTelemetry`] trait is the seam the API layer consumes, so
//! handlers can be exercised against a stub vendor in tests.

pub mod client;
pub mod error;
pub mod source;

pub use client::UpstreamClient;
pub use error::{Result, UpstreamError};
pub use source::VehicleTelemetry;
