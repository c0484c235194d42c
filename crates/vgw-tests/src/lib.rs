//! Integration tests for the vehicle gateway
//!
//! This crate contains end-to-end tests that exercise the full stack:
//! - Public HTTP API layer
//! - Vendor client (real HTTP over loopback)
//! - Conversion layer
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vgw-tests
//! ```
//!
//! # Test Structure
//!
//! - `e2e_test.rs` - Full stack tests against an in-process mock vendor

// This crate only contains tests, no library code
