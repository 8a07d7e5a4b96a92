//! Integration tests for Axis Core.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p axis-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart_flows` - Cart arithmetic against the real catalog
//! - `storefront_shopper_journey` - Session, view, and theme scenarios
//! - `storefront_copy_generation` - Copy slot lifecycle and fallback copy
//!
//! All tests run against the crate APIs directly; no server or network
//! access is required.

use std::net::{IpAddr, Ipv4Addr};

use axis_storefront::config::StorefrontConfig;

/// A storefront configuration for tests: loopback address, no Sentry, no
/// copy generation credentials.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        copy: None,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}
