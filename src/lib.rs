//! # App Store Connect API Rust SDK
//!
//! Typed decoding of App Store Connect JSON:API documents: polymorphic
//! resources, relationship linkage, the `included` pool, paging metadata and
//! structured error responses. Transport is left to the caller; this crate
//! turns a status code and body bytes into typed values and back.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Endpoint configuration via [`ConnectConfig`] and [`ConnectConfigBuilder`]
//! - Polymorphic resource decoding via [`jsonapi::Item`] and a closed
//!   discriminator [`jsonapi::registry`]
//! - Three-state relationship linkage via [`jsonapi::Relationship`]
//! - Response envelopes with typed filtering of the `included` pool
//! - Structured non-success responses via [`jsonapi::ApiFailure`]
//! - Request documents and list queries via [`jsonapi::RequestEnvelope`] and
//!   [`jsonapi::ListQuery`]
//! - Typed attributes for profiles, bundle IDs, capabilities, certificates
//!   and devices in [`resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use appstore_connect::{ApiVersion, ConnectConfig};
//! use appstore_connect::jsonapi::{ListQuery, RawResponse};
//! use appstore_connect::resources::{BundleId, Profile};
//!
//! let config = ConnectConfig::builder()
//!     .api_version(ApiVersion::V1)
//!     .build()
//!     .unwrap();
//!
//! let url = config.list_url("profiles", &ListQuery::new().include(["bundleId"]));
//! assert_eq!(url, "https://api.appstoreconnect.apple.com/v1/profiles?include=bundleId");
//!
//! // Bytes returned by any HTTP client.
//! let body = r#"{
//!     "data": [{
//!         "type": "profiles",
//!         "id": "P1",
//!         "attributes": {"name": "Dev"},
//!         "relationships": {"bundleId": {"data": {"type": "bundleIds", "id": "B1"}}}
//!     }],
//!     "included": [{"type": "bundleIds", "id": "B1", "attributes": {"identifier": "com.example"}}]
//! }"#;
//!
//! let response = config.decode_list(&RawResponse::new(200, body)).unwrap();
//! let profile = response.data_as::<Profile>()[0];
//! let bundle_ref = profile.relationship("bundleId").unwrap().to_one().unwrap();
//! assert_eq!(bundle_ref.id, "B1");
//!
//! let bundle_id = response.first_included::<BundleId>().unwrap();
//! assert_eq!(bundle_id.attributes.identifier.as_deref(), Some("com.example"));
//! ```
//!
//! ## Error Responses
//!
//! ```rust
//! use appstore_connect::ConnectConfig;
//! use appstore_connect::jsonapi::{ApiError, RawResponse};
//!
//! let body = r#"{"errors": [{"status": "404", "code": "NOT_FOUND", "detail": "No profile"}]}"#;
//! let error = ConnectConfig::default()
//!     .decode_item(&RawResponse::new(404, body))
//!     .unwrap_err();
//!
//! let failure = error.as_failure().unwrap();
//! assert_eq!(failure.status(), 404);
//! assert_eq!(failure.to_string(), "HTTP 404: NOT_FOUND: No profile");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`; decoding shares nothing
//! - **Lossless**: Unknown resource kinds and enumeration values survive a
//!   decode/encode cycle

pub mod config;
pub mod error;
pub mod jsonapi;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{ApiVersion, BaseUrl, ConnectConfig, ConnectConfigBuilder, StatusRange};
pub use error::ConfigError;
