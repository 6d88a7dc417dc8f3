//! Error types for crate configuration.
//!
//! Decode and protocol failures live in [`crate::jsonapi`]; this module only
//! covers values rejected while building a [`ConnectConfig`](crate::ConnectConfig).
//!
//! # Example
//!
//! ```rust
//! use appstore_connect::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during configuration.
///
/// Each variant carries the rejected value so the message is actionable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an http(s) URL such as 'https://api.appstoreconnect.apple.com'.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'v<number>' (e.g., 'v1').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Success status range is invalid.
    #[error("Invalid status range {start}..={end}. Bounds must lie within 100..=599 and start must not exceed end.")]
    InvalidStatusRange {
        /// Lower bound that was provided.
        start: u16,
        /// Upper bound that was provided.
        end: u16,
    },
}
