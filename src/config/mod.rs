//! Configuration types for the App Store Connect client layer.
//!
//! - [`ConnectConfig`]: base URL, API version and success status range
//! - [`ConnectConfigBuilder`]: fluent builder for [`ConnectConfig`]
//! - [`BaseUrl`], [`StatusRange`], [`ApiVersion`]: validated values
//!
//! The configuration builds request URLs for the transport collaborator and
//! decides which status codes are decoded as documents versus failures.
//!
//! # Example
//!
//! ```rust
//! use appstore_connect::{ApiVersion, ConnectConfig};
//!
//! let config = ConnectConfig::builder()
//!     .api_version(ApiVersion::V1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.resource_url("profiles", "ABC123"),
//!     "https://api.appstoreconnect.apple.com/v1/profiles/ABC123"
//! );
//! ```

mod newtypes;
mod version;

pub use newtypes::{BaseUrl, StatusRange};
pub use version::ApiVersion;

use urlencoding::encode;

use crate::error::ConfigError;
use crate::jsonapi::{ApiError, ItemResponse, ListQuery, ListResponse, RawResponse};

/// Configuration shared by request building and response decoding.
///
/// `ConnectConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct ConnectConfig {
    base_url: BaseUrl,
    api_version: ApiVersion,
    success_statuses: StatusRange,
}

impl ConnectConfig {
    /// Creates a new builder for constructing a `ConnectConfig`.
    #[must_use]
    pub fn builder() -> ConnectConfigBuilder {
        ConnectConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the status range decoded as success.
    #[must_use]
    pub const fn success_statuses(&self) -> &StatusRange {
        &self.success_statuses
    }

    /// URL of a resource collection, e.g. `.../v1/bundleIds`.
    #[must_use]
    pub fn collection_url(&self, resource_type: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.api_version, resource_type)
    }

    /// URL of a single resource, e.g. `.../v1/devices/{id}`.
    #[must_use]
    pub fn resource_url(&self, resource_type: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(resource_type), encode(id))
    }

    /// URL of a related-resource endpoint, e.g. `.../v1/profiles/{id}/devices`.
    #[must_use]
    pub fn related_url(&self, resource_type: &str, id: &str, relationship: &str) -> String {
        format!("{}/{}", self.resource_url(resource_type, id), relationship)
    }

    /// Collection URL with a rendered query string appended, if any.
    #[must_use]
    pub fn list_url(&self, resource_type: &str, query: &ListQuery) -> String {
        let url = self.collection_url(resource_type);
        if query.is_empty() {
            url
        } else {
            format!("{url}?{}", query.to_query_string())
        }
    }

    /// Decodes a single-resource response using the configured success range.
    ///
    /// # Errors
    ///
    /// See [`RawResponse::decode_item`].
    pub fn decode_item(&self, response: &RawResponse) -> Result<ItemResponse, ApiError> {
        response.decode_item(&self.success_statuses)
    }

    /// Decodes a list response using the configured success range.
    ///
    /// # Errors
    ///
    /// See [`RawResponse::decode_list`].
    pub fn decode_list(&self, response: &RawResponse) -> Result<ListResponse, ApiError> {
        response.decode_list(&self.success_statuses)
    }

    /// Checks a body-less response (e.g. `204` on delete).
    ///
    /// # Errors
    ///
    /// See [`RawResponse::decode_empty`].
    pub fn decode_empty(&self, response: &RawResponse) -> Result<(), ApiError> {
        response.decode_empty(&self.success_statuses)
    }
}

// Verify ConnectConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConnectConfig>();
};

/// Builder for constructing [`ConnectConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: [`BaseUrl::DEFAULT`]
/// - `api_version`: [`ApiVersion::latest()`]
/// - `success_statuses`: `200..=299`
///
/// # Example
///
/// ```rust
/// use appstore_connect::{BaseUrl, ConnectConfig, StatusRange};
///
/// let config = ConnectConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
///     .success_statuses(StatusRange::new(200, 201).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.collection_url("devices"), "http://localhost:8080/v1/devices");
/// ```
#[derive(Debug, Default)]
pub struct ConnectConfigBuilder {
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    success_statuses: Option<StatusRange>,
}

impl ConnectConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the status range decoded as success.
    #[must_use]
    pub const fn success_statuses(mut self, range: StatusRange) -> Self {
        self.success_statuses = Some(range);
        self
    }

    /// Builds the [`ConnectConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if a custom API version is
    /// not of the form `v<number>`.
    pub fn build(self) -> Result<ConnectConfig, ConfigError> {
        let api_version = self.api_version.unwrap_or_else(ApiVersion::latest);
        api_version.validate()?;

        Ok(ConnectConfig {
            base_url: self.base_url.unwrap_or_default(),
            api_version,
            success_statuses: self.success_statuses.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ConnectConfig::builder().build().unwrap();

        assert_eq!(config.base_url().as_ref(), BaseUrl::DEFAULT);
        assert_eq!(config.api_version(), &ApiVersion::V1);
        assert_eq!(config.success_statuses(), &StatusRange::default());
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = ConnectConfig::builder()
            .base_url(BaseUrl::new("https://mock.local/").unwrap())
            .api_version(ApiVersion::V2)
            .success_statuses(StatusRange::new(200, 204).unwrap())
            .build()
            .unwrap();

        assert_eq!(config.collection_url("apps"), "https://mock.local/v2/apps");
        assert!(!config.success_statuses().contains(205));
    }

    #[test]
    fn test_build_rejects_malformed_custom_version() {
        let result = ConnectConfig::builder()
            .api_version(ApiVersion::Custom("beta".to_string()))
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidApiVersion { ref version }) if version == "beta"
        ));

        let config = ConnectConfig::builder()
            .api_version(ApiVersion::Custom("v3".to_string()))
            .build()
            .unwrap();
        assert_eq!(config.collection_url("apps"), "https://api.appstoreconnect.apple.com/v3/apps");
    }

    #[test]
    fn test_resource_and_related_urls() {
        let config = ConnectConfig::default();

        assert_eq!(
            config.collection_url("bundleIds"),
            "https://api.appstoreconnect.apple.com/v1/bundleIds"
        );
        assert_eq!(
            config.related_url("profiles", "P1", "devices"),
            "https://api.appstoreconnect.apple.com/v1/profiles/P1/devices"
        );
    }

    #[test]
    fn test_resource_url_encodes_id() {
        let config = ConnectConfig::default();
        assert!(config
            .resource_url("devices", "a b/c")
            .ends_with("/devices/a%20b%2Fc"));
    }

    #[test]
    fn test_list_url_appends_query() {
        let config = ConnectConfig::default();
        let query = ListQuery::new().limit(10);

        assert_eq!(
            config.list_url("devices", &query),
            "https://api.appstoreconnect.apple.com/v1/devices?limit=10"
        );
        assert_eq!(
            config.list_url("devices", &ListQuery::new()),
            "https://api.appstoreconnect.apple.com/v1/devices"
        );
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = ConnectConfig::default();
        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());
        assert!(format!("{config:?}").contains("ConnectConfig"));
    }
}
