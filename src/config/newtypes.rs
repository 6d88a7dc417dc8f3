//! Validated newtype wrappers for configuration values.
//!
//! Invalid values are rejected on construction with a [`ConfigError`].

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated API base URL.
///
/// The URL must use the `http` or `https` scheme and carry a host. A trailing
/// slash is trimmed so path segments can be appended uniformly.
///
/// # Example
///
/// ```rust
/// use appstore_connect::BaseUrl;
///
/// let url = BaseUrl::new("https://api.appstoreconnect.apple.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.appstoreconnect.apple.com");
/// assert_eq!(url.host_name(), "api.appstoreconnect.apple.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The production App Store Connect API host.
    pub const DEFAULT: &'static str = "https://api.appstoreconnect.apple.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no supported
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        if !matches!(&url[..scheme_end], "http" | "https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            host_start: "https://".len(),
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// An inclusive range of HTTP status codes treated as success.
///
/// # Example
///
/// ```rust
/// use appstore_connect::StatusRange;
///
/// let range = StatusRange::default();
/// assert!(range.contains(204));
/// assert!(!range.contains(409));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusRange {
    start: u16,
    end: u16,
}

impl StatusRange {
    /// Creates a new validated status range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStatusRange`] if either bound is outside
    /// `100..=599` or `start > end`.
    pub const fn new(start: u16, end: u16) -> Result<Self, ConfigError> {
        if start < 100 || end > 599 || start > end {
            return Err(ConfigError::InvalidStatusRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns `true` if `status` lies within the range.
    #[must_use]
    pub const fn contains(&self, status: u16) -> bool {
        self.start <= status && status <= self.end
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn start(&self) -> u16 {
        self.start
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn end(&self) -> u16 {
        self.end
    }
}

impl Default for StatusRange {
    fn default() -> Self {
        Self {
            start: 200,
            end: 299,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let url = BaseUrl::new("https://example.com/").unwrap();
        assert_eq!(url.as_ref(), "https://example.com");
        assert_eq!(url.host_name(), "example.com");
    }

    #[test]
    fn test_base_url_keeps_port_and_path() {
        let url = BaseUrl::new("http://localhost:8080/mock").unwrap();
        assert_eq!(url.host_name(), "localhost");
        assert_eq!(url.as_ref(), "http://localhost:8080/mock");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("").is_err());
        assert!(BaseUrl::new("api.appstoreconnect.apple.com").is_err());
        assert!(BaseUrl::new("ftp://example.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("https://example.com?x=1").is_err());
    }

    #[test]
    fn test_base_url_default_matches_constant() {
        let url = BaseUrl::default();
        assert_eq!(url, BaseUrl::new(BaseUrl::DEFAULT).unwrap());
        assert_eq!(url.host_name(), "api.appstoreconnect.apple.com");
    }

    #[test]
    fn test_base_url_serde_round_trip() {
        let url = BaseUrl::new("https://example.com").unwrap();
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#""https://example.com""#);
        let restored: BaseUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, url);

        let bad: Result<BaseUrl, _> = serde_json::from_str(r#""nope""#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_status_range_validation() {
        assert!(StatusRange::new(200, 299).is_ok());
        assert!(StatusRange::new(200, 200).is_ok());
        assert!(matches!(
            StatusRange::new(300, 200),
            Err(ConfigError::InvalidStatusRange { start: 300, end: 200 })
        ));
        assert!(StatusRange::new(99, 200).is_err());
        assert!(StatusRange::new(200, 600).is_err());
    }

    #[test]
    fn test_status_range_contains_bounds() {
        let range = StatusRange::new(200, 204).unwrap();
        assert!(range.contains(200));
        assert!(range.contains(204));
        assert!(!range.contains(205));
        assert!(!range.contains(199));
    }
}
