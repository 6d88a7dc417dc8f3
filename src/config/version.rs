//! App Store Connect API version definitions.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// App Store Connect API version path segment.
///
/// # Example
///
/// ```rust
/// use appstore_connect::ApiVersion;
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
/// assert_eq!(ApiVersion::latest().to_string(), "v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// `/v1`, home of the provisioning resources.
    #[default]
    V1,
    /// `/v2`
    V2,
    /// Any other `v<number>` segment.
    Custom(String),
}

impl ApiVersion {
    /// Returns the version the provisioning endpoints are served under.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1
    }

    /// Checks that a [`ApiVersion::Custom`] segment has the `v<number>` form.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] for a malformed custom
    /// segment such as `Custom("latest")`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Custom(s) if !Self::is_valid_version_format(s) => {
                Err(ConfigError::InvalidApiVersion { version: s.clone() })
            }
            _ => Ok(()),
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        s.strip_prefix('v')
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            _ if Self::is_valid_version_format(&s) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
