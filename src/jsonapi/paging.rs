//! Paging metadata of list responses (`meta.paging`).

use serde::{de, Deserialize, Deserializer, Serialize};

/// Sentinel `limit` used when the server sent none: the largest 32-bit
/// signed value, meaning "server default applies".
pub const NO_EXPLICIT_LIMIT: u32 = i32::MAX.unsigned_abs();

/// Total count and page size of a list response.
///
/// # Example
///
/// ```rust
/// use appstore_connect::jsonapi::{PagingInfo, NO_EXPLICIT_LIMIT};
///
/// let paging: PagingInfo = serde_json::from_str("{}").unwrap();
/// assert_eq!(paging.total, 0);
/// assert_eq!(paging.limit, NO_EXPLICIT_LIMIT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingInfo {
    /// Total number of resources across all pages.
    #[serde(default)]
    pub total: u64,
    /// Page size; [`NO_EXPLICIT_LIMIT`] when absent. Never zero.
    #[serde(default = "default_limit", deserialize_with = "positive_limit")]
    pub limit: u32,
}

const fn default_limit() -> u32 {
    NO_EXPLICIT_LIMIT
}

fn positive_limit<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match u32::deserialize(deserializer)? {
        0 => Err(de::Error::invalid_value(
            de::Unexpected::Unsigned(0),
            &"a positive page size",
        )),
        limit => Ok(limit),
    }
}

impl PagingInfo {
    /// Returns `true` if the server sent a `limit`.
    #[must_use]
    pub const fn has_explicit_limit(&self) -> bool {
        self.limit != NO_EXPLICIT_LIMIT
    }
}

impl Default for PagingInfo {
    fn default() -> Self {
        Self {
            total: 0,
            limit: NO_EXPLICIT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_use_defaults() {
        let paging: PagingInfo = serde_json::from_value(json!({})).unwrap();
        assert_eq!(paging, PagingInfo::default());
        assert_eq!(paging.limit, 2_147_483_647);
        assert!(!paging.has_explicit_limit());
    }

    #[test]
    fn test_explicit_values() {
        let paging: PagingInfo = serde_json::from_value(json!({"total": 5, "limit": 50})).unwrap();
        assert_eq!(paging.total, 5);
        assert_eq!(paging.limit, 50);
        assert!(paging.has_explicit_limit());
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let result: Result<PagingInfo, _> = serde_json::from_value(json!({"total": 1, "limit": 0}));
        assert!(result.is_err());

        let paging: PagingInfo = serde_json::from_value(json!({"limit": 1})).unwrap();
        assert_eq!(paging.limit, 1);
    }

    #[test]
    fn test_negative_total_is_rejected() {
        let result: Result<PagingInfo, _> = serde_json::from_value(json!({"total": -1}));
        assert!(result.is_err());
    }
}
