//! Bundle ID resource.

use serde::{Deserialize, Serialize};

use crate::jsonapi::{Attributes, Item, RequestEnvelope, Resource};

use super::common::Platform;

/// A decoded `bundleIds` resource.
///
/// Relationships: `profiles`, `bundleIdCapabilities`, `app`.
pub type BundleId = Resource<BundleIdAttributes>;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BundleIdAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Reverse-DNS identifier; may end in `*` for wildcard IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Team prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_id: Option<String>,
}

impl BundleIdAttributes {
    /// Returns `true` for a wildcard identifier such as `com.example.*`.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.identifier.as_deref().is_some_and(|id| id.ends_with('*'))
    }

    /// `{seedId}.{identifier}`, the application identifier used in
    /// entitlements.
    #[must_use]
    pub fn app_id_prefixed(&self) -> Option<String> {
        match (&self.seed_id, &self.identifier) {
            (Some(seed), Some(identifier)) => Some(format!("{seed}.{identifier}")),
            _ => None,
        }
    }
}

impl Attributes for BundleIdAttributes {
    const TYPE: &'static str = "bundleIds";

    fn wrap(resource: Resource<Self>) -> Item {
        Item::BundleId(resource)
    }

    fn unwrap(item: &Item) -> Option<&Resource<Self>> {
        match item {
            Item::BundleId(bundle_id) => Some(bundle_id),
            _ => None,
        }
    }
}

/// Attributes of a bundle ID create request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BundleIdCreateAttributes {
    pub name: String,
    pub platform: Platform,
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_id: Option<String>,
}

/// Attributes of a bundle ID update request. Only the name is writable.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BundleIdUpdateAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RequestEnvelope<BundleIdCreateAttributes> {
    /// A create request for a new bundle ID.
    #[must_use]
    pub fn create_bundle_id(
        name: impl Into<String>,
        platform: Platform,
        identifier: impl Into<String>,
    ) -> Self {
        Self::new(
            BundleIdAttributes::TYPE,
            BundleIdCreateAttributes {
                name: name.into(),
                platform,
                identifier: identifier.into(),
                seed_id: None,
            },
        )
    }
}

impl RequestEnvelope<BundleIdUpdateAttributes> {
    /// An update request renaming bundle ID `id`.
    #[must_use]
    pub fn rename_bundle_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(
            BundleIdAttributes::TYPE,
            BundleIdUpdateAttributes {
                name: Some(name.into()),
            },
        )
        .with_id(id)
    }
}
