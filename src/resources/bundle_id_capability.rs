//! Bundle ID capability resource.

use serde::{Deserialize, Serialize};

use crate::jsonapi::{Attributes, Item, Relationship, RequestEnvelope, Resource, ResourceReference};

use super::common::{CapabilitySetting, CapabilityType};

/// A decoded `bundleIdCapabilities` resource.
pub type BundleIdCapability = Resource<BundleIdCapabilityAttributes>;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BundleIdCapabilityAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_type: Option<CapabilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<CapabilitySetting>>,
}

impl BundleIdCapabilityAttributes {
    /// Looks up a setting by key.
    #[must_use]
    pub fn setting(&self, key: &str) -> Option<&CapabilitySetting> {
        self.settings
            .as_deref()?
            .iter()
            .find(|s| s.key.as_deref() == Some(key))
    }
}

impl Attributes for BundleIdCapabilityAttributes {
    const TYPE: &'static str = "bundleIdCapabilities";

    fn wrap(resource: Resource<Self>) -> Item {
        Item::BundleIdCapability(resource)
    }

    fn unwrap(item: &Item) -> Option<&Resource<Self>> {
        match item {
            Item::BundleIdCapability(capability) => Some(capability),
            _ => None,
        }
    }
}

/// Attributes of a capability enable request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BundleIdCapabilityCreateAttributes {
    pub capability_type: CapabilityType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub settings: Vec<CapabilitySetting>,
}

impl RequestEnvelope<BundleIdCapabilityCreateAttributes> {
    /// A request enabling `capability_type` on bundle ID `bundle_id`.
    #[must_use]
    pub fn enable_capability(
        bundle_id: &str,
        capability_type: CapabilityType,
        settings: Vec<CapabilitySetting>,
    ) -> Self {
        Self::new(
            BundleIdCapabilityAttributes::TYPE,
            BundleIdCapabilityCreateAttributes {
                capability_type,
                settings,
            },
        )
        .with_relationship(
            "bundleId",
            Relationship::to_one_ref(ResourceReference::new("bundleIds", bundle_id)),
        )
    }
}
