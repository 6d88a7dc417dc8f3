//! Capability settings embedded in bundle ID capability payloads.

use serde::{Deserialize, Serialize};

use super::AllowedInstances;

/// One selectable option of a capability setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_by_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_wildcard: Option<bool>,
}

/// A configurable setting of a capability (e.g. the iCloud version).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_by_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_instances: Option<AllowedInstances>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_instances: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CapabilityOption>,
}

impl CapabilitySetting {
    /// A setting selecting the given option keys, as sent when enabling a
    /// capability.
    #[must_use]
    pub fn with_enabled_options<I, S>(key: impl Into<String>, option_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: Some(key.into()),
            options: option_keys
                .into_iter()
                .map(|option| CapabilityOption {
                    key: Some(option.into()),
                    enabled: Some(true),
                    ..CapabilityOption::default()
                })
                .collect(),
            ..Self::default()
        }
    }

    /// Keys of the options marked enabled.
    #[must_use]
    pub fn enabled_option_keys(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.enabled == Some(true))
            .filter_map(|o| o.key.as_deref())
            .collect()
    }
}
