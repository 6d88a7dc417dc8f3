//! Registered device resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::jsonapi::{Attributes, Item, RequestEnvelope, Resource};

use super::common::{DeviceClass, DeviceStatus, Platform};

/// A decoded `devices` resource.
pub type Device = Resource<DeviceAttributes>;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_class: Option<DeviceClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_date: Option<DateTime<Utc>>,
}

impl DeviceAttributes {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.status == Some(DeviceStatus::Enabled)
    }
}

impl Attributes for DeviceAttributes {
    const TYPE: &'static str = "devices";

    fn wrap(resource: Resource<Self>) -> Item {
        Item::Device(resource)
    }

    fn unwrap(item: &Item) -> Option<&Resource<Self>> {
        match item {
            Item::Device(device) => Some(device),
            _ => None,
        }
    }
}

/// Attributes of a device registration request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCreateAttributes {
    pub name: String,
    pub platform: Platform,
    pub udid: String,
}

/// Attributes of a device update request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUpdateAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceStatus>,
}

impl RequestEnvelope<DeviceCreateAttributes> {
    /// A request registering a device.
    #[must_use]
    pub fn register_device(
        name: impl Into<String>,
        platform: Platform,
        udid: impl Into<String>,
    ) -> Self {
        Self::new(
            DeviceAttributes::TYPE,
            DeviceCreateAttributes {
                name: name.into(),
                platform,
                udid: udid.into(),
            },
        )
    }
}

impl RequestEnvelope<DeviceUpdateAttributes> {
    /// A request updating device `id`.
    #[must_use]
    pub fn update_device(id: impl Into<String>, changes: DeviceUpdateAttributes) -> Self {
        Self::new(DeviceAttributes::TYPE, changes).with_id(id)
    }
}
