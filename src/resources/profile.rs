//! Provisioning profile resource.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::jsonapi::{Attributes, Item, Relationship, RequestEnvelope, Resource, ResourceReference};

use super::common::{Platform, ProfileState, ProfileType};
use super::to_many;

/// A decoded `profiles` resource.
pub type Profile = Resource<ProfileAttributes>;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Base64 of the signed `.mobileprovision` file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_state: Option<ProfileState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<ProfileType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
}

impl ProfileAttributes {
    /// Decodes `profileContent` into the raw profile bytes.
    ///
    /// Returns `None` when the content is absent.
    ///
    /// # Errors
    ///
    /// Returns the base64 error if the content is not valid standard base64.
    pub fn decoded_content(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        self.profile_content
            .as_deref()
            .map(|content| STANDARD.decode(content))
    }

    /// Returns `true` if the profile state is `ACTIVE`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.profile_state == Some(ProfileState::Active)
    }
}

impl Attributes for ProfileAttributes {
    const TYPE: &'static str = "profiles";

    fn wrap(resource: Resource<Self>) -> Item {
        Item::Profile(resource)
    }

    fn unwrap(item: &Item) -> Option<&Resource<Self>> {
        match item {
            Item::Profile(profile) => Some(profile),
            _ => None,
        }
    }
}

/// Attributes of a profile create request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCreateAttributes {
    pub name: String,
    pub profile_type: ProfileType,
}

impl RequestEnvelope<ProfileCreateAttributes> {
    /// A create request for a profile bound to a bundle ID, its signing
    /// certificates and (for development and ad hoc profiles) its devices.
    #[must_use]
    pub fn create_profile(
        name: impl Into<String>,
        profile_type: ProfileType,
        bundle_id: &str,
        certificate_ids: &[&str],
        device_ids: &[&str],
    ) -> Self {
        Self::new(
            ProfileAttributes::TYPE,
            ProfileCreateAttributes {
                name: name.into(),
                profile_type,
            },
        )
        .with_relationship(
            "bundleId",
            Relationship::to_one_ref(ResourceReference::new("bundleIds", bundle_id)),
        )
        .with_relationship("certificates", to_many("certificates", certificate_ids))
        .with_relationship("devices", to_many("devices", device_ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_attributes_decode() {
        let attrs: ProfileAttributes = serde_json::from_value(json!({
            "name": "Dev",
            "platform": "IOS",
            "profileContent": "aGVsbG8=",
            "uuid": "6c0d5b4e",
            "createdDate": "2024-01-15T10:00:00.000+00:00",
            "profileState": "ACTIVE",
            "profileType": "IOS_APP_DEVELOPMENT",
            "expirationDate": "2025-01-15T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(attrs.platform, Some(Platform::Ios));
        assert_eq!(attrs.profile_type, Some(ProfileType::IosAppDevelopment));
        assert!(attrs.is_active());
        assert_eq!(attrs.decoded_content().unwrap().unwrap(), b"hello");
        assert!(attrs.expiration_date.unwrap() > attrs.created_date.unwrap());
    }

    #[test]
    fn test_missing_content_and_state() {
        let attrs = ProfileAttributes::default();
        assert!(attrs.decoded_content().is_none());
        assert!(!attrs.is_active());

        let invalid = ProfileAttributes {
            profile_content: Some("not base64!".to_string()),
            profile_state: Some(ProfileState::Invalid),
            ..ProfileAttributes::default()
        };
        assert!(invalid.decoded_content().unwrap().is_err());
        assert!(!invalid.is_active());
    }

    #[test]
    fn test_none_fields_are_omitted() {
        let attrs = ProfileAttributes {
            name: Some("Store".to_string()),
            ..ProfileAttributes::default()
        };
        assert_eq!(serde_json::to_value(&attrs).unwrap(), json!({"name": "Store"}));
    }

    #[test]
    fn test_create_profile_request() {
        let request = RequestEnvelope::create_profile(
            "CI Dev",
            ProfileType::IosAppDevelopment,
            "B1",
            &["C1"],
            &["D1", "D2"],
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"data": {
                "type": "profiles",
                "attributes": {"name": "CI Dev", "profileType": "IOS_APP_DEVELOPMENT"},
                "relationships": {
                    "bundleId": {"data": [{"type": "bundleIds", "id": "B1"}]},
                    "certificates": {"data": [{"type": "certificates", "id": "C1"}]},
                    "devices": {"data": [
                        {"type": "devices", "id": "D1"},
                        {"type": "devices", "id": "D2"}
                    ]}
                }
            }})
        );
    }
}
