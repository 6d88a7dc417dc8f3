//! Integration tests for request documents, list queries and endpoint URLs.

use appstore_connect::jsonapi::{
    ItemResponse, ListQuery, Relationship, RequestEnvelope, ResourceReference,
};
use appstore_connect::resources::common::{
    CapabilitySetting, CapabilityType, CertificateType, DeviceStatus, Platform, ProfileType,
};
use appstore_connect::resources::{
    BundleIdCapabilityCreateAttributes, DeviceAttributes, DeviceUpdateAttributes, Profile,
    ProfileAttributes,
};
use appstore_connect::{ApiVersion, BaseUrl, ConnectConfig};
use serde_json::json;

// =============================================================================
// Request Document Tests
// =============================================================================

#[test]
fn test_create_profile_encodes_to_one_as_array() {
    let request = RequestEnvelope::create_profile(
        "Store Profile",
        ProfileType::IosAppStore,
        "B1",
        &["C1", "C2"],
        &[],
    );

    let value: serde_json::Value = serde_json::from_slice(&request.to_vec().unwrap()).unwrap();
    let relationships = &value["data"]["relationships"];

    assert_eq!(relationships["bundleId"]["data"], json!([{"type": "bundleIds", "id": "B1"}]));
    assert_eq!(relationships["certificates"]["data"].as_array().unwrap().len(), 2);
    assert_eq!(relationships["devices"]["data"], json!([]));
    assert!(value["data"].get("id").is_none());
}

#[test]
fn test_for_kind_uses_registered_discriminator() {
    let attrs = DeviceAttributes {
        name: Some("Lab Mac".to_string()),
        platform: Some(Platform::MacOs),
        ..DeviceAttributes::default()
    };

    let request = RequestEnvelope::for_kind(attrs).with_id("D5");

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"data": {
            "type": "devices",
            "id": "D5",
            "attributes": {"name": "Lab Mac", "platform": "MAC_OS"}
        }})
    );
}

#[test]
fn test_update_device_request() {
    let request = RequestEnvelope::update_device(
        "D1",
        DeviceUpdateAttributes {
            name: Some("Retired".to_string()),
            status: Some(DeviceStatus::Disabled),
        },
    );

    assert_eq!(
        serde_json::to_value(&request).unwrap()["data"]["attributes"],
        json!({"name": "Retired", "status": "DISABLED"})
    );
}

#[test]
fn test_enable_capability_with_settings() {
    let request = RequestEnvelope::enable_capability(
        "B1",
        CapabilityType::DataProtection,
        vec![CapabilitySetting::with_enabled_options(
            "DATA_PROTECTION_PERMISSION_LEVEL",
            ["COMPLETE_PROTECTION"],
        )],
    );

    let decoded: RequestEnvelope<BundleIdCapabilityCreateAttributes> =
        serde_json::from_slice(&request.to_vec().unwrap()).unwrap();
    assert_eq!(decoded, request);

    let attributes = decoded.data.attributes.unwrap();
    assert_eq!(attributes.capability_type, CapabilityType::DataProtection);
    assert_eq!(
        attributes.settings[0].enabled_option_keys(),
        ["COMPLETE_PROTECTION"]
    );
}

#[test]
fn test_certificate_request_and_null_relationship() {
    let request = RequestEnvelope::create_certificate("MIIC...", CertificateType::DeveloperIdApplication)
        .with_relationship("passTypeId", Relationship::null());

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["data"]["attributes"]["certificateType"], "DEVELOPER_ID_APPLICATION");
    assert_eq!(value["data"]["relationships"]["passTypeId"], json!({"data": null}));
}

#[test]
fn test_built_resource_decodes_back() {
    let profile = Profile::new(
        "P1",
        ProfileAttributes {
            name: Some("Dev".to_string()),
            profile_type: Some(ProfileType::Unknown("VISIONOS_APP_DEVELOPMENT".to_string())),
            ..ProfileAttributes::default()
        },
    )
    .with_relationship(
        "bundleId",
        Relationship::to_one_ref(ResourceReference::new("bundleIds", "B1")),
    );

    let document = json!({ "data": serde_json::to_value(&profile).unwrap() });
    let response = ItemResponse::from_value(document).unwrap();

    assert_eq!(response.data_as::<Profile>(), Some(&profile));
}

// =============================================================================
// Query and URL Tests
// =============================================================================

#[test]
fn test_list_url_with_query() {
    let config = ConnectConfig::default();
    let query = ListQuery::new()
        .filter("platform", [Platform::Ios.as_str()])
        .fields("profiles", ["name", "profileType"])
        .sort("-expirationDate")
        .limit(200);

    assert_eq!(
        config.list_url("profiles", &query),
        "https://api.appstoreconnect.apple.com/v1/profiles?filter[platform]=IOS&fields[profiles]=name,profileType&sort=-expirationDate&limit=200"
    );
    assert_eq!(
        config.list_url("devices", &ListQuery::new()),
        "https://api.appstoreconnect.apple.com/v1/devices"
    );
}

#[test]
fn test_resource_and_related_urls() {
    let config = ConnectConfig::builder()
        .base_url(BaseUrl::new("https://asc.example.test/").unwrap())
        .api_version(ApiVersion::V2)
        .build()
        .unwrap();

    assert_eq!(config.resource_url("devices", "D 1"), "https://asc.example.test/v2/devices/D%201");
    assert_eq!(
        config.related_url("profiles", "P1", "certificates"),
        "https://asc.example.test/v2/profiles/P1/certificates"
    );
}
