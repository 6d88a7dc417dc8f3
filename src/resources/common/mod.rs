//! Open string enumerations shared by the resource payloads.
//!
//! The server may add values at any time, so each enumeration keeps an
//! `Unknown(raw)` member: unrecognized values decode without error and
//! re-encode byte-for-byte.
//!
//! # Example
//!
//! ```rust
//! use appstore_connect::resources::common::ProfileType;
//!
//! let known: ProfileType = serde_json::from_str(r#""IOS_APP_STORE""#).unwrap();
//! assert_eq!(known, ProfileType::IosAppStore);
//!
//! let future: ProfileType = serde_json::from_str(r#""VISIONOS_APP_STORE""#).unwrap();
//! assert_eq!(future, ProfileType::Unknown("VISIONOS_APP_STORE".to_string()));
//! assert_eq!(serde_json::to_string(&future).unwrap(), r#""VISIONOS_APP_STORE""#);
//! ```

mod capability;

pub use capability::{CapabilityOption, CapabilitySetting};

/// Declares an open enumeration backed by wire strings.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value not known to this crate, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// All known values, in declaration order.
            pub const KNOWN: &'static [Self] = &[$( Self::$variant, )+];

            /// The wire representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown(raw) => raw,
                }
            }

            /// Returns `true` for values not known to this crate.
            #[must_use]
            pub const fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $( $wire => Self::$variant, )+
                    _ => Self::Unknown(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

open_enum! {
    /// Platform of a bundle ID, certificate or device.
    pub enum Platform {
        Ios => "IOS",
        MacOs => "MAC_OS",
        Universal => "UNIVERSAL",
        Services => "SERVICES",
    }
}

open_enum! {
    /// Validity state of a provisioning profile.
    pub enum ProfileState {
        Active => "ACTIVE",
        Invalid => "INVALID",
    }
}

open_enum! {
    /// Kind of provisioning profile.
    pub enum ProfileType {
        IosAppDevelopment => "IOS_APP_DEVELOPMENT",
        IosAppStore => "IOS_APP_STORE",
        IosAppAdhoc => "IOS_APP_ADHOC",
        IosAppInhouse => "IOS_APP_INHOUSE",
        MacAppDevelopment => "MAC_APP_DEVELOPMENT",
        MacAppStore => "MAC_APP_STORE",
        MacAppDirect => "MAC_APP_DIRECT",
        TvosAppDevelopment => "TVOS_APP_DEVELOPMENT",
        TvosAppStore => "TVOS_APP_STORE",
        TvosAppAdhoc => "TVOS_APP_ADHOC",
        TvosAppInhouse => "TVOS_APP_INHOUSE",
        MacCatalystAppDevelopment => "MAC_CATALYST_APP_DEVELOPMENT",
        MacCatalystAppStore => "MAC_CATALYST_APP_STORE",
        MacCatalystAppDirect => "MAC_CATALYST_APP_DIRECT",
    }
}

open_enum! {
    /// Kind of signing certificate.
    pub enum CertificateType {
        IosDevelopment => "IOS_DEVELOPMENT",
        IosDistribution => "IOS_DISTRIBUTION",
        MacAppDistribution => "MAC_APP_DISTRIBUTION",
        MacInstallerDistribution => "MAC_INSTALLER_DISTRIBUTION",
        MacAppDevelopment => "MAC_APP_DEVELOPMENT",
        DeveloperIdKext => "DEVELOPER_ID_KEXT",
        DeveloperIdApplication => "DEVELOPER_ID_APPLICATION",
        Development => "DEVELOPMENT",
        Distribution => "DISTRIBUTION",
        PassTypeId => "PASS_TYPE_ID",
        PassTypeIdWithNfc => "PASS_TYPE_ID_WITH_NFC",
    }
}

open_enum! {
    /// Hardware class of a registered device.
    pub enum DeviceClass {
        AppleWatch => "APPLE_WATCH",
        Ipad => "IPAD",
        Iphone => "IPHONE",
        Ipod => "IPOD",
        AppleTv => "APPLE_TV",
        Mac => "MAC",
    }
}

open_enum! {
    /// Whether a registered device can be used for provisioning.
    pub enum DeviceStatus {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

open_enum! {
    /// App capability enabled on a bundle ID.
    pub enum CapabilityType {
        Icloud => "ICLOUD",
        InAppPurchase => "IN_APP_PURCHASE",
        GameCenter => "GAME_CENTER",
        PushNotifications => "PUSH_NOTIFICATIONS",
        Wallet => "WALLET",
        InterAppAudio => "INTER_APP_AUDIO",
        Maps => "MAPS",
        AssociatedDomains => "ASSOCIATED_DOMAINS",
        PersonalVpn => "PERSONAL_VPN",
        AppGroups => "APP_GROUPS",
        Healthkit => "HEALTHKIT",
        Homekit => "HOMEKIT",
        WirelessAccessoryConfiguration => "WIRELESS_ACCESSORY_CONFIGURATION",
        ApplePay => "APPLE_PAY",
        DataProtection => "DATA_PROTECTION",
        Sirikit => "SIRIKIT",
        NetworkExtensions => "NETWORK_EXTENSIONS",
        Multipath => "MULTIPATH",
        HotSpot => "HOT_SPOT",
        NfcTagReading => "NFC_TAG_READING",
        Classkit => "CLASSKIT",
        AutofillCredentialProvider => "AUTOFILL_CREDENTIAL_PROVIDER",
        AccessWifiInformation => "ACCESS_WIFI_INFORMATION",
        NetworkCustomProtocol => "NETWORK_CUSTOM_PROTOCOL",
        CoremediaHlsLowLatency => "COREMEDIA_HLS_LOW_LATENCY",
        SystemExtensionInstall => "SYSTEM_EXTENSION_INSTALL",
        UserManagement => "USER_MANAGEMENT",
        AppleIdAuth => "APPLE_ID_AUTH",
    }
}

open_enum! {
    /// How many instances of a capability setting may be configured.
    pub enum AllowedInstances {
        Entry => "ENTRY",
        Single => "SINGLE",
        Multiple => "MULTIPLE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_round_trip() {
        for platform in Platform::KNOWN {
            let json = serde_json::to_string(platform).unwrap();
            let restored: Platform = serde_json::from_str(&json).unwrap();
            assert_eq!(&restored, platform);
            assert!(!restored.is_unknown());
        }
    }

    #[test]
    fn test_unknown_value_is_preserved() {
        let status: DeviceStatus = serde_json::from_str(r#""PROCESSING""#).unwrap();
        assert!(status.is_unknown());
        assert_eq!(status.as_str(), "PROCESSING");
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""PROCESSING""#);
    }

    #[test]
    fn test_values_are_case_sensitive() {
        assert_eq!(DeviceClass::from("iphone"), DeviceClass::Unknown("iphone".into()));
        assert_eq!(DeviceClass::from("IPHONE"), DeviceClass::Iphone);
    }

    #[test]
    fn test_display_matches_wire() {
        assert_eq!(CertificateType::DeveloperIdApplication.to_string(), "DEVELOPER_ID_APPLICATION");
        assert_eq!(CapabilityType::AppleIdAuth.to_string(), "APPLE_ID_AUTH");
        assert_eq!(ProfileState::Unknown("X".into()).to_string(), "X");
    }

    #[test]
    fn test_non_string_is_rejected() {
        let result: Result<ProfileType, _> = serde_json::from_str("3");
        assert!(result.is_err());
    }
}
