//! Discriminator to decoder table.
//!
//! The set of known resource kinds is closed: the table below is a `static`
//! built at compile time and never modified. Any discriminator not in it
//! resolves to the generic decoder, which keeps the resource as sent.

use super::errors::DecodeError;
use super::item::{Attributes, Item, RawResource};
use crate::resources::{
    BundleIdAttributes, BundleIdCapabilityAttributes, CertificateAttributes, DeviceAttributes,
    ProfileAttributes,
};

type DecodeFn = fn(RawResource) -> Result<Item, DecodeError>;

/// Builds one [`Item`] variant from a split resource object.
#[derive(Clone, Copy)]
pub struct VariantDecoder {
    resource_type: Option<&'static str>,
    decode: DecodeFn,
}

impl VariantDecoder {
    const fn known<A: Attributes>() -> Self {
        Self {
            resource_type: Some(A::TYPE),
            decode: decode_known::<A>,
        }
    }

    const GENERIC: Self = Self {
        resource_type: None,
        decode: decode_generic,
    };

    /// The discriminator this decoder is registered for; `None` for the
    /// generic fallback.
    #[must_use]
    pub const fn resource_type(&self) -> Option<&'static str> {
        self.resource_type
    }

    /// Returns `true` for the fallback decoder.
    #[must_use]
    pub const fn is_generic(&self) -> bool {
        self.resource_type.is_none()
    }

    /// Decodes `raw` into this decoder's variant.
    ///
    /// # Errors
    ///
    /// Known-kind decoders fail with [`DecodeError::Attributes`] when the
    /// payload does not fit; the generic decoder never fails.
    pub fn decode(&self, raw: RawResource) -> Result<Item, DecodeError> {
        (self.decode)(raw)
    }
}

impl std::fmt::Debug for VariantDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantDecoder")
            .field("resource_type", &self.resource_type)
            .finish_non_exhaustive()
    }
}

fn decode_known<A: Attributes>(raw: RawResource) -> Result<Item, DecodeError> {
    raw.into_resource::<A>().map(A::wrap)
}

#[allow(clippy::unnecessary_wraps)]
fn decode_generic(raw: RawResource) -> Result<Item, DecodeError> {
    tracing::trace!(
        resource_type = %raw.resource_type,
        id = %raw.id,
        "unregistered resource type, keeping generic"
    );
    Ok(Item::Generic(raw.into_generic()))
}

static REGISTRY: [VariantDecoder; 5] = [
    VariantDecoder::known::<ProfileAttributes>(),
    VariantDecoder::known::<BundleIdAttributes>(),
    VariantDecoder::known::<BundleIdCapabilityAttributes>(),
    VariantDecoder::known::<CertificateAttributes>(),
    VariantDecoder::known::<DeviceAttributes>(),
];

/// Returns the decoder for `discriminator`, or the generic decoder.
#[must_use]
pub fn lookup(discriminator: &str) -> VariantDecoder {
    REGISTRY
        .iter()
        .find(|decoder| decoder.resource_type == Some(discriminator))
        .copied()
        .unwrap_or(VariantDecoder::GENERIC)
}

/// All registered discriminators, in registration order.
pub fn known_types() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().filter_map(|decoder| decoder.resource_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_are_registered() {
        let types: Vec<_> = known_types().collect();
        assert_eq!(
            types,
            ["profiles", "bundleIds", "bundleIdCapabilities", "certificates", "devices"]
        );
        for resource_type in types {
            let decoder = lookup(resource_type);
            assert_eq!(decoder.resource_type(), Some(resource_type));
            assert!(!decoder.is_generic());
        }
    }

    #[test]
    fn test_unknown_type_resolves_to_generic() {
        assert!(lookup("apps").is_generic());
        assert!(lookup("").is_generic());
        // Discriminators are case-sensitive.
        assert!(lookup("Profiles").is_generic());
    }

    #[test]
    fn test_lookup_decodes_matching_variant() {
        let raw = RawResource {
            resource_type: "bundleIds".to_string(),
            id: "B1".to_string(),
            relationships: Default::default(),
            attributes: None,
            links: None,
        };
        let item = lookup("bundleIds").decode(raw).unwrap();
        assert!(matches!(item, Item::BundleId(_)));
    }

    #[test]
    fn test_decoder_debug_output() {
        let debug = format!("{:?}", lookup("devices"));
        assert!(debug.contains("devices"));
    }
}
