//! Resource kinds known to the decoder.
//!
//! Each kind pairs an attribute struct implementing
//! [`Attributes`](crate::jsonapi::Attributes) with a [`Resource`] alias.
//! Every other discriminator decodes to
//! [`GenericResource`](crate::jsonapi::GenericResource).
//!
//! # Available Resources
//!
//! ## Profile Resource
//!
//! - [`Profile`] - A provisioning profile (`profiles`)
//! - [`ProfileCreateAttributes`] - Payload for creating a profile
//!
//! Relationships: `bundleId`, `certificates`, `devices`.
//!
//! ## Bundle ID Resource
//!
//! - [`BundleId`] - An explicit or wildcard app identifier (`bundleIds`)
//! - [`BundleIdCreateAttributes`] / [`BundleIdUpdateAttributes`]
//!
//! ## Bundle ID Capability Resource
//!
//! - [`BundleIdCapability`] - A capability enabled on a bundle ID
//!   (`bundleIdCapabilities`)
//! - [`BundleIdCapabilityCreateAttributes`]
//!
//! ## Certificate Resource
//!
//! - [`Certificate`] - A signing certificate (`certificates`)
//! - [`CertificateCreateAttributes`] - Payload for signing a CSR
//!
//! ## Device Resource
//!
//! - [`Device`] - A registered test device (`devices`)
//! - [`DeviceCreateAttributes`] / [`DeviceUpdateAttributes`]
//!
//! Shared enumerations live in [`common`].
//!
//! [`Resource`]: crate::jsonapi::Resource

pub mod common;

mod bundle_id;
mod bundle_id_capability;
mod certificate;
mod device;
mod profile;

pub use bundle_id::{BundleId, BundleIdAttributes, BundleIdCreateAttributes, BundleIdUpdateAttributes};
pub use bundle_id_capability::{
    BundleIdCapability, BundleIdCapabilityAttributes, BundleIdCapabilityCreateAttributes,
};
pub use certificate::{Certificate, CertificateAttributes, CertificateCreateAttributes};
pub use device::{Device, DeviceAttributes, DeviceCreateAttributes, DeviceUpdateAttributes};
pub use profile::{Profile, ProfileAttributes, ProfileCreateAttributes};

use crate::jsonapi::{Relationship, ResourceReference};

/// A to-many relationship referencing `ids` of one resource type.
fn to_many(resource_type: &str, ids: &[&str]) -> Relationship {
    Relationship::to_many_refs(
        ids.iter()
            .map(|id| ResourceReference::new(resource_type, *id)),
    )
}
