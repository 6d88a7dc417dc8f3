//! The polymorphic resource document.
//!
//! Every resource object carries a `type` discriminator, an `id`, named
//! relationships and a type-specific `attributes` payload. [`Item`] is the
//! closed union over the resource kinds this crate models, with
//! [`Item::Generic`] catching every discriminator it does not know.
//!
//! # Decoding
//!
//! The `type` member may appear anywhere in the object, so decoding is done
//! in two passes over a buffered [`serde_json::Value`]:
//!
//! 1. split the object into discriminator, id, relationships and raw
//!    attributes ([`RawResource`]);
//! 2. look the discriminator up in the [`registry`](super::registry) and let
//!    the selected decoder build the concrete variant.
//!
//! A `null` resource decodes to an empty generic item. A missing
//! discriminator is an error; an unknown one is not.
//!
//! # Example
//!
//! ```rust
//! use appstore_connect::jsonapi::Item;
//! use appstore_connect::resources::Device;
//! use serde_json::json;
//!
//! let item = Item::from_value(json!({
//!     "id": "D1",
//!     "attributes": {"name": "Test iPhone", "udid": "0000-1111"},
//!     "type": "devices"
//! })).unwrap();
//!
//! let device = item.as_variant::<Device>().unwrap();
//! assert_eq!(device.attributes.name.as_deref(), Some("Test iPhone"));
//! ```

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::errors::DecodeError;
use super::registry;
use super::relationship::{Relationship, ResourceReference};
use crate::resources::{BundleId, BundleIdCapability, Certificate, Device, Profile};

/// Relationships of a resource keyed by name.
pub type Relationships = BTreeMap<String, Relationship>;

/// Attribute payload of a known resource kind.
///
/// Implementors tie an attribute struct to its wire discriminator and to its
/// [`Item`] variant.
pub trait Attributes:
    Serialize + DeserializeOwned + Default + Clone + Debug + PartialEq + Send + Sync + Sized
{
    /// The wire discriminator, e.g. `"profiles"`.
    const TYPE: &'static str;

    /// Wraps a resource of this kind into its [`Item`] variant.
    fn wrap(resource: Resource<Self>) -> Item;

    /// Borrows the resource if `item` is this kind's variant.
    fn unwrap(item: &Item) -> Option<&Resource<Self>>;
}

/// `links` member of a resource object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// A resource of a known kind.
///
/// Fields serialize in the order `type`, `id`, `relationships`,
/// `attributes`, `links`; empty relationships and missing links are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource<A> {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: Relationships,
    pub attributes: A,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

impl<A: Attributes> Resource<A> {
    /// Creates a resource with no relationships.
    ///
    /// An empty `id` marks a resource that has not been created yet.
    #[must_use]
    pub fn new(id: impl Into<String>, attributes: A) -> Self {
        Self {
            resource_type: A::TYPE.to_string(),
            id: id.into(),
            relationships: Relationships::new(),
            attributes,
            links: None,
        }
    }

    /// Adds or replaces a relationship.
    #[must_use]
    pub fn with_relationship(mut self, name: impl Into<String>, relationship: Relationship) -> Self {
        self.relationships.insert(name.into(), relationship);
        self
    }

    /// Looks up a relationship by name.
    #[must_use]
    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.get(name)
    }

    /// A reference pointing at this resource.
    #[must_use]
    pub fn reference(&self) -> ResourceReference {
        ResourceReference::new(&self.resource_type, &self.id)
    }
}

impl<'de, A: Attributes> Deserialize<'de> for Resource<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RawResource::from_value(value)
            .and_then(RawResource::into_resource)
            .map_err(de::Error::custom)
    }
}

/// A resource whose discriminator is not registered.
///
/// Everything is preserved as sent, including the raw `attributes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenericResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: Relationships,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

/// A resource object split into its members, attributes still undecoded.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResource {
    pub resource_type: String,
    pub id: String,
    pub relationships: Relationships,
    pub attributes: Option<Value>,
    pub links: Option<ResourceLinks>,
}

impl RawResource {
    /// Splits a buffered resource object.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnexpectedShape`] if the value is not an object
    /// - [`DecodeError::MissingDiscriminator`] if `type` is missing or not a string
    /// - [`DecodeError::MissingField`] if `id` is missing, empty or not a string
    /// - [`DecodeError::MalformedRelationship`] for a bad relationship
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let Value::Object(mut object) = value else {
            return Err(DecodeError::UnexpectedShape {
                context: "resource object",
                expected: "an object",
            });
        };

        let resource_type = match object.remove("type") {
            Some(Value::String(t)) => t,
            _ => return Err(DecodeError::MissingDiscriminator),
        };

        let id = match object.remove("id") {
            Some(Value::String(id)) if !id.is_empty() => id,
            _ => return Err(DecodeError::MissingField { field: "id" }),
        };

        let relationships = match object.remove("relationships") {
            None | Some(Value::Null) => Relationships::new(),
            Some(Value::Object(members)) => decode_relationships(members)?,
            Some(_) => {
                return Err(DecodeError::UnexpectedShape {
                    context: "relationships",
                    expected: "an object",
                })
            }
        };

        let attributes = object.remove("attributes").filter(|a| !a.is_null());

        let links = match object.remove("links") {
            None | Some(Value::Null) => None,
            Some(links) => Some(
                serde_json::from_value(links)
                    .map_err(|source| DecodeError::InvalidMember { field: "links", source })?,
            ),
        };

        Ok(Self {
            resource_type,
            id,
            relationships,
            attributes,
            links,
        })
    }

    /// Decodes the attributes as a known kind.
    ///
    /// Missing attributes decode to `A::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the discriminator is not
    /// `A::TYPE`, and [`DecodeError::Attributes`] if the payload does not
    /// match `A`.
    pub fn into_resource<A: Attributes>(self) -> Result<Resource<A>, DecodeError> {
        if self.resource_type != A::TYPE {
            return Err(DecodeError::TypeMismatch {
                expected: A::TYPE,
                found: self.resource_type,
            });
        }

        let attributes = match self.attributes {
            None => A::default(),
            Some(value) => {
                serde_json::from_value(value).map_err(|source| DecodeError::Attributes {
                    resource_type: self.resource_type.clone(),
                    source,
                })?
            }
        };

        Ok(Resource {
            resource_type: self.resource_type,
            id: self.id,
            relationships: self.relationships,
            attributes,
            links: self.links,
        })
    }

    /// Keeps everything as sent.
    #[must_use]
    pub fn into_generic(self) -> GenericResource {
        GenericResource {
            resource_type: self.resource_type,
            id: self.id,
            relationships: self.relationships,
            attributes: self.attributes,
            links: self.links,
        }
    }
}

fn decode_relationships(members: Map<String, Value>) -> Result<Relationships, DecodeError> {
    members
        .into_iter()
        .map(|(name, value)| match Relationship::from_value(&value) {
            Ok(relationship) => Ok((name, relationship)),
            Err(source) => Err(DecodeError::MalformedRelationship { name, source }),
        })
        .collect()
}

/// A decoded resource object of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Profile(Profile),
    BundleId(BundleId),
    BundleIdCapability(BundleIdCapability),
    Certificate(Certificate),
    Device(Device),
    /// Any unregistered discriminator.
    Generic(GenericResource),
}

impl Item {
    /// Decodes a buffered resource object.
    ///
    /// # Errors
    ///
    /// See [`RawResource::from_value`] and [`RawResource::into_resource`].
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        if value.is_null() {
            return Ok(Self::Generic(GenericResource::default()));
        }
        let raw = RawResource::from_value(value)?;
        registry::lookup(&raw.resource_type).decode(raw)
    }

    /// Decodes a resource object from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidJson`] if the bytes are not JSON, and
    /// otherwise the errors of [`Item::from_value`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// The wire discriminator.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        match self {
            Self::Profile(r) => &r.resource_type,
            Self::BundleId(r) => &r.resource_type,
            Self::BundleIdCapability(r) => &r.resource_type,
            Self::Certificate(r) => &r.resource_type,
            Self::Device(r) => &r.resource_type,
            Self::Generic(r) => &r.resource_type,
        }
    }

    /// The resource identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Profile(r) => &r.id,
            Self::BundleId(r) => &r.id,
            Self::BundleIdCapability(r) => &r.id,
            Self::Certificate(r) => &r.id,
            Self::Device(r) => &r.id,
            Self::Generic(r) => &r.id,
        }
    }

    /// All relationships of the resource.
    #[must_use]
    pub const fn relationships(&self) -> &Relationships {
        match self {
            Self::Profile(r) => &r.relationships,
            Self::BundleId(r) => &r.relationships,
            Self::BundleIdCapability(r) => &r.relationships,
            Self::Certificate(r) => &r.relationships,
            Self::Device(r) => &r.relationships,
            Self::Generic(r) => &r.relationships,
        }
    }

    /// Looks up a relationship by name.
    #[must_use]
    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships().get(name)
    }

    /// A reference pointing at this resource.
    #[must_use]
    pub fn reference(&self) -> ResourceReference {
        ResourceReference::new(self.resource_type(), self.id())
    }

    /// Returns `true` for the fallback variant.
    #[must_use]
    pub const fn is_generic(&self) -> bool {
        matches!(self, Self::Generic(_))
    }

    /// Borrows the item as a specific variant.
    #[must_use]
    pub fn as_variant<V: ResourceVariant>(&self) -> Option<&V> {
        V::from_item(self)
    }
}

impl Serialize for Item {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Profile(r) => r.serialize(serializer),
            Self::BundleId(r) => r.serialize(serializer),
            Self::BundleIdCapability(r) => r.serialize(serializer),
            Self::Certificate(r) => r.serialize(serializer),
            Self::Device(r) => r.serialize(serializer),
            Self::Generic(r) => r.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

/// A type that one [`Item`] variant holds.
pub trait ResourceVariant: Sized {
    /// Borrows the variant out of `item` if it matches.
    fn from_item(item: &Item) -> Option<&Self>;

    /// Wraps `self` into its [`Item`] variant.
    fn into_item(self) -> Item;
}

impl<A: Attributes> ResourceVariant for Resource<A> {
    fn from_item(item: &Item) -> Option<&Self> {
        A::unwrap(item)
    }

    fn into_item(self) -> Item {
        A::wrap(self)
    }
}

impl ResourceVariant for GenericResource {
    fn from_item(item: &Item) -> Option<&Self> {
        match item {
            Item::Generic(generic) => Some(generic),
            _ => None,
        }
    }

    fn into_item(self) -> Item {
        Item::Generic(self)
    }
}
