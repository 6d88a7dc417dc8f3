//! Relationship objects and their `data` normalization.
//!
//! The protocol lets a relationship's `data` member take several shapes:
//! absent, `null`, a single resource identifier (to-one), or an array of
//! identifiers (to-many). Decoding normalizes both the single-object and the
//! array shape into an ordered list while keeping "absent" and "null" apart:
//!
//! | wire `data`        | [`RelationshipData`]          |
//! |--------------------|-------------------------------|
//! | key missing        | `Absent`                      |
//! | `null`             | `Null`                        |
//! | `{type,id}`        | `Linkage(vec![ref])`          |
//! | `[...]`            | `Linkage(refs)` (may be empty)|
//!
//! Encoding writes `Linkage` as an array even when it holds one reference, so
//! a to-one relationship decoded from the single-object shape re-encodes as a
//! one-element array. That shape change is intentional.

use serde::ser::SerializeMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::errors::ShapeError;

/// Minimal pointer to another resource.
///
/// Carries no ownership; resolve it against an included pool if needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceReference {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
}

impl ResourceReference {
    /// Creates a reference.
    #[must_use]
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }
}

/// The three-state `data` member of a relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RelationshipData {
    /// The `data` key was not present.
    #[default]
    Absent,
    /// `data: null`, an explicitly empty to-one relationship.
    Null,
    /// One or more references, in wire order. May be empty (`data: []`).
    Linkage(Vec<ResourceReference>),
}

impl RelationshipData {
    /// Returns the references, if any were sent.
    #[must_use]
    pub fn references(&self) -> Option<&[ResourceReference]> {
        match self {
            Self::Linkage(refs) => Some(refs),
            Self::Absent | Self::Null => None,
        }
    }

    fn decode(value: Option<&Value>) -> Result<Self, ShapeError> {
        match value {
            None => Ok(Self::Absent),
            Some(Value::Null) => Ok(Self::Null),
            Some(object @ Value::Object(_)) => Ok(Self::Linkage(vec![decode_reference(object)?])),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    if item.is_object() {
                        decode_reference(item)
                    } else {
                        Err(ShapeError::NonObjectElement { index })
                    }
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Linkage),
            Some(scalar) => Err(ShapeError::ScalarData {
                found: json_kind(scalar),
            }),
        }
    }
}

fn decode_reference(value: &Value) -> Result<ResourceReference, ShapeError> {
    ResourceReference::deserialize(value).map_err(ShapeError::InvalidReference)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `self` / `related` locators of a relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,
}

/// A named to-one or to-many reference on a resource.
///
/// # Example
///
/// ```rust
/// use appstore_connect::jsonapi::{Relationship, ResourceReference};
/// use serde_json::json;
///
/// let to_one = Relationship::from_value(&json!({
///     "data": {"type": "bundleIds", "id": "B1"}
/// })).unwrap();
/// assert_eq!(to_one.to_one(), Some(&ResourceReference::new("bundleIds", "B1")));
///
/// // Re-encoding always yields the array shape.
/// assert_eq!(
///     serde_json::to_value(&to_one).unwrap(),
///     json!({"data": [{"type": "bundleIds", "id": "B1"}]})
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationship {
    pub data: RelationshipData,
    pub meta: Map<String, Value>,
    pub links: Option<RelationshipLinks>,
}

impl Relationship {
    /// A relationship pointing at exactly one resource.
    #[must_use]
    pub fn to_one_ref(reference: ResourceReference) -> Self {
        Self::with_data(RelationshipData::Linkage(vec![reference]))
    }

    /// A relationship pointing at the given resources, in order.
    #[must_use]
    pub fn to_many_refs(references: impl IntoIterator<Item = ResourceReference>) -> Self {
        Self::with_data(RelationshipData::Linkage(references.into_iter().collect()))
    }

    /// An explicitly empty to-one relationship (`data: null`).
    #[must_use]
    pub fn null() -> Self {
        Self::with_data(RelationshipData::Null)
    }

    fn with_data(data: RelationshipData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Decodes a relationship object from a buffered JSON value.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if the value is not an object, if `data` is a
    /// scalar or contains non-object elements, or if `links`/`meta` are malformed.
    pub fn from_value(value: &Value) -> Result<Self, ShapeError> {
        let object = value.as_object().ok_or(ShapeError::NotAnObject)?;

        let data = RelationshipData::decode(object.get("data"))?;

        let meta = match object.get("meta") {
            None | Some(Value::Null) => Map::new(),
            Some(meta) => Map::deserialize(meta).map_err(|source| ShapeError::InvalidMember {
                member: "meta",
                source,
            })?,
        };

        let links = match object.get("links") {
            None | Some(Value::Null) => None,
            Some(links) => Some(RelationshipLinks::deserialize(links).map_err(|source| {
                ShapeError::InvalidMember {
                    member: "links",
                    source,
                }
            })?),
        };

        Ok(Self { data, meta, links })
    }

    /// The single referenced resource, when exactly one reference was sent.
    #[must_use]
    pub fn to_one(&self) -> Option<&ResourceReference> {
        match self.data.references() {
            Some([reference]) => Some(reference),
            _ => None,
        }
    }

    /// All referenced resources; empty for absent or null data.
    #[must_use]
    pub fn to_many(&self) -> &[ResourceReference] {
        self.data.references().unwrap_or_default()
    }

    /// Returns `true` if the `data` key was not sent.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self.data, RelationshipData::Absent)
    }

    /// Returns `true` if `data` was explicitly `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.data, RelationshipData::Null)
    }
}

impl Serialize for Relationship {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        match &self.data {
            RelationshipData::Absent => {}
            RelationshipData::Null => map.serialize_entry("data", &Value::Null)?,
            RelationshipData::Linkage(refs) => map.serialize_entry("data", refs)?,
        }
        if !self.meta.is_empty() {
            map.serialize_entry("meta", &self.meta)?;
        }
        if let Some(links) = &self.links {
            map.serialize_entry("links", links)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Relationship {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(de::Error::custom)
    }
}
