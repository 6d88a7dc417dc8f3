//! Request documents and list query parameters.
//!
//! Write requests mirror the resource object layout:
//! `{"data": {"type", "id"?, "attributes"?, "relationships"?}}`. Relationships
//! go through the same [`Relationship`] encoder as response documents, so a
//! to-one reference is written as a one-element array.
//!
//! # Example
//!
//! ```rust
//! use appstore_connect::jsonapi::{Relationship, RequestEnvelope, ResourceReference};
//! use serde_json::json;
//!
//! let request = RequestEnvelope::new("devices", json!({"name": "QA iPad"}))
//!     .with_id("D1")
//!     .with_relationship(
//!         "app",
//!         Relationship::to_one_ref(ResourceReference::new("apps", "A1")),
//!     );
//!
//! assert_eq!(
//!     serde_json::to_value(&request).unwrap(),
//!     json!({"data": {
//!         "type": "devices",
//!         "id": "D1",
//!         "attributes": {"name": "QA iPad"},
//!         "relationships": {"app": {"data": [{"type": "apps", "id": "A1"}]}}
//!     }})
//! );
//! ```

use serde::{Deserialize, Serialize};
use urlencoding::encode;

use super::item::{Attributes, Relationships};
use super::relationship::Relationship;

/// The `data` member of a write request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestData<A> {
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<A>,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

/// A write request document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope<A> {
    pub data: RequestData<A>,
}

impl<A: Serialize> RequestEnvelope<A> {
    /// A request for `resource_type` carrying `attributes`.
    #[must_use]
    pub fn new(resource_type: impl Into<String>, attributes: A) -> Self {
        Self {
            data: RequestData {
                resource_type: resource_type.into(),
                id: String::new(),
                attributes: Some(attributes),
                relationships: Relationships::new(),
            },
        }
    }

    /// A request for a known resource kind.
    #[must_use]
    pub fn for_kind(attributes: A) -> Self
    where
        A: Attributes,
    {
        Self::new(A::TYPE, attributes)
    }

    /// Sets the target id (update requests).
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.data.id = id.into();
        self
    }

    /// Adds or replaces a relationship.
    #[must_use]
    pub fn with_relationship(mut self, name: impl Into<String>, relationship: Relationship) -> Self {
        self.data.relationships.insert(name.into(), relationship);
        self
    }

    /// Encodes the request as JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if an attribute payload fails to encode.
    pub fn to_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Query parameters of a list request.
///
/// Parameters render in insertion order; values are percent-encoded and
/// multiple values of one parameter are comma-joined.
///
/// # Example
///
/// ```rust
/// use appstore_connect::jsonapi::ListQuery;
///
/// let query = ListQuery::new()
///     .filter("platform", ["IOS"])
///     .filter("profileState", ["ACTIVE"])
///     .include(["bundleId", "certificates"])
///     .limit(200);
///
/// assert_eq!(
///     query.to_query_string(),
///     "filter[platform]=IOS&filter[profileState]=ACTIVE&include=bundleId,certificates&limit=200"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    params: Vec<(String, Vec<String>)>,
}

impl ListQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push<I, S>(mut self, key: String, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if let Some(slot) = self.params.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = values;
        } else {
            self.params.push((key, values));
        }
        self
    }

    /// `filter[field]=v1,v2`
    #[must_use]
    pub fn filter<I, S>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(format!("filter[{field}]"), values)
    }

    /// `fields[resource_type]=a,b` (sparse fieldsets).
    #[must_use]
    pub fn fields<I, S>(self, resource_type: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(format!("fields[{resource_type}]"), fields)
    }

    /// `include=rel1,rel2`
    #[must_use]
    pub fn include<I, S>(self, relationships: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push("include".to_string(), relationships)
    }

    /// `sort=field` (prefix with `-` for descending).
    #[must_use]
    pub fn sort(self, field: impl Into<String>) -> Self {
        self.push("sort".to_string(), [field])
    }

    /// `limit=n`
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.push("limit".to_string(), [limit.to_string()])
    }

    /// `limit[relationship]=n` for included to-many relationships.
    #[must_use]
    pub fn limit_related(self, relationship: &str, limit: u32) -> Self {
        self.push(format!("limit[{relationship}]"), [limit.to_string()])
    }

    /// Returns `true` if no parameter was set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Renders the query without a leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(key, values)| {
                let joined = values
                    .iter()
                    .map(|v| encode(v).into_owned())
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{key}={joined}")
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
