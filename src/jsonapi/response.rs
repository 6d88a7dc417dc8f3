//! Response envelopes.
//!
//! Item endpoints return [`ItemResponse`] (`data` is one resource object);
//! list endpoints return [`ListResponse`] (`data` is an array, plus paging).
//! Both carry the `included` pool: related resources the server attached,
//! heterogeneous across kinds and kept in response order.
//!
//! # Included pool
//!
//! [`ItemResponse::included_of`] filters the pool by variant only. It does
//! not match entries against any relationship's reference; when a response
//! can include several resources of the same kind, match ids yourself:
//!
//! ```rust
//! use appstore_connect::jsonapi::ItemResponse;
//! use appstore_connect::resources::{BundleId, Profile};
//! use serde_json::json;
//!
//! let response = ItemResponse::from_value(json!({
//!     "data": {
//!         "type": "profiles", "id": "P1",
//!         "relationships": {"bundleId": {"data": {"type": "bundleIds", "id": "B1"}}}
//!     },
//!     "included": [
//!         {"type": "bundleIds", "id": "B1", "attributes": {"identifier": "com.example.app"}}
//!     ]
//! })).unwrap();
//!
//! let bundle_id = response.first_included::<BundleId>().unwrap();
//! assert_eq!(bundle_id.attributes.identifier.as_deref(), Some("com.example.app"));
//!
//! let target = response.data.relationship("bundleId").and_then(|r| r.to_one()).unwrap();
//! let matched = response
//!     .included_of::<BundleId>()
//!     .into_iter()
//!     .find(|b| b.id == target.id);
//! assert!(matched.is_some());
//! ```

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::errors::DecodeError;
use super::item::{Item, ResourceVariant};
use super::paging::PagingInfo;

/// Document-level `links`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Response whose primary data is a single resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemResponse {
    pub data: Item,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<DocumentLinks>,
}

impl ItemResponse {
    /// Decodes a buffered response document.
    ///
    /// # Errors
    ///
    /// Fails if the document is not an object, has no `data`, or if any
    /// resource in `data` or `included` fails to decode.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let mut document = into_document(value)?;
        let data = document
            .remove("data")
            .ok_or(DecodeError::MissingField { field: "data" })?;

        Ok(Self {
            data: Item::from_value(data)?,
            included: decode_included(&mut document)?,
            links: decode_member(&mut document, "links")?,
        })
    }

    /// Decodes a response document from JSON bytes.
    ///
    /// # Errors
    ///
    /// See [`ItemResponse::from_value`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Included resources of variant `V`, in response order.
    #[must_use]
    pub fn included_of<V: ResourceVariant>(&self) -> Vec<&V> {
        filter_variant(&self.included)
    }

    /// The first included resource of variant `V`.
    #[must_use]
    pub fn first_included<V: ResourceVariant>(&self) -> Option<&V> {
        self.included.iter().find_map(V::from_item)
    }

    /// Primary data as variant `V`.
    #[must_use]
    pub fn data_as<V: ResourceVariant>(&self) -> Option<&V> {
        V::from_item(&self.data)
    }

    /// Splits the response into primary data and included pool.
    #[must_use]
    pub fn into_parts(self) -> (Item, Vec<Item>) {
        (self.data, self.included)
    }
}

/// Metadata of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<PagingInfo>,
}

/// Response whose primary data is an ordered list of resources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResponse {
    pub data: Vec<Item>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<DocumentLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

impl ListResponse {
    /// Decodes a buffered list response document.
    ///
    /// # Errors
    ///
    /// Fails if the document is not an object, `data` is missing or not an
    /// array, any resource fails to decode, or `links`/`meta` are malformed.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let mut document = into_document(value)?;
        let data = match document.remove("data") {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(Item::from_value)
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(DecodeError::UnexpectedShape {
                    context: "list data",
                    expected: "an array",
                })
            }
            None => return Err(DecodeError::MissingField { field: "data" }),
        };

        Ok(Self {
            data,
            included: decode_included(&mut document)?,
            links: decode_member(&mut document, "links")?,
            meta: decode_member(&mut document, "meta")?,
        })
    }

    /// Decodes a list response document from JSON bytes.
    ///
    /// # Errors
    ///
    /// See [`ListResponse::from_value`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Paging metadata, if the server sent any.
    #[must_use]
    pub fn paging(&self) -> Option<&PagingInfo> {
        self.meta.as_ref().and_then(|m| m.paging.as_ref())
    }

    /// URL of the next page, if any.
    #[must_use]
    pub fn next_page_url(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.next.as_deref())
    }

    /// Included resources of variant `V`, in response order.
    #[must_use]
    pub fn included_of<V: ResourceVariant>(&self) -> Vec<&V> {
        filter_variant(&self.included)
    }

    /// The first included resource of variant `V`.
    #[must_use]
    pub fn first_included<V: ResourceVariant>(&self) -> Option<&V> {
        self.included.iter().find_map(V::from_item)
    }

    /// Primary data entries of variant `V`, in response order.
    #[must_use]
    pub fn data_as<V: ResourceVariant>(&self) -> Vec<&V> {
        filter_variant(&self.data)
    }

    /// Splits the response into primary data and included pool.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Item>, Vec<Item>) {
        (self.data, self.included)
    }
}

fn filter_variant<V: ResourceVariant>(items: &[Item]) -> Vec<&V> {
    items.iter().filter_map(V::from_item).collect()
}

fn into_document(value: Value) -> Result<Map<String, Value>, DecodeError> {
    match value {
        Value::Object(document) => Ok(document),
        _ => Err(DecodeError::UnexpectedShape {
            context: "response document",
            expected: "an object",
        }),
    }
}

fn decode_included(document: &mut Map<String, Value>) -> Result<Vec<Item>, DecodeError> {
    match document.remove("included") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.into_iter().map(Item::from_value).collect(),
        Some(_) => Err(DecodeError::UnexpectedShape {
            context: "included",
            expected: "an array",
        }),
    }
}

fn decode_member<T: de::DeserializeOwned>(
    document: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Option<T>, DecodeError> {
    match document.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|source| DecodeError::InvalidMember { field, source }),
    }
}

impl<'de> Deserialize<'de> for ItemResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Self::from_value(Value::deserialize(deserializer)?).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for ListResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Self::from_value(Value::deserialize(deserializer)?).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonapi::NO_EXPLICIT_LIMIT;
    use crate::resources::{Certificate, Device, Profile};
    use serde_json::json;

    fn device(id: &str) -> Value {
        json!({"type": "devices", "id": id, "attributes": {"name": id}})
    }

    #[test]
    fn test_item_response_without_included() {
        let response = ItemResponse::from_value(json!({
            "data": {"type": "profiles", "id": "P1"},
            "included": []
        }))
        .unwrap();

        assert!(response.data_as::<Profile>().is_some());
        assert!(response.included_of::<Device>().is_empty());
        assert!(response.included_of::<Certificate>().is_empty());
        assert!(response.first_included::<Device>().is_none());
    }

    #[test]
    fn test_filter_keeps_order_without_dedup() {
        let response = ListResponse::from_value(json!({
            "data": [{"type": "profiles", "id": "P1"}],
            "included": [
                device("D2"),
                {"type": "certificates", "id": "C1"},
                device("D1"),
                {"type": "apps", "id": "A1"},
                device("D2")
            ]
        }))
        .unwrap();

        let ids: Vec<_> = response
            .included_of::<Device>()
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, ["D2", "D1", "D2"]);
        assert_eq!(response.included_of::<Certificate>().len(), 1);
    }

    #[test]
    fn test_list_response_paging_and_links() {
        let response = ListResponse::from_value(json!({
            "data": [device("D1"), device("D2")],
            "links": {
                "self": "https://api.example/v1/devices",
                "next": "https://api.example/v1/devices?cursor=Mg"
            },
            "meta": {"paging": {"total": 5, "limit": 2}}
        }))
        .unwrap();

        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data_as::<Device>().len(), 2);
        assert_eq!(response.paging(), Some(&PagingInfo { total: 5, limit: 2 }));
        assert_eq!(
            response.next_page_url(),
            Some("https://api.example/v1/devices?cursor=Mg")
        );
    }

    #[test]
    fn test_list_response_empty_paging_uses_defaults() {
        let response = ListResponse::from_value(json!({
            "data": [],
            "meta": {"paging": {}}
        }))
        .unwrap();

        let paging = response.paging().unwrap();
        assert_eq!(paging.total, 0);
        assert_eq!(paging.limit, NO_EXPLICIT_LIMIT);
    }

    #[test]
    fn test_list_response_requires_array_data() {
        let err = ListResponse::from_value(json!({"data": {"type": "devices", "id": "D1"}}))
            .unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedShape { context: "list data", .. }));
    }

    #[test]
    fn test_missing_data_is_error() {
        let err = ItemResponse::from_value(json!({"included": []})).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField { field: "data" }));
    }

    #[test]
    fn test_null_item_data_is_empty_generic() {
        let response = ItemResponse::from_value(json!({"data": null})).unwrap();
        assert!(response.data.is_generic());
        assert_eq!(response.data.resource_type(), "");
    }

    #[test]
    fn test_included_error_propagates() {
        let err = ItemResponse::from_value(json!({
            "data": {"type": "profiles", "id": "P1"},
            "included": [{"id": "X"}]
        }))
        .unwrap_err();
        assert!(matches!(err, DecodeError::MissingDiscriminator));
    }

    #[test]
    fn test_invalid_json_bytes() {
        let err = ListResponse::from_slice(b"not json").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidJson(_)));
    }

    #[test]
    fn test_serde_deserialize_entry_point() {
        let response: ItemResponse =
            serde_json::from_value(json!({"data": device("D1")})).unwrap();
        assert_eq!(response.data.id(), "D1");

        let (data, included) = response.into_parts();
        assert_eq!(data.resource_type(), "devices");
        assert!(included.is_empty());
    }
}
