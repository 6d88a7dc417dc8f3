//! JSON:API document modeling for App Store Connect.
//!
//! - **[`Item`]**: the polymorphic resource object, resolved by its `type`
//!   discriminator through the [`registry`]
//! - **[`Relationship`]**: relationship objects with three-state `data`
//! - **[`ItemResponse`] / [`ListResponse`]**: primary data plus the
//!   `included` pool and, for lists, [`PagingInfo`]
//! - **[`ApiFailure`]**: a non-success response with its structured errors
//! - **[`RequestEnvelope`] / [`ListQuery`]**: the write and query side
//! - **[`RawResponse`]**: entry point for bytes handed over by a transport
//!
//! Everything here is synchronous and allocation-only: no I/O, no shared
//! mutable state. Values may be decoded concurrently from any thread.
//!
//! # Example
//!
//! ```rust
//! use appstore_connect::jsonapi::RawResponse;
//! use appstore_connect::resources::{Certificate, Profile};
//! use appstore_connect::ConnectConfig;
//!
//! let body = r#"{
//!     "data": [{"type": "profiles", "id": "P1", "attributes": {"name": "Dev"}}],
//!     "included": [{"type": "certificates", "id": "C1"}],
//!     "meta": {"paging": {"total": 1, "limit": 50}}
//! }"#;
//!
//! let config = ConnectConfig::default();
//! let response = config.decode_list(&RawResponse::new(200, body)).unwrap();
//!
//! assert_eq!(response.data_as::<Profile>().len(), 1);
//! assert_eq!(response.included_of::<Certificate>()[0].id, "C1");
//! assert_eq!(response.paging().unwrap().limit, 50);
//! ```

mod boundary;
mod errors;
mod item;
mod paging;
mod relationship;
mod request;
mod response;

pub mod registry;

pub use boundary::RawResponse;
pub use errors::{ApiError, ApiFailure, DecodeError, ErrorDetail, ErrorSource, ShapeError};
pub use item::{
    Attributes, GenericResource, Item, RawResource, Relationships, Resource, ResourceLinks,
    ResourceVariant,
};
pub use paging::{PagingInfo, NO_EXPLICIT_LIMIT};
pub use registry::VariantDecoder;
pub use relationship::{Relationship, RelationshipData, RelationshipLinks, ResourceReference};
pub use request::{ListQuery, RequestData, RequestEnvelope};
pub use response::{DocumentLinks, ItemResponse, ListResponse, ResponseMeta};
