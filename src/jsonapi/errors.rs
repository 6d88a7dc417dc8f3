//! Decode and protocol failure types.
//!
//! Two families are kept apart:
//!
//! - [`DecodeError`]: the response (or a part of it) did not have the shape
//!   the protocol requires. Relationship shape problems carry a
//!   [`ShapeError`] naming what was wrong.
//! - [`ApiFailure`]: the server answered with a non-success status. The
//!   failure keeps the status, the raw body, and the structured
//!   [`ErrorDetail`] list.
//!
//! [`ApiError`] unifies both at the decode boundary.
//!
//! # Example
//!
//! ```rust
//! use appstore_connect::jsonapi::ApiFailure;
//!
//! let body = br#"{"errors":[{"code":"NOT_FOUND","detail":"no such profile"}]}"#;
//! let failure = ApiFailure::from_response(404, body);
//!
//! assert_eq!(failure.status(), 404);
//! assert_eq!(failure.to_string(), "HTTP 404: NOT_FOUND: no such profile");
//! assert_eq!(failure.errors()[0].code, "NOT_FOUND");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A relationship object whose shape the protocol does not allow.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The relationship itself is not a JSON object.
    #[error("relationship must be an object")]
    NotAnObject,

    /// `data` is a string, number or boolean.
    #[error("relationship data must be null, an object or an array, found {found}")]
    ScalarData {
        /// JSON kind that was found.
        found: &'static str,
    },

    /// An element of a `data` array is not an object.
    #[error("relationship data element {index} is not an object")]
    NonObjectElement {
        /// Position of the offending element.
        index: usize,
    },

    /// A reference object lacks a string `type` or `id`.
    #[error("invalid resource identifier: {0}")]
    InvalidReference(#[source] serde_json::Error),

    /// `links` or `meta` has the wrong shape.
    #[error("invalid relationship {member}: {source}")]
    InvalidMember {
        /// `"links"` or `"meta"`.
        member: &'static str,
        /// Underlying serde failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to decode a response document.
///
/// Distinct from [`ApiFailure`]: decoding errors mean the payload itself is
/// malformed for the protocol, independent of the HTTP status.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A value has the wrong JSON kind.
    #[error("expected {expected} for {context}")]
    UnexpectedShape {
        /// Where in the document the value was found.
        context: &'static str,
        /// What the protocol requires there.
        expected: &'static str,
    },

    /// A resource object has no string `type` member.
    #[error("resource object is missing its 'type' discriminator")]
    MissingDiscriminator,

    /// A required member is missing, or is an empty string where a value
    /// is required (a decoded resource `id`).
    #[error("missing required member '{field}'")]
    MissingField {
        /// Name of the missing member.
        field: &'static str,
    },

    /// A resource decoded as a specific kind carries another discriminator.
    #[error("expected resource type '{expected}', found '{found}'")]
    TypeMismatch {
        /// The discriminator of the requested kind.
        expected: &'static str,
        /// The discriminator on the wire.
        found: String,
    },

    /// A relationship could not be normalized.
    #[error("malformed relationship '{name}': {source}")]
    MalformedRelationship {
        /// Relationship name within the resource.
        name: String,
        /// What was wrong with it.
        #[source]
        source: ShapeError,
    },

    /// The attribute payload of a known resource type did not match its schema.
    #[error("invalid attributes for '{resource_type}': {source}")]
    Attributes {
        /// The resource discriminator.
        resource_type: String,
        /// Underlying serde failure.
        #[source]
        source: serde_json::Error,
    },

    /// A document-level member (links, meta, paging) has the wrong shape.
    #[error("invalid '{field}': {source}")]
    InvalidMember {
        /// Name of the member.
        field: &'static str,
        /// Underlying serde failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Location of the request element an error refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    /// JSON pointer into the request document, e.g. `/data/attributes/name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,

    /// Query parameter that caused the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

/// One entry of an error response's `errors` array.
///
/// Missing members decode to empty strings (or `None` for `source`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub id: String,
    pub status: String,
    pub code: String,
    pub title: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
}

impl ErrorDetail {
    /// Builds an entry from an arbitrary JSON value without ever failing.
    ///
    /// Numbers and booleans are stringified; other kinds become empty.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| match value.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
            _ => String::new(),
        };

        let source = value.get("source").filter(|s| s.is_object()).map(|s| {
            let member = |key: &str| s.get(key).and_then(Value::as_str).map(str::to_string);
            ErrorSource {
                pointer: member("pointer"),
                parameter: member("parameter"),
            }
        });

        Self {
            id: text("id"),
            status: text("status"),
            code: text("code"),
            title: text("title"),
            detail: text("detail"),
            source,
        }
    }

    /// Returns the JSON pointer of the offending request member, if any.
    #[must_use]
    pub fn pointer(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.pointer.as_deref())
    }
}

/// A non-success response surfaced as one failure value.
///
/// The `Display` output is the composed message:
/// `"HTTP {status} error"` when no structured errors were sent, otherwise
/// `"HTTP {status}: {code}: {detail}; {code}: {detail}"`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiFailure {
    status: u16,
    body: String,
    errors: Vec<ErrorDetail>,
    message: String,
}

impl ApiFailure {
    /// Creates a failure from already-parsed error details.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>, errors: Vec<ErrorDetail>) -> Self {
        let message = compose_message(status, &errors);
        Self {
            status,
            body: body.into(),
            errors,
            message,
        }
    }

    /// Parses an error response body. Never fails.
    ///
    /// Bodies that are not JSON, have no `errors` member, or whose `errors`
    /// member is not an array produce an empty error list.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let errors = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|doc| match doc.get("errors") {
                Some(Value::Array(items)) => {
                    Some(items.iter().map(ErrorDetail::from_value).collect())
                }
                _ => None,
            })
            .unwrap_or_default();

        Self::new(status, String::from_utf8_lossy(body), errors)
    }

    /// The HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// The undecoded response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The structured error entries, in response order.
    #[must_use]
    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }

    /// The composed failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if any entry carries the given error code.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

fn compose_message(status: u16, errors: &[ErrorDetail]) -> String {
    if errors.is_empty() {
        return format!("HTTP {status} error");
    }

    let joined = errors
        .iter()
        .map(|e| format!("{}: {}", e.code, e.detail))
        .collect::<Vec<_>>()
        .join("; ");
    format!("HTTP {status}: {joined}")
}

/// Unified error for decoding a transport response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a status outside the success range.
    #[error(transparent)]
    Failure(#[from] ApiFailure),

    /// The success body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ApiError {
    /// Returns the failure if this is a protocol-level error.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Decode(_) => None,
        }
    }
}
