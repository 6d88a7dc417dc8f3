//! Decoding of raw transport responses.
//!
//! The transport collaborator hands over a status code and the body bytes.
//! Statuses inside the success range are decoded into the envelope shape the
//! caller expects; everything else becomes an [`ApiFailure`].

use std::borrow::Cow;

use super::errors::{ApiError, ApiFailure};
use super::response::{ItemResponse, ListResponse};
use crate::config::StatusRange;

/// Status code and body as received from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a raw response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The body as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    fn check(&self, success: &StatusRange) -> Result<(), ApiFailure> {
        if success.contains(self.status) {
            return Ok(());
        }
        let failure = ApiFailure::from_response(self.status, &self.body);
        tracing::debug!(
            status = self.status,
            errors = failure.errors().len(),
            "non-success response"
        );
        Err(failure)
    }

    /// Decodes a single-resource response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Failure`] for a status outside `success`, and
    /// [`ApiError::Decode`] if a success body is malformed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use appstore_connect::jsonapi::{ApiError, RawResponse};
    /// use appstore_connect::StatusRange;
    ///
    /// let response = RawResponse::new(409, r#"{"errors":[{"code":"ENTITY_ERROR","detail":"duplicate"}]}"#);
    /// match response.decode_item(&StatusRange::default()) {
    ///     Err(ApiError::Failure(failure)) => {
    ///         assert_eq!(failure.status(), 409);
    ///         assert_eq!(failure.to_string(), "HTTP 409: ENTITY_ERROR: duplicate");
    ///     }
    ///     other => panic!("unexpected: {other:?}"),
    /// }
    /// ```
    pub fn decode_item(&self, success: &StatusRange) -> Result<ItemResponse, ApiError> {
        self.check(success)?;
        Ok(ItemResponse::from_slice(&self.body)?)
    }

    /// Decodes a list response.
    ///
    /// # Errors
    ///
    /// Same as [`RawResponse::decode_item`].
    pub fn decode_list(&self, success: &StatusRange) -> Result<ListResponse, ApiError> {
        self.check(success)?;
        Ok(ListResponse::from_slice(&self.body)?)
    }

    /// Checks a response whose body carries no document, such as a `204`
    /// after a delete. The body of a success response is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Failure`] for a status outside `success`.
    pub fn decode_empty(&self, success: &StatusRange) -> Result<(), ApiError> {
        Ok(self.check(success)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonapi::DecodeError;
    use crate::resources::BundleId;
    use serde_json::json;

    #[test]
    fn test_success_decodes_item() {
        let body = json!({
            "data": {"type": "bundleIds", "id": "B1", "attributes": {"identifier": "com.example"}}
        })
        .to_string();
        let response = RawResponse::new(200, body);

        let decoded = response.decode_item(&StatusRange::default()).unwrap();
        let bundle_id = decoded.data_as::<BundleId>().unwrap();
        assert_eq!(bundle_id.attributes.identifier.as_deref(), Some("com.example"));
    }

    #[test]
    fn test_failure_keeps_status_body_and_errors() {
        let body = r#"{"errors":[{"status":"404","code":"NOT_FOUND","title":"Not found","detail":"gone"}]}"#;
        let response = RawResponse::new(404, body);

        let err = response.decode_list(&StatusRange::default()).unwrap_err();
        let failure = err.as_failure().unwrap();
        assert_eq!(failure.status(), 404);
        assert_eq!(failure.body(), body);
        assert_eq!(failure.errors()[0].title, "Not found");
        assert_eq!(failure.message(), "HTTP 404: NOT_FOUND: gone");
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let response = RawResponse::new(200, r#"{"data": {"id": "X"}}"#);
        let err = response.decode_item(&StatusRange::default()).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Decode(DecodeError::MissingDiscriminator)
        ));
    }

    #[test]
    fn test_custom_success_range() {
        let range = StatusRange::new(200, 200).unwrap();
        let response = RawResponse::new(201, r#"{"data": null}"#);
        assert!(matches!(
            response.decode_item(&range),
            Err(ApiError::Failure(_))
        ));
    }

    #[test]
    fn test_decode_empty() {
        let ok = RawResponse::new(204, Vec::<u8>::new());
        assert!(ok.decode_empty(&StatusRange::default()).is_ok());

        let failed = RawResponse::new(500, "");
        let err = failed.decode_empty(&StatusRange::default()).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500 error");
    }

    #[test]
    fn test_body_text_is_lossy() {
        let response = RawResponse::new(200, vec![b'o', b'k', 0xFF]);
        assert_eq!(response.body_text(), "ok\u{FFFD}");
    }
}
