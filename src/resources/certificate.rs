//! Signing certificate resource.
//!
//! `certificateContent` carries the DER encoding in standard base64;
//! [`CertificateAttributes::sha256_fingerprint`] gives the fingerprint shown
//! by Keychain Access.

use std::fmt::Write as _;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::jsonapi::{Attributes, Item, RequestEnvelope, Resource};

use super::common::{CertificateType, Platform};

/// A decoded `certificates` resource.
pub type Certificate = Resource<CertificateAttributes>;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CertificateAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_type: Option<CertificateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_content: Option<String>,
    /// Only sent on create; never returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csr_content: Option<String>,
}

impl CertificateAttributes {
    /// Decodes `certificateContent` into DER bytes.
    ///
    /// Returns `None` when the content is absent.
    pub fn decoded_content(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        self.certificate_content
            .as_deref()
            .map(|content| STANDARD.decode(content))
    }

    /// Uppercase hex SHA-256 of the DER bytes.
    ///
    /// Returns `None` when the content is absent or not valid base64.
    #[must_use]
    pub fn sha256_fingerprint(&self) -> Option<String> {
        let der = self.decoded_content()?.ok()?;
        let digest = Sha256::digest(&der);
        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            let _ = write!(hex, "{byte:02X}");
        }
        Some(hex)
    }

    /// Returns `true` if the certificate expired before `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration_date.is_some_and(|expires| expires <= now)
    }
}

impl Attributes for CertificateAttributes {
    const TYPE: &'static str = "certificates";

    fn wrap(resource: Resource<Self>) -> Item {
        Item::Certificate(resource)
    }

    fn unwrap(item: &Item) -> Option<&Resource<Self>> {
        match item {
            Item::Certificate(certificate) => Some(certificate),
            _ => None,
        }
    }
}

/// Attributes of a certificate create request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CertificateCreateAttributes {
    /// PEM or base64 certificate signing request.
    pub csr_content: String,
    pub certificate_type: CertificateType,
}

impl RequestEnvelope<CertificateCreateAttributes> {
    /// A create request signing `csr_content` as a `certificate_type`
    /// certificate.
    #[must_use]
    pub fn create_certificate(csr_content: impl Into<String>, certificate_type: CertificateType) -> Self {
        Self::new(
            CertificateAttributes::TYPE,
            CertificateCreateAttributes {
                csr_content: csr_content.into(),
                certificate_type,
            },
        )
    }
}
