/*
[INPUT]:  Headers and raw body of an inbound webhook POST
[OUTPUT]: Verified delivery envelope (event type, id, timestamp, data)
[POS]:    Webhook layer - receiving side of platform deliveries
[UPDATE]: When delivery headers or the envelope format change
*/

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::value::RawValue;
use thiserror::Error;

use super::signature::verify_signature;
use crate::types::WebhookEventType;

pub const SIGNATURE_HEADER: &str = "x-webhook-signature";
pub const EVENT_HEADER: &str = "x-webhook-event";
pub const EVENT_ID_HEADER: &str = "x-webhook-event-id";

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Missing webhook header: {0}")]
    MissingHeader(&'static str),

    #[error("Invalid webhook header {name}: {reason}")]
    InvalidHeader { name: &'static str, reason: String },

    #[error("Webhook signature does not match payload")]
    InvalidSignature,

    #[error("Invalid webhook payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Body the platform POSTs to each subscriber
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEnvelope {
    pub event: WebhookEventType,
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub data: Value,
}

/// Borrowed view of the envelope's `data` field, byte-for-byte as received
#[derive(Deserialize)]
struct SignedData<'a> {
    #[serde(borrow)]
    data: &'a RawValue,
}

/// An inbound delivery as received, before trusting its contents.
///
/// The platform signs the compact JSON of the envelope's `data` field, not
/// the whole body. [`WebhookDelivery::verify`] checks that scheme;
/// [`WebhookDelivery::verify_raw_body`] covers senders that sign the body.
#[derive(Debug, Clone)]
pub struct WebhookDelivery {
    signature: String,
    event_type: Option<WebhookEventType>,
    event_id: Option<String>,
    body: Vec<u8>,
}

impl WebhookDelivery {
    /// Capture the delivery headers and the raw body bytes.
    ///
    /// Only the signature header is required.
    pub fn from_headers(headers: &HeaderMap, body: impl Into<Vec<u8>>) -> Result<Self, WebhookError> {
        let signature = header_str(headers, SIGNATURE_HEADER)?
            .ok_or(WebhookError::MissingHeader(SIGNATURE_HEADER))?;
        let event_type = header_str(headers, EVENT_HEADER)?.map(WebhookEventType::from);
        let event_id = header_str(headers, EVENT_ID_HEADER)?;

        Ok(Self {
            signature,
            event_type,
            event_id,
            body: body.into(),
        })
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn event_type(&self) -> Option<&WebhookEventType> {
        self.event_type.as_ref()
    }

    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref()
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The signed bytes: the `data` field exactly as it appears in the body.
    ///
    /// `None` when the body is not a JSON object with a `data` field.
    pub fn signed_payload(&self) -> Option<&str> {
        serde_json::from_slice::<SignedData<'_>>(&self.body)
            .ok()
            .map(|signed| signed.data.get())
    }

    /// Check the signature over the `data` field, as the platform signs it
    pub fn verify(&self, secret: impl AsRef<[u8]>) -> bool {
        self.signed_payload().is_some_and(|payload| {
            verify_signature(payload.as_bytes(), &self.signature, secret.as_ref())
        })
    }

    /// Check the signature over the whole raw body
    pub fn verify_raw_body(&self, secret: impl AsRef<[u8]>) -> bool {
        verify_signature(&self.body, &self.signature, secret.as_ref())
    }

    /// Parse the body without checking the signature
    pub fn envelope(&self) -> Result<WebhookEnvelope, WebhookError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Verify, then parse
    pub fn verified_envelope(&self, secret: impl AsRef<[u8]>) -> Result<WebhookEnvelope, WebhookError> {
        if !self.verify(secret) {
            return Err(WebhookError::InvalidSignature);
        }
        self.envelope()
    }
}

fn header_str(headers: &HeaderMap, name: &'static str) -> Result<Option<String>, WebhookError> {
    headers
        .get(name)
        .map(|value| {
            value
                .to_str()
                .map(|s| s.trim().to_string())
                .map_err(|e| WebhookError::InvalidHeader {
                    name,
                    reason: e.to_string(),
                })
        })
        .transpose()
}
