/*
[INPUT]:  Inbound webhook payloads, signatures and shared secrets
[OUTPUT]: Signature checks and parsed delivery envelopes
[POS]:    Webhook layer - integrity verification for platform deliveries
[UPDATE]: When signing algorithm or delivery headers change
*/

pub mod delivery;
pub mod signature;

pub use delivery::{
    EVENT_HEADER,
    EVENT_ID_HEADER,
    SIGNATURE_HEADER,
    WebhookDelivery,
    WebhookEnvelope,
    WebhookError,
};
pub use signature::{WebhookVerifier, compute_signature, verify_signature};
