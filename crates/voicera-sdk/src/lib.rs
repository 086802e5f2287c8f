/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Voicera SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Async client for the Voicera AI platform REST API.
//!
//! [`VoiceraClient`] wraps every REST resource (users, courses, quizzes,
//! files, voice commands, analytics, webhooks) and normalizes failures into
//! [`ApiError`]. Webhook deliveries can be verified with
//! [`verify_signature`] or [`WebhookDelivery`] without constructing a client.

pub mod auth;
pub mod http;
pub mod types;
pub mod webhook;

// Re-export commonly used types from auth
pub use auth::{AuthHeader, AuthResult, Session, TokenData};

// Re-export commonly used types from http
pub use http::{
    ApiError,
    ApiRequest,
    ClientConfig,
    FileUpload,
    RequestBody,
    Result,
    VoiceraClient,
};

// Re-export all types
pub use types::*;

// Re-export webhook verification helpers
pub use webhook::{
    WebhookDelivery,
    WebhookError,
    WebhookVerifier,
    compute_signature,
    verify_signature,
};
