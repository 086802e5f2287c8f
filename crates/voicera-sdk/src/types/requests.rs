/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::WebhookEventType;

/// Grant type used by [`ClientCredentialsRequest`]
pub const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientCredentialsRequest {
    pub grant_type: String,
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
}

impl ClientCredentialsRequest {
    pub fn new(client_id: &str, client_secret: &str, scope: &str) -> Self {
        Self {
            grant_type: CLIENT_CREDENTIALS_GRANT.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            scope: scope.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevokeTokenRequest {
    pub token: String,
    pub token_type_hint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceCommandRequest {
    pub command: String,
    pub context: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSubscriber {
    pub integration_id: String,
    pub webhook_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookRequest {
    pub event_type: WebhookEventType,
    pub source: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub subscribers: Vec<WebhookSubscriber>,
}
