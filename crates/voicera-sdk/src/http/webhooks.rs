/*
[INPUT]:  Webhook definitions, identifiers, list filters, delivery payloads
[OUTPUT]: Webhook records and signature verification results
[POS]:    HTTP layer - webhook management endpoints
[UPDATE]: When changing webhook bodies or paths
*/

use serde_json::Value;

use crate::http::request::{ApiRequest, segment};
use crate::http::{Result, VoiceraClient};
use crate::types::{CreateWebhookRequest, Filters, list_items};
use crate::webhook;

impl VoiceraClient {
    /// POST /webhooks
    pub async fn create_webhook(&self, webhook: &CreateWebhookRequest) -> Result<Value> {
        let request = ApiRequest::post("/webhooks").with_body(webhook)?;
        self.dispatch(request).await
    }

    /// POST /webhooks with a caller-built body
    pub async fn create_webhook_raw(&self, webhook: Value) -> Result<Value> {
        let request = ApiRequest::post("/webhooks").with_json(webhook);
        self.dispatch(request).await
    }

    /// GET /webhooks?{filters}
    pub async fn get_webhooks(&self, filters: Option<&Filters>) -> Result<Vec<Value>> {
        let request = ApiRequest::get("/webhooks").with_filters(filters);
        self.dispatch(request).await.map(list_items)
    }

    /// DELETE /webhooks/{id}
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<Value> {
        let request = ApiRequest::delete(format!("/webhooks/{}", segment(webhook_id)?));
        self.dispatch(request).await
    }

    /// Same check as [`webhook::verify_signature`]; no session state involved
    pub fn verify_webhook_signature(&self, payload: &[u8], signature: &str, secret: &[u8]) -> bool {
        webhook::verify_signature(payload, signature, secret)
    }
}
