/*
[INPUT]:  None
[OUTPUT]: Rate-limit status and service health
[POS]:    HTTP layer - operational endpoints
[UPDATE]: When adding operational endpoints
*/

use serde_json::Value;

use crate::http::request::ApiRequest;
use crate::http::{Result, VoiceraClient};

impl VoiceraClient {
    /// GET /rate-limit
    pub async fn check_rate_limit(&self) -> Result<Value> {
        self.dispatch(ApiRequest::get("/rate-limit")).await
    }

    /// GET /health
    pub async fn health_check(&self) -> Result<Value> {
        self.dispatch(ApiRequest::get("/health")).await
    }
}
