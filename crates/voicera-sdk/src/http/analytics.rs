/*
[INPUT]:  Analytics type names and filters
[OUTPUT]: Analytics reports and real-time snapshots
[POS]:    HTTP layer - analytics endpoints
[UPDATE]: When adding analytics views or changing paths
*/

use serde_json::Value;

use crate::http::request::{ApiRequest, segment};
use crate::http::{Result, VoiceraClient};
use crate::types::Filters;

impl VoiceraClient {
    /// GET /analytics/{type}?{filters}
    pub async fn get_analytics(&self, analytics_type: &str, filters: Option<&Filters>) -> Result<Value> {
        let request = ApiRequest::get(format!("/analytics/{}", segment(analytics_type)?)).with_filters(filters);
        self.dispatch(request).await
    }

    /// GET /analytics/real-time
    pub async fn get_real_time_metrics(&self) -> Result<Value> {
        self.dispatch(ApiRequest::get("/analytics/real-time")).await
    }
}
