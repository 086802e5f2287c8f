/*
[INPUT]:  Voice command text with context, list filters
[OUTPUT]: Command processing results and command history
[POS]:    HTTP layer - voice command endpoints
[UPDATE]: When changing voice request bodies or paths
*/

use serde_json::Value;

use crate::http::request::ApiRequest;
use crate::http::{Result, VoiceraClient};
use crate::types::{Filters, VoiceCommandRequest, list_items};

impl VoiceraClient {
    /// Process a voice command
    ///
    /// POST /voice/process with `{"command": ..., "context": {...}}`
    pub async fn process_voice_command(&self, command: &str, context: Option<Value>) -> Result<Value> {
        let body = VoiceCommandRequest {
            command: command.to_string(),
            context: context.unwrap_or_else(|| Value::Object(Default::default())),
        };
        let request = ApiRequest::post("/voice/process").with_body(&body)?;
        self.dispatch(request).await
    }

    /// GET /voice/commands?{filters}
    pub async fn get_voice_commands(&self, filters: Option<&Filters>) -> Result<Vec<Value>> {
        let request = ApiRequest::get("/voice/commands").with_filters(filters);
        self.dispatch(request).await.map(list_items)
    }
}
