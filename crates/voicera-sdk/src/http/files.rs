/*
[INPUT]:  Streamed file uploads with metadata, file identifiers
[OUTPUT]: File records as JSON values
[POS]:    HTTP layer - file endpoints (multipart upload)
[UPDATE]: When changing upload form fields or file paths
*/

use serde_json::Value;

use crate::http::request::{ApiRequest, FileUpload, segment};
use crate::http::{Result, VoiceraClient};

impl VoiceraClient {
    /// Upload a file as multipart form data.
    ///
    /// POST /files/upload with a `metadata` JSON field and a streamed `file` part
    pub async fn upload_file(&self, file: FileUpload, metadata: Option<Value>) -> Result<Value> {
        let metadata = metadata.unwrap_or_else(|| Value::Object(Default::default()));
        let request = ApiRequest::post("/files/upload").with_multipart(file, metadata);
        self.dispatch(request).await
    }

    /// GET /files/{id}
    pub async fn get_file(&self, file_id: &str) -> Result<Value> {
        let request = ApiRequest::get(format!("/files/{}", segment(file_id)?));
        self.dispatch(request).await
    }

    /// DELETE /files/{id}
    pub async fn delete_file(&self, file_id: &str) -> Result<Value> {
        let request = ApiRequest::delete(format!("/files/{}", segment(file_id)?));
        self.dispatch(request).await
    }
}
