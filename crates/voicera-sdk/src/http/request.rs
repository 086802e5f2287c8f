/*
[INPUT]:  HTTP verb, endpoint path, filters and an optional JSON or multipart body
[OUTPUT]: A per-call request descriptor consumed by the dispatcher
[POS]:    HTTP layer - request description and upload streaming
[UPDATE]: When adding body kinds or upload sources
*/

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Body, Method};
use serde::Serialize;
use serde_json::Value;

use crate::http::{ApiError, Result};
use crate::types::Filters;

/// Multipart field carrying the JSON-encoded metadata
pub const METADATA_FIELD: &str = "metadata";
/// Multipart field carrying the file contents
pub const FILE_FIELD: &str = "file";

/// File contents streamed into a multipart upload.
///
/// The body is never buffered up front; it is read as the transport sends it.
#[derive(Debug)]
pub struct FileUpload {
    body: Body,
    file_name: String,
    mime_type: Option<String>,
    length: Option<u64>,
}

impl FileUpload {
    /// Stream an already opened file
    pub fn from_file(file: tokio::fs::File, file_name: impl Into<String>) -> Self {
        Self {
            body: Body::from(file),
            file_name: file_name.into(),
            mime_type: None,
            length: None,
        }
    }

    /// Open `path` and stream it, using the final path component as file name
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|e| ApiError::file(path.display(), e))?;
        let length = file
            .metadata()
            .await
            .map_err(|e| ApiError::file(path.display(), e))?
            .len();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::from_file(file, file_name).with_length(length))
    }

    /// Stream chunks produced by any fallible byte stream
    pub fn from_stream<S, E>(stream: S, file_name: impl Into<String>) -> Self
    where
        S: futures_util::stream::Stream<Item = std::result::Result<Vec<u8>, E>> + Send + Sync + 'static,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self {
            body: Body::wrap_stream(stream),
            file_name: file_name.into(),
            mime_type: None,
            length: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Declare the total size so the part is sent with a known length
    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn length(&self) -> Option<u64> {
        self.length
    }

    fn into_part(self) -> Result<Part> {
        let part = match self.length {
            Some(length) => Part::stream_with_length(self.body, length),
            None => Part::stream(self.body),
        };
        let part = part.file_name(self.file_name);
        match self.mime_type {
            Some(mime) => part.mime_str(&mime).map_err(ApiError::invalid_request),
            None => Ok(part),
        }
    }
}

/// Body attached to a request
#[derive(Debug)]
pub enum RequestBody {
    Json(Value),
    Multipart { file: FileUpload, metadata: Value },
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart { .. })
    }

    /// Build the multipart form: `metadata` as JSON text, then the `file` part
    pub(crate) fn into_form(file: FileUpload, metadata: &Value) -> Result<Form> {
        let metadata = serde_json::to_string(metadata).map_err(ApiError::invalid_request)?;
        Ok(Form::new()
            .text(METADATA_FIELD, metadata)
            .part(FILE_FIELD, file.into_part()?))
    }
}

/// One API call: verb, path under `/{version}`, filters and body
#[derive(Debug)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Option<Filters>,
    pub(crate) body: Option<RequestBody>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, filters: Filters) -> Self {
        self.query = Some(filters);
        self
    }

    /// Set the query from optional filters; `None` keeps any existing query
    pub fn with_filters(mut self, filters: Option<&Filters>) -> Self {
        if let Some(filters) = filters {
            self.query = Some(filters.clone());
        }
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Serialize a typed body into the JSON payload
    pub fn with_body<T: Serialize>(self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(ApiError::invalid_request)?;
        Ok(self.with_json(value))
    }

    pub fn with_multipart(mut self, file: FileUpload, metadata: Value) -> Self {
        self.body = Some(RequestBody::Multipart { file, metadata });
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&Filters> {
        self.query.as_ref()
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }
}

/// Percent-encode an identifier so it stays a single path segment.
///
/// Empty, `.` and `..` are rejected: URL normalization would drop or
/// climb over them, even when percent-encoded.
pub(crate) fn segment(id: &str) -> Result<String> {
    if matches!(id, "" | "." | "..") {
        return Err(ApiError::invalid_request(format!(
            "identifier {id:?} is not a valid path segment"
        )));
    }
    Ok(urlencoding::encode(id).into_owned())
}
