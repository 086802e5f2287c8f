/*
[INPUT]:  Client configuration (base URL, API version, credentials, timeout)
[OUTPUT]: Configured client that performs one HTTP exchange per call
[POS]:    HTTP layer - core client and request dispatch
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::auth::{AuthHeader, Session};
use crate::http::request::{ApiRequest, RequestBody};
use crate::http::{ApiError, Result};

/// Production Voicera API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.voicera.ai";
/// Version prefix inserted before every endpoint path
pub const DEFAULT_API_VERSION: &str = "v1";
/// Per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// User agent attached to every request
pub const USER_AGENT: &str = concat!("VoiceraAI-RustSDK/", env!("CARGO_PKG_VERSION"));

const JSON_CONTENT_TYPE: &str = "application/json";

/// Client configuration.
///
/// Every field has a default, so `{}` deserializes to [`ClientConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            access_token: None,
            api_version: default_api_version(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfig {
    /// Read `VOICERA_*` environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            base_url: non_empty("VOICERA_BASE_URL").unwrap_or(defaults.base_url),
            api_key: non_empty("VOICERA_API_KEY"),
            access_token: non_empty("VOICERA_ACCESS_TOKEN"),
            api_version: non_empty("VOICERA_API_VERSION").unwrap_or(defaults.api_version),
            timeout_ms: non_empty("VOICERA_TIMEOUT_MS")
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.timeout_ms),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Main HTTP client for the Voicera API
#[derive(Debug, Clone)]
pub struct VoiceraClient {
    http_client: Client,
    base_url: String,
    api_version: String,
    timeout: Duration,
    session: Session,
}

impl VoiceraClient {
    /// Create a client from configuration.
    ///
    /// Missing credentials are fine; public endpoints work without them.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::config(format!("invalid base URL {base_url:?}: {e}")))?;

        let timeout = config.timeout();
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::config)?;

        Ok(Self {
            http_client,
            base_url,
            api_version: config.api_version,
            timeout,
            session: Session::new(config.api_key, config.access_token),
        })
    }

    /// Create a client against the production endpoint without credentials
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Header the next request will carry, if any
    pub fn current_auth_header(&self) -> Option<AuthHeader> {
        self.session.auth_header()
    }

    /// Full URL for an API path: `{base_url}/{api_version}{path}`
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}/{}{}", self.base_url, self.api_version, path);
        Url::parse(&raw).map_err(|e| ApiError::invalid_request(format!("invalid URL {raw:?}: {e}")))
    }

    /// Perform one HTTP exchange and return the parsed JSON body.
    ///
    /// An empty success body yields an empty object. Status >= 400 and
    /// transport failures are returned as [`ApiError`]; nothing is retried.
    pub async fn dispatch(&self, request: ApiRequest) -> Result<Value> {
        self.execute(request).await.map(|(_, value)| value)
    }

    /// Dispatch and decode the body into `T`
    pub async fn dispatch_as<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let (status, value) = self.execute(request).await?;
        serde_json::from_value(value).map_err(|e| ApiError::invalid_response(status, e))
    }

    async fn execute(&self, request: ApiRequest) -> Result<(StatusCode, Value)> {
        let ApiRequest {
            method,
            path,
            query,
            body,
        } = request;
        let url = self.endpoint_url(&path)?;

        debug!(method = %method, url = %url, "voicera request");

        let mut builder = self.http_client.request(method.clone(), url.clone());
        if let Some(query) = query.as_ref().filter(|query| !query.is_empty()) {
            builder = builder.query(query);
        }
        if let Some(header) = self.session.auth_header() {
            builder = builder.header(header.name(), header.value());
        }
        builder = match body {
            Some(RequestBody::Multipart { file, metadata }) => {
                builder.multipart(RequestBody::into_form(file, &metadata)?)
            }
            Some(RequestBody::Json(value)) => builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).json(&value),
            None => builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE),
        };

        let response = builder.send().await.map_err(|err| {
            let err = ApiError::from(err);
            warn!(method = %method, url = %url, error = %err, "voicera request failed");
            err
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            let err = ApiError::from(err);
            warn!(method = %method, url = %url, status = status.as_u16(), error = %err, "voicera response body unreadable");
            err
        })?;

        debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            "voicera response"
        );

        if status.as_u16() >= 400 {
            let err = ApiError::from_response(status, &body);
            warn!(
                method = %method,
                url = %url,
                status = err.status_code,
                message = %err.message,
                "voicera api error"
            );
            return Err(err);
        }

        parse_success_body(status, &body).map(|value| (status, value))
    }
}

/// Empty bodies become `{}`; a non-empty body must be valid JSON
fn parse_success_body(status: StatusCode, body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::invalid_response(status, e))
}
