/*
[INPUT]:  Configured API key and access tokens from config or OAuth exchanges
[OUTPUT]: The credential header to attach to each outgoing request
[POS]:    Auth layer - credential state and header selection
[UPDATE]: When adding credential kinds or changing header precedence
*/

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, PoisonError, RwLock};

/// Header carrying a bearer token
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// Header carrying a raw API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Stored access token with optional expiry
#[derive(Debug, Clone, PartialEq)]
pub struct TokenData {
    pub token: String,
    /// `None` when the token was supplied directly rather than exchanged
    pub expires_at: Option<DateTime<Utc>>,
}

/// Credential header selected for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthHeader {
    Bearer(String),
    ApiKey(String),
}

impl AuthHeader {
    pub fn name(&self) -> &'static str {
        match self {
            AuthHeader::Bearer(_) => AUTHORIZATION_HEADER,
            AuthHeader::ApiKey(_) => API_KEY_HEADER,
        }
    }

    pub fn value(&self) -> String {
        match self {
            AuthHeader::Bearer(token) => format!("Bearer {token}"),
            AuthHeader::ApiKey(key) => key.clone(),
        }
    }
}

/// Thread-safe credential holder.
///
/// The API key is fixed at construction. The access token can be replaced
/// at any time and always takes precedence over the key.
#[derive(Debug, Clone)]
pub struct Session {
    api_key: Option<String>,
    token: Arc<RwLock<Option<TokenData>>>,
}

impl Session {
    pub fn new(api_key: Option<String>, access_token: Option<String>) -> Self {
        let token = access_token.map(|token| TokenData {
            token,
            expires_at: None,
        });
        Self {
            api_key,
            token: Arc::new(RwLock::new(token)),
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Store a token that never expires locally
    pub fn set_token(&self, token: impl Into<String>) {
        self.store(TokenData {
            token: token.into(),
            expires_at: None,
        });
    }

    /// Store a token returned by an exchange with its lifetime in seconds
    pub fn set_token_with_expiry(&self, token: impl Into<String>, expires_in: u64) {
        // Lifetimes too large to represent are treated as non-expiring
        let expires_at = i64::try_from(expires_in)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl));
        self.store(TokenData {
            token: token.into(),
            expires_at,
        });
    }

    /// Get the current token if available
    pub fn token(&self) -> Option<String> {
        let guard = self.token.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().map(|data| data.token.clone())
    }

    pub fn token_data(&self) -> Option<TokenData> {
        let guard = self.token.read().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }

    /// True only when a stored token has a known expiry in the past
    pub fn is_token_expired(&self) -> bool {
        let guard = self.token.read().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref().and_then(|data| data.expires_at) {
            Some(expires_at) => Utc::now() >= expires_at,
            None => false,
        }
    }

    pub fn clear_token(&self) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Header for the next request: token beats key, neither yields `None`
    pub fn auth_header(&self) -> Option<AuthHeader> {
        if let Some(token) = self.token() {
            return Some(AuthHeader::Bearer(token));
        }
        self.api_key.clone().map(AuthHeader::ApiKey)
    }

    fn store(&self, data: TokenData) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(data);
    }
}
