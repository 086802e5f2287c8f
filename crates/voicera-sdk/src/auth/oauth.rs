/*
[INPUT]:  OAuth client id/secret and requested scope
[OUTPUT]: Access token stored in the client session
[POS]:    Auth layer - client-credentials exchange and token revocation
[UPDATE]: When OAuth endpoints or grant handling change
*/

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::http::request::ApiRequest;
use crate::http::{Result, VoiceraClient};
use crate::types::{ClientCredentialsRequest, RevokeTokenRequest};

/// Scope requested when the caller does not pick one
pub const DEFAULT_SCOPE: &str = "read write";

const TOKEN_PATH: &str = "/oauth/token";
const REVOKE_PATH: &str = "/oauth/revoke";

/// Response from the token endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResult {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub scope: String,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl VoiceraClient {
    /// Client-credentials exchange.
    ///
    /// POST /oauth/token
    ///
    /// On success the returned token replaces the active credential. On any
    /// failure the previous credential stays in place and the error is
    /// returned unchanged.
    pub async fn authenticate(
        &self,
        client_id: &str,
        client_secret: &str,
        scope: &str,
    ) -> Result<AuthResult> {
        let body = ClientCredentialsRequest::new(client_id, client_secret, scope);
        let request = ApiRequest::post(TOKEN_PATH).with_body(&body)?;
        let auth: AuthResult = self.dispatch_as(request).await?;

        // expires_in of 0 means the server did not report a lifetime
        if auth.expires_in > 0 {
            self.session()
                .set_token_with_expiry(auth.access_token.clone(), auth.expires_in);
        } else {
            self.session().set_token(auth.access_token.clone());
        }
        info!(
            client_id,
            scope = %auth.scope,
            expires_in = auth.expires_in,
            "voicera access token obtained"
        );

        Ok(auth)
    }

    /// [`VoiceraClient::authenticate`] with the `"read write"` scope
    pub async fn authenticate_default_scope(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<AuthResult> {
        self.authenticate(client_id, client_secret, DEFAULT_SCOPE).await
    }

    /// Revoke the active access token and forget it.
    ///
    /// POST /oauth/revoke
    ///
    /// Without an active token nothing is sent. After success a configured
    /// API key, if any, becomes the active credential again.
    pub async fn revoke_token(&self) -> Result<()> {
        let Some(token) = self.session().token() else {
            debug!("no access token to revoke");
            return Ok(());
        };

        let body = RevokeTokenRequest {
            token: token.clone(),
            token_type_hint: "access_token".to_string(),
        };
        let request = ApiRequest::post(REVOKE_PATH).with_body(&body)?;
        self.dispatch(request).await?;

        // Only clear if no newer token was stored while the request was in flight
        if self.session().token().as_deref() == Some(token.as_str()) {
            self.session().clear_token();
        }
        info!("voicera access token revoked");
        Ok(())
    }

    /// Replace the active credential with an externally obtained token
    pub fn set_access_token(&self, token: impl Into<String>) {
        self.session().set_token(token);
    }

    pub fn clear_access_token(&self) {
        self.session().clear_token();
    }

    pub fn access_token(&self) -> Option<String> {
        self.session().token()
    }
}
