/*
[INPUT]:  Authentication configuration and credentials
[OUTPUT]: Credential headers, OAuth tokens and auth errors
[POS]:    Auth layer - handles Voicera API authentication
[UPDATE]: When auth flow or credential precedence changes
*/

pub mod oauth;
pub mod session;

pub use oauth::{AuthResult, DEFAULT_SCOPE};
pub use session::{AuthHeader, Session, TokenData};
