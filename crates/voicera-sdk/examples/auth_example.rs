/*
[INPUT]:  VOICERA_* environment variables and OAuth client credentials
[OUTPUT]: Authenticated client and a sample user listing
[POS]:    Examples - authentication flow demonstration
[UPDATE]: When auth flow changes
*/

use tracing_subscriber::EnvFilter;
use voicera_sdk::*;

/// Example: Authentication flow
///
/// 1. Build the client from `VOICERA_*` environment variables
/// 2. Exchange `VOICERA_CLIENT_ID` / `VOICERA_CLIENT_SECRET` for a token
/// 3. List users with the new token
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Voicera Authentication Example ===\n");

    let client = match VoiceraClient::new(ClientConfig::from_env()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}", client.base_url());

    let (Ok(client_id), Ok(client_secret)) = (
        std::env::var("VOICERA_CLIENT_ID"),
        std::env::var("VOICERA_CLIENT_SECRET"),
    ) else {
        println!("\nSet VOICERA_CLIENT_ID and VOICERA_CLIENT_SECRET to run the token exchange.");
        return;
    };

    match client.authenticate_default_scope(&client_id, &client_secret).await {
        Ok(auth) => println!("✓ Token obtained ({}, expires in {}s)", auth.token_type, auth.expires_in),
        Err(e) if e.is_unauthorized() => {
            eprintln!("Credentials rejected: {}", e);
            return;
        }
        Err(e) => {
            eprintln!("Authentication failed (status {}): {}", e.status_code, e);
            return;
        }
    }

    let filters = Filters::new().with("limit", 5);
    match client.get_users(Some(&filters)).await {
        Ok(users) => println!("✓ Fetched {} users", users.len()),
        Err(e) => eprintln!("Failed to list users: {}", e),
    }
}
