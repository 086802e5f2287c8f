/*
[INPUT]:  A sample webhook body and shared secret
[OUTPUT]: Signature and verification results printed to stdout
[POS]:    Examples - webhook signature verification
[UPDATE]: When webhook verification helpers change
*/

use reqwest::header::{HeaderMap, HeaderValue};
use voicera_sdk::webhook::{EVENT_HEADER, SIGNATURE_HEADER};
use voicera_sdk::*;

/// Example: verify an inbound webhook delivery (no network access needed)
fn main() {
    println!("=== Voicera Webhook Verification Example ===\n");

    let secret = "whsec_example";
    let data = br#"{"score":88}"#;
    let body = br#"{"event":"quiz.completed","eventId":"evt-1","data":{"score":88}}"#;

    // Deliveries are signed over the `data` field, not the whole body
    let signature = compute_signature(data, secret.as_bytes());
    println!("Signature: {}", signature);

    let mut headers = HeaderMap::new();
    headers.insert(
        SIGNATURE_HEADER,
        HeaderValue::from_str(&signature).expect("hex is a valid header value"),
    );
    headers.insert(EVENT_HEADER, HeaderValue::from_static("quiz.completed"));

    let delivery = match WebhookDelivery::from_headers(&headers, body.to_vec()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Rejected delivery: {}", e);
            return;
        }
    };

    match delivery.verified_envelope(secret) {
        Ok(envelope) => println!("✓ Verified {} ({})", envelope.event, envelope.event_id),
        Err(e) => eprintln!("✗ {}", e),
    }

    let forged = verify_signature(data, &"0".repeat(64), secret.as_bytes());
    println!("Forged signature accepted: {}", forged);
}
