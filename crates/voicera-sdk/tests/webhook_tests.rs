/*
[INPUT]:  Webhook payloads, secrets, delivery headers and mock webhook endpoints
[OUTPUT]: Test results for signature verification and webhook management
[POS]:    Integration tests - webhooks
[UPDATE]: When signature format, delivery headers or webhook endpoints change
*/

mod common;

use common::{anonymous_client, setup_mock_server};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;
use tokio_test::assert_ok;
use voicera_sdk::{
    CreateWebhookRequest,
    Filters,
    VoiceraClient,
    WebhookDelivery,
    WebhookEventType,
    WebhookSubscriber,
    WebhookVerifier,
    compute_signature,
    verify_signature,
};
use voicera_sdk::webhook::{EVENT_HEADER, SIGNATURE_HEADER};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_and_free_function_agree() {
    let client = assert_ok!(VoiceraClient::with_defaults());
    let payload = br#"{"event":"user.created"}"#;
    let signature = compute_signature(payload, b"secret");

    assert!(verify_signature(payload, &signature, b"secret"));
    assert!(client.verify_webhook_signature(payload, &signature, b"secret"));
    assert!(!client.verify_webhook_signature(payload, &signature[..10], b"secret"));
}

#[test]
fn test_delivery_flow() {
    // The platform signs the compact `data` JSON, then posts it inside the envelope
    let data = r#"{"fileId":"f1","size":2048}"#;
    let body = format!(
        r#"{{"event":"file.uploaded","eventId":"evt-42","data":{data}}}"#
    );
    let verifier = WebhookVerifier::new("whsec_live");

    let mut headers = HeaderMap::new();
    headers.insert(SIGNATURE_HEADER, HeaderValue::from_str(&verifier.sign(data.as_bytes())).unwrap());
    headers.insert(EVENT_HEADER, HeaderValue::from_static("file.uploaded"));

    let delivery = assert_ok!(WebhookDelivery::from_headers(&headers, body));
    assert_eq!(delivery.signed_payload(), Some(data));
    let envelope = assert_ok!(delivery.verified_envelope("whsec_live"));
    assert_eq!(envelope.event, WebhookEventType::FileUploaded);
    assert_eq!(envelope.event_id, "evt-42");
    assert!(envelope.timestamp.is_none());
    assert_eq!(envelope.data["fileId"], "f1");

    assert!(delivery.verified_envelope("wrong").is_err());
    assert!(!delivery.verify_raw_body("whsec_live"));
}

#[tokio::test]
async fn test_webhook_management() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v1/webhooks"))
        .and(body_json(json!({
            "eventType": "user.created",
            "source": "sis",
            "payload": {},
            "subscribers": [{"integrationId": "int-1", "webhookUrl": "https://example.com/hook"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"eventId": "evt-1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/webhooks"))
        .and(query_param("status", "failed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"eventId": "evt-1"}]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/webhooks/evt-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    let request = CreateWebhookRequest {
        event_type: WebhookEventType::UserCreated,
        source: "sis".to_string(),
        payload: json!({}),
        subscribers: vec![WebhookSubscriber {
            integration_id: "int-1".to_string(),
            webhook_url: "https://example.com/hook".to_string(),
        }],
    };

    let created = assert_ok!(client.create_webhook(&request).await);
    assert_eq!(created["eventId"], "evt-1");

    let filters = Filters::new().with("status", "failed");
    let hooks = assert_ok!(client.get_webhooks(Some(&filters)).await);
    assert_eq!(hooks.len(), 1);

    let deleted = assert_ok!(client.delete_webhook("evt-1").await);
    assert_eq!(deleted["deleted"], true);
}
