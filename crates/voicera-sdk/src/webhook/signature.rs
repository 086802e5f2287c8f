/*
[INPUT]:  Payload bytes, shared secret and a hex signature
[OUTPUT]: Lowercase hex HMAC-SHA256 signatures and constant-time checks
[POS]:    Webhook layer - signature computation and verification
[UPDATE]: When changing the MAC algorithm or signature encoding
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn keyed_mac(secret: &[u8], payload: &[u8]) -> HmacSha256 {
    // HMAC accepts keys of any length, so construction cannot fail
    let mut mac = <HmacSha256 as Mac>::new_from_slice(secret)
        .unwrap_or_else(|_| unreachable!("HMAC takes keys of any size"));
    mac.update(payload);
    mac
}

/// HMAC-SHA256 of `payload` keyed by `secret`, lowercase hex
pub fn compute_signature(payload: &[u8], secret: &[u8]) -> String {
    hex::encode(keyed_mac(secret, payload).finalize().into_bytes())
}

/// Check `signature` against the expected MAC in constant time.
///
/// Only the canonical lowercase hex form is accepted. Anything else,
/// including a wrong length, returns `false` rather than an error.
pub fn verify_signature(payload: &[u8], signature: &str, secret: &[u8]) -> bool {
    if !signature.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return false;
    }
    let Ok(provided) = hex::decode(signature) else {
        return false;
    };
    keyed_mac(secret, payload).verify_slice(&provided).is_ok()
}

/// Signs and verifies payloads with one shared secret
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: Vec<u8>,
}

impl WebhookVerifier {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    pub fn sign(&self, payload: &[u8]) -> String {
        compute_signature(payload, &self.secret)
    }

    pub fn verify(&self, payload: &[u8], signature: &str) -> bool {
        verify_signature(payload, signature, &self.secret)
    }
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_known_vector() {
        // RFC 4231 test case 2
        let signature = compute_signature(b"what do ya want for nothing?", b"Jefe");
        assert_eq!(
            signature,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[rstest]
    #[case(b"".as_slice(), b"".as_slice())]
    #[case(b"{\"event\":\"user.created\"}".as_slice(), b"whsec_123".as_slice())]
    #[case(&[0u8, 255, 7, 128], &[1u8; 100])]
    fn test_roundtrip(#[case] payload: &[u8], #[case] secret: &[u8]) {
        let signature = compute_signature(payload, secret);
        assert_eq!(signature.len(), 64);
        assert!(verify_signature(payload, &signature, secret));
    }

    #[test]
    fn test_single_byte_difference_rejected() {
        let payload = b"payload";
        let secret = b"secret";
        let signature = compute_signature(payload, secret);

        for index in 0..signature.len() {
            let mut tampered = signature.clone().into_bytes();
            tampered[index] = if tampered[index] == b'0' { b'1' } else { b'0' };
            let tampered = String::from_utf8(tampered).unwrap();
            assert!(!verify_signature(payload, &tampered, secret), "index {index}");
        }
    }

    #[rstest]
    #[case("")]
    #[case("abcd")]
    #[case("not-hex-at-all")]
    fn test_malformed_signature_is_false(#[case] signature: &str) {
        assert!(!verify_signature(b"payload", signature, b"secret"));
    }

    #[test]
    fn test_uppercase_signature_is_false() {
        let signature = compute_signature(b"payload", b"secret").to_uppercase();
        assert!(!verify_signature(b"payload", &signature, b"secret"));
    }

    #[test]
    fn test_longer_signature_is_false() {
        let mut signature = compute_signature(b"payload", b"secret");
        signature.push_str("00");
        assert!(!verify_signature(b"payload", &signature, b"secret"));
    }

    #[test]
    fn test_wrong_secret_is_false() {
        let signature = compute_signature(b"payload", b"secret");
        assert!(!verify_signature(b"payload", &signature, b"other"));
    }

    #[test]
    fn test_verifier_matches_free_functions() {
        let verifier = WebhookVerifier::new("shared");
        let signature = verifier.sign(b"body");
        assert_eq!(signature, compute_signature(b"body", b"shared"));
        assert!(verifier.verify(b"body", &signature));
        assert!(!format!("{verifier:?}").contains("shared"));
    }
}
