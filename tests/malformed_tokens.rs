//! Decoder hardening tests.
//!
//! Feeds the token decoder hostile and damaged input and checks that it
//! always fails closed: no panics, no partially-decoded claims, and
//! expiry checks treat anything unreadable as expired.
//! Run with: `cargo test --test malformed_tokens`

#![allow(clippy::unwrap_used, clippy::expect_used)]

use vestibule::store::{InMemoryStorage, TokenStore};
use vestibule::token::decode;
use vestibule::SessionState;

// Both decode to {"sub":">>??","exp":9999999999}. The first is plain
// standard-alphabet base64 with padding, the second the url-safe
// unpadded form of the same bytes.
const PADDED_STANDARD: &str = "header.eyJzdWIiOiI+Pj8/IiwiZXhwIjo5OTk5OTk5OTk5fQ==.sig";
const URL_SAFE: &str = "header.eyJzdWIiOiI-Pj8_IiwiZXhwIjo5OTk5OTk5OTk5fQ.sig";

fn session() -> SessionState<InMemoryStorage> {
    SessionState::new(TokenStore::new(InMemoryStorage::new()))
}

#[test]
fn test_rejects_wrong_segment_counts() {
    for token in ["", "e30", "e30.e30", "e30.e30.e30.e30", "a.b.c.d.e", "..."] {
        assert_eq!(decode(token), None, "token {token:?} must not decode");
    }
}

#[test]
fn test_rejects_empty_segments() {
    for token in [".e30.sig", "e30..sig", "e30.e30.", ".."] {
        assert_eq!(decode(token), None, "token {token:?} must not decode");
    }
}

#[test]
fn test_rejects_impossible_base64_length() {
    // 5 characters: length % 4 == 1 can never be valid base64
    assert_eq!(decode("header.AAAAA.sig"), None);
}

#[test]
fn test_rejects_non_base64_payload() {
    assert_eq!(decode("header.!!!!.sig"), None);
    assert_eq!(decode("header.e3 0.sig"), None);
    assert_eq!(decode("header.\u{1f512}.sig"), None);
}

#[test]
fn test_rejects_payload_that_is_not_json() {
    // "aGVsbG8" decodes to "hello"
    assert_eq!(decode("header.aGVsbG8.sig"), None);
}

#[test]
fn test_rejects_json_that_is_not_an_object() {
    // "[1,2,3]", "\"claims\"" respectively
    assert_eq!(decode("header.WzEsMiwzXQ.sig"), None);
    assert_eq!(decode("header.ImNsYWltcyI.sig"), None);
}

#[test]
fn test_accepts_url_safe_and_padded_standard_alphabets() {
    let from_std = decode(PADDED_STANDARD).unwrap();
    let from_url = decode(URL_SAFE).unwrap();

    assert_eq!(from_std, from_url);
    assert_eq!(from_std.subject(), Some(">>??"));
    assert_eq!(from_std.exp, Some(9_999_999_999));
}

#[test]
fn test_decodes_payload_with_no_recognized_claims() {
    // "e30" decodes to "{}" - a valid but empty claims object
    let claims = decode("header.e30.sig").unwrap();

    assert_eq!(claims.subject(), None);
    assert_eq!(claims.exp, None);
    assert!(claims.is_expired(), "claims without exp read as expired");
}

#[test]
fn test_header_and_signature_are_ignored() {
    // Same payload under a garbage header and signature still decodes
    let claims = decode("@@@@.eyJleHAiOjk5OTk5OTk5OTl9.@@@@").unwrap();
    assert_eq!(claims.exp, Some(9_999_999_999));
}

#[test]
fn test_expiry_check_fails_closed() {
    let session = session();

    assert!(session.is_token_expired(None));
    assert!(session.is_token_expired(Some("")));
    assert!(session.is_token_expired(Some("garbage")));
    assert!(session.is_token_expired(Some("header.aGVsbG8.sig")));
    assert!(session.is_token_expired(Some("header.e30.sig")));

    assert!(!session.is_token_expired(Some(URL_SAFE)));
}

#[test]
fn test_random_input_never_panics() {
    use rand::distributions::Alphanumeric;
    use rand::Rng;

    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let len = rng.gen_range(0..64);
        let garbage: String = (&mut rng)
            .sample_iter(Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();

        let _ = decode(&garbage);
        let _ = decode(&format!("{garbage}.{garbage}.{garbage}"));
    }
}

#[test]
fn test_random_bytes_never_panic() {
    use rand::Rng;

    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let len = rng.gen_range(0..64);
        let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let input = String::from_utf8_lossy(&bytes);

        let _ = decode(&input);
    }
}

#[test]
fn test_malformed_stored_token_reads_as_logged_out() {
    let store = TokenStore::new(InMemoryStorage::new());
    store.store("definitely.not&valid.jwt");
    let session = SessionState::new(store);

    assert!(!session.is_authenticated());
    assert_eq!(session.subject_email(), None);
    assert_eq!(session.expires_at(), None);
    assert_eq!(session.minutes_until_expiry(), None);
}
