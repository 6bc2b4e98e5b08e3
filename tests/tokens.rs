//! Session-token lifecycle: issue, validate, expiry, extractor wiring.

use actix_web::{dev::Payload, test::TestRequest, FromRequest};
use gametrack_server::config::settings;
use gametrack_server::error::ApiError;
use gametrack_server::http::auth::AuthPlayer;
use gametrack_server::token;

const SECRET: &str = "unit-test-secret";

#[test]
fn issue_then_validate_round_trips_claims() {
    let tok = token::issue(SECRET, 42, "alice", 24).unwrap();
    let claims = token::validate(SECRET, Some(&tok)).unwrap();
    assert_eq!(claims.sub, 42);
    assert_eq!(claims.username, "alice");
}

#[test]
fn bearer_prefix_is_optional() {
    let tok = token::issue(SECRET, 7, "bob", 24).unwrap();
    let bare = token::validate(SECRET, Some(&tok)).unwrap();
    let prefixed = token::validate(SECRET, Some(&format!("Bearer {tok}"))).unwrap();
    assert_eq!(bare.sub, prefixed.sub);
}

#[test]
fn missing_header_is_token_missing() {
    assert!(matches!(
        token::validate(SECRET, None),
        Err(ApiError::TokenMissing)
    ));
}

#[test]
fn past_expiry_is_token_expired() {
    // Negative ttl puts exp an hour in the past; zero leeway means the
    // configured window is exact.
    let tok = token::issue(SECRET, 1, "carol", -1).unwrap();
    assert!(matches!(
        token::validate(SECRET, Some(&tok)),
        Err(ApiError::TokenExpired)
    ));
}

#[test]
fn wrong_secret_is_token_invalid() {
    let tok = token::issue(SECRET, 1, "dave", 24).unwrap();
    assert!(matches!(
        token::validate("another-secret", Some(&tok)),
        Err(ApiError::TokenInvalid)
    ));
}

#[test]
fn garbage_is_token_invalid() {
    assert!(matches!(
        token::validate(SECRET, Some("Bearer not.a.jwt")),
        Err(ApiError::TokenInvalid)
    ));
}

#[actix_rt::test]
async fn extractor_resolves_identity_from_header() {
    let tok = token::issue(&settings().secret_key, 99, "erin", 24).unwrap();
    let req = TestRequest::default()
        .insert_header(("Authorization", format!("Bearer {tok}")))
        .to_http_request();

    let auth = AuthPlayer::from_request(&req, &mut Payload::None)
        .await
        .unwrap();
    assert_eq!(auth.player_id, 99);
    assert_eq!(auth.username, "erin");
}

#[actix_rt::test]
async fn extractor_rejects_absent_header() {
    let req = TestRequest::default().to_http_request();
    let res = AuthPlayer::from_request(&req, &mut Payload::None).await;
    assert!(matches!(res, Err(ApiError::TokenMissing)));
}
