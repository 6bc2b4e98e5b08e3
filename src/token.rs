//! Stateless bearer-token issue / validation (JWT, HS256).
//!
//! A token is the only session state: `{sub: player_id, username, exp}`
//! signed with the process-wide secret.  There is no revocation list; a
//! leaked token stays valid until its natural expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Player id.
    pub sub: i64,
    pub username: String,
    /// Unix timestamp (seconds).
    pub exp: usize,
}

/// Mint a token valid for `ttl_hours` from now.
pub fn issue(secret: &str, player_id: i64, username: &str, ttl_hours: i64) -> Result<String, ApiError> {
    let exp = (Utc::now() + Duration::hours(ttl_hours)).timestamp() as usize;
    let claims = Claims {
        sub: player_id,
        username: username.to_owned(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| ApiError::Internal)
}

/// Verify the value of an `Authorization` header.
///
/// Accepts the raw token with or without a `Bearer ` prefix.  Expiry is
/// checked with zero leeway so the configured window is exact.
pub fn validate(secret: &str, header: Option<&str>) -> Result<Claims, ApiError> {
    let raw = header.ok_or(ApiError::TokenMissing)?;
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw);

    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => ApiError::TokenExpired,
        _ => ApiError::TokenInvalid,
    })
}
