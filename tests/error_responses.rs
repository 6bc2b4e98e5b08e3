//! Every failure becomes a status code plus an `{"error": ...}` body.

use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::ResponseError;
use gametrack_server::error::ApiError;
use serde_json::Value;

async fn body_of(err: ApiError) -> (StatusCode, Value) {
    let resp = err.error_response();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[actix_rt::test]
async fn conflict_keeps_its_message() {
    let (status, body) = body_of(ApiError::Conflict("Friend request already exists".into())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Friend request already exists");
}

#[actix_rt::test]
async fn ownership_mismatch_reads_like_absence() {
    let (status, body) = body_of(ApiError::NotFound("Character not found".into())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Character not found");
}

#[actix_rt::test]
async fn store_failures_are_opaque() {
    let (status, body) = body_of(ApiError::Store(sqlx::Error::PoolClosed)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

#[actix_rt::test]
async fn connection_failure_is_distinguishable_in_body() {
    let (status, body) = body_of(ApiError::StoreUnavailable).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database connection failed");
}

#[actix_rt::test]
async fn inactive_account_carries_status() {
    let (status, body) = body_of(ApiError::AccountNotActive("banned".into())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Account is banned");
}

#[actix_rt::test]
async fn auth_failures_share_the_unauthorized_status() {
    for err in [
        ApiError::TokenMissing,
        ApiError::TokenExpired,
        ApiError::TokenInvalid,
        ApiError::InvalidCredentials,
    ] {
        let (status, _) = body_of(err).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
