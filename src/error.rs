//! API error taxonomy and its HTTP mapping.
//!
//! Every failure path funnels through [`ApiError`]; the `ResponseError`
//! impl is the single place a status code and `{"error": ...}` body are
//! chosen.  Store internals are logged, never sent to the client.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Token is missing")]
    TokenMissing,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    TokenInvalid,

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Login on a suspended / banned / deleted account; carries the
    /// actual status so the client can explain why.
    #[error("Account is {0}")]
    AccountNotActive(String),

    /// Also covers ownership mismatches: a row owned by another player
    /// is reported exactly like a missing row.
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// Could not acquire a connection/transaction at all.
    #[error("Database connection failed")]
    StoreUnavailable,

    /// Failure inside an open transaction; the transaction is rolled
    /// back and the client sees an opaque 500.
    #[error("Internal server error")]
    Store(#[from] sqlx::Error),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Map a unique-constraint violation to `Conflict`, anything else to
    /// `Store`.  Keys off the driver's structured error kind (SQLSTATE
    /// 23505 underneath), never the error text.
    pub fn conflict_on_unique(err: sqlx::Error, msg: &str) -> ApiError {
        match err {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                ApiError::Conflict(msg.into())
            }
            _ => ApiError::Store(err),
        }
    }

    /// Map a foreign-key violation to `NotFound` — the referenced row
    /// does not exist — anything else to `Store`.
    pub fn not_found_on_fk(err: sqlx::Error, msg: &str) -> ApiError {
        match err {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                ApiError::NotFound(msg.into())
            }
            _ => ApiError::Store(err),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::TokenMissing
            | ApiError::TokenExpired
            | ApiError::TokenInvalid
            | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::AccountNotActive(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::StoreUnavailable | ApiError::Store(_) | ApiError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Store(e) = self {
            log::error!("store operation failed: {e}");
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
