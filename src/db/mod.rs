//! Per-request transaction discipline over the Postgres pool.
//!
//! Every handler that touches data runs inside exactly one transaction:
//! [`begin`] acquires it, the handler commits on success, and dropping
//! the transaction on any error path rolls it back.

use sqlx::{PgPool, Postgres, Transaction};

use crate::error::ApiError;

pub mod achievement_repo;
pub mod character_repo;
pub mod friend_repo;
pub mod game_repo;
pub mod models;
pub mod player_repo;

/// Start the request's transaction.
///
/// Acquisition failure is `StoreUnavailable`, surfaced before any
/// operation logic runs and distinct from in-transaction failures.
pub async fn begin(db: &PgPool) -> Result<Transaction<'static, Postgres>, ApiError> {
    db.begin().await.map_err(|e| {
        log::error!("acquiring transaction: {e}");
        ApiError::StoreUnavailable
    })
}
