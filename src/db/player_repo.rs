//! Player account queries (signup, login, profile, search).

use sqlx::PgConnection;

use crate::db::models::{PlayerAuth, ProfileInfo, PublicPlayer};
use crate::error::ApiError;

/// Insert a new active player and return its id.
/// A duplicate username or email surfaces as `Conflict`.
pub async fn create(
    conn: &mut PgConnection,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<i64, ApiError> {
    sqlx::query_scalar(
        r#"INSERT INTO players (username, email, password_hash, account_status)
           VALUES ($1, $2, $3, 'active')
           RETURNING player_id"#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| ApiError::conflict_on_unique(e, "Username or email already exists"))
}

/// Give a fresh account the default role, inside the signup transaction.
pub async fn assign_default_role(conn: &mut PgConnection, player_id: i64) -> Result<(), ApiError> {
    sqlx::query(
        r#"INSERT INTO player_roles (player_id, role_id)
           SELECT $1, role_id FROM roles WHERE role_name = 'player'"#,
    )
    .bind(player_id)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub async fn find_by_username(
    conn: &mut PgConnection,
    username: &str,
) -> Result<Option<PlayerAuth>, ApiError> {
    let row = sqlx::query_as::<_, PlayerAuth>(
        r#"SELECT player_id, username, email, password_hash, account_status
             FROM players
            WHERE username = $1"#,
    )
    .bind(username)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(row)
}

pub async fn touch_last_login(conn: &mut PgConnection, player_id: i64) -> Result<(), ApiError> {
    sqlx::query("UPDATE players SET last_login = NOW() WHERE player_id = $1")
        .bind(player_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub async fn profile_info(
    conn: &mut PgConnection,
    player_id: i64,
) -> Result<Option<ProfileInfo>, ApiError> {
    let row = sqlx::query_as::<_, ProfileInfo>(
        r#"SELECT player_id, username, email, account_status, created_at, last_login
             FROM players
            WHERE player_id = $1"#,
    )
    .bind(player_id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(row)
}

/// Case-insensitive substring search over username / email.
/// Excludes the requester and non-active accounts; capped at `limit`.
pub async fn search(
    conn: &mut PgConnection,
    requester: i64,
    term: &str,
    limit: i64,
) -> Result<Vec<PublicPlayer>, ApiError> {
    let pattern = format!("%{term}%");
    let rows = sqlx::query_as::<_, PublicPlayer>(
        r#"SELECT player_id, username, email
             FROM players
            WHERE (username ILIKE $1 OR email ILIKE $1)
              AND player_id != $2
              AND account_status = 'active'
            ORDER BY username
            LIMIT $3"#,
    )
    .bind(pattern)
    .bind(requester)
    .bind(limit)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}
