//! Friendship lifecycle over a normalized unordered pair.
//!
//! A friendship is symmetric, so the row always stores
//! `(player_one_id, player_two_id) = (min, max)` — enforced by a CHECK
//! constraint — and every query here normalizes first instead of
//! checking both orderings.

use sqlx::PgConnection;

use crate::db::models::FriendEntry;
use crate::error::ApiError;

/// Canonical storage order for an unordered player pair.
pub fn normalize_pair(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

pub async fn player_exists(conn: &mut PgConnection, player_id: i64) -> Result<bool, ApiError> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM players WHERE player_id = $1)")
            .bind(player_id)
            .fetch_one(&mut *conn)
            .await?;
    Ok(exists)
}

/// `Conflict` when any row for the pair already exists, pending or
/// accepted, regardless of which side sent first.
pub async fn send_request(
    conn: &mut PgConnection,
    sender: i64,
    target: i64,
) -> Result<(), ApiError> {
    let (lo, hi) = normalize_pair(sender, target);
    sqlx::query(
        r#"INSERT INTO friends (player_one_id, player_two_id, status)
           VALUES ($1, $2, 'pending')"#,
    )
    .bind(lo)
    .bind(hi)
    .execute(&mut *conn)
    .await
    .map_err(|e| ApiError::conflict_on_unique(e, "Friend request already exists"))?;
    Ok(())
}

/// pending -> accepted; there is no transition back.
pub async fn accept(conn: &mut PgConnection, me: i64, other: i64) -> Result<(), ApiError> {
    let (lo, hi) = normalize_pair(me, other);
    let res = sqlx::query(
        r#"UPDATE friends
              SET status = 'accepted'
            WHERE player_one_id = $1 AND player_two_id = $2
              AND status = 'pending'"#,
    )
    .bind(lo)
    .bind(hi)
    .execute(&mut *conn)
    .await?;

    if res.rows_affected() == 0 {
        return Err(ApiError::NotFound("Friend request not found".into()));
    }
    Ok(())
}

/// Removes a pending request or an accepted friendship alike.
pub async fn remove(conn: &mut PgConnection, me: i64, other: i64) -> Result<(), ApiError> {
    let (lo, hi) = normalize_pair(me, other);
    let res = sqlx::query("DELETE FROM friends WHERE player_one_id = $1 AND player_two_id = $2")
        .bind(lo)
        .bind(hi)
        .execute(&mut *conn)
        .await?;

    if res.rows_affected() == 0 {
        return Err(ApiError::NotFound("Friendship not found".into()));
    }
    Ok(())
}

async fn list_with_status(
    conn: &mut PgConnection,
    me: i64,
    status: &str,
) -> Result<Vec<FriendEntry>, ApiError> {
    let rows = sqlx::query_as::<_, FriendEntry>(
        r#"SELECT p.player_id, p.username, p.email, f.status
             FROM friends f
             JOIN players p
               ON p.player_id = CASE WHEN f.player_one_id = $1
                                     THEN f.player_two_id
                                     ELSE f.player_one_id END
            WHERE (f.player_one_id = $1 OR f.player_two_id = $1)
              AND f.status = $2
            ORDER BY p.username"#,
    )
    .bind(me)
    .bind(status)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn friends(conn: &mut PgConnection, me: i64) -> Result<Vec<FriendEntry>, ApiError> {
    list_with_status(conn, me, "accepted").await
}

pub async fn pending_requests(
    conn: &mut PgConnection,
    me: i64,
) -> Result<Vec<FriendEntry>, ApiError> {
    list_with_status(conn, me, "pending").await
}

#[cfg(test)]
mod tests {
    use super::normalize_pair;

    #[test]
    fn pair_order_is_canonical() {
        assert_eq!(normalize_pair(3, 7), (3, 7));
        assert_eq!(normalize_pair(7, 3), (3, 7));
    }

    #[test]
    fn both_orderings_map_to_the_same_row_key() {
        assert_eq!(normalize_pair(1, 2), normalize_pair(2, 1));
    }
}
