//! Character CRUD scoped to the owning player.
//!
//! Every mutation filters on `(character_id, player_id)`: a row owned by
//! another player and a missing row both affect zero rows and surface as
//! the same `NotFound`.

use sqlx::PgConnection;

use crate::db::models::Character;
use crate::error::ApiError;

pub async fn list(conn: &mut PgConnection, player_id: i64) -> Result<Vec<Character>, ApiError> {
    let rows = sqlx::query_as::<_, Character>(
        r#"SELECT character_id, character_name, level, creation_date
             FROM characters
            WHERE player_id = $1
            ORDER BY level DESC"#,
    )
    .bind(player_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

/// Character names are unique per player, not globally.
pub async fn create(
    conn: &mut PgConnection,
    player_id: i64,
    name: &str,
    level: i32,
) -> Result<i64, ApiError> {
    sqlx::query_scalar(
        r#"INSERT INTO characters (player_id, character_name, level)
           VALUES ($1, $2, $3)
           RETURNING character_id"#,
    )
    .bind(player_id)
    .bind(name)
    .bind(level)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| ApiError::conflict_on_unique(e, "Character name already exists for this player"))
}

/// Partial update: only the supplied fields change.
pub async fn update(
    conn: &mut PgConnection,
    player_id: i64,
    character_id: i64,
    name: Option<&str>,
    level: Option<i32>,
) -> Result<(), ApiError> {
    let res = sqlx::query(
        r#"UPDATE characters
              SET character_name = COALESCE($1, character_name),
                  level          = COALESCE($2, level)
            WHERE character_id = $3 AND player_id = $4"#,
    )
    .bind(name)
    .bind(level)
    .bind(character_id)
    .bind(player_id)
    .execute(&mut *conn)
    .await
    .map_err(|e| ApiError::conflict_on_unique(e, "Character name already exists for this player"))?;

    if res.rows_affected() == 0 {
        return Err(ApiError::NotFound("Character not found".into()));
    }
    Ok(())
}

pub async fn delete(
    conn: &mut PgConnection,
    player_id: i64,
    character_id: i64,
) -> Result<(), ApiError> {
    let res = sqlx::query("DELETE FROM characters WHERE character_id = $1 AND player_id = $2")
        .bind(character_id)
        .bind(player_id)
        .execute(&mut *conn)
        .await?;

    if res.rows_affected() == 0 {
        return Err(ApiError::NotFound("Character not found".into()));
    }
    Ok(())
}
