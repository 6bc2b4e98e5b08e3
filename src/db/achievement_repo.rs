//! Achievement queries: earned facts and per-game catalogues.

use sqlx::PgConnection;

use crate::db::models::{EarnedAchievement, GameAchievement};
use crate::error::ApiError;

/// Only achievements the player has actually earned, newest first.
pub async fn earned(
    conn: &mut PgConnection,
    player_id: i64,
) -> Result<Vec<EarnedAchievement>, ApiError> {
    let rows = sqlx::query_as::<_, EarnedAchievement>(
        r#"SELECT a.achievement_id, a.name, a.description, a.points_value,
                  g.title AS game_title, pa.date_earned
             FROM player_achievements pa
             JOIN achievements a ON a.achievement_id = pa.achievement_id
             JOIN games g        ON g.game_id = a.game_id
            WHERE pa.player_id = $1
            ORDER BY pa.date_earned DESC"#,
    )
    .bind(player_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

/// Every achievement a game defines, with `earned` computed against the
/// requesting player's earned set (no match = not earned, never absent).
pub async fn for_game(
    conn: &mut PgConnection,
    player_id: i64,
    game_id: i64,
) -> Result<Vec<GameAchievement>, ApiError> {
    let rows = sqlx::query_as::<_, GameAchievement>(
        r#"SELECT a.achievement_id, a.name, a.description, a.points_value,
                  (pa.player_id IS NOT NULL) AS earned
             FROM achievements a
             LEFT JOIN player_achievements pa
               ON pa.achievement_id = a.achievement_id
              AND pa.player_id = $1
            WHERE a.game_id = $2
            ORDER BY a.achievement_id"#,
    )
    .bind(player_id)
    .bind(game_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}
