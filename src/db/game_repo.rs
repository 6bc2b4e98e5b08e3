//! Game catalogue, per-player progress, and match recording.
//!
//! Aggregate columns on `player_games` (wins, losses, playtime, rank,
//! high score) are owned by `sp_record_match_result` and its rank
//! trigger; this module only passes validated scalars in and reads the
//! results back out.

use sqlx::PgConnection;

use crate::db::models::{Game, PlayerGame};
use crate::error::ApiError;

pub async fn list_active(conn: &mut PgConnection) -> Result<Vec<Game>, ApiError> {
    let rows = sqlx::query_as::<_, Game>(
        r#"SELECT game_id, title, genre, release_date
             FROM games
            WHERE is_active
            ORDER BY title"#,
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn player_games(
    conn: &mut PgConnection,
    player_id: i64,
) -> Result<Vec<PlayerGame>, ApiError> {
    let rows = sqlx::query_as::<_, PlayerGame>(
        r#"SELECT g.game_id, g.title, g.genre,
                  pg.playtime_hours, pg.player_rank,
                  pg.wins, pg.losses, pg.matches_played,
                  pg.high_score, pg.last_played_date
             FROM player_games pg
             JOIN games g ON g.game_id = pg.game_id
            WHERE pg.player_id = $1
            ORDER BY pg.playtime_hours DESC"#,
    )
    .bind(player_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

/// Win rate for one (player, game) via the store function — the rounding
/// and the zero-matches case both live server-side.
pub async fn win_rate(
    conn: &mut PgConnection,
    player_id: i64,
    game_id: i64,
) -> Result<f64, ApiError> {
    let rate: f64 = sqlx::query_scalar("SELECT fn_player_win_rate($1, $2)")
        .bind(player_id)
        .bind(game_id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(rate)
}

pub async fn total_playtime(conn: &mut PgConnection, player_id: i64) -> Result<f64, ApiError> {
    let hours: f64 = sqlx::query_scalar("SELECT fn_player_total_playtime($1)")
        .bind(player_id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(hours)
}

/// Lifetime (wins, losses, matches) summed across all games.
pub async fn stat_totals(
    conn: &mut PgConnection,
    player_id: i64,
) -> Result<(i64, i64, i64), ApiError> {
    let row: (i64, i64, i64) = sqlx::query_as(
        r#"SELECT COALESCE(SUM(wins), 0)::BIGINT,
                  COALESCE(SUM(losses), 0)::BIGINT,
                  COALESCE(SUM(matches_played), 0)::BIGINT
             FROM player_games
            WHERE player_id = $1"#,
    )
    .bind(player_id)
    .fetch_one(&mut *conn)
    .await?;
    Ok(row)
}

/// Record one match result as a single opaque procedure call.
/// An unknown game trips the FK constraint inside the procedure and
/// surfaces as `NotFound`, not an opaque 500.
pub async fn record_match(
    conn: &mut PgConnection,
    player_id: i64,
    game_id: i64,
    playtime: f64,
    is_win: bool,
    score: i64,
) -> Result<(), ApiError> {
    sqlx::query("CALL sp_record_match_result($1, $2, $3, $4, $5)")
        .bind(player_id)
        .bind(game_id)
        .bind(playtime)
        .bind(is_win)
        .bind(score)
        .execute(&mut *conn)
        .await
        .map_err(|e| ApiError::not_found_on_fk(e, "Game not found"))?;
    Ok(())
}

/// `wins / matches * 100`, rounded to 2 decimals; 0 when no matches.
pub fn win_rate_percent(wins: i64, matches: i64) -> f64 {
    if matches == 0 {
        return 0.0;
    }
    (wins as f64 / matches as f64 * 10_000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::win_rate_percent;

    #[test]
    fn zero_matches_is_zero_not_nan() {
        assert_eq!(win_rate_percent(0, 0), 0.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(win_rate_percent(1, 3), 33.33);
        assert_eq!(win_rate_percent(2, 3), 66.67);
        assert_eq!(win_rate_percent(1, 1), 100.0);
    }
}
