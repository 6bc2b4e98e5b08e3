//! Row types shared between repositories and handlers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Internal login row; never serialized (carries the password hash).
#[derive(Debug, FromRow)]
pub struct PlayerAuth {
    pub player_id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub account_status: String,
}

/// Public identity fields, safe to return to any authenticated caller.
#[derive(Debug, Serialize, FromRow)]
pub struct PublicPlayer {
    pub player_id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Serialize, FromRow)]
pub struct ProfileInfo {
    pub player_id: i64,
    pub username: String,
    pub email: String,
    pub account_status: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct Game {
    pub game_id: i64,
    pub title: String,
    pub genre: Option<String>,
    pub release_date: Option<NaiveDate>,
}

/// One player's progress against one game.  Mutated only by
/// `sp_record_match_result`; the API layer never writes these columns.
#[derive(Debug, Serialize, FromRow)]
pub struct PlayerGame {
    pub game_id: i64,
    pub title: String,
    pub genre: Option<String>,
    pub playtime_hours: f64,
    pub player_rank: Option<String>,
    pub wins: i32,
    pub losses: i32,
    pub matches_played: i32,
    pub high_score: i64,
    pub last_played_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct Character {
    pub character_id: i64,
    pub character_name: String,
    pub level: i32,
    pub creation_date: DateTime<Utc>,
}

/// A friend or pending request, always showing the *other* player.
#[derive(Debug, Serialize, FromRow)]
pub struct FriendEntry {
    pub player_id: i64,
    pub username: String,
    pub email: String,
    pub status: String,
}

#[derive(Debug, Serialize, FromRow)]
pub struct EarnedAchievement {
    pub achievement_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub points_value: i32,
    pub game_title: String,
    pub date_earned: DateTime<Utc>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct GameAchievement {
    pub achievement_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub points_value: i32,
    pub earned: bool,
}
