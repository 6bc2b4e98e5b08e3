//! Authenticated player profile & lifetime stats.

use actix_web::{get, web, HttpResponse};
use serde::Serialize;
use serde_json::json;
use sqlx::PgPool;

use crate::db::models::{Character, FriendEntry, PlayerGame, ProfileInfo};
use crate::db::{self, character_repo, friend_repo, game_repo, player_repo};
use crate::error::ApiError;
use crate::http::auth::AuthPlayer;

/// Everything the profile page needs, gathered in one transaction.
#[derive(Serialize)]
pub struct Profile {
    pub player_info: ProfileInfo,
    pub characters: Vec<Character>,
    pub games: Vec<PlayerGame>,
    pub friends: Vec<FriendEntry>,
}

/// GET /api/player/profile
#[get("/player/profile")]
pub async fn profile(auth: AuthPlayer, db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin(&db).await?;

    let player_info = player_repo::profile_info(&mut tx, auth.player_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Player not found".into()))?;
    let characters = character_repo::list(&mut tx, auth.player_id).await?;
    let games = game_repo::player_games(&mut tx, auth.player_id).await?;
    let friends = friend_repo::friends(&mut tx, auth.player_id).await?;

    tx.commit().await?;

    Ok(HttpResponse::Ok().json(Profile {
        player_info,
        characters,
        games,
        friends,
    }))
}

/// GET /api/player/stats
#[get("/player/stats")]
pub async fn stats(auth: AuthPlayer, db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin(&db).await?;

    let total_playtime = game_repo::total_playtime(&mut tx, auth.player_id).await?;
    let (total_wins, total_losses, total_matches) =
        game_repo::stat_totals(&mut tx, auth.player_id).await?;

    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({
        "total_playtime": total_playtime,
        "total_wins": total_wins,
        "total_losses": total_losses,
        "total_matches": total_matches,
        "win_rate": game_repo::win_rate_percent(total_wins, total_matches)
    })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(profile).service(stats);
}
