//! Game catalogue, per-player progress, and match recording.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;

use crate::db::{self, game_repo};
use crate::error::ApiError;
use crate::http::auth::AuthPlayer;

#[derive(Deserialize)]
pub struct MatchReq {
    pub game_id: i64,
    pub playtime: f64,
    pub is_win: bool,
    pub score: i64,
}

/// GET /api/games
#[get("/games")]
pub async fn list(_auth: AuthPlayer, db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin(&db).await?;
    let games = game_repo::list_active(&mut tx).await?;
    tx.commit().await?;
    Ok(HttpResponse::Ok().json(games))
}

/// GET /api/games/player
#[get("/games/player")]
pub async fn player_games(auth: AuthPlayer, db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin(&db).await?;
    let games = game_repo::player_games(&mut tx, auth.player_id).await?;
    tx.commit().await?;
    Ok(HttpResponse::Ok().json(games))
}

/// GET /api/games/{id}/winrate
#[get("/games/{game_id}/winrate")]
pub async fn winrate(
    auth: AuthPlayer,
    path: web::Path<i64>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let game_id = path.into_inner();
    let mut tx = db::begin(&db).await?;
    let win_rate = game_repo::win_rate(&mut tx, auth.player_id, game_id).await?;
    tx.commit().await?;
    Ok(HttpResponse::Ok().json(json!({ "win_rate": win_rate })))
}

/// POST /api/games/match
///
/// The handler validates scalars only; all aggregate arithmetic happens
/// inside `sp_record_match_result`.
#[post("/games/match")]
pub async fn record_match(
    auth: AuthPlayer,
    info: web::Json<MatchReq>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    if info.playtime < 0.0 || info.score < 0 {
        return Err(ApiError::Validation("Invalid match data".into()));
    }

    let mut tx = db::begin(&db).await?;
    game_repo::record_match(
        &mut tx,
        auth.player_id,
        info.game_id,
        info.playtime,
        info.is_win,
        info.score,
    )
    .await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Match recorded successfully" })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(player_games)
        .service(winrate)
        .service(record_match);
}
