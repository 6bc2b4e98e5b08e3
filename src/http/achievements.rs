//! Achievement read endpoints.

use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::db::{self, achievement_repo};
use crate::error::ApiError;
use crate::http::auth::AuthPlayer;

/// GET /api/achievements/player
#[get("/achievements/player")]
pub async fn player(auth: AuthPlayer, db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin(&db).await?;
    let earned = achievement_repo::earned(&mut tx, auth.player_id).await?;
    tx.commit().await?;
    Ok(HttpResponse::Ok().json(earned))
}

/// GET /api/achievements/game/{id}
#[get("/achievements/game/{game_id}")]
pub async fn game(
    auth: AuthPlayer,
    path: web::Path<i64>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin(&db).await?;
    let achievements = achievement_repo::for_game(&mut tx, auth.player_id, path.into_inner()).await?;
    tx.commit().await?;
    Ok(HttpResponse::Ok().json(achievements))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(player).service(game);
}
