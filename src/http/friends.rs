//! Friend lifecycle: search, request, accept, remove, list.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;

use crate::config::settings;
use crate::db::{self, friend_repo, player_repo};
use crate::error::ApiError;
use crate::http::auth::AuthPlayer;

#[derive(Deserialize)]
pub struct FriendReq {
    pub friend_id: i64,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// GET /api/friends
#[get("/friends")]
pub async fn list(auth: AuthPlayer, db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin(&db).await?;
    let friends = friend_repo::friends(&mut tx, auth.player_id).await?;
    tx.commit().await?;
    Ok(HttpResponse::Ok().json(friends))
}

/// GET /api/friends/requests
#[get("/friends/requests")]
pub async fn requests(auth: AuthPlayer, db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin(&db).await?;
    let pending = friend_repo::pending_requests(&mut tx, auth.player_id).await?;
    tx.commit().await?;
    Ok(HttpResponse::Ok().json(pending))
}

/// GET /api/friends/search?q=term
#[get("/friends/search")]
pub async fn search(
    auth: AuthPlayer,
    params: web::Query<SearchParams>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin(&db).await?;
    let players =
        player_repo::search(&mut tx, auth.player_id, &params.q, settings().search_limit).await?;
    tx.commit().await?;
    Ok(HttpResponse::Ok().json(players))
}

/// POST /api/friends/request
#[post("/friends/request")]
pub async fn send_request(
    auth: AuthPlayer,
    info: web::Json<FriendReq>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    if info.friend_id == auth.player_id {
        return Err(ApiError::Validation(
            "Cannot send friend request to yourself".into(),
        ));
    }

    let mut tx = db::begin(&db).await?;
    if !friend_repo::player_exists(&mut tx, info.friend_id).await? {
        return Err(ApiError::NotFound("Player not found".into()));
    }
    friend_repo::send_request(&mut tx, auth.player_id, info.friend_id).await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(json!({ "message": "Friend request sent successfully" })))
}

/// PUT /api/friends/accept/{id}
#[put("/friends/accept/{friend_id}")]
pub async fn accept(
    auth: AuthPlayer,
    path: web::Path<i64>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin(&db).await?;
    friend_repo::accept(&mut tx, auth.player_id, path.into_inner()).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Friend request accepted" })))
}

/// DELETE /api/friends/{id}
#[delete("/friends/{friend_id}")]
pub async fn remove(
    auth: AuthPlayer,
    path: web::Path<i64>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin(&db).await?;
    friend_repo::remove(&mut tx, auth.player_id, path.into_inner()).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Friend removed successfully" })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(requests)
        .service(search)
        .service(send_request)
        .service(accept)
        .service(remove);
}
