//! Character endpoints; every mutation is scoped to the owning player.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;

use crate::db::{self, character_repo};
use crate::error::ApiError;
use crate::http::auth::AuthPlayer;

#[derive(Deserialize)]
pub struct CreateReq {
    pub character_name: String,
    #[serde(default = "default_level")]
    pub level: i32,
}

fn default_level() -> i32 {
    1
}

#[derive(Deserialize)]
pub struct UpdateReq {
    pub character_name: Option<String>,
    pub level: Option<i32>,
}

/// GET /api/characters
#[get("/characters")]
pub async fn list(auth: AuthPlayer, db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin(&db).await?;
    let characters = character_repo::list(&mut tx, auth.player_id).await?;
    tx.commit().await?;
    Ok(HttpResponse::Ok().json(characters))
}

/// POST /api/characters
#[post("/characters")]
pub async fn create(
    auth: AuthPlayer,
    info: web::Json<CreateReq>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    if info.character_name.is_empty() {
        return Err(ApiError::Validation("Character name is required".into()));
    }

    let mut tx = db::begin(&db).await?;
    let character_id =
        character_repo::create(&mut tx, auth.player_id, &info.character_name, info.level).await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Character created successfully",
        "character_id": character_id,
        "character_name": info.character_name,
        "level": info.level
    })))
}

/// PUT /api/characters/{id}
#[put("/characters/{character_id}")]
pub async fn update(
    auth: AuthPlayer,
    path: web::Path<i64>,
    info: web::Json<UpdateReq>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    if info.character_name.is_none() && info.level.is_none() {
        return Err(ApiError::Validation("No fields to update".into()));
    }

    let mut tx = db::begin(&db).await?;
    character_repo::update(
        &mut tx,
        auth.player_id,
        path.into_inner(),
        info.character_name.as_deref(),
        info.level,
    )
    .await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Character updated successfully" })))
}

/// DELETE /api/characters/{id}
#[delete("/characters/{character_id}")]
pub async fn delete(
    auth: AuthPlayer,
    path: web::Path<i64>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let mut tx = db::begin(&db).await?;
    character_repo::delete(&mut tx, auth.player_id, path.into_inner()).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Character deleted successfully" })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(create)
        .service(update)
        .service(delete);
}
