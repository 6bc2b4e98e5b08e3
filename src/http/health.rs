//! Simple liveness probe: is the store reachable?

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

#[get("/health")]
pub async fn health(db: web::Data<PgPool>) -> impl Responder {
    if sqlx::query("SELECT 1").execute(&**db).await.is_err() {
        return HttpResponse::InternalServerError().json(json!({
            "status": "unhealthy",
            "database": "disconnected"
        }));
    }

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "database": "connected"
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
