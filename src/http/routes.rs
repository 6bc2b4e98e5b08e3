//! Route table: mount every HTTP sub-module under `/api`.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::http;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(http::auth::init_routes)
            .configure(http::player::init_routes)
            .configure(http::games::init_routes)
            .configure(http::characters::init_routes)
            .configure(http::friends::init_routes)
            .configure(http::achievements::init_routes)
            .configure(http::health::init_routes),
    );
}

/// Fallback for unknown routes; wired via `default_service` in `main`.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Endpoint not found" }))
}
