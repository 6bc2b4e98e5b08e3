//! Account signup / login and the bearer-token extractor.

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::PgPool;

use crate::config::settings;
use crate::db::{self, player_repo};
use crate::error::ApiError;
use crate::{password, token};

//////////////////////////////////////////////////
// Data structs
//////////////////////////////////////////////////

#[derive(Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub player: crate::db::models::PublicPlayer,
}

//////////////////////////////////////////////////
// ─────────────  AuthPlayer extractor  ─────────────
//////////////////////////////////////////////////

pub mod extractor {
    use actix_web::{dev::Payload, FromRequest, HttpRequest};
    use futures_util::future::{ready, Ready};

    use crate::config::settings;
    use crate::error::ApiError;
    use crate::token;

    /// Validates the `Authorization` bearer token and exposes the
    /// authenticated identity as a handler parameter.
    #[derive(Debug, Clone)]
    pub struct AuthPlayer {
        pub player_id: i64,
        pub username: String,
    }

    impl FromRequest for AuthPlayer {
        type Error = ApiError;
        type Future = Ready<Result<Self, Self::Error>>;

        fn from_request(req: &HttpRequest, _pl: &mut Payload) -> Self::Future {
            let header = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok());

            let res = token::validate(&settings().secret_key, header).map(|claims| AuthPlayer {
                player_id: claims.sub,
                username: claims.username,
            });

            ready(res)
        }
    }
}
pub use extractor::AuthPlayer;

//////////////////////////////////////////////////
// POST /api/auth/signup
//////////////////////////////////////////////////
#[post("/auth/signup")]
pub async fn signup(
    info: web::Json<SignupRequest>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    if info.username.is_empty() || info.email.is_empty() || info.password.is_empty() {
        return Err(ApiError::Validation("Missing required fields".into()));
    }

    // Hash outside the transaction: Argon2 is deliberately slow and must
    // not hold a connection while it runs.
    let password_hash = password::hash(&info.password)?;

    let mut tx = db::begin(&db).await?;
    let player_id = player_repo::create(&mut tx, &info.username, &info.email, &password_hash).await?;
    player_repo::assign_default_role(&mut tx, player_id).await?;
    tx.commit().await?;

    log::info!("new account '{}' (player {player_id})", info.username);

    Ok(HttpResponse::Created().json(json!({
        "message": "Account created successfully",
        "player_id": player_id
    })))
}

//////////////////////////////////////////////////
// POST /api/auth/login
//////////////////////////////////////////////////
#[post("/auth/login")]
pub async fn login(
    info: web::Json<LoginRequest>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    if info.username.is_empty() || info.password.is_empty() {
        return Err(ApiError::Validation("Missing credentials".into()));
    }

    let mut tx = db::begin(&db).await?;

    // Absent player and wrong password produce the same response body.
    let player = player_repo::find_by_username(&mut tx, &info.username)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if player.account_status != "active" {
        return Err(ApiError::AccountNotActive(player.account_status));
    }

    if !password::verify(&info.password, &player.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    player_repo::touch_last_login(&mut tx, player.player_id).await?;
    tx.commit().await?;

    let cfg = settings();
    let token = token::issue(
        &cfg.secret_key,
        player.player_id,
        &player.username,
        cfg.token_ttl_hours,
    )?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        player: crate::db::models::PublicPlayer {
            player_id: player.player_id,
            username: player.username,
            email: player.email,
        },
    }))
}

//////////////////////////////////////////////////
// Mount
//////////////////////////////////////////////////
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(signup).service(login);
}
