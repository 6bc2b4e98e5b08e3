//! Handler-level input validation: these paths reject before any query
//! runs, so the app is exercised with a lazy pool that never connects.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use gametrack_server::config::settings;
use gametrack_server::error::ApiError;
use gametrack_server::{http, token};
use serde_json::{json, Value};
use sqlx::PgPool;

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(
                    PgPool::connect_lazy("postgres://127.0.0.1/gametrack_test").unwrap(),
                ))
                .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                    ApiError::Validation(err.to_string()).into()
                }))
                .configure(http::routes::init_routes)
                .default_service(web::route().to(http::routes::not_found)),
        )
        .await
    };
}

fn bearer(player_id: i64, username: &str) -> (&'static str, String) {
    let tok = token::issue(&settings().secret_key, player_id, username, 24).unwrap();
    ("Authorization", format!("Bearer {tok}"))
}

#[actix_rt::test]
async fn empty_character_update_is_rejected() {
    let app = test_app!();
    let req = test::TestRequest::put()
        .uri("/api/characters/1")
        .insert_header(bearer(5, "tester"))
        .set_json(json!({}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No fields to update");
}

#[actix_rt::test]
async fn self_friend_request_is_rejected() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/friends/request")
        .insert_header(bearer(5, "tester"))
        .set_json(json!({ "friend_id": 5 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Cannot send friend request to yourself");
}

#[actix_rt::test]
async fn negative_match_scalars_are_rejected() {
    let app = test_app!();
    for payload in [
        json!({ "game_id": 1, "playtime": -0.5, "is_win": true, "score": 10 }),
        json!({ "game_id": 1, "playtime": 2.0, "is_win": false, "score": -1 }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/games/match")
            .insert_header(bearer(5, "tester"))
            .set_json(payload)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid match data");
    }
}

#[actix_rt::test]
async fn missing_match_fields_are_rejected_as_json_error() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/games/match")
        .insert_header(bearer(5, "tester"))
        .set_json(json!({ "game_id": 1 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn empty_signup_fields_are_rejected() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(json!({ "username": "", "email": "", "password": "" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing required fields");
}

#[actix_rt::test]
async fn unknown_route_is_a_json_404() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/api/nope").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Endpoint not found");
}

#[actix_rt::test]
async fn protected_route_without_token_is_401() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/api/characters").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Token is missing");
}
