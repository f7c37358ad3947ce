// Integration tests for the Cinder HTTP surface

use actix_web::{http::StatusCode, test, web, App};
use cinder::core::ConfigResolver;
use cinder::models::AppConfig;
use cinder::routes::{self, AppState};
use cinder::services::{SeedProfiles, SessionStore};
use serde_json::{json, Value};
use std::sync::Arc;

fn create_state(config: AppConfig, match_seed: u64) -> AppState {
    let resolver = Arc::new(ConfigResolver::new(config).unwrap());
    let sessions = Arc::new(SessionStore::new(
        Arc::clone(&resolver),
        Arc::new(SeedProfiles),
        100,
        60,
        Some(match_seed),
    ));
    AppState { resolver, sessions }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
                .app_data(web::PathConfig::default().error_handler(routes::handle_path_error))
                .configure(routes::configure_routes),
        )
        .await
    };
}

macro_rules! post {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::post().uri(&$uri).to_request();
        test::call_service(&$app, req).await
    }};
    ($app:expr, $uri:expr, $body:expr) => {{
        let req = test::TestRequest::post().uri(&$uri).set_json($body).to_request();
        test::call_service(&$app, req).await
    }};
}

async fn body_json(resp: actix_web::dev::ServiceResponse) -> Value {
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn test_config_endpoints() {
    let app = init_app!(create_state(AppConfig::default(), 1));

    let req = test::TestRequest::get().uri("/api/v1/config/flags/nonexistent_flag").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["enabled"], json!(false));

    let req = test::TestRequest::get().uri("/api/v1/config/copy/missing_key?locale=en").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["text"], json!("missing_key"));

    let req = test::TestRequest::get().uri("/api/v1/config/rules/free_tier.swipe_limit_per_day").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["value"], json!(100));

    let req = test::TestRequest::get().uri("/api/v1/config").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["businessRules"]["free_tier"]["swipe_limit_per_day"], json!(100));
    assert_eq!(body["profile"]["photo_policy"]["min_photos"], json!(2));
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!(create_state(AppConfig::default(), 1));
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], json!("healthy"));
}

#[actix_web::test]
async fn test_end_to_end_onboarding_and_discovery() {
    let app = init_app!(create_state(AppConfig::default(), 42));

    let resp = post!(app, "/api/v1/sessions".to_string());
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["screen"], json!("splash"));
    let id = body["sessionId"].as_str().unwrap().to_string();
    let base = format!("/api/v1/sessions/{}", id);

    // Discovery is not reachable before onboarding
    let resp = post!(app, format!("{}/discover/like", base));
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body = body_json(post!(app, format!("{}/start", base))).await;
    assert_eq!(body["screen"], json!("onboarding"));
    assert_eq!(body["onboarding"]["step"], json!("name"));
    assert_eq!(body["onboarding"]["canAdvance"], json!(false));

    let body = body_json(post!(app, format!("{}/onboarding/advance", base))).await;
    assert_eq!(body["outcome"], json!("blocked"));

    let req = test::TestRequest::patch()
        .uri(&format!("{}/onboarding", base))
        .set_json(json!({
            "name": "Sam",
            "age": "29",
            "gender": "Non-binary",
            "interestedIn": "Everyone",
            "location": "Oakland",
            "bio": "Bakes bread on weekends",
            "profession": "Nurse"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    for photo in ["https://img.example/1.jpg", "https://img.example/2.jpg"] {
        let resp = post!(app, format!("{}/onboarding/photos", base), json!({ "url": photo }));
        assert_eq!(resp.status(), StatusCode::OK);
    }
    for interest in ["Books", "Cooking", "Hiking"] {
        let resp = post!(app, format!("{}/onboarding/interests/{}", base, interest));
        assert_eq!(resp.status(), StatusCode::OK);
    }

    for expected in ["age", "gender_prefs", "photos", "bio_profession", "interests"] {
        let body = body_json(post!(app, format!("{}/onboarding/advance", base))).await;
        assert_eq!(body["outcome"], json!("moved"));
        assert_eq!(body["step"], json!(expected));
    }

    let body = body_json(post!(app, format!("{}/onboarding/advance", base))).await;
    assert_eq!(body["outcome"], json!("completed"));
    assert_eq!(body["profile"]["name"], json!("Sam"));
    assert_eq!(body["session"]["screen"], json!("main"));
    assert_eq!(body["session"]["activeTab"], json!("discover"));
    assert_eq!(body["session"]["discovery"]["currentProfile"]["name"], json!("Emma"));

    for _ in 0..3 {
        let body = body_json(post!(app, format!("{}/discover/nope", base))).await;
        assert_eq!(body["applied"], json!(true));
    }

    let body = body_json(post!(app, format!("{}/discover/nope", base))).await;
    assert_eq!(body["applied"], json!(false));
    assert_eq!(body["discovery"]["state"], json!("exhausted"));
    assert_eq!(body["discovery"]["matches"], json!([]));

    let body = body_json(post!(app, format!("{}/discover/restart", base))).await;
    assert_eq!(body["discovery"]["state"], json!("browsing"));
    assert_eq!(body["discovery"]["swipeCount"], json!(0));

    let resp = post!(app, format!("{}/discover/boost", base));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = post!(app, format!("{}/tab", base), json!({ "tab": "likes" }));
    let body = body_json(resp).await;
    assert_eq!(body["activeTab"], json!("likes"));
}

#[actix_web::test]
async fn test_messages_tab_hidden_when_flag_off() {
    let mut config = AppConfig::default();
    config.feature_flags.remove("messagingEnabled");
    config.profile.photo_policy.min_photos = 0;
    let app = init_app!(create_state(config, 1));

    let body = body_json(post!(app, "/api/v1/sessions".to_string())).await;
    let base = format!("/api/v1/sessions/{}", body["sessionId"].as_str().unwrap());
    post!(app, format!("{}/start", base));

    let req = test::TestRequest::patch()
        .uri(&format!("{}/onboarding", base))
        .set_json(json!({
            "name": "Kai",
            "age": "33",
            "gender": "Man",
            "interestedIn": "Women",
            "bio": "Sailing"
        }))
        .to_request();
    test::call_service(&app, req).await;
    for interest in ["Art", "Wine", "Yoga"] {
        post!(app, format!("{}/onboarding/interests/{}", base, interest));
    }
    for _ in 0..6 {
        post!(app, format!("{}/onboarding/advance", base));
    }

    let req = test::TestRequest::get().uri(&base).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["screen"], json!("main"));
    let tabs: Vec<&str> = body["tabs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["tab"].as_str().unwrap())
        .collect();
    assert_eq!(tabs, vec!["discover", "likes", "profile"]);

    let resp = post!(app, format!("{}/tab", base), json!({ "tab": "messages" }));
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert_eq!(body["error"], json!("tab_unavailable"));
}

#[actix_web::test]
async fn test_draft_validation_errors() {
    let app = init_app!(create_state(AppConfig::default(), 1));
    let body = body_json(post!(app, "/api/v1/sessions".to_string())).await;
    let base = format!("/api/v1/sessions/{}", body["sessionId"].as_str().unwrap());
    post!(app, format!("{}/start", base));

    let req = test::TestRequest::patch()
        .uri(&format!("{}/onboarding", base))
        .set_json(json!({ "bio": "x".repeat(501) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], json!("validation_failed"));

    let resp = post!(app, format!("{}/onboarding/photos", base), json!({ "url": "not a url" }));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = post!(app, format!("{}/onboarding/interests/Skydiving", base));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_unknown_session() {
    let app = init_app!(create_state(AppConfig::default(), 1));

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sessions/{}", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], json!("session_not_found"));

    let req = test::TestRequest::get().uri("/api/v1/sessions/not-a-uuid").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_out_of_range_age_is_blocked_at_age_step() {
    let app = init_app!(create_state(AppConfig::default(), 1));
    let body = body_json(post!(app, "/api/v1/sessions".to_string())).await;
    let base = format!("/api/v1/sessions/{}", body["sessionId"].as_str().unwrap());
    post!(app, format!("{}/start", base));

    let req = test::TestRequest::patch()
        .uri(&format!("{}/onboarding", base))
        .set_json(json!({ "name": "Sam", "age": "300" }))
        .to_request();
    let body = body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["onboarding"]["canAdvance"], json!(true));

    let body = body_json(post!(app, format!("{}/onboarding/advance", base))).await;
    assert_eq!(body["outcome"], json!("moved"));
    assert_eq!(body["session"]["onboarding"]["step"], json!("age"));
    assert_eq!(body["session"]["onboarding"]["canAdvance"], json!(false));

    let body = body_json(post!(app, format!("{}/onboarding/advance", base))).await;
    assert_eq!(body["outcome"], json!("blocked"));
    assert_eq!(body["step"], json!("age"));
}
