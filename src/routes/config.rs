use actix_web::{web, HttpResponse, Responder};
use crate::core::router::DEFAULT_LOCALE;
use crate::models::{CopyQuery, CopyResponse, FlagResponse, HealthResponse, RuleResponse};
use crate::routes::AppState;

/// Configure health and configuration read routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/config", web::get().to(get_config))
        .route("/config/flags/{name}", web::get().to(get_flag))
        .route("/config/copy/{key}", web::get().to(get_copy))
        .route("/config/rules/{path}", web::get().to(get_rule));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let stats = state.sessions.stats().await;

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        active_sessions: stats.active_sessions,
    })
}

/// GET /api/v1/config
async fn get_config(state: web::Data<AppState>) -> impl Responder {
    let config = state.resolver.get_config();
    HttpResponse::Ok().json(&*config)
}

/// GET /api/v1/config/flags/{name}
async fn get_flag(state: web::Data<AppState>, name: web::Path<String>) -> impl Responder {
    let name = name.into_inner();
    let enabled = state.resolver.is_feature_enabled(&name);
    HttpResponse::Ok().json(FlagResponse { name, enabled })
}

/// GET /api/v1/config/copy/{key}?locale=en
async fn get_copy(
    state: web::Data<AppState>,
    key: web::Path<String>,
    query: web::Query<CopyQuery>,
) -> impl Responder {
    let key = key.into_inner();
    let locale = query
        .into_inner()
        .locale
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    let text = state.resolver.get_copy(&key, &locale);
    HttpResponse::Ok().json(CopyResponse { key, locale, text })
}

/// GET /api/v1/config/rules/{dotted.path}
async fn get_rule(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let path = path.into_inner();
    let value = state.resolver.get_business_rule(&path);
    HttpResponse::Ok().json(RuleResponse { path, value })
}
