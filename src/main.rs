use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use cinder::config::{LoggingSettings, Settings};
use cinder::core::ConfigResolver;
use cinder::routes::{self, AppState};
use cinder::services::{SeedProfiles, SessionStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over `LOG_LEVEL`, which wins over the `[logging]` table
fn init_logging(file: &LoggingSettings) {
    let logging = file.overridden(
        std::env::var("LOG_LEVEL").ok(),
        std::env::var("LOG_FORMAT").ok(),
    );

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.is_pretty() {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    let logging = settings.as_ref().map(|s| s.logging.clone()).unwrap_or_default();
    init_logging(&logging);

    info!("Starting Cinder app service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    let resolver = match &settings.app.config_path {
        Some(path) => ConfigResolver::from_toml_file(path).map_err(|e| {
            error!("Failed to load app config: {}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?,
        None => ConfigResolver::with_defaults(),
    };
    let resolver = Arc::new(resolver);

    info!(
        "App config {} loaded (swipe limit: {}, messaging: {})",
        resolver.get_config().version,
        resolver.swipe_limit(),
        resolver.is_feature_enabled("messagingEnabled")
    );

    let sessions = Arc::new(SessionStore::new(
        Arc::clone(&resolver),
        Arc::new(SeedProfiles),
        settings.sessions.max_sessions,
        settings.sessions.idle_secs,
        settings.sessions.match_seed,
    ));

    info!(
        "Session store initialized (max: {}, idle: {}s)",
        settings.sessions.max_sessions, settings.sessions.idle_secs
    );

    let app_state = AppState { resolver, sessions };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
            .app_data(web::PathConfig::default().error_handler(routes::handle_path_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
