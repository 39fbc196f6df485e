use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use scent_match::config::{CorsSettings, LoggingSettings, Settings};
use scent_match::core::{Catalog, CatalogStore, Matcher};
use scent_match::routes::{self, AppState};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

async fn load_catalog(settings: &Settings) -> std::io::Result<Catalog> {
    let Some(path) = &settings.catalog.path else {
        info!("No catalog path configured, using built-in sample catalog");
        return Ok(Catalog::sample());
    };

    let json = tokio::fs::read_to_string(path).await?;
    Catalog::from_json_str(&json).map_err(|e| {
        error!("Failed to load catalog from {}: {}", path.display(), e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })
}

fn build_cors(settings: &CorsSettings) -> Cors {
    if settings.allowed_origins.is_empty() {
        return Cors::permissive();
    }

    settings
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Scent Match recommendation service...");

    let catalog = load_catalog(&settings).await?;
    info!("Catalog loaded ({} fragrances)", catalog.len());

    let weights = settings.scoring_weights();
    let matcher = Matcher::new(weights);
    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState {
        catalog: Arc::new(CatalogStore::new(catalog)),
        matcher,
        ranking: settings.ranking.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let cors_settings = settings.cors.clone();

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_extractors)
            .wrap(build_cors(&cors_settings))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
