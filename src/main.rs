mod catalog;
mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use crate::config::Settings;
use crate::core::Matcher;
use crate::models::ScoringWeights;
use crate::routes::recommendations::AppState;
use crate::routes::{handle_json_payload_error, handle_query_payload_error};
use crate::services::{AiClient, Recommender};
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Eventa recommendation service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Build the static catalogs once; they are shared read-only
    let catalog = Arc::new(catalog::Catalog::standard());
    info!(
        "Catalog loaded: {} restaurants, {} arenas, {} services",
        catalog.restaurants.len(),
        catalog.arenas.len(),
        catalog.services.len()
    );

    // Initialize the AI client only when a credential is configured;
    // without one, every request goes straight to the matcher
    let ai = match settings.ai.api_key.clone() {
        Some(api_key) => {
            let client = AiClient::new(
                settings.ai.base_url.clone(),
                api_key,
                settings.ai.model.clone(),
                settings.ai.temperature,
                settings.ai.max_tokens,
                settings.ai.timeout_secs,
            )
            .unwrap_or_else(|e| {
                error!("Failed to build completion client: {}", e);
                panic!("AI client error: {}", e);
            });
            info!("Completion client initialized (model: {})", settings.ai.model);
            Some(Arc::new(client))
        }
        None => {
            info!("No completion credential configured; rule-based matching only");
            None
        }
    };

    // Initialize matcher with configured weights
    let weights = ScoringWeights {
        event_type: settings.scoring.weights.event_type,
        guest_fit: settings.scoring.weights.guest_fit,
        budget_fit: settings.scoring.weights.budget_fit,
        package: settings.scoring.weights.package,
        ambience: settings.scoring.weights.ambience,
    };

    let matcher = Matcher::new(weights);
    info!("Matcher initialized with weights: {:?}", weights);

    let recommender = Arc::new(Recommender::new(ai, matcher));

    // Build application state
    let app_state = AppState {
        catalog,
        recommender,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
