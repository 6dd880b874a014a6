use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::catalog::Catalog;
use crate::models::{ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse};
use crate::services::Recommender;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Arc<Recommender>,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route(
            "/recommendations/restaurants",
            web::post().to(recommend_restaurants),
        )
        .route("/recommendations/arenas", web::post().to(recommend_arenas))
        .route(
            "/recommendations/services",
            web::post().to(recommend_services),
        );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Restaurant recommendations
///
/// POST /api/v1/recommendations/restaurants
///
/// Degrades silently to the rule-based matcher on any AI failure.
async fn recommend_restaurants(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for restaurant recommendations: {}", errors);
        return validation_error(errors);
    }

    tracing::info!(
        "Restaurant recommendations: eventType={}, guests={}, budget={}",
        req.event_type,
        req.guest_count,
        req.budget.as_str()
    );

    let outcome = state
        .recommender
        .recommend(&req, &state.catalog.restaurants)
        .await;

    tracing::info!(
        "Returning {} restaurant recommendations (source: {:?})",
        outcome.recommendations.len(),
        outcome.source
    );

    HttpResponse::Ok().json(RecommendResponse {
        recommendations: outcome.recommendations,
        source: outcome.source,
        total_candidates: outcome.total_candidates,
    })
}

/// Sports arena recommendations
///
/// POST /api/v1/recommendations/arenas
///
/// Degrades silently to the rule-based matcher on any AI failure.
async fn recommend_arenas(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for arena recommendations: {}", errors);
        return validation_error(errors);
    }

    tracing::info!(
        "Arena recommendations: eventType={}, guests={}, budget={}",
        req.event_type,
        req.guest_count,
        req.budget.as_str()
    );

    let outcome = state.recommender.recommend(&req, &state.catalog.arenas).await;

    HttpResponse::Ok().json(RecommendResponse {
        recommendations: outcome.recommendations,
        source: outcome.source,
        total_candidates: outcome.total_candidates,
    })
}

/// Service recommendations
///
/// POST /api/v1/recommendations/services
///
/// Unlike the restaurant and arena endpoints, this one surfaces AI
/// failure (including a missing credential) as HTTP 500 instead of
/// degrading. The wizard's service page displays the error state.
async fn recommend_services(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for service recommendations: {}", errors);
        return validation_error(errors);
    }

    tracing::info!(
        "Service recommendations: eventType={}, guests={}, budget={}, venue={:?}",
        req.event_type,
        req.guest_count,
        req.budget.as_str(),
        req.venue
    );

    match state
        .recommender
        .recommend_strict(&req, &state.catalog.services)
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(RecommendResponse {
            recommendations: outcome.recommendations,
            source: outcome.source,
            total_candidates: outcome.total_candidates,
        }),
        Err(e) => {
            tracing::error!("Service recommendation failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate service recommendations".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
