use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::models::{ErrorResponse, HealthResponse, RecommendationsQuery};
use crate::routes::{unauthorized, AppState};

/// Configure recommendation and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations", web::get().to(get_recommendations));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = match state.catalog.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            false
        }
    };

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommendations endpoint
///
/// GET /api/v1/recommendations?n=5
///
/// With a bearer token and a saved adopter profile the items are ranked by
/// similarity; otherwise the most recent listings are returned.
///
/// Response body:
/// ```json
/// { "ids": [3, 1], "items": [...], "scores": [0.91, 0.42] }
/// ```
async fn get_recommendations(
    state: web::Data<AppState>,
    query: web::Query<RecommendationsQuery>,
    req: HttpRequest,
) -> impl Responder {
    let identity = match state.auth.identity(&req) {
        Ok(identity) => identity,
        Err(e) => return unauthorized(&e),
    };

    match state.recommendations.recommend(identity, query.n).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            tracing::error!("Failed to build recommendations (user: {:?}): {}", identity, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to build recommendations",
                e.to_string(),
                500,
            ))
        }
    }
}
