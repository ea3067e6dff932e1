use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, ProfileResponse, UpsertProfileRequest};
use crate::routes::{unauthorized, AppState};

/// Configure adopter profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/adopter-profile", web::get().to(get_profile))
        .route("/adopter-profile", web::put().to(upsert_profile));
}

/// GET /api/v1/adopter-profile
async fn get_profile(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user_id = match state.auth.require_identity(&req) {
        Ok(id) => id,
        Err(e) => return unauthorized(&e),
    };

    match state.profiles.get_profile(user_id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(ProfileResponse { user_id, profile }),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::new(
            "Profile not found",
            format!("No adopter profile saved for user {}", user_id),
            404,
        )),
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to fetch profile",
                e.to_string(),
                500,
            ))
        }
    }
}

/// PUT /api/v1/adopter-profile
///
/// Request body:
/// ```json
/// {
///   "housingType": "Apartamento",
///   "hasChildren": false,
///   "weeklyHoursAvailable": 10,
///   "lifestyle": "Calmo"
/// }
/// ```
async fn upsert_profile(
    state: web::Data<AppState>,
    body: web::Json<UpsertProfileRequest>,
    req: HttpRequest,
) -> impl Responder {
    let user_id = match state.auth.require_identity(&req) {
        Ok(id) => id,
        Err(e) => return unauthorized(&e),
    };

    if let Err(errors) = body.validate() {
        tracing::info!("Validation failed for profile of user {}: {:?}", user_id, errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    let profile = body.into_inner().into_profile();

    match state.profiles.upsert_profile(user_id, &profile).await {
        Ok(()) => {
            tracing::info!("Saved adopter profile for user {}", user_id);
            HttpResponse::Ok().json(ProfileResponse { user_id, profile })
        }
        Err(e) => {
            tracing::error!("Failed to save profile for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to save profile",
                e.to_string(),
                500,
            ))
        }
    }
}
