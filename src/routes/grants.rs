use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{EventQuery, MatchGrantsRequest, MatchGrantsResponse};
use crate::routes::{error_response, AppState};
use crate::services::GrantRepository;

/// Configure all grant-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/grants", web::get().to(list_grants))
        .route("/grants/match", web::post().to(match_grants))
        .route("/grants/{id}", web::get().to(get_grant));
}

/// GET /api/v1/grants
async fn list_grants(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.store.list_grants())
}

/// GET /api/v1/grants/{id}
async fn get_grant(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.store.get_grant(&id) {
        Some(grant) => HttpResponse::Ok().json(grant),
        None => error_response(StatusCode::NOT_FOUND, "Grant not found", format!("No grant with id {}", id)),
    }
}

/// Match grants endpoint
///
/// POST /api/v1/grants/match
///
/// Request body:
/// ```json
/// {
///   "title": "Youth Environmental Awareness Camp",
///   "causeArea": "Environment",
///   "expectedDate": "2025-05-01",
///   "location": "Kuching",
///   "estimatedBudget": "25000",
///   "targetBeneficiaries": "100 youth aged 15-25",
///   "objectives": "..."
/// }
/// ```
async fn match_grants(
    state: web::Data<AppState>,
    req: web::Json<MatchGrantsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match_grants request: field_errors={:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let query = EventQuery::from(req.into_inner());
    tracing::info!(
        "Matching grants for event {:?} (cause area {:?}, budget {})",
        query.title,
        query.cause_area,
        query.budget()
    );

    if !state.match_delay.is_zero() {
        tokio::time::sleep(state.match_delay).await;
    }

    let grants = state.store.list_grants();
    let result = state.matcher.match_all(&grants, &query);

    tracing::info!(
        "Returning {} matches (from {} grants)",
        result.matches.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(MatchGrantsResponse {
        matches: result.matches,
        total_grants: result.total_candidates,
    })
}
