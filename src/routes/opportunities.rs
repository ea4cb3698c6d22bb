use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::filter_opportunities;
use crate::models::{
    BrowseQuery, DashboardStats, DeleteResponse, FilterCriteria, OpportunitiesResponse, OpportunityRequest,
};
use crate::routes::{error_response, AppState};
use crate::services::{OpportunityRepository, StoreError};

/// Configure all opportunity routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/opportunities", web::get().to(browse_opportunities))
        .route("/opportunities", web::post().to(create_opportunity))
        .route("/opportunities/stats", web::get().to(dashboard_stats))
        .route("/opportunities/{id}", web::get().to(get_opportunity))
        .route("/opportunities/{id}", web::put().to(update_opportunity))
        .route("/opportunities/{id}", web::delete().to(delete_opportunity));
}

fn store_error_response(err: StoreError) -> HttpResponse {
    match &err {
        StoreError::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Opportunity not found", err.to_string()),
        StoreError::InvalidInput(_) => error_response(StatusCode::BAD_REQUEST, "Invalid input", err.to_string()),
    }
}

/// Browse endpoint
///
/// GET /api/v1/opportunities?search=&category=all&region=Kuching&dateFrom=2025-03-01&dateTo=2025-03-31
async fn browse_opportunities(
    state: web::Data<AppState>,
    query: web::Query<BrowseQuery>,
) -> impl Responder {
    let criteria = FilterCriteria::from(query.into_inner());
    let all = state.store.list_opportunities();
    let opportunities = filter_opportunities(&all, &criteria);

    tracing::debug!("Browse returned {} of {} opportunities", opportunities.len(), all.len());

    HttpResponse::Ok().json(OpportunitiesResponse {
        total: opportunities.len(),
        opportunities,
        has_active_filters: criteria.has_active_filters(),
    })
}

/// GET /api/v1/opportunities/stats
async fn dashboard_stats(state: web::Data<AppState>) -> impl Responder {
    let opportunities = state.store.list_opportunities();
    HttpResponse::Ok().json(DashboardStats::from_opportunities(&opportunities))
}

/// GET /api/v1/opportunities/{id}
async fn get_opportunity(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.store.get_opportunity(&path.into_inner()) {
        Ok(opportunity) => HttpResponse::Ok().json(opportunity),
        Err(e) => store_error_response(e),
    }
}

/// POST /api/v1/opportunities
async fn create_opportunity(
    state: web::Data<AppState>,
    req: web::Json<OpportunityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_opportunity request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    match state.store.create_opportunity(req.into_inner()) {
        Ok(opportunity) => {
            tracing::info!("Opportunity posted: {} ({})", opportunity.title, opportunity.id);
            HttpResponse::Created().json(opportunity)
        }
        Err(e) => {
            tracing::warn!("Failed to create opportunity: {}", e);
            store_error_response(e)
        }
    }
}

/// PUT /api/v1/opportunities/{id}
async fn update_opportunity(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<OpportunityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let id = path.into_inner();
    match state.store.update_opportunity(&id, req.into_inner()) {
        Ok(opportunity) => HttpResponse::Ok().json(opportunity),
        Err(e) => store_error_response(e),
    }
}

/// DELETE /api/v1/opportunities/{id}
async fn delete_opportunity(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.store.delete_opportunity(&id) {
        Ok(_) => {
            tracing::info!("Opportunity deleted: {}", id);
            HttpResponse::Ok().json(DeleteResponse { success: true, id })
        }
        Err(e) => store_error_response(e),
    }
}
