// Route exports
pub mod grants;
pub mod opportunities;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use std::time::Duration;
use crate::core::GrantMatcher;
use crate::models::{CategoriesResponse, ErrorResponse, HealthResponse, Region};
use crate::services::{InMemoryStore, CAUSE_AREAS, OPPORTUNITY_CATEGORIES};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryStore>,
    pub matcher: GrantMatcher,
    /// Artificial latency before match results are returned
    pub match_delay: Duration,
}

impl AppState {
    pub fn new(store: Arc<InMemoryStore>, matcher: GrantMatcher) -> Self {
        Self {
            store,
            matcher,
            match_delay: Duration::ZERO,
        }
    }

    pub fn with_match_delay(mut self, delay: Duration) -> Self {
        self.match_delay = delay;
        self
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .route("/regions", web::get().to(list_regions))
            .route("/categories", web::get().to(list_categories))
            .configure(grants::configure)
            .configure(opportunities::configure),
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

/// GET /api/v1/regions
async fn list_regions() -> impl Responder {
    HttpResponse::Ok().json(Region::ALL)
}

/// GET /api/v1/categories
async fn list_categories() -> impl Responder {
    HttpResponse::Ok().json(CategoriesResponse {
        opportunity_categories: OPPORTUNITY_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        cause_areas: CAUSE_AREAS.iter().map(|c| c.to_string()).collect(),
    })
}

pub(crate) fn error_response(status: actix_web::http::StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}
