use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchedGrant, Opportunity};

/// Response for the grant matching endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchGrantsResponse {
    pub matches: Vec<MatchedGrant>,
    #[serde(rename = "totalGrants")]
    pub total_grants: usize,
}

/// Response for the browse endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunitiesResponse {
    pub opportunities: Vec<Opportunity>,
    pub total: usize,
    #[serde(rename = "hasActiveFilters")]
    pub has_active_filters: bool,
}

/// Static lists the forms are built from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(rename = "opportunityCategories")]
    pub opportunity_categories: Vec<String>,
    #[serde(rename = "causeAreas")]
    pub cause_areas: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Delete confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub id: String,
}
