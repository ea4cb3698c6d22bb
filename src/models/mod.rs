// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    parse_budget, ContactPreference, DashboardStats, EventQuery, FilterCriteria, Grant, MatchSettings,
    MatchedGrant, Opportunity, Region, Selection, UnknownRegion,
};
pub use requests::{BrowseQuery, MatchGrantsRequest, OpportunityRequest};
pub use responses::{
    CategoriesResponse, DeleteResponse, ErrorResponse, HealthResponse, MatchGrantsResponse, OpportunitiesResponse,
};
