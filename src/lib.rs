//! Relawan Match - grant matching and volunteer opportunity browsing for Sarawak NGOs
//!
//! This library provides the scoring heuristic that ranks grants against a
//! planned event, and the multi-predicate filter behind the opportunity board.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_opportunities, has_active_filters, FixedJitter, GrantMatcher, JitterSource, RandomJitter};
pub use crate::models::{EventQuery, FilterCriteria, Grant, MatchedGrant, Opportunity, Region, Selection};
pub use crate::services::{GrantRepository, InMemoryStore, OpportunityRepository};
