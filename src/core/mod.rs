// Core algorithm exports
pub mod filters;
pub mod jitter;
pub mod matcher;
pub mod scoring;

pub use filters::{filter_opportunities, has_active_filters, matches_criteria};
pub use jitter::{FixedJitter, JitterSource, RandomJitter};
pub use matcher::{GrantMatcher, MatchResult};
pub use scoring::{calculate_budget_score, calculate_match_score, ScoreBreakdown};
