// Service exports
pub mod fixtures;
pub mod store;

pub use fixtures::{CAUSE_AREAS, OPPORTUNITY_CATEGORIES};
pub use store::{GrantRepository, InMemoryStore, OpportunityRepository, StoreError};
