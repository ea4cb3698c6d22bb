use std::sync::{PoisonError, RwLock};
use thiserror::Error;
use crate::models::{Grant, Opportunity, OpportunityRequest};
use crate::services::fixtures;

/// Errors that can occur with opportunity store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Read-only access to the grant catalogue
pub trait GrantRepository: Send + Sync {
    fn list_grants(&self) -> Vec<Grant>;

    fn get_grant(&self, id: &str) -> Option<Grant> {
        self.list_grants().into_iter().find(|g| g.id == id)
    }
}

/// Read-only access to the opportunity board
pub trait OpportunityRepository: Send + Sync {
    fn list_opportunities(&self) -> Vec<Opportunity>;
}

/// In-memory store backing both repositories
///
/// Grants are immutable. Opportunities can be created, replaced and deleted
/// from the NGO dashboard; nothing survives a restart.
pub struct InMemoryStore {
    grants: Vec<Grant>,
    opportunities: RwLock<Vec<Opportunity>>,
}

impl InMemoryStore {
    pub fn new(grants: Vec<Grant>, opportunities: Vec<Opportunity>) -> Self {
        Self {
            grants,
            opportunities: RwLock::new(opportunities),
        }
    }

    /// Store seeded with the built-in grant and opportunity fixtures
    pub fn with_fixtures() -> Self {
        Self::new(fixtures::grants(), fixtures::opportunities())
    }

    pub fn get_opportunity(&self, id: &str) -> Result<Opportunity, StoreError> {
        let opportunities = self.opportunities.read().unwrap_or_else(PoisonError::into_inner);
        opportunities
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Add a new opportunity under a fresh id
    pub fn create_opportunity(&self, req: OpportunityRequest) -> Result<Opportunity, StoreError> {
        let id = uuid::Uuid::new_v4().to_string();
        let opportunity = req.into_opportunity(id, Some(0));

        let mut opportunities = self.opportunities.write().unwrap_or_else(PoisonError::into_inner);
        if opportunities.iter().any(|o| o.id == opportunity.id) {
            return Err(StoreError::InvalidInput(format!("duplicate id {}", opportunity.id)));
        }
        opportunities.push(opportunity.clone());

        tracing::debug!("Created opportunity {} ({})", opportunity.id, opportunity.title);
        Ok(opportunity)
    }

    /// Replace an opportunity, keeping its id and registered count
    pub fn update_opportunity(&self, id: &str, req: OpportunityRequest) -> Result<Opportunity, StoreError> {
        let mut opportunities = self.opportunities.write().unwrap_or_else(PoisonError::into_inner);
        let slot = opportunities
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let updated = req.into_opportunity(slot.id.clone(), slot.volunteers_registered);
        *slot = updated.clone();

        tracing::debug!("Updated opportunity {}", id);
        Ok(updated)
    }

    pub fn delete_opportunity(&self, id: &str) -> Result<Opportunity, StoreError> {
        let mut opportunities = self.opportunities.write().unwrap_or_else(PoisonError::into_inner);
        let index = opportunities
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = opportunities.remove(index);
        tracing::debug!("Deleted opportunity {}", id);
        Ok(removed)
    }
}

impl GrantRepository for InMemoryStore {
    fn list_grants(&self) -> Vec<Grant> {
        self.grants.clone()
    }

    fn get_grant(&self, id: &str) -> Option<Grant> {
        self.grants.iter().find(|g| g.id == id).cloned()
    }
}

impl OpportunityRepository for InMemoryStore {
    fn list_opportunities(&self) -> Vec<Opportunity> {
        self.opportunities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
