use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};
use crate::models::domain::{ContactPreference, EventQuery, FilterCriteria, Opportunity, Region, Selection};

/// Request to match grants against a planned event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchGrantsRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    #[serde(alias = "cause_area", rename = "causeArea")]
    pub cause_area: String,
    #[serde(alias = "expected_date", rename = "expectedDate", default)]
    pub expected_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(alias = "estimated_budget", rename = "estimatedBudget", default)]
    pub estimated_budget: String,
    #[serde(alias = "target_beneficiaries", rename = "targetBeneficiaries", default)]
    pub target_beneficiaries: String,
    #[serde(default)]
    pub objectives: String,
}

impl From<MatchGrantsRequest> for EventQuery {
    fn from(req: MatchGrantsRequest) -> Self {
        EventQuery {
            title: req.title,
            cause_area: req.cause_area,
            expected_date: req.expected_date,
            location: req.location,
            estimated_budget: req.estimated_budget,
            target_beneficiaries: req.target_beneficiaries,
            objectives: req.objectives,
        }
    }
}

/// Query string of the browse page
///
/// `GET /api/v1/opportunities?search=beach&category=environment&region=Kuching&dateFrom=2025-03-01`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(alias = "date_from", rename = "dateFrom", default)]
    pub date_from: Option<NaiveDate>,
    #[serde(alias = "date_to", rename = "dateTo", default)]
    pub date_to: Option<NaiveDate>,
}

impl From<BrowseQuery> for FilterCriteria {
    fn from(query: BrowseQuery) -> Self {
        FilterCriteria {
            search: query.search.unwrap_or_default(),
            category: Selection::from_param(query.category.as_deref()),
            region: Selection::from_param(query.region.as_deref()),
            date_from: query.date_from,
            date_to: query.date_to,
        }
    }
}

/// Create or replace an opportunity from the NGO dashboard form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_contact_details"))]
pub struct OpportunityRequest {
    #[validate(length(min = 5, message = "Title must be at least 5 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Please select a category"))]
    pub category: String,
    #[validate(length(min = 2, message = "Organization name is required"))]
    pub organization: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    #[validate(length(min = 2, message = "Location is required"))]
    pub location: String,
    pub region: Region,
    #[validate(length(min = 20, message = "Description must be at least 20 characters"))]
    pub description: String,
    #[validate(range(min = 1, message = "At least one volunteer is required"))]
    #[serde(alias = "volunteers_needed", rename = "volunteersNeeded")]
    pub volunteers_needed: u32,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(alias = "contact_preference", rename = "contactPreference", default)]
    pub contact_preference: ContactPreference,
    #[serde(alias = "contact_email", rename = "contactEmail", default)]
    pub contact_email: Option<String>,
    #[serde(alias = "contact_phone", rename = "contactPhone", default)]
    pub contact_phone: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn validate_contact_details(req: &OpportunityRequest) -> Result<(), ValidationError> {
    if req.contact_preference.allows_email() {
        match non_blank(&req.contact_email) {
            None => {
                let mut err = ValidationError::new("contact_email_required");
                err.message = Some("Please provide an email address".into());
                return Err(err);
            }
            Some(email) if !String::from(email).validate_email() => {
                let mut err = ValidationError::new("contact_email_invalid");
                err.message = Some("Valid email is required".into());
                return Err(err);
            }
            Some(_) => {}
        }
    }

    if req.contact_preference.allows_whatsapp() && non_blank(&req.contact_phone).is_none() {
        let mut err = ValidationError::new("contact_phone_required");
        err.message = Some("Please provide a phone number for WhatsApp".into());
        return Err(err);
    }

    Ok(())
}

impl OpportunityRequest {
    /// Build the stored record. Blank contact fields become absent.
    pub fn into_opportunity(self, id: String, volunteers_registered: Option<u32>) -> Opportunity {
        let contact_email = non_blank(&self.contact_email).map(str::to_string);
        let contact_phone = non_blank(&self.contact_phone).map(str::to_string);

        Opportunity {
            id,
            title: self.title,
            category: self.category,
            organization: self.organization,
            date: self.date,
            time: self.time,
            location: self.location,
            region: self.region,
            description: self.description,
            volunteers_needed: self.volunteers_needed,
            volunteers_registered,
            requirements: self.requirements,
            contact_email,
            contact_phone,
            contact_preference: Some(self.contact_preference),
        }
    }
}
