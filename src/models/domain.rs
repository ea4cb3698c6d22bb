use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Funding opportunity offered by a foundation, ministry or NGO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    pub id: String,
    pub name: String,
    pub organization: String,
    #[serde(rename = "category")]
    pub categories: Vec<String>,
    pub eligibility: String,
    #[serde(rename = "fundingMin")]
    pub funding_min: u64,
    #[serde(rename = "fundingMax")]
    pub funding_max: u64,
    pub deadline: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Event or programme an NGO is planning and wants funded
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventQuery {
    pub title: String,
    #[serde(rename = "causeArea")]
    pub cause_area: String,
    #[serde(rename = "expectedDate", default)]
    pub expected_date: String,
    #[serde(default)]
    pub location: String,
    /// Raw budget text as typed by the user, see [`EventQuery::budget`]
    #[serde(rename = "estimatedBudget", default)]
    pub estimated_budget: String,
    #[serde(rename = "targetBeneficiaries", default)]
    pub target_beneficiaries: String,
    #[serde(default)]
    pub objectives: String,
}

impl EventQuery {
    /// Estimated budget as an integer. Unparsable or negative text is 0.
    pub fn budget(&self) -> u64 {
        parse_budget(&self.estimated_budget)
    }
}

/// Lenient integer parse: leading whitespace, optional sign, leading digits.
/// Trailing garbage is ignored and overflow saturates.
pub fn parse_budget(text: &str) -> u64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if digits.is_empty() || negative {
        return 0;
    }

    digits.parse::<u64>().unwrap_or(u64::MAX)
}

/// Grant with its computed compatibility score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedGrant {
    #[serde(flatten)]
    pub grant: Grant,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchedKeywords", default)]
    pub matched_keywords: Vec<String>,
}

/// Administrative regions of Sarawak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Kuching,
    Samarahan,
    Serian,
    Bau,
    Sibu,
    Miri,
    Bintulu,
    Limbang,
    Lawas,
    Kapit,
    Mukah,
    #[serde(rename = "Sri Aman")]
    SriAman,
    Betong,
}

impl Region {
    /// All thirteen regions in canonical display order
    pub const ALL: [Region; 13] = [
        Region::Kuching,
        Region::Samarahan,
        Region::Serian,
        Region::Bau,
        Region::Sibu,
        Region::Miri,
        Region::Bintulu,
        Region::Limbang,
        Region::Lawas,
        Region::Kapit,
        Region::Mukah,
        Region::SriAman,
        Region::Betong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Kuching => "Kuching",
            Region::Samarahan => "Samarahan",
            Region::Serian => "Serian",
            Region::Bau => "Bau",
            Region::Sibu => "Sibu",
            Region::Miri => "Miri",
            Region::Bintulu => "Bintulu",
            Region::Limbang => "Limbang",
            Region::Lawas => "Lawas",
            Region::Kapit => "Kapit",
            Region::Mukah => "Mukah",
            Region::SriAman => "Sri Aman",
            Region::Betong => "Betong",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the thirteen region names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    /// Exact, case-sensitive lookup
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

/// How volunteers should reach the organiser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPreference {
    Email,
    #[serde(rename = "whatsapp")]
    WhatsApp,
    #[default]
    Both,
}

impl ContactPreference {
    pub fn allows_email(&self) -> bool {
        matches!(self, ContactPreference::Email | ContactPreference::Both)
    }

    pub fn allows_whatsapp(&self) -> bool {
        matches!(self, ContactPreference::WhatsApp | ContactPreference::Both)
    }
}

/// Volunteer activity posted by an NGO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub category: String,
    pub organization: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    pub location: String,
    pub region: Region,
    pub description: String,
    #[serde(rename = "volunteersNeeded")]
    pub volunteers_needed: u32,
    #[serde(rename = "volunteersRegistered", default)]
    pub volunteers_registered: Option<u32>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(rename = "contactEmail", default)]
    pub contact_email: Option<String>,
    #[serde(rename = "contactPhone", default)]
    pub contact_phone: Option<String>,
    #[serde(rename = "contactPreference", default)]
    pub contact_preference: Option<ContactPreference>,
}

impl Opportunity {
    /// Helper to get volunteers_registered, defaulting to 0
    pub fn registered(&self) -> u32 {
        self.volunteers_registered.unwrap_or(0)
    }

    /// Remaining volunteer spots, never negative
    pub fn spots_left(&self) -> u32 {
        self.volunteers_needed.saturating_sub(self.registered())
    }

    /// wa.me link for the organiser's phone, when WhatsApp contact is allowed
    pub fn whatsapp_link(&self) -> Option<String> {
        let preference = self.contact_preference.unwrap_or_default();
        if !preference.allows_whatsapp() {
            return None;
        }

        let digits: String = self
            .contact_phone
            .as_deref()?
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        if digits.is_empty() {
            None
        } else {
            Some(format!("https://wa.me/{}", digits))
        }
    }
}

/// Either "all" or a single selected value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parse a dropdown value; "all" (or nothing) selects everything
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some("all") | Some("") => Selection::All,
            Some(other) => Selection::Only(other.to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

/// Browse-page filter state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub category: Selection,
    pub region: Selection,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// True when anything narrows the list, i.e. "clear filters" should show
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || !self.category.is_all()
            || !self.region.is_all()
            || self.date_from.is_some()
            || self.date_to.is_some()
    }
}

/// Totals shown on the NGO dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalOpportunities")]
    pub total_opportunities: usize,
    #[serde(rename = "totalVolunteersNeeded")]
    pub total_volunteers_needed: u64,
    #[serde(rename = "totalVolunteersRegistered")]
    pub total_volunteers_registered: u64,
    #[serde(rename = "openSpots")]
    pub open_spots: u64,
}

impl DashboardStats {
    pub fn from_opportunities(opportunities: &[Opportunity]) -> Self {
        opportunities.iter().fold(
            Self {
                total_opportunities: opportunities.len(),
                ..Self::default()
            },
            |mut stats, opp| {
                stats.total_volunteers_needed += opp.volunteers_needed as u64;
                stats.total_volunteers_registered += opp.registered() as u64;
                stats.open_spots += opp.spots_left() as u64;
                stats
            },
        )
    }
}

/// Matching parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    /// Grants scoring below this are dropped
    pub min_score: u8,
    pub max_results: usize,
    /// Upper bound (inclusive) of the random jitter term
    pub max_jitter: u8,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            min_score: 30,
            max_results: 6,
            max_jitter: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget("15000"), 15000);
        assert_eq!(parse_budget("  2500"), 2500);
        assert_eq!(parse_budget("15000abc"), 15000);
        assert_eq!(parse_budget("12.5"), 12);
        assert_eq!(parse_budget("+40"), 40);
        assert_eq!(parse_budget(""), 0);
        assert_eq!(parse_budget("abc"), 0);
        assert_eq!(parse_budget("-500"), 0);
        assert_eq!(parse_budget("99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn test_region_round_trip() {
        for region in Region::ALL {
            assert_eq!(region.as_str().parse::<Region>(), Ok(region));
        }
        assert!("kuching".parse::<Region>().is_err());
        assert_eq!(Region::SriAman.to_string(), "Sri Aman");
    }

    #[test]
    fn test_region_serde_names() {
        let json = serde_json::to_string(&Region::SriAman).unwrap();
        assert_eq!(json, "\"Sri Aman\"");
        let parsed: Region = serde_json::from_str("\"Kapit\"").unwrap();
        assert_eq!(parsed, Region::Kapit);
    }

    #[test]
    fn test_selection_from_param() {
        assert_eq!(Selection::from_param(None), Selection::All);
        assert_eq!(Selection::from_param(Some("all")), Selection::All);
        assert_eq!(
            Selection::from_param(Some("Kuching")),
            Selection::Only("Kuching".to_string())
        );
    }

    #[test]
    fn test_has_active_filters() {
        let mut criteria = FilterCriteria::default();
        assert!(!criteria.has_active_filters());

        criteria.date_to = NaiveDate::from_ymd_opt(2025, 3, 1);
        assert!(criteria.has_active_filters());

        let criteria = FilterCriteria {
            region: Selection::Only("Miri".to_string()),
            ..FilterCriteria::default()
        };
        assert!(criteria.has_active_filters());
    }

    #[test]
    fn test_whatsapp_link() {
        let opp = Opportunity {
            id: "1".to_string(),
            title: "Beach Cleanup".to_string(),
            category: "Environment".to_string(),
            organization: "Green Kuching".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            time: None,
            location: "Damai Beach".to_string(),
            region: Region::Kuching,
            description: "Clean the beach".to_string(),
            volunteers_needed: 20,
            volunteers_registered: Some(25),
            requirements: vec![],
            contact_email: None,
            contact_phone: Some("+60 12-345 6789".to_string()),
            contact_preference: Some(ContactPreference::WhatsApp),
        };

        assert_eq!(opp.whatsapp_link().as_deref(), Some("https://wa.me/60123456789"));
        assert_eq!(opp.spots_left(), 0);

        let email_only = Opportunity {
            contact_preference: Some(ContactPreference::Email),
            ..opp
        };
        assert_eq!(email_only.whatsapp_link(), None);
    }

    #[test]
    fn test_dashboard_stats() {
        let base = Opportunity {
            id: "1".to_string(),
            title: "Tree Planting".to_string(),
            category: "Environment".to_string(),
            organization: "Green Kuching".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 25).unwrap(),
            time: None,
            location: "Kubah".to_string(),
            region: Region::Kuching,
            description: "Plant trees".to_string(),
            volunteers_needed: 30,
            volunteers_registered: Some(20),
            requirements: vec![],
            contact_email: None,
            contact_phone: None,
            contact_preference: None,
        };
        let other = Opportunity {
            id: "2".to_string(),
            volunteers_needed: 15,
            volunteers_registered: None,
            ..base.clone()
        };

        let stats = DashboardStats::from_opportunities(&[base, other]);
        assert_eq!(stats.total_opportunities, 2);
        assert_eq!(stats.total_volunteers_needed, 45);
        assert_eq!(stats.total_volunteers_registered, 20);
        assert_eq!(stats.open_spots, 25);
    }
}
