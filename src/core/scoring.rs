use crate::core::jitter::JitterSource;
use crate::models::{EventQuery, Grant};

pub const CATEGORY_POINTS: u8 = 40;
pub const POINTS_PER_KEYWORD: u8 = 6;
pub const MAX_KEYWORD_POINTS: u8 = 30;
pub const BUDGET_IN_RANGE_POINTS: u8 = 20;
pub const BUDGET_NEAR_RANGE_POINTS: u8 = 10;
pub const MAX_SCORE: u8 = 100;

/// Individual contributions to a grant's match score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub category: u8,
    pub keywords: u8,
    pub budget: u8,
    pub jitter: u8,
    pub matched_keywords: Vec<String>,
}

impl ScoreBreakdown {
    /// Sum of all contributions, capped at 100
    pub fn total(&self) -> u8 {
        let sum = self.category as u16 + self.keywords as u16 + self.budget as u16 + self.jitter as u16;
        sum.min(MAX_SCORE as u16) as u8
    }
}

/// Calculate a match score (0-100) for a grant against a planned event
///
/// Scoring formula:
/// score = min(
///     category_match (0 | 40) +      # cause area vs grant categories
///     keyword_overlap (0..=30) +     # 6 per grant keyword found in the event text
///     budget_alignment (0 | 10 | 20) +
///     jitter (0..=max_jitter),
///     100
/// )
pub fn calculate_match_score(
    grant: &Grant,
    query: &EventQuery,
    jitter: &dyn JitterSource,
    max_jitter: u8,
) -> ScoreBreakdown {
    let cause_area = query.cause_area.to_lowercase();

    let category = if category_matches(&grant.categories, &cause_area) {
        CATEGORY_POINTS
    } else {
        0
    };

    let search_text = format!(
        "{} {} {}",
        cause_area,
        query.objectives.to_lowercase(),
        query.target_beneficiaries.to_lowercase()
    );
    let matched_keywords = matching_keywords(&grant.keywords, &search_text);
    let keywords = keyword_points(matched_keywords.len());

    let budget = calculate_budget_score(query.budget(), grant.funding_min, grant.funding_max);

    ScoreBreakdown {
        category,
        keywords,
        budget,
        jitter: jitter.jitter(max_jitter),
        matched_keywords,
    }
}

/// Bidirectional substring test between the lowercased cause area and each category
#[inline]
fn category_matches(categories: &[String], cause_area: &str) -> bool {
    categories.iter().any(|category| {
        let category = category.to_lowercase();
        category.contains(cause_area) || cause_area.contains(category.as_str())
    })
}

/// Grant keywords contained in the event text, in grant order
fn matching_keywords(keywords: &[String], search_text: &str) -> Vec<String> {
    keywords
        .iter()
        .filter(|keyword| search_text.contains(keyword.to_lowercase().as_str()))
        .cloned()
        .collect()
}

#[inline]
fn keyword_points(matched: usize) -> u8 {
    let points = matched.saturating_mul(POINTS_PER_KEYWORD as usize);
    points.min(MAX_KEYWORD_POINTS as usize) as u8
}

/// Budget alignment (0, 10 or 20)
///
/// Full points inside `[min, max]`, half points down to 0.5 × min or up to
/// 1.5 × max. The bands are checked in that order.
#[inline]
pub fn calculate_budget_score(budget: u64, funding_min: u64, funding_max: u64) -> u8 {
    // Doubled to keep the 0.5x and 1.5x bounds exact in integers
    let doubled = budget as u128 * 2;

    if budget >= funding_min && budget <= funding_max {
        BUDGET_IN_RANGE_POINTS
    } else if budget < funding_min && doubled >= funding_min as u128 {
        BUDGET_NEAR_RANGE_POINTS
    } else if budget > funding_max && doubled <= funding_max as u128 * 3 {
        BUDGET_NEAR_RANGE_POINTS
    } else {
        0
    }
}
