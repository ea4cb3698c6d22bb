use std::sync::Arc;
use crate::core::{
    jitter::{JitterSource, RandomJitter},
    scoring::calculate_match_score,
};
use crate::models::{EventQuery, Grant, MatchSettings, MatchedGrant};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<MatchedGrant>,
    pub total_candidates: usize,
}

/// Grant matching orchestrator
///
/// # Pipeline Stages
/// 1. Score every grant against the event
/// 2. Drop grants below the minimum score
/// 3. Rank by score, ties keep fixture order
/// 4. Truncate to the maximum number of results
#[derive(Debug, Clone)]
pub struct GrantMatcher {
    settings: MatchSettings,
    jitter: Arc<dyn JitterSource>,
}

impl GrantMatcher {
    pub fn new(settings: MatchSettings, jitter: Arc<dyn JitterSource>) -> Self {
        Self { settings, jitter }
    }

    pub fn with_default_settings() -> Self {
        Self::new(MatchSettings::default(), Arc::new(RandomJitter))
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Score a single grant (0-100)
    pub fn score(&self, grant: &Grant, query: &EventQuery) -> u8 {
        calculate_match_score(grant, query, self.jitter.as_ref(), self.settings.max_jitter).total()
    }

    /// Find the best matching grants for an event
    ///
    /// # Arguments
    /// * `grants` - All grants to consider
    /// * `query` - The event being planned
    ///
    /// # Returns
    /// MatchResult with at most `max_results` grants, highest score first
    pub fn match_all(&self, grants: &[Grant], query: &EventQuery) -> MatchResult {
        let total_candidates = grants.len();

        let mut matches: Vec<MatchedGrant> = grants
            .iter()
            .filter_map(|grant| {
                let breakdown =
                    calculate_match_score(grant, query, self.jitter.as_ref(), self.settings.max_jitter);
                let score = breakdown.total();

                tracing::trace!(
                    "Grant {} scored {} (category {}, keywords {}, budget {}, jitter {})",
                    grant.id,
                    score,
                    breakdown.category,
                    breakdown.keywords,
                    breakdown.budget,
                    breakdown.jitter
                );

                if score >= self.settings.min_score {
                    Some(MatchedGrant {
                        grant: grant.clone(),
                        match_score: score,
                        matched_keywords: breakdown.matched_keywords,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable sort keeps fixture order between equal scores
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches.truncate(self.settings.max_results);

        tracing::debug!(
            "Matched {} of {} grants for cause area {:?}",
            matches.len(),
            total_candidates,
            query.cause_area
        );

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for GrantMatcher {
    fn default() -> Self {
        Self::with_default_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jitter::FixedJitter;
    use chrono::NaiveDate;

    fn create_grant(id: &str, category: &str, keywords: &[&str], min: u64, max: u64) -> Grant {
        Grant {
            id: id.to_string(),
            name: format!("Grant {}", id),
            organization: "Test Foundation".to_string(),
            categories: vec![category.to_string()],
            eligibility: "Registered NGOs".to_string(),
            funding_min: min,
            funding_max: max,
            deadline: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            description: "Test grant".to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn create_query(cause_area: &str, objectives: &str, budget: &str) -> EventQuery {
        EventQuery {
            title: "Event".to_string(),
            cause_area: cause_area.to_string(),
            objectives: objectives.to_string(),
            estimated_budget: budget.to_string(),
            ..EventQuery::default()
        }
    }

    fn pinned_matcher(jitter: u8) -> GrantMatcher {
        GrantMatcher::new(MatchSettings::default(), Arc::new(FixedJitter(jitter)))
    }

    #[test]
    fn test_drops_low_scores() {
        let matcher = pinned_matcher(0);
        let grants = vec![
            create_grant("1", "Environment", &[], 5000, 30000), // 40 + 20
            create_grant("2", "Health", &[], 5000, 30000),      // 20 only
        ];

        let result = matcher.match_all(&grants, &create_query("Environment", "", "10000"));

        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].grant.id, "1");
        assert_eq!(result.matches[0].match_score, 60);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let matcher = pinned_matcher(0);
        let grants = vec![
            create_grant("a", "Youth", &["youth"], 5000, 30000),          // 40 + 6 + 20
            create_grant("b", "Youth", &["youth", "camp"], 5000, 30000),  // 40 + 12 + 20
            create_grant("c", "Youth", &["youth"], 5000, 30000),          // tie with a
        ];

        let result = matcher.match_all(&grants, &create_query("Youth", "summer camp", "10000"));
        let ids: Vec<_> = result.matches.iter().map(|m| m.grant.id.as_str()).collect();

        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(result.matches[0].matched_keywords, vec!["youth", "camp"]);
    }

    #[test]
    fn test_respects_limit() {
        let matcher = pinned_matcher(10);
        let grants: Vec<Grant> = (0..10)
            .map(|i| create_grant(&i.to_string(), "Education", &["education"], 1000, 50000))
            .collect();

        let result = matcher.match_all(&grants, &create_query("Education", "", "5000"));

        assert_eq!(result.matches.len(), 6);
        let ids: Vec<_> = result.matches.iter().map(|m| m.grant.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_random_scores_stay_in_bounds() {
        let matcher = GrantMatcher::with_default_settings();
        let grants: Vec<Grant> = (0..10)
            .map(|i| create_grant(&i.to_string(), "Environment", &["environment", "forest"], 1000, 20000))
            .collect();
        let query = create_query("Environment", "forest restoration", "12000");

        for _ in 0..50 {
            let result = matcher.match_all(&grants, &query);
            assert!(result.matches.len() <= 6);
            for pair in result.matches.windows(2) {
                assert!(pair[0].match_score >= pair[1].match_score);
            }
            for m in &result.matches {
                assert!(m.match_score >= 30 && m.match_score <= 100);
            }
        }
    }

    #[test]
    fn test_single_score() {
        let matcher = pinned_matcher(0);
        let grant = create_grant("1", "Environment", &["wildlife"], 5000, 30000);

        assert_eq!(matcher.score(&grant, &create_query("Environment", "wildlife", "15000")), 66);
    }
}
