use crate::models::{FilterCriteria, Opportunity, Selection};

/// Check if an opportunity satisfies every browse filter
///
/// - search: case-insensitive substring of title or description
/// - category: case-insensitive equality
/// - region: exact, case-sensitive equality
/// - date bounds: inclusive on both ends
#[inline]
pub fn matches_criteria(opportunity: &Opportunity, criteria: &FilterCriteria) -> bool {
    matches_search(opportunity, &criteria.search.to_lowercase())
        && matches_category(opportunity, &criteria.category)
        && matches_region(opportunity, &criteria.region)
        && matches_date_range(opportunity, criteria)
}

/// Filter a list of opportunities, preserving input order
///
/// The source slice is never modified; matching records are cloned.
pub fn filter_opportunities(opportunities: &[Opportunity], criteria: &FilterCriteria) -> Vec<Opportunity> {
    let search = criteria.search.to_lowercase();

    opportunities
        .iter()
        .filter(|opp| matches_search(opp, &search))
        .filter(|opp| matches_category(opp, &criteria.category))
        .filter(|opp| matches_region(opp, &criteria.region))
        .filter(|opp| matches_date_range(opp, criteria))
        .cloned()
        .collect()
}

/// Whether any filter narrows the list
#[inline]
pub fn has_active_filters(criteria: &FilterCriteria) -> bool {
    criteria.has_active_filters()
}

/// `search` must already be lowercased
#[inline]
fn matches_search(opportunity: &Opportunity, search: &str) -> bool {
    search.is_empty()
        || opportunity.title.to_lowercase().contains(search)
        || opportunity.description.to_lowercase().contains(search)
}

#[inline]
fn matches_category(opportunity: &Opportunity, category: &Selection) -> bool {
    match category {
        Selection::All => true,
        Selection::Only(wanted) => opportunity.category.to_lowercase() == wanted.to_lowercase(),
    }
}

#[inline]
fn matches_region(opportunity: &Opportunity, region: &Selection) -> bool {
    match region {
        Selection::All => true,
        Selection::Only(wanted) => opportunity.region.as_str() == wanted,
    }
}

#[inline]
fn matches_date_range(opportunity: &Opportunity, criteria: &FilterCriteria) -> bool {
    if let Some(from) = criteria.date_from {
        if opportunity.date < from {
            return false;
        }
    }

    if let Some(to) = criteria.date_to {
        if opportunity.date > to {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_opportunity(id: &str, category: &str, region: Region, on: NaiveDate) -> Opportunity {
        Opportunity {
            id: id.to_string(),
            title: format!("Opportunity {}", id),
            category: category.to_string(),
            organization: "Test NGO".to_string(),
            date: on,
            time: None,
            location: "Somewhere".to_string(),
            region,
            description: "Help the community".to_string(),
            volunteers_needed: 10,
            volunteers_registered: None,
            requirements: vec![],
            contact_email: None,
            contact_phone: None,
            contact_preference: None,
        }
    }

    #[test]
    fn test_empty_input() {
        let criteria = FilterCriteria {
            search: "beach".to_string(),
            ..FilterCriteria::default()
        };
        assert!(filter_opportunities(&[], &criteria).is_empty());
    }

    #[test]
    fn test_default_criteria_keeps_everything() {
        let opps = vec![
            create_test_opportunity("1", "Environment", Region::Kuching, date(2025, 3, 15)),
            create_test_opportunity("2", "Food Aid", Region::Miri, date(2025, 1, 2)),
            create_test_opportunity("3", "Education", Region::Sibu, date(2025, 6, 9)),
        ];

        let result = filter_opportunities(&opps, &FilterCriteria::default());
        assert_eq!(result, opps);
    }

    #[test]
    fn test_search_title_and_description() {
        let mut beach = create_test_opportunity("1", "Environment", Region::Kuching, date(2025, 3, 15));
        beach.title = "Beach Cleanup at Damai".to_string();
        let mut food = create_test_opportunity("2", "Food Aid", Region::Kuching, date(2025, 3, 15));
        food.description = "Pack BEACH-side meal boxes".to_string();
        let other = create_test_opportunity("3", "Education", Region::Kuching, date(2025, 3, 15));

        let criteria = FilterCriteria {
            search: "Beach".to_string(),
            ..FilterCriteria::default()
        };

        let ids: Vec<_> = filter_opportunities(&[beach, food, other], &criteria)
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_category_case_insensitive() {
        let opp = create_test_opportunity("1", "environment", Region::Kuching, date(2025, 3, 15));
        let criteria = FilterCriteria {
            category: Selection::Only("Environment".to_string()),
            ..FilterCriteria::default()
        };
        assert!(matches_criteria(&opp, &criteria));
    }

    #[test]
    fn test_region_case_sensitive() {
        let opp = create_test_opportunity("1", "Environment", Region::Kuching, date(2025, 3, 15));

        let lower = FilterCriteria {
            region: Selection::Only("kuching".to_string()),
            ..FilterCriteria::default()
        };
        assert!(!matches_criteria(&opp, &lower));

        let exact = FilterCriteria {
            region: Selection::Only("Kuching".to_string()),
            ..FilterCriteria::default()
        };
        assert!(matches_criteria(&opp, &exact));
    }

    #[test]
    fn test_date_from_inclusive() {
        let opps = vec![
            create_test_opportunity("1", "Environment", Region::Kuching, date(2025, 3, 15)),
            create_test_opportunity("2", "Environment", Region::Kuching, date(2025, 3, 20)),
        ];

        let after = FilterCriteria {
            date_from: Some(date(2025, 3, 16)),
            ..FilterCriteria::default()
        };
        let result = filter_opportunities(&opps, &after);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");

        let on = FilterCriteria {
            date_from: Some(date(2025, 3, 15)),
            ..FilterCriteria::default()
        };
        assert_eq!(filter_opportunities(&opps, &on).len(), 2);
    }

    #[test]
    fn test_date_to_inclusive() {
        let opps = vec![
            create_test_opportunity("1", "Environment", Region::Kuching, date(2025, 3, 15)),
            create_test_opportunity("2", "Environment", Region::Kuching, date(2025, 3, 20)),
        ];

        let criteria = FilterCriteria {
            date_to: Some(date(2025, 3, 15)),
            ..FilterCriteria::default()
        };
        let result = filter_opportunities(&opps, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn test_all_predicates_combined() {
        let opps = vec![
            create_test_opportunity("1", "Environment", Region::Kuching, date(2025, 3, 15)),
            create_test_opportunity("2", "Environment", Region::Miri, date(2025, 3, 15)),
            create_test_opportunity("3", "Education", Region::Kuching, date(2025, 3, 15)),
            create_test_opportunity("4", "Environment", Region::Kuching, date(2025, 5, 1)),
        ];

        let criteria = FilterCriteria {
            search: "opportunity".to_string(),
            category: Selection::Only("environment".to_string()),
            region: Selection::Only("Kuching".to_string()),
            date_from: Some(date(2025, 3, 1)),
            date_to: Some(date(2025, 3, 31)),
        };

        let result = filter_opportunities(&opps, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
        assert!(has_active_filters(&criteria));
    }
}
