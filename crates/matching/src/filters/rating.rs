//! Filter to ensure a minimum rating.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use directory::LawyerRecord;

/// Removes lawyers rated below `criteria.min_rating`.
pub struct MinimumRatingFilter;

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, record: &LawyerRecord, criteria: &FilterCriteria) -> bool {
        record.rating >= criteria.min_rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lawyer;
    use directory::Availability;

    #[test]
    fn test_minimum_rating_filter() {
        let top = lawyer("1", 1000.0, 4.9, 5, Availability::Available, "Delhi");
        let mid = lawyer("2", 1000.0, 4.5, 5, Availability::Available, "Delhi");
        let low = lawyer("3", 1000.0, 3.0, 5, Availability::Available, "Delhi");

        let criteria = FilterCriteria::default().min_rating(4.5);

        assert!(MinimumRatingFilter.matches(&top, &criteria));
        assert!(MinimumRatingFilter.matches(&mid, &criteria));
        assert!(!MinimumRatingFilter.matches(&low, &criteria));
    }

    #[test]
    fn test_rating_above_scale_matches_nothing() {
        let perfect = lawyer("1", 1000.0, 5.0, 5, Availability::Available, "Delhi");
        let criteria = FilterCriteria::default().min_rating(5.5);
        assert!(!MinimumRatingFilter.matches(&perfect, &criteria));
    }
}
