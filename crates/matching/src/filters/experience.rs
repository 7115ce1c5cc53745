//! Filter on years of practice.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use directory::LawyerRecord;

/// Removes lawyers with fewer than `criteria.min_experience` years.
pub struct MinimumExperienceFilter;

impl Filter for MinimumExperienceFilter {
    fn name(&self) -> &str {
        "MinimumExperienceFilter"
    }

    fn matches(&self, record: &LawyerRecord, criteria: &FilterCriteria) -> bool {
        record.experience_years >= criteria.min_experience
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lawyer;
    use directory::Availability;

    #[test]
    fn test_minimum_experience_filter() {
        let senior = lawyer("1", 1000.0, 4.0, 15, Availability::Available, "Delhi");
        let junior = lawyer("2", 1000.0, 4.0, 2, Availability::Available, "Delhi");

        let criteria = FilterCriteria::default().min_experience(10);
        assert!(MinimumExperienceFilter.matches(&senior, &criteria));
        assert!(!MinimumExperienceFilter.matches(&junior, &criteria));

        let anyone = FilterCriteria::default();
        assert!(MinimumExperienceFilter.matches(&junior, &anyone));
    }
}
