//! Filter on the lawyer's location.

use super::contains_ignore_case;
use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use directory::LawyerRecord;

/// Keeps lawyers whose location contains `criteria.location`, ignoring case.
///
/// An empty location places no constraint.
pub struct LocationFilter;

impl Filter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn matches(&self, record: &LawyerRecord, criteria: &FilterCriteria) -> bool {
        contains_ignore_case(&record.location, &criteria.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lawyer;
    use directory::Availability;

    #[test]
    fn test_location_filter() {
        let delhi = lawyer("1", 1000.0, 4.0, 5, Availability::Available, "New Delhi");
        let mumbai = lawyer("2", 1000.0, 4.0, 5, Availability::Available, "Mumbai Sessions Court");

        let criteria = FilterCriteria::default().location("delhi");
        assert!(LocationFilter.matches(&delhi, &criteria));
        assert!(!LocationFilter.matches(&mumbai, &criteria));

        let criteria = FilterCriteria::default().location("SESSIONS");
        assert!(LocationFilter.matches(&mumbai, &criteria));
    }

    #[test]
    fn test_empty_location_keeps_all() {
        let delhi = lawyer("1", 1000.0, 4.0, 5, Availability::Available, "New Delhi");
        assert!(LocationFilter.matches(&delhi, &FilterCriteria::default()));
    }
}
