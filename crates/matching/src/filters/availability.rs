//! Filter on the lawyer's current availability.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use directory::LawyerRecord;

/// Keeps lawyers whose availability equals the selected one.
///
/// `AvailabilityFilter::Any` keeps everyone, unavailable lawyers included.
pub struct AvailabilityMatchFilter;

impl Filter for AvailabilityMatchFilter {
    fn name(&self) -> &str {
        "AvailabilityMatchFilter"
    }

    fn matches(&self, record: &LawyerRecord, criteria: &FilterCriteria) -> bool {
        criteria.availability.accepts(record.availability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lawyer;
    use directory::{Availability, AvailabilityFilter};

    #[test]
    fn test_availability_filter() {
        let available = lawyer("1", 1000.0, 4.0, 5, Availability::Available, "Delhi");
        let busy = lawyer("2", 1000.0, 4.0, 5, Availability::Busy, "Delhi");
        let away = lawyer("3", 1000.0, 4.0, 5, Availability::Unavailable, "Delhi");

        let any = FilterCriteria::default();
        assert!(AvailabilityMatchFilter.matches(&available, &any));
        assert!(AvailabilityMatchFilter.matches(&busy, &any));
        assert!(AvailabilityMatchFilter.matches(&away, &any));

        let only_busy = FilterCriteria::default().availability(AvailabilityFilter::Busy);
        assert!(!AvailabilityMatchFilter.matches(&available, &only_busy));
        assert!(AvailabilityMatchFilter.matches(&busy, &only_busy));
        assert!(!AvailabilityMatchFilter.matches(&away, &only_busy));
    }
}
