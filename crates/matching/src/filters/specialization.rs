//! Filter on area of practice.

use super::contains_ignore_case;
use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use directory::LawyerRecord;

/// Keeps lawyers with at least one specialization containing the
/// selected one, ignoring case. `None` keeps everyone.
pub struct SpecializationFilter;

impl Filter for SpecializationFilter {
    fn name(&self) -> &str {
        "SpecializationFilter"
    }

    fn matches(&self, record: &LawyerRecord, criteria: &FilterCriteria) -> bool {
        match criteria.specialization.as_deref() {
            None => true,
            Some(wanted) => record
                .specialization
                .iter()
                .any(|spec| contains_ignore_case(spec, wanted)),
        }
    }
}
