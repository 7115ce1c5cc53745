//! Free-text search over name and specializations.

use super::contains_ignore_case;
use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use directory::LawyerRecord;

/// Keeps lawyers whose name or any specialization contains
/// `criteria.search_term`, ignoring case.
pub struct SearchTermFilter;

impl Filter for SearchTermFilter {
    fn name(&self) -> &str {
        "SearchTermFilter"
    }

    fn matches(&self, record: &LawyerRecord, criteria: &FilterCriteria) -> bool {
        let term = criteria.search_term.as_str();
        contains_ignore_case(&record.name, term)
            || record
                .specialization
                .iter()
                .any(|spec| contains_ignore_case(spec, term))
    }
}
