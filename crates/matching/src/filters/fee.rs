//! Filter on the lawyer's fee.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use directory::LawyerRecord;

/// Removes lawyers whose fee is above `criteria.max_fee`.
///
/// A fee equal to the maximum is kept. A negative or NaN maximum keeps
/// nobody.
pub struct MaxFeeFilter;

impl Filter for MaxFeeFilter {
    fn name(&self) -> &str {
        "MaxFeeFilter"
    }

    fn matches(&self, record: &LawyerRecord, criteria: &FilterCriteria) -> bool {
        record.fee_per_unit <= criteria.max_fee
    }
}
