//! The FilterPipeline combines individual filters.
//!
//! A record matches the pipeline when it matches every filter in it. The
//! pipeline never reorders records: its output is always a subsequence of
//! its input.

use crate::criteria::FilterCriteria;
use crate::filters::{
    AvailabilityMatchFilter, LocationFilter, MaxFeeFilter, MinimumExperienceFilter,
    MinimumRatingFilter, SearchTermFilter, SpecializationFilter,
};
use crate::traits::Filter;
use directory::LawyerRecord;
use tracing;

/// Chains filters together with the builder pattern.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MaxFeeFilter)
///     .add_filter(MinimumRatingFilter);
///
/// let matching = pipeline.apply(records, &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline. It matches every record.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The full directory filter: fee, availability, rating, experience,
    /// location, free-text search and specialization.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(MaxFeeFilter)
            .add_filter(AvailabilityMatchFilter)
            .add_filter(MinimumRatingFilter)
            .add_filter(MinimumExperienceFilter)
            .add_filter(LocationFilter)
            .add_filter(SearchTermFilter)
            .add_filter(SpecializationFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in evaluation order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Check one record against every filter.
    ///
    /// Filters run in the order they were added and evaluation stops at
    /// the first rejection. An empty pipeline matches everything.
    ///
    /// # Arguments
    /// * `record` - The lawyer record to test
    /// * `criteria` - The constraints of the current directory view
    ///
    /// # Returns
    /// `true` when no filter rejects the record
    pub fn matches(&self, record: &LawyerRecord, criteria: &FilterCriteria) -> bool {
        self.filters.iter().all(|f| f.matches(record, criteria))
    }

    /// Keep the matching records, taking ownership of the input.
    ///
    /// ## Algorithm
    /// 1. Note the input count
    /// 2. Walk the records in source order, keeping each one that passes
    ///    [`matches`](Self::matches)
    /// 3. Log input and output counts
    /// 4. Return the kept records, still in source order
    ///
    /// # Arguments
    /// * `records` - The directory snapshot to filter (takes ownership)
    /// * `criteria` - The constraints of the current directory view
    ///
    /// # Returns
    /// The matching records as an ordered subsequence of `records`. No
    /// match is an empty `Vec`, not an error.
    pub fn apply(&self, records: Vec<LawyerRecord>, criteria: &FilterCriteria) -> Vec<LawyerRecord> {
        let input_count = records.len();
        let filtered: Vec<LawyerRecord> = records
            .into_iter()
            .filter(|record| self.matches(record, criteria))
            .collect();
        tracing::debug!(
            "Directory filtered (input count: {}, output count: {})",
            input_count,
            filtered.len()
        );
        filtered
    }

    /// Borrowing variant of [`apply`](Self::apply) for callers that keep
    /// the snapshot.
    ///
    /// # Arguments
    /// * `records` - The directory snapshot, left untouched
    /// * `criteria` - The constraints of the current directory view
    ///
    /// # Returns
    /// References to the matching records, in the same order as `records`
    pub fn select<'a>(
        &self,
        records: &'a [LawyerRecord],
        criteria: &FilterCriteria,
    ) -> Vec<&'a LawyerRecord> {
        let selected: Vec<&LawyerRecord> = records
            .iter()
            .filter(|record| self.matches(record, criteria))
            .collect();
        tracing::debug!(
            "Directory filtered (input count: {}, output count: {})",
            records.len(),
            selected.len()
        );
        selected
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
