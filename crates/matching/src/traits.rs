//! Core traits for the matching pipeline.
//!
//! This module defines the Filter trait that lets each directory
//! constraint be written, tested and composed on its own.

use crate::criteria::FilterCriteria;
use directory::LawyerRecord;

/// One predicate of the directory filter.
///
/// Filters are stateless: every constraint value comes from the
/// `FilterCriteria` passed in, so a single pipeline can serve any number
/// of sessions.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to sit in a shared static
/// - `matches` is pure and infallible; out-of-domain criteria just reject
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Decide whether `record` satisfies this filter's part of `criteria`.
    ///
    /// # Arguments
    /// * `record` - The lawyer record to test
    /// * `criteria` - The full criteria; each filter reads only its own fields
    ///
    /// # Returns
    /// * `true` - The record passes this constraint (or it is unset)
    /// * `false` - The record is excluded
    fn matches(&self, record: &LawyerRecord, criteria: &FilterCriteria) -> bool;
}
