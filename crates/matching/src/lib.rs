//! Matching for the lawyer directory.
//!
//! This crate provides:
//! - Filter trait and one implementation per directory constraint
//! - FilterPipeline for composing filters
//! - `matches` / `filter_directory`, the stable directory filter
//! - CarouselCursor, a wrap-around position over filtered results
//! - DirectorySession, the per-view state tying the above together
//! - CaseRollup for case-outcome statistics
//!
//! ## Example Usage
//! ```ignore
//! use directory::{AvailabilityFilter, Directory};
//! use matching::{filter_directory, DirectorySession, FilterCriteria};
//!
//! let criteria = FilterCriteria::with_fee_ceiling(10_000.0)
//!     .availability(AvailabilityFilter::Available)
//!     .location("delhi");
//! let matching = filter_directory(directory.records(), &criteria);
//!
//! let mut session = DirectorySession::new(directory, 10_000.0);
//! session.update_criteria(|c| c.min_rating = 4.5);
//! if let Some(lawyer) = session.next() {
//!     println!("{}", lawyer.name);
//! }
//! ```

pub mod traits;
pub mod criteria;
pub mod filters;
pub mod filter_pipeline;
pub mod cursor;
pub mod session;
pub mod rollup;

// Re-export main types
pub use traits::Filter;
pub use criteria::{FilterCriteria, DEFAULT_FEE_CEILING};
pub use filter_pipeline::FilterPipeline;
pub use cursor::{CarouselCursor, CursorError};
pub use session::DirectorySession;
pub use rollup::CaseRollup;

use directory::LawyerRecord;
use std::sync::LazyLock;

static STANDARD_PIPELINE: LazyLock<FilterPipeline> = LazyLock::new(FilterPipeline::standard);

/// The shared pipeline holding every directory constraint
pub fn standard_pipeline() -> &'static FilterPipeline {
    &STANDARD_PIPELINE
}

/// True when `record` satisfies every constraint in `criteria`.
pub fn matches(record: &LawyerRecord, criteria: &FilterCriteria) -> bool {
    standard_pipeline().matches(record, criteria)
}

/// The matching records, in their original order.
///
/// Returns an empty vector when nothing matches.
pub fn filter_directory(records: &[LawyerRecord], criteria: &FilterCriteria) -> Vec<LawyerRecord> {
    standard_pipeline()
        .select(records, criteria)
        .into_iter()
        .cloned()
        .collect()
}
