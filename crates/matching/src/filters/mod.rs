//! Filter implementations for the directory pipeline.
//!
//! Each constraint of `FilterCriteria` has its own filter so that it can
//! be tested and logged independently.

pub mod availability;
pub mod experience;
pub mod fee;
pub mod location;
pub mod rating;
pub mod search;
pub mod specialization;

// Re-export for convenience
pub use availability::AvailabilityMatchFilter;
pub use experience::MinimumExperienceFilter;
pub use fee::MaxFeeFilter;
pub use location::LocationFilter;
pub use rating::MinimumRatingFilter;
pub use search::SearchTermFilter;
pub use specialization::SpecializationFilter;

/// Case-insensitive substring test. An empty needle always matches.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
