//! User-chosen filter constraints.
//!
//! Criteria are created with defaults when a directory view opens, edited
//! in place as the user adjusts controls, and reset on "clear filters".
//! They are never persisted.

use directory::AvailabilityFilter;

/// Fee ceiling used when the caller does not supply one
pub const DEFAULT_FEE_CEILING: f64 = 10_000.0;

/// The current set of constraints for one directory view.
///
/// Values are taken literally: a negative `max_fee` or a `min_rating`
/// above 5 is not an error, it simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Records whose fee exceeds this are excluded
    pub max_fee: f64,
    pub min_rating: f64,
    pub min_experience: u32,
    pub availability: AvailabilityFilter,
    /// Case-insensitive substring of the location; empty means no constraint
    pub location: String,
    /// Case-insensitive substring of the name or any specialization
    pub search_term: String,
    /// Case-insensitive substring of any specialization
    pub specialization: Option<String>,
    fee_ceiling: f64,
}

impl FilterCriteria {
    /// Defaults with `max_fee` opened up to `fee_ceiling`
    pub fn with_fee_ceiling(fee_ceiling: f64) -> Self {
        Self {
            max_fee: fee_ceiling,
            min_rating: 0.0,
            min_experience: 0,
            availability: AvailabilityFilter::Any,
            location: String::new(),
            search_term: String::new(),
            specialization: None,
            fee_ceiling,
        }
    }

    /// The ceiling `max_fee` returns to on reset
    pub fn fee_ceiling(&self) -> f64 {
        self.fee_ceiling
    }

    /// Change the ceiling without touching the current `max_fee`
    pub(crate) fn set_fee_ceiling(&mut self, fee_ceiling: f64) {
        self.fee_ceiling = fee_ceiling;
    }

    /// Restore every constraint to its default, keeping the fee ceiling
    pub fn reset(&mut self) {
        *self = Self::with_fee_ceiling(self.fee_ceiling);
    }

    /// True when no constraint narrows the directory below the ceiling
    pub fn is_default(&self) -> bool {
        *self == Self::with_fee_ceiling(self.fee_ceiling)
    }

    // Builder-style setters, handy for one-shot queries

    pub fn max_fee(mut self, max_fee: f64) -> Self {
        self.max_fee = max_fee;
        self
    }

    pub fn min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn min_experience(mut self, years: u32) -> Self {
        self.min_experience = years;
        self
    }

    pub fn availability(mut self, availability: AvailabilityFilter) -> Self {
        self.availability = availability;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = Some(specialization.into());
        self
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::with_fee_ceiling(DEFAULT_FEE_CEILING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let criteria = FilterCriteria::with_fee_ceiling(5000.0);
        assert_eq!(criteria.max_fee, 5000.0);
        assert_eq!(criteria.min_rating, 0.0);
        assert_eq!(criteria.min_experience, 0);
        assert_eq!(criteria.availability, AvailabilityFilter::Any);
        assert!(criteria.location.is_empty());
        assert!(criteria.is_default());
    }

    #[test]
    fn test_reset_keeps_ceiling() {
        let mut criteria = FilterCriteria::with_fee_ceiling(5000.0)
            .max_fee(1500.0)
            .min_rating(4.5)
            .location("Delhi")
            .specialization("Criminal");
        assert!(!criteria.is_default());

        criteria.reset();
        assert!(criteria.is_default());
        assert_eq!(criteria.max_fee, 5000.0);
        assert!(criteria.specialization.is_none());
    }
}
