//! A directory view session.
//!
//! `DirectorySession` owns everything one user's directory view needs:
//! the record snapshot, the like/bookmark annotations, the current
//! criteria, the filtered result and the carousel cursor. Nothing here is
//! global; each view creates its own session and drops it when it closes.

use crate::criteria::FilterCriteria;
use crate::cursor::{CarouselCursor, CursorError};
use crate::standard_pipeline;
use directory::{Annotations, Directory, DirectoryError, LawyerId, LawyerRecord};
use std::collections::HashMap;
use tracing::debug;

pub struct DirectorySession {
    directory: Directory,
    annotations: HashMap<LawyerId, Annotations>,
    criteria: FilterCriteria,
    /// Indices into `directory.records()`, in source order
    results: Vec<usize>,
    cursor: CarouselCursor,
}

impl DirectorySession {
    /// Open a session over `directory` with default criteria.
    pub fn new(directory: Directory, fee_ceiling: f64) -> Self {
        let mut session = Self {
            directory,
            annotations: HashMap::new(),
            criteria: FilterCriteria::with_fee_ceiling(fee_ceiling),
            results: Vec::new(),
            cursor: CarouselCursor::default(),
        };
        session.results = session.compute_results();
        session.cursor.reset(session.results.len());
        session
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Edit the criteria in place and re-filter.
    ///
    /// The cursor goes back to the first result only if the set of
    /// matching records changed. Returns the new result count.
    pub fn update_criteria(&mut self, edit: impl FnOnce(&mut FilterCriteria)) -> usize {
        edit(&mut self.criteria);
        self.refresh()
    }

    /// Replace the constraints wholesale and re-filter.
    ///
    /// The session keeps the fee ceiling it was opened with, whatever
    /// ceiling `criteria` was built with, so `clear_filters` still
    /// returns `max_fee` to the session's ceiling.
    pub fn set_criteria(&mut self, mut criteria: FilterCriteria) -> usize {
        criteria.set_fee_ceiling(self.criteria.fee_ceiling());
        self.criteria = criteria;
        self.refresh()
    }

    /// Reset every constraint to its default and re-filter
    pub fn clear_filters(&mut self) -> usize {
        self.criteria.reset();
        self.refresh()
    }

    /// The filtered records in source order
    pub fn results(&self) -> Vec<&LawyerRecord> {
        let records = self.directory.records();
        self.results.iter().map(|&idx| &records[idx]).collect()
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn cursor(&self) -> CarouselCursor {
        self.cursor
    }

    /// The record under the cursor, or `None` when nothing matches
    pub fn current(&self) -> Option<&LawyerRecord> {
        let position = self.cursor.current()?;
        let idx = *self.results.get(position)?;
        self.directory.records().get(idx)
    }

    pub fn next(&mut self) -> Option<&LawyerRecord> {
        self.cursor.next();
        self.current()
    }

    pub fn prev(&mut self) -> Option<&LawyerRecord> {
        self.cursor.prev();
        self.current()
    }

    /// Jump to a result position; out-of-range positions are rejected
    pub fn jump_to(&mut self, position: usize) -> Result<(), CursorError> {
        self.cursor.jump_to(position)
    }

    /// Flip the liked flag and return its new value
    pub fn toggle_like(&mut self, id: &str) -> Result<bool, DirectoryError> {
        let entry = self.annotation_entry(id)?;
        entry.liked = !entry.liked;
        Ok(entry.liked)
    }

    /// Flip the bookmarked flag and return its new value
    pub fn toggle_bookmark(&mut self, id: &str) -> Result<bool, DirectoryError> {
        let entry = self.annotation_entry(id)?;
        entry.bookmarked = !entry.bookmarked;
        Ok(entry.bookmarked)
    }

    pub fn annotations(&self, id: &str) -> Result<Annotations, DirectoryError> {
        if !self.directory.contains(id) {
            return Err(DirectoryError::UnknownLawyer(id.to_string()));
        }
        Ok(self.annotations.get(id).copied().unwrap_or_default())
    }

    /// Bookmarked records in source order, regardless of the current filter
    pub fn bookmarked(&self) -> Vec<&LawyerRecord> {
        self.directory
            .records()
            .iter()
            .filter(|r| self.annotations.get(&r.id).is_some_and(|a| a.bookmarked))
            .collect()
    }

    fn annotation_entry(&mut self, id: &str) -> Result<&mut Annotations, DirectoryError> {
        if !self.directory.contains(id) {
            return Err(DirectoryError::UnknownLawyer(id.to_string()));
        }
        Ok(self.annotations.entry(id.to_string()).or_default())
    }

    fn compute_results(&self) -> Vec<usize> {
        let pipeline = standard_pipeline();
        self.directory
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| pipeline.matches(record, &self.criteria))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn refresh(&mut self) -> usize {
        let results = self.compute_results();
        if results != self.results {
            debug!(
                "Filtered results changed ({} -> {}), cursor reset",
                self.results.len(),
                results.len()
            );
            self.results = results;
            self.cursor.reset(self.results.len());
        }
        self.results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lawyer;
    use directory::{Availability, AvailabilityFilter};

    fn session() -> DirectorySession {
        let directory = Directory::from_records(vec![
            lawyer("1", 3000.0, 4.8, 8, Availability::Available, "Delhi High Court"),
            lawyer("2", 4500.0, 4.9, 12, Availability::Busy, "Supreme Court"),
            lawyer("3", 2500.0, 4.7, 6, Availability::Available, "Mumbai Sessions Court"),
        ])
        .unwrap();
        DirectorySession::new(directory, 5000.0)
    }

    #[test]
    fn test_new_session_shows_first_match() {
        let session = session();
        assert_eq!(session.result_count(), 3);
        assert_eq!(session.current().unwrap().id, "1");
    }

    #[test]
    fn test_navigation_wraps() {
        let mut session = session();
        assert_eq!(session.prev().unwrap().id, "3");
        assert_eq!(session.next().unwrap().id, "1");
        assert_eq!(session.next().unwrap().id, "2");
    }

    #[test]
    fn test_membership_change_resets_cursor() {
        let mut session = session();
        session.jump_to(2).unwrap();

        let count = session.update_criteria(|c| c.availability = AvailabilityFilter::Available);
        assert_eq!(count, 2);
        assert_eq!(session.cursor().current(), Some(0));
        assert_eq!(session.current().unwrap().id, "1");
    }

    #[test]
    fn test_same_membership_keeps_cursor() {
        let mut session = session();
        session.jump_to(1).unwrap();

        // Every record is rated above 4.0, so nothing drops out
        session.update_criteria(|c| c.min_rating = 4.0);
        assert_eq!(session.cursor().current(), Some(1));
        assert_eq!(session.current().unwrap().id, "2");
    }

    #[test]
    fn test_empty_state_and_clear() {
        let mut session = session();
        session.update_criteria(|c| c.location = "Chennai".to_string());

        assert_eq!(session.result_count(), 0);
        assert!(session.current().is_none());
        assert!(session.next().is_none());
        assert!(session.jump_to(0).is_err());

        assert_eq!(session.clear_filters(), 3);
        assert!(session.criteria().is_default());
        assert_eq!(session.criteria().max_fee, 5000.0);
        assert_eq!(session.current().unwrap().id, "1");
    }

    #[test]
    fn test_set_criteria_keeps_fee_ceiling() {
        let mut session = session();

        // Default criteria carry the 10000 ceiling, not the session's 5000
        assert_eq!(session.set_criteria(FilterCriteria::default().location("delhi")), 1);
        assert_eq!(session.criteria().location, "delhi");
        assert_eq!(session.criteria().fee_ceiling(), 5000.0);

        assert_eq!(session.clear_filters(), 3);
        assert_eq!(session.criteria().max_fee, 5000.0);
        assert!(session.criteria().is_default());
    }

    #[test]
    fn test_annotations() {
        let mut session = session();
        assert!(session.toggle_like("2").unwrap());
        assert!(session.toggle_bookmark("3").unwrap());
        assert!(!session.toggle_like("2").unwrap());

        let annotations = session.annotations("3").unwrap();
        assert!(annotations.bookmarked);
        assert!(!annotations.liked);

        let bookmarked = session.bookmarked();
        assert_eq!(bookmarked.len(), 1);
        assert_eq!(bookmarked[0].id, "3");

        assert!(matches!(
            session.toggle_like("99"),
            Err(DirectoryError::UnknownLawyer(_))
        ));
    }

    #[test]
    fn test_annotations_do_not_touch_records() {
        let mut session = session();
        let before = session.directory().records().to_vec();
        session.toggle_like("1").unwrap();
        session.toggle_bookmark("1").unwrap();
        assert_eq!(session.directory().records(), before.as_slice());
    }
}
