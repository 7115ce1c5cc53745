//! Carousel cursor over a filtered result list.
//!
//! The cursor is a zero-based index that wraps in both directions. It
//! knows only the length of the list it walks, not the records, so the
//! owner must `reset` it whenever the list changes.

use thiserror::Error;
use tracing::warn;

/// Rejected cursor moves
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("Index {index} is out of range for {len} results")]
    OutOfRange { index: usize, len: usize },
}

/// Position of the displayed record within a filtered list of `len` items.
///
/// With `len == 0` there is no current position: `current()` is `None`
/// and `next`/`prev` do nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselCursor {
    index: usize,
    len: usize,
}

impl CarouselCursor {
    /// Cursor at the first of `len` items
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Point at the first item of a newly established list
    pub fn reset(&mut self, len: usize) {
        self.index = 0;
        self.len = len;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current index, or `None` when the list is empty
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Advance one item, wrapping from the last to the first
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back one item, wrapping from the first to the last
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump straight to `index`.
    ///
    /// Out-of-range requests are rejected and leave the cursor where it
    /// was; they are never clamped.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CursorError> {
        if index >= self.len {
            warn!("Rejected carousel jump to {} of {}", index, self.len);
            return Err(CursorError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut cursor = CarouselCursor::new(3);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.current(), Some(2));
        cursor.next();
        assert_eq!(cursor.current(), Some(0));
    }

    #[test]
    fn test_prev_wraps() {
        let mut cursor = CarouselCursor::new(3);
        cursor.prev();
        assert_eq!(cursor.current(), Some(2));
        cursor.prev();
        assert_eq!(cursor.current(), Some(1));
    }

    #[test]
    fn test_empty_cursor_is_inert() {
        let mut cursor = CarouselCursor::new(0);
        assert_eq!(cursor.current(), None);
        cursor.next();
        cursor.prev();
        assert_eq!(cursor.current(), None);
        assert_eq!(
            cursor.jump_to(0),
            Err(CursorError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_jump_to() {
        let mut cursor = CarouselCursor::new(4);
        cursor.jump_to(3).unwrap();
        assert_eq!(cursor.current(), Some(3));

        assert!(cursor.jump_to(4).is_err());
        assert_eq!(cursor.current(), Some(3));
    }

    #[test]
    fn test_reset() {
        let mut cursor = CarouselCursor::new(5);
        cursor.jump_to(4).unwrap();
        cursor.reset(2);
        assert_eq!(cursor.current(), Some(0));
        assert_eq!(cursor.len(), 2);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut cursor = CarouselCursor::new(1);
        cursor.next();
        assert_eq!(cursor.current(), Some(0));
        cursor.prev();
        assert_eq!(cursor.current(), Some(0));
    }
}
