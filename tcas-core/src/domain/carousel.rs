//! Photo carousel cursor

use serde::Serialize;

/// Index into a record's photo list with wraparound in both directions
///
/// With no photos there is nothing to show; `next` and `prev` do nothing
/// and `current` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhotoCursor {
    index: usize,
    len: usize,
}

impl PhotoCursor {
    /// Cursor at the first photo
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = if self.index + 1 >= self.len { 0 } else { self.index + 1 };
        }
        self.current()
    }

    pub fn prev(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        }
        self.current()
    }

    /// "Photo 2 of 3" style position, one-based
    pub fn position_label(&self) -> Option<String> {
        self.current()
            .map(|i| format!("Photo {} of {}", i + 1, self.len))
    }
}
