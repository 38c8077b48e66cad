//! Listing view - sort state, open detail view and its photo cursor

use serde::Serialize;

use crate::domain::{PhotoCursor, PortfolioRecord, SortConfig, SortKey};

/// Read-only view over one record with a cursor into its photos
#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub record: PortfolioRecord,
    pub cursor: PhotoCursor,
}

impl DetailView {
    /// Open on the first photo
    pub fn new(record: PortfolioRecord) -> Self {
        let cursor = PhotoCursor::new(record.photos.len());
        Self { record, cursor }
    }

    /// Handle of the photo under the cursor
    pub fn current_photo(&self) -> Option<&str> {
        self.cursor
            .current()
            .and_then(|i| self.record.photos.get(i))
            .map(String::as_str)
    }
}

/// State of the teacher-facing listing screen
#[derive(Debug, Clone, Default)]
pub struct ListingView {
    sort: SortConfig,
    detail: Option<DetailView>,
}

impl ListingView {
    pub fn new(sort: SortConfig) -> Self {
        Self { sort, detail: None }
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    /// Header click on `key`
    pub fn set_sort(&mut self, key: SortKey) -> SortConfig {
        self.sort = self.sort.toggle(key);
        self.sort
    }

    /// Open a detail view; `None` closes any open one ("nothing shown")
    pub fn open(&mut self, record: Option<PortfolioRecord>) -> Option<&DetailView> {
        self.detail = record.map(DetailView::new);
        self.detail.as_ref()
    }

    pub fn close(&mut self) {
        self.detail = None;
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub fn next_photo(&mut self) -> Option<usize> {
        self.detail.as_mut().and_then(|d| d.cursor.next())
    }

    pub fn prev_photo(&mut self) -> Option<usize> {
        self.detail.as_mut().and_then(|d| d.cursor.prev())
    }

    pub fn current_photo(&self) -> Option<&str> {
        self.detail.as_ref().and_then(DetailView::current_photo)
    }
}
