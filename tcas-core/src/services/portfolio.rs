//! Portfolio service - submission, listing and lookup

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::result::Result;
use crate::domain::sort::sort_records;
use crate::domain::{PortfolioForm, PortfolioRecord, SortConfig, ValidationErrors};
use crate::ports::PortfolioRepository;

/// Outcome of a submission that did not hit a storage error
pub type SubmitResult = std::result::Result<PortfolioRecord, ValidationErrors>;

/// Hands out creation-time ids that stay unique within the process
///
/// Ids are Unix milliseconds; two records created in the same millisecond
/// get consecutive values instead of colliding.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn next_id(&self, now: DateTime<Utc>) -> String {
        let candidate = now.timestamp_millis().max(0) as u64;
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let id = candidate.max(last + 1);
            match self
                .last
                .compare_exchange(last, id, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return id.to_string(),
                Err(actual) => last = actual,
            }
        }
    }
}

pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepository>,
    ids: IdGenerator,
}

impl PortfolioService {
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self {
            repository,
            ids: IdGenerator::default(),
        }
    }

    /// Validate a form and, only if it passes, add it to the directory
    ///
    /// The outer `Result` carries storage failures; the inner one carries
    /// the per-field errors of a rejected form.
    pub fn submit(&self, form: &PortfolioForm) -> Result<SubmitResult> {
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(errors) => return Ok(Err(errors)),
        };

        let now = Utc::now();
        let record = PortfolioRecord::from_draft(self.ids.next_id(now), draft, now);
        self.repository.insert(record.clone())?;
        Ok(Ok(record))
    }

    /// Append an already-validated record as is
    pub fn insert(&self, record: PortfolioRecord) -> Result<()> {
        self.repository.insert(record)
    }

    /// Every record, reordered for display; stored order is untouched
    pub fn list(&self, sort: SortConfig) -> Result<Vec<PortfolioRecord>> {
        let mut records = self.repository.all()?;
        sort_records(&mut records, sort);
        Ok(records)
    }

    pub fn get(&self, id: &str) -> Result<Option<PortfolioRecord>> {
        self.repository.get(id)
    }

    pub fn count(&self) -> Result<usize> {
        self.repository.count()
    }
}
