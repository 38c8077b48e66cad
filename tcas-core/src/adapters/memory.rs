//! In-memory portfolio directory
//!
//! Lives for the lifetime of the process; nothing is written to disk.

use std::sync::RwLock;

use crate::domain::result::{Error, Result};
use crate::domain::PortfolioRecord;
use crate::ports::PortfolioRepository;

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    records: RwLock<Vec<PortfolioRecord>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PortfolioRepository for InMemoryRepository {
    fn insert(&self, record: PortfolioRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| Error::storage(format!("Lock poisoned: {}", e)))?;
        records.push(record);
        Ok(())
    }

    fn all(&self) -> Result<Vec<PortfolioRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| Error::storage(format!("Lock poisoned: {}", e)))?;
        Ok(records.clone())
    }

    fn get(&self, id: &str) -> Result<Option<PortfolioRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| Error::storage(format!("Lock poisoned: {}", e)))?;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    fn count(&self) -> Result<usize> {
        let records = self
            .records
            .read()
            .map_err(|e| Error::storage(format!("Lock poisoned: {}", e)))?;
        Ok(records.len())
    }
}
