//! Repository port - the portfolio directory contract

use crate::domain::result::Result;
use crate::domain::PortfolioRecord;

/// Ordered collection of submitted portfolios
///
/// Append-only: there is no update or delete. Implementations keep
/// insertion order and never deduplicate or validate; callers validate
/// before inserting.
pub trait PortfolioRepository: Send + Sync {
    /// Append a record to the end of the directory
    fn insert(&self, record: PortfolioRecord) -> Result<()>;

    /// Every record, in insertion order
    fn all(&self) -> Result<Vec<PortfolioRecord>>;

    /// Look up a record by id
    fn get(&self, id: &str) -> Result<Option<PortfolioRecord>>;

    /// Number of records stored
    fn count(&self) -> Result<usize>;
}
