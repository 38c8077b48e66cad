//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod carousel;
mod command;
pub mod form;
mod identity;
mod portfolio;
pub mod result;
pub mod sort;
mod validation;

pub use carousel::PhotoCursor;
pub use command::{Command, Outcome};
pub use form::{LoginForm, PortfolioForm};
pub use identity::{Role, SessionIdentity};
pub use portfolio::{PortfolioDraft, PortfolioRecord};
pub use sort::{SortConfig, SortDirection, SortKey};
pub use validation::{ValidationErrors, ValidationIssue};
