//! TCAS Core - admission portfolio directory
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core entities (PortfolioRecord, SessionIdentity, sort and form types)
//! - **ports**: Trait definitions for external dependencies (PortfolioRepository)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (in-memory directory, demo data)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod log_migrations;
pub mod ports;
pub mod services;

use std::sync::Arc;

use adapters::memory::InMemoryRepository;
use config::Config;
use domain::result::Result as CoreResult;
use ports::PortfolioRepository;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{
    Command, LoginForm, Outcome, PhotoCursor, PortfolioForm, PortfolioRecord, Role,
    SessionIdentity, SortConfig, SortDirection, SortKey, ValidationErrors, ValidationIssue,
};
pub use services::{EntryPoint, LogEvent, LoggingService};

/// Application state for one running session
///
/// Owns the portfolio directory, the session identity and the listing
/// screen state. Front ends hold exactly one of these and mutate it only
/// through [`TcasContext::dispatch`].
pub struct TcasContext {
    pub config: Config,
    pub repository: Arc<dyn PortfolioRepository>,
    pub portfolio_service: PortfolioService,
    pub status_service: StatusService,
    session: SessionService,
    listing: ListingView,
}

impl TcasContext {
    /// Create a context with an empty in-memory directory
    ///
    /// In demo mode the directory starts with the sample portfolios.
    pub fn with_config(config: Config) -> CoreResult<Self> {
        let repository: Arc<dyn PortfolioRepository> = Arc::new(InMemoryRepository::new());

        let portfolio_service = PortfolioService::new(Arc::clone(&repository));
        let status_service = StatusService::new(Arc::clone(&repository));
        let listing = ListingView::new(config.default_sort);

        if config.demo_mode {
            DemoService::seed(&portfolio_service)?;
        }

        Ok(Self {
            config,
            repository,
            portfolio_service,
            status_service,
            session: SessionService::new(),
            listing,
        })
    }

    /// Apply one command to the state
    ///
    /// Only storage failures are errors. Rejected forms and unknown ids are
    /// ordinary outcomes.
    pub fn dispatch(&mut self, command: Command) -> CoreResult<Outcome> {
        let outcome = match command {
            Command::Submit(form) => match self.portfolio_service.submit(&form)? {
                Ok(record) => Outcome::Submitted(record),
                Err(errors) => Outcome::Rejected(errors),
            },
            Command::Login(form) => match self.session.login(&form) {
                Ok(identity) => Outcome::LoggedIn(identity),
                Err(errors) => Outcome::Rejected(errors),
            },
            Command::Logout => {
                self.session.logout();
                Outcome::LoggedOut
            }
            Command::SetSort(key) => Outcome::SortChanged(self.listing.set_sort(key)),
            Command::Open(id) => {
                let record = self.portfolio_service.get(&id)?;
                match self.listing.open(record) {
                    Some(detail) => Outcome::Opened(detail.record.clone()),
                    None => Outcome::NotFound(id),
                }
            }
            Command::Close => {
                self.listing.close();
                Outcome::Closed
            }
            Command::NextPhoto => Outcome::PhotoMoved(self.listing.next_photo()),
            Command::PrevPhoto => Outcome::PhotoMoved(self.listing.prev_photo()),
        };
        Ok(outcome)
    }

    /// Directory in the current listing order
    pub fn listing(&self) -> CoreResult<Vec<PortfolioRecord>> {
        self.portfolio_service.list(self.listing.sort())
    }

    pub fn sort(&self) -> SortConfig {
        self.listing.sort()
    }

    /// Open detail view, if any
    pub fn detail(&self) -> Option<&DetailView> {
        self.listing.detail()
    }

    pub fn current_user(&self) -> Option<&SessionIdentity> {
        self.session.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_mode_seeds_directory() {
        let config = Config {
            demo_mode: true,
            ..Default::default()
        };
        let ctx = TcasContext::with_config(config).unwrap();
        assert_eq!(ctx.listing().unwrap().len(), 5);
    }

    #[test]
    fn test_listing_uses_configured_default_sort() {
        let config = Config {
            demo_mode: true,
            default_sort: SortConfig::new(SortKey::FirstName, SortDirection::Asc),
        };
        let ctx = TcasContext::with_config(config).unwrap();
        let listing = ctx.listing().unwrap();
        assert_eq!(listing[0].first_name, "Anan");
    }

    #[test]
    fn test_open_missing_closes_previous_detail() {
        let config = Config {
            demo_mode: true,
            ..Default::default()
        };
        let mut ctx = TcasContext::with_config(config).unwrap();

        ctx.dispatch(Command::Open("demo-0001".to_string())).unwrap();
        assert!(ctx.detail().is_some());

        let outcome = ctx.dispatch(Command::Open("nope".to_string())).unwrap();
        assert!(matches!(outcome, Outcome::NotFound(id) if id == "nope"));
        assert!(ctx.detail().is_none());
    }
}
