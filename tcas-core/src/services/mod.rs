//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod demo;
mod listing;
pub mod logging;
mod portfolio;
mod session;
mod status;

pub use demo::DemoService;
pub use listing::{DetailView, ListingView};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use portfolio::{IdGenerator, PortfolioService, SubmitResult};
pub use session::SessionService;
pub use status::{GpaSummary, MajorCount, StatusService, StatusSummary};
