//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - In-memory storage for the PortfolioRepository port
//! - Demo data provider for exploring the listing

pub mod demo;
pub mod memory;
