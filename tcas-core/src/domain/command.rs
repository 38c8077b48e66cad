//! Commands accepted by the application state and what they produce

use serde::Serialize;

use super::form::{LoginForm, PortfolioForm};
use super::identity::SessionIdentity;
use super::portfolio::PortfolioRecord;
use super::sort::{SortConfig, SortKey};
use super::validation::ValidationErrors;

/// Every state mutation a front end can ask for
#[derive(Debug, Clone)]
pub enum Command {
    /// Validate a submission and add it to the directory
    Submit(PortfolioForm),
    Login(LoginForm),
    Logout,
    /// Header click on a listing column
    SetSort(SortKey),
    /// Open the detail view for a record id
    Open(String),
    Close,
    NextPhoto,
    PrevPhoto,
}

impl Command {
    /// Short name used in event logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Submit(_) => "submit",
            Command::Login(_) => "login",
            Command::Logout => "logout",
            Command::SetSort(_) => "sort",
            Command::Open(_) => "show",
            Command::Close => "close",
            Command::NextPhoto => "next",
            Command::PrevPhoto => "prev",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", content = "data", rename_all = "camelCase")]
pub enum Outcome {
    Submitted(PortfolioRecord),
    Rejected(ValidationErrors),
    LoggedIn(SessionIdentity),
    LoggedOut,
    SortChanged(SortConfig),
    /// A detail view is now open on this record
    Opened(PortfolioRecord),
    /// Nothing shown: no record has this id
    NotFound(String),
    Closed,
    /// Photo index after the move; `None` when there is nothing to show
    PhotoMoved(Option<usize>),
}
