//! Portfolio domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One student's submitted admission portfolio
///
/// Records are immutable once they enter the directory. Required text
/// fields are guaranteed non-empty and `gpa` lies in `[0, 4]` because the
/// only way to build one from user input is [`PortfolioRecord::from_draft`]
/// on a validated [`PortfolioDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub school: String,
    pub gpa: Decimal,
    pub skills: String,
    pub reason: String,
    pub major: String,
    pub university: String,
    /// Opaque image handles in the order they were selected
    #[serde(default)]
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated submission that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioDraft {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub school: String,
    pub gpa: Decimal,
    pub skills: String,
    pub reason: String,
    pub major: String,
    pub university: String,
    pub photos: Vec<String>,
}

impl PortfolioRecord {
    /// Stamp a validated draft with its id and creation time
    pub fn from_draft(id: impl Into<String>, draft: PortfolioDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            first_name: draft.first_name,
            last_name: draft.last_name,
            address: draft.address,
            phone: draft.phone,
            school: draft.school,
            gpa: draft.gpa,
            skills: draft.skills,
            reason: draft.reason,
            major: draft.major,
            university: draft.university,
            photos: draft.photos,
            created_at,
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_photos(&self) -> bool {
        !self.photos.is_empty()
    }
}
