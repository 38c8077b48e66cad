//! Listing sort order

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::portfolio::PortfolioRecord;

/// Column the directory listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Gpa,
    Major,
    FirstName,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::FirstName, SortKey::Gpa, SortKey::Major];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Gpa => "gpa",
            SortKey::Major => "major",
            SortKey::FirstName => "firstName",
        }
    }

    /// Natural ordering of two records on this column
    pub fn compare(&self, a: &PortfolioRecord, b: &PortfolioRecord) -> Ordering {
        match self {
            SortKey::Gpa => a.gpa.cmp(&b.gpa),
            SortKey::Major => a.major.cmp(&b.major),
            SortKey::FirstName => a.first_name.cmp(&b.first_name),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gpa" => Ok(SortKey::Gpa),
            "major" => Ok(SortKey::Major),
            "firstname" | "first-name" | "first_name" | "name" => Ok(SortKey::FirstName),
            other => Err(format!(
                "unknown sort key '{}' (expected gpa, major or firstName)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Apply this direction to a natural-order comparison
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{}' (expected asc or desc)", other)),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// Highest GPA first
    fn default() -> Self {
        Self {
            key: SortKey::Gpa,
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header-click behaviour: the active column flips, a new column starts descending
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.flip())
        } else {
            Self::new(key, SortDirection::Desc)
        }
    }

    pub fn compare(&self, a: &PortfolioRecord, b: &PortfolioRecord) -> Ordering {
        self.direction.apply(self.key.compare(a, b))
    }
}

/// Stable in-place sort; records with equal keys keep their relative order
/// in both directions.
pub fn sort_records(records: &mut [PortfolioRecord], config: SortConfig) {
    records.sort_by(|a, b| config.compare(a, b));
}
