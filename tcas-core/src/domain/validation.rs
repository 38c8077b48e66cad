//! Field validation outcomes
//!
//! A rejected form yields one [`ValidationIssue`] per offending field, all
//! collected into a single [`ValidationErrors`] so every inline error can be
//! shown at once.

use std::fmt;

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// What is wrong with a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The field is empty (or whitespace only)
    Required,
    /// A number outside the closed range `[min, max]`
    OutOfRange { min: Decimal, max: Decimal },
    /// Fewer than `min` characters
    TooShort { min: usize },
    /// Present but not in the expected shape
    InvalidFormat,
}

impl ValidationIssue {
    /// Stable message key for this issue
    pub fn key(&self) -> &'static str {
        match self {
            ValidationIssue::Required => "required",
            ValidationIssue::OutOfRange { .. } => "out-of-range",
            ValidationIssue::TooShort { .. } => "too-short",
            ValidationIssue::InvalidFormat => "invalid-format",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::Required => write!(f, "this field is required"),
            ValidationIssue::OutOfRange { min, max } => {
                write!(f, "must be between {} and {}", min, max)
            }
            ValidationIssue::TooShort { min } => {
                write!(f, "must be at least {} characters", min)
            }
            ValidationIssue::InvalidFormat => write!(f, "has an invalid format"),
        }
    }
}

/// Per-field validation failures, kept in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: Vec<(&'static str, ValidationIssue)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issue for a field, replacing any earlier one for that field
    pub fn add(&mut self, field: &'static str, issue: ValidationIssue) {
        if let Some(slot) = self.fields.iter_mut().find(|(name, _)| *name == field) {
            slot.1 = issue;
        } else {
            self.fields.push((field, issue));
        }
    }

    /// Issue recorded for `field`, if any
    pub fn get(&self, field: &str) -> Option<&ValidationIssue> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, issue)| issue)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Offending field names in form order
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ValidationIssue)> {
        self.fields.iter().map(|(name, issue)| (*name, issue))
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`
    pub fn into_result<T>(self, value: T) -> std::result::Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, issue)| format!("{}: {}", field, issue))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Serialized as `{ "field": { "key": "...", "message": "..." }, ... }`
impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, issue) in &self.fields {
            map.serialize_entry(
                field,
                &serde_json::json!({ "key": issue.key(), "message": issue.to_string() }),
            )?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_keys() {
        assert_eq!(ValidationIssue::Required.key(), "required");
        assert_eq!(
            ValidationIssue::OutOfRange { min: Decimal::ZERO, max: Decimal::from(4) }.key(),
            "out-of-range"
        );
        assert_eq!(ValidationIssue::TooShort { min: 4 }.key(), "too-short");
        assert_eq!(ValidationIssue::InvalidFormat.key(), "invalid-format");
    }

    #[test]
    fn test_add_keeps_form_order_and_replaces() {
        let mut errors = ValidationErrors::new();
        errors.add("firstName", ValidationIssue::Required);
        errors.add("gpa", ValidationIssue::InvalidFormat);
        errors.add("firstName", ValidationIssue::TooShort { min: 2 });

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.field_names(), vec!["firstName", "gpa"]);
        assert_eq!(errors.get("firstName"), Some(&ValidationIssue::TooShort { min: 2 }));
    }

    #[test]
    fn test_serializes_as_object() {
        let mut errors = ValidationErrors::new();
        errors.add("phone", ValidationIssue::TooShort { min: 9 });

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["phone"]["key"], "too-short");
        assert_eq!(json["phone"]["message"], "must be at least 9 characters");
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));

        let mut errors = ValidationErrors::new();
        errors.add("email", ValidationIssue::InvalidFormat);
        assert!(errors.into_result(7).is_err());
    }
}
