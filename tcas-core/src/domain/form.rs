//! Raw form input and its validation schema
//!
//! Forms hold exactly what the user typed. `validate()` checks every field
//! and reports all failures together, so a front end can render each inline
//! error in one pass.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::identity::{Role, SessionIdentity};
use super::portfolio::PortfolioDraft;
use super::validation::{ValidationErrors, ValidationIssue};

/// Minimum phone number length accepted by the submission form
pub const MIN_PHONE_LEN: usize = 9;

/// Minimum password length accepted by the login form
pub const MIN_PASSWORD_LEN: usize = 4;

/// Inclusive GPA bounds
pub const GPA_MIN: Decimal = Decimal::ZERO;
pub const GPA_MAX: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Field names as they appear in error maps
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const ADDRESS: &str = "address";
    pub const PHONE: &str = "phone";
    pub const SCHOOL: &str = "school";
    pub const GPA: &str = "gpa";
    pub const MAJOR: &str = "major";
    pub const UNIVERSITY: &str = "university";

    pub const ROLE: &str = "role";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
}

fn email_re() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Plain decimal: optional minus, digits, optional fraction
fn gpa_re() -> &'static Regex {
    static GPA_RE: OnceLock<Regex> = OnceLock::new();
    GPA_RE.get_or_init(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap())
}

/// Required text, kept exactly as entered
fn required(errors: &mut ValidationErrors, field: &'static str, value: &str) -> String {
    required_min_len(errors, field, value, 1)
}

/// Required text with a minimum character count, whitespace included
fn required_min_len(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    min: usize,
) -> String {
    if value.is_empty() {
        errors.add(field, ValidationIssue::Required);
    } else if value.chars().count() < min {
        errors.add(field, ValidationIssue::TooShort { min });
    }
    value.to_string()
}

/// Parse GPA text, then range-check it
fn gpa(errors: &mut ValidationErrors, value: &str) -> Decimal {
    let out_of_range = ValidationIssue::OutOfRange {
        min: GPA_MIN,
        max: GPA_MAX,
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(fields::GPA, ValidationIssue::Required);
        return Decimal::ZERO;
    }
    if !gpa_re().is_match(trimmed) {
        errors.add(fields::GPA, ValidationIssue::InvalidFormat);
        return Decimal::ZERO;
    }
    match Decimal::from_str(trimmed) {
        Ok(gpa) if gpa < GPA_MIN || gpa > GPA_MAX => {
            errors.add(fields::GPA, out_of_range);
            gpa
        }
        Ok(gpa) => gpa,
        // Well-formed but too many digits for a Decimal
        Err(_) => {
            errors.add(fields::GPA, out_of_range);
            Decimal::ZERO
        }
    }
}

/// The student submission form, exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioForm {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub school: String,
    pub gpa: String,
    pub skills: String,
    pub reason: String,
    pub major: String,
    pub university: String,
    pub photos: Vec<String>,
}

impl PortfolioForm {
    /// Replace the current photo selection
    pub fn select_photos<I, S>(&mut self, handles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.photos = handles.into_iter().map(Into::into).collect();
    }

    /// Check every field and shape a draft record
    pub fn validate(&self) -> Result<PortfolioDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = required(&mut errors, fields::FIRST_NAME, &self.first_name);
        let last_name = required(&mut errors, fields::LAST_NAME, &self.last_name);
        let address = required(&mut errors, fields::ADDRESS, &self.address);
        let phone = required_min_len(&mut errors, fields::PHONE, &self.phone, MIN_PHONE_LEN);
        let school = required(&mut errors, fields::SCHOOL, &self.school);
        let gpa = gpa(&mut errors, &self.gpa);
        let major = required(&mut errors, fields::MAJOR, &self.major);
        let university = required(&mut errors, fields::UNIVERSITY, &self.university);

        let photos = self
            .photos
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        errors.into_result(PortfolioDraft {
            first_name,
            last_name,
            address,
            phone,
            school,
            gpa,
            skills: self.skills.clone(),
            reason: self.reason.clone(),
            major,
            university,
            photos,
        })
    }
}

/// The login form
///
/// Only shape is checked: the password is never compared to anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub role: String,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(role: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<SessionIdentity, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let role = if self.role.trim().is_empty() {
            errors.add(fields::ROLE, ValidationIssue::Required);
            None
        } else {
            match Role::from_str(&self.role) {
                Ok(role) => Some(role),
                Err(_) => {
                    errors.add(fields::ROLE, ValidationIssue::InvalidFormat);
                    None
                }
            }
        };

        let email = self.email.trim();
        if email.is_empty() {
            errors.add(fields::EMAIL, ValidationIssue::Required);
        } else if !email_re().is_match(email) {
            errors.add(fields::EMAIL, ValidationIssue::InvalidFormat);
        }

        if self.password.is_empty() {
            errors.add(fields::PASSWORD, ValidationIssue::Required);
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add(
                fields::PASSWORD,
                ValidationIssue::TooShort {
                    min: MIN_PASSWORD_LEN,
                },
            );
        }

        match role {
            Some(role) if errors.is_empty() => Ok(SessionIdentity::new(email, role)),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PortfolioForm {
        PortfolioForm {
            first_name: "Somchai".to_string(),
            last_name: "Jaidee".to_string(),
            address: "99 Phayathai Rd, Bangkok".to_string(),
            phone: "0812345678".to_string(),
            school: "Triam Udom Suksa".to_string(),
            gpa: "3.75".to_string(),
            skills: "Robotics".to_string(),
            reason: String::new(),
            major: "Computer Engineering".to_string(),
            university: "Chulalongkorn University".to_string(),
            photos: vec![],
        }
    }

    #[test]
    fn test_valid_form() {
        let draft = valid_form().validate().unwrap();
        assert_eq!(draft.first_name, "Somchai");
        assert_eq!(draft.gpa, Decimal::new(375, 2));
        assert!(draft.reason.is_empty());
    }

    #[test]
    fn test_gpa_bounds_inclusive() {
        for text in ["0", "4", "4.00", "0.0"] {
            let mut form = valid_form();
            form.gpa = text.to_string();
            assert!(form.validate().is_ok(), "gpa {} should pass", text);
        }
    }

    #[test]
    fn test_gpa_out_of_range() {
        for text in ["-0.01", "4.01", "10"] {
            let mut form = valid_form();
            form.gpa = text.to_string();
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get(fields::GPA).unwrap().key(), "out-of-range");
        }
    }

    #[test]
    fn test_gpa_not_a_number() {
        let mut form = valid_form();
        form.gpa = "three".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(fields::GPA), Some(&ValidationIssue::InvalidFormat));
    }

    #[test]
    fn test_gpa_text_is_trimmed() {
        let mut form = valid_form();
        form.gpa = " 3.5 ".to_string();
        assert_eq!(form.validate().unwrap().gpa, Decimal::new(35, 1));
    }

    #[test]
    fn test_reports_every_offending_field() {
        let form = PortfolioForm {
            phone: "0812".to_string(),
            gpa: "5".to_string(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();

        assert_eq!(
            errors.field_names(),
            vec![
                fields::FIRST_NAME,
                fields::LAST_NAME,
                fields::ADDRESS,
                fields::PHONE,
                fields::SCHOOL,
                fields::GPA,
                fields::MAJOR,
                fields::UNIVERSITY,
            ]
        );
        assert_eq!(errors.get(fields::PHONE).unwrap().key(), "too-short");
        assert_eq!(errors.get(fields::GPA).unwrap().key(), "out-of-range");
        assert_eq!(errors.get(fields::FIRST_NAME).unwrap().key(), "required");
    }

    #[test]
    fn test_text_kept_as_entered() {
        let mut form = valid_form();
        form.first_name = "   ".to_string();
        form.phone = " 12345678".to_string();
        form.skills = "  Robotics ".to_string();

        let draft = form.validate().unwrap();
        assert_eq!(draft.first_name, "   ");
        assert_eq!(draft.phone, " 12345678");
        assert_eq!(draft.skills, "  Robotics ");
    }

    #[test]
    fn test_phone_length_counts_characters() {
        let mut form = valid_form();
        form.phone = "12345678".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(fields::PHONE),
            Some(&ValidationIssue::TooShort { min: MIN_PHONE_LEN })
        );

        form.phone = String::new();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(fields::PHONE), Some(&ValidationIssue::Required));
    }

    #[test]
    fn test_gpa_rejects_underscores_and_other_shapes() {
        for text in ["1_0", "3_5", "3.", ".5", "1e0", "+3", "3.5.1"] {
            let mut form = valid_form();
            form.gpa = text.to_string();
            let errors = form.validate().unwrap_err();
            assert_eq!(
                errors.get(fields::GPA),
                Some(&ValidationIssue::InvalidFormat),
                "gpa {:?}",
                text
            );
        }
    }

    #[test]
    fn test_gpa_too_many_digits_is_out_of_range() {
        for text in ["9".repeat(32), format!("-{}", "9".repeat(40))] {
            let mut form = valid_form();
            form.gpa = text;
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get(fields::GPA).unwrap().key(), "out-of-range");
        }
    }

    #[test]
    fn test_select_photos_replaces_and_drops_blanks() {
        let mut form = valid_form();
        form.select_photos(["blob:old"]);
        form.select_photos(["blob:a", " ", "blob:b"]);
        assert_eq!(form.validate().unwrap().photos, vec!["blob:a", "blob:b"]);
    }

    #[test]
    fn test_login_valid() {
        let identity = LoginForm::new("teacher", "teacher1@school.ac.th", "abcd")
            .validate()
            .unwrap();
        assert_eq!(identity.display_name, "teacher1");
        assert_eq!(identity.role, Role::Teacher);
    }

    #[test]
    fn test_login_short_password_and_bad_email() {
        let errors = LoginForm::new("student", "not-an-email", "abc")
            .validate()
            .unwrap_err();
        assert_eq!(errors.get(fields::EMAIL), Some(&ValidationIssue::InvalidFormat));
        assert_eq!(
            errors.get(fields::PASSWORD),
            Some(&ValidationIssue::TooShort { min: MIN_PASSWORD_LEN })
        );
        assert!(!errors.contains(fields::ROLE));
    }

    #[test]
    fn test_login_unknown_role() {
        let errors = LoginForm::new("principal", "a@b.co", "abcd").validate().unwrap_err();
        assert_eq!(errors.field_names(), vec![fields::ROLE]);
    }
}
