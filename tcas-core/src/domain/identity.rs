//! Session identity domain model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which side of the portal the current user picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// The locally selected "who is using the app now"
///
/// Not a credential: nothing about it is verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    pub email: String,
    pub display_name: String,
    pub role: Role,
}

impl SessionIdentity {
    /// Build an identity, deriving the display name from the email
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        let email = email.into();
        let display_name = Self::display_name_for(&email);
        Self {
            email,
            display_name,
            role,
        }
    }

    /// Local part of an email address (everything before the first `@`)
    pub fn display_name_for(email: &str) -> String {
        email.split('@').next().unwrap_or_default().to_string()
    }

    pub fn is_teacher(&self) -> bool {
        self.role == Role::Teacher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_email() {
        let identity = SessionIdentity::new("teacher1@school.ac.th", Role::Teacher);
        assert_eq!(identity.display_name, "teacher1");
        assert!(identity.is_teacher());
    }

    #[test]
    fn test_display_name_without_at() {
        assert_eq!(SessionIdentity::display_name_for("plain"), "plain");
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("Teacher".parse::<Role>(), Ok(Role::Teacher));
        assert_eq!(" student ".parse::<Role>(), Ok(Role::Student));
        assert!("admin".parse::<Role>().is_err());
    }
}
