//! Session service - who is using the app right now
//!
//! Holds at most one identity. Logging in is a role selection, not
//! authentication: the password is only checked for length.

use crate::domain::{LoginForm, SessionIdentity, ValidationErrors};

#[derive(Debug, Default)]
pub struct SessionService {
    current: Option<SessionIdentity>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the login form and replace the current identity
    pub fn login(&mut self, form: &LoginForm) -> Result<SessionIdentity, ValidationErrors> {
        let identity = form.validate()?;
        self.sign_in(identity.clone());
        Ok(identity)
    }

    /// Replace the current identity unconditionally
    pub fn sign_in(&mut self, identity: SessionIdentity) {
        self.current = Some(identity);
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&SessionIdentity> {
        self.current.as_ref()
    }
}
