//! Session service
//!
//! Tracks the current user for one interactive session. Any non-empty
//! credentials are accepted; this is a sign-in flow, not authentication,
//! and nothing in the application checks access rights.

use crate::error::{AppError, Result};

pub struct SessionService {
    current_user: Option<String>,
}

impl SessionService {
    pub fn new() -> Self {
        Self { current_user: None }
    }

    /// Accept any non-empty username/password pair and start a session
    pub fn login(&mut self, username: &str, password: &str) -> Result<String> {
        let username = username.trim();
        if username.is_empty() || password.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter both username and password".to_string(),
            ));
        }

        tracing::info!("User logged in: {}", username);
        self.current_user = Some(username.to_string());
        Ok(username.to_string())
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::info!("User logged out: {}", user);
        }
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_trims_and_stores_the_username() {
        let mut session = SessionService::new();
        let user = session.login("  maker  ", "hunter2").unwrap();

        assert_eq!(user, "maker");
        assert_eq!(session.current_user(), Some("maker"));
        assert!(session.is_logged_in());
    }

    #[test]
    fn empty_credentials_are_rejected() {
        let mut session = SessionService::new();

        assert!(session.login("", "pw").is_err());
        assert!(session.login("user", "   ").is_err());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn logout_clears_the_session() {
        let mut session = SessionService::new();
        session.login("maker", "pw").unwrap();
        session.logout();

        assert_eq!(session.current_user(), None);
    }
}
