//! Login gate for the interactive session.
//!
//! There is no user database: any non-empty username/password pair opens the
//! session.

use crate::errors::{AppError, AppResult};
use crate::models::session::Credentials;

#[derive(Debug, Default)]
pub struct AuthGate {
    credentials: Credentials,
    logged_in: bool,
}

impl AuthGate {
    pub fn login(&mut self, username: &str, password: &str) -> AppResult<&str> {
        let creds = Credentials::new(username.trim(), password);
        if !creds.is_complete() {
            return Err(AppError::EmptyCredentials);
        }
        self.credentials = creds;
        self.logged_in = true;
        Ok(&self.credentials.username)
    }

    /// Sign out. Credentials stay in place, the way the login form keeps its fields.
    pub fn sign_out(&mut self) {
        self.logged_in = false;
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn require_login(&self) -> AppResult<()> {
        if self.logged_in {
            Ok(())
        } else {
            Err(AppError::NotLoggedIn)
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.logged_in.then_some(self.credentials.username.as_str())
    }

    /// Replace the stored username and/or password. Blank values keep the old one.
    pub fn edit_profile(&mut self, username: Option<&str>, password: Option<&str>) -> AppResult<()> {
        self.require_login()?;

        let mut next = self.credentials.clone();
        if let Some(u) = username.map(str::trim).filter(|u| !u.is_empty()) {
            next.username = u.to_string();
        }
        if let Some(p) = password.filter(|p| !p.is_empty()) {
            next.password = p.to_string();
        }
        if !next.is_complete() {
            return Err(AppError::EmptyCredentials);
        }
        self.credentials = next;
        Ok(())
    }
}
