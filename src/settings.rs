//! Credentials and auth-key fixtures.
//!
//! Live runs read their account from the environment. A `.env` file in the
//! working directory is loaded first when present:
//!
//! | Variable | Required | Description |
//! |----------|----------|-------------|
//! | `PETFRIENDS_EMAIL` | Yes | Email of a registered account |
//! | `PETFRIENDS_PASSWORD` | Yes | Password of that account |
//! | `PETFRIENDS_BASE_URL` | No | Service URL, defaults to the public deployment |
//! | `PETFRIENDS_INCORRECT_AUTH_KEY` | No | Well-formed key the service never issued |

use std::env;

use thiserror::Error;

use crate::api::PETFRIENDS_API_URL;
use crate::types::AuthKey;

pub const EMAIL_VAR: &str = "PETFRIENDS_EMAIL";
pub const PASSWORD_VAR: &str = "PETFRIENDS_PASSWORD";
pub const BASE_URL_VAR: &str = "PETFRIENDS_BASE_URL";
pub const INCORRECT_AUTH_KEY_VAR: &str = "PETFRIENDS_INCORRECT_AUTH_KEY";

/// Used when `PETFRIENDS_INCORRECT_AUTH_KEY` is unset. Same shape as a real
/// key (56 hex chars) so the service rejects it on lookup, not on format.
pub const DEFAULT_INCORRECT_AUTH_KEY: &str =
    "ea738148a1f19838e1c5d1413877f3691a3731380e733e877b0ae7290";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
}

/// Fixture values shared by the test suite.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub valid_email: String,
    pub valid_password: String,
    pub empty_email: String,
    pub empty_password: String,
    pub empty_auth_key: AuthKey,
    pub incorrect_auth_key: AuthKey,
}

impl Settings {
    /// Builds fixtures around an explicit account.
    pub fn new(base_url: &str, email: &str, password: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            valid_email: email.to_string(),
            valid_password: password.to_string(),
            empty_email: String::new(),
            empty_password: String::new(),
            empty_auth_key: AuthKey::new(""),
            incorrect_auth_key: AuthKey::new(DEFAULT_INCORRECT_AUTH_KEY),
        }
    }

    /// Loads fixtures from the process environment, after `.env`.
    pub fn from_env() -> Result<Self, SettingsError> {
        // A missing .env is fine; the variables may be exported directly.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads fixtures through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let email = lookup(EMAIL_VAR).ok_or(SettingsError::Missing(EMAIL_VAR))?;
        let password = lookup(PASSWORD_VAR).ok_or(SettingsError::Missing(PASSWORD_VAR))?;
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| PETFRIENDS_API_URL.to_string());

        let mut settings = Self::new(&base_url, &email, &password);
        if let Some(key) = lookup(INCORRECT_AUTH_KEY_VAR) {
            settings.incorrect_auth_key = AuthKey::new(key);
        }
        Ok(settings)
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("valid_email", &self.valid_email)
            .field("valid_password", &"<redacted>")
            .finish_non_exhaustive()
    }
}
