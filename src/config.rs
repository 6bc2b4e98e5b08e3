//! Runtime configuration for the GameTrack server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// HS256 signing key for session tokens.
    pub secret_key: String,
    /// Session token lifetime (hours).
    pub token_ttl_hours: i64,
    /// Maximum rows returned by player search.
    pub search_limit: i64,
}

impl Settings {
    fn from_env() -> Self {
        let secret_key =
            env::var("SECRET_KEY").unwrap_or_else(|_| "change-me-in-production".into());

        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(24);

        let search_limit = env::var("SEARCH_LIMIT")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(20);

        Settings {
            secret_key,
            token_ttl_hours,
            search_limit,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
