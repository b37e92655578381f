//! Environment configuration for the bot process.
//!
//! All settings come from the process environment (optionally seeded from a
//! `.env` file by `main`). The bot token is mandatory; everything else is
//! optional and degrades gracefully.

use std::env;

use anyhow::{Context, Result};
use tracing::warn;

/// Runtime configuration, built once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot API token (`BOT_TOKEN`).
    pub bot_token: String,
    /// Upstream API key (`PROXY_API_KEY`). Presence is logged at startup;
    /// the current bot does not call the upstream service.
    pub proxy_api_key: Option<String>,
    /// Chat ids notified once at startup (`ADMIN_IDS`, comma-separated).
    pub admin_ids: Vec<i64>,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Fails only when `BOT_TOKEN` is missing; a malformed `ADMIN_IDS`
    /// entry is skipped with a warning rather than aborting startup.
    pub fn from_env() -> Result<Self> {
        let bot_token =
            env::var("BOT_TOKEN").context("BOT_TOKEN is not set in the environment")?;

        let proxy_api_key = env::var("PROXY_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let admin_ids = parse_admin_ids(&env::var("ADMIN_IDS").unwrap_or_default());

        Ok(Self {
            bot_token,
            proxy_api_key,
            admin_ids,
        })
    }
}

/// Parse a comma-separated list of numeric chat ids.
///
/// Empty segments are ignored; segments that fail to parse are logged and
/// skipped so a typo in one id does not take the whole list down.
pub fn parse_admin_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| match part.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!(entry = %part, "Ignoring unparsable ADMIN_IDS entry");
                None
            }
        })
        .collect()
}
