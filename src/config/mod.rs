//! Configuration for the clipgram gateway
//!
//! Precedence: CLI/env overrides > config file > defaults. The bot token
//! is deliberately absent here — it arrives per webhook delivery as a path
//! segment and never lives in configuration.

pub mod file;

use std::path::Path;

use crate::{Error, Result};

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// Shared secret expected in `X-Telegram-Bot-Api-Secret-Token`
    pub webhook_secret: String,

    /// Delete the original message after a successful upload
    pub delete_original: bool,
}

/// Unresolved overrides collected from CLI flags and environment
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub webhook_secret: Option<String>,
    pub delete_original: Option<bool>,
}

impl Config {
    /// Resolve the runtime configuration from overrides plus an optional
    /// config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read/parsed or if no
    /// webhook secret is configured anywhere.
    pub fn resolve(overrides: ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path {
            Some(path) => file::ConfigFile::load(path)?,
            None => file::ConfigFile::default(),
        };

        let webhook_secret = overrides
            .webhook_secret
            .or(file.webhook.secret)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "webhook secret is required (CLIPGRAM_WEBHOOK_SECRET or [webhook] secret)"
                        .to_string(),
                )
            })?;

        Ok(Self {
            port: overrides.port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            webhook_secret,
            delete_original: overrides
                .delete_original
                .or(file.delivery.delete_original)
                .unwrap_or(true),
        })
    }
}
