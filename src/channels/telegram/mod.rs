//! Telegram channel adapter
//!
//! Receives messages via webhook; sends via the Bot API. The bot token is
//! supplied per delivery (it arrives as a webhook path segment), so the
//! adapter is constructed per request around a shared HTTP client.

mod api;
pub mod markdown;
pub mod types;

use reqwest::Client;

/// Telegram Bot API adapter for one bot token
#[derive(Clone)]
pub struct TelegramChannel {
    token: String,
    client: Client,
    base_url: String,
}

impl TelegramChannel {
    /// Create an adapter around a shared HTTP client
    #[must_use]
    pub fn new(client: Client, token: String) -> Self {
        Self {
            token,
            client,
            base_url: types::API_BASE.to_string(),
        }
    }

    /// Create an adapter against a custom API base URL (tests)
    #[must_use]
    pub fn with_base_url(client: Client, token: String, base_url: String) -> Self {
        Self {
            token,
            client,
            base_url,
        }
    }
}
