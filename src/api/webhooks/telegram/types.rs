//! Telegram webhook payload types (simplified to what delivery needs)

use serde::Deserialize;

/// Telegram Update object
#[derive(Debug, Deserialize)]
pub struct TelegramUpdate {
    pub message: Option<TelegramMessage>,
}

/// Telegram Message object
#[derive(Debug, Deserialize)]
pub struct TelegramMessage {
    pub message_id: i64,
    pub chat: TelegramChat,
    pub from: Option<TelegramUser>,
    pub text: Option<String>,
    /// Media messages carry their text in `caption` instead of `text`
    #[serde(default)]
    pub caption: Option<String>,
}

/// Telegram Chat object
#[derive(Debug, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
}

/// Telegram User object
#[derive(Debug, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    pub first_name: String,
}
