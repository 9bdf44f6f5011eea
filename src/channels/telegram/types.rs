//! Telegram Bot API request/response types

use serde::{Deserialize, Serialize};

/// Bot API base URL (token is appended)
pub(crate) const API_BASE: &str = "https://api.telegram.org/bot";

/// Generic Bot API response envelope
#[derive(Debug, Deserialize)]
pub(crate) struct TelegramResponse {
    pub ok: bool,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `sendMessage` request
#[derive(Debug, Serialize)]
pub(crate) struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
}

/// `sendVideo` request (video passed by URL, uploaded server-side)
#[derive(Debug, Serialize)]
pub(crate) struct SendVideoRequest<'a> {
    pub chat_id: i64,
    pub video: &'a str,
    pub caption: &'a str,
    pub parse_mode: &'static str,
}

/// `sendMediaGroup` request
#[derive(Debug, Serialize)]
pub(crate) struct SendMediaGroupRequest {
    pub chat_id: i64,
    pub media: Vec<InputMediaPhoto>,
}

/// One photo within a media group
#[derive(Debug, Serialize)]
pub(crate) struct InputMediaPhoto {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<&'static str>,
}

/// `deleteMessage` request
#[derive(Debug, Serialize)]
pub(crate) struct DeleteMessageRequest {
    pub chat_id: i64,
    pub message_id: i64,
}
