//! Messaging-platform adapters
//!
//! The orchestrator talks to the platform through the [`Messenger`] trait
//! so that delivery logic can be exercised against mocks. Every call
//! returns a structured [`SendOutcome`] parsed from the platform's response
//! envelope rather than a bare HTTP status, because the orchestrator
//! branches on the platform error code (401 means the bot credential is
//! dead and the whole run must stop).

pub mod telegram;

pub use telegram::TelegramChannel;

use async_trait::async_trait;

use crate::Result;

/// Structured result of a single platform call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOutcome {
    /// Whether the platform accepted the call
    pub ok: bool,
    /// Platform error code on failure (e.g. 400, 401, 429)
    pub error_code: Option<i64>,
    /// Human-readable error description on failure
    pub description: Option<String>,
}

impl SendOutcome {
    /// Successful outcome
    #[must_use]
    pub fn success() -> Self {
        Self {
            ok: true,
            error_code: None,
            description: None,
        }
    }

    /// Whether the platform rejected the bot credential itself
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        !self.ok && self.error_code == Some(401)
    }
}

/// Platform send/delete seam
///
/// Errors returned here are transport-level (network, unparsable body);
/// platform-level rejections come back as an unsuccessful [`SendOutcome`].
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a plain text message, optionally as a reply
    async fn send_text(&self, chat_id: i64, text: &str, reply_to: Option<i64>)
    -> Result<SendOutcome>;

    /// Send a video by URL with a formatted caption
    async fn send_video(&self, chat_id: i64, video_url: &str, caption: &str)
    -> Result<SendOutcome>;

    /// Send up to ten images as one media group; the caption lands on the
    /// first image of the batch
    async fn send_image_batch(
        &self,
        chat_id: i64,
        image_urls: &[String],
        caption: &str,
    ) -> Result<SendOutcome>;

    /// Delete a message
    async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<SendOutcome>;
}
