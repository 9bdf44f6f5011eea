//! Raw Telegram Bot API calls

use async_trait::async_trait;
use serde::Serialize;

use super::types::{
    DeleteMessageRequest, InputMediaPhoto, SendMediaGroupRequest, SendMessageRequest,
    SendVideoRequest, TelegramResponse,
};
use crate::channels::{Messenger, SendOutcome};
use crate::{Error, Result};

/// Parse mode used for captions; notices are sent as plain text
const PARSE_MODE: &str = "MarkdownV2";

impl super::TelegramChannel {
    /// POST one Bot API method and parse the response envelope.
    ///
    /// Platform rejections (ok=false) are data, not errors: the caller
    /// branches on the returned outcome. Only transport problems and
    /// unparsable bodies surface as `Err`.
    async fn call<B: Serialize + Sync>(&self, method: &str, body: &B) -> Result<SendOutcome> {
        let url = format!("{}{}/{method}", self.base_url, self.token);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Channel(format!("Telegram {method} error: {e}")))?;

        let text = response
            .text()
            .await
            .map_err(|e| Error::Channel(format!("Telegram {method} response read error: {e}")))?;

        let parsed: TelegramResponse = serde_json::from_str(&text)
            .map_err(|e| Error::Channel(format!("Telegram {method} response parse error: {e}")))?;

        if !parsed.ok {
            tracing::warn!(
                method,
                error_code = ?parsed.error_code,
                description = parsed.description.as_deref().unwrap_or_default(),
                "Telegram call rejected"
            );
        }

        Ok(SendOutcome {
            ok: parsed.ok,
            error_code: parsed.error_code,
            description: parsed.description,
        })
    }
}

#[async_trait]
impl Messenger for super::TelegramChannel {
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        reply_to: Option<i64>,
    ) -> Result<SendOutcome> {
        let request = SendMessageRequest {
            chat_id,
            text,
            reply_to_message_id: reply_to,
            allow_sending_without_reply: reply_to.map(|_| true),
        };
        self.call("sendMessage", &request).await
    }

    async fn send_video(
        &self,
        chat_id: i64,
        video_url: &str,
        caption: &str,
    ) -> Result<SendOutcome> {
        let request = SendVideoRequest {
            chat_id,
            video: video_url,
            caption,
            parse_mode: PARSE_MODE,
        };
        let outcome = self.call("sendVideo", &request).await?;
        if outcome.ok {
            tracing::debug!(chat_id, "Telegram video sent");
        }
        Ok(outcome)
    }

    async fn send_image_batch(
        &self,
        chat_id: i64,
        image_urls: &[String],
        caption: &str,
    ) -> Result<SendOutcome> {
        // Caption goes on the first item; Telegram shows it under the album
        let media = image_urls
            .iter()
            .enumerate()
            .map(|(i, url)| InputMediaPhoto {
                kind: "photo",
                media: url.clone(),
                caption: (i == 0).then(|| caption.to_string()),
                parse_mode: (i == 0).then_some(PARSE_MODE),
            })
            .collect();

        let request = SendMediaGroupRequest { chat_id, media };
        let outcome = self.call("sendMediaGroup", &request).await?;
        if outcome.ok {
            tracing::debug!(chat_id, count = image_urls.len(), "Telegram image batch sent");
        }
        Ok(outcome)
    }

    async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<SendOutcome> {
        let request = DeleteMessageRequest {
            chat_id,
            message_id,
        };
        self.call("deleteMessage", &request).await
    }
}
