//! Per-message delivery orchestration
//!
//! For each link found in an inbound message the orchestrator resolves
//! media, gates it against the size budget, sends the video with a caption,
//! ships any image gallery in ordered batches, and finally deletes the
//! original message when configured to. Links are processed strictly
//! sequentially; a platform 401 on a send means the bot token itself is
//! dead, so the run aborts instead of burning identical failures on the
//! remaining links.

pub mod caption;

pub use caption::build_caption;

use std::sync::Arc;

use crate::channels::Messenger;
use crate::links::extract_links;
use crate::media::{MAX_VIDEO_BYTES, MediaResolver, Resolution};
use crate::Result;

/// Maximum images per `sendMediaGroup` call
pub const MAX_IMAGES_PER_BATCH: usize = 10;

/// Notice shown when every video variant exceeds the size budget
const TOO_LARGE_NOTICE: &str = "Video is over 20 MB and cannot be uploaded.";

/// Delivery behavior toggles
#[derive(Debug, Clone)]
pub struct DeliveryPolicy {
    /// Delete the original message after a successful upload
    pub delete_original: bool,
}

/// One inbound chat message, reduced to the fields delivery needs
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub chat_id: i64,
    pub message_id: i64,
    pub sender_id: i64,
    pub sender_name: String,
    pub text: String,
}

/// Control signal returned by per-link processing to the message driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkFlow {
    /// Move on to the next link
    Continue,
    /// Stop processing the remaining links of this message
    Abort,
}

/// Drives the resolve → send → cleanup pipeline for one webhook delivery
pub struct DeliveryOrchestrator {
    messenger: Arc<dyn Messenger>,
    resolver: Arc<dyn MediaResolver>,
    policy: DeliveryPolicy,
}

impl DeliveryOrchestrator {
    /// Create an orchestrator over the platform and resolver seams
    #[must_use]
    pub fn new(
        messenger: Arc<dyn Messenger>,
        resolver: Arc<dyn MediaResolver>,
        policy: DeliveryPolicy,
    ) -> Self {
        Self {
            messenger,
            resolver,
            policy,
        }
    }

    /// Process every link in the message, sequentially.
    ///
    /// Per-link failures are contained: a transport error on one link is
    /// logged and the loop moves on. Only a platform 401 stops the run.
    pub async fn process_message(&self, message: &InboundMessage) {
        let links: Vec<&str> = extract_links(&message.text).collect();
        if links.is_empty() {
            return;
        }

        tracing::info!(
            chat_id = message.chat_id,
            count = links.len(),
            "found video links"
        );

        for link in links {
            match self.process_link(message, link).await {
                Ok(LinkFlow::Continue) => {}
                Ok(LinkFlow::Abort) => {
                    tracing::error!(
                        chat_id = message.chat_id,
                        "bot token rejected, aborting remaining links"
                    );
                    return;
                }
                Err(e) => {
                    tracing::warn!(error = %e, link, "link delivery failed");
                }
            }
        }
    }

    /// Run one link through the delivery state machine.
    async fn process_link(&self, message: &InboundMessage, link: &str) -> Result<LinkFlow> {
        tracing::debug!(link, resolver = self.resolver.name(), "resolving link");

        let media = match self.resolver.resolve(link).await {
            Resolution::Usable(media) => media,
            Resolution::Unusable => {
                tracing::debug!(link, "nothing usable behind link, skipping");
                return Ok(LinkFlow::Continue);
            }
        };

        let Some(video) = media.select_video(MAX_VIDEO_BYTES) else {
            tracing::info!(link, "all video variants over size budget");
            let notice = self
                .messenger
                .send_text(message.chat_id, TOO_LARGE_NOTICE, Some(message.message_id))
                .await?;
            if !notice.ok {
                tracing::warn!(link, "failed to deliver size notice");
            }
            return Ok(LinkFlow::Continue);
        };

        let caption = build_caption(
            &message.sender_name,
            message.sender_id,
            link,
            media.title.as_deref(),
        );

        tracing::debug!(link, "sending video");
        let sent = self
            .messenger
            .send_video(message.chat_id, &video.url, &caption)
            .await?;

        if sent.is_unauthorized() {
            return Ok(LinkFlow::Abort);
        }

        if !sent.ok {
            let description = sent.description.as_deref().unwrap_or("unknown error");
            tracing::error!(link, description, "video send rejected");
            self.messenger
                .send_text(
                    message.chat_id,
                    &format!("Error: {description}"),
                    Some(message.message_id),
                )
                .await?;
        }

        // Image galleries ship even when the video send was rejected; the
        // current link's media stays self-contained either way.
        if !media.images.is_empty() {
            tracing::debug!(link, count = media.images.len(), "sending image batches");
            for batch in media.images.chunks(MAX_IMAGES_PER_BATCH) {
                let outcome = self
                    .messenger
                    .send_image_batch(message.chat_id, batch, &caption)
                    .await?;
                if !outcome.ok {
                    tracing::warn!(
                        link,
                        description = outcome.description.as_deref().unwrap_or_default(),
                        "image batch rejected"
                    );
                }
            }
        }

        if sent.ok && self.policy.delete_original {
            let deleted = self
                .messenger
                .delete_message(message.chat_id, message.message_id)
                .await?;
            if !deleted.ok {
                tracing::warn!(
                    chat_id = message.chat_id,
                    message_id = message.message_id,
                    "failed to delete original message"
                );
            }
        }

        Ok(LinkFlow::Continue)
    }
}
