//! Telegram webhook handler
//!
//! Validates the delivery (content type, shared secret, payload shape),
//! then acknowledges with an empty 200 and runs the actual delivery work in
//! a detached task. Telegram requires fast webhook responses to avoid
//! retries, and the caller never sees per-link outcomes.

pub mod types;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};

use self::types::{TelegramMessage, TelegramUpdate};
use crate::api::ApiState;
use crate::channels::TelegramChannel;
use crate::delivery::{DeliveryOrchestrator, DeliveryPolicy, InboundMessage};
use crate::media::TikwmResolver;

/// Header Telegram sends the configured webhook secret in
const SECRET_TOKEN_HEADER: &str = "x-telegram-bot-api-secret-token";

/// Handle one incoming Telegram update.
///
/// The bot token arrives as a path segment (`/{token}/tt_bot`) and is used
/// for all outbound Bot API calls of this delivery. The response body is
/// always empty; only the status code varies.
pub async fn handle_update(
    State(state): State<Arc<ApiState>>,
    Path(token): Path<String>,
    headers: HeaderMap,
    body: String,
) -> StatusCode {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !content_type.contains("application/json") {
        return StatusCode::BAD_REQUEST;
    }

    let provided_secret = headers
        .get(SECRET_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if provided_secret != state.config.webhook_secret {
        tracing::warn!("webhook secret mismatch");
        return StatusCode::UNAUTHORIZED;
    }

    let Ok(update) = serde_json::from_str::<TelegramUpdate>(&body) else {
        tracing::warn!("unparsable webhook payload");
        return StatusCode::BAD_REQUEST;
    };

    let Some(message) = update.message else {
        return StatusCode::OK;
    };

    let Some(inbound) = inbound_from_payload(message) else {
        return StatusCode::OK;
    };

    let orchestrator = DeliveryOrchestrator::new(
        Arc::new(TelegramChannel::new(state.http.clone(), token)),
        Arc::new(TikwmResolver::new(state.http.clone())),
        DeliveryPolicy {
            delete_original: state.config.delete_original,
        },
    );

    // Detached: the webhook response does not wait for delivery work
    tokio::spawn(async move {
        orchestrator.process_message(&inbound).await;
    });

    StatusCode::OK
}

/// Reduce a webhook message payload to the delivery view of it.
///
/// Returns `None` when the message carries no text at all. Media messages
/// substitute their caption for text; channel posts have no `from` and get
/// a placeholder sender.
fn inbound_from_payload(message: TelegramMessage) -> Option<InboundMessage> {
    let text = message.text.or(message.caption)?;
    let (sender_id, sender_name) = message
        .from
        .map_or((0, "unknown".to_string()), |u| (u.id, u.first_name));
    Some(InboundMessage {
        chat_id: message.chat.id,
        message_id: message.message_id,
        sender_id,
        sender_name,
        text,
    })
}
