//! Webhook endpoints
//!
//! The Telegram webhook is registered with the bot token embedded in the
//! path, so every delivery carries the credential needed for the outbound
//! Bot API calls.

use std::sync::Arc;

use axum::{Router, routing::post};

use super::ApiState;

pub mod telegram;

/// Build webhooks router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/{token}/tt_bot", post(telegram::handle_update))
        .with_state(state)
}
