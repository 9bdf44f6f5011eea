//! clipgram - Telegram gateway that replaces TikTok links with the videos behind them
//!
//! The gateway receives Telegram webhook deliveries, scans message text for
//! TikTok links, resolves each link to a direct media URL through the
//! tikwm.com extraction service, and re-uploads the video (plus any image
//! gallery) into the originating chat before cleaning up the original
//! message.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Telegram webhook                 │
//! │         POST /{bot_token}/tt_bot              │
//! └────────────────────┬─────────────────────────┘
//!                      │ ack 200, spawn
//! ┌────────────────────▼─────────────────────────┐
//! │           DeliveryOrchestrator                │
//! │   links  │  media resolver  │  caption        │
//! └────────────────────┬─────────────────────────┘
//!                      │
//! ┌────────────────────▼─────────────────────────┐
//! │   tikwm.com API   │   Telegram Bot API        │
//! └──────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod channels;
pub mod config;
pub mod delivery;
pub mod error;
pub mod links;
pub mod media;

pub use config::Config;
pub use error::{Error, Result};
