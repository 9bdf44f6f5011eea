//! TikTok link detection in message text

pub mod detector;

pub use detector::extract_links;
