//! Resolved media types and the extraction-service seam
//!
//! A [`MediaResolver`] turns one detected link into either a usable set of
//! media URLs or nothing. Failures of the extraction service are absorbed
//! here: the orchestrator only ever sees [`Resolution`].

pub mod tikwm;

pub use tikwm::TikwmResolver;

use async_trait::async_trait;

/// Maximum video payload size accepted for re-upload (20 MB)
pub const MAX_VIDEO_BYTES: u64 = 20 * 1024 * 1024;

/// One quality/size variant of a playable video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCandidate {
    /// Direct media URL
    pub url: String,
    /// File size in bytes, when the extraction service reports one
    pub size_bytes: Option<u64>,
}

/// Media available for one link: video variants plus an optional gallery
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedMedia {
    /// Video variants in descending quality order
    pub candidates: Vec<VideoCandidate>,
    /// Post title, if any
    pub title: Option<String>,
    /// Image gallery URLs in original order
    pub images: Vec<String>,
}

impl ResolvedMedia {
    /// Pick the highest-quality video candidate within the size budget.
    ///
    /// Candidates with an unknown size pass the gate; the platform's own
    /// upload limit is the backstop for those.
    #[must_use]
    pub fn select_video(&self, max_bytes: u64) -> Option<&VideoCandidate> {
        self.candidates
            .iter()
            .find(|c| c.size_bytes.is_none_or(|size| size <= max_bytes))
    }
}

/// Outcome of resolving one link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The link resolved to playable media
    Usable(ResolvedMedia),
    /// Nothing usable behind the link (private/deleted video, malformed
    /// service response, transport failure)
    Unusable,
}

/// Extraction-service seam
#[async_trait]
pub trait MediaResolver: Send + Sync {
    /// Resolve one link to its media. Never fails hard: any service
    /// problem degrades to [`Resolution::Unusable`].
    async fn resolve(&self, link: &str) -> Resolution;

    /// Resolver name for logging
    fn name(&self) -> &'static str;
}
