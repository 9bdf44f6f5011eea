//! tikwm.com extraction-service client
//!
//! One POST per link, form-encoded, requesting HD quality and the full
//! image count. The response body is read as text first so that non-JSON
//! bodies (the service occasionally returns HTML error pages) can be
//! logged verbatim and degraded to an unusable result instead of failing
//! the delivery.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{MediaResolver, Resolution, ResolvedMedia, VideoCandidate};

/// Extraction-service endpoint
const TIKWM_API_URL: &str = "https://tikwm.com/api/";

/// Form body sent per link
#[derive(Debug, Serialize)]
struct ExtractionRequest<'a> {
    url: &'a str,
    web: u8,
    hd: u8,
    count: u8,
}

/// Top-level extraction-service response envelope
#[derive(Debug, Deserialize)]
struct ExtractionResponse {
    data: Option<ExtractionData>,
}

/// Media fields of a successful extraction
#[derive(Debug, Default, Deserialize)]
struct ExtractionData {
    hdplay: Option<String>,
    hd_size: Option<u64>,
    play: Option<String>,
    size: Option<u64>,
    wmplay: Option<String>,
    wm_size: Option<u64>,
    title: Option<String>,
    images: Option<Vec<String>>,
}

/// Parse-level outcome for one extraction-service response body
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Extraction {
    /// Valid JSON with a playable HD URL
    Usable(ResolvedMedia),
    /// Valid JSON but nothing playable (private/deleted video)
    Unusable,
    /// Body is not valid JSON; carries the raw text for diagnosis
    Malformed(String),
}

/// Classify one raw response body.
///
/// A response is usable only when it carries an HD playable URL; the SD and
/// watermarked variants alone do not qualify but are kept as lower size
/// tiers once HD is present.
pub(crate) fn parse_extraction(body: &str) -> Extraction {
    // The envelope can be a JSON `null` on some error paths, hence Option
    let Ok(response) = serde_json::from_str::<Option<ExtractionResponse>>(body) else {
        return Extraction::Malformed(body.to_string());
    };

    let Some(data) = response.and_then(|r| r.data) else {
        return Extraction::Unusable;
    };

    let Some(hdplay) = data.hdplay else {
        return Extraction::Unusable;
    };

    let mut candidates = vec![VideoCandidate {
        url: hdplay,
        size_bytes: data.hd_size,
    }];
    if let Some(play) = data.play {
        candidates.push(VideoCandidate {
            url: play,
            size_bytes: data.size,
        });
    }
    if let Some(wmplay) = data.wmplay {
        candidates.push(VideoCandidate {
            url: wmplay,
            size_bytes: data.wm_size,
        });
    }

    Extraction::Usable(ResolvedMedia {
        candidates,
        title: data.title.filter(|t| !t.is_empty()),
        images: data.images.unwrap_or_default(),
    })
}

/// tikwm.com resolver
#[derive(Clone)]
pub struct TikwmResolver {
    client: Client,
    api_url: String,
}

impl TikwmResolver {
    /// Create a resolver that talks to the production endpoint
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self {
            client,
            api_url: TIKWM_API_URL.to_string(),
        }
    }

    /// Create a resolver against a custom endpoint (tests)
    #[must_use]
    pub fn with_api_url(client: Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl MediaResolver for TikwmResolver {
    async fn resolve(&self, link: &str) -> Resolution {
        let request = ExtractionRequest {
            url: link,
            web: 1,
            hd: 1,
            count: 0,
        };

        let response = match self.client.post(&self.api_url).form(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, link, "extraction service unreachable");
                return Resolution::Unusable;
            }
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, link, "extraction response read failed");
                return Resolution::Unusable;
            }
        };

        match parse_extraction(&body) {
            Extraction::Usable(media) => Resolution::Usable(media),
            Extraction::Unusable => {
                tracing::debug!(link, "no playable media behind link");
                Resolution::Unusable
            }
            Extraction::Malformed(raw) => {
                tracing::warn!(link, raw = %raw, "extraction response is not JSON");
                Resolution::Unusable
            }
        }
    }

    fn name(&self) -> &'static str {
        "tikwm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hd_with_title() {
        let body = r#"{"data":{"hdplay":"https://cdn/x.mp4","title":"Funny"}}"#;
        let Extraction::Usable(media) = parse_extraction(body) else {
            panic!("expected usable media");
        };
        assert_eq!(media.candidates[0].url, "https://cdn/x.mp4");
        assert_eq!(media.candidates[0].size_bytes, None);
        assert_eq!(media.title.as_deref(), Some("Funny"));
        assert!(media.images.is_empty());
    }

    #[test]
    fn test_parse_size_tiers_in_quality_order() {
        let body = r#"{"data":{
            "hdplay":"https://cdn/hd.mp4","hd_size":25000000,
            "play":"https://cdn/sd.mp4","size":9000000,
            "wmplay":"https://cdn/wm.mp4","wm_size":8000000
        }}"#;
        let Extraction::Usable(media) = parse_extraction(body) else {
            panic!("expected usable media");
        };
        let urls: Vec<&str> = media.candidates.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(urls, vec!["https://cdn/hd.mp4", "https://cdn/sd.mp4", "https://cdn/wm.mp4"]);
        assert_eq!(media.candidates[1].size_bytes, Some(9_000_000));
    }

    #[test]
    fn test_parse_images() {
        let body = r#"{"data":{"hdplay":"https://cdn/x.mp4","images":["a","b","c"]}}"#;
        let Extraction::Usable(media) = parse_extraction(body) else {
            panic!("expected usable media");
        };
        assert_eq!(media.images, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_missing_hdplay_is_unusable() {
        let body = r#"{"data":{"play":"https://cdn/sd.mp4"}}"#;
        assert_eq!(parse_extraction(body), Extraction::Unusable);
    }

    #[test]
    fn test_parse_missing_data_is_unusable() {
        assert_eq!(parse_extraction(r#"{"code":-1,"msg":"video is private"}"#), Extraction::Unusable);
        assert_eq!(parse_extraction("{}"), Extraction::Unusable);
        assert_eq!(parse_extraction(r"null"), Extraction::Unusable);
    }

    #[test]
    fn test_parse_non_json_is_malformed() {
        let Extraction::Malformed(raw) = parse_extraction("<html>rate limited</html>") else {
            panic!("expected malformed");
        };
        assert_eq!(raw, "<html>rate limited</html>");
    }

    #[test]
    fn test_empty_title_dropped() {
        let body = r#"{"data":{"hdplay":"https://cdn/x.mp4","title":""}}"#;
        let Extraction::Usable(media) = parse_extraction(body) else {
            panic!("expected usable media");
        };
        assert!(media.title.is_none());
    }
}
