//! TikTok URL detection in text

use regex::Regex;
use std::sync::LazyLock;

/// Regex for TikTok video links.
///
/// Matches either the canonical `@user/video/<id>` form (video IDs are 17+
/// digits) or the 8-10 character short codes used by `vt.`/`vm.` share
/// links. Matched substrings are used verbatim downstream; no tracking
/// parameters or trailing slashes are stripped.
static TIKTOK_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https?://(?:(?:vt|vm|www)\.)?tiktok\.com/(?:@[a-zA-Z0-9\-_.]+/video/\d{17,}|[a-zA-Z0-9\-_]{8,10})",
    )
    .expect("valid regex")
});

/// Iterate over all TikTok links in a string, in order of appearance.
pub fn extract_links(text: &str) -> impl Iterator<Item = &str> {
    TIKTOK_LINK_REGEX.find_iter(text).map(|m| m.as_str())
}
