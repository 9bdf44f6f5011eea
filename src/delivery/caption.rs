//! Caption construction for re-uploaded media

use crate::channels::telegram::markdown::escape_markdown_v2;

/// Build the MarkdownV2 caption for one re-uploaded link.
///
/// The caption credits the sender with a `tg://user` mention deep link,
/// keeps the original link reachable, and tucks the video title behind
/// spoiler markup so long titles stay collapsed. Purely informational; it
/// never influences delivery control flow.
#[must_use]
pub fn build_caption(sender_name: &str, sender_id: i64, link: &str, title: Option<&str>) -> String {
    let mut caption = format!(
        "Sent by: [{}](tg://user?id={sender_id})\n[Original link]({})",
        escape_markdown_v2(sender_name),
        escape_markdown_v2(link),
    );
    if let Some(title) = title {
        caption.push_str(&format!("\n\n||{}||", escape_markdown_v2(title)));
    }
    caption
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_without_title() {
        let caption = build_caption("Alice", 42, "https://vt.tiktok.com/ZSabcdefg", None);
        assert_eq!(
            caption,
            "Sent by: [Alice](tg://user?id=42)\n[Original link](https://vt\\.tiktok\\.com/ZSabcdefg)"
        );
    }

    #[test]
    fn test_caption_with_title_in_spoiler() {
        let caption = build_caption("Alice", 42, "https://vt.tiktok.com/ZSabcdefg", Some("Funny"));
        assert!(caption.ends_with("\n\n||Funny||"));
    }

    #[test]
    fn test_markup_in_sender_name_neutralized() {
        let caption = build_caption("Bob *the* [great]_", 7, "https://vt.tiktok.com/ZSabcdefg", None);
        assert!(caption.contains("Bob \\*the\\* \\[great\\]\\_"));
    }

    #[test]
    fn test_markup_in_title_neutralized() {
        let caption = build_caption(
            "Alice",
            42,
            "https://vt.tiktok.com/ZSabcdefg",
            Some("watch || this!"),
        );
        assert!(caption.ends_with("||watch \\|\\| this\\!||"));
    }
}
