//! MarkdownV2 escaping for user-supplied text
//!
//! Telegram's `MarkdownV2` dialect treats a wide set of punctuation as
//! markup and rejects messages with unbalanced constructs. Anything that
//! originates outside the gateway (sender names, link text, video titles)
//! must pass through [`escape_markdown_v2`] before it is embedded in a
//! caption, both to keep the platform from rejecting the message and to
//! keep user text from injecting markup around it.

/// Characters significant to MarkdownV2, plus the escape character itself
const SPECIAL: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!', '\\',
];

/// Escape all MarkdownV2-significant characters in a string.
#[must_use]
pub fn escape_markdown_v2(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if SPECIAL.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
