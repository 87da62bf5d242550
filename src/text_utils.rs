//! Escaping and plain-text helpers shared by the annotator and the popup view.

use tracing::warn;

/// Escape text for use between tags.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render an HTML fragment as plain text on a single logical line per block.
pub fn html_to_plain(html: &str) -> String {
    // Wide enough that html2text never hard-wraps verse text.
    let plain = match html2text::from_read(html.as_bytes(), 10_000) {
        Ok(text) => text,
        Err(err) => {
            warn!("html2text failed: {err}");
            html.to_string()
        }
    };
    collapse_whitespace(&plain)
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
