use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::{AppConfig, SharePlatform};
use crate::content::VerseContent;
use crate::text_utils::{escape_attr, escape_html, html_to_plain};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupViewSettings {
    pub show_header: bool,
    pub show_attribution: bool,
    pub share_platforms: Vec<SharePlatform>,
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for PopupViewSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl PopupViewSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            show_header: config.show_header,
            show_attribution: config.show_attribution,
            share_platforms: config.share_platforms.clone(),
            max_width: config.popup_max_width,
            max_height: config.popup_max_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupBody<'a> {
    Loading,
    Content(&'a VerseContent),
    Error(&'a str),
}

/// What the popup shows for one reference.
#[derive(Debug, Clone, Copy)]
pub struct PopupView<'a> {
    pub label: &'a str,
    pub body: PopupBody<'a>,
}

impl<'a> PopupView<'a> {
    pub fn new(label: &'a str, body: PopupBody<'a>) -> Self {
        Self { label, body }
    }

    pub fn render_html(&self, settings: &PopupViewSettings) -> String {
        let mut html = format!(
            "<div class=\"scripture-popup\" role=\"dialog\" aria-label=\"{}\" style=\"max-width:{}px;max-height:{}px\">",
            escape_attr(self.label),
            settings.max_width,
            settings.max_height
        );
        if settings.show_header {
            html.push_str(&format!(
                "<div class=\"popup-header\">{}</div>",
                escape_html(self.label)
            ));
        }

        match self.body {
            PopupBody::Loading => {
                html.push_str("<div class=\"popup-loading\" aria-busy=\"true\">Loading…</div>");
            }
            PopupBody::Error(message) => {
                html.push_str(&format!(
                    "<div class=\"popup-error\" role=\"alert\">{}</div>",
                    escape_html(message)
                ));
            }
            PopupBody::Content(content) => {
                html.push_str(&format!("<div class=\"popup-content\">{}</div>", content.html));
                if !content.footnotes.is_empty() {
                    html.push_str("<ol class=\"popup-footnotes\">");
                    for note in &content.footnotes {
                        html.push_str(&format!(
                            "<li><span class=\"footnote-key\">{}</span> {}</li>",
                            escape_html(&note.key),
                            escape_html(&note.text)
                        ));
                    }
                    html.push_str("</ol>");
                }
                let links = share_links(settings, self.label, content);
                if !links.is_empty() {
                    html.push_str("<div class=\"popup-share\">");
                    for link in links {
                        html.push_str(&format!(
                            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                            escape_attr(&link.url),
                            link.platform.label()
                        ));
                    }
                    html.push_str("</div>");
                }
                if settings.show_attribution {
                    html.push_str(&format!(
                        "<div class=\"popup-attribution\">{}</div>",
                        escape_html(&content.edition)
                    ));
                }
            }
        }

        html.push_str("</div>");
        html
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub platform: SharePlatform,
    pub url: String,
}

/// Text shared for a reference: the label followed by the plain verse text.
pub fn share_text(label: &str, content: &VerseContent) -> String {
    let plain = html_to_plain(&content.html);
    if plain.is_empty() {
        label.to_string()
    } else {
        format!("{label} {plain}")
    }
}

pub fn share_links(settings: &PopupViewSettings, label: &str, content: &VerseContent) -> Vec<ShareLink> {
    if settings.share_platforms.is_empty() {
        return Vec::new();
    }
    let text = share_text(label, content);
    settings
        .share_platforms
        .iter()
        .map(|platform| ShareLink {
            platform: *platform,
            url: share_url(*platform, label, &text),
        })
        .collect()
}

pub fn share_url(platform: SharePlatform, subject: &str, text: &str) -> String {
    let encoded = encode(text);
    match platform {
        SharePlatform::X => format!("https://twitter.com/intent/tweet?text={encoded}"),
        SharePlatform::Facebook => {
            format!("https://www.facebook.com/sharer/sharer.php?quote={encoded}")
        }
        SharePlatform::WhatsApp => format!("https://wa.me/?text={encoded}"),
        SharePlatform::Telegram => format!("https://t.me/share/url?text={encoded}"),
        SharePlatform::Email => format!("mailto:?subject={}&body={encoded}", encode(subject)),
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ExtractedFootnote;

    fn content() -> VerseContent {
        VerseContent {
            edition: "ENGWEB".to_string(),
            html: "<sup class=\"verse-num\">16</sup>For God so loved the world".to_string(),
            footnotes: vec![ExtractedFootnote {
                key: "a".to_string(),
                text: "Or, <cosmos>".to_string(),
            }],
        }
    }

    #[test]
    fn renders_header_content_footnotes_and_attribution() {
        let verses = content();
        let html = PopupView::new("John 3:16", PopupBody::Content(&verses))
            .render_html(&PopupViewSettings::default());
        assert!(html.starts_with("<div class=\"scripture-popup\" role=\"dialog\""));
        assert!(html.contains("max-width:400px;max-height:300px"));
        assert!(html.contains("<div class=\"popup-header\">John 3:16</div>"));
        assert!(html.contains("For God so loved the world"));
        assert!(html.contains("<span class=\"footnote-key\">a</span> Or, &lt;cosmos&gt;"));
        assert!(html.contains("<div class=\"popup-attribution\">ENGWEB</div>"));
        assert!(!html.contains("popup-share"));
    }

    #[test]
    fn optional_parts_can_be_turned_off() {
        let verses = content();
        let settings = PopupViewSettings {
            show_header: false,
            show_attribution: false,
            ..PopupViewSettings::default()
        };
        let html = PopupView::new("John 3:16", PopupBody::Content(&verses)).render_html(&settings);
        assert!(!html.contains("popup-header"));
        assert!(!html.contains("popup-attribution"));
    }

    #[test]
    fn loading_and_error_bodies() {
        let settings = PopupViewSettings::default();
        let loading = PopupView::new("John 3:16", PopupBody::Loading).render_html(&settings);
        assert!(loading.contains("aria-busy=\"true\""));

        let error = PopupView::new("Yohanes 3:16", PopupBody::Error("No text available for Indonesian"))
            .render_html(&settings);
        assert!(error.contains("<div class=\"popup-error\" role=\"alert\">No text available for Indonesian</div>"));
        assert!(!error.contains("popup-content"));
    }

    #[test]
    fn share_links_are_percent_encoded() {
        let verses = content();
        let settings = PopupViewSettings {
            share_platforms: vec![SharePlatform::X, SharePlatform::Email],
            ..PopupViewSettings::default()
        };
        let links = share_links(&settings, "John 3:16", &verses);
        assert_eq!(links.len(), 2);
        assert!(links[0].url.starts_with("https://twitter.com/intent/tweet?text=John%203%3A16%20"));
        assert!(links[0].url.contains("loved"));
        assert!(!links[0].url.contains(' '));
        assert!(links[1].url.starts_with("mailto:?subject=John%203%3A16&body="));

        let html = PopupView::new("John 3:16", PopupBody::Content(&verses)).render_html(&settings);
        assert!(html.contains("<div class=\"popup-share\">"));
        assert!(html.contains(">X</a>"));
        assert!(html.contains(">Email</a>"));
    }
}
