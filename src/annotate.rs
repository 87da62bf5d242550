//! Wraps detected references in prose with link or popup-trigger markup.

use tracing::debug;

use crate::config::{AppConfig, DisplayMode};
use crate::detect::{ParsedVerseReference, ReferenceDetector};
use crate::editions::EditionResolver;
use crate::reference::ParsedReference;
use crate::text_utils::{escape_attr, escape_html};

/// Address of a reference in the reading view: `{base}/{edition}/{section}.html#{fragment}`.
pub fn reference_href(base: &str, edition: &str, reference: &ParsedReference) -> String {
    let mut href = format!(
        "{}/{edition}/{}.html",
        base.trim_end_matches('/'),
        reference.section_id()
    );
    if let Some(fragment) = reference.fragment_id() {
        href.push('#');
        href.push_str(&fragment);
    }
    href
}

/// Returns `text` as HTML with every resolvable reference wrapped.
///
/// `edition_override` is the host's per-reference `data-edition` value; it is
/// never read from the prose itself.
pub fn annotate_text(
    text: &str,
    detector: &ReferenceDetector,
    resolver: &EditionResolver,
    config: &AppConfig,
    edition_override: Option<&str>,
) -> String {
    let detections = detector.scan(text);
    let mut out = String::with_capacity(text.len() + detections.len() * 160);
    let mut cursor = 0;
    let mut wrapped = 0usize;

    for detection in &detections {
        let Some(reference) = detection.to_reference() else {
            continue;
        };
        out.push_str(&escape_html(&text[cursor..detection.start]));
        out.push_str(&wrap_reference(
            detection,
            &reference,
            resolver,
            config,
            edition_override,
        ));
        cursor = detection.end;
        wrapped += 1;
    }
    out.push_str(&escape_html(&text[cursor..]));

    debug!(
        detected = detections.len(),
        wrapped,
        mode = %config.display_mode,
        "Annotated text"
    );
    out
}

fn wrap_reference(
    detection: &ParsedVerseReference,
    reference: &ParsedReference,
    resolver: &EditionResolver,
    config: &AppConfig,
    edition_override: Option<&str>,
) -> String {
    let edition = resolver.link_edition(detection.language, edition_override);
    let mut attrs = vec![
        ("class", "scripture-ref".to_string()),
        ("data-reference", reference.to_string()),
        ("data-section-id", reference.section_id()),
    ];
    if let Some(fragment) = reference.fragment_id() {
        attrs.push(("data-verse-id", fragment));
    }
    attrs.push(("data-lang", detection.language.code().to_string()));
    if let Some(id) = edition_override.map(str::trim).filter(|id| !id.is_empty()) {
        attrs.push(("data-edition", id.to_string()));
    }
    if config.display_mode.shows_popup() {
        attrs.push(("aria-haspopup", "dialog".to_string()));
        attrs.push(("aria-expanded", "false".to_string()));
    }

    let href = edition
        .as_deref()
        .filter(|_| config.display_mode.navigates())
        .map(|edition| reference_href(&config.link_base_url, edition, reference));
    let tag = if href.is_some() { "a" } else { "span" };
    match href {
        Some(href) => attrs.insert(0, ("href", href)),
        None => {
            attrs.push(("tabindex", "0".to_string()));
            attrs.push(("role", "button".to_string()));
        }
    }

    let mut element = format!("<{tag}");
    for (name, value) in attrs {
        element.push_str(&format!(" {name}=\"{}\"", escape_attr(&value)));
    }
    element.push('>');
    element.push_str(&escape_html(&detection.text));
    element.push_str(&format!("</{tag}>"));
    element
}

/// Whether activating a reference should follow its link in this mode.
pub fn follows_link(mode: DisplayMode) -> bool {
    mode.navigates()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::Book;
    use crate::editions::EditionMapping;
    use crate::language::Language;
    use std::collections::BTreeMap;

    fn resolver() -> EditionResolver {
        let mut explicit = BTreeMap::new();
        explicit.insert(Language::En, "ENGWEB".to_string());
        explicit.insert(Language::Es, "spaRV".to_string());
        EditionResolver::new(EditionMapping::from_explicit(&explicit), Some("ENGWEB".to_string()))
    }

    fn config(mode: DisplayMode) -> AppConfig {
        AppConfig {
            display_mode: mode,
            link_base_url: "https://example.test/texts/".to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn builds_hrefs_with_fragments() {
        assert_eq!(
            reference_href("texts", "ENGWEB", &ParsedReference::verse(Book::John, 3, 16)),
            "texts/ENGWEB/JN3.html#JN3_16"
        );
        assert_eq!(
            reference_href("texts", "ENGWEB", &ParsedReference::chapter_only(Book::Psalms, 23)),
            "texts/ENGWEB/PS23.html"
        );
    }

    #[test]
    fn wraps_references_in_links() {
        let detector = ReferenceDetector::new(&[Language::En]);
        let html = annotate_text(
            "Read John 3:16 & <pray>",
            &detector,
            &resolver(),
            &config(DisplayMode::Both),
            None,
        );
        assert!(html.starts_with(
            "Read <a href=\"https://example.test/texts/ENGWEB/JN3.html#JN3_16\" class=\"scripture-ref\""
        ));
        assert!(html.contains("data-section-id=\"JN3\""));
        assert!(html.contains("data-verse-id=\"JN3_16\""));
        assert!(html.contains("data-lang=\"en\""));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains(">John 3:16</a>"));
        assert!(html.ends_with(" &amp; &lt;pray&gt;"));
    }

    #[test]
    fn popup_only_uses_focusable_spans() {
        let detector = ReferenceDetector::new(&[Language::En]);
        let html = annotate_text(
            "See Romans 8:28.",
            &detector,
            &resolver(),
            &config(DisplayMode::PopupOnly),
            None,
        );
        assert!(html.contains("<span class=\"scripture-ref\""));
        assert!(html.contains("tabindex=\"0\""));
        assert!(html.contains("aria-haspopup=\"dialog\""));
        assert!(!html.contains("href="));
    }

    #[test]
    fn link_edition_falls_back_to_default_for_links() {
        let detector = ReferenceDetector::new(&[Language::Fr]);
        let html = annotate_text(
            "Lire Jean 3:16",
            &detector,
            &resolver(),
            &config(DisplayMode::LinkOnly),
            None,
        );
        assert!(html.contains("href=\"https://example.test/texts/ENGWEB/JN3.html#JN3_16\""));
        assert!(html.contains("data-lang=\"fr\""));
        assert!(!html.contains("aria-haspopup"));
    }

    #[test]
    fn override_is_carried_through() {
        let detector = ReferenceDetector::new(&[Language::Es]);
        let html = annotate_text(
            "Lea Juan 3:16",
            &detector,
            &resolver(),
            &config(DisplayMode::Both),
            Some("spaNVI"),
        );
        assert!(html.contains("/spaNVI/JN3.html#JN3_16"));
        assert!(html.contains("data-edition=\"spaNVI\""));
        assert!(html.contains("data-lang=\"es\""));
    }

    #[test]
    fn text_without_references_is_only_escaped() {
        let detector = ReferenceDetector::new(&[Language::En]);
        let html = annotate_text("a < b", &detector, &resolver(), &config(DisplayMode::Both), None);
        assert_eq!(html, "a &lt; b");
        assert!(follows_link(DisplayMode::LinkOnly));
        assert!(!follows_link(DisplayMode::PopupOnly));
    }
}
