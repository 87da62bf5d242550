use once_cell::sync::Lazy;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::LookupError;
use crate::reference::ParsedReference;
use crate::text_utils::{collapse_whitespace, escape_attr, escape_html};

static VERSE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[data-id]").expect("valid verse selector"));
static NOTE_KEY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".key").expect("valid note key selector"));
static NOTE_TEXT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".text").expect("valid note text selector"));

const VOID_ELEMENTS: &[&str] = &["br", "hr", "wbr"];
// Dropped with their content.
const SKIPPED_ELEMENTS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "img", "link", "meta", "form", "input",
    "button", "textarea", "select",
];
const KEPT_ATTRIBUTES: &[&str] = &["class", "lang", "dir", "title"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    pub show_verse_numbers: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            show_verse_numbers: true,
        }
    }
}

/// A footnote pulled out of verse text, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedFootnote {
    pub key: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedVerses {
    pub html: String,
    pub footnotes: Vec<ExtractedFootnote>,
}

/// Pull the verses `reference` cites out of a chapter document.
///
/// Verse elements are matched by their `data-id` fragment id. A verse split
/// over several elements is concatenated in document order. A reference
/// without a verse takes every verse of the section.
pub fn extract_verses(
    document: &str,
    reference: &ParsedReference,
    options: &ExtractOptions,
) -> Result<ExtractedVerses, LookupError> {
    let html = Html::parse_document(document);
    let section = reference.section_id();
    let prefix = format!("{section}_");

    let mut pieces = Vec::new();
    let mut footnotes = Vec::new();
    for element in html.select(&VERSE_SELECTOR) {
        let Some(id) = element.value().attr("data-id") else {
            continue;
        };
        let Some(verse) = id
            .strip_prefix(&prefix)
            .and_then(|rest| rest.parse::<u32>().ok())
        else {
            continue;
        };
        if !wants_verse(reference, verse) || nested_in_verse(element, &prefix) {
            continue;
        }
        let mut out = String::new();
        render_children(element, options, &mut out, &mut footnotes);
        let trimmed = out.trim();
        if !trimmed.is_empty() {
            pieces.push(trimmed.to_string());
        }
        trace!(id, "Extracted verse element");
    }

    if pieces.is_empty() {
        let fragment = reference.fragment_id().unwrap_or_else(|| section.clone());
        debug!(%section, %fragment, "No verse elements matched");
        return Err(LookupError::VerseNotFound { section, fragment });
    }

    debug!(
        %section,
        elements = pieces.len(),
        footnotes = footnotes.len(),
        "Extracted verse span"
    );
    Ok(ExtractedVerses {
        html: pieces.join(" "),
        footnotes,
    })
}

fn wants_verse(reference: &ParsedReference, verse: u32) -> bool {
    match (reference.start_verse, reference.end_verse) {
        (None, _) => true,
        (Some(start), Some(end)) => (start..=end).contains(&verse),
        (Some(start), None) => verse >= start,
    }
}

/// True when an ancestor is itself a verse element of the same section.
/// Chapter or section containers with their own `data-id` do not count.
fn nested_in_verse(element: ElementRef<'_>, prefix: &str) -> bool {
    element.ancestors().filter_map(ElementRef::wrap).any(|ancestor| {
        ancestor
            .value()
            .attr("data-id")
            .and_then(|id| id.strip_prefix(prefix))
            .is_some_and(|rest| rest.parse::<u32>().is_ok())
    })
}

fn has_class(element: ElementRef<'_>, names: &[&str]) -> bool {
    element.value().classes().any(|class| names.contains(&class))
}

fn text_of(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

fn render_children(
    element: ElementRef<'_>,
    options: &ExtractOptions,
    out: &mut String,
    footnotes: &mut Vec<ExtractedFootnote>,
) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            render_element(child_element, options, out, footnotes);
        } else if let Node::Text(text) = child.value() {
            out.push_str(&escape_html(text));
        }
    }
}

fn render_element(
    element: ElementRef<'_>,
    options: &ExtractOptions,
    out: &mut String,
    footnotes: &mut Vec<ExtractedFootnote>,
) {
    if has_class(element, &["v-num", "verse-num"]) {
        if options.show_verse_numbers {
            let number = text_of(element);
            if !number.is_empty() {
                out.push_str(&format!(
                    "<sup class=\"verse-num\">{}</sup>",
                    escape_html(&number)
                ));
            }
        }
        return;
    }

    if has_class(element, &["note"]) {
        let footnote = footnote_from(element, footnotes.len());
        out.push_str(&format!(
            "<sup class=\"footnote-marker\">{}</sup>",
            escape_html(&footnote.key)
        ));
        footnotes.push(footnote);
        return;
    }

    let name = element.value().name();
    if SKIPPED_ELEMENTS.contains(&name) {
        trace!(name, "Dropped element from verse text");
        return;
    }
    out.push('<');
    out.push_str(name);
    for (attr, value) in element.value().attrs() {
        if KEPT_ATTRIBUTES.contains(&attr) {
            out.push_str(&format!(" {attr}=\"{}\"", escape_attr(value)));
        }
    }
    out.push('>');
    if VOID_ELEMENTS.contains(&name) {
        return;
    }
    render_children(element, options, out, footnotes);
    out.push_str(&format!("</{name}>"));
}

fn footnote_from(note: ElementRef<'_>, index: usize) -> ExtractedFootnote {
    let key = note
        .select(&NOTE_KEY_SELECTOR)
        .next()
        .map(text_of)
        .filter(|key| !key.is_empty())
        .unwrap_or_else(|| fallback_key(index));
    let text = note
        .select(&NOTE_TEXT_SELECTOR)
        .next()
        .map(text_of)
        .unwrap_or_else(|| text_of(note));
    ExtractedFootnote { key, text }
}

// a, b, ... z, then aa, ab, ...
fn fallback_key(index: usize) -> String {
    let mut index = index;
    let mut key = Vec::new();
    loop {
        key.push(b'a' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    key.reverse();
    String::from_utf8_lossy(&key).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::Book;

    const CHAPTER: &str = r#"<html><body><div class="chapter">
        <div class="p">
          <span class="v JN3_15" data-id="JN3_15"><span class="v-num">15</span>that whoever believes in him may have eternal life.</span>
          <span class="v JN3_16" data-id="JN3_16"><span class="v-num">16</span>For God so loved the world,<span class="note"><span class="key">*</span><span class="text">Or, "in this way".</span></span> that he gave</span>
        </div>
        <div class="p">
          <span class="v JN3_16" data-id="JN3_16">his one and only Son.</span>
          <span class="v JN3_17" data-id="JN3_17"><span class="v-num">17</span>For God didn&#39;t send his Son<span class="note"><span class="key">a</span><span class="text">Or, "judge".</span></span> to condemn the world.</span>
        </div>
    </div></body></html>"#;

    fn extract(reference: ParsedReference, show: bool) -> Result<ExtractedVerses, LookupError> {
        extract_verses(
            CHAPTER,
            &reference,
            &ExtractOptions {
                show_verse_numbers: show,
            },
        )
    }

    #[test]
    fn single_verse_concatenates_split_elements() {
        let extracted = extract(ParsedReference::verse(Book::John, 3, 16), true).unwrap();
        assert!(extracted.html.starts_with("<sup class=\"verse-num\">16</sup>For God so loved"));
        assert!(extracted.html.contains("his one and only Son."));
        assert!(!extracted.html.contains("eternal life"));
        assert_eq!(
            extracted.footnotes,
            vec![ExtractedFootnote {
                key: "*".to_string(),
                text: "Or, \"in this way\".".to_string(),
            }]
        );
        assert!(extracted.html.contains("<sup class=\"footnote-marker\">*</sup>"));
        assert!(!extracted.html.contains("in this way"));
    }

    #[test]
    fn verse_numbers_follow_the_toggle() {
        let extracted = extract(ParsedReference::verse(Book::John, 3, 16), false).unwrap();
        assert!(!extracted.html.contains("verse-num"));
        assert!(extracted.html.starts_with("For God so loved"));
    }

    #[test]
    fn ranges_and_whole_chapters_keep_document_order() {
        let range = extract(ParsedReference::new(Book::John, 3, Some(16), Some(17)), true).unwrap();
        let first = range.html.find("For God so loved").unwrap();
        let second = range.html.find("send his Son").unwrap();
        assert!(first < second);
        let keys: Vec<_> = range.footnotes.iter().map(|note| note.key.as_str()).collect();
        assert_eq!(keys, vec!["*", "a"]);

        let chapter = extract(ParsedReference::chapter_only(Book::John, 3), true).unwrap();
        assert!(chapter.html.starts_with("<sup class=\"verse-num\">15</sup>"));
        assert!(chapter.html.contains("condemn the world."));

        let open = extract(ParsedReference::new(Book::John, 3, Some(17), None), true).unwrap();
        assert!(open.html.contains("send his Son"));
        assert!(!open.html.contains("loved the world"));
    }

    #[test]
    fn missing_verse_is_reported() {
        let err = extract(ParsedReference::verse(Book::John, 3, 40), true).unwrap_err();
        assert_eq!(
            err,
            LookupError::VerseNotFound {
                section: "JN3".to_string(),
                fragment: "JN3_40".to_string(),
            }
        );
        assert!(extract(ParsedReference::verse(Book::Romans, 8, 28), true).is_err());
    }

    #[test]
    fn verses_inside_a_chapter_container_with_its_own_id() {
        let document = r#"<html><body><div class="section chapter JN3" data-id="JN3">
            <div class="p">
              <span class="v JN3_16" data-id="JN3_16"><span class="v-num">16</span>For God so loved the world.</span>
              <span class="v JN3_17" data-id="JN3_17"><span class="v-num">17</span>For God didn&#39;t send his Son.</span>
            </div>
        </div></body></html>"#;
        let options = ExtractOptions::default();

        let verse = extract_verses(document, &ParsedReference::verse(Book::John, 3, 16), &options).unwrap();
        assert_eq!(verse.html, "<sup class=\"verse-num\">16</sup>For God so loved the world.");

        let chapter = extract_verses(document, &ParsedReference::chapter_only(Book::John, 3), &options).unwrap();
        assert!(chapter.html.contains("loved the world"));
        assert!(chapter.html.contains("send his Son"));
    }

    #[test]
    fn verse_element_inside_another_verse_is_not_repeated() {
        let document = r#"<div data-id="JN3_16">For God <span data-id="JN3_16">so loved</span> the world.</div>"#;
        let extracted = extract_verses(
            document,
            &ParsedReference::verse(Book::John, 3, 16),
            &ExtractOptions::default(),
        )
        .unwrap();
        assert_eq!(extracted.html.matches("so loved").count(), 1);
    }

    #[test]
    fn scripts_and_unlisted_attributes_are_dropped() {
        let document = r#"<span data-id="JN3_16"><script>alert(1)</script><style>b{}</style><b onclick="steal()" class="w" lang="en" style="x">For</b> God<img src="x" onerror="steal()"> so loved</span>"#;
        let extracted = extract_verses(
            document,
            &ParsedReference::verse(Book::John, 3, 16),
            &ExtractOptions::default(),
        )
        .unwrap();
        assert!(extracted.html.starts_with("<b "));
        assert!(extracted.html.contains("class=\"w\""));
        assert!(extracted.html.contains("lang=\"en\""));
        assert!(extracted.html.ends_with(">For</b> God so loved"));
        assert!(!extracted.html.contains("style"));
        assert!(!extracted.html.contains("alert"));
        assert!(!extracted.html.contains("onclick"));
        assert!(!extracted.html.contains("onerror"));
    }

    #[test]
    fn fallback_footnote_keys_are_letters() {
        assert_eq!(fallback_key(0), "a");
        assert_eq!(fallback_key(25), "z");
        assert_eq!(fallback_key(26), "aa");
    }
}
