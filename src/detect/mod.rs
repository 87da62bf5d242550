//! Reference detection: pattern compilation, scanning, and spelling
//! resolution, bundled behind one owned detector.

pub mod compiler;
pub mod grammar;
pub mod scanner;
pub mod variations;

use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;

pub use grammar::{ChapterGroup, parse_chapter_verse};
pub use scanner::ParsedVerseReference;
pub use variations::{Variation, VariationMap};

use crate::config::AppConfig;
use crate::error::LookupError;
use crate::language::{Language, detection_order};
use crate::reference::ParsedReference;
use compiler::CompiledPattern;

/// Pattern and variation lookup for one language set. Built together and
/// replaced together.
#[derive(Debug)]
pub(crate) struct Compiled {
    pub(crate) pattern: CompiledPattern,
    pub(crate) variations: VariationMap,
}

#[derive(Debug)]
struct DetectorState {
    languages: Vec<Language>,
    compiled: OnceCell<Option<Compiled>>,
}

impl DetectorState {
    fn new(languages: Vec<Language>) -> Self {
        Self {
            languages,
            compiled: OnceCell::new(),
        }
    }

    fn compiled(&self) -> Option<&Compiled> {
        self.compiled
            .get_or_init(|| match compiler::compile(&self.languages) {
                Ok(pattern) => Some(Compiled {
                    pattern,
                    variations: VariationMap::build(&self.languages),
                }),
                Err(err) => {
                    tracing::error!(
                        languages = ?self.languages,
                        "Failed to compile reference pattern: {err}"
                    );
                    None
                }
            })
            .as_ref()
    }
}

/// Detects scripture citations for an ordered language selection. English
/// is always kept as the lowest-priority fallback.
#[derive(Debug)]
pub struct ReferenceDetector {
    state: DetectorState,
}

impl ReferenceDetector {
    pub fn new(languages: &[Language]) -> Self {
        Self {
            state: DetectorState::new(detection_order(languages)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        if !config.always_include_english {
            tracing::warn!("English is always kept as a detection fallback");
        }
        Self::new(&config.detection_languages())
    }

    pub fn languages(&self) -> &[Language] {
        &self.state.languages
    }

    /// Swaps in a new language set. The pattern and the variation lookup
    /// are rebuilt together on next use.
    pub fn set_languages(&mut self, languages: &[Language]) {
        let ordered = detection_order(languages);
        if ordered == self.state.languages {
            return;
        }
        tracing::info!(languages = ?ordered, "Switching detection languages");
        self.state = DetectorState::new(ordered);
    }

    pub fn scan(&self, text: &str) -> Vec<ParsedVerseReference> {
        match self.state.compiled() {
            Some(compiled) => scanner::scan(compiled, text),
            None => Vec::new(),
        }
    }

    pub fn resolve_variation(&self, spelling: &str) -> Option<Variation> {
        self.state.compiled()?.variations.resolve(spelling)
    }

    /// Parses a standalone reference string such as "John 3:16",
    /// "Psalm 23" or "Rom 8:28ff".
    pub fn parse_reference(&self, text: &str) -> Result<ParsedReference, LookupError> {
        let trimmed = text.trim();
        let invalid = || LookupError::InvalidReference(trimmed.to_string());
        let caps = STANDALONE.captures(trimmed).ok_or_else(invalid)?;

        let book = caps
            .name("book")
            .and_then(|m| self.resolve_variation(m.as_str()))
            .ok_or_else(invalid)?
            .book;
        let chapter_match = caps.name("c").ok_or_else(invalid)?;
        let chapter: u32 = chapter_match.as_str().parse().map_err(|_| invalid())?;
        if chapter == 0 {
            return Err(invalid());
        }

        let Some(verse) = caps.name("v") else {
            return Ok(ParsedReference::chapter_only(book, chapter));
        };
        if caps.name("ff").is_some() {
            let start: u32 = verse.as_str().parse().map_err(|_| invalid())?;
            return Ok(ParsedReference::new(book, chapter, Some(start), None));
        }

        let cv_end = caps.get(0).map(|m| m.end()).unwrap_or(trimmed.len());
        let groups = parse_chapter_verse(&trimmed[chapter_match.start()..cv_end]);
        let first = groups.first().ok_or_else(invalid)?;
        Ok(ParsedReference::from_group(book, first))
    }
}

static STANDALONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<book>.+?)\.?\s*(?P<c>[0-9]{1,3})(?:[:.;：](?P<v>[0-9]{1,3})(?:[-–][0-9]{1,3}(?:[:.;：][0-9]{1,3})?)?(?P<ff>\s*ff)?)?$",
    )
    .unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::Book;

    #[test]
    fn english_is_always_appended() {
        let detector = ReferenceDetector::new(&[Language::Fr]);
        assert_eq!(detector.languages(), &[Language::Fr, Language::En]);
    }

    #[test]
    fn set_languages_swaps_pattern_and_lookup_together() {
        let mut detector = ReferenceDetector::new(&[Language::En]);
        assert!(detector.scan("Lea Juan 3:16").is_empty());
        assert!(detector.resolve_variation("Juan").is_none());

        detector.set_languages(&[Language::Es]);
        assert_eq!(detector.languages(), &[Language::Es, Language::En]);
        let refs = detector.scan("Lea Juan 3:16");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].language, Language::Es);
        assert_eq!(
            detector.resolve_variation("Juan").map(|v| v.book),
            Some(Book::John)
        );
        // English stays available after the swap.
        assert_eq!(detector.scan("John 1:1").len(), 1);
    }

    #[test]
    fn parses_standalone_references() {
        let detector = ReferenceDetector::new(&[Language::En]);

        let verse = detector.parse_reference("John 3:16").unwrap();
        assert_eq!(verse, ParsedReference::new(Book::John, 3, Some(16), Some(16)));

        let chapter = detector.parse_reference("Psalm 23").unwrap();
        assert_eq!(chapter, ParsedReference::chapter_only(Book::Psalms, 23));

        let open = detector.parse_reference("Rom 8:28ff").unwrap();
        assert_eq!(open, ParsedReference::new(Book::Romans, 8, Some(28), None));

        let range = detector.parse_reference("1 John 1:8-10").unwrap();
        assert_eq!(
            range,
            ParsedReference::new(Book::FirstJohn, 1, Some(8), Some(10))
        );

        let cross = detector.parse_reference("John 3:16-4:2").unwrap();
        assert_eq!(cross, ParsedReference::new(Book::John, 3, Some(16), None));
    }

    #[test]
    fn rejects_unknown_books_and_shapes() {
        let detector = ReferenceDetector::new(&[Language::En]);
        assert!(matches!(
            detector.parse_reference("Hezekiah 3:16"),
            Err(LookupError::InvalidReference(_))
        ));
        assert!(detector.parse_reference("John").is_err());
        assert!(detector.parse_reference("John 0").is_err());
        assert!(detector.parse_reference("").is_err());
    }
}
