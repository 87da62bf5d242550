use serde::Serialize;

use super::Compiled;
use super::compiler::{is_unspaced_char, is_unspaced_script};
use super::grammar::{ChapterGroup, parse_chapter_verse};
use crate::books::Book;
use crate::language::Language;
use crate::reference::ParsedReference;

/// One detected citation. `start`/`end` are byte offsets into the scanned
/// text (half-open).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedVerseReference {
    pub text: String,
    pub book: Option<Book>,
    /// Canonical name, or the raw matched spelling when it did not resolve.
    pub book_label: String,
    pub variant: String,
    pub language: Language,
    pub chapter_verse: String,
    pub chapters: Vec<ChapterGroup>,
    pub start: usize,
    pub end: usize,
}

impl ParsedVerseReference {
    /// Popup-facing shape built from the first chapter group.
    pub fn to_reference(&self) -> Option<ParsedReference> {
        let book = self.book?;
        let group = self.chapters.first()?;
        Some(ParsedReference::from_group(book, group))
    }

    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

pub(super) fn scan(compiled: &Compiled, text: &str) -> Vec<ParsedVerseReference> {
    let regex = compiled.pattern.regex();
    let mut found = Vec::new();
    let mut at = 0;

    while at <= text.len() {
        let Some(caps) = regex.captures_at(text, at) else {
            break;
        };
        let (Some(whole), Some(book), Some(cv)) =
            (caps.name("ref"), caps.name("book"), caps.name("cv"))
        else {
            break;
        };

        if !has_leading_boundary(text, whole.start(), book.as_str()) {
            at = next_char(text, whole.start());
            continue;
        }

        let variant = book.as_str().to_string();
        let (resolved, label, language) = match compiled.variations.resolve(&variant) {
            Some(variation) => (
                Some(variation.book),
                variation.book.name().to_string(),
                variation.language,
            ),
            None => {
                tracing::warn!(spelling = %variant, "Matched spelling has no canonical book");
                (None, variant.clone(), Language::En)
            }
        };

        found.push(ParsedVerseReference {
            text: whole.as_str().to_string(),
            book: resolved,
            book_label: label,
            variant,
            language,
            chapter_verse: cv.as_str().to_string(),
            chapters: parse_chapter_verse(cv.as_str()),
            start: whole.start(),
            end: whole.end(),
        });
        at = whole.end();
    }

    if !found.is_empty() {
        tracing::trace!(count = found.len(), "Scanned scripture references");
    }
    found
}

/// Space-separated scripts must not start a match mid-word ("Joshua" must
/// not yield "Hosea" from "...shua"); Han spellings carry no such rule.
/// A Han character before a Latin spelling is a boundary too.
fn has_leading_boundary(text: &str, start: usize, spelling: &str) -> bool {
    if is_unspaced_script(spelling) {
        return true;
    }
    match text[..start].chars().next_back() {
        Some(prev) => is_unspaced_char(prev) || !prev.is_alphanumeric(),
        None => true,
    }
}

fn next_char(text: &str, from: usize) -> usize {
    text[from..]
        .chars()
        .next()
        .map(|c| from + c.len_utf8())
        .unwrap_or(text.len() + 1)
}

#[cfg(test)]
mod tests {
    use crate::books::{Book, patterns_for};
    use crate::detect::ReferenceDetector;
    use crate::detect::grammar::ChapterGroup;
    use crate::language::Language;

    #[test]
    fn detects_english_reference_with_span() {
        let detector = ReferenceDetector::new(&[Language::En]);
        let text = "Read John 3:16 today";
        let refs = detector.scan(text);
        assert_eq!(refs.len(), 1);
        let found = &refs[0];
        assert_eq!(found.book, Some(Book::John));
        assert_eq!(found.book_label, "John");
        assert_eq!(found.language, Language::En);
        assert_eq!(found.chapters, vec![ChapterGroup::verse(3, 16)]);
        assert_eq!(&text[found.span()], "John 3:16");

        let reference = found.to_reference().unwrap();
        assert_eq!(reference.section_id(), "JN3");
        assert_eq!(reference.fragment_id().as_deref(), Some("JN3_16"));
    }

    #[test]
    fn attributes_spanish_spelling_to_spanish() {
        let detector = ReferenceDetector::new(&[Language::Es, Language::En]);
        let refs = detector.scan("Lea Juan 3:16");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].book, Some(Book::John));
        assert_eq!(refs[0].book_label, "John");
        assert_eq!(refs[0].language, Language::Es);
    }

    #[test]
    fn no_match_is_empty() {
        let detector = ReferenceDetector::new(&[Language::En]);
        assert!(detector.scan("Nothing to see here, 3:16 alone.").is_empty());
        assert!(detector.scan("").is_empty());
    }

    #[test]
    fn prefers_the_longest_spelling() {
        let detector = ReferenceDetector::new(&[Language::En]);
        let refs = detector.scan("See 1 Samuel 2:3 for context.");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].variant, "1 Samuel");
        assert_eq!(refs[0].text, "1 Samuel 2:3");
        assert_eq!(refs[0].book, Some(Book::FirstSamuel));
    }

    #[test]
    fn rejects_matches_inside_words() {
        let detector = ReferenceDetector::new(&[Language::En]);
        assert!(detector.scan("Subjob 3:16").is_empty());
        let refs = detector.scan("Joshua 1:9");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].book, Some(Book::Joshua));
    }

    #[test]
    fn finds_several_references_in_order() {
        let detector = ReferenceDetector::new(&[Language::En]);
        let text = "Compare Gen. 1:1, John 1:1-3 and Rev 22:21.";
        let refs = detector.scan(text);
        let books: Vec<_> = refs.iter().map(|r| r.book).collect();
        assert_eq!(
            books,
            vec![Some(Book::Genesis), Some(Book::John), Some(Book::Revelation)]
        );
        assert_eq!(refs[0].text, "Gen. 1:1");
        assert_eq!(refs[1].chapters, vec![ChapterGroup::range(1, 1, 3)]);
        assert!(refs.windows(2).all(|w| w[0].end <= w[1].start));
    }

    #[test]
    fn comma_list_is_matched_but_only_first_run_is_grouped() {
        let detector = ReferenceDetector::new(&[Language::En]);
        let refs = detector.scan("Read John 3:16-18,20 now");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].chapter_verse, "3:16-18,20");
        assert_eq!(refs[0].chapters, vec![ChapterGroup::range(3, 16, 18)]);
    }

    #[test]
    fn cross_chapter_range_is_one_match() {
        let detector = ReferenceDetector::new(&[Language::En]);
        let refs = detector.scan("John 3:16-4:2");
        assert_eq!(refs.len(), 1);
        assert_eq!(
            refs[0].chapters,
            vec![ChapterGroup::open(3, 16), ChapterGroup::range(4, 1, 2)]
        );
    }

    #[test]
    fn han_references_need_no_spacing() {
        let detector = ReferenceDetector::new(&[Language::Zh]);
        let text = "请读约翰福音3:16。";
        let refs = detector.scan(text);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].book, Some(Book::John));
        assert_eq!(refs[0].language, Language::Zh);
        assert_eq!(refs[0].variant, "约翰福音");
    }

    #[test]
    fn latin_spelling_right_after_han_text() {
        let detector = ReferenceDetector::new(&[Language::En]);
        let text = "请读John 3:16";
        let refs = detector.scan(text);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].book, Some(Book::John));
        assert_eq!(refs[0].language, Language::En);
        assert_eq!(&text[refs[0].start..refs[0].end], "John 3:16");

        let mixed = ReferenceDetector::new(&[Language::Zh, Language::En]);
        let refs = mixed.scan("先读约翰福音3:16再读John 1:1");
        let books: Vec<_> = refs.iter().map(|r| (r.book, r.language)).collect();
        assert_eq!(
            books,
            vec![(Some(Book::John), Language::Zh), (Some(Book::John), Language::En)]
        );
    }

    #[test]
    fn every_registered_spelling_is_detected() {
        for language in Language::ALL {
            let detector = ReferenceDetector::new(&[language]);
            for (book, spelling) in patterns_for(language).iter() {
                let text = format!("{spelling} 3:16");
                let refs = detector.scan(&text);
                assert_eq!(refs.len(), 1, "{language}: no match for '{text}'");
                assert_eq!(refs[0].book, Some(book), "{language}: '{text}'");
                assert_eq!(refs[0].language, language, "{language}: '{text}'");
                assert_eq!(refs[0].start, 0, "{language}: '{text}'");
            }
        }
    }
}
