use std::fmt;

use serde::Serialize;

use crate::books::Book;
use crate::detect::ChapterGroup;

/// A single-chapter reference as the popup and the fetcher see it.
///
/// Addressing is derived, never stored: the section id is the book code
/// plus chapter ("JN3") and the fragment id appends the verse ("JN3_16").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedReference {
    pub book: Book,
    pub chapter: u32,
    pub start_verse: Option<u32>,
    pub end_verse: Option<u32>,
}

impl ParsedReference {
    pub fn new(book: Book, chapter: u32, start_verse: Option<u32>, end_verse: Option<u32>) -> Self {
        Self {
            book,
            chapter,
            start_verse,
            end_verse,
        }
    }

    pub fn verse(book: Book, chapter: u32, verse: u32) -> Self {
        Self::new(book, chapter, Some(verse), Some(verse))
    }

    pub fn chapter_only(book: Book, chapter: u32) -> Self {
        Self::new(book, chapter, None, None)
    }

    pub fn from_group(book: Book, group: &ChapterGroup) -> Self {
        Self::new(book, group.chapter, group.start_verse, group.end_verse)
    }

    pub fn book_code(&self) -> &'static str {
        self.book.code()
    }

    pub fn section_id(&self) -> String {
        format!("{}{}", self.book.code(), self.chapter)
    }

    /// Fragment id of the first cited verse; `None` for a whole chapter.
    pub fn fragment_id(&self) -> Option<String> {
        self.start_verse.map(|verse| self.fragment_for(verse))
    }

    pub fn fragment_for(&self, verse: u32) -> String {
        format!("{}_{}", self.section_id(), verse)
    }

    pub fn is_whole_chapter(&self) -> bool {
        self.start_verse.is_none()
    }
}

impl fmt::Display for ParsedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book.name(), self.chapter)?;
        match (self.start_verse, self.end_verse) {
            (None, _) => Ok(()),
            (Some(start), Some(end)) if end == start => write!(f, ":{start}"),
            (Some(start), Some(end)) => write!(f, ":{start}-{end}"),
            (Some(start), None) => write!(f, ":{start}ff"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::ReferenceDetector;
    use crate::language::Language;

    #[test]
    fn derives_section_and_fragment_ids() {
        let reference = ParsedReference::verse(Book::John, 3, 16);
        assert_eq!(reference.book_code(), "JN");
        assert_eq!(reference.section_id(), "JN3");
        assert_eq!(reference.fragment_id().as_deref(), Some("JN3_16"));
        assert_eq!(reference.to_string(), "John 3:16");

        let chapter = ParsedReference::chapter_only(Book::Psalms, 23);
        assert_eq!(chapter.section_id(), "PS23");
        assert_eq!(chapter.fragment_id(), None);
        assert_eq!(chapter.to_string(), "Psalms 23");
    }

    #[test]
    fn display_covers_ranges_and_open_ends() {
        assert_eq!(
            ParsedReference::new(Book::FirstSamuel, 2, Some(1), Some(10)).to_string(),
            "1 Samuel 2:1-10"
        );
        assert_eq!(
            ParsedReference::new(Book::Romans, 8, Some(28), None).to_string(),
            "Romans 8:28ff"
        );
    }

    #[test]
    fn addressing_round_trips_through_text() {
        let detector = ReferenceDetector::new(&[Language::En]);
        let samples = [
            ParsedReference::verse(Book::John, 3, 16),
            ParsedReference::new(Book::SongOfSongs, 2, Some(4), Some(7)),
            ParsedReference::new(Book::ThirdJohn, 1, Some(2), None),
            ParsedReference::chapter_only(Book::Psalms, 119),
        ];
        for original in samples {
            let reparsed = detector.parse_reference(&original.to_string()).unwrap();
            assert_eq!(reparsed, original);
            assert_eq!(reparsed.section_id(), original.section_id());
            assert_eq!(reparsed.fragment_id(), original.fragment_id());
        }
    }
}
