//! Canonical book identities and the per-language spelling registry.

mod names;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use unicode_normalization::UnicodeNormalization;

use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Book {
    Genesis,
    Exodus,
    Leviticus,
    Numbers,
    Deuteronomy,
    Joshua,
    Judges,
    Ruth,
    FirstSamuel,
    SecondSamuel,
    FirstKings,
    SecondKings,
    FirstChronicles,
    SecondChronicles,
    Ezra,
    Nehemiah,
    Esther,
    Job,
    Psalms,
    Proverbs,
    Ecclesiastes,
    SongOfSongs,
    Isaiah,
    Jeremiah,
    Lamentations,
    Ezekiel,
    Daniel,
    Hosea,
    Joel,
    Amos,
    Obadiah,
    Jonah,
    Micah,
    Nahum,
    Habakkuk,
    Zephaniah,
    Haggai,
    Zechariah,
    Malachi,
    Matthew,
    Mark,
    Luke,
    John,
    Acts,
    Romans,
    FirstCorinthians,
    SecondCorinthians,
    Galatians,
    Ephesians,
    Philippians,
    Colossians,
    FirstThessalonians,
    SecondThessalonians,
    FirstTimothy,
    SecondTimothy,
    Titus,
    Philemon,
    Hebrews,
    James,
    FirstPeter,
    SecondPeter,
    FirstJohn,
    SecondJohn,
    ThirdJohn,
    Jude,
    Revelation,
}

/// (section code, canonical name), indexed by `Book as usize`.
const BOOK_INFO: [(&str, &str); 66] = [
    ("GN", "Genesis"),
    ("EX", "Exodus"),
    ("LV", "Leviticus"),
    ("NU", "Numbers"),
    ("DT", "Deuteronomy"),
    ("JS", "Joshua"),
    ("JG", "Judges"),
    ("RT", "Ruth"),
    ("S1", "1 Samuel"),
    ("S2", "2 Samuel"),
    ("K1", "1 Kings"),
    ("K2", "2 Kings"),
    ("R1", "1 Chronicles"),
    ("R2", "2 Chronicles"),
    ("ER", "Ezra"),
    ("NE", "Nehemiah"),
    ("ES", "Esther"),
    ("JB", "Job"),
    ("PS", "Psalms"),
    ("PR", "Proverbs"),
    ("EC", "Ecclesiastes"),
    ("SS", "Song of Songs"),
    ("IS", "Isaiah"),
    ("JR", "Jeremiah"),
    ("LM", "Lamentations"),
    ("EK", "Ezekiel"),
    ("DN", "Daniel"),
    ("HS", "Hosea"),
    ("JL", "Joel"),
    ("AM", "Amos"),
    ("OB", "Obadiah"),
    ("JH", "Jonah"),
    ("MC", "Micah"),
    ("NM", "Nahum"),
    ("HK", "Habakkuk"),
    ("ZP", "Zephaniah"),
    ("HG", "Haggai"),
    ("ZC", "Zechariah"),
    ("ML", "Malachi"),
    ("MT", "Matthew"),
    ("MK", "Mark"),
    ("LK", "Luke"),
    ("JN", "John"),
    ("AC", "Acts"),
    ("RM", "Romans"),
    ("C1", "1 Corinthians"),
    ("C2", "2 Corinthians"),
    ("GL", "Galatians"),
    ("EP", "Ephesians"),
    ("PP", "Philippians"),
    ("CL", "Colossians"),
    ("H1", "1 Thessalonians"),
    ("H2", "2 Thessalonians"),
    ("T1", "1 Timothy"),
    ("T2", "2 Timothy"),
    ("TT", "Titus"),
    ("PM", "Philemon"),
    ("HB", "Hebrews"),
    ("JM", "James"),
    ("P1", "1 Peter"),
    ("P2", "2 Peter"),
    ("J1", "1 John"),
    ("J2", "2 John"),
    ("J3", "3 John"),
    ("JD", "Jude"),
    ("RV", "Revelation"),
];

impl Book {
    pub const ALL: [Book; 66] = [
        Book::Genesis,
        Book::Exodus,
        Book::Leviticus,
        Book::Numbers,
        Book::Deuteronomy,
        Book::Joshua,
        Book::Judges,
        Book::Ruth,
        Book::FirstSamuel,
        Book::SecondSamuel,
        Book::FirstKings,
        Book::SecondKings,
        Book::FirstChronicles,
        Book::SecondChronicles,
        Book::Ezra,
        Book::Nehemiah,
        Book::Esther,
        Book::Job,
        Book::Psalms,
        Book::Proverbs,
        Book::Ecclesiastes,
        Book::SongOfSongs,
        Book::Isaiah,
        Book::Jeremiah,
        Book::Lamentations,
        Book::Ezekiel,
        Book::Daniel,
        Book::Hosea,
        Book::Joel,
        Book::Amos,
        Book::Obadiah,
        Book::Jonah,
        Book::Micah,
        Book::Nahum,
        Book::Habakkuk,
        Book::Zephaniah,
        Book::Haggai,
        Book::Zechariah,
        Book::Malachi,
        Book::Matthew,
        Book::Mark,
        Book::Luke,
        Book::John,
        Book::Acts,
        Book::Romans,
        Book::FirstCorinthians,
        Book::SecondCorinthians,
        Book::Galatians,
        Book::Ephesians,
        Book::Philippians,
        Book::Colossians,
        Book::FirstThessalonians,
        Book::SecondThessalonians,
        Book::FirstTimothy,
        Book::SecondTimothy,
        Book::Titus,
        Book::Philemon,
        Book::Hebrews,
        Book::James,
        Book::FirstPeter,
        Book::SecondPeter,
        Book::FirstJohn,
        Book::SecondJohn,
        Book::ThirdJohn,
        Book::Jude,
        Book::Revelation,
    ];

    /// Two-character code used to build section ids ("JN" + "3").
    pub fn code(self) -> &'static str {
        BOOK_INFO[self as usize].0
    }

    /// Canonical (English) display name.
    pub fn name(self) -> &'static str {
        BOOK_INFO[self as usize].1
    }

    pub fn from_code(code: &str) -> Option<Book> {
        let code = code.trim();
        Book::ALL
            .iter()
            .copied()
            .find(|book| book.code().eq_ignore_ascii_case(code))
    }

    pub fn is_new_testament(self) -> bool {
        self >= Book::Matthew
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Book {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Accepted spellings of every book in one language, NFC-normalized and
/// deduplicated, in registry order.
#[derive(Debug)]
pub struct BookNamePatterns {
    language: Language,
    entries: Vec<(Book, Vec<String>)>,
}

impl BookNamePatterns {
    fn build(language: Language) -> Self {
        let entries = names::table(language)
            .iter()
            .map(|(book, spellings)| {
                let mut seen: Vec<String> = Vec::with_capacity(spellings.len());
                for raw in spellings.iter() {
                    let spelling: String = raw.trim().nfc().collect();
                    if !spelling.is_empty() && !seen.contains(&spelling) {
                        seen.push(spelling);
                    }
                }
                (*book, seen)
            })
            .collect();
        Self { language, entries }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn spellings(&self, book: Book) -> &[String] {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == book)
            .map(|(_, spellings)| spellings.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Book, &str)> + '_ {
        self.entries.iter().flat_map(|(book, spellings)| {
            spellings.iter().map(move |spelling| (*book, spelling.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, spellings)| spellings.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static REGISTRY: Lazy<Vec<BookNamePatterns>> = Lazy::new(|| {
    Language::ALL
        .iter()
        .map(|language| BookNamePatterns::build(*language))
        .collect()
});

/// Registry entry for one language; built once on first use.
pub fn patterns_for(language: Language) -> &'static BookNamePatterns {
    &REGISTRY[language as usize]
}

/// Lookup key for a spelling: NFC, lower-cased, trailing period dropped,
/// whitespace collapsed, and a leading number separated from the name
/// ("1Samuel" and "1  samuel." both become "1 samuel").
pub fn spelling_key(raw: &str) -> String {
    let normalized: String = raw.trim().nfc().collect::<String>().to_lowercase();
    let trimmed = normalized.trim_end_matches('.').trim_end();
    let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");

    let digits = collapsed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(idx, c)| idx + c.len_utf8());
    match digits {
        Some(split) if split < collapsed.len() => {
            let rest = &collapsed[split..];
            if rest.starts_with(|c: char| c.is_alphabetic()) {
                format!("{} {}", &collapsed[..split], rest)
            } else {
                collapsed
            }
        }
        _ => collapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn book_table_is_complete_and_codes_are_unique() {
        assert_eq!(Book::ALL.len(), 66);
        for (idx, book) in Book::ALL.iter().enumerate() {
            assert_eq!(*book as usize, idx);
        }
        let mut codes: Vec<&str> = Book::ALL.iter().map(|b| b.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 66);
    }

    #[test]
    fn codes_round_trip() {
        assert_eq!(Book::John.code(), "JN");
        assert_eq!(Book::from_code("jn"), Some(Book::John));
        assert_eq!(Book::from_code("S1"), Some(Book::FirstSamuel));
        assert_eq!(Book::from_code("ZZ"), None);
        assert!(Book::Matthew.is_new_testament());
        assert!(!Book::Malachi.is_new_testament());
    }

    #[test]
    fn every_language_covers_every_book() {
        for language in Language::ALL {
            let patterns = patterns_for(language);
            assert_eq!(patterns.language(), language);
            for book in Book::ALL {
                assert!(
                    !patterns.spellings(book).is_empty(),
                    "{language} has no spelling for {book}"
                );
            }
        }
    }

    #[test]
    fn spellings_never_name_two_books_within_a_language() {
        for language in Language::ALL {
            let mut owners: HashMap<String, Book> = HashMap::new();
            for (book, spelling) in patterns_for(language).iter() {
                let key = spelling_key(spelling);
                if let Some(previous) = owners.insert(key.clone(), book) {
                    assert_eq!(
                        previous, book,
                        "{language}: '{key}' maps to both {previous} and {book}"
                    );
                }
            }
        }
    }

    #[test]
    fn english_registry_includes_canonical_names() {
        let english = patterns_for(Language::En);
        for book in Book::ALL {
            assert!(
                english.spellings(book).iter().any(|s| s == book.name()),
                "missing canonical spelling for {book}"
            );
        }
    }

    #[test]
    fn spelling_keys_normalize_case_periods_and_digit_prefixes() {
        assert_eq!(spelling_key("1Samuel"), "1 samuel");
        assert_eq!(spelling_key(" 1   Samuel. "), "1 samuel");
        assert_eq!(spelling_key("Gen."), "gen");
        assert_eq!(spelling_key("1. Mose"), "1. mose");
        assert_eq!(spelling_key("ÉXODO"), "éxodo");
        assert_eq!(spelling_key("约翰福音"), "约翰福音");
    }

    #[test]
    fn book_serializes_as_canonical_name() {
        let json = serde_json::to_string(&Book::SongOfSongs).unwrap();
        assert_eq!(json, "\"Song of Songs\"");
    }
}
