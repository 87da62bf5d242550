use std::collections::HashMap;

use serde::Serialize;

use crate::books::{Book, patterns_for, spelling_key};
use crate::language::Language;

/// What a matched spelling resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variation {
    pub book: Book,
    pub language: Language,
}

/// Spelling key -> {book, language}. Languages are inserted in priority
/// order and the first language to claim a key keeps it.
#[derive(Debug, Default)]
pub struct VariationMap {
    entries: HashMap<String, Variation>,
}

impl VariationMap {
    pub fn build(languages: &[Language]) -> Self {
        let mut entries: HashMap<String, Variation> = HashMap::new();
        for language in languages {
            for (book, spelling) in patterns_for(*language).iter() {
                entries
                    .entry(spelling_key(spelling))
                    .or_insert(Variation {
                        book,
                        language: *language,
                    });
            }
        }
        tracing::debug!(
            languages = ?languages,
            entries = entries.len(),
            "Built variation lookup"
        );
        Self { entries }
    }

    pub fn resolve(&self, spelling: &str) -> Option<Variation> {
        self.entries.get(&spelling_key(spelling)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_language_wins_shared_spellings() {
        let map = VariationMap::build(&[Language::Es, Language::En]);
        let job = map.resolve("Job").unwrap();
        assert_eq!(job.book, Book::Job);
        assert_eq!(job.language, Language::Es);

        let map = VariationMap::build(&[Language::En, Language::Es]);
        assert_eq!(map.resolve("Job").unwrap().language, Language::En);
    }

    #[test]
    fn cross_language_collisions_follow_priority() {
        // "Jn" is John in Spanish but Jonah in Portuguese.
        let spanish_first = VariationMap::build(&[Language::Es, Language::Pt]);
        assert_eq!(spanish_first.resolve("Jn").unwrap().book, Book::John);
        let portuguese_first = VariationMap::build(&[Language::Pt, Language::Es]);
        assert_eq!(portuguese_first.resolve("Jn").unwrap().book, Book::Jonah);
    }

    #[test]
    fn resolves_case_period_and_spacing_variants() {
        let map = VariationMap::build(&[Language::En]);
        assert_eq!(map.resolve("GEN.").unwrap().book, Book::Genesis);
        assert_eq!(map.resolve("1Samuel").unwrap().book, Book::FirstSamuel);
        assert_eq!(map.resolve("song  of  songs").unwrap().book, Book::SongOfSongs);
        assert_eq!(map.resolve("Juan"), None);
    }
}
