use std::collections::HashSet;

use regex::{Regex, RegexBuilder};
use unicode_normalization::UnicodeNormalization;

use crate::books::patterns_for;
use crate::language::Language;

const VERSE: &str = "[0-9]{1,3}";
const SEPARATOR: &str = "[:.;：]";
const DASH: &str = "[-–]";

/// The single scripture-reference expression for one ordered language set.
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Regex,
    languages: Vec<Language>,
    alternatives: usize,
}

impl CompiledPattern {
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn alternatives(&self) -> usize {
        self.alternatives
    }
}

/// Builds the alternation of every spelling registered for `languages`,
/// longest first, followed by the chapter/verse grammar.
pub fn compile(languages: &[Language]) -> Result<CompiledPattern, regex::Error> {
    let spellings = collect_spellings(languages);
    let alternation = spellings
        .iter()
        .map(|spelling| spelling_pattern(spelling))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = format!(
        r"(?P<ref>(?P<book>{alternation})\.?\s*(?P<cv>{grammar}))(?:$|[\s\p{{P}}\p{{S}}]|\p{{Han}})",
        grammar = chapter_verse_grammar(),
    );

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .unicode(true)
        .size_limit(64 * (1 << 20))
        .dfa_size_limit(16 * (1 << 20))
        .build()?;

    tracing::debug!(
        languages = ?languages,
        alternatives = spellings.len(),
        "Compiled scripture reference pattern"
    );

    Ok(CompiledPattern {
        regex,
        languages: languages.to_vec(),
        alternatives: spellings.len(),
    })
}

/// `chapter[:.;]V` followed by either a cross-chapter tail or a verse
/// range/list. The cross-chapter form is tried first.
pub(crate) fn chapter_verse_grammar() -> String {
    format!(
        "{V}{S}{V}(?:{D}{V}{S}{V}|(?:{D}{V})?(?:,{V}(?:{D}{V})?)*)",
        V = VERSE,
        S = SEPARATOR,
        D = DASH,
    )
}

fn collect_spellings(languages: &[Language]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut spellings: Vec<String> = Vec::new();
    for language in languages {
        for (_, spelling) in patterns_for(*language).iter() {
            for form in surface_forms(spelling) {
                let dedupe = form.to_lowercase();
                if seen.insert(dedupe) {
                    spellings.push(form);
                }
            }
        }
    }
    // Longest first so "1 Samuel" wins over "1 Sam".
    spellings.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    spellings
}

/// Registry spellings are NFC; decomposed input is matched too so offsets
/// into the caller's text stay valid without normalizing it first.
fn surface_forms(spelling: &str) -> Vec<String> {
    let composed = spelling.to_string();
    let decomposed: String = spelling.nfd().collect();
    if decomposed == composed {
        vec![composed]
    } else {
        vec![composed, decomposed]
    }
}

/// Escapes one spelling for literal matching. Internal spaces accept any
/// whitespace run; a bare leading number may be written without a space.
pub(crate) fn spelling_pattern(spelling: &str) -> String {
    let words: Vec<&str> = spelling.split_whitespace().collect();
    let mut pattern = String::new();
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            let numeric_prefix = idx == 1 && words[0].chars().all(|c| c.is_ascii_digit());
            pattern.push_str(if numeric_prefix { r"\s*" } else { r"\s+" });
        }
        pattern.push_str(&regex::escape(word));
    }
    pattern
}

/// True when `spelling` is written in a script without word spacing.
pub(crate) fn is_unspaced_script(spelling: &str) -> bool {
    spelling.chars().next().is_some_and(is_han)
}

pub(crate) fn is_unspaced_char(c: char) -> bool {
    is_han(c)
}

fn is_han(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2A6DF}')
}
