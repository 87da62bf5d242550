//! Supported reference languages and the code/name normalization used when
//! reading edition catalogs.

use serde::{Deserialize, Serialize};

/// One of the ten languages the detector ships book names for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Pt,
    It,
    Nl,
    Ru,
    Id,
    Zh,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Pt,
        Language::It,
        Language::Nl,
        Language::Ru,
        Language::Id,
        Language::Zh,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Pt => "pt",
            Language::It => "it",
            Language::Nl => "nl",
            Language::Ru => "ru",
            Language::Id => "id",
            Language::Zh => "zh",
        }
    }

    /// English display name, used in user-facing messages.
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::De => "German",
            Language::Pt => "Portuguese",
            Language::It => "Italian",
            Language::Nl => "Dutch",
            Language::Ru => "Russian",
            Language::Id => "Indonesian",
            Language::Zh => "Chinese",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::Pt => "Português",
            Language::It => "Italiano",
            Language::Nl => "Nederlands",
            Language::Ru => "Русский",
            Language::Id => "Bahasa Indonesia",
            Language::Zh => "中文",
        }
    }

    /// Accepts a 2-letter or 3-letter (ISO 639-3 / 639-2/B) code, case-insensitively.
    pub fn from_code(raw: &str) -> Option<Language> {
        let code = raw.trim().to_ascii_lowercase();
        if let Some(lang) = Language::ALL.iter().copied().find(|l| l.code() == code) {
            return Some(lang);
        }
        Language::from_iso639_3(&code)
    }

    pub fn from_iso639_3(raw: &str) -> Option<Language> {
        let lang = match raw.trim().to_ascii_lowercase().as_str() {
            "eng" => Language::En,
            "spa" => Language::Es,
            "fra" | "fre" => Language::Fr,
            "deu" | "ger" => Language::De,
            "por" => Language::Pt,
            "ita" => Language::It,
            "nld" | "dut" => Language::Nl,
            "rus" => Language::Ru,
            "ind" => Language::Id,
            "zho" | "chi" | "cmn" | "yue" => Language::Zh,
            _ => return None,
        };
        Some(lang)
    }

    /// Heuristic match on a free-form language name ("Spanish", "Español",
    /// "Bahasa Indonesia", ...).
    pub fn from_language_name(raw: &str) -> Option<Language> {
        let name = raw.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }
        Language::ALL.iter().copied().find(|lang| {
            name_keywords(*lang)
                .iter()
                .any(|keyword| name.contains(keyword))
        })
    }
}

fn name_keywords(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::En => &["english"],
        Language::Es => &["spanish", "español", "espanol", "castellano"],
        Language::Fr => &["french", "français", "francais"],
        Language::De => &["german", "deutsch"],
        Language::Pt => &["portuguese", "português", "portugues"],
        Language::It => &["italian", "italiano"],
        Language::Nl => &["dutch", "nederlands", "flemish"],
        Language::Ru => &["russian", "русский"],
        Language::Id => &["indonesian", "indonesia"],
        Language::Zh => &["chinese", "mandarin", "cantonese", "中文", "汉语", "漢語"],
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Orders a language selection for detection: primary first, duplicates
/// dropped, English appended when absent so it is always a fallback.
pub fn detection_order(languages: &[Language]) -> Vec<Language> {
    let mut ordered = Vec::with_capacity(languages.len() + 1);
    for lang in languages {
        if !ordered.contains(lang) {
            ordered.push(*lang);
        }
    }
    if !ordered.contains(&Language::En) {
        ordered.push(Language::En);
    }
    ordered
}
