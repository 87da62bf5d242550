use std::collections::BTreeMap;

use tracing::debug;

use super::catalog::TextInfo;
use crate::config::{AppConfig, EditionSelection};
use crate::language::Language;

/// Language -> chosen edition id. A language missing from the map has no
/// usable text, which is a valid outcome rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditionMapping {
    editions: BTreeMap<Language, String>,
}

impl EditionMapping {
    /// Preferences are tried first, in order, against catalog ids
    /// (case-insensitive). Otherwise the first eligible entry for the
    /// language, ordered by name, is used.
    pub fn build(catalog: &[TextInfo], preferences: &BTreeMap<Language, Vec<String>>) -> Self {
        let mut by_language: BTreeMap<Language, Vec<&TextInfo>> = BTreeMap::new();
        for entry in catalog.iter().filter(|entry| entry.is_eligible()) {
            if let Some(language) = entry.language() {
                by_language.entry(language).or_default().push(entry);
            }
        }
        for entries in by_language.values_mut() {
            entries.sort_by(|a, b| {
                a.sort_name()
                    .to_lowercase()
                    .cmp(&b.sort_name().to_lowercase())
                    .then_with(|| a.id.cmp(&b.id))
            });
        }

        let mut editions = BTreeMap::new();
        for language in Language::ALL {
            let preferred = preferences.get(&language).and_then(|ids| {
                ids.iter().find_map(|wanted| {
                    catalog
                        .iter()
                        .filter(|entry| entry.is_eligible())
                        .find(|entry| entry.id.eq_ignore_ascii_case(wanted.trim()))
                        .map(|entry| entry.id.clone())
                })
            });
            let chosen = preferred.or_else(|| {
                by_language
                    .get(&language)
                    .and_then(|entries| entries.first())
                    .map(|entry| entry.id.clone())
            });
            if let Some(id) = chosen {
                editions.insert(language, id);
            }
        }

        debug!(mapped = editions.len(), "Built edition mapping");
        Self { editions }
    }

    pub fn from_explicit(explicit: &BTreeMap<Language, String>) -> Self {
        let editions = explicit
            .iter()
            .filter(|(_, id)| !id.trim().is_empty())
            .map(|(language, id)| (*language, id.trim().to_string()))
            .collect();
        Self { editions }
    }

    pub fn get(&self, language: Language) -> Option<&str> {
        self.editions.get(&language).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.editions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editions.is_empty()
    }
}

/// Chooses the edition for a detected language.
///
/// `resolve_edition` never crosses languages: a Spanish reference with no
/// Spanish edition resolves to nothing. `link_edition` is for building
/// links only and may fall back to the configured default edition.
#[derive(Debug, Clone, Default)]
pub struct EditionResolver {
    mapping: EditionMapping,
    default_edition: Option<String>,
}

impl EditionResolver {
    pub fn new(mapping: EditionMapping, default_edition: Option<String>) -> Self {
        let default_edition = default_edition
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        Self {
            mapping,
            default_edition,
        }
    }

    pub fn from_config(config: &AppConfig, catalog: &[TextInfo]) -> Self {
        let mapping = match config.edition_selection {
            EditionSelection::Explicit => EditionMapping::from_explicit(&config.explicit_editions),
            EditionSelection::Dynamic => {
                EditionMapping::build(catalog, &config.edition_preferences)
            }
            EditionSelection::AutoByLanguage => EditionMapping::build(catalog, &BTreeMap::new()),
        };
        Self::new(mapping, Some(config.default_edition.clone()))
    }

    pub fn mapping(&self) -> &EditionMapping {
        &self.mapping
    }

    pub fn resolve_edition(&self, language: Language, explicit: Option<&str>) -> Option<String> {
        if let Some(id) = explicit.map(str::trim).filter(|id| !id.is_empty()) {
            return Some(id.to_string());
        }
        let resolved = self.mapping.get(language).map(str::to_string);
        if resolved.is_none() {
            debug!(lang = %language, "No edition mapped for language");
        }
        resolved
    }

    pub fn link_edition(&self, language: Language, explicit: Option<&str>) -> Option<String> {
        self.resolve_edition(language, explicit)
            .or_else(|| self.default_edition.clone())
    }
}
