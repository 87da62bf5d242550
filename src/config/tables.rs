use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::defaults;
use super::models::{
    AppConfig, ContentSourceKind, DisplayMode, EditionSelection, LogLevel, SharePlatform,
};
use crate::language::Language;

/// On-disk layout of `conf/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    display: DisplayConfig,
    #[serde(default)]
    timing: TimingConfig,
    #[serde(default)]
    popup: PopupConfig,
    #[serde(default)]
    languages: LanguagesConfig,
    #[serde(default)]
    editions: EditionsConfig,
    #[serde(default)]
    content: ContentConfig,
    #[serde(default)]
    cache: CacheConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            display_mode: tables.display.mode,
            show_delay_ms: tables.timing.show_delay_ms,
            hide_delay_ms: tables.timing.hide_delay_ms,
            long_press_ms: tables.timing.long_press_ms,
            hover_capable: tables.popup.hover_capable,
            popup_max_width: tables.popup.max_width,
            popup_max_height: tables.popup.max_height,
            viewport_margin: tables.popup.viewport_margin,
            popup_offset: tables.popup.offset,
            show_verse_numbers: tables.popup.show_verse_numbers,
            show_header: tables.popup.show_header,
            show_attribution: tables.popup.show_attribution,
            share_platforms: tables.popup.share_platforms,
            primary_language: language_or_default(&tables.languages.primary),
            additional_languages: tables
                .languages
                .additional
                .iter()
                .filter_map(|code| known_language(code))
                .collect(),
            always_include_english: tables.languages.always_include_english,
            edition_selection: tables.editions.selection,
            default_edition: tables.editions.default_edition,
            explicit_editions: tables
                .editions
                .explicit
                .into_iter()
                .filter_map(|(code, id)| known_language(&code).map(|lang| (lang, id)))
                .collect(),
            edition_preferences: tables
                .editions
                .preferences
                .into_iter()
                .filter_map(|(code, pref)| known_language(&code).map(|lang| (lang, pref.into_ids())))
                .collect(),
            catalog_url: tables
                .editions
                .catalog_url
                .filter(|url| !url.trim().is_empty()),
            catalog_cache_ttl_secs: tables.editions.catalog_cache_ttl_secs,
            content_source: tables.content.source,
            content_base_url: tables.content.base_url,
            content_local_dir: tables.content.local_dir,
            link_base_url: tables.content.link_base_url,
            cache_capacity: tables.cache.capacity,
            cache_ttl_secs: tables.cache.ttl_secs,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            display: DisplayConfig {
                mode: config.display_mode,
            },
            timing: TimingConfig {
                show_delay_ms: config.show_delay_ms,
                hide_delay_ms: config.hide_delay_ms,
                long_press_ms: config.long_press_ms,
            },
            popup: PopupConfig {
                hover_capable: config.hover_capable,
                max_width: config.popup_max_width,
                max_height: config.popup_max_height,
                viewport_margin: config.viewport_margin,
                offset: config.popup_offset,
                show_verse_numbers: config.show_verse_numbers,
                show_header: config.show_header,
                show_attribution: config.show_attribution,
                share_platforms: config.share_platforms.clone(),
            },
            languages: LanguagesConfig {
                primary: config.primary_language.code().to_string(),
                additional: config
                    .additional_languages
                    .iter()
                    .map(|lang| lang.code().to_string())
                    .collect(),
                always_include_english: config.always_include_english,
            },
            editions: EditionsConfig {
                selection: config.edition_selection,
                default_edition: config.default_edition.clone(),
                explicit: config
                    .explicit_editions
                    .iter()
                    .map(|(lang, id)| (lang.code().to_string(), id.clone()))
                    .collect(),
                preferences: config
                    .edition_preferences
                    .iter()
                    .map(|(lang, ids)| (lang.code().to_string(), EditionPreference::Many(ids.clone())))
                    .collect(),
                catalog_url: config.catalog_url.clone(),
                catalog_cache_ttl_secs: config.catalog_cache_ttl_secs,
            },
            content: ContentConfig {
                source: config.content_source,
                base_url: config.content_base_url.clone(),
                local_dir: config.content_local_dir.clone(),
                link_base_url: config.link_base_url.clone(),
            },
            cache: CacheConfig {
                capacity: config.cache_capacity,
                ttl_secs: config.cache_ttl_secs,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

fn known_language(code: &str) -> Option<Language> {
    let found = Language::from_code(code);
    if found.is_none() {
        warn!(code, "Ignoring unsupported language in config");
    }
    found
}

fn language_or_default(code: &str) -> Language {
    known_language(code).unwrap_or_default()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct DisplayConfig {
    #[serde(default)]
    mode: DisplayMode,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct TimingConfig {
    #[serde(default = "defaults::default_show_delay_ms")]
    show_delay_ms: u64,
    #[serde(default = "defaults::default_hide_delay_ms")]
    hide_delay_ms: u64,
    #[serde(default = "defaults::default_long_press_ms")]
    long_press_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            show_delay_ms: defaults::default_show_delay_ms(),
            hide_delay_ms: defaults::default_hide_delay_ms(),
            long_press_ms: defaults::default_long_press_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct PopupConfig {
    #[serde(default = "defaults::default_true")]
    hover_capable: bool,
    #[serde(default = "defaults::default_popup_max_width")]
    max_width: u32,
    #[serde(default = "defaults::default_popup_max_height")]
    max_height: u32,
    #[serde(default = "defaults::default_viewport_margin")]
    viewport_margin: f32,
    #[serde(default = "defaults::default_popup_offset")]
    offset: f32,
    #[serde(default = "defaults::default_true")]
    show_verse_numbers: bool,
    #[serde(default = "defaults::default_true")]
    show_header: bool,
    #[serde(default = "defaults::default_true")]
    show_attribution: bool,
    #[serde(default)]
    share_platforms: Vec<SharePlatform>,
}

impl Default for PopupConfig {
    fn default() -> Self {
        PopupConfig {
            hover_capable: true,
            max_width: defaults::default_popup_max_width(),
            max_height: defaults::default_popup_max_height(),
            viewport_margin: defaults::default_viewport_margin(),
            offset: defaults::default_popup_offset(),
            show_verse_numbers: true,
            show_header: true,
            show_attribution: true,
            share_platforms: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct LanguagesConfig {
    #[serde(default = "default_primary")]
    primary: String,
    #[serde(default)]
    additional: Vec<String>,
    #[serde(default = "defaults::default_true")]
    always_include_english: bool,
}

fn default_primary() -> String {
    Language::En.code().to_string()
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        LanguagesConfig {
            primary: default_primary(),
            additional: Vec::new(),
            always_include_english: true,
        }
    }
}

/// A single edition id or an ordered list of fallbacks.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
enum EditionPreference {
    One(String),
    Many(Vec<String>),
}

impl EditionPreference {
    fn into_ids(self) -> Vec<String> {
        match self {
            EditionPreference::One(id) => vec![id],
            EditionPreference::Many(ids) => ids,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct EditionsConfig {
    #[serde(default)]
    selection: EditionSelection,
    #[serde(default = "defaults::default_edition")]
    default_edition: String,
    #[serde(default)]
    explicit: BTreeMap<String, String>,
    #[serde(default)]
    preferences: BTreeMap<String, EditionPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    catalog_url: Option<String>,
    #[serde(default = "defaults::default_catalog_cache_ttl_secs")]
    catalog_cache_ttl_secs: u64,
}

impl Default for EditionsConfig {
    fn default() -> Self {
        EditionsConfig {
            selection: EditionSelection::default(),
            default_edition: defaults::default_edition(),
            explicit: BTreeMap::new(),
            preferences: BTreeMap::new(),
            catalog_url: None,
            catalog_cache_ttl_secs: defaults::default_catalog_cache_ttl_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ContentConfig {
    #[serde(default)]
    source: ContentSourceKind,
    #[serde(default = "defaults::default_content_base_url")]
    base_url: String,
    #[serde(default = "defaults::default_content_local_dir")]
    local_dir: String,
    #[serde(default = "defaults::default_link_base_url")]
    link_base_url: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            source: ContentSourceKind::default(),
            base_url: defaults::default_content_base_url(),
            local_dir: defaults::default_content_local_dir(),
            link_base_url: defaults::default_link_base_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct CacheConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capacity: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
