use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Flattened engine configuration. Read from the tabled TOML layout in
/// `tables.rs`; every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default = "crate::config::defaults::default_show_delay_ms")]
    pub show_delay_ms: u64,
    #[serde(default = "crate::config::defaults::default_hide_delay_ms")]
    pub hide_delay_ms: u64,
    #[serde(default = "crate::config::defaults::default_long_press_ms")]
    pub long_press_ms: u64,
    #[serde(default = "crate::config::defaults::default_true")]
    pub hover_capable: bool,
    #[serde(default = "crate::config::defaults::default_popup_max_width")]
    pub popup_max_width: u32,
    #[serde(default = "crate::config::defaults::default_popup_max_height")]
    pub popup_max_height: u32,
    #[serde(default = "crate::config::defaults::default_viewport_margin")]
    pub viewport_margin: f32,
    #[serde(default = "crate::config::defaults::default_popup_offset")]
    pub popup_offset: f32,
    #[serde(default = "crate::config::defaults::default_true")]
    pub show_verse_numbers: bool,
    #[serde(default = "crate::config::defaults::default_true")]
    pub show_header: bool,
    #[serde(default = "crate::config::defaults::default_true")]
    pub show_attribution: bool,
    #[serde(default)]
    pub share_platforms: Vec<SharePlatform>,
    #[serde(default)]
    pub primary_language: Language,
    #[serde(default)]
    pub additional_languages: Vec<Language>,
    #[serde(default = "crate::config::defaults::default_true")]
    pub always_include_english: bool,
    #[serde(default)]
    pub edition_selection: EditionSelection,
    #[serde(default = "crate::config::defaults::default_edition")]
    pub default_edition: String,
    #[serde(default)]
    pub explicit_editions: BTreeMap<Language, String>,
    #[serde(default)]
    pub edition_preferences: BTreeMap<Language, Vec<String>>,
    #[serde(default)]
    pub catalog_url: Option<String>,
    #[serde(default = "crate::config::defaults::default_catalog_cache_ttl_secs")]
    pub catalog_cache_ttl_secs: u64,
    #[serde(default)]
    pub content_source: ContentSourceKind,
    #[serde(default = "crate::config::defaults::default_content_base_url")]
    pub content_base_url: String,
    #[serde(default = "crate::config::defaults::default_content_local_dir")]
    pub content_local_dir: String,
    #[serde(default = "crate::config::defaults::default_link_base_url")]
    pub link_base_url: String,
    #[serde(default)]
    pub cache_capacity: Option<usize>,
    #[serde(default)]
    pub cache_ttl_secs: Option<u64>,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            display_mode: DisplayMode::default(),
            show_delay_ms: crate::config::defaults::default_show_delay_ms(),
            hide_delay_ms: crate::config::defaults::default_hide_delay_ms(),
            long_press_ms: crate::config::defaults::default_long_press_ms(),
            hover_capable: true,
            popup_max_width: crate::config::defaults::default_popup_max_width(),
            popup_max_height: crate::config::defaults::default_popup_max_height(),
            viewport_margin: crate::config::defaults::default_viewport_margin(),
            popup_offset: crate::config::defaults::default_popup_offset(),
            show_verse_numbers: true,
            show_header: true,
            show_attribution: true,
            share_platforms: Vec::new(),
            primary_language: Language::En,
            additional_languages: Vec::new(),
            always_include_english: true,
            edition_selection: EditionSelection::default(),
            default_edition: crate::config::defaults::default_edition(),
            explicit_editions: BTreeMap::new(),
            edition_preferences: BTreeMap::new(),
            catalog_url: None,
            catalog_cache_ttl_secs: crate::config::defaults::default_catalog_cache_ttl_secs(),
            content_source: ContentSourceKind::default(),
            content_base_url: crate::config::defaults::default_content_base_url(),
            content_local_dir: crate::config::defaults::default_content_local_dir(),
            link_base_url: crate::config::defaults::default_link_base_url(),
            cache_capacity: None,
            cache_ttl_secs: None,
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl AppConfig {
    /// Primary language first, then the additional ones. The detector
    /// appends English itself.
    pub fn detection_languages(&self) -> Vec<Language> {
        let mut languages = Vec::with_capacity(1 + self.additional_languages.len());
        languages.push(self.primary_language);
        languages.extend(self.additional_languages.iter().copied());
        languages
    }

    pub fn show_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.show_delay_ms)
    }

    pub fn hide_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.hide_delay_ms)
    }

    pub fn long_press(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.long_press_ms)
    }
}

/// How a detected reference behaves when activated.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    LinkOnly,
    PopupOnly,
    #[default]
    Both,
}

impl DisplayMode {
    pub fn navigates(self) -> bool {
        matches!(self, DisplayMode::LinkOnly | DisplayMode::Both)
    }

    pub fn shows_popup(self) -> bool {
        matches!(self, DisplayMode::PopupOnly | DisplayMode::Both)
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DisplayMode::LinkOnly => "link-only",
            DisplayMode::PopupOnly => "popup-only",
            DisplayMode::Both => "both",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EditionSelection {
    Explicit,
    #[default]
    Dynamic,
    AutoByLanguage,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContentSourceKind {
    #[default]
    Local,
    Remote,
    App,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    X,
    Facebook,
    WhatsApp,
    Telegram,
    Email,
}

impl SharePlatform {
    pub fn label(self) -> &'static str {
        match self {
            SharePlatform::X => "X",
            SharePlatform::Facebook => "Facebook",
            SharePlatform::WhatsApp => "WhatsApp",
            SharePlatform::Telegram => "Telegram",
            SharePlatform::Email => "Email",
        }
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
