pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_show_delay_ms() -> u64 {
    300
}

pub(crate) fn default_hide_delay_ms() -> u64 {
    200
}

pub(crate) fn default_long_press_ms() -> u64 {
    500
}

pub(crate) fn default_popup_max_width() -> u32 {
    400
}

pub(crate) fn default_popup_max_height() -> u32 {
    300
}

pub(crate) fn default_viewport_margin() -> f32 {
    10.0
}

pub(crate) fn default_popup_offset() -> f32 {
    8.0
}

pub(crate) fn default_edition() -> String {
    "ENGWEB".to_string()
}

pub(crate) fn default_catalog_cache_ttl_secs() -> u64 {
    24 * 60 * 60
}

pub(crate) fn default_content_base_url() -> String {
    "content/texts".to_string()
}

pub(crate) fn default_content_local_dir() -> String {
    "content/texts".to_string()
}

pub(crate) fn default_link_base_url() -> String {
    "content/texts".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}
