//! Configuration loading for the reference engine.
//!
//! Settings live in `conf/config.toml`, grouped into tables. Missing or
//! invalid entries fall back to defaults so detection still works.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config, serialize_config};
pub use models::{
    AppConfig, ContentSourceKind, DisplayMode, EditionSelection, LogLevel, SharePlatform,
};

pub const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";
