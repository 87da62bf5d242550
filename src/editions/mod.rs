//! Edition catalog and per-language edition selection.

pub mod catalog;
pub mod resolver;

pub use catalog::{CATALOG_CACHE_PATH, TextInfo, fetch_catalog, load_catalog, parse_catalog};
pub use resolver::{EditionMapping, EditionResolver};
