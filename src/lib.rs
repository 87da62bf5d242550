//! Detection and resolution of scripture references in prose.
//!
//! Text is scanned for citations in up to ten languages, each match is
//! normalized to a canonical book/chapter/verse, an edition is chosen for
//! the detected language, and the cited verses are fetched on demand for a
//! hover/touch/keyboard preview popup.

pub mod annotate;
pub mod books;
pub mod config;
pub mod content;
pub mod detect;
pub mod editions;
pub mod error;
pub mod language;
pub mod popup;
pub mod reference;
pub mod text_utils;

pub use books::Book;
pub use detect::{ParsedVerseReference, ReferenceDetector};
pub use editions::EditionResolver;
pub use error::LookupError;
pub use language::Language;
pub use reference::ParsedReference;
