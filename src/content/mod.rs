//! Verse retrieval: edition resolution, chapter fetch, extraction and memoization.

pub mod cache;
pub mod extract;
pub mod source;

use std::cell::{Cell, RefCell};

use serde::Serialize;
use tracing::{debug, info, warn};

pub use cache::{CachePolicy, VerseCache, cache_key};
pub use extract::{ExtractOptions, ExtractedFootnote, ExtractedVerses, extract_verses};
pub use source::{
    ChapterSource, ConfiguredSource, HttpChapterSource, LocalChapterSource,
    ProvidedChapterSource, chapter_address,
};

use crate::config::AppConfig;
use crate::editions::EditionResolver;
use crate::error::LookupError;
use crate::language::Language;
use crate::reference::ParsedReference;

/// Extracted verses together with their footnotes and the edition they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseContent {
    pub edition: String,
    pub html: String,
    pub footnotes: Vec<ExtractedFootnote>,
}

/// One content lookup. `label` is the reference text used for the cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRequest {
    pub label: String,
    pub reference: ParsedReference,
    pub language: Language,
    pub edition: Option<String>,
}

impl VerseRequest {
    pub fn new(reference: ParsedReference, language: Language) -> Self {
        Self {
            label: reference.to_string(),
            reference,
            language,
            edition: None,
        }
    }

    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = Some(edition.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn cache_key(&self) -> String {
        cache_key(&self.label, self.edition.as_deref(), self.language)
    }
}

/// Resolves an edition, fetches the chapter and extracts the cited verses.
///
/// Single-threaded: state sits behind `RefCell` and no borrow is held across
/// an await point.
pub struct VerseFetcher<S> {
    source: S,
    resolver: RefCell<EditionResolver>,
    cache: RefCell<VerseCache>,
    options: ExtractOptions,
    fetches: Cell<u64>,
    // Bumped on every resolver swap; results fetched under an older value are not cached.
    generation: Cell<u64>,
}

impl<S: ChapterSource> VerseFetcher<S> {
    pub fn new(source: S, resolver: EditionResolver, policy: CachePolicy, options: ExtractOptions) -> Self {
        Self {
            source,
            resolver: RefCell::new(resolver),
            cache: RefCell::new(VerseCache::new(policy)),
            options,
            fetches: Cell::new(0),
            generation: Cell::new(0),
        }
    }

    pub fn from_config(source: S, resolver: EditionResolver, config: &AppConfig) -> Self {
        Self::new(
            source,
            resolver,
            CachePolicy::from_config(config),
            ExtractOptions {
                show_verse_numbers: config.show_verse_numbers,
            },
        )
    }

    /// Swap the edition resolver after the catalog or preferences change.
    /// Cached entries keyed by language are dropped with it.
    pub fn set_resolver(&self, resolver: EditionResolver) {
        *self.resolver.borrow_mut() = resolver;
        self.cache.borrow_mut().clear();
        self.generation.set(self.generation.get() + 1);
        info!("Edition resolver replaced; verse cache cleared");
    }

    pub fn resolve_edition(&self, language: Language, explicit: Option<&str>) -> Option<String> {
        self.resolver.borrow().resolve_edition(language, explicit)
    }

    pub fn link_edition(&self, language: Language, explicit: Option<&str>) -> Option<String> {
        self.resolver.borrow().link_edition(language, explicit)
    }

    pub fn is_cached(&self, request: &VerseRequest) -> bool {
        self.cache.borrow().contains(&request.cache_key())
    }

    /// Number of chapter documents requested from the source so far.
    pub fn fetch_count(&self) -> u64 {
        self.fetches.get()
    }

    pub async fn fetch_verse_content(&self, request: &VerseRequest) -> Result<VerseContent, LookupError> {
        let key = request.cache_key();
        if let Some(hit) = self.cache.borrow_mut().get(&key) {
            debug!(%key, "Serving verses from cache");
            return Ok(hit);
        }

        let edition = self
            .resolve_edition(request.language, request.edition.as_deref())
            .ok_or(LookupError::UnresolvedEdition(request.language))?;
        let section = request.reference.section_id();
        let generation = self.generation.get();

        self.fetches.set(self.fetches.get() + 1);
        let document = match self.source.fetch_chapter(&edition, &section).await {
            Ok(document) => document,
            Err(err) => {
                warn!(%edition, %section, "Chapter fetch failed: {err}");
                return Err(err);
            }
        };
        let extracted = extract_verses(&document, &request.reference, &self.options)?;

        let content = VerseContent {
            edition,
            html: extracted.html,
            footnotes: extracted.footnotes,
        };
        if self.generation.get() != generation {
            debug!(
                reference = %request.label,
                edition = %content.edition,
                "Resolver changed during fetch; result not cached"
            );
            return Ok(content);
        }
        self.cache.borrow_mut().insert(key, content.clone());
        debug!(reference = %request.label, edition = %content.edition, "Cached verse content");
        Ok(content)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::books::Book;
    use crate::editions::EditionMapping;
    use std::collections::BTreeMap;
    use std::rc::Rc;
    use std::time::Duration;

    pub(crate) const JOHN_3: &str = r#"<html><body><div class="chapter JN3" data-id="JN3">
        <span data-id="JN3_16"><span class="v-num">16</span>For God so loved the world<span class="note"><span class="key">a</span><span class="text">Or, cosmos</span></span>.</span>
        <span data-id="JN3_17"><span class="v-num">17</span>For God didn't send his Son.</span>
    </div></body></html>"#;

    /// Serves `JOHN_3` for ENGWEB/JN3 and answers 404 for everything else.
    pub(crate) struct MockSource {
        pub calls: Cell<usize>,
    }

    impl MockSource {
        pub(crate) fn new() -> Self {
            Self { calls: Cell::new(0) }
        }
    }

    impl ChapterSource for MockSource {
        async fn fetch_chapter(&self, edition: &str, section: &str) -> Result<String, LookupError> {
            self.calls.set(self.calls.get() + 1);
            if edition == "ENGWEB" && section == "JN3" {
                Ok(JOHN_3.to_string())
            } else {
                Err(LookupError::fetch(
                    chapter_address("https://example.test", edition, section),
                    "HTTP 404",
                ))
            }
        }
    }

    pub(crate) fn english_resolver() -> EditionResolver {
        resolver_for("ENGWEB")
    }

    fn resolver_for(edition: &str) -> EditionResolver {
        let mut explicit = BTreeMap::new();
        explicit.insert(Language::En, edition.to_string());
        EditionResolver::new(EditionMapping::from_explicit(&explicit), Some(edition.to_string()))
    }

    /// Serves `JOHN_3` for any edition after a one second delay.
    struct SlowSource;

    impl ChapterSource for SlowSource {
        async fn fetch_chapter(&self, _edition: &str, _section: &str) -> Result<String, LookupError> {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(JOHN_3.to_string())
        }
    }

    fn fetcher() -> VerseFetcher<MockSource> {
        VerseFetcher::new(
            MockSource::new(),
            english_resolver(),
            CachePolicy::unbounded(),
            ExtractOptions::default(),
        )
    }

    #[tokio::test]
    async fn second_fetch_is_served_from_cache() {
        let fetcher = fetcher();
        let request = VerseRequest::new(ParsedReference::verse(Book::John, 3, 16), Language::En);

        let first = fetcher.fetch_verse_content(&request).await.unwrap();
        let second = fetcher.fetch_verse_content(&request).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.edition, "ENGWEB");
        assert_eq!(first.footnotes.len(), 1);
        assert_eq!(fetcher.source.calls.get(), 1);
        assert_eq!(fetcher.fetch_count(), 1);
        assert!(fetcher.is_cached(&request));
    }

    #[tokio::test]
    async fn unresolved_language_never_fetches() {
        let fetcher = fetcher();
        let request = VerseRequest::new(ParsedReference::verse(Book::John, 3, 16), Language::Id);

        let err = fetcher.fetch_verse_content(&request).await.unwrap_err();
        assert_eq!(err, LookupError::UnresolvedEdition(Language::Id));
        assert!(err.to_string().contains("Indonesian"));
        assert_eq!(fetcher.source.calls.get(), 0);
        assert!(!fetcher.is_cached(&request));
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let fetcher = fetcher();
        let request = VerseRequest::new(ParsedReference::verse(Book::Romans, 8, 28), Language::En);

        let err = fetcher.fetch_verse_content(&request).await.unwrap_err();
        assert!(err.to_string().contains("HTTP 404"));
        assert!(!fetcher.is_cached(&request));

        let _ = fetcher.fetch_verse_content(&request).await;
        assert_eq!(fetcher.source.calls.get(), 2);

        let missing = VerseRequest::new(ParsedReference::verse(Book::John, 3, 99), Language::En);
        assert!(matches!(
            fetcher.fetch_verse_content(&missing).await,
            Err(LookupError::VerseNotFound { .. })
        ));
        assert!(!fetcher.is_cached(&missing));
    }

    #[tokio::test]
    async fn edition_override_wins_and_keys_separately() {
        let fetcher = fetcher();
        let request = VerseRequest::new(ParsedReference::verse(Book::John, 3, 16), Language::Es)
            .with_edition("ENGWEB");

        let content = fetcher.fetch_verse_content(&request).await.unwrap();
        assert_eq!(content.edition, "ENGWEB");
        assert_eq!(request.cache_key(), "John 3:16|edition:ENGWEB");

        fetcher.set_resolver(english_resolver());
        assert!(!fetcher.is_cached(&request));
    }

    #[tokio::test(start_paused = true)]
    async fn resolver_swap_during_fetch_is_not_cached() {
        let fetcher = Rc::new(VerseFetcher::new(
            SlowSource,
            english_resolver(),
            CachePolicy::unbounded(),
            ExtractOptions::default(),
        ));
        let request = VerseRequest::new(ParsedReference::verse(Book::John, 3, 16), Language::En);

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let pending = tokio::task::spawn_local({
                    let fetcher = fetcher.clone();
                    let request = request.clone();
                    async move { fetcher.fetch_verse_content(&request).await }
                });
                tokio::time::sleep(Duration::from_millis(10)).await;
                fetcher.set_resolver(resolver_for("ENGKJV"));

                let stale = pending.await.unwrap().unwrap();
                assert_eq!(stale.edition, "ENGWEB");
                assert!(!fetcher.is_cached(&request));

                let fresh = fetcher.fetch_verse_content(&request).await.unwrap();
                assert_eq!(fresh.edition, "ENGKJV");
                assert!(fetcher.is_cached(&request));
                let again = fetcher.fetch_verse_content(&request).await.unwrap();
                assert_eq!(again.edition, "ENGKJV");
                assert_eq!(fetcher.fetch_count(), 2);
            })
            .await;
    }
}
