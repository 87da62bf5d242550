use std::fs;
use std::future::Future;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::{AppConfig, ContentSourceKind};
use crate::error::LookupError;

/// Where chapter documents come from. Documents are addressed by edition id
/// and section id (`ENGWEB`, `JN3`).
pub trait ChapterSource {
    fn fetch_chapter(
        &self,
        edition: &str,
        section: &str,
    ) -> impl Future<Output = Result<String, LookupError>>;
}

pub fn chapter_address(base: &str, edition: &str, section: &str) -> String {
    format!("{}/{edition}/{section}.html", base.trim_end_matches('/'))
}

/// Chapter documents served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpChapterSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChapterSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl ChapterSource for HttpChapterSource {
    async fn fetch_chapter(&self, edition: &str, section: &str) -> Result<String, LookupError> {
        let url = chapter_address(&self.base_url, edition, section);
        debug!(%url, "Fetching chapter document");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| LookupError::fetch(&url, err))?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Chapter fetch failed");
            return Err(LookupError::fetch(&url, format!("HTTP {}", status.as_u16())));
        }
        response
            .text()
            .await
            .map_err(|err| LookupError::fetch(&url, err))
    }
}

/// Chapter documents laid out on disk as `{root}/{edition}/{section}.html`.
#[derive(Debug, Clone)]
pub struct LocalChapterSource {
    root: PathBuf,
}

impl LocalChapterSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ChapterSource for LocalChapterSource {
    async fn fetch_chapter(&self, edition: &str, section: &str) -> Result<String, LookupError> {
        let path = self.root.join(edition).join(format!("{section}.html"));
        debug!(path = %path.display(), "Reading chapter document");
        fs::read_to_string(&path).map_err(|err| LookupError::fetch(path.display().to_string(), err))
    }
}

/// Chapter documents handed over by the host application.
pub struct ProvidedChapterSource<F> {
    provider: F,
}

impl<F> ProvidedChapterSource<F>
where
    F: Fn(&str, &str) -> Option<String>,
{
    pub fn new(provider: F) -> Self {
        Self { provider }
    }
}

impl<F> ChapterSource for ProvidedChapterSource<F>
where
    F: Fn(&str, &str) -> Option<String>,
{
    async fn fetch_chapter(&self, edition: &str, section: &str) -> Result<String, LookupError> {
        (self.provider)(edition, section).ok_or_else(|| {
            LookupError::fetch(format!("app:{edition}/{section}"), "not provided by host")
        })
    }
}

/// The local or remote source named by `content.source`.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Local(LocalChapterSource),
    Remote(HttpChapterSource),
}

impl ConfiguredSource {
    /// `None` for `content.source = "app"`: the host must supply a
    /// [`ProvidedChapterSource`] itself.
    pub fn from_config(config: &AppConfig, client: reqwest::Client) -> Option<Self> {
        match config.content_source {
            ContentSourceKind::Local => Some(ConfiguredSource::Local(LocalChapterSource::new(
                &config.content_local_dir,
            ))),
            ContentSourceKind::Remote => Some(ConfiguredSource::Remote(HttpChapterSource::new(
                client,
                config.content_base_url.clone(),
            ))),
            ContentSourceKind::App => None,
        }
    }
}

impl ChapterSource for ConfiguredSource {
    async fn fetch_chapter(&self, edition: &str, section: &str) -> Result<String, LookupError> {
        match self {
            ConfiguredSource::Local(source) => source.fetch_chapter(edition, section).await,
            ConfiguredSource::Remote(source) => source.fetch_chapter(edition, section).await,
        }
    }
}
