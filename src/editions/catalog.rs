use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::error::LookupError;
use crate::language::Language;

pub const CATALOG_CACHE_PATH: &str = ".cache/edition-catalog.toml";
const CATALOG_CACHE_REV: &str = "edition-catalog-v1";

/// One available edition as described by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(
        default,
        rename = "langName",
        alias = "lang_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub lang_name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(
        default,
        rename = "hasText",
        alias = "has_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_text: Option<bool>,
}

impl TextInfo {
    /// Only entries typed "bible" whose text is not flagged missing count.
    pub fn is_eligible(&self) -> bool {
        let is_bible = self
            .kind
            .as_deref()
            .is_some_and(|kind| kind.trim().eq_ignore_ascii_case("bible"));
        is_bible && self.has_text != Some(false)
    }

    /// Name used for ordering; falls back to the id.
    pub fn sort_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.id)
    }

    /// Code table first, then the language name, then a partial match on
    /// the raw code or the id prefix.
    pub fn language(&self) -> Option<Language> {
        let lang = self.lang.as_deref().map(str::trim).unwrap_or_default();
        if let Some(found) = Language::from_code(lang) {
            return Some(found);
        }
        if let Some(found) = self
            .lang_name
            .as_deref()
            .and_then(Language::from_language_name)
        {
            return Some(found);
        }
        partial_language_match(lang).or_else(|| partial_language_match(&self.id))
    }
}

static LANG_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<three>[A-Za-z]{3})|^(?P<two>[A-Za-z]{2})(?:[-_]|$)").unwrap());

fn partial_language_match(raw: &str) -> Option<Language> {
    let caps = LANG_PREFIX.captures(raw.trim())?;
    if let Some(three) = caps.name("three") {
        return Language::from_iso639_3(three.as_str());
    }
    caps.name("two")
        .and_then(|two| Language::from_code(two.as_str()))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Wrapped {
        #[serde(rename = "textInfoData")]
        text_info_data: Vec<TextInfo>,
    },
    Bare(Vec<TextInfo>),
}

pub fn parse_catalog(body: &str) -> Result<Vec<TextInfo>, LookupError> {
    let payload: CatalogPayload = serde_json::from_str(body)
        .map_err(|err| LookupError::Catalog(format!("invalid catalog JSON: {err}")))?;
    let entries = match payload {
        CatalogPayload::Wrapped { text_info_data } => text_info_data,
        CatalogPayload::Bare(entries) => entries,
    };
    Ok(entries
        .into_iter()
        .filter(|entry| !entry.id.trim().is_empty())
        .collect())
}

pub async fn fetch_catalog(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<TextInfo>, LookupError> {
    debug!(url, "Fetching edition catalog");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| LookupError::Catalog(format!("{url}: {err}")))?;
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Catalog(format!(
            "{url}: HTTP {}",
            status.as_u16()
        )));
    }
    let body = response
        .text()
        .await
        .map_err(|err| LookupError::Catalog(format!("{url}: {err}")))?;
    parse_catalog(&body)
}

/// Reads the catalog from `location` (an http(s) URL or a local path),
/// reusing the on-disk cache while it is younger than `ttl_secs`.
pub async fn load_catalog(
    client: &reqwest::Client,
    location: &str,
    ttl_secs: u64,
    cache_path: &Path,
    force_refresh: bool,
) -> Result<Vec<TextInfo>> {
    let signature = cache_signature(location);
    if !force_refresh {
        if let Some(cached) = try_load_cache(cache_path, &signature, ttl_secs)? {
            debug!(entries = cached.len(), "Using cached edition catalog");
            return Ok(cached);
        }
    }

    let entries = if is_remote(location) {
        fetch_catalog(client, location).await?
    } else {
        let body = fs::read_to_string(location)
            .with_context(|| format!("failed to read catalog {location}"))?;
        parse_catalog(&body)?
    };
    info!(entries = entries.len(), location, "Loaded edition catalog");

    if let Err(err) = write_cache(cache_path, &signature, &entries) {
        warn!("Failed to write edition catalog cache: {err:#}");
    }
    Ok(entries)
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[derive(Debug, Deserialize, Serialize)]
struct CachedCatalog {
    rev: String,
    generated_unix_secs: u64,
    signature: String,
    entries: Vec<TextInfo>,
}

fn try_load_cache(path: &Path, signature: &str, ttl_secs: u64) -> Result<Option<Vec<TextInfo>>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return Ok(None),
    };
    let parsed: CachedCatalog = match toml::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(_) => return Ok(None),
    };
    if parsed.rev != CATALOG_CACHE_REV || parsed.signature != signature {
        return Ok(None);
    }
    if now_unix_secs().saturating_sub(parsed.generated_unix_secs) > ttl_secs {
        return Ok(None);
    }
    Ok(Some(parsed.entries))
}

fn write_cache(path: &Path, signature: &str, entries: &[TextInfo]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let payload = CachedCatalog {
        rev: CATALOG_CACHE_REV.to_string(),
        generated_unix_secs: now_unix_secs(),
        signature: signature.to_string(),
        entries: entries.to_vec(),
    };
    let serialized =
        toml::to_string(&payload).with_context(|| "failed to serialize edition catalog cache")?;
    fs::write(path, serialized).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn cache_signature(location: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(CATALOG_CACHE_REV.as_bytes());
    hasher.update(location.trim().as_bytes());
    format!("{:x}", hasher.finalize())
}

fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
