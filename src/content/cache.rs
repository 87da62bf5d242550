use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, trace};

use super::VerseContent;
use crate::config::AppConfig;
use crate::language::Language;

/// Bounds for the verse cache. The default keeps every entry for the
/// lifetime of the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CachePolicy {
    pub capacity: Option<usize>,
    pub ttl: Option<Duration>,
}

impl CachePolicy {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            capacity: config.cache_capacity.filter(|capacity| *capacity > 0),
            ttl: config.cache_ttl_secs.map(Duration::from_secs),
        }
    }
}

/// Key combining the reference text with the edition override when one was
/// given, otherwise with the detected language.
pub fn cache_key(reference: &str, edition: Option<&str>, language: Language) -> String {
    match edition.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => format!("{reference}|edition:{id}"),
        None => format!("{reference}|lang:{}", language.code()),
    }
}

struct Entry {
    stored_at: Instant,
    value: VerseContent,
}

/// Memo of extracted verses. Content and footnotes are stored and returned
/// together as one value.
pub struct VerseCache {
    policy: CachePolicy,
    entries: HashMap<String, Entry>,
    order: VecDeque<String>,
}

impl Default for VerseCache {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}

impl VerseCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    pub fn get(&mut self, key: &str) -> Option<VerseContent> {
        let expired = match (self.entries.get(key), self.policy.ttl) {
            (None, _) => return None,
            (Some(entry), Some(ttl)) => entry.stored_at.elapsed() >= ttl,
            (Some(_), None) => false,
        };
        if expired {
            debug!(key, "Verse cache entry expired");
            self.remove(key);
            return None;
        }
        trace!(key, "Verse cache hit");
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    pub fn insert(&mut self, key: String, value: VerseContent) {
        if self.entries.contains_key(&key) {
            self.order.retain(|existing| existing != &key);
        }
        self.order.push_back(key.clone());
        self.entries.insert(
            key,
            Entry {
                stored_at: Instant::now(),
                value,
            },
        );

        if let Some(capacity) = self.policy.capacity {
            while self.entries.len() > capacity {
                let Some(oldest) = self.order.pop_front() else {
                    break;
                };
                debug!(key = %oldest, "Evicting verse cache entry");
                self.entries.remove(&oldest);
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.order.retain(|existing| existing != key);
    }
}
