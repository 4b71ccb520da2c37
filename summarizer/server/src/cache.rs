use common::SummaryOptions;
use lru::LruCache;
use sha2::{Digest, Sha256};
use std::{
	num::NonZeroUsize,
	sync::{Mutex, PoisonError},
};
use url::Url;

pub const DEFAULT_CAPACITY: usize = 256;

/// What was summarized, reduced to a SHA-256 digest so keys stay small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
	Text([u8; 32]),
	Page([u8; 32]),
}

impl Source {
	/// `text` should already be truncated to what the model sees.
	pub fn text(text: &str) -> Self {
		Self::Text(Sha256::digest(text.as_bytes()).into())
	}

	pub fn page(url: &Url) -> Self {
		Self::Page(Sha256::digest(url.as_str().as_bytes()).into())
	}
}

/// Least recently used summaries keyed by what was summarized and how.
///
/// `no_cache` on a request bypasses both lookup and store; it is not part of the key.
/// A capacity of zero disables the cache.
#[derive(Debug)]
pub struct SummaryCache {
	entries: Option<Mutex<LruCache<(Source, SummaryOptions), String>>>,
}

impl Default for SummaryCache {
	fn default() -> Self {
		Self::new(DEFAULT_CAPACITY)
	}
}

impl SummaryCache {
	pub fn new(capacity: usize) -> Self {
		Self { entries: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))) }
	}

	pub fn get(&self, source: &Source, options: &SummaryOptions) -> Option<String> {
		if options.no_cache {
			return None;
		}
		let mut entries = self.entries.as_ref()?.lock().unwrap_or_else(PoisonError::into_inner);
		entries.get(&(*source, key_options(options))).cloned()
	}

	pub fn insert(&self, source: Source, options: &SummaryOptions, summary: String) {
		if options.no_cache {
			return;
		}
		if let Some(entries) = &self.entries {
			entries.lock().unwrap_or_else(PoisonError::into_inner).put((source, key_options(options)), summary);
		}
	}

	pub fn len(&self) -> usize {
		self.entries.as_ref().map_or(0, |entries| entries.lock().unwrap_or_else(PoisonError::into_inner).len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

fn key_options(options: &SummaryOptions) -> SummaryOptions {
	SummaryOptions { no_cache: false, ..*options }
}
