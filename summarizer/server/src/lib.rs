//! HTTP service behind the summarizer page.
//!
//! - `GET /` answers `42`
//! - `POST /summarize` summarizes `{"text": ..}`, also accepted base64 encoded with
//!   `Content-Encoding: base64`
//! - `POST /page` fetches `{"url": ..}`, extracts the main text and summarizes it

pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
mod routes;
pub mod summarizer;

use cache::{Source, SummaryCache};
use common::SummaryOptions;
use error::ServerAppError;
use fetch::PageFetcher;
use std::sync::Arc;
use summarizer::Summarizer;
use tracing::{debug, info};
use url::Url;

pub use routes::router;

/// Input beyond this many characters is dropped before it reaches the model.
pub const MAX_INPUT_CHARS: usize = 3000;

#[derive(Clone, bon::Builder)]
pub struct AppState {
	summarizer: Arc<dyn Summarizer>,
	fetcher: Arc<dyn PageFetcher>,
	#[builder(default)]
	cache: Arc<SummaryCache>,
}

impl AppState {
	pub async fn summarize_text(&self, text: &str, options: &SummaryOptions) -> Result<String, ServerAppError> {
		let text = truncate(text);
		let source = Source::text(&text);
		if let Some(summary) = self.cache.get(&source, options) {
			debug!("text summary served from cache");
			return Ok(summary);
		}
		let summary = self.run(&text, options).await?;
		self.cache.insert(source, options, summary.clone());
		Ok(summary)
	}

	pub async fn summarize_page(&self, url: &Url, options: &SummaryOptions) -> Result<String, ServerAppError> {
		let source = Source::page(url);
		if let Some(summary) = self.cache.get(&source, options) {
			debug!(%url, "page summary served from cache");
			return Ok(summary);
		}
		let html = self.fetcher.fetch(url).await?;
		let text = extract::main_text(&html);
		if text.is_empty() {
			return Err(ServerAppError::NoContent);
		}
		let summary = self.run(&truncate(&text), options).await?;
		self.cache.insert(source, options, summary.clone());
		Ok(summary)
	}

	// `text` is already truncated
	async fn run(&self, text: &str, options: &SummaryOptions) -> Result<String, ServerAppError> {
		if text.trim().is_empty() {
			return Err(ServerAppError::BadRequest("nothing to summarize".to_owned()));
		}
		info!(chars = text.chars().count(), max_length = options.max_length, min_length = options.min_length, "summarizing");
		self.summarizer.summarize(text, options).await
	}
}

fn truncate(text: &str) -> String {
	text.chars().take(MAX_INPUT_CHARS).collect()
}
