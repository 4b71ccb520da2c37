use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_LENGTH: u32 = 3000;
pub const DEFAULT_MIN_LENGTH: u32 = 10;

#[derive(Serialize, Deserialize, Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
	#[error("Enter some text or a link starting with http:// or https:// to summarize.")]
	EmptyInput,
	#[error("Could not connect to the summarization server.")]
	Network,
	#[error("The server rejected the request: {0}")]
	ServerError(String),
	#[error("The server sent a response that could not be read: {0}")]
	InvalidResponse(String),
	#[error("Could not find any main content on this page to summarize.")]
	NoContent,
}

/// Tuning knobs forwarded to the summarization backend.
///
/// Every field is optional on the wire; missing fields take the defaults below.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct SummaryOptions {
	pub max_length: u32,
	pub min_length: u32,
	pub do_sample: bool,
	/// Skip the server's summary cache for this request.
	pub no_cache: bool,
}

impl Default for SummaryOptions {
	fn default() -> Self {
		Self { max_length: DEFAULT_MAX_LENGTH, min_length: DEFAULT_MIN_LENGTH, do_sample: false, no_cache: false }
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TextRequest {
	pub text: String,
	#[serde(flatten)]
	pub options: SummaryOptions,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
	pub url: String,
	#[serde(flatten)]
	pub options: SummaryOptions,
}

/// Body of either endpoint, serialized without a tag: `{"text": ..}` or `{"url": ..}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SummarizeRequest {
	Page(PageRequest),
	Text(TextRequest),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryResponse {
	pub summary: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
	pub error: String,
}

/// Reads a summary out of an HTTP status and response body.
///
/// 422 means the page had no text to summarize. Other failures carry the server's `error`
/// message when the body has one.
pub fn read_summary(status: u16, body: &str) -> Result<String, AppError> {
	match status {
		422 => Err(AppError::NoContent),
		200..=299 => serde_json::from_str::<SummaryResponse>(body).map(|res| res.summary).map_err(|e| AppError::InvalidResponse(e.to_string())),
		_ => {
			let message = serde_json::from_str::<ErrorResponse>(body).map_or_else(|_| format!("HTTP {status}"), |res| res.error);
			Err(AppError::ServerError(message))
		},
	}
}
