//! Server settings read from the process environment (a `.env` file is loaded first by `main`).

use crate::cache::DEFAULT_CAPACITY;
use std::env;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_SYSTEM_PROMPT: &str =
	"You summarize documents. Reply with a concise, faithful summary of the user's text in plain prose, without preamble.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
	#[error("{0} must be set")]
	Missing(&'static str),
	#[error("{name} has an invalid value: {value:?}")]
	Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiSettings {
	pub api_key: String,
	pub model: String,
	pub system_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
	pub port: u16,
	/// Zero when the cache is switched off.
	pub cache_capacity: usize,
	pub openai: OpenAiSettings,
}

impl ServerConfig {
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let var = |name: &str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

		let port = match var("SERVER_PORT") {
			Some(value) => value.parse().map_err(|_| ConfigError::Invalid { name: "SERVER_PORT", value })?,
			None => DEFAULT_PORT,
		};
		let cache_enabled = match var("SUMMARY_CACHE") {
			Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid { name: "SUMMARY_CACHE", value })?,
			None => true,
		};
		let cache_size = match var("SUMMARY_CACHE_SIZE") {
			Some(value) => value.parse().map_err(|_| ConfigError::Invalid { name: "SUMMARY_CACHE_SIZE", value })?,
			None => DEFAULT_CAPACITY,
		};
		let cache_capacity = if cache_enabled { cache_size } else { 0 };
		let openai = OpenAiSettings {
			api_key: var("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?,
			model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
			system_prompt: var("OPENAI_SYSTEM_PROMPT").unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_owned()),
		};

		Ok(Self { port, cache_capacity, openai })
	}
}

fn parse_flag(value: &str) -> Option<bool> {
	match value.to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" => Some(false),
		_ => None,
	}
}
