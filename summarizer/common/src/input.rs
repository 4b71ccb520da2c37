use crate::api::{AppError, PageRequest, SummarizeRequest, SummaryOptions, TextRequest};
use strum::{AsRefStr, Display};

pub const TEXT_ENDPOINT: &str = "/summarize";
pub const PAGE_ENDPOINT: &str = "/page";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum InputKind {
	Text,
	Url,
}

/// Trimmed, non-empty user input together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeInput {
	kind: InputKind,
	value: String,
}

impl SummarizeInput {
	/// Returns `None` when nothing but whitespace was entered.
	pub fn parse(raw: &str) -> Option<Self> {
		Self::try_from(raw).ok()
	}

	pub fn kind(&self) -> InputKind {
		self.kind
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn endpoint(&self) -> &'static str {
		match self.kind {
			InputKind::Url => PAGE_ENDPOINT,
			InputKind::Text => TEXT_ENDPOINT,
		}
	}

	pub fn to_request(&self, options: SummaryOptions) -> SummarizeRequest {
		match self.kind {
			InputKind::Url => SummarizeRequest::Page(PageRequest { url: self.value.clone(), options }),
			InputKind::Text => SummarizeRequest::Text(TextRequest { text: self.value.clone(), options }),
		}
	}
}

impl TryFrom<&str> for SummarizeInput {
	type Error = AppError;

	fn try_from(raw: &str) -> Result<Self, Self::Error> {
		let value = raw.trim();
		if value.is_empty() {
			return Err(AppError::EmptyInput);
		}
		let kind = if has_http_scheme(value) { InputKind::Url } else { InputKind::Text };
		Ok(Self { kind, value: value.to_owned() })
	}
}

// Only the scheme prefix is inspected, the remainder is sent to the server as is.
fn has_http_scheme(value: &str) -> bool {
	["http://", "https://"].iter().any(|scheme| value.get(..scheme.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme)))
}
