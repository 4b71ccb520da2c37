use common::{AppError, SummarizeInput, SummaryOptions, read_summary};
use dioxus::logger::tracing::{debug, error};
use reqwest::Client;

const SERVER_URL: &str = env!("SERVER_URL");

fn server_base() -> String {
	if !SERVER_URL.is_empty() {
		return SERVER_URL.trim_end_matches('/').to_owned();
	}
	web_sys::window().and_then(|w| w.location().origin().ok()).unwrap_or_default()
}

/// POSTs the input to the endpoint matching its kind and returns the summary text.
pub(crate) async fn fetch_summary(input: &SummarizeInput) -> Result<String, AppError> {
	let url = format!("{}{}", server_base(), input.endpoint());
	debug!(kind = %input.kind(), %url, "requesting summary");

	let res = Client::new().post(&url).json(&input.to_request(SummaryOptions::default())).send().await.map_err(|e| {
		error!("summarize request failed: {e}");
		AppError::Network
	})?;

	let status = res.status().as_u16();
	let body = res.text().await.map_err(|e| AppError::InvalidResponse(e.to_string()))?;
	read_summary(status, &body)
}
