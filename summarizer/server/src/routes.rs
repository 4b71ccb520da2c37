use crate::{AppState, error::ServerAppError};
use axum::{
	Json, Router,
	body::Bytes,
	extract::State,
	http::{HeaderMap, header},
	routing::{get, post},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use common::{PageRequest, SummaryResponse, TextRequest};
use serde::de::DeserializeOwned;
use url::Url;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/", get(answer_to_everything))
		.route("/summarize", post(summarize_handler))
		.route("/page", post(page_handler))
		.with_state(state)
}

async fn answer_to_everything() -> &'static str {
	"42"
}

async fn summarize_handler(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Json<SummaryResponse>, ServerAppError> {
	let payload: TextRequest = decode_body(&headers, &body)?;
	let summary = state.summarize_text(&payload.text, &payload.options).await?;
	Ok(Json(SummaryResponse { summary }))
}

async fn page_handler(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Json<SummaryResponse>, ServerAppError> {
	let payload: PageRequest = decode_body(&headers, &body)?;
	let url = Url::parse(payload.url.trim())?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(ServerAppError::BadRequest(format!("unsupported scheme: {}", url.scheme())));
	}
	let summary = state.summarize_page(&url, &payload.options).await?;
	Ok(Json(SummaryResponse { summary }))
}

/// Parses a JSON body, base64 decoding it first when `Content-Encoding: base64` is set.
///
/// Decoded bytes outside ASCII are dropped before parsing.
fn decode_body<T: DeserializeOwned>(headers: &HeaderMap, body: &[u8]) -> Result<T, ServerAppError> {
	let base64_encoded = headers
		.get(header::CONTENT_ENCODING)
		.and_then(|value| value.to_str().ok())
		.is_some_and(|value| value.trim().eq_ignore_ascii_case("base64"));
	if !base64_encoded {
		return Ok(serde_json::from_slice(body)?);
	}
	let decoded = STANDARD.decode(body.trim_ascii())?;
	let ascii: Vec<u8> = decoded.into_iter().filter(u8::is_ascii).collect();
	Ok(serde_json::from_slice(&ascii)?)
}
