use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use common::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerAppError {
	#[error("Malformed request: {0}")]
	BadRequest(String),
	#[error("Could not fetch the page: {0}")]
	Fetch(#[from] reqwest::Error),
	#[error("OpenAI API error: {0}")]
	OpenAIError(#[from] async_openai::error::OpenAIError),
	#[error("Could not find any main content on this page to summarize.")]
	NoContent,
	#[error("Failed to generate summary")]
	SummaryGenerationError,
}

impl From<serde_json::Error> for ServerAppError {
	fn from(e: serde_json::Error) -> Self {
		Self::BadRequest(e.to_string())
	}
}

impl From<base64::DecodeError> for ServerAppError {
	fn from(e: base64::DecodeError) -> Self {
		Self::BadRequest(format!("invalid base64 body: {e}"))
	}
}

impl From<url::ParseError> for ServerAppError {
	fn from(e: url::ParseError) -> Self {
		Self::BadRequest(format!("invalid url: {e}"))
	}
}

impl ServerAppError {
	pub fn status(&self) -> StatusCode {
		match self {
			Self::BadRequest(_) => StatusCode::BAD_REQUEST,
			Self::Fetch(_) | Self::OpenAIError(_) => StatusCode::BAD_GATEWAY,
			Self::NoContent => StatusCode::UNPROCESSABLE_ENTITY,
			Self::SummaryGenerationError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ServerAppError {
	fn into_response(self) -> Response {
		let status = self.status();
		if status.is_server_error() {
			tracing::error!(%status, "{self}");
		} else {
			tracing::warn!(%status, "{self}");
		}
		(status, Json(ErrorResponse { error: self.to_string() })).into_response()
	}
}
