use crate::error::ServerAppError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait PageFetcher: Send + Sync {
	/// Returns the page body as text.
	async fn fetch(&self, url: &Url) -> Result<String, ServerAppError>;
}

#[derive(Clone)]
pub struct HttpFetcher {
	client: Client,
}

impl HttpFetcher {
	pub fn new() -> Result<Self, reqwest::Error> {
		let client = Client::builder().user_agent(concat!("summarizer/", env!("CARGO_PKG_VERSION"))).timeout(FETCH_TIMEOUT).build()?;
		Ok(Self { client })
	}
}

#[async_trait]
impl PageFetcher for HttpFetcher {
	async fn fetch(&self, url: &Url) -> Result<String, ServerAppError> {
		tracing::debug!(%url, "fetching page");
		let res = self.client.get(url.clone()).send().await?.error_for_status()?;
		Ok(res.text().await?)
	}
}
