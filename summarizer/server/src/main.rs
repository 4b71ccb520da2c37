use anyhow::Context;
use server::{
	AppState,
	cache::SummaryCache,
	config::ServerConfig,
	fetch::HttpFetcher,
	router,
	summarizer::OpenAiSummarizer,
};
use std::{net::SocketAddr, sync::Arc};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let dotenv = dotenvy::dotenv();
	tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))).init();
	if let Err(e) = dotenv {
		debug!("No .env file loaded: {e}");
	}

	let config = ServerConfig::from_env()?;
	let state = AppState::builder()
		.summarizer(Arc::new(OpenAiSummarizer::new(&config.openai)))
		.fetcher(Arc::new(HttpFetcher::new().context("failed to build HTTP client")?))
		.cache(Arc::new(SummaryCache::new(config.cache_capacity)))
		.build();

	let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
	let listener = tokio::net::TcpListener::bind(addr).await.with_context(|| format!("failed to bind {addr}"))?;
	info!(model = %config.openai.model, cache = config.cache_capacity, "Server listening on {}", addr);
	axum::serve(listener, router(state)).await?;
	Ok(())
}
