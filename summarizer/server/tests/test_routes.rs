use {
	async_trait::async_trait,
	base64::{Engine, engine::general_purpose::STANDARD},
	common::{ErrorResponse, SummaryOptions, SummaryResponse},
	reqwest::StatusCode,
	serde_json::json,
	server::{AppState, MAX_INPUT_CHARS, error::ServerAppError, fetch::HttpFetcher, router, summarizer::Summarizer},
	std::sync::{Arc, Mutex},
	tokio::{net::TcpListener, test},
	wiremock::{
		Mock, MockServer, ResponseTemplate,
		matchers::{method, path},
	},
};

const FOX: &str = "The quick brown fox jumps over the lazy dog.";
const SUMMARY: &str = "A fox jumps.";

// records every call and answers with a fixed summary
#[derive(Default)]
struct StubSummarizer {
	calls: Mutex<Vec<(String, SummaryOptions)>>,
}

impl StubSummarizer {
	fn calls(&self) -> Vec<(String, SummaryOptions)> {
		self.calls.lock().unwrap().clone()
	}
}

#[async_trait]
impl Summarizer for StubSummarizer {
	async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String, ServerAppError> {
		self.calls.lock().unwrap().push((text.to_owned(), *options));
		Ok(SUMMARY.to_owned())
	}
}

struct TestServer {
	base: String,
	summarizer: Arc<StubSummarizer>,
	client: reqwest::Client,
}

impl TestServer {
	async fn start() -> Self {
		let summarizer = Arc::new(StubSummarizer::default());
		let state = AppState::builder().summarizer(summarizer.clone()).fetcher(Arc::new(HttpFetcher::new().unwrap())).build();
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			axum::serve(listener, router(state)).await.unwrap();
		});
		Self { base: format!("http://{addr}"), summarizer, client: reqwest::Client::new() }
	}

	async fn post(&self, endpoint: &str, body: serde_json::Value) -> reqwest::Response {
		self.client.post(format!("{}{endpoint}", self.base)).json(&body).send().await.unwrap()
	}
}

async fn page_server(html: &str) -> MockServer {
	let mock = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/article"))
		.respond_with(ResponseTemplate::new(200).set_body_raw(html.to_owned(), "text/html"))
		.mount(&mock)
		.await;
	mock
}

#[test]
async fn root_answers_42() {
	let server = TestServer::start().await;
	let body = reqwest::get(format!("{}/", server.base)).await.unwrap().text().await.unwrap();
	assert_eq!(body, "42");
}

#[test]
async fn summarize_text() {
	let server = TestServer::start().await;
	let res = server.post("/summarize", json!({ "max_length": 100, "min_length": 10, "do_sample": false, "text": FOX })).await;
	assert_eq!(res.status(), StatusCode::OK);
	assert_eq!(res.json::<SummaryResponse>().await.unwrap().summary, SUMMARY);
	assert_eq!(server.summarizer.calls(), vec![(FOX.to_owned(), SummaryOptions { max_length: 100, ..SummaryOptions::default() })]);
}

#[test]
async fn summarize_installs_default_options() {
	let server = TestServer::start().await;
	let res = server.post("/summarize", json!({ "text": FOX })).await;
	assert_eq!(res.status(), StatusCode::OK);
	assert_eq!(server.summarizer.calls(), vec![(FOX.to_owned(), SummaryOptions::default())]);
}

#[test]
async fn summarize_with_base64() {
	let server = TestServer::start().await;
	let encoded = STANDARD.encode(json!({ "max_length": 100, "min_length": 10, "do_sample": false, "text": FOX }).to_string());
	let res = server
		.client
		.post(format!("{}/summarize", server.base))
		.header("Content-Type", "application/octet-stream")
		.header("Content-Encoding", "base64")
		.body(encoded)
		.send()
		.await
		.unwrap();
	assert_eq!(res.status(), StatusCode::OK);
	assert_eq!(res.json::<SummaryResponse>().await.unwrap().summary, SUMMARY);
	assert_eq!(server.summarizer.calls()[0].0, FOX);
}

#[test]
async fn long_text_is_truncated() {
	let server = TestServer::start().await;
	let text = "x".repeat(MAX_INPUT_CHARS + 500);
	server.post("/summarize", json!({ "text": text })).await;
	assert_eq!(server.summarizer.calls()[0].0.len(), MAX_INPUT_CHARS);
}

#[test]
async fn texts_equal_up_to_the_limit_share_a_cache_entry() {
	let server = TestServer::start().await;
	let prefix = "y".repeat(MAX_INPUT_CHARS);
	server.post("/summarize", json!({ "text": format!("{prefix} first tail") })).await;
	let res = server.post("/summarize", json!({ "text": format!("{prefix} another tail") })).await;
	assert_eq!(res.json::<SummaryResponse>().await.unwrap().summary, SUMMARY);
	assert_eq!(server.summarizer.calls().len(), 1);
}

#[test]
async fn malformed_body_is_rejected() {
	let server = TestServer::start().await;
	let res = server.post("/summarize", json!({ "url": "https://example.com" })).await;
	assert_eq!(res.status(), StatusCode::BAD_REQUEST);
	assert!(res.json::<ErrorResponse>().await.unwrap().error.starts_with("Malformed request"));
	assert!(server.summarizer.calls().is_empty());
}

#[test]
async fn repeated_text_is_served_from_cache() {
	let server = TestServer::start().await;
	for _ in 0..2 {
		let res = server.post("/summarize", json!({ "text": FOX })).await;
		assert_eq!(res.json::<SummaryResponse>().await.unwrap().summary, SUMMARY);
	}
	assert_eq!(server.summarizer.calls().len(), 1);

	server.post("/summarize", json!({ "text": FOX, "no_cache": true })).await;
	assert_eq!(server.summarizer.calls().len(), 2);
}

#[test]
async fn summarize_a_page() {
	let pages = page_server(&format!("<html><body><p>{FOX}</p></body></html>")).await;
	let server = TestServer::start().await;
	let res = server.post("/page", json!({ "max_length": 100, "min_length": 10, "do_sample": false, "url": format!("{}/article", pages.uri()) })).await;
	assert_eq!(res.status(), StatusCode::OK);
	assert_eq!(res.json::<SummaryResponse>().await.unwrap().summary, SUMMARY);
	assert_eq!(server.summarizer.calls(), vec![(FOX.to_owned(), SummaryOptions { max_length: 100, ..SummaryOptions::default() })]);
}

#[test]
async fn summarize_a_page_with_article() {
	let pages = page_server(&format!("<html><body><div>Headers here</div><article>{FOX}</article></body></html>")).await;
	let server = TestServer::start().await;
	let res = server.post("/page", json!({ "url": format!("{}/article", pages.uri()) })).await;
	assert_eq!(res.status(), StatusCode::OK);
	assert_eq!(server.summarizer.calls()[0].0, FOX);
}

#[test]
async fn page_without_text_is_unprocessable() {
	let pages = page_server("<html><body><script>var x;</script></body></html>").await;
	let server = TestServer::start().await;
	let res = server.post("/page", json!({ "url": format!("{}/article", pages.uri()) })).await;
	assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
	assert!(server.summarizer.calls().is_empty());
}

#[test]
async fn missing_page_is_a_bad_gateway() {
	let pages = MockServer::start().await;
	Mock::given(method("GET")).respond_with(ResponseTemplate::new(404)).mount(&pages).await;
	let server = TestServer::start().await;
	let res = server.post("/page", json!({ "url": format!("{}/gone", pages.uri()) })).await;
	assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
	assert!(res.json::<ErrorResponse>().await.unwrap().error.starts_with("Could not fetch the page"));
}

#[test]
async fn non_http_urls_are_rejected() {
	let server = TestServer::start().await;
	for url in ["ftp://example.com/file", "not a url"] {
		let res = server.post("/page", json!({ "url": url })).await;
		assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{url}");
	}
}
