use crate::{config::OpenAiSettings, error::ServerAppError};
use async_openai::{
	Client as OpenAIClient,
	config::OpenAIConfig,
	types::{ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
};
use async_trait::async_trait;
use common::SummaryOptions;

#[async_trait]
pub trait Summarizer: Send + Sync {
	async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String, ServerAppError>;
}

/// Summaries from an OpenAI chat completion model.
///
/// `max_length` caps the completion tokens, `min_length` is stated in the system prompt and
/// `do_sample = false` pins the temperature to zero.
#[derive(Clone)]
pub struct OpenAiSummarizer {
	client: OpenAIClient<OpenAIConfig>,
	model: String,
	system_prompt: String,
}

impl OpenAiSummarizer {
	pub fn new(settings: &OpenAiSettings) -> Self {
		Self {
			client: OpenAIClient::with_config(OpenAIConfig::new().with_api_key(&settings.api_key)),
			model: settings.model.clone(),
			system_prompt: settings.system_prompt.clone(),
		}
	}

	fn prompt(&self, options: &SummaryOptions) -> String {
		format!("{}\nUse at least {} words.", self.system_prompt, options.min_length)
	}
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
	async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String, ServerAppError> {
		let messages: Vec<ChatCompletionRequestMessage> = vec![
			ChatCompletionRequestSystemMessageArgs::default().content(self.prompt(options)).build()?.into(),
			ChatCompletionRequestUserMessageArgs::default().content(text).build()?.into(),
		];
		let request = CreateChatCompletionRequestArgs::default()
			.model(&self.model)
			.max_completion_tokens(options.max_length)
			.temperature(if options.do_sample { 1.0 } else { 0.0 })
			.messages(messages)
			.build()?;

		let response = self.client.chat().create(request).await?;
		response
			.choices
			.into_iter()
			.next()
			.and_then(|choice| choice.message.content)
			.map(|summary| summary.trim().to_owned())
			.filter(|summary| !summary.is_empty())
			.ok_or(ServerAppError::SummaryGenerationError)
	}
}
