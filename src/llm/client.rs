use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use std::time::Duration;
use tracing::debug;

const DEFAULT_TEMPERATURE: f32 = 0.7;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;

    /// Sends a single user prompt and returns the text of the first choice.
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            messages: vec![ChatMessage::user(prompt)],
        };

        let response = self.create_chat_completion(request).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or_else(|| Error::llm("Backend returned no choices"))
    }
}

/// A zero elapsed-time budget makes the first transient failure (429, 5xx)
/// permanent, so each prompt reaches the backend exactly once.
fn no_retry() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let http_client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let client = Client::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(no_retry());

        Ok(Self {
            client,
            model: config.model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        let mut messages = Vec::new();
        for msg in request.messages {
            messages.push(msg.to_openai_message()?);
        }

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature.unwrap_or(DEFAULT_TEMPERATURE));

        if let Some(max_tokens) = self.max_tokens {
            #[allow(deprecated)]
            request_builder.max_tokens(max_tokens);
        }

        let openai_request = request_builder.build()?;

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response from {} with {} choices",
            response.model,
            response.choices.len()
        );

        let choices = response
            .choices
            .into_iter()
            .map(|choice| ChatMessage {
                role: choice.message.role.to_string(),
                content: choice.message.content.unwrap_or_default(),
            })
            .collect();

        Ok(ChatCompletionResponse { choices })
    }
}
