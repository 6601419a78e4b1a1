use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

pub mod agents;
mod json;
pub mod providers;

pub use agents::*;
pub use providers::*;

#[derive(Debug, Clone)]
pub enum LlmProvider {
    OpenAI { api_key: String, model: String },
    /// Any OpenAI-compatible server (LM Studio, Ollama, llama.cpp)
    Local { url: String, model: String },
}

/// Failures talking to a model endpoint
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("LLM endpoint returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("LLM request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("LLM returned an empty response")]
    EmptyResponse,
}

pub type LlmResult<T> = std::result::Result<T, LlmError>;

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub system_prompt: Option<String>,
}

impl CompletionRequest {
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            max_tokens: None,
            temperature: None,
            system_prompt: None,
        }
    }

    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn system_prompt(mut self, prompt: &str) -> Self {
        self.system_prompt = Some(prompt.to_string());
        self
    }
}

#[derive(Clone)]
pub struct LlmClient {
    provider: LlmProvider,
    client: reqwest::Client,
    max_tokens: u32,
    temperature: f32,
}

// OpenAI-compatible API types
#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIChatResponse {
    choices: Vec<OpenAIChatChoice>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIChatChoice {
    message: OpenAIMessage,
}

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

impl LlmClient {
    pub fn new(provider: LlmProvider, max_tokens: u32, temperature: f32) -> Self {
        Self {
            provider,
            client: build_http_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_tokens,
            temperature,
        }
    }

    /// Request timeout enforced by the HTTP client
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_http_client(timeout);
        self
    }

    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let provider_type = env::var("LLM_PROVIDER").unwrap_or_else(|_| "openai".to_string());
        let max_tokens = env::var("MAX_TOKENS")
            .unwrap_or_else(|_| "512".to_string())
            .parse::<u32>()
            .unwrap_or(512);
        let temperature = env::var("TEMPERATURE")
            .unwrap_or_else(|_| "0.2".to_string())
            .parse::<f32>()
            .unwrap_or(0.2);
        let timeout = env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let provider = match provider_type.as_str() {
            "openai" => {
                let api_key = env::var("OPENAI_API_KEY")
                    .map_err(|_| anyhow!("OPENAI_API_KEY is not set"))?;
                let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
                LlmProvider::OpenAI { api_key, model }
            }
            "local" => {
                let url = env::var("LOCAL_LLM_URL")
                    .unwrap_or_else(|_| "http://localhost:1234/v1".to_string());
                let model = env::var("LOCAL_LLM_MODEL")
                    .unwrap_or_else(|_| "llama-3.2-3b-instruct".to_string());
                LlmProvider::Local { url, model }
            }
            _ => return Err(anyhow!("Unsupported LLM_PROVIDER: {}", provider_type)),
        };

        Ok(Self::new(provider, max_tokens, temperature).with_timeout(Duration::from_secs(timeout)))
    }

    pub fn provider_name(&self) -> &'static str {
        match &self.provider {
            LlmProvider::OpenAI { .. } => "OpenAI",
            LlmProvider::Local { .. } => "Local",
        }
    }

    pub fn model(&self) -> &str {
        match &self.provider {
            LlmProvider::OpenAI { model, .. } | LlmProvider::Local { model, .. } => model,
        }
    }

    pub async fn complete(&self, request: CompletionRequest) -> LlmResult<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system_prompt {
            messages.push(OpenAIMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        messages.push(OpenAIMessage {
            role: "user".to_string(),
            content: request.prompt.clone(),
        });

        let body = OpenAIChatRequest {
            model: self.model().to_string(),
            messages,
            max_tokens: Some(request.max_tokens.unwrap_or(self.max_tokens)),
            temperature: Some(request.temperature.unwrap_or(self.temperature)),
        };

        self.chat_completions(&body).await
    }

    pub async fn chat_simple(&self, message: &str) -> LlmResult<String> {
        self.complete(CompletionRequest::new(message)).await
    }

    async fn chat_completions(&self, body: &OpenAIChatRequest) -> LlmResult<String> {
        let (endpoint, api_key) = match &self.provider {
            LlmProvider::OpenAI { api_key, .. } => (
                format!("{}/chat/completions", OPENAI_BASE_URL),
                Some(api_key.as_str()),
            ),
            LlmProvider::Local { url, .. } => (
                format!("{}/chat/completions", url.trim_end_matches('/')),
                None,
            ),
        };

        info!("🚀 Sending request to {}: {}", self.provider_name(), body.model);
        debug!(endpoint = %endpoint, "Request prompt: {:?}", body.messages.last().map(|m| &m.content));

        let mut builder = self
            .client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .json(body);
        if let Some(key) = api_key {
            builder = builder.header("Authorization", format!("Bearer {key}"));
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "{} API error: {}", self.provider_name(), body);
            return Err(LlmError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: OpenAIChatResponse = response.json().await?;
        match chat_response.choices.into_iter().next() {
            Some(choice) if !choice.message.content.trim().is_empty() => {
                info!("✅ Response received from {}", self.provider_name());
                Ok(choice.message.content)
            }
            _ => Err(LlmError::EmptyResponse),
        }
    }
}

fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            error!("Failed to build HTTP client with timeout, using defaults: {}", e);
            reqwest::Client::new()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_completion_request_builder() {
        let request = CompletionRequest::new("describe")
            .max_tokens(64)
            .temperature(0.1)
            .system_prompt("You are a soil scientist");
        assert_eq!(request.max_tokens, Some(64));
        assert_eq!(request.temperature, Some(0.1));
        assert_eq!(request.system_prompt.as_deref(), Some("You are a soil scientist"));
    }

    #[test]
    fn test_provider_metadata() {
        let client = LlmClient::new(
            LlmProvider::Local {
                url: "http://localhost:1234/v1".to_string(),
                model: "llama".to_string(),
            },
            256,
            0.2,
        );
        assert_eq!(client.provider_name(), "Local");
        assert_eq!(client.model(), "llama");
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unknown_provider() {
        env::set_var("LLM_PROVIDER", "carrier-pigeon");
        let result = LlmClient::from_env();
        env::remove_var("LLM_PROVIDER");
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_local_provider() {
        env::set_var("LLM_PROVIDER", "local");
        env::set_var("LOCAL_LLM_MODEL", "qwen2.5");
        let client = LlmClient::from_env().unwrap();
        env::remove_var("LLM_PROVIDER");
        env::remove_var("LOCAL_LLM_MODEL");
        assert_eq!(client.provider_name(), "Local");
        assert_eq!(client.model(), "qwen2.5");
    }
}
