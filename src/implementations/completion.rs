use async_trait::async_trait;
use log::{ debug, info, warn };
use serde::{ Deserialize, Serialize };
use std::time::Duration;

use crate::errors::CompletionError;
use crate::implementations::config::ApiConfig;
use crate::traits::completion_service::CompletionService;

/// OpenAI API request and response types
#[derive(Debug, Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatResponseChoice>,
}

/// Client for OpenAI-compatible chat-completion endpoints.
///
/// Each call sends exactly one user message and waits at most
/// `request_timeout_secs`; there is no retry.
#[derive(Clone)]
pub struct OpenAICompletionService {
    api: ApiConfig,
    api_key: String,
    http_client: reqwest::Client,
}

impl OpenAICompletionService {
    pub fn new(api: ApiConfig, api_key: String) -> Result<Self, CompletionError> {
        let http_client = reqwest::Client
            ::builder()
            .build()
            .map_err(|e| CompletionError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api,
            api_key,
            http_client,
        })
    }

    /// Full URL of the chat-completions endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionService for OpenAICompletionService {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError> {
        let endpoint = self.endpoint();
        let timeout_secs = self.api.request_timeout_secs;

        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.api.temperature,
            max_tokens: self.api.max_tokens,
        };

        info!("Making completion request to {}", self.provider_name());
        debug!("API endpoint: {}", endpoint);
        debug!("Model: {}", model);
        debug!("Prompt length: {} characters", prompt.len());

        let response = self.http_client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .timeout(Duration::from_secs(timeout_secs))
            .json(&request)
            .send().await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("Request timed out after {}s", timeout_secs);
                    return CompletionError::Timeout(timeout_secs);
                }
                if e.is_connect() {
                    warn!("Connection error - check network connectivity");
                }
                CompletionError::NetworkError(format!("Network error when calling {}: {}", endpoint, e))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text().await
                .unwrap_or_else(|_| "Failed to get error message".to_string());

            warn!("API error: HTTP {} - {}", status, error_text);
            return Err(CompletionError::HttpError {
                status,
                message: error_text,
            });
        }

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                return CompletionError::Timeout(timeout_secs);
            }
            CompletionError::ParseError(e.to_string())
        })?;

        debug!("Response length: {} characters", response_text.len());

        parse_chat_response(&response_text)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

/// Pull the first choice's message content out of a chat-completions body.
///
/// Blank content is returned as-is; only a missing choice or a null
/// `content` is an [`CompletionError::EmptyResponse`].
pub fn parse_chat_response(body: &str) -> Result<String, CompletionError> {
    let response: ChatResponse = serde_json
        ::from_str(body)
        .map_err(|e| CompletionError::ParseError(format!("Invalid JSON response: {}", e)))?;

    response.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(CompletionError::EmptyResponse)
}
