use async_trait::async_trait;

use crate::errors::CompletionError;

/// A service that turns a single prompt into a single completion
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send `prompt` as one user message to `model` and return the completion text
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError>;

    /// Short provider name used in log lines
    fn provider_name(&self) -> &str;
}
