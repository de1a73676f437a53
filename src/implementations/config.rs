use serde::{ Deserialize, Serialize };
use std::collections::HashMap;
use thiserror::Error;

use crate::errors::{ HarnessError, HarnessResult };

/// Environment variable holding a single API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable holding a comma-separated list of API keys
pub const API_KEYS_VAR: &str = "OPENAI_API_KEYS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// API key for the completion service; environment variables are used when absent
    pub api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API
    pub api_base: String,

    /// Upper bound on a single completion request, in seconds
    pub request_timeout_secs: u64,

    pub temperature: Option<f32>,

    pub max_tokens: Option<usize>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: "https://api.openai.com/v1".to_string(),
            request_timeout_secs: 30,
            temperature: None,
            max_tokens: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Configuration for the completion service
    pub api: ApiConfig,

    /// Prompt templates keyed by task name
    pub prompt_templates: HashMap<String, String>,
}

impl GeneratorConfig {
    /// Resolve the API key from the config, then from the process environment
    pub fn get_api_key(&self) -> HarnessResult<String> {
        self.resolve_api_key(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using `lookup` for environment access.
    ///
    /// Order: `api_key` in the config, `OPENAI_API_KEY`, then the first
    /// entry of the comma-separated `OPENAI_API_KEYS`. A blank first entry
    /// counts as no credential.
    pub fn resolve_api_key<F>(&self, lookup: F) -> HarnessResult<String>
        where F: Fn(&str) -> Option<String>
    {
        use log::debug;

        if let Some(api_key) = self.api.api_key.as_deref().map(str::trim) {
            if !api_key.is_empty() {
                debug!("Using API key from config");
                return Ok(api_key.to_string());
            }
        }

        if let Some(key) = lookup(API_KEY_VAR) {
            let key = key.trim();
            if !key.is_empty() {
                debug!("Using API key from {}", API_KEY_VAR);
                return Ok(key.to_string());
            }
        }

        if let Some(keys) = lookup(API_KEYS_VAR) {
            let first = keys.split(',').next().map(str::trim).unwrap_or_default();
            if !first.is_empty() {
                debug!("Using first API key from {}", API_KEYS_VAR);
                return Ok(first.to_string());
            }
        }

        Err(
            HarnessError::MissingCredential(
                format!("set {} or {} in the environment or a .env file", API_KEY_VAR, API_KEYS_VAR)
            )
        )
    }

    /// Get the template for a specific task
    pub fn get_template(&self, template_name: &str) -> Option<String> {
        self.prompt_templates.get(template_name).cloned()
    }

    /// Render a template, replacing `{{key}}` placeholders with `params`
    pub fn render_template(
        &self,
        template_name: &str,
        params: &HashMap<&str, &str>
    ) -> Result<String, ConfigError> {
        let template = self
            .get_template(template_name)
            .ok_or_else(|| ConfigError::TemplateNotFound(template_name.to_string()))?;

        let mut result = template;
        for (key, value) in params {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        Ok(result)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let mut prompt_templates = HashMap::new();
        prompt_templates.insert(
            "generation".to_string(),
            r#"{{description}}

Please generate complete Verilog code for this module. Include all necessary logic.
Only output the Verilog code, wrapped in ```verilog ``` code block."#.to_string(),
        );

        GeneratorConfig {
            api: ApiConfig::default(),
            prompt_templates,
        }
    }
}
