use async_trait::async_trait;
use log::{ debug, error, info, warn };
use std::collections::HashMap;
use std::time::Instant;

use crate::implementations::code_extractor::{ self, ExtractionRule };
use crate::implementations::config::GeneratorConfig;
use crate::models::generation::GenerationResult;
use crate::traits::code_generator::CodeGenerator;
use crate::traits::completion_service::CompletionService;

/// Name of the prompt template used for design generation
pub const GENERATION_TEMPLATE: &str = "generation";

/// Generates Verilog through an injected completion service
pub struct LLMCodeGenerator<S> {
    service: S,
    config: GeneratorConfig,
}

impl<S: CompletionService> LLMCodeGenerator<S> {
    pub fn new(service: S, config: GeneratorConfig) -> Self {
        Self { service, config }
    }

    /// Build the instruction prompt for one design
    pub fn build_prompt(&self, description: &str, module_name: &str) -> String {
        let params = HashMap::from([
            ("description", description),
            ("module_name", module_name),
        ]);

        match self.config.render_template(GENERATION_TEMPLATE, &params) {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!("{}; using the built-in generation prompt", e);
                GeneratorConfig::default()
                    .render_template(GENERATION_TEMPLATE, &params)
                    .unwrap_or_else(|_| description.to_string())
            }
        }
    }
}

#[async_trait]
impl<S: CompletionService> CodeGenerator for LLMCodeGenerator<S> {
    async fn generate(
        &self,
        model_name: &str,
        description: &str,
        module_name: &str
    ) -> Option<GenerationResult> {
        let prompt = self.build_prompt(description, module_name);

        info!("Calling {} to generate module {}", model_name, module_name);

        let start = Instant::now();
        let raw_response = match self.service.complete(model_name, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!("LLM call via {} failed: {}", self.service.provider_name(), e);
                return None;
            }
        };
        let duration = start.elapsed();

        info!("Response received in {:.2}s", duration.as_secs_f64());

        let extraction = code_extractor::extract(&raw_response);
        if extraction.rule == ExtractionRule::WholeText {
            debug!("No fenced Verilog block found, keeping the whole response");
        } else {
            debug!("Extracted {} characters via {:?}", extraction.code.len(), extraction.rule);
        }

        Some(GenerationResult {
            raw_response,
            extracted_source: extraction.code,
            model_name: model_name.to_string(),
            duration,
            extraction_rule: extraction.rule,
        })
    }
}
