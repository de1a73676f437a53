use async_trait::async_trait;

use crate::models::generation::GenerationResult;

/// Trait for generating hardware designs from natural-language descriptions
#[async_trait]
pub trait CodeGenerator: Send + Sync {
    /// Ask `model_name` for an implementation of `module_name`.
    ///
    /// Returns `None` when the completion service fails; the failure is
    /// logged, not returned.
    async fn generate(
        &self,
        model_name: &str,
        description: &str,
        module_name: &str,
    ) -> Option<GenerationResult>;
}
