pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ BenchmarkConfig, HarnessConfig, ToolchainConfig };
pub use errors::{ CompletionError, ErrorSeverity, HarnessError, HarnessResult, InputKind };
pub use implementations::{
    code_extractor::{ extract, extract_hdl_code, Extraction, ExtractionRule },
    code_generator::LLMCodeGenerator,
    completion::OpenAICompletionService,
    config::{ ApiConfig, ConfigError, GeneratorConfig },
    icarus::IcarusVerifier,
    pipeline::{ Pipeline, PipelineReport, PipelineStage, PipelineStatus },
};
pub use models::{
    artifact::{ Artifacts, RunRecord },
    generation::GenerationResult,
    task::{ DesignTask, TaskPaths },
    verification::VerificationOutcome,
};
pub use traits::{ CodeGenerator, CompletionService, ToolStatus, VerificationEngine };
