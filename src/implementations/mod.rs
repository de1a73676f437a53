pub mod config;
pub mod code_extractor;
pub mod completion;
pub mod code_generator;
pub mod icarus;
pub mod pipeline;

pub use code_extractor::{ extract, extract_hdl_code, Extraction, ExtractionRule };
pub use code_generator::LLMCodeGenerator;
pub use completion::OpenAICompletionService;
pub use icarus::IcarusVerifier;
pub use pipeline::{ Pipeline, PipelineReport, PipelineStage, PipelineStatus };
