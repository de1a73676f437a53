pub mod completion_service;
pub mod code_generator;
pub mod verification_engine;

// Re-export traits
pub use completion_service::CompletionService;
pub use code_generator::CodeGenerator;
pub use verification_engine::{VerificationEngine, ToolStatus};
