pub mod task;
pub mod generation;
pub mod verification;
pub mod artifact;

// Re-export common model types
pub use task::{DesignTask, TaskPaths};
pub use generation::GenerationResult;
pub use verification::VerificationOutcome;
pub use artifact::{Artifacts, RunRecord};
