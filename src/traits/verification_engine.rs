use std::path::Path;
use std::time::Duration;
use async_trait::async_trait;

use crate::models::verification::VerificationOutcome;

/// Trait for checking a generated design against a reference testbench
#[async_trait]
pub trait VerificationEngine: Send + Sync {
    /// Compile `source` together with `testbench`, simulate, and classify the result.
    ///
    /// `timeout` bounds the simulation stage only.
    async fn verify(
        &self,
        source: &Path,
        testbench: &Path,
        timeout: Duration,
    ) -> VerificationOutcome;

    /// Name of the underlying toolchain
    fn toolchain_name(&self) -> &str;
}

/// Availability of one external executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    pub program: String,
    /// First line the tool printed when probed, or why it could not be launched
    pub detail: String,
    pub available: bool,
}
