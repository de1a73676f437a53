use anyhow::{ anyhow, Result };
use std::path::Path;
use std::time::Duration;

use hdlbench::{ IcarusVerifier, ToolchainConfig, VerificationEngine };

use crate::cli::ui;

/// Verify an existing source file without calling a model
pub async fn execute(
    toolchain: &ToolchainConfig,
    source: &Path,
    testbench: &Path,
    timeout: Duration
) -> Result<()> {
    ui::print_header("Verifying Design");

    for path in [source, testbench] {
        if !path.is_file() {
            return Err(anyhow!("File not found: {}", path.display()));
        }
    }

    ui::print_result("Source", &source.display().to_string());
    ui::print_result("Testbench", &testbench.display().to_string());

    let verifier = IcarusVerifier::new(toolchain.clone());
    ui::print_info(&format!("Compiling and simulating with {}", verifier.toolchain_name()));
    let outcome = verifier.verify(source, testbench, timeout).await;

    ui::print_outcome(&outcome);
    ui::print_banner(outcome.passed());

    Ok(())
}
