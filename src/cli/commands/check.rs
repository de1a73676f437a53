use anyhow::Result;

use hdlbench::{ IcarusVerifier, ToolchainConfig };

use crate::cli::ui;

/// Report whether the configured compiler and simulator can be launched
pub async fn execute(toolchain: &ToolchainConfig) -> Result<()> {
    ui::print_header("Toolchain Check");

    let verifier = IcarusVerifier::new(toolchain.clone());
    let spinner = ui::spinner_with_message("Probing compiler and simulator...");
    let statuses = verifier.check_tools().await;
    spinner.finish_and_clear();
    for status in &statuses {
        ui::print_tool_status(status);
    }

    if statuses.iter().all(|status| status.available) {
        ui::print_success("Toolchain is ready");
    } else {
        ui::print_warning(&toolchain.install_hint);
    }

    Ok(())
}
