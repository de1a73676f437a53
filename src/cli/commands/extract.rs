use anyhow::{ anyhow, Result };
use std::fs;
use std::path::Path;

use hdlbench::{ extract, ExtractionRule };

use crate::cli::ui;

/// Apply the code extractor to a saved response
pub async fn execute(input: &Path, output: Option<&Path>) -> Result<()> {
    let text = fs
        ::read_to_string(input)
        .map_err(|e| anyhow!("Failed to read {}: {}", input.display(), e))?;

    let extraction = extract(&text);
    let rule = match extraction.rule {
        ExtractionRule::TaggedFence => "```verilog block",
        ExtractionRule::UntaggedFence => "untagged ``` block containing a module",
        ExtractionRule::WholeText => "whole response (no fenced block found)",
    };
    ui::print_result("Extracted from", rule);

    if extraction.code.is_empty() {
        ui::print_warning("Nothing to extract; the response is empty");
    }

    match output {
        Some(path) => {
            fs::write(path, &extraction.code)?;
            ui::print_success(&format!("Code written to {}", path.display()));
        }
        None => {
            println!();
            ui::print_code(&extraction.code);
        }
    }

    Ok(())
}
