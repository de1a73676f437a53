use colored::*;
use console::Term;
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;
use textwrap::wrap;

use hdlbench::{ ToolStatus, VerificationOutcome };

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text wrapped to the terminal width
pub fn print_text(text: &str) {
    let width = (Term::stdout().size().1 as usize).max(40);
    for line in text.lines() {
        if line.is_empty() {
            println!();
            continue;
        }
        for wrapped_line in wrap(line, width.saturating_sub(4)) {
            println!("{}", wrapped_line);
        }
    }
}

/// Print source code unwrapped, with a dimmed gutter
pub fn print_code(code: &str) {
    for (number, line) in code.lines().enumerate() {
        println!("{} {}", format!("{:>4} |", number + 1).dimmed(), line);
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print a verification outcome with color, followed by the tool output
pub fn print_outcome(outcome: &VerificationOutcome) {
    let status = match outcome {
        VerificationOutcome::Verdict { passed: true, .. } => format!("✓ {}", outcome).green().bold(),
        VerificationOutcome::Verdict { .. } => format!("✗ {}", outcome).red().bold(),
        VerificationOutcome::SimulationTimeout { .. } => format!("⏱ {}", outcome).yellow().bold(),
        VerificationOutcome::CompileFailure { .. } => format!("✗ {}", outcome).red().bold(),
        VerificationOutcome::ToolMissing { .. } => format!("⚠ {}", outcome).red().bold(),
    };
    println!("{}", status);

    let output = outcome.output().trim();
    if !output.is_empty() && !matches!(outcome, VerificationOutcome::ToolMissing { .. }) {
        println!("\n{}", "Tool output:".bold());
        print_text(output);
    }
}

/// Final pass/fail banner
pub fn print_banner(passed: bool) {
    let line = "=".repeat(60);
    println!("\n{}", line);
    if passed {
        println!("{}", "✅ TEST PASSED!".green().bold());
    } else {
        println!("{}", "❌ TEST FAILED".red().bold());
    }
    println!("{}", line);
}

/// Print one line per probed executable
pub fn print_tool_status(status: &ToolStatus) {
    if status.available {
        println!("{} {}: {}", "✓".green().bold(), status.program.bold(), status.detail);
    } else {
        println!("{} {}: {}", "✗".red().bold(), status.program.bold(), status.detail);
    }
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
