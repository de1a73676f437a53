use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "hdlbench",
    about = "Generate Verilog with a language model and check it against a testbench",
    version,
    author,
    long_about = None
)]
pub struct HarnessCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate, extract and verify one benchmark module
    Run {
        /// Model identifier sent to the completion service
        #[arg(short, long, default_value = "gpt-4o-mini")]
        model: String,

        /// Benchmark module to generate
        #[arg(long, default_value = "adder_8bit")]
        module: String,

        /// Benchmark category containing the module
        #[arg(long)]
        category: Option<String>,

        /// Root directory of the benchmark suite
        #[arg(short, long)]
        benchmark_root: Option<PathBuf>,

        /// Directory receiving per-model artifacts
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Simulation timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// Verify an existing Verilog source against a testbench
    Verify {
        /// Verilog source file
        #[arg(short, long)]
        source: PathBuf,

        /// Reference testbench
        #[arg(short = 'b', long)]
        testbench: PathBuf,

        /// Simulation timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// Extract Verilog from a saved model response
    Extract {
        /// File containing the raw response
        #[arg(short, long)]
        input: PathBuf,

        /// Write the extracted code here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that the compiler and simulator can be launched
    Check,
}
