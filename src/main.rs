use anyhow::Result;
use clap::Parser;
use log::{ debug, info };
use std::time::Duration;

use hdlbench::{ ErrorSeverity, HarnessConfig, HarnessError };

mod cli;
use cli::{ Commands, HarnessCli };

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = HarnessCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if dotenv::dotenv().is_ok() {
        debug!("Loaded environment from .env");
    }

    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            HarnessConfig::from_file(path).map_err(|e| exit_on_fatal(e.into()))?
        }
        None => HarnessConfig::default(),
    };

    match &cli.command {
        Commands::Run { model, module, category, benchmark_root, output_dir, timeout } => {
            if let Some(category) = category {
                config.benchmark.category = category.clone();
            }
            if let Some(root) = benchmark_root {
                config.benchmark.root = root.clone();
            }
            if let Some(dir) = output_dir {
                config.output_root = dir.clone();
            }
            if let Some(secs) = timeout {
                config.toolchain.simulation_timeout_secs = *secs;
            }

            // The credential is a precondition: nothing is read or sent without it.
            let api_key = config.llm.get_api_key().map_err(exit_on_fatal)?;

            cli::commands::run::execute(&config, api_key, model, module).await?;
        }

        Commands::Verify { source, testbench, timeout } => {
            let limit = timeout
                .map(Duration::from_secs)
                .unwrap_or_else(|| config.toolchain.simulation_timeout());
            cli::commands::verify::execute(&config.toolchain, source, testbench, limit).await?;
        }

        Commands::Extract { input, output } => {
            cli::commands::extract::execute(input, output.as_deref()).await?;
        }

        Commands::Check => {
            cli::commands::check::execute(&config.toolchain).await?;
        }
    }

    Ok(())
}

/// Report `error`; fatal errors end the process with status 1
fn exit_on_fatal(error: HarnessError) -> anyhow::Error {
    cli::ui::print_error(&error.to_string());
    if error.severity() == ErrorSeverity::Fatal {
        std::process::exit(1);
    }
    error.into()
}

fn setup_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
