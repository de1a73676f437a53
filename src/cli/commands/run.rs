use anyhow::Result;

use hdlbench::{
    HarnessConfig,
    HarnessError,
    IcarusVerifier,
    LLMCodeGenerator,
    OpenAICompletionService,
    Pipeline,
    PipelineReport,
    PipelineStatus,
    TaskPaths,
};

use crate::cli::ui;

/// Full generate-extract-verify run for one benchmark module
pub async fn execute(
    config: &HarnessConfig,
    api_key: String,
    model_name: &str,
    module_name: &str
) -> Result<()> {
    ui::print_header("HDL Generation Benchmark");
    ui::print_result("Model", model_name);
    ui::print_result("Module", module_name);
    ui::print_result("Category", &config.benchmark.category);

    let service = OpenAICompletionService::new(config.llm.api.clone(), api_key).map_err(
        HarnessError::from
    )?;
    let generator = LLMCodeGenerator::new(service, config.llm.clone());
    let verifier = IcarusVerifier::new(config.toolchain.clone());
    let pipeline = Pipeline::new(
        generator,
        verifier,
        config.output_root.clone(),
        config.toolchain.simulation_timeout()
    );

    let paths = TaskPaths::in_benchmark(
        &config.benchmark.root,
        &config.benchmark.category,
        module_name
    );

    ui::print_info(&format!("Generating {} with {}", module_name, model_name));
    let report = pipeline.run(&paths, model_name).await;

    println!();
    print_report(&report);
    ui::print_banner(report.passed());

    Ok(())
}

fn print_report(report: &PipelineReport) {
    if let Some(generation) = &report.generation {
        ui::print_result("Generation time", &format!("{:.2}s", generation.duration.as_secs_f64()));
        if generation.used_fallback() {
            ui::print_warning("No fenced Verilog block in the response; using the whole text");
        }
    }

    if let Some(artifacts) = &report.artifacts {
        ui::print_result("Generated code", &artifacts.source_path.display().to_string());
        ui::print_result("Full response", &artifacts.transcript_path.display().to_string());
    }

    match &report.status {
        PipelineStatus::Halted { stage, error } => {
            ui::print_error(&format!("Stopped at {} stage: {}", stage, error));
        }
        PipelineStatus::Finished(outcome) => {
            println!();
            ui::print_outcome(outcome);
        }
    }
}
