use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

use crate::errors::{ HarnessError, InputKind };
use crate::implementations::code_extractor::ExtractionRule;
use crate::models::artifact::{ render_transcript, Artifacts, RunRecord };
use crate::models::generation::GenerationResult;
use crate::models::task::{ DesignTask, TaskPaths };
use crate::models::verification::VerificationOutcome;

fn generation(model: &str, raw: &str, code: &str) -> GenerationResult {
    GenerationResult {
        raw_response: raw.to_string(),
        extracted_source: code.to_string(),
        model_name: model.to_string(),
        duration: Duration::from_millis(1500),
        extraction_rule: ExtractionRule::TaggedFence,
    }
}

#[test]
fn benchmark_layout() {
    let paths = TaskPaths::in_benchmark(Path::new("../benchmark"), "arithmetic", "adder_8bit");

    assert_eq!(paths.module_name, "adder_8bit");
    assert_eq!(
        paths.description_path,
        Path::new("../benchmark/arithmetic/adder_8bit/simple_design_description.txt")
    );
    assert_eq!(paths.testbench_path, Path::new("../benchmark/arithmetic/adder_8bit/testbench.v"));
}

#[test]
fn loading_without_description_fails() {
    let dir = TempDir::new().unwrap();
    let paths = TaskPaths::in_benchmark(dir.path(), "arithmetic", "adder_8bit");

    let error = DesignTask::load(&paths).unwrap_err();

    match error {
        HarnessError::MissingInputFile { kind, path } => {
            assert_eq!(kind, InputKind::Description);
            assert_eq!(path, paths.description_path);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn loading_reads_description_without_requiring_testbench() {
    let dir = TempDir::new().unwrap();
    let paths = TaskPaths::in_benchmark(dir.path(), "arithmetic", "adder_8bit");
    fs::create_dir_all(paths.description_path.parent().unwrap()).unwrap();
    fs::write(&paths.description_path, "Implement an 8-bit adder.").unwrap();

    let task = DesignTask::load(&paths).unwrap();

    assert_eq!(task.description, "Implement an 8-bit adder.");
    assert_eq!(task.module_name, "adder_8bit");
    assert_eq!(task.testbench_path, paths.testbench_path);
}

#[test]
fn artifact_paths_are_keyed_by_model_and_module() {
    let artifacts = Artifacts::for_run(Path::new("out"), "gpt-4o-mini", "adder_8bit");

    assert_eq!(artifacts.output_dir, Path::new("out/gpt-4o-mini"));
    assert_eq!(artifacts.source_path, Path::new("out/gpt-4o-mini/adder_8bit.v"));
    assert_eq!(artifacts.transcript_path, Path::new("out/gpt-4o-mini/adder_8bit_response.txt"));
    assert_eq!(artifacts.record_path, Path::new("out/gpt-4o-mini/adder_8bit_result.json"));
}

#[test]
fn model_separators_do_not_nest_directories() {
    let artifacts = Artifacts::for_run(Path::new("out"), "meta-llama/Llama-3-70b", "adder_8bit");
    assert_eq!(artifacts.output_dir, Path::new("out/meta-llama_Llama-3-70b"));
}

#[test]
fn transcript_format() {
    let transcript = render_transcript("gpt-4o", "adder_8bit", "raw text");
    let rule = "=".repeat(60);

    assert_eq!(
        transcript,
        format!("Model: gpt-4o\nModule: adder_8bit\n\n{rule}\nFull Response:\n{rule}\n\nraw text")
    );
}

#[test]
fn writing_creates_directory_and_overwrites() {
    let dir = TempDir::new().unwrap();
    let artifacts = Artifacts::for_run(dir.path(), "gpt-4o", "adder_8bit");

    artifacts.write_generation(&generation("gpt-4o", "first", "module a; endmodule"), "adder_8bit").unwrap();
    artifacts.write_generation(&generation("gpt-4o", "second", "module b; endmodule"), "adder_8bit").unwrap();

    assert_eq!(fs::read_to_string(&artifacts.source_path).unwrap(), "module b; endmodule");
    assert_eq!(
        fs::read_to_string(&artifacts.transcript_path).unwrap(),
        render_transcript("gpt-4o", "adder_8bit", "second")
    );
}

#[test]
fn record_captures_outcome() {
    let dir = TempDir::new().unwrap();
    let artifacts = Artifacts::for_run(dir.path(), "gpt-4o", "adder_8bit");
    let generation = generation("gpt-4o", "raw", "module a; endmodule");
    let outcome = VerificationOutcome::CompileFailure { diagnostics: "syntax error".to_string() };
    artifacts.write_generation(&generation, "adder_8bit").unwrap();

    artifacts.write_record(&RunRecord::new(&generation, "adder_8bit", &outcome)).unwrap();

    let json: serde_json::Value = serde_json
        ::from_str(&fs::read_to_string(&artifacts.record_path).unwrap())
        .unwrap();
    assert_eq!(json["model_name"], "gpt-4o");
    assert_eq!(json["passed"], false);
    assert_eq!(json["extraction_rule"], "tagged_fence");
    assert_eq!(json["generation_secs"], 1.5);
    assert_eq!(json["outcome"]["kind"], "compile_failure");
    assert_eq!(json["outcome"]["diagnostics"], "syntax error");
}

#[test]
fn outcome_display() {
    let timeout = VerificationOutcome::SimulationTimeout { limit: Duration::from_secs(5) };
    assert_eq!(timeout.to_string(), "Simulation timed out after 5.0s");
    assert!(!timeout.passed());
    assert_eq!(timeout.output(), "Timeout");

    let passed = VerificationOutcome::Verdict {
        passed: true,
        stdout: "Your Design passed".to_string(),
        exit_code: Some(0),
    };
    assert_eq!(passed.to_string(), "Passed");

    let killed = VerificationOutcome::Verdict {
        passed: false,
        stdout: String::new(),
        exit_code: None,
    };
    assert!(killed.simulator_crashed());
    assert_eq!(killed.to_string(), "Failed (simulator terminated by signal)");
}
