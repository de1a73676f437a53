use chrono::{ DateTime, Utc };
use serde::Serialize;
use std::fs;
use std::path::{ Path, PathBuf };

use crate::errors::{ HarnessError, HarnessResult };
use crate::implementations::code_extractor::ExtractionRule;
use crate::models::generation::GenerationResult;
use crate::models::verification::VerificationOutcome;

const RULE: &str = "============================================================";

/// Files written for one (model, module) run. Rewritten on every rerun.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub output_dir: PathBuf,
    pub source_path: PathBuf,
    pub transcript_path: PathBuf,
    pub record_path: PathBuf,
}

impl Artifacts {
    /// Lay out `<output_root>/<model>/<module>{.v,_response.txt,_result.json}`
    pub fn for_run(output_root: &Path, model_name: &str, module_name: &str) -> Self {
        let output_dir = output_root.join(model_dir_name(model_name));
        Self {
            source_path: output_dir.join(format!("{}.v", module_name)),
            transcript_path: output_dir.join(format!("{}_response.txt", module_name)),
            record_path: output_dir.join(format!("{}_result.json", module_name)),
            output_dir,
        }
    }

    /// Write the extracted source and the full transcript, creating the directory if needed
    pub fn write_generation(
        &self,
        generation: &GenerationResult,
        module_name: &str
    ) -> HarnessResult<()> {
        fs::create_dir_all(&self.output_dir).map_err(|source| HarnessError::ArtifactWrite {
            path: self.output_dir.clone(),
            source,
        })?;

        write_file(&self.source_path, &generation.extracted_source)?;
        write_file(
            &self.transcript_path,
            &render_transcript(&generation.model_name, module_name, &generation.raw_response)
        )?;

        Ok(())
    }

    pub fn write_record(&self, record: &RunRecord) -> HarnessResult<()> {
        let json = serde_json::to_string_pretty(record)?;
        write_file(&self.record_path, &json)
    }
}

/// Summary of a finished run, stored next to the generated source
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub model_name: String,
    pub module_name: String,
    pub created_at: DateTime<Utc>,
    pub generation_secs: f64,
    pub extraction_rule: ExtractionRule,
    pub passed: bool,
    pub outcome: VerificationOutcome,
}

impl RunRecord {
    pub fn new(generation: &GenerationResult, module_name: &str, outcome: &VerificationOutcome) -> Self {
        Self {
            model_name: generation.model_name.clone(),
            module_name: module_name.to_string(),
            created_at: Utc::now(),
            generation_secs: generation.duration.as_secs_f64(),
            extraction_rule: generation.extraction_rule,
            passed: outcome.passed(),
            outcome: outcome.clone(),
        }
    }
}

/// Transcript body: model, module, then the raw completion under a fixed header
pub fn render_transcript(model_name: &str, module_name: &str, raw_response: &str) -> String {
    format!(
        "Model: {}\nModule: {}\n\n{}\nFull Response:\n{}\n\n{}",
        model_name,
        module_name,
        RULE,
        RULE,
        raw_response
    )
}

// Model ids like "org/model" must not create nested directories.
fn model_dir_name(model_name: &str) -> String {
    model_name.replace(['/', '\\'], "_")
}

fn write_file(path: &Path, contents: &str) -> HarnessResult<()> {
    fs::write(path, contents).map_err(|source| HarnessError::ArtifactWrite {
        path: path.to_path_buf(),
        source,
    })
}
