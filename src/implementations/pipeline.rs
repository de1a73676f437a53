use log::{ error, info, warn };
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::{ HarnessError, InputKind };
use crate::models::artifact::{ Artifacts, RunRecord };
use crate::models::generation::GenerationResult;
use crate::models::task::{ DesignTask, TaskPaths };
use crate::models::verification::VerificationOutcome;
use crate::traits::code_generator::CodeGenerator;
use crate::traits::verification_engine::VerificationEngine;

/// Stage at which a run stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Load,
    Generate,
    Persist,
    Verify,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Load => write!(f, "load"),
            PipelineStage::Generate => write!(f, "generate"),
            PipelineStage::Persist => write!(f, "persist"),
            PipelineStage::Verify => write!(f, "verify"),
        }
    }
}

#[derive(Debug)]
pub enum PipelineStatus {
    /// The run stopped before the toolchain produced an outcome
    Halted {
        stage: PipelineStage,
        error: HarnessError,
    },
    Finished(VerificationOutcome),
}

/// Everything a single generate-extract-verify run produced
#[derive(Debug)]
pub struct PipelineReport {
    pub model_name: String,
    pub module_name: String,
    pub generation: Option<GenerationResult>,
    pub artifacts: Option<Artifacts>,
    pub status: PipelineStatus,
}

impl PipelineReport {
    pub fn passed(&self) -> bool {
        matches!(&self.status, PipelineStatus::Finished(outcome) if outcome.passed())
    }

    pub fn outcome(&self) -> Option<&VerificationOutcome> {
        match &self.status {
            PipelineStatus::Finished(outcome) => Some(outcome),
            PipelineStatus::Halted { .. } => None,
        }
    }
}

/// Drives one design through generation, persistence and verification
pub struct Pipeline<G, V> {
    generator: G,
    verifier: V,
    output_root: PathBuf,
    simulation_timeout: Duration,
}

impl<G: CodeGenerator, V: VerificationEngine> Pipeline<G, V> {
    pub fn new(generator: G, verifier: V, output_root: PathBuf, simulation_timeout: Duration) -> Self {
        Self {
            generator,
            verifier,
            output_root,
            simulation_timeout,
        }
    }

    /// Run the full pipeline for one task. Expected failures end up in the
    /// report's status; nothing here returns an error.
    pub async fn run(&self, paths: &TaskPaths, model_name: &str) -> PipelineReport {
        let mut generation = None;
        let mut artifacts = None;

        let status = match self.drive(paths, model_name, &mut generation, &mut artifacts).await {
            Ok(outcome) => PipelineStatus::Finished(outcome),
            Err((stage, error)) => {
                error!("Pipeline halted at {} stage: {}", stage, error);
                PipelineStatus::Halted { stage, error }
            }
        };

        PipelineReport {
            model_name: model_name.to_string(),
            module_name: paths.module_name.clone(),
            generation,
            artifacts,
            status,
        }
    }

    async fn drive(
        &self,
        paths: &TaskPaths,
        model_name: &str,
        generation_slot: &mut Option<GenerationResult>,
        artifacts_slot: &mut Option<Artifacts>
    ) -> Result<VerificationOutcome, (PipelineStage, HarnessError)> {
        info!("Loading design task {}", paths.module_name);
        let task = DesignTask::load(paths).map_err(|e| (PipelineStage::Load, e))?;
        info!("Description: {} characters", task.description.len());

        let generation = self.generator
            .generate(model_name, &task.description, &task.module_name).await
            .ok_or_else(|| {
                let error = HarnessError::GenerationFailure { model: model_name.to_string() };
                (PipelineStage::Generate, error)
            })?;
        let generation = generation_slot.insert(generation);

        let artifacts = Artifacts::for_run(&self.output_root, model_name, &task.module_name);
        artifacts
            .write_generation(generation, &task.module_name)
            .map_err(|e| (PipelineStage::Persist, e))?;
        info!("Saved generated code to {}", artifacts.source_path.display());
        info!("Saved full response to {}", artifacts.transcript_path.display());
        let artifacts = artifacts_slot.insert(artifacts);

        if generation.extracted_source.trim().is_empty() {
            let error = HarnessError::EmptyExtraction { model: model_name.to_string() };
            return Err((PipelineStage::Verify, error));
        }

        if !task.testbench_path.is_file() {
            let error = HarnessError::MissingInputFile {
                kind: InputKind::Testbench,
                path: task.testbench_path.clone(),
            };
            return Err((PipelineStage::Verify, error));
        }

        info!(
            "Verifying with {} (timeout {:.1}s)",
            self.verifier.toolchain_name(),
            self.simulation_timeout.as_secs_f64()
        );
        let outcome = self.verifier.verify(
            &artifacts.source_path,
            &task.testbench_path,
            self.simulation_timeout
        ).await;

        let record = RunRecord::new(generation, &task.module_name, &outcome);
        match artifacts.write_record(&record) {
            Ok(()) => info!("Saved run record to {}", artifacts.record_path.display()),
            Err(e) => warn!("Could not save run record: {}", e),
        }

        Ok(outcome)
    }
}
