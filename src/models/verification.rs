use serde::Serialize;
use std::{ fmt, time::Duration };

/// Terminal state of one verification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// The compiler rejected the design or timed out; simulation never ran
    CompileFailure { diagnostics: String },
    /// The simulation exceeded its time limit
    SimulationTimeout { limit: Duration },
    /// The compiler or simulator could not be launched
    ToolMissing { reason: String },
    /// The simulation ran to completion
    Verdict {
        passed: bool,
        stdout: String,
        /// Exit code of the simulator, `None` if killed by a signal
        exit_code: Option<i32>,
    },
}

impl VerificationOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, VerificationOutcome::Verdict { passed: true, .. })
    }

    /// A failed verdict whose simulator also exited abnormally.
    ///
    /// The success marker alone decides `passed`; this only separates a wrong
    /// answer from a simulator that crashed before printing the marker.
    pub fn simulator_crashed(&self) -> bool {
        match self {
            VerificationOutcome::Verdict { passed: false, exit_code, .. } => *exit_code != Some(0),
            _ => false,
        }
    }

    /// Text produced by the tool that decided the outcome
    pub fn output(&self) -> &str {
        match self {
            VerificationOutcome::CompileFailure { diagnostics } => diagnostics,
            VerificationOutcome::SimulationTimeout { .. } => "Timeout",
            VerificationOutcome::ToolMissing { reason } => reason,
            VerificationOutcome::Verdict { stdout, .. } => stdout,
        }
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationOutcome::CompileFailure { .. } => write!(f, "Compile failure"),
            VerificationOutcome::SimulationTimeout { limit } => {
                write!(f, "Simulation timed out after {:.1}s", limit.as_secs_f64())
            }
            VerificationOutcome::ToolMissing { reason } => write!(f, "Tool missing: {}", reason),
            VerificationOutcome::Verdict { passed: true, .. } => write!(f, "Passed"),
            VerificationOutcome::Verdict { exit_code, .. } => {
                if self.simulator_crashed() {
                    match exit_code {
                        Some(code) => write!(f, "Failed (simulator exited with status {})", code),
                        None => write!(f, "Failed (simulator terminated by signal)"),
                    }
                } else {
                    write!(f, "Failed")
                }
            }
        }
    }
}
