use async_trait::async_trait;
use log::{ debug, info, warn };
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{ Path, PathBuf };
use std::process::{ Output, Stdio };
use std::time::Duration;
use tokio::process::Command;

use crate::config::ToolchainConfig;
use crate::models::verification::VerificationOutcome;
use crate::traits::verification_engine::{ ToolStatus, VerificationEngine };

/// Compiles and simulates designs with Icarus Verilog (`iverilog` + `vvp`).
///
/// Any compiler accepting `-o <image> <files..>` and a simulator taking the
/// image as its last argument can be substituted through [`ToolchainConfig`].
pub struct IcarusVerifier {
    toolchain: ToolchainConfig,
}

/// How a child process ended
enum ProcessResult {
    Completed(Output),
    TimedOut,
    /// The executable could not be started or awaited
    Unavailable(String),
}

/// Progress of a single verification run
enum RunState {
    Compiling,
    Simulating,
    Done(VerificationOutcome),
}

/// Owns the compiled simulation image and deletes it when dropped
struct ScratchImage {
    path: PathBuf,
}

impl ScratchImage {
    fn claim(path: &Path) -> Self {
        let image = Self { path: path.to_path_buf() };
        image.remove();
        image
    }

    fn remove(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed simulation image {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Could not remove simulation image {}: {}", self.path.display(), e),
        }
    }
}

impl Drop for ScratchImage {
    fn drop(&mut self) {
        self.remove();
    }
}

impl IcarusVerifier {
    pub fn new(toolchain: ToolchainConfig) -> Self {
        Self { toolchain }
    }

    /// Probe the compiler and simulator with `-V`
    pub async fn check_tools(&self) -> Vec<ToolStatus> {
        let mut statuses = Vec::new();
        for program in [&self.toolchain.compiler, &self.toolchain.simulator] {
            let args = [OsString::from("-V")];
            let status = match run_tool(program, &args, self.toolchain.compile_timeout()).await {
                ProcessResult::Completed(output) => {
                    let text = first_line(&output.stdout)
                        .or_else(|| first_line(&output.stderr))
                        .unwrap_or_else(|| "no version output".to_string());
                    ToolStatus { program: program.clone(), detail: text, available: true }
                }
                ProcessResult::TimedOut => ToolStatus {
                    program: program.clone(),
                    detail: "timed out while probing".to_string(),
                    available: false,
                },
                ProcessResult::Unavailable(reason) => ToolStatus {
                    program: program.clone(),
                    detail: reason,
                    available: false,
                },
            };
            statuses.push(status);
        }
        statuses
    }

    fn compile_args(&self, source: &Path, testbench: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.toolchain.compiler_flags
            .iter()
            .map(OsString::from)
            .collect();
        args.push("-o".into());
        args.push(self.toolchain.image_path.clone().into_os_string());
        args.push(source.as_os_str().to_os_string());
        args.push(testbench.as_os_str().to_os_string());
        args
    }

    fn simulate_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.toolchain.simulator_flags
            .iter()
            .map(OsString::from)
            .collect();
        args.push(self.toolchain.image_path.clone().into_os_string());
        args
    }

    fn tool_missing(&self, reason: String) -> VerificationOutcome {
        VerificationOutcome::ToolMissing {
            reason: format!("{}. {}", reason, self.toolchain.install_hint),
        }
    }

    async fn compile(&self, source: &Path, testbench: &Path) -> RunState {
        info!("Compiling {} with {}", source.display(), self.toolchain.compiler);

        let args = self.compile_args(source, testbench);
        let limit = self.toolchain.compile_timeout();

        match run_tool(&self.toolchain.compiler, &args, limit).await {
            ProcessResult::Completed(output) if output.status.success() => RunState::Simulating,
            ProcessResult::Completed(output) => {
                let diagnostics = compile_diagnostics(&output);
                debug!("Compiler diagnostics:\n{}", diagnostics);
                RunState::Done(VerificationOutcome::CompileFailure { diagnostics })
            }
            ProcessResult::TimedOut => {
                RunState::Done(VerificationOutcome::CompileFailure {
                    diagnostics: format!(
                        "{} did not finish within {}s",
                        self.toolchain.compiler,
                        limit.as_secs()
                    ),
                })
            }
            ProcessResult::Unavailable(reason) => RunState::Done(self.tool_missing(reason)),
        }
    }

    async fn simulate(&self, limit: Duration) -> VerificationOutcome {
        info!("Running simulation with {}", self.toolchain.simulator);

        match run_tool(&self.toolchain.simulator, &self.simulate_args(), limit).await {
            ProcessResult::Completed(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let passed = stdout.contains(&self.toolchain.success_marker);
                let exit_code = output.status.code();
                if !passed && exit_code != Some(0) {
                    warn!("Simulator exited abnormally ({}) without the success marker", output.status);
                }
                VerificationOutcome::Verdict { passed, stdout, exit_code }
            }
            ProcessResult::TimedOut => VerificationOutcome::SimulationTimeout { limit },
            ProcessResult::Unavailable(reason) => self.tool_missing(reason),
        }
    }
}

#[async_trait]
impl VerificationEngine for IcarusVerifier {
    async fn verify(&self, source: &Path, testbench: &Path, timeout: Duration) -> VerificationOutcome {
        let _image = ScratchImage::claim(&self.toolchain.image_path);

        let mut state = RunState::Compiling;
        loop {
            state = match state {
                RunState::Compiling => self.compile(source, testbench).await,
                RunState::Simulating => RunState::Done(self.simulate(timeout).await),
                RunState::Done(outcome) => {
                    info!("Verification finished: {}", outcome);
                    return outcome;
                }
            };
        }
    }

    fn toolchain_name(&self) -> &str {
        "Icarus Verilog"
    }
}

/// Run `program` with captured output, killing it once `limit` elapses
async fn run_tool(program: &str, args: &[OsString], limit: Duration) -> ProcessResult {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = match command.spawn() {
        Ok(child) => child,
        Err(e) => {
            return ProcessResult::Unavailable(format!("Could not launch {}: {}", program, e));
        }
    };

    match tokio::time::timeout(limit, child.wait_with_output()).await {
        Ok(Ok(output)) => ProcessResult::Completed(output),
        Ok(Err(e)) => ProcessResult::Unavailable(format!("Could not wait for {}: {}", program, e)),
        Err(_) => {
            warn!("{} exceeded {:.1}s and was killed", program, limit.as_secs_f64());
            ProcessResult::TimedOut
        }
    }
}

/// Compiler stderr, falling back to stdout and then the exit status
fn compile_diagnostics(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        return stderr;
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !stdout.is_empty() {
        return stdout;
    }
    format!("Compiler exited with {}", output.status)
}

fn first_line(bytes: &[u8]) -> Option<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
