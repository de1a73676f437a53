use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::{ Path, PathBuf };
use std::time::Duration;

use crate::implementations::config::{ ConfigError, GeneratorConfig };

/// Configuration for the hdlbench harness
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub llm: GeneratorConfig,
    pub toolchain: ToolchainConfig,
    pub benchmark: BenchmarkConfig,
    /// Root under which per-model artifact directories are created
    pub output_root: PathBuf,
}

impl HarnessConfig {
    /// Load configuration from a YAML file; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: HarnessConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            llm: GeneratorConfig::default(),
            toolchain: ToolchainConfig::default(),
            benchmark: BenchmarkConfig::default(),
            output_root: PathBuf::from("./test_output"),
        }
    }
}

/// Configuration for the external compile + simulate toolchain
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Compiler executable, invoked as `<compiler> [flags] -o <image> <source> <testbench>`
    pub compiler: String,
    /// Simulator executable, invoked as `<simulator> [flags] <image>`
    pub simulator: String,
    pub compiler_flags: Vec<String>,
    pub simulator_flags: Vec<String>,
    pub compile_timeout_secs: u64,
    pub simulation_timeout_secs: u64,
    /// Compiled simulation image; removed after every run
    pub image_path: PathBuf,
    /// String the testbench prints when the design passes
    pub success_marker: String,
    /// Shown when an executable cannot be launched
    pub install_hint: String,
}

impl ToolchainConfig {
    pub fn compile_timeout(&self) -> Duration {
        Duration::from_secs(self.compile_timeout_secs)
    }

    pub fn simulation_timeout(&self) -> Duration {
        Duration::from_secs(self.simulation_timeout_secs)
    }
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            compiler: "iverilog".to_string(),
            simulator: "vvp".to_string(),
            compiler_flags: Vec::new(),
            simulator_flags: Vec::new(),
            compile_timeout_secs: 10,
            simulation_timeout_secs: 5,
            image_path: PathBuf::from("test_output.vvp"),
            success_marker: "Your Design passed".to_string(),
            install_hint: "Make sure Icarus Verilog is installed: https://bleyer.org/icarus/".to_string(),
        }
    }
}

/// Location of the benchmark suite on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub root: PathBuf,
    pub category: String,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("../benchmark"),
            category: "arithmetic".to_string(),
        }
    }
}
