use std::fs;
use std::path::{ Path, PathBuf };

use crate::errors::{ HarnessError, HarnessResult, InputKind };

/// File holding the natural-language description inside a benchmark entry
pub const DESCRIPTION_FILE: &str = "simple_design_description.txt";
/// Reference testbench inside a benchmark entry
pub const TESTBENCH_FILE: &str = "testbench.v";

/// Where the inputs of one design task live on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPaths {
    pub module_name: String,
    pub description_path: PathBuf,
    pub testbench_path: PathBuf,
}

impl TaskPaths {
    /// Resolve `<root>/<category>/<module>/{simple_design_description.txt,testbench.v}`
    pub fn in_benchmark(root: &Path, category: &str, module_name: &str) -> Self {
        let entry = root.join(category).join(module_name);
        Self {
            module_name: module_name.to_string(),
            description_path: entry.join(DESCRIPTION_FILE),
            testbench_path: entry.join(TESTBENCH_FILE),
        }
    }
}

/// Immutable input to a single generate-extract-verify run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignTask {
    pub description: String,
    pub module_name: String,
    pub testbench_path: PathBuf,
}

impl DesignTask {
    /// Read the description file. The testbench is only checked later,
    /// right before verification.
    pub fn load(paths: &TaskPaths) -> HarnessResult<Self> {
        if !paths.description_path.is_file() {
            return Err(HarnessError::MissingInputFile {
                kind: InputKind::Description,
                path: paths.description_path.clone(),
            });
        }

        let description = fs::read_to_string(&paths.description_path)?;

        Ok(Self {
            description,
            module_name: paths.module_name.clone(),
            testbench_path: paths.testbench_path.clone(),
        })
    }
}
