pub mod artifact_tests;
pub mod extractor_tests;

use log::info;
use std::fs;
use std::path::{ Path, PathBuf };
use tempfile::TempDir;

use crate::config::ToolchainConfig;

/// Initialize logging once per test binary
pub fn setup() {
    match env_logger::builder().is_test(true).try_init() {
        Ok(_) => {
            info!("Logger initialized");
        }
        Err(_) => {
            // Logger already initialized
        }
    }
}

pub const ADDER: &str = "module adder_8bit(input [7:0] a, input [7:0] b, output [7:0] sum);
    assign sum = a + b;
endmodule";

pub const SUBTRACTOR: &str = "module adder_8bit(input [7:0] a, input [7:0] b, output [7:0] sum);
    assign sum = a - b;
endmodule";

pub const BROKEN: &str = "module adder_8bit(input [7:0] a, input [7:0] b, output [7:0] sum)
    assign sum = a + b";

pub const TESTBENCH: &str = "module testbench;
    initial $display(\"Your Design passed\");
endmodule";

/// Compiler stand-in: rejects sources without `endmodule`, otherwise copies the
/// source into the image. Invoked as `sh cc.sh -o <image> <source> <testbench>`.
pub const FAKE_COMPILER: &str = r#"
if ! grep -q endmodule "$3"; then
    echo "$3:3: syntax error" >&2
    echo "I give up." >&2
    exit 1
fi
cat "$3" > "$2"
"#;

/// Simulator stand-in: passes when the image adds. Invoked as `sh sim.sh <image>`.
pub const FAKE_SIMULATOR: &str = r#"
touch "$(dirname "$1")/simulated"
if grep -q "a + b" "$1"; then
    echo "VCD info: dumpfile test.vcd opened for output."
    echo "Your Design passed"
else
    echo "Error: expected 8'd7, got 8'd255"
fi
"#;

/// A scratch directory holding a fake `iverilog`/`vvp` pair driven through `sh`
pub struct FakeToolchain {
    pub dir: TempDir,
    pub config: ToolchainConfig,
}

impl FakeToolchain {
    pub fn new(compiler: &str, simulator: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let compiler_path = dir.path().join("cc.sh");
        let simulator_path = dir.path().join("sim.sh");
        fs::write(&compiler_path, compiler).unwrap();
        fs::write(&simulator_path, simulator).unwrap();

        let config = ToolchainConfig {
            compiler: "sh".to_string(),
            simulator: "sh".to_string(),
            compiler_flags: vec![compiler_path.display().to_string()],
            simulator_flags: vec![simulator_path.display().to_string()],
            image_path: dir.path().join("test_output.vvp"),
            ..ToolchainConfig::default()
        };

        Self { dir, config }
    }

    pub fn standard() -> Self {
        Self::new(FAKE_COMPILER, FAKE_SIMULATOR)
    }

    /// Write `contents` into the scratch directory
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn image(&self) -> &Path {
        &self.config.image_path
    }

    /// True once the fake simulator has been started
    pub fn simulated(&self) -> bool {
        self.dir.path().join("simulated").exists()
    }
}
