//! Pulls Verilog source out of a free-form model response.
//!
//! Rules are tried in order and the first one that matches wins:
//!
//! 1. [`ExtractionRule::TaggedFence`]: the first block fenced as `verilog` or
//!    `systemverilog` (tag matched case-insensitively).
//! 2. [`ExtractionRule::UntaggedFence`]: the first untagged fenced block whose
//!    body contains `module`.
//! 3. [`ExtractionRule::WholeText`]: the whole response, so that an unfenced
//!    answer still reaches the compiler.
//!
//! Extraction never fails; unusable text is rejected later at compile time.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Token that marks a module declaration in an untagged block
pub const MODULE_TOKEN: &str = "module";

static TAGGED_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)```(?:verilog|systemverilog)\s*\n(.*?)\n```").expect("tagged fence pattern")
});

static UNTAGGED_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```\s*\n(.*?)\n```").expect("untagged fence pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionRule {
    TaggedFence,
    UntaggedFence,
    WholeText,
}

impl ExtractionRule {
    /// Priority order in which rules are tried
    pub const ORDER: [ExtractionRule; 3] = [
        ExtractionRule::TaggedFence,
        ExtractionRule::UntaggedFence,
        ExtractionRule::WholeText,
    ];

    fn apply(self, text: &str) -> Option<String> {
        match self {
            ExtractionRule::TaggedFence =>
                TAGGED_FENCE.captures(text)
                    .and_then(|caps| caps.get(1))
                    .map(|body| body.as_str().trim().to_string()),
            ExtractionRule::UntaggedFence =>
                UNTAGGED_FENCE.captures_iter(text)
                    .filter_map(|caps| caps.get(1))
                    .map(|body| body.as_str())
                    .find(|body| body.contains(MODULE_TOKEN))
                    .map(|body| body.trim().to_string()),
            ExtractionRule::WholeText => Some(text.trim().to_string()),
        }
    }
}

/// Extracted code together with the rule that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub code: String,
    pub rule: ExtractionRule,
}

/// Apply the extraction rules to `text`
pub fn extract(text: &str) -> Extraction {
    ExtractionRule::ORDER
        .iter()
        .find_map(|rule| rule.apply(text).map(|code| Extraction { code, rule: *rule }))
        .unwrap_or_else(|| Extraction {
            code: text.trim().to_string(),
            rule: ExtractionRule::WholeText,
        })
}

/// Extract the most plausible Verilog fragment from `text`
pub fn extract_hdl_code(text: &str) -> String {
    extract(text).code
}
