use serde::Serialize;
use std::time::Duration;

use crate::implementations::code_extractor::ExtractionRule;

/// Output of one exchange with the completion service
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    /// Full completion text, kept for audit even when extraction falls back
    pub raw_response: String,
    pub extracted_source: String,
    pub model_name: String,
    pub duration: Duration,
    /// Which extraction rule produced `extracted_source`
    pub extraction_rule: ExtractionRule,
}

impl GenerationResult {
    /// True when no fenced block was found and the whole response was kept
    pub fn used_fallback(&self) -> bool {
        self.extraction_rule == ExtractionRule::WholeText
    }
}
