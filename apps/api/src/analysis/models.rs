//! Request and response types for the analyze/optimize operations.

use serde::{Deserialize, Serialize};

/// POST /api/analyze request body.
/// `prompt` defaults to empty when absent so the validator, not the JSON
/// extractor, owns the "missing prompt" error.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub prompt: String,
    pub context: Option<String>,
}

/// POST /api/optimize request body.
#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub prompt: String,
    pub context: Option<String>,
}

/// Structured critique returned by the analyze operation.
///
/// The fixed rubric produces all three fields; the contextual rubric produces
/// `analysis` only. Optional fields are skipped on the wire when absent so a
/// valid model response round-trips to the caller unchanged. The default value
/// serializes as `{"analysis":[]}` — the empty report substituted when the
/// model answers with unusable JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(default)]
    pub analysis: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvements: Option<Vec<String>>,
}

/// Rewritten prompt returned by the optimize operation.
/// The model text is carried verbatim; `optimizedPrompt` is the wire name
/// the frontend expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizeResult {
    #[serde(rename = "optimizedPrompt")]
    pub optimized_prompt: String,
}
