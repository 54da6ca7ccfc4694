//! Analyze / optimize pipeline: rubric render → completion call → response shaping.

use tracing::warn;

use crate::analysis::models::{AnalysisReport, OptimizeResult};
use crate::analysis::rubric::RubricStrategy;
use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};

// Rewriting runs at a lower temperature so the model stays close to the
// submitted prompt.
const ANALYZE_TEMPERATURE: f32 = 0.4;
const OPTIMIZE_TEMPERATURE: f32 = 0.3;

/// Generic failure messages returned to callers. The remote error detail is
/// logged server-side only.
pub const ANALYZE_FAILURE: &str = "Falha ao processar a análise.";
pub const OPTIMIZE_FAILURE: &str = "Falha ao otimizar o prompt.";

/// Scores and critiques the submitted prompt with the remote model.
pub async fn analyze_prompt(
    prompt: &str,
    context: Option<&str>,
    llm: &LlmClient,
    rubric: &dyn RubricStrategy,
) -> Result<AnalysisReport, AppError> {
    let system = rubric.analysis_system(context);

    shape_analysis(
        llm.call_json::<AnalysisReport>(prompt, &system, Some(ANALYZE_TEMPERATURE))
            .await,
    )
}

/// Maps the completion outcome to the caller-visible report.
///
/// A remote-call failure is a 500. A *successful* call whose text is not
/// usable JSON degrades to the empty report instead of failing the request —
/// the frontend renders it as "no analysis". See DESIGN.md before changing
/// this.
fn shape_analysis(result: Result<AnalysisReport, LlmError>) -> Result<AnalysisReport, AppError> {
    match result {
        Ok(report) => Ok(report),
        Err(e @ (LlmError::Parse(_) | LlmError::EmptyContent)) => {
            warn!("analysis response was not valid JSON, returning empty report: {e}");
            Ok(AnalysisReport::default())
        }
        Err(e) => Err(AppError::llm(ANALYZE_FAILURE, e)),
    }
}

/// Rewrites the submitted prompt for clarity. The model text is returned
/// verbatim — no parsing, no post-processing.
pub async fn optimize_prompt(
    prompt: &str,
    context: Option<&str>,
    llm: &LlmClient,
    rubric: &dyn RubricStrategy,
) -> Result<OptimizeResult, AppError> {
    let system = rubric.optimize_system(context);

    let response = llm
        .call(prompt, &system, Some(OPTIMIZE_TEMPERATURE))
        .await
        .map_err(|e| AppError::llm(OPTIMIZE_FAILURE, e))?;

    let text = response
        .text()
        .ok_or_else(|| AppError::llm(OPTIMIZE_FAILURE, LlmError::EmptyContent))?;

    Ok(OptimizeResult {
        optimized_prompt: text.to_string(),
    })
}
