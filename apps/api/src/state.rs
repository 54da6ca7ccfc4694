use std::sync::Arc;

use crate::analysis::rubric::RubricStrategy;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Handlers hold no other state; everything here is constructed once at
/// startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Instruction-template strategy. Default: FixedRubric. Swap via RUBRIC_STRATEGY env.
    pub rubric: Arc<dyn RubricStrategy>,
}
