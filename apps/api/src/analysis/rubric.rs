//! Rubric strategies — pluggable instruction builders for both operations.
//!
//! The system instruction is rendered one of two ways: a fixed built-in
//! rubric, or a template interpolating a caller-supplied policy string.
//! `AppState` holds an `Arc<dyn RubricStrategy>` selected once at startup,
//! so the endpoints, handlers, and completion plumbing are shared.

use std::sync::Arc;

use crate::analysis::prompts::{
    ANALYZE_CONTEXT_TEMPLATE, ANALYZE_SYSTEM, NO_CONTEXT_FALLBACK, OPTIMIZE_CONTEXT_TEMPLATE,
    OPTIMIZE_SYSTEM,
};
use crate::config::RubricStrategyKind;

/// Renders the system instruction sent with each completion call.
///
/// Carried in `AppState` as `Arc<dyn RubricStrategy>`.
pub trait RubricStrategy: Send + Sync {
    fn analysis_system(&self, context: Option<&str>) -> String;
    fn optimize_system(&self, context: Option<&str>) -> String;
}

/// Fixed rubric: the built-in evaluation criteria. Caller context is ignored.
pub struct FixedRubric;

impl RubricStrategy for FixedRubric {
    fn analysis_system(&self, _context: Option<&str>) -> String {
        ANALYZE_SYSTEM.to_string()
    }

    fn optimize_system(&self, _context: Option<&str>) -> String {
        OPTIMIZE_SYSTEM.to_string()
    }
}

/// Contextual rubric: interpolates the caller-supplied policy string into the
/// instruction templates.
pub struct ContextualRubric;

impl RubricStrategy for ContextualRubric {
    fn analysis_system(&self, context: Option<&str>) -> String {
        ANALYZE_CONTEXT_TEMPLATE.replace("{context}", effective_context(context))
    }

    fn optimize_system(&self, context: Option<&str>) -> String {
        OPTIMIZE_CONTEXT_TEMPLATE.replace("{context}", effective_context(context))
    }
}

fn effective_context(context: Option<&str>) -> &str {
    match context {
        Some(c) if !c.trim().is_empty() => c,
        _ => NO_CONTEXT_FALLBACK,
    }
}

/// Builds the strategy selected by configuration.
pub fn build_rubric(kind: RubricStrategyKind) -> Arc<dyn RubricStrategy> {
    match kind {
        RubricStrategyKind::Fixed => Arc::new(FixedRubric),
        RubricStrategyKind::Contextual => Arc::new(ContextualRubric),
    }
}
