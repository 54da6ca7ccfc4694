//! Axum route handlers for the analyze/optimize operations.

use axum::{extract::State, Json};

use crate::analysis::engine::{analyze_prompt, optimize_prompt};
use crate::analysis::models::{AnalysisReport, AnalyzeRequest, OptimizeRequest, OptimizeResult};
use crate::errors::AppError;
use crate::state::AppState;

/// Validation message shared by both operations (frontend contract).
const PROMPT_REQUIRED: &str = "O prompt é obrigatório.";

/// POST /api/analyze
///
/// Scores and critiques the submitted prompt. Validation happens before any
/// remote call is made.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation(PROMPT_REQUIRED.to_string()));
    }

    let report = analyze_prompt(
        &request.prompt,
        request.context.as_deref(),
        &state.llm,
        state.rubric.as_ref(),
    )
    .await?;

    Ok(Json(report))
}

/// POST /api/optimize
///
/// Rewrites the submitted prompt for clarity and returns the model text
/// verbatim under `optimizedPrompt`.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResult>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation(PROMPT_REQUIRED.to_string()));
    }

    let result = optimize_prompt(
        &request.prompt,
        request.context.as_deref(),
        &state.llm,
        state.rubric.as_ref(),
    )
    .await?;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::json;
    use tower::ServiceExt;

    use crate::analysis::rubric::build_rubric;
    use crate::config::{Config, RubricStrategyKind};
    use crate::llm_client::LlmClient;
    use crate::routes::build_router;
    use crate::state::AppState;

    /// Router over a state whose credential is a dummy: any request that
    /// reaches the remote call would fail, so these tests also prove the
    /// validator rejects before calling out.
    fn test_router() -> Router {
        let config = Config {
            anthropic_api_key: "test-key".to_string(),
            rubric_strategy: RubricStrategyKind::Fixed,
            port: 3000,
            rust_log: "info".to_string(),
        };
        let state = AppState {
            llm: LlmClient::new(config.anthropic_api_key.clone()),
            rubric: build_rubric(config.rubric_strategy),
            config,
        };
        build_router(state)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_empty_prompt_is_400() {
        let response = test_router()
            .oneshot(post_json("/api/analyze", json!({ "prompt": "" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "O prompt é obrigatório." })
        );
    }

    #[tokio::test]
    async fn test_analyze_missing_prompt_field_is_400() {
        let response = test_router()
            .oneshot(post_json("/api/analyze", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "O prompt é obrigatório." })
        );
    }

    #[tokio::test]
    async fn test_analyze_whitespace_prompt_is_400() {
        let response = test_router()
            .oneshot(post_json("/api/analyze", json!({ "prompt": "   \n" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_optimize_missing_prompt_field_is_400() {
        let response = test_router()
            .oneshot(post_json(
                "/api/optimize",
                json!({ "context": "só o contexto, sem prompt" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "O prompt é obrigatório." })
        );
    }

    #[tokio::test]
    async fn test_health_is_200() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }
}
