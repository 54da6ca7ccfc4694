use anyhow::{Context, Result};

/// Instruction-template strategy for the analyze/optimize rubrics.
///
/// `Fixed` uses the built-in evaluation rubric and ignores any caller
/// context. `Contextual` interpolates the caller-supplied policy string
/// into the instruction templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RubricStrategyKind {
    Fixed,
    Contextual,
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub rubric_strategy: RubricStrategyKind,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            rubric_strategy: parse_strategy(
                &std::env::var("RUBRIC_STRATEGY").unwrap_or_else(|_| "fixed".to_string()),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_strategy(value: &str) -> Result<RubricStrategyKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "fixed" => Ok(RubricStrategyKind::Fixed),
        "contextual" => Ok(RubricStrategyKind::Contextual),
        other => anyhow::bail!("RUBRIC_STRATEGY must be 'fixed' or 'contextual', got '{other}'"),
    }
}
