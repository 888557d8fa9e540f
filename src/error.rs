//! Error types for game setup, question generation and the effect driver.
//!
//! The reducer never fails: out-of-order actions are ignored, not rejected.
//! Errors only surface where the core touches its collaborators.

use thiserror::Error;

/// Errors raised outside the reducer.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Question pool too small: requested {requested}, available {available}")]
    InsufficientPool { requested: usize, available: usize },

    #[error("Invalid game configuration: {}", format_violations(.0))]
    InvalidConfig(Vec<ConfigError>),

    #[error("Failed to parse game configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Effect task did not complete: {0}")]
    EffectTask(#[from] tokio::task::JoinError),
}

/// A single configuration rule violation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("questions_per_game must be at least 1 (got {0})")]
    NoQuestions(usize),

    #[error("options_per_question must be at least 2 (got {0})")]
    TooFewOptions(usize),
}

fn format_violations(violations: &[ConfigError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
