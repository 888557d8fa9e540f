//! Game configuration.
//!
//! Validation uses Stillwater's `Validation` type so that every violated
//! rule is reported at once instead of stopping at the first.

use crate::error::{ConfigError, GameError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Tunables for a game session.
///
/// # Example
///
/// ```rust
/// use quizloop::config::GameConfig;
/// use std::time::Duration;
///
/// let config = GameConfig::from_json(r#"{"questions_per_game": 10}"#).unwrap();
/// assert_eq!(config.questions_per_game, 10);
/// assert_eq!(config.advance_delay(), Duration::from_millis(1500));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Questions drawn from the pool for each new game
    pub questions_per_game: usize,
    /// Pause between an answer and the next question, in milliseconds
    pub advance_delay_ms: u64,
    /// Upper bound on options shown per question
    pub options_per_question: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            questions_per_game: 6,
            advance_delay_ms: 1500,
            options_per_question: 4,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON configuration. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json)?;
        config.into_valid()
    }

    /// Return the config if every rule holds, otherwise all violations.
    pub fn into_valid(self) -> Result<Self, GameError> {
        match self.validate() {
            Validation::Success(()) => Ok(self),
            Validation::Failure(errors) => Err(GameError::InvalidConfig(
                errors.iter().cloned().collect(),
            )),
        }
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    /// Check every rule, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let checks = vec![
            if self.questions_per_game >= 1 {
                Validation::success(())
            } else {
                Validation::fail(ConfigError::NoQuestions(self.questions_per_game))
            },
            if self.options_per_question >= 2 {
                Validation::success(())
            } else {
                Validation::fail(ConfigError::TooFewOptions(self.options_per_question))
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }
}
