//! Game state types.
//!
//! [`GameState`] is a closed sum type: every consumer matches it
//! exhaustively. [`State`] pairs it with the question pool that new games
//! are drawn from.

use super::question::{Answer, AnsweredQuestion, Question, QuestionItem};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Coarse position of a game, used for logging and history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    BeforeStart,
    InProgress,
    Ended,
}

impl GamePhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BeforeStart => "before_start",
            Self::InProgress => "in_progress",
            Self::Ended => "ended",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A game that is being played.
///
/// `answered_questions` is most-recent first; `next_questions` is in
/// presentation order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InProgress {
    pub answered_questions: VecDeque<AnsweredQuestion>,
    pub current_question: Question,
    pub current_answer: Option<Answer>,
    pub next_questions: VecDeque<Question>,
}

impl InProgress {
    /// Start a fresh game on `current_question` with `next_questions` queued.
    pub fn new(current_question: Question, next_questions: VecDeque<Question>) -> Self {
        Self {
            answered_questions: VecDeque::new(),
            current_question,
            current_answer: None,
            next_questions,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.current_answer.is_some()
    }

    /// Answered + current + queued. Fixed for the lifetime of a game.
    pub fn total_questions(&self) -> usize {
        self.answered_questions.len() + 1 + self.next_questions.len()
    }
}

/// Where the player is in the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum GameState {
    /// Not produced by any transition; kept for a future splash screen.
    BeforeStart,
    InProgress(InProgress),
    Ended {
        answered_questions: VecDeque<AnsweredQuestion>,
    },
}

impl GameState {
    pub fn phase(&self) -> GamePhase {
        match self {
            Self::BeforeStart => GamePhase::BeforeStart,
            Self::InProgress(_) => GamePhase::InProgress,
            Self::Ended { .. } => GamePhase::Ended,
        }
    }

    pub fn name(&self) -> &'static str {
        self.phase().name()
    }

    /// Only `Ended` is terminal; a new game still replaces it.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Ended { .. })
    }

    pub fn in_progress(&self) -> Option<&InProgress> {
        match self {
            Self::InProgress(progress) => Some(progress),
            _ => None,
        }
    }

    /// Questions completed so far, most-recent first.
    pub fn answered_questions(&self) -> Option<&VecDeque<AnsweredQuestion>> {
        match self {
            Self::BeforeStart => None,
            Self::InProgress(progress) => Some(&progress.answered_questions),
            Self::Ended { answered_questions } => Some(answered_questions),
        }
    }
}

/// Full application state: the question pool plus the current game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub pool: Arc<[QuestionItem]>,
    pub game_state: GameState,
}

impl State {
    pub fn new(pool: impl Into<Arc<[QuestionItem]>>, game_state: GameState) -> Self {
        Self {
            pool: pool.into(),
            game_state,
        }
    }
}
