//! Actions: the events that drive the reducer.
//!
//! Constructors build actions without validating anything; guards live in
//! the reducer.

use crate::core::{Answer, Question};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An event describing an intended state change.
///
/// Actions arriving as JSON with an unknown `type` deserialize to
/// [`Action::Unrecognized`], which the reducer ignores.
///
/// # Example
///
/// ```rust
/// use quizloop::action::{Action, ActionTag};
///
/// let action: Action = serde_json::from_str(r#"{"type":"next_question"}"#).unwrap();
/// assert_eq!(action, Action::next_question());
///
/// let foreign: Action = serde_json::from_str(r#"{"type":"pause"}"#).unwrap();
/// assert_eq!(foreign.tag(), ActionTag::Unrecognized);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Answer { answer: Answer },
    NextQuestion,
    StartGame,
    NewGame { questions: Vec<Question> },
    #[serde(other)]
    Unrecognized,
}

impl Action {
    pub fn answer(answer: impl Into<Answer>) -> Self {
        Self::Answer {
            answer: answer.into(),
        }
    }

    pub fn next_question() -> Self {
        Self::NextQuestion
    }

    pub fn start_game() -> Self {
        Self::StartGame
    }

    pub fn new_game(questions: Vec<Question>) -> Self {
        Self::NewGame { questions }
    }

    pub fn tag(&self) -> ActionTag {
        match self {
            Self::Answer { .. } => ActionTag::Answer,
            Self::NextQuestion => ActionTag::NextQuestion,
            Self::StartGame => ActionTag::StartGame,
            Self::NewGame { .. } => ActionTag::NewGame,
            Self::Unrecognized => ActionTag::Unrecognized,
        }
    }
}

/// Payload-free discriminant of an [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionTag {
    Answer,
    NextQuestion,
    StartGame,
    NewGame,
    Unrecognized,
}

impl ActionTag {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Answer => "answer",
            Self::NextQuestion => "next_question",
            Self::StartGame => "start_game",
            Self::NewGame => "new_game",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
