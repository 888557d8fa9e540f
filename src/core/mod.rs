//! Core game data types.
//!
//! This module contains the pure data of the quiz:
//! - Questions, answers and the pool they are generated from
//! - The closed `GameState` sum type and the application `State`
//! - An in-memory transition log for drivers
//!
//! Nothing in this module performs side effects.

mod history;
mod question;
mod state;

pub use history::{TransitionLog, TransitionRecord};
pub use question::{Answer, AnsweredQuestion, OptionId, Question, QuestionItem, QuestionOption};
pub use state::{GamePhase, GameState, InProgress, State};
