//! Quizloop: the control core of an interactive quiz game
//!
//! Quizloop follows the "pure core, imperative shell" philosophy. The
//! reducer is a pure function from `(State, Action)` to the next state and a
//! list of effects. Effects are Stillwater effects that a driver runs against
//! a [`GameEnv`](effects::GameEnv); each resolves to further actions, closing
//! the loop: action → reducer → (state, effects) → effect → action → …
//!
//! # Core Concepts
//!
//! - **State**: the question pool plus a closed [`GameState`](crate::core::GameState)
//! - **Actions**: `answer`, `next_question`, `start_game`, `new_game`
//! - **Reducer**: total and crash-free; out-of-order actions are no-ops
//! - **Effects**: deferred delay, celebration and question generation
//! - **Store**: a reference Tokio driver with a single writer
//!
//! # Example
//!
//! ```rust
//! use quizloop::action::Action;
//! use quizloop::core::{Answer, QuestionItem};
//! use quizloop::generate::SequentialGenerator;
//! use quizloop::reducer::{init_state, reduce};
//!
//! let pool: Vec<_> = (1..=10)
//!     .map(|n| QuestionItem::new(format!("q{n}"), format!("Prompt {n}"), format!("Answer {n}")))
//!     .collect();
//!
//! let state = init_state(pool, &SequentialGenerator::default()).unwrap();
//! let progress = state.game_state.in_progress().unwrap();
//! assert_eq!(progress.current_question.id, "q1");
//! assert_eq!(progress.next_questions.len(), 5);
//!
//! let step = reduce(state, Action::answer(Answer::new("q1")));
//! assert_eq!(step.effects.len(), 1);
//! ```

pub mod action;
pub mod config;
pub mod core;
pub mod effects;
pub mod error;
pub mod generate;
pub mod reducer;
pub mod runtime;

// Re-export commonly used types
pub use action::Action;
pub use config::GameConfig;
pub use crate::core::{Answer, AnsweredQuestion, GameState, Question, QuestionItem, State};
pub use effects::{GameEffect, GameEnv};
pub use error::GameError;
pub use reducer::{init_state, reduce, GameReducer, Reduction};
pub use runtime::Store;
