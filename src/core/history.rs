//! Transition log kept by the driver.
//!
//! Records one entry per dispatched action, applied or ignored. The log
//! lives in memory for the lifetime of a driver and is never persisted.

use super::state::GamePhase;
use crate::action::ActionTag;
use crate::reducer::Outcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one reducer step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Tag of the dispatched action
    pub action: ActionTag,
    /// Phase before the reducer ran
    pub from: GamePhase,
    /// Phase after the reducer ran
    pub to: GamePhase,
    /// Whether a guard rejected the action
    pub outcome: Outcome,
    /// Number of effects the reducer returned
    pub effects: usize,
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of reducer steps.
///
/// The log is immutable - `record` returns a new log with the entry added.
///
/// # Example
///
/// ```rust
/// use quizloop::action::ActionTag;
/// use quizloop::core::{GamePhase, TransitionLog, TransitionRecord};
/// use quizloop::reducer::Outcome;
/// use chrono::Utc;
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     action: ActionTag::NewGame,
///     from: GamePhase::Ended,
///     to: GamePhase::InProgress,
///     outcome: Outcome::Applied,
///     effects: 0,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.get_path(), vec![GamePhase::Ended, GamePhase::InProgress]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    transitions: Vec<TransitionRecord>,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a step, returning a new log. The original is left unchanged.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Phases visited: the starting phase, then each phase change.
    ///
    /// Steps that leave the phase unchanged (answers, mid-game advances,
    /// ignored actions) do not add to the path.
    pub fn get_path(&self) -> Vec<GamePhase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        for transition in &self.transitions {
            if path.last() != Some(&transition.to) {
                path.push(transition.to);
            }
        }
        path
    }

    /// Time between the first and last recorded step.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    /// Steps a guard turned into a no-op.
    pub fn ignored(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.transitions
            .iter()
            .filter(|transition| transition.outcome != Outcome::Applied)
    }
}
