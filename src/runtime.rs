//! Reference driver: owns the state and runs effects.
//!
//! The store applies one action at a time, spawns each returned effect as
//! its own Tokio task, and feeds the actions those effects produce back into
//! the reducer. Effects are never cancelled; the reducer's guards absorb any
//! that resolve after the game has moved on.

use crate::action::{Action, ActionTag};
use crate::core::{GamePhase, GameState, InProgress, State, TransitionLog, TransitionRecord};
use crate::effects::{GameEffect, GameEnv};
use crate::error::GameError;
use crate::reducer::{GameReducer, Outcome};
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::Arc;
use stillwater::effect::Effect;
use tokio::task::JoinSet;

/// Single-writer owner of the game state.
pub struct Store {
    state: State,
    reducer: GameReducer,
    env: GameEnv,
    history: TransitionLog,
    pending: JoinSet<Result<Vec<Action>, GameError>>,
}

impl Store {
    pub fn new(state: State, reducer: GameReducer, env: GameEnv) -> Self {
        Self {
            state,
            reducer,
            env,
            history: TransitionLog::new(),
            pending: JoinSet::new(),
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Every reducer step applied so far (pure)
    pub fn history(&self) -> &TransitionLog {
        &self.history
    }

    /// Effects spawned but not yet resolved
    pub fn pending_effects(&self) -> usize {
        self.pending.len()
    }

    /// Run the reducer and return its effects without scheduling them.
    pub fn apply(&mut self, action: Action) -> Vec<GameEffect> {
        let tag = action.tag();
        let from = self.state.game_state.phase();

        let placeholder = State::new(Arc::clone(&self.state.pool), GameState::BeforeStart);
        let state = std::mem::replace(&mut self.state, placeholder);
        let reduction = self.reducer.reduce(state, action);
        self.state = reduction.state;

        let to = self.state.game_state.phase();
        self.history = self.history.record(TransitionRecord {
            action: tag,
            from,
            to,
            outcome: reduction.outcome,
            effects: reduction.effects.len(),
            timestamp: Utc::now(),
        });

        if reduction.outcome == Outcome::Applied {
            match (tag, to) {
                (ActionTag::NewGame, _) => log::info!(
                    "Game started with {} questions",
                    self.state
                        .game_state
                        .in_progress()
                        .map_or(0, InProgress::total_questions)
                ),
                (_, GamePhase::Ended) if from != to => log::info!(
                    "Game ended after {} questions",
                    self.state
                        .game_state
                        .answered_questions()
                        .map_or(0, VecDeque::len)
                ),
                _ => {}
            }
        }

        reduction.effects
    }

    /// Apply an action and spawn its effects. Must be called inside a Tokio runtime.
    pub fn dispatch(&mut self, action: Action) {
        for effect in self.apply(action) {
            let env = self.env.clone();
            self.pending.spawn(async move { effect.run(&env).await });
        }
    }

    /// Wait for one effect to resolve and dispatch the actions it produced.
    ///
    /// Returns `None` when nothing is pending.
    pub async fn next_resolution(&mut self) -> Option<Result<(), GameError>> {
        let joined = self.pending.join_next().await?;
        let result = match joined {
            Ok(Ok(actions)) => {
                for action in actions {
                    self.dispatch(action);
                }
                Ok(())
            }
            Ok(Err(err)) => Err(err),
            Err(join_err) => Err(GameError::from(join_err)),
        };

        if let Err(err) = &result {
            log::error!("Effect failed: {err}");
        }
        Some(result)
    }

    /// Resolve effects until none are pending.
    ///
    /// Stops at the first failed effect; effects still pending stay queued.
    pub async fn run_until_idle(&mut self) -> Result<(), GameError> {
        while let Some(result) = self.next_resolution().await {
            result?;
        }
        Ok(())
    }
}
