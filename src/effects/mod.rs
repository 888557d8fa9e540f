//! Effects: deferred work returned by the reducer.
//!
//! The reducer stays pure by describing side effects instead of performing
//! them. Each effect is a Stillwater effect that, given a [`GameEnv`],
//! resolves to the actions a driver should dispatch next.
//!
//! Following Stillwater 0.11 conventions:
//! - Constructors build effects with `from_fn()` / `from_async()`
//! - The reducer hands out `BoxedEffect`s (one allocation per effect)
//! - Services are reached through the environment, never captured globally

mod effect;
mod env;

pub use effect::{advance_after_answer, generate_new_game, GameEffect};
pub use env::{Celebration, GameEnv, QuietCelebration, Timer, TokioTimer};
