//! Effect constructors used by the reducer.

use super::env::{Celebration, GameEnv, Timer};
use crate::action::Action;
use crate::core::QuestionItem;
use crate::error::GameError;
use crate::generate::QuestionGenerator;
use std::sync::Arc;
use std::time::Duration;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// A deferred computation that resolves to further actions.
///
/// Effects hold only the values they captured at construction; they never
/// see or mutate game state.
pub type GameEffect = BoxedEffect<Vec<Action>, GameError, GameEnv>;

/// Celebrate a correct answer, pause, then move on to the next question.
pub fn advance_after_answer(correct: bool, delay: Duration) -> GameEffect {
    from_async(move |env: &GameEnv| {
        let celebration = Arc::clone(&env.celebration);
        let timer = Arc::clone(&env.timer);
        async move {
            if correct {
                celebration.celebrate();
            }
            timer.wait(delay).await;
            Ok::<_, GameError>(vec![Action::next_question()])
        }
    })
    .boxed()
}

/// Draw `count` fresh questions from `pool` and start a new game with them.
pub fn generate_new_game(pool: Arc<[QuestionItem]>, count: usize) -> GameEffect {
    from_fn(move |env: &GameEnv| -> Result<Vec<Action>, GameError> {
        let questions = env.generator.generate(count, &pool)?;
        Ok(vec![Action::new_game(questions)])
    })
    .boxed()
}
