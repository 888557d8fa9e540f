//! The reducer: `(State, Action) -> (State, effects)`.
//!
//! Every state/action pair has a defined result. Actions that arrive out of
//! order - a second answer, an advance before answering, anything after the
//! game ended - are ignored rather than rejected, so a stale effect resolving
//! late can never corrupt the game.

use crate::action::Action;
use crate::config::GameConfig;
use crate::core::{Answer, AnsweredQuestion, GameState, InProgress, Question, QuestionItem, State};
use crate::effects::{self, GameEffect};
use crate::error::GameError;
use crate::generate::QuestionGenerator;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;

/// Why the reducer turned an action into a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The current question already has an answer
    AlreadyAnswered,
    /// `next_question` before the current question was answered
    NotAnswered,
    /// The game is over
    GameEnded,
    /// No game has started yet
    NotStarted,
    /// `new_game` carried no questions
    EmptyQuestionList,
    UnrecognizedAction,
}

/// Whether a guard let the action through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

/// Result of one reducer step.
pub struct Reduction {
    pub state: State,
    pub effects: Vec<GameEffect>,
    pub outcome: Outcome,
}

impl Reduction {
    fn applied(state: State, effects: Vec<GameEffect>) -> Self {
        Self {
            state,
            effects,
            outcome: Outcome::Applied,
        }
    }

    fn ignored(state: State, reason: IgnoreReason) -> Self {
        Self {
            state,
            effects: Vec::new(),
            outcome: Outcome::Ignored(reason),
        }
    }

    /// True when the state was returned untouched with no effects.
    pub fn is_noop(&self) -> bool {
        matches!(self.outcome, Outcome::Ignored(_))
    }
}

/// The game's transition function, parameterised by [`GameConfig`].
///
/// # Example
///
/// ```rust
/// use quizloop::action::Action;
/// use quizloop::core::QuestionItem;
/// use quizloop::generate::SequentialGenerator;
/// use quizloop::reducer::GameReducer;
///
/// let pool: Vec<_> = (1..=10)
///     .map(|n| QuestionItem::new(format!("q{n}"), format!("Prompt {n}"), format!("Answer {n}")))
///     .collect();
///
/// let reducer = GameReducer::default();
/// let state = reducer.init_state(pool, &SequentialGenerator::default()).unwrap();
///
/// // Advancing before answering is ignored.
/// let step = reducer.reduce(state, Action::next_question());
/// assert!(step.is_noop());
///
/// // Answering schedules the delayed advance.
/// let step = reducer.reduce(step.state, Action::answer(quizloop::core::Answer::new("q1")));
/// assert_eq!(step.effects.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameReducer {
    config: GameConfig,
}

impl GameReducer {
    /// Fails with [`GameError::InvalidConfig`] when `config` breaks a rule.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Ok(Self {
            config: config.into_valid()?,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the initial state: a game already in progress on
    /// `questions_per_game` questions drawn from `pool`.
    pub fn init_state(
        &self,
        pool: impl Into<Arc<[QuestionItem]>>,
        generator: &dyn QuestionGenerator,
    ) -> Result<State, GameError> {
        let pool = pool.into();
        let questions = generator.generate(self.config.questions_per_game, &pool)?;
        let mut queue = VecDeque::from(questions);
        let game_state = match queue.pop_front() {
            Some(current) => GameState::InProgress(InProgress::new(current, queue)),
            None => GameState::BeforeStart,
        };
        Ok(State::new(pool, game_state))
    }

    /// Apply one action. Never fails and never runs effects.
    pub fn reduce(&self, state: State, action: Action) -> Reduction {
        let tag = action.tag();
        let from = state.game_state.phase();

        let reduction = match action {
            Action::StartGame => self.start_game(state),
            Action::NewGame { questions } => new_game(state, questions),
            Action::Answer { answer } => self.answer(state, answer),
            Action::NextQuestion => next_question(state),
            Action::Unrecognized => Reduction::ignored(state, IgnoreReason::UnrecognizedAction),
        };

        match reduction.outcome {
            Outcome::Applied => log::debug!(
                "{tag}: {from} -> {} ({} effects)",
                reduction.state.game_state.phase(),
                reduction.effects.len()
            ),
            Outcome::Ignored(reason) => log::debug!("{tag} ignored in {from}: {reason:?}"),
        }

        reduction
    }

    fn start_game(&self, state: State) -> Reduction {
        let effect =
            effects::generate_new_game(Arc::clone(&state.pool), self.config.questions_per_game);
        Reduction::applied(state, vec![effect])
    }

    fn answer(&self, mut state: State, answer: Answer) -> Reduction {
        let progress = match &mut state.game_state {
            GameState::InProgress(progress) => progress,
            GameState::Ended { .. } => return Reduction::ignored(state, IgnoreReason::GameEnded),
            GameState::BeforeStart => return Reduction::ignored(state, IgnoreReason::NotStarted),
        };

        if progress.is_answered() {
            return Reduction::ignored(state, IgnoreReason::AlreadyAnswered);
        }

        let correct = progress.current_question.is_correct(&answer);
        progress.current_answer = Some(answer);

        let effect = effects::advance_after_answer(correct, self.config.advance_delay());
        Reduction::applied(state, vec![effect])
    }
}

fn new_game(mut state: State, questions: Vec<Question>) -> Reduction {
    let mut queue = VecDeque::from(questions);
    let Some(current) = queue.pop_front() else {
        return Reduction::ignored(state, IgnoreReason::EmptyQuestionList);
    };

    state.game_state = GameState::InProgress(InProgress::new(current, queue));
    Reduction::applied(state, Vec::new())
}

fn next_question(mut state: State) -> Reduction {
    let progress = match &mut state.game_state {
        GameState::InProgress(progress) => progress,
        GameState::Ended { .. } => return Reduction::ignored(state, IgnoreReason::GameEnded),
        GameState::BeforeStart => return Reduction::ignored(state, IgnoreReason::NotStarted),
    };

    let Some(answer) = progress.current_answer.take() else {
        return Reduction::ignored(state, IgnoreReason::NotAnswered);
    };

    match progress.next_questions.pop_front() {
        Some(next) => {
            let completed = std::mem::replace(&mut progress.current_question, next);
            progress
                .answered_questions
                .push_front(AnsweredQuestion::new(completed, answer));
        }
        None => {
            let mut answered_questions = std::mem::take(&mut progress.answered_questions);
            answered_questions.push_front(AnsweredQuestion::new(
                progress.current_question.clone(),
                answer,
            ));
            state.game_state = GameState::Ended { answered_questions };
        }
    }

    Reduction::applied(state, Vec::new())
}

/// Build the initial state with the default configuration.
pub fn init_state(
    pool: impl Into<Arc<[QuestionItem]>>,
    generator: &dyn QuestionGenerator,
) -> Result<State, GameError> {
    GameReducer::default().init_state(pool, generator)
}

/// Apply one action with the default configuration.
pub fn reduce(state: State, action: Action) -> Reduction {
    GameReducer::default().reduce(state, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionTag;
    use crate::core::GamePhase;
    use crate::effects::{GameEnv, Timer};
    use crate::error::ConfigError;
    use crate::generate::SequentialGenerator;
    use async_trait::async_trait;
    use std::time::Duration;
    use stillwater::effect::Effect;

    struct InstantTimer;

    #[async_trait]
    impl Timer for InstantTimer {
        async fn wait(&self, _duration: Duration) {}
    }

    fn env() -> GameEnv {
        GameEnv::default().with_timer(Arc::new(InstantTimer))
    }

    fn pool(size: usize) -> Vec<QuestionItem> {
        (1..=size)
            .map(|n| QuestionItem::new(format!("q{n}"), format!("Prompt {n}"), format!("Answer {n}")))
            .collect()
    }

    fn initial() -> State {
        init_state(pool(10), &SequentialGenerator::default()).unwrap()
    }

    fn progress(state: &State) -> &InProgress {
        state
            .game_state
            .in_progress()
            .expect("game should be in progress")
    }

    fn correct_answer(state: &State) -> Answer {
        Answer::from(progress(state).current_question.correct_option.clone())
    }

    fn answered(state: State) -> State {
        let answer = correct_answer(&state);
        reduce(state, Action::answer(answer)).state
    }

    fn ended() -> State {
        let mut state = initial();
        for _ in 0..6 {
            state = reduce(answered(state), Action::next_question()).state;
        }
        state
    }

    fn ids<'a>(questions: impl IntoIterator<Item = &'a Question>) -> Vec<&'a str> {
        questions.into_iter().map(|q| q.id.as_str()).collect()
    }

    #[test]
    fn init_state_starts_on_first_question() {
        let state = initial();
        let progress = progress(&state);

        assert_eq!(progress.current_question.id, "q1");
        assert_eq!(
            ids(&progress.next_questions),
            vec!["q2", "q3", "q4", "q5", "q6"]
        );
        assert!(progress.current_answer.is_none());
        assert!(progress.answered_questions.is_empty());
        assert_eq!(state.pool.len(), 10);
    }

    #[test]
    fn init_state_fails_on_short_pool() {
        let result = init_state(pool(3), &SequentialGenerator::default());
        assert!(matches!(result, Err(GameError::InsufficientPool { .. })));
    }

    #[test]
    fn init_state_honours_configured_question_count() {
        let reducer = GameReducer::new(GameConfig {
            questions_per_game: 3,
            ..GameConfig::default()
        })
        .unwrap();
        let state = reducer
            .init_state(pool(10), &SequentialGenerator::default())
            .unwrap();
        assert_eq!(progress(&state).total_questions(), 3);
    }

    #[test]
    fn new_rejects_zero_questions_per_game() {
        let result = GameReducer::new(GameConfig {
            questions_per_game: 0,
            ..GameConfig::default()
        });
        match result {
            Err(GameError::InvalidConfig(errors)) => {
                assert_eq!(errors, vec![ConfigError::NoQuestions(0)]);
            }
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn answer_records_and_schedules_one_effect() {
        let state = initial();
        let answer = correct_answer(&state);

        let step = reduce(state, Action::answer(answer.clone()));

        assert_eq!(step.outcome, Outcome::Applied);
        assert_eq!(progress(&step.state).current_answer, Some(answer));
        assert_eq!(step.effects.len(), 1);
    }

    #[test]
    fn wrong_answer_is_still_recorded() {
        let step = reduce(initial(), Action::answer(Answer::new("q2")));
        assert_eq!(
            progress(&step.state).current_answer,
            Some(Answer::new("q2"))
        );
        assert_eq!(step.effects.len(), 1);
    }

    #[test]
    fn second_answer_is_ignored() {
        let state = answered(initial());
        let before = state.clone();

        let step = reduce(state, Action::answer(Answer::new("q3")));

        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::AlreadyAnswered));
        assert_eq!(step.state, before);
        assert!(step.effects.is_empty());
    }

    #[test]
    fn next_question_before_answer_is_ignored() {
        let state = initial();
        let before = state.clone();

        let step = reduce(state, Action::next_question());

        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::NotAnswered));
        assert_eq!(step.state, before);
        assert!(step.effects.is_empty());
    }

    #[test]
    fn next_question_advances_queue() {
        let state = answered(initial());
        let first_answer = progress(&state).current_answer.clone().unwrap();

        let step = reduce(state, Action::next_question());
        let progress = progress(&step.state);

        assert!(step.effects.is_empty());
        assert_eq!(progress.current_question.id, "q2");
        assert_eq!(ids(&progress.next_questions), vec!["q3", "q4", "q5", "q6"]);
        assert!(progress.current_answer.is_none());
        assert_eq!(progress.answered_questions.len(), 1);
        assert_eq!(progress.answered_questions[0].question.id, "q1");
        assert_eq!(progress.answered_questions[0].answer, first_answer);
    }

    #[test]
    fn last_question_ends_the_game_newest_first() {
        let state = ended();

        match &state.game_state {
            GameState::Ended { answered_questions } => {
                assert_eq!(
                    ids(answered_questions.iter().map(|a| &a.question)),
                    vec!["q6", "q5", "q4", "q3", "q2", "q1"]
                );
                assert!(answered_questions.iter().all(AnsweredQuestion::is_correct));
            }
            other => panic!("Expected ended game, got {}", other.name()),
        }
    }

    #[test]
    fn ended_ignores_answer_and_next_question() {
        let state = ended();
        let before = state.clone();

        let step = reduce(state, Action::answer(Answer::new("q1")));
        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::GameEnded));
        assert_eq!(step.state, before);

        let step = reduce(step.state, Action::next_question());
        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::GameEnded));
        assert_eq!(step.state, before);
        assert!(step.effects.is_empty());
    }

    #[test]
    fn before_start_ignores_play_actions() {
        let state = State::new(pool(10), GameState::BeforeStart);

        let step = reduce(state, Action::answer(Answer::new("q1")));
        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::NotStarted));

        let step = reduce(step.state, Action::next_question());
        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::NotStarted));
        assert_eq!(step.state.game_state, GameState::BeforeStart);
    }

    #[test]
    fn start_game_leaves_state_and_schedules_generation() {
        for state in [initial(), answered(initial()), ended()] {
            let before = state.clone();
            let step = reduce(state, Action::start_game());

            assert_eq!(step.outcome, Outcome::Applied);
            assert_eq!(step.state, before);
            assert_eq!(step.effects.len(), 1);
        }
    }

    #[test]
    fn new_game_replaces_any_game_state() {
        let questions = SequentialGenerator::default().generate(6, &pool(10)).unwrap();

        for state in [
            initial(),
            answered(initial()),
            ended(),
            State::new(pool(10), GameState::BeforeStart),
        ] {
            let step = reduce(state, Action::new_game(questions.clone()));
            let progress = progress(&step.state);

            assert_eq!(step.outcome, Outcome::Applied);
            assert!(step.effects.is_empty());
            assert_eq!(progress.current_question.id, "q1");
            assert_eq!(progress.next_questions.len(), 5);
            assert!(progress.current_answer.is_none());
            assert!(progress.answered_questions.is_empty());
        }
    }

    #[test]
    fn new_game_with_no_questions_is_ignored() {
        let state = ended();
        let before = state.clone();

        let step = reduce(state, Action::new_game(Vec::new()));

        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::EmptyQuestionList));
        assert_eq!(step.state, before);
    }

    #[test]
    fn unrecognized_action_is_ignored() {
        let state = initial();
        let before = state.clone();

        let step = reduce(state, Action::Unrecognized);

        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::UnrecognizedAction));
        assert_eq!(step.state, before);
        assert_eq!(Action::Unrecognized.tag(), ActionTag::Unrecognized);
    }

    #[tokio::test]
    async fn answer_effect_resolves_to_next_question() {
        let state = initial();
        let answer = correct_answer(&state);
        let mut step = reduce(state, Action::answer(answer));

        let effect = step.effects.remove(0);
        let actions = effect.run(&env()).await.unwrap();
        assert_eq!(actions, vec![Action::next_question()]);

        let step = reduce(step.state, actions[0].clone());
        assert_eq!(progress(&step.state).current_question.id, "q2");
    }

    #[tokio::test]
    async fn start_game_effect_resolves_to_fresh_game() {
        let state = ended();
        let mut step = reduce(state, Action::start_game());

        let actions = step.effects.remove(0).run(&env()).await.unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].tag(), ActionTag::NewGame);

        let step = reduce(step.state, actions[0].clone());
        assert_eq!(step.state.game_state.phase(), GamePhase::InProgress);
        assert_eq!(progress(&step.state).total_questions(), 6);
    }

    #[tokio::test]
    async fn stale_advance_after_restart_is_harmless() {
        // Answer, then restart before the delayed advance resolves.
        let state = initial();
        let answer = correct_answer(&state);
        let mut answered = reduce(state, Action::answer(answer));
        let stale = answered.effects.remove(0);

        let mut restart = reduce(answered.state, Action::start_game());
        let new_game = restart.effects.remove(0).run(&env()).await.unwrap();
        let fresh = reduce(restart.state, new_game[0].clone()).state;

        let late = stale.run(&env()).await.unwrap();
        let step = reduce(fresh.clone(), late[0].clone());

        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::NotAnswered));
        assert_eq!(step.state, fresh);
    }
}
