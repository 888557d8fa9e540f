//! Environment handed to effects when they run.
//!
//! The services the core consumes are traits so tests and front ends can
//! swap them: question generation, the delay, and the celebration.

use crate::config::GameConfig;
use crate::generate::{QuestionGenerator, SequentialGenerator};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Delay service.
#[async_trait]
pub trait Timer: Send + Sync {
    /// Resolve after at least `duration`.
    async fn wait(&self, duration: Duration);
}

/// Timer backed by `tokio::time::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Fire-and-forget celebratory animation.
pub trait Celebration: Send + Sync {
    fn celebrate(&self);
}

impl<F> Celebration for F
where
    F: Fn() + Send + Sync,
{
    fn celebrate(&self) {
        self()
    }
}

/// Celebration that only logs.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuietCelebration;

impl Celebration for QuietCelebration {
    fn celebrate(&self) {
        log::debug!("Correct answer");
    }
}

/// Services available to running effects.
///
/// # Example
///
/// ```rust
/// use quizloop::effects::GameEnv;
/// use quizloop::generate::ShuffledGenerator;
/// use std::sync::Arc;
///
/// let env = GameEnv::default()
///     .with_generator(Arc::new(ShuffledGenerator::new(4)))
///     .with_celebration(Arc::new(|| println!("Well done!")));
/// ```
#[derive(Clone)]
pub struct GameEnv {
    pub generator: Arc<dyn QuestionGenerator>,
    pub timer: Arc<dyn Timer>,
    pub celebration: Arc<dyn Celebration>,
}

impl GameEnv {
    pub fn new(
        generator: Arc<dyn QuestionGenerator>,
        timer: Arc<dyn Timer>,
        celebration: Arc<dyn Celebration>,
    ) -> Self {
        Self {
            generator,
            timer,
            celebration,
        }
    }

    /// Default services with a sequential generator showing
    /// `config.options_per_question` options.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::default().with_generator(Arc::new(SequentialGenerator::new(
            config.options_per_question,
        )))
    }

    pub fn with_generator(mut self, generator: Arc<dyn QuestionGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_timer(mut self, timer: Arc<dyn Timer>) -> Self {
        self.timer = timer;
        self
    }

    pub fn with_celebration(mut self, celebration: Arc<dyn Celebration>) -> Self {
        self.celebration = celebration;
        self
    }
}

impl Default for GameEnv {
    /// Sequential questions, a real Tokio timer and a quiet celebration.
    fn default() -> Self {
        Self::new(
            Arc::new(SequentialGenerator::default()),
            Arc::new(TokioTimer),
            Arc::new(QuietCelebration),
        )
    }
}
