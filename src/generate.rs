//! Question generation from the question pool.
//!
//! Each generated [`Question`] takes its prompt and correct option from one
//! pool item and its distractors from the answers of other items. Every
//! question in a game comes from a distinct item.
//!
//! A pool smaller than the requested count is an error, never a short game.

use crate::core::{OptionId, Question, QuestionItem, QuestionOption};
use crate::error::GameError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::Mutex;

/// Produces the ordered question list for a new game.
pub trait QuestionGenerator: Send + Sync {
    /// Generate exactly `count` questions from `pool`.
    ///
    /// Fails with [`GameError::InsufficientPool`] when the pool has fewer
    /// than `count` items.
    fn generate(&self, count: usize, pool: &[QuestionItem]) -> Result<Vec<Question>, GameError>;
}

fn ensure_pool(count: usize, pool: &[QuestionItem]) -> Result<(), GameError> {
    if pool.len() < count {
        return Err(GameError::InsufficientPool {
            requested: count,
            available: pool.len(),
        });
    }
    Ok(())
}

/// Build the options for `pool[index]`, correct option first.
///
/// Distractors are taken in the given order, skipping the item itself and
/// any answer text already offered.
fn build_options(
    pool: &[QuestionItem],
    index: usize,
    distractors: impl IntoIterator<Item = usize>,
    max_options: usize,
) -> Vec<QuestionOption> {
    let item = &pool[index];
    let mut labels: HashSet<&str> = HashSet::from([item.answer.as_str()]);
    let mut options = vec![option_for(item)];

    for candidate in distractors {
        if options.len() >= max_options {
            break;
        }
        let other = &pool[candidate];
        if candidate == index || !labels.insert(other.answer.as_str()) {
            continue;
        }
        options.push(option_for(other));
    }

    options
}

fn option_for(item: &QuestionItem) -> QuestionOption {
    QuestionOption {
        id: OptionId::new(item.id.clone()),
        label: item.answer.clone(),
    }
}

fn question_for(item: &QuestionItem, options: Vec<QuestionOption>) -> Question {
    Question {
        id: item.id.clone(),
        prompt: item.prompt.clone(),
        options,
        correct_option: OptionId::new(item.id.clone()),
    }
}

/// Takes the first `count` items in pool order.
///
/// Distractors are the items that follow cyclically, and the correct option
/// rotates through the option slots so it is not always first. Output is
/// fully determined by the pool.
///
/// # Example
///
/// ```rust
/// use quizloop::core::QuestionItem;
/// use quizloop::generate::{QuestionGenerator, SequentialGenerator};
///
/// let pool: Vec<_> = (1..=3)
///     .map(|n| QuestionItem::new(format!("q{n}"), format!("Prompt {n}"), format!("Answer {n}")))
///     .collect();
///
/// let questions = SequentialGenerator::new(2).generate(2, &pool).unwrap();
/// assert_eq!(questions[0].id, "q1");
/// assert_eq!(questions[1].id, "q2");
/// assert_eq!(questions[0].options.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct SequentialGenerator {
    options_per_question: usize,
}

impl SequentialGenerator {
    pub fn new(options_per_question: usize) -> Self {
        Self {
            options_per_question,
        }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new(4)
    }
}

impl QuestionGenerator for SequentialGenerator {
    fn generate(&self, count: usize, pool: &[QuestionItem]) -> Result<Vec<Question>, GameError> {
        ensure_pool(count, pool)?;

        let questions = (0..count)
            .map(|index| {
                let following = (1..pool.len()).map(|offset| (index + offset) % pool.len());
                let mut options = build_options(pool, index, following, self.options_per_question);
                let slot = index % options.len();
                options.swap(0, slot);
                question_for(&pool[index], options)
            })
            .collect();

        Ok(questions)
    }
}

/// Draws a random sample of items with random distractors and option order.
///
/// Use [`ShuffledGenerator::with_seed`] for reproducible games.
#[derive(Debug)]
pub struct ShuffledGenerator {
    options_per_question: usize,
    rng: Mutex<StdRng>,
}

impl ShuffledGenerator {
    pub fn new(options_per_question: usize) -> Self {
        Self {
            options_per_question,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(options_per_question: usize, seed: u64) -> Self {
        Self {
            options_per_question,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl QuestionGenerator for ShuffledGenerator {
    fn generate(&self, count: usize, pool: &[QuestionItem]) -> Result<Vec<Question>, GameError> {
        ensure_pool(count, pool)?;

        // Poisoning leaves the RNG state valid.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let picks = rand::seq::index::sample(&mut *rng, pool.len(), count).into_vec();

        let questions = picks
            .into_iter()
            .map(|index| {
                let mut others: Vec<usize> = (0..pool.len()).filter(|&i| i != index).collect();
                others.shuffle(&mut *rng);
                let mut options = build_options(pool, index, others, self.options_per_question);
                options.shuffle(&mut *rng);
                question_for(&pool[index], options)
            })
            .collect();

        Ok(questions)
    }
}
