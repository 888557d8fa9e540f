//! Question and answer values.
//!
//! Questions are produced by a [`QuestionGenerator`](crate::generate::QuestionGenerator)
//! from the pool of [`QuestionItem`]s. The core treats them as opaque apart
//! from comparing a submitted [`Answer`] with the correct option.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the question pool: a prompt and the answer that goes with it.
///
/// # Example
///
/// ```rust
/// use quizloop::core::QuestionItem;
///
/// let item = QuestionItem::new("fr", "Capital of France?", "Paris");
/// assert_eq!(item.answer, "Paris");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub id: String,
    pub prompt: String,
    pub answer: String,
}

impl QuestionItem {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}

/// Identifies one option of a question: the id of the pool item backing it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(pub String);

impl OptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A selectable option shown with a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: OptionId,
    pub label: String,
}

/// An immutable prompt with a fixed ordered set of options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Id of the pool item the question was generated from
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuestionOption>,
    pub correct_option: OptionId,
}

impl Question {
    /// Single equality check, no partial credit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use quizloop::core::{Answer, OptionId, Question, QuestionOption};
    ///
    /// let question = Question {
    ///     id: "q1".to_string(),
    ///     prompt: "2 + 2?".to_string(),
    ///     options: vec![
    ///         QuestionOption { id: OptionId::new("a"), label: "4".to_string() },
    ///         QuestionOption { id: OptionId::new("b"), label: "5".to_string() },
    ///     ],
    ///     correct_option: OptionId::new("a"),
    /// };
    ///
    /// assert!(question.is_correct(&Answer::new("a")));
    /// assert!(!question.is_correct(&Answer::new("b")));
    /// ```
    pub fn is_correct(&self, answer: &Answer) -> bool {
        answer.option == self.correct_option
    }

    pub fn option(&self, id: &OptionId) -> Option<&QuestionOption> {
        self.options.iter().find(|option| &option.id == id)
    }
}

/// The option a player picked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub option: OptionId,
}

impl Answer {
    pub fn new(option: impl Into<String>) -> Self {
        Self {
            option: OptionId::new(option),
        }
    }
}

impl From<OptionId> for Answer {
    fn from(option: OptionId) -> Self {
        Self { option }
    }
}

/// A question paired with the answer given for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: Question,
    pub answer: Answer,
}

impl AnsweredQuestion {
    pub fn new(question: Question, answer: Answer) -> Self {
        Self { question, answer }
    }

    pub fn is_correct(&self) -> bool {
        self.question.is_correct(&self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question {
            id: "q1".to_string(),
            prompt: "Largest planet?".to_string(),
            options: vec![
                QuestionOption {
                    id: OptionId::new("jupiter"),
                    label: "Jupiter".to_string(),
                },
                QuestionOption {
                    id: OptionId::new("mars"),
                    label: "Mars".to_string(),
                },
            ],
            correct_option: OptionId::new("jupiter"),
        }
    }

    #[test]
    fn correct_answer_matches_correct_option() {
        let question = sample_question();
        assert!(question.is_correct(&Answer::new("jupiter")));
    }

    #[test]
    fn other_options_are_incorrect() {
        let question = sample_question();
        assert!(!question.is_correct(&Answer::new("mars")));
        assert!(!question.is_correct(&Answer::new("pluto")));
    }

    #[test]
    fn option_lookup_by_id() {
        let question = sample_question();
        let option = question.option(&OptionId::new("mars"));
        assert_eq!(option.map(|o| o.label.as_str()), Some("Mars"));
        assert!(question.option(&OptionId::new("venus")).is_none());
    }

    #[test]
    fn answered_question_reports_correctness() {
        let right = AnsweredQuestion::new(sample_question(), Answer::new("jupiter"));
        let wrong = AnsweredQuestion::new(sample_question(), Answer::new("mars"));
        assert!(right.is_correct());
        assert!(!wrong.is_correct());
    }

    #[test]
    fn option_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&Answer::new("jupiter")).unwrap();
        assert_eq!(json, r#"{"option":"jupiter"}"#);
    }
}
