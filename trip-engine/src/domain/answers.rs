//! Question, option and area identifiers, and the per-session answer set.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new id from any string-like value.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id! {
    /// Identifier of a multiple-choice question.
    QuestionId
}

string_id! {
    /// Identifier of one option within a question.
    OptionId
}

string_id! {
    /// Identifier of a candidate area.
    AreaId
}

/// A partial, unordered set of answers: question id → selected option id.
///
/// Built incrementally over a session and discarded on reset. Iteration
/// order is never significant; the scorer walks the question bank in
/// declaration order, so results do not depend on insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: HashMap<QuestionId, OptionId>,
}

impl AnswerSet {
    /// Create an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the answer to a question.
    pub fn set(&mut self, question: impl Into<QuestionId>, option: impl Into<OptionId>) {
        self.answers.insert(question.into(), option.into());
    }

    /// Builder-style answer.
    pub fn with(mut self, question: impl Into<QuestionId>, option: impl Into<OptionId>) -> Self {
        self.set(question, option);
        self
    }

    /// The selected option for a question, if answered.
    pub fn get(&self, question: &QuestionId) -> Option<&OptionId> {
        self.answers.get(question)
    }

    /// Discard all answers.
    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns true if no question has been answered.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut answers = AnswerSet::new();
        assert!(answers.is_empty());

        answers.set("vibe", "nightlife");
        assert_eq!(answers.len(), 1);
        assert_eq!(
            answers.get(&QuestionId::new("vibe")),
            Some(&OptionId::new("nightlife"))
        );
        assert_eq!(answers.get(&QuestionId::new("sleep")), None);
    }

    #[test]
    fn replace_answer() {
        let mut answers = AnswerSet::new();
        answers.set("vibe", "nightlife");
        answers.set("vibe", "calm");

        assert_eq!(answers.len(), 1);
        assert_eq!(
            answers.get(&QuestionId::new("vibe")),
            Some(&OptionId::new("calm"))
        );
    }

    #[test]
    fn clear_discards_everything() {
        let mut answers = AnswerSet::new().with("vibe", "calm").with("sleep", "light");
        answers.clear();
        assert!(answers.is_empty());
    }

    #[test]
    fn id_display() {
        assert_eq!(format!("{}", QuestionId::new("vibe")), "vibe");
        assert_eq!(format!("{:?}", AreaId::new("ginza")), "AreaId(ginza)");
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = AreaId::new("ueno");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ueno\"");
    }
}
