use crate::Answers;

/// A tagged applicability condition over the answer store.
///
/// Questions (and other conditional records such as alternative pathways)
/// carry one of these instead of a closure, keeping conditions pure,
/// inspectable, and evaluable by a single interpreter.
///
/// Missing-answer semantics match the intent of each test: `Equals` on an
/// unanswered field is `false`, while `NotEquals` on an unanswered field is
/// `true` ("has not said X" includes "has said nothing").
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// The field has been answered with exactly this value.
    Equals {
        field: &'static str,
        value: &'static str,
    },

    /// The field is unanswered or answered with a different value.
    NotEquals {
        field: &'static str,
        value: &'static str,
    },

    /// The field has been answered with one of these values.
    OneOf {
        field: &'static str,
        values: &'static [&'static str],
    },

    /// The field has been answered at all.
    Answered { field: &'static str },

    /// Every sub-condition holds.
    All(Vec<Predicate>),

    /// At least one sub-condition holds.
    Any(Vec<Predicate>),
}

impl Predicate {
    pub fn equals(field: &'static str, value: &'static str) -> Self {
        Self::Equals { field, value }
    }

    pub fn not_equals(field: &'static str, value: &'static str) -> Self {
        Self::NotEquals { field, value }
    }

    pub fn one_of(field: &'static str, values: &'static [&'static str]) -> Self {
        Self::OneOf { field, values }
    }

    pub fn answered(field: &'static str) -> Self {
        Self::Answered { field }
    }

    /// Evaluate this condition against the current answers.
    pub fn holds(&self, answers: &Answers) -> bool {
        match self {
            Self::Equals { field, value } => answers.is(field, value),
            Self::NotEquals { field, value } => !answers.is(field, value),
            Self::OneOf { field, values } => values.iter().any(|v| answers.is(field, v)),
            Self::Answered { field } => answers.contains(field),
            Self::All(conditions) => conditions.iter().all(|c| c.holds(answers)),
            Self::Any(conditions) => conditions.iter().any(|c| c.holds(answers)),
        }
    }
}
