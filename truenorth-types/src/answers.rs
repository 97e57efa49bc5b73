use std::collections::HashMap;

use crate::AnswerValue;

/// The sentinel multi-choice value meaning "none of the above".
///
/// A selection list never contains this value alongside any other value;
/// [`Answers::toggle`] maintains that invariant.
pub const NONE_CHOICE: &str = "none";

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for question: {0}")]
    Missing(String),

    #[error("Shape mismatch for '{id}': expected {expected}, got {actual}")]
    ShapeMismatch {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// The answer store: a mapping from question identifier to answer value.
///
/// This is the single shared state that navigation, scoring, and reporting
/// read. It is created empty at wizard start, mutated one answer at a time,
/// and discarded on restart. One instance per wizard session; nothing here
/// is process-global.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<String, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer for the given question id, replacing any previous one.
    pub fn set(&mut self, id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the raw answer value for a question id.
    pub fn get(&self, id: &str) -> Option<&AnswerValue> {
        self.values.get(id)
    }

    /// Check whether a question has been answered.
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// Remove the answer for a question id.
    pub fn remove(&mut self, id: &str) -> Option<AnswerValue> {
        self.values.remove(id)
    }

    /// Drop every answer (wizard restart).
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all id-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.values.iter()
    }

    // === Lenient accessors ===
    //
    // Scoring follows an "unknown = no points" policy: a missing or
    // wrongly-shaped answer reads as absent rather than erroring.

    /// Get a scalar answer as a string slice, if present.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(AnswerValue::as_text)
    }

    /// Get a multi-choice answer as a selection list, if present.
    pub fn selections(&self, id: &str) -> Option<&[String]> {
        self.get(id).and_then(AnswerValue::as_selections)
    }

    /// Get a derived flag. Missing flags read as `false`.
    pub fn flag(&self, id: &str) -> bool {
        self.get(id).and_then(AnswerValue::as_flag).unwrap_or(false)
    }

    /// Check whether a scalar answer equals the given value.
    pub fn is(&self, id: &str, value: &str) -> bool {
        self.text(id) == Some(value)
    }

    /// Check whether a multi-choice answer includes the given option value.
    pub fn selected(&self, id: &str, value: &str) -> bool {
        self.selections(id)
            .is_some_and(|list| list.iter().any(|v| v == value))
    }

    // === Strict accessors ===

    /// Get a scalar answer, erroring when missing or wrongly shaped.
    pub fn require_text(&self, id: &str) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(AnswerValue::Text(s)) => Ok(s),
            Some(other) => Err(AnswerError::ShapeMismatch {
                id: id.to_string(),
                expected: "Text",
                actual: other.shape_name(),
            }),
            None => Err(AnswerError::Missing(id.to_string())),
        }
    }

    /// Toggle a multi-choice selection for the given question.
    ///
    /// Selecting [`NONE_CHOICE`] clears every other selection; selecting any
    /// other value clears a previously-selected [`NONE_CHOICE`]. Toggling an
    /// already-selected value removes it. The resulting list therefore never
    /// contains the sentinel alongside another value.
    pub fn toggle(&mut self, id: impl Into<String>, choice: &str) {
        let id = id.into();
        let mut list = match self.values.remove(&id) {
            Some(AnswerValue::Selections(list)) => list,
            // A scalar answer under this id is replaced wholesale.
            _ => Vec::new(),
        };

        if choice == NONE_CHOICE {
            if list.iter().any(|v| v == NONE_CHOICE) {
                list.clear();
            } else {
                list.clear();
                list.push(NONE_CHOICE.to_string());
            }
        } else {
            list.retain(|v| v != NONE_CHOICE);
            if let Some(pos) = list.iter().position(|v| v == choice) {
                list.remove(pos);
            } else {
                list.push(choice.to_string());
            }
        }

        self.values.insert(id, AnswerValue::Selections(list));
    }
}

impl IntoIterator for Answers {
    type Item = (String, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
