/// A single answer value stored in `Answers`.
///
/// Three shapes cover every question type: a scalar string (single-choice,
/// free text, dates in ISO form), an ordered list of option values
/// (multi-choice), and a boolean flag (derived markers such as
/// `test_expired`, never entered by the user directly).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// A scalar string value.
    Text(String),

    /// Selected option values of a multi-choice question, in insertion order.
    Selections(Vec<String>),

    /// A derived boolean marker.
    Flag(bool),
}

impl AnswerValue {
    /// Try to get this value as a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a selection list.
    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            Self::Selections(list) => Some(list),
            _ => None,
        }
    }

    /// Try to get this value as a flag.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the shape name of this value for error messages.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Selections(_) => "Selections",
            Self::Flag(_) => "Flag",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(list: Vec<String>) -> Self {
        Self::Selections(list)
    }
}

impl From<&[&str]> for AnswerValue {
    fn from(list: &[&str]) -> Self {
        Self::Selections(list.iter().map(ToString::to_string).collect())
    }
}
