use crate::{Answers, Predicate};

/// A single question in the questionnaire.
///
/// Questions are immutable after definition; the full set is built once at
/// process start. All text is `'static` for that reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Unique question identifier, used as the answer-store key.
    id: &'static str,

    /// Category label for display grouping.
    category: &'static str,

    /// Step number (1-based) for progress display.
    step: u8,

    /// The prompt text shown to the user.
    prompt: &'static str,

    /// The kind of question (determines input type and validation).
    kind: QuestionKind,

    /// Ordered options for choice questions; empty otherwise.
    options: Vec<ChoiceOption>,

    /// Applicability condition; `None` means always asked.
    applicable_if: Option<Predicate>,

    /// Optional help text shown under the prompt.
    help: Option<&'static str>,

    /// Whether the question may be skipped without an answer.
    optional: bool,
}

impl Question {
    /// Create a new question.
    pub fn new(
        id: &'static str,
        category: &'static str,
        step: u8,
        prompt: &'static str,
        kind: QuestionKind,
    ) -> Self {
        Self {
            id,
            category,
            step,
            prompt,
            kind,
            options: Vec::new(),
            applicable_if: None,
            help: None,
            optional: false,
        }
    }

    /// Set the option list.
    pub fn with_options(mut self, options: Vec<ChoiceOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the applicability condition.
    pub fn applicable_if(mut self, condition: Predicate) -> Self {
        self.applicable_if = Some(condition);
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    /// Mark the question as skippable.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    pub fn condition(&self) -> Option<&Predicate> {
        self.applicable_if.as_ref()
    }

    pub fn help(&self) -> Option<&'static str> {
        self.help
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Check whether this question applies given the current answers.
    pub fn is_applicable(&self, answers: &Answers) -> bool {
        self.applicable_if
            .as_ref()
            .is_none_or(|condition| condition.holds(answers))
    }

    /// Check whether the given value is one of this question's option values.
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|opt| opt.value == value)
    }
}

/// The kind of question, determining input type and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick exactly one option.
    SingleChoice,

    /// Pick any number of options (may be left empty).
    MultiChoice,

    /// Free-text search resolved against the occupation directory.
    OccupationSearch,

    /// Calendar date in ISO `YYYY-MM-DD` form.
    Date,

    /// Non-negative integer input.
    Numeric,

    /// Email address input.
    Email,
}

/// A selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Stable value stored in the answer store.
    pub value: &'static str,

    /// Display label.
    pub label: &'static str,

    /// Optional one-line description.
    pub description: Option<&'static str>,
}

impl ChoiceOption {
    /// Create an option with no description.
    pub fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            description: None,
        }
    }

    /// Create an option with a description.
    pub fn described(value: &'static str, label: &'static str, description: &'static str) -> Self {
        Self {
            value,
            label,
            description: Some(description),
        }
    }
}
