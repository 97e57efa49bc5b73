//! Core types for the truenorth eligibility engine.
//!
//! This crate provides the foundational types for defining a branching
//! questionnaire and its collected answers:
//! - `Questionnaire` - The ordered set of questions
//! - `Question` and `QuestionKind` - Individual questions and their input types
//! - `Answers` and `AnswerValue` - The mutable answer store
//! - `Predicate` - Tagged applicability conditions over the answer store

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{AnswerError, Answers, NONE_CHOICE};

mod predicate;
pub use predicate::Predicate;

mod question;
pub use question::{ChoiceOption, Question, QuestionKind};

mod questionnaire;
pub use questionnaire::Questionnaire;
