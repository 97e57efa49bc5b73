//! # truenorth
//!
//! Eligibility engine for Canadian permanent-residence pathways.
//!
//! The engine walks a branching questionnaire (see [`questions`]), converts
//! the collected answers into a federal CRS-style score plus seven
//! independent provincial nomination scores, evaluates per-program
//! eligibility, and assembles a multi-section results report.
//!
//! Every calculator is a pure function of the answer store: no I/O, no
//! caching, no global state. Missing or unrecognized answers contribute zero
//! points rather than erroring ("unknown = no points").
//!
//! The interactive session layer lives in the `truenorth-wizard` crate;
//! rendering is out of scope entirely.

pub mod costs;
pub mod documents;
pub mod draws;
pub mod federal;
pub mod language;
pub mod noc;
pub mod pathways;
pub mod programs;
pub mod provincial;
pub mod questions;
pub mod report;
pub mod timeline;
pub mod warnings;

// Re-export the questionnaire primitives so downstream crates only need
// one dependency.
pub use truenorth_types::{
    AnswerError, AnswerValue, Answers, ChoiceOption, NONE_CHOICE, Predicate, Question,
    QuestionKind, Questionnaire,
};

/// Parse a bucketed years answer ("none", "1", "4_5", "6_plus", ...) into a
/// minimum year count. Unanswerable strings read as zero.
pub(crate) fn bucket_years(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else { return 0 };
    let digits: String = raw.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
