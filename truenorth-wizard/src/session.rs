//! One applicant's interview.

use chrono::NaiveDate;
use thiserror::Error;
use truenorth::report::{Report, ReportError};
use truenorth::{AnswerValue, Answers, Question, QuestionKind, Questionnaire, questions, report};

use crate::dates::{TestDateStatus, test_date_status};
use crate::validate::validate;

/// Why a session operation was refused. `Invalid` carries a user-facing
/// message; everything else is a driver bug or an incomplete profile.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("{0}")]
    Invalid(String),
    #[error("the questionnaire is already complete")]
    Complete,
    #[error("the current question does not take this operation")]
    WrongKind,
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Position within the interview, for progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
    /// 1-based step of the current question, or the final step when done.
    pub step: u8,
    pub step_count: u8,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.position as f64 / self.total as f64
        }
    }
}

/// A cursor over the questionnaire plus the answers collected so far.
///
/// `today` is injected once at construction so every date decision in the
/// session is reproducible.
pub struct Session {
    questionnaire: &'static Questionnaire,
    answers: Answers,
    cursor: usize,
    today: NaiveDate,
}

impl Session {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            questionnaire: questions::questionnaire(),
            answers: Answers::new(),
            cursor: 0,
            today,
        }
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn current_index(&self) -> Option<usize> {
        self.questionnaire.next_applicable(self.cursor, &self.answers)
    }

    /// The question awaiting an answer, or `None` once the interview is
    /// complete.
    pub fn current(&self) -> Option<&'static Question> {
        self.current_index().and_then(|i| self.questionnaire.get(i))
    }

    pub fn is_complete(&self) -> bool {
        self.current_index().is_none()
    }

    pub fn progress(&self) -> Progress {
        let total = self.questionnaire.len();
        let position = self.current_index().unwrap_or(total);
        let step = self
            .current()
            .map(Question::step)
            .unwrap_or(questions::STEP_COUNT);
        Progress {
            position,
            total,
            step,
            step_count: questions::STEP_COUNT,
        }
    }

    /// Validate and store an answer for the current question, then advance.
    ///
    /// Submitting a language-test date also refreshes the derived
    /// expired-test flag; the returned status lets the driver surface an
    /// "expired" or "expiring soon" notice immediately.
    pub fn submit(&mut self, value: AnswerValue) -> Result<Option<TestDateStatus>, SessionError> {
        let questionnaire = self.questionnaire;
        let index = self.current_index().ok_or(SessionError::Complete)?;
        let question = questionnaire.get(index).ok_or(SessionError::Complete)?;

        validate(question, &value, self.today).map_err(SessionError::Invalid)?;

        let mut status = None;
        if question.id() == questions::TEST_DATE {
            if let AnswerValue::Text(raw) = &value {
                // Validation guarantees the parse.
                if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                    let s = test_date_status(date, self.today);
                    self.answers.set(questions::TEST_EXPIRED, s.is_expired());
                    status = Some(s);
                }
            }
        }

        self.answers.set(question.id(), value);
        self.cursor = index + 1;
        Ok(status)
    }

    /// Store the picked occupation code for the current search question and
    /// advance.
    pub fn select_occupation(&mut self, code: &str) -> Result<(), SessionError> {
        let question = self.current().ok_or(SessionError::Complete)?;
        if question.kind() != QuestionKind::OccupationSearch {
            return Err(SessionError::WrongKind);
        }
        self.submit(AnswerValue::from(code)).map(|_| ())
    }

    /// Flip one choice of the current multi-choice question in place. The
    /// cursor does not move; call [`Session::submit`] or
    /// [`Session::confirm`] to advance.
    pub fn toggle(&mut self, choice: &str) -> Result<(), SessionError> {
        let question = self.current().ok_or(SessionError::Complete)?;
        if question.kind() != QuestionKind::MultiChoice {
            return Err(SessionError::WrongKind);
        }
        if !question.has_option(choice) {
            return Err(SessionError::Invalid(format!(
                "`{choice}` is not one of the listed options"
            )));
        }
        self.answers.toggle(question.id(), choice);
        Ok(())
    }

    /// Advance past the current question using the answer already in the
    /// store (built up via [`Session::toggle`]), or past an optional
    /// question with no answer at all. A multi-choice question may advance
    /// with nothing selected; the empty selection is recorded as the answer.
    pub fn confirm(&mut self) -> Result<(), SessionError> {
        let questionnaire = self.questionnaire;
        let index = self.current_index().ok_or(SessionError::Complete)?;
        let question = questionnaire.get(index).ok_or(SessionError::Complete)?;

        if !self.answers.contains(question.id()) {
            match question.kind() {
                QuestionKind::MultiChoice => {
                    self.answers
                        .set(question.id(), AnswerValue::Selections(Vec::new()));
                }
                _ if question.is_optional() => {}
                _ => return Err(SessionError::Invalid("An answer is required".into())),
            }
        }
        self.cursor = index + 1;
        Ok(())
    }

    /// Step back to the nearest applicable previous question. Returns false
    /// at the start. The previous answer is kept so it can be shown for
    /// editing.
    pub fn back(&mut self) -> bool {
        let upper = self.current_index().unwrap_or(self.questionnaire.len());
        match self.questionnaire.previous_applicable(upper, &self.answers) {
            Some(index) => {
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    /// Wipe everything and return to the first question.
    pub fn restart(&mut self) {
        self.answers.clear();
        self.cursor = 0;
    }

    /// The validity status of the stored test date, if one is on file.
    pub fn test_date_status(&self) -> Option<TestDateStatus> {
        let raw = self.answers.text(questions::TEST_DATE)?;
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
        Some(test_date_status(date, self.today))
    }

    /// Assemble the results report for the collected answers.
    pub fn report(&self) -> Result<Report, SessionError> {
        Ok(report::assemble(&self.answers, self.today)?)
    }
}
