use crate::{Answers, Question};

/// The ordered set of questions forming the wizard.
///
/// Presentation-agnostic: it can be walked as a sequential interview or
/// rendered as a form. Navigation here is pure index arithmetic; the
/// current position is owned by the session layer.
#[derive(Debug, Clone, Default)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Create a questionnaire from an ordered question list.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Get the questions in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get a question by index.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Find the index of a question by id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == id)
    }

    /// Get a question by id.
    pub fn by_id(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the questionnaire has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Scan forward from `from` (inclusive) for the first question whose
    /// condition holds against the answers. `None` means the end of the
    /// questionnaire was reached.
    pub fn next_applicable(&self, from: usize, answers: &Answers) -> Option<usize> {
        (from..self.questions.len()).find(|&i| self.questions[i].is_applicable(answers))
    }

    /// Scan backward from `before` (exclusive) for the nearest applicable
    /// question. Applicability is re-checked on the way back, so a question
    /// whose condition no longer holds is skipped rather than shown again.
    pub fn previous_applicable(&self, before: usize, answers: &Answers) -> Option<usize> {
        let upper = before.min(self.questions.len());
        (0..upper).rev().find(|&i| self.questions[i].is_applicable(answers))
    }
}
