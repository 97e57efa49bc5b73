//! Results report assembler.
//!
//! Pulls every calculator and evaluator together into one structured
//! payload for a rendering layer. Assembly is pure: the only inputs are the
//! answer store and the caller's notion of "today" (injected so expiry
//! annotations are testable).

use chrono::{Months, NaiveDate};
use serde::Serialize;
use thiserror::Error;
use truenorth_types::Answers;

use crate::federal::{self, FederalScore};
use crate::pathways::{Pathway, Transition};
use crate::programs::ProgramVerdict;
use crate::provincial::ProvincialScore;
use crate::warnings::Warning;
use crate::{
    costs, documents, draws, language, noc, pathways, programs, provincial, questions, timeline,
    warnings,
};

/// Why a report could not be assembled.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("profile is incomplete: question `{id}` is unanswered")]
    IncompleteProfile { id: &'static str },
}

/// Key profile facts, as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub age: Option<String>,
    pub education: Option<String>,
    pub field_of_study: Option<String>,
    pub occupation: Option<String>,
    pub canadian_experience: Option<String>,
    /// "CLB n", annotated with the test expiry date when one is on file.
    pub language: Option<String>,
    pub job_offer: bool,
    pub target_province: Option<String>,
}

/// A suggested way to raise the federal score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Improvement {
    pub action: &'static str,
    pub detail: &'static str,
    pub gain: &'static str,
}

/// The full structured payload.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub federal: FederalScore,
    pub profile: ProfileSummary,
    pub warnings: Vec<Warning>,
    pub programs: Vec<ProgramVerdict>,
    pub provincial: Vec<ProvincialScore>,
    pub draws: Vec<draws::DrawMatch>,
    pub pathways: Vec<&'static Pathway>,
    pub career_transitions: Vec<Transition>,
    pub improvements: Vec<Improvement>,
    pub costs: costs::CostBreakdown,
    pub documents: Vec<documents::DocumentGroup>,
    pub timeline: Vec<timeline::TimelineStep>,
}

/// Resolve an answer value to its option label, falling back to the raw
/// value for free-form answers.
fn label_for(answers: &Answers, id: &str) -> Option<String> {
    let value = answers.text(id)?;
    let label = questions::questionnaire()
        .by_id(id)
        .and_then(|question| {
            question
                .options()
                .iter()
                .find(|option| option.value == value)
        })
        .map(|option| option.label.to_string());
    Some(label.unwrap_or_else(|| value.to_string()))
}

fn language_summary(answers: &Answers, today: NaiveDate) -> Option<String> {
    let benchmark = language::lowest_benchmark(answers);
    if benchmark == 0 {
        return None;
    }
    let expiry = answers
        .text(questions::TEST_DATE)
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .and_then(|date| date.checked_add_months(Months::new(24)));
    Some(match expiry {
        Some(expiry) if expiry < today => format!("CLB {benchmark} (expired {expiry})"),
        Some(expiry) => format!("CLB {benchmark} (valid until {expiry})"),
        None => format!("CLB {benchmark}"),
    })
}

fn profile_summary(answers: &Answers, today: NaiveDate) -> ProfileSummary {
    ProfileSummary {
        age: label_for(answers, "age"),
        education: label_for(answers, "education_level"),
        field_of_study: label_for(answers, "field_of_study"),
        occupation: noc::selected(answers).map(|occ| occ.title.to_string()),
        canadian_experience: label_for(answers, "canadian_experience"),
        language: language_summary(answers, today),
        job_offer: answers.is("job_offer", "yes"),
        target_province: label_for(answers, "target_province"),
    }
}

fn improvements(answers: &Answers) -> Vec<Improvement> {
    let mut list = Vec::new();
    let benchmark = language::lowest_benchmark(answers);

    if benchmark < 9 {
        list.push(Improvement {
            action: "Raise the language benchmark",
            detail: "2-3 months of preparation plus a retest",
            gain: "+16-24 points",
        });
    }
    if !answers.is("french_level", "nclc7_plus") {
        list.push(Improvement {
            action: "Learn French to NCLC 7",
            detail: "6-12 months of study",
            gain: "+50 points and French-category draws",
        });
    }
    if federal::canadian_experience_years(answers) == 0 {
        list.push(Improvement {
            action: "Gain 1 year of Canadian work experience",
            detail: "Post-graduation, LMIA, or working-holiday permit",
            gain: "+40 points",
        });
    }
    if !answers.is("job_offer", "yes") {
        list.push(Improvement {
            action: "Obtain an LMIA-supported job offer",
            detail: "Apply to Canadian employers directly",
            gain: "+50-200 points",
        });
    }
    list.push(Improvement {
        action: "Seek a provincial nomination",
        detail: "Apply to the provincial programs listed above",
        gain: "+600 points",
    });
    list
}

/// The first applicable required question without an answer, if any.
fn first_unanswered(answers: &Answers) -> Option<&'static str> {
    questions::questionnaire()
        .questions()
        .iter()
        .find(|question| {
            question.is_applicable(answers)
                && !question.is_optional()
                && !answers.contains(question.id())
        })
        .map(|question| question.id())
}

/// Assemble the full report. Fails only when a required, applicable
/// question has no answer yet.
pub fn assemble(answers: &Answers, today: NaiveDate) -> Result<Report, ReportError> {
    if let Some(id) = first_unanswered(answers) {
        return Err(ReportError::IncompleteProfile { id });
    }

    let federal = federal::federal_score(answers);
    Ok(Report {
        profile: profile_summary(answers, today),
        warnings: warnings::warnings(answers),
        programs: programs::evaluate_all(answers, federal.score),
        provincial: provincial::all_scores(answers),
        draws: draws::matches(answers, federal.score),
        pathways: pathways::applicable(answers),
        career_transitions: pathways::career_transitions(answers),
        improvements: improvements(answers),
        costs: costs::estimate(answers),
        documents: documents::checklist(answers),
        timeline: timeline::timeline(answers),
        federal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn incomplete_profile_names_the_first_gap() {
        let result = assemble(&Answers::new(), today());
        assert_eq!(result.unwrap_err(), ReportError::IncompleteProfile { id: "age" });
    }

    #[test]
    fn language_summary_annotates_expiry() {
        let mut answers = Answers::new();
        answers.set("english_test", "celpip");
        for id in ["celpip_speaking", "celpip_listening", "celpip_reading", "celpip_writing"] {
            answers.set(id, "9");
        }
        answers.set(questions::TEST_DATE, "2024-03-15");
        let summary = language_summary(&answers, today()).unwrap();
        assert_eq!(summary, "CLB 9 (valid until 2026-03-15)");

        let summary = language_summary(&answers, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
        assert_eq!(summary.unwrap(), "CLB 9 (expired 2026-03-15)");
    }

    #[test]
    fn profile_summary_prefers_option_labels() {
        let mut answers = Answers::new();
        answers.set("age", "25-29");
        answers.set("education_level", "bachelors");
        answers.set("occupation", "21231");
        let profile = profile_summary(&answers, today());
        assert_eq!(profile.age.as_deref(), Some("25-29 years old"));
        assert_eq!(profile.occupation.as_deref(), Some("Software Engineers"));
        assert!(profile.language.is_none());
        assert!(!profile.job_offer);
    }

    #[test]
    fn improvements_shrink_as_the_profile_strengthens() {
        let weak = improvements(&Answers::new());

        let mut answers = Answers::new();
        answers.set("english_test", "celpip");
        for id in ["celpip_speaking", "celpip_listening", "celpip_reading", "celpip_writing"] {
            answers.set(id, "9");
        }
        answers.set("french_level", "nclc7_plus");
        answers.set("canadian_experience", "2");
        answers.set("job_offer", "yes");
        let strong = improvements(&answers);

        assert!(strong.len() < weak.len());
        // The provincial-nomination suggestion always closes the list.
        assert_eq!(strong.last().unwrap().action, "Seek a provincial nomination");
    }
}
