//! Profile warnings.
//!
//! An ordered sequence of independent checks over the answer store. Emission
//! order matches definition order, so callers (and tests) can rely on exact
//! list contents. A check never fires on an unanswered question except the
//! language-test check, where silence is itself the problem.

use serde::Serialize;
use truenorth_types::Answers;

use crate::{noc, questions};

/// Warning severity, most serious first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Urgent,
    Concern,
    Info,
}

/// A single warning: what is wrong and what to do about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub severity: Severity,
    pub issue: &'static str,
    pub action: &'static str,
}

/// Run every check in definition order.
pub fn warnings(answers: &Answers) -> Vec<Warning> {
    let mut list = Vec::new();

    let no_test = match answers.text("english_test") {
        None | Some("none") => true,
        Some(_) => false,
    };
    if no_test {
        list.push(Warning {
            severity: Severity::Urgent,
            issue: "No language test completed",
            action: "A language test is required for Express Entry. Book IELTS, CELPIP, or PTE Core immediately.",
        });
    }

    if answers.flag(questions::TEST_EXPIRED) {
        list.push(Warning {
            severity: Severity::Urgent,
            issue: "Language test results have expired",
            action: "Results are valid for 2 years. Rebook and retake the test before applying.",
        });
    }

    if answers.is("eca_status", "no") && answers.is("education_country", "foreign") {
        list.push(Warning {
            severity: Severity::Urgent,
            issue: "No ECA completed",
            action: "An Educational Credential Assessment is required for foreign education. Apply to WES, IQAS, or another designated organization.",
        });
    }

    if answers
        .text("criminal_history")
        .is_some_and(|v| v != "no")
    {
        list.push(Warning {
            severity: Severity::Concern,
            issue: "Criminal history may affect admissibility",
            action: "Consult an immigration lawyer. A rehabilitation application, record suspension, or temporary resident permit may be needed.",
        });
    }

    if answers
        .text("previous_refusal")
        .is_some_and(|v| v != "no")
    {
        list.push(Warning {
            severity: Severity::Concern,
            issue: "Previous visa refusal on record",
            action: "Address the refusal reasons in the new application. Consider hiring a licensed consultant.",
        });
    }

    if noc::selected(answers).is_some_and(|occ| occ.teer >= 4) {
        list.push(Warning {
            severity: Severity::Info,
            issue: "Occupation at TEER 4/5 is not eligible for Express Entry",
            action: "See the career transition recommendations, or consider a study-then-work pathway.",
        });
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_on_clean_profile() {
        let mut answers = Answers::new();
        answers.set("english_test", "ielts");
        answers.set("criminal_history", "no");
        answers.set("previous_refusal", "no");
        assert!(warnings(&answers).is_empty());
    }

    #[test]
    fn missing_test_and_explicit_none_both_warn() {
        let mut answers = Answers::new();
        assert_eq!(warnings(&answers).len(), 1);
        assert_eq!(warnings(&answers)[0].severity, Severity::Urgent);

        answers.set("english_test", "none");
        assert_eq!(warnings(&answers)[0].issue, "No language test completed");
    }

    #[test]
    fn unanswered_refusal_and_criminal_history_stay_silent() {
        let mut answers = Answers::new();
        answers.set("english_test", "ielts");
        assert!(warnings(&answers).is_empty());

        answers.set("criminal_history", "minor");
        let list = warnings(&answers);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].severity, Severity::Concern);
    }

    #[test]
    fn emission_order_is_definition_order() {
        let mut answers = Answers::new();
        answers.set("english_test", "none");
        answers.set("education_country", "foreign");
        answers.set("eca_status", "no");
        answers.set("criminal_history", "minor");
        answers.set("previous_refusal", "visitor");
        answers.set("occupation", "64300");

        let issues: Vec<&str> = warnings(&answers).iter().map(|w| w.issue).collect();
        assert_eq!(
            issues,
            [
                "No language test completed",
                "No ECA completed",
                "Criminal history may affect admissibility",
                "Previous visa refusal on record",
                "Occupation at TEER 4/5 is not eligible for Express Entry",
            ]
        );
    }

    #[test]
    fn expired_flag_warns() {
        let mut answers = Answers::new();
        answers.set("english_test", "ielts");
        answers.set(questions::TEST_EXPIRED, true);
        let list = warnings(&answers);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].issue, "Language test results have expired");
    }
}
