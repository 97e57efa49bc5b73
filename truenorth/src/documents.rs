//! Document checklist.
//!
//! Fixed per-category document lists. An item is flagged ready when the
//! answer store can prove it; anything the wizard never asks about stays
//! not-ready and is left for the applicant to confirm.

use serde::Serialize;
use truenorth_types::Answers;

use crate::{language, questions};

/// One required document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentItem {
    pub name: &'static str,
    pub ready: bool,
}

/// A titled group of documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentGroup {
    pub category: &'static str,
    pub documents: Vec<DocumentItem>,
}

fn item(name: &'static str, ready: bool) -> DocumentItem {
    DocumentItem { name, ready }
}

/// Build the checklist for the current profile.
pub fn checklist(answers: &Answers) -> Vec<DocumentGroup> {
    let mut groups = Vec::new();

    let mut identity = vec![
        item("Valid passport", false),
        item("Birth certificate", false),
        item("Digital photos (passport format)", false),
    ];
    if answers.is("marital_status", "married") {
        identity.push(item("Marriage certificate", false));
    }
    groups.push(DocumentGroup {
        category: "Identity",
        documents: identity,
    });

    let has_education = answers
        .text("education_level")
        .is_some_and(|level| level != "none");
    let mut education = vec![item("Degrees, diplomas, and transcripts", has_education)];
    if answers.is("education_country", "foreign") {
        education.push(item(
            "Educational credential assessment report",
            answers.is("eca_status", "yes"),
        ));
    }
    groups.push(DocumentGroup {
        category: "Education",
        documents: education,
    });

    let test_valid =
        language::lowest_benchmark(answers) > 0 && !answers.flag(questions::TEST_EXPIRED);
    groups.push(DocumentGroup {
        category: "Language",
        documents: vec![item("Language test results (valid within 2 years)", test_valid)],
    });

    let has_experience = crate::federal::canadian_experience_years(answers) >= 1
        || crate::federal::foreign_experience_years(answers) >= 1;
    let mut work = vec![
        item("Employment reference letters", has_experience),
        item("Employment records and pay stubs", has_experience),
    ];
    if answers.is("job_offer", "yes") {
        work.push(item("Job offer letter", true));
    }
    groups.push(DocumentGroup {
        category: "Work",
        documents: work,
    });

    let funds_proven = matches!(
        answers.text("settlement_funds"),
        Some("yes") | Some("exceed")
    );
    groups.push(DocumentGroup {
        category: "Funds",
        documents: vec![
            item("Proof of settlement funds", funds_proven),
            item("Bank statements (6 months)", funds_proven),
        ],
    });

    groups.push(DocumentGroup {
        category: "Admissibility",
        documents: vec![
            item(
                "Police certificates (each country lived in 6+ months)",
                answers.is("criminal_history", "no"),
            ),
            item("Medical exam by panel physician", false),
        ],
    });

    groups
}
