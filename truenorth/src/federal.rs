//! Federal CRS-style score calculator.
//!
//! An unweighted sum of independent point tables. Age and education points
//! switch between "with accompanying spouse" and "without" tables; spouse
//! factor tables apply only when a spouse is included in the application.
//! Every lookup follows the "unknown = no points" policy: a missing or
//! unrecognized answer contributes zero and never errors.

use serde::Serialize;
use truenorth_types::Answers;

use crate::{bucket_years, language};

/// Maximum possible federal score.
pub const MAX_SCORE: u32 = 1200;

/// Approximate cutoff of recent general draws, used for tips and the
/// category-draw baseline.
pub const RECENT_GENERAL_CUTOFF: u32 = 510;

/// A computed federal score with its fixed scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FederalScore {
    pub score: u32,
    pub max: u32,
    pub recent_cutoff: u32,
}

fn points(table: &[(&str, u32)], key: Option<&str>) -> u32 {
    let Some(key) = key else { return 0 };
    table
        .iter()
        .find_map(|&(k, pts)| (k == key).then_some(pts))
        .unwrap_or(0)
}

const AGE_SINGLE: &[(&str, u32)] = &[
    ("18-24", 99),
    ("25-29", 110),
    ("30-34", 105),
    ("35-39", 85),
    ("40-44", 50),
    ("45-49", 25),
    ("50+", 0),
];

const AGE_WITH_SPOUSE: &[(&str, u32)] = &[
    ("18-24", 90),
    ("25-29", 100),
    ("30-34", 95),
    ("35-39", 77),
    ("40-44", 45),
    ("45-49", 20),
    ("50+", 0),
];

const EDUCATION_SINGLE: &[(&str, u32)] = &[
    ("none", 0),
    ("highschool", 30),
    ("oneyear", 90),
    ("twoyear", 98),
    ("bachelors", 120),
    ("two_degrees", 128),
    ("masters", 135),
    ("phd", 150),
];

const EDUCATION_WITH_SPOUSE: &[(&str, u32)] = &[
    ("none", 0),
    ("highschool", 28),
    ("oneyear", 84),
    ("twoyear", 91),
    ("bachelors", 112),
    ("two_degrees", 119),
    ("masters", 126),
    ("phd", 140),
];

/// First-official-language points keyed by the lowest benchmark (CLB 4..10).
const LANGUAGE: &[(u8, u32)] = &[
    (4, 24),
    (5, 32),
    (6, 40),
    (7, 60),
    (8, 76),
    (9, 100),
    (10, 124),
];

const CANADIAN_EXPERIENCE: &[(&str, u32)] = &[
    ("none", 0),
    ("1", 40),
    ("2", 53),
    ("3", 64),
    ("4", 72),
    ("5_plus", 80),
];

const SPOUSE_EDUCATION: &[(&str, u32)] = &[
    ("highschool", 0),
    ("oneyear", 2),
    ("twoyear", 4),
    ("bachelors", 6),
    ("masters_plus", 10),
];

const SPOUSE_LANGUAGE: &[(&str, u32)] = &[
    ("none", 0),
    ("4", 0),
    ("5_6", 3),
    ("7_8", 5),
    ("9_plus", 10),
];

const SPOUSE_EXPERIENCE: &[(&str, u32)] = &[("none", 0), ("1", 5), ("2_plus", 10)];

/// Canadian-credential bonus, applied only when the highest education was
/// completed in Canada.
const CANADIAN_EDUCATION_BONUS: &[(&str, u32)] = &[
    ("oneyear", 15),
    ("twoyear", 15),
    ("threeyear", 30),
    ("masters", 30),
    ("phd", 30),
];

/// Compute the federal score from the current answers. Capped at
/// [`MAX_SCORE`]; deterministic and idempotent.
pub fn federal_score(answers: &Answers) -> FederalScore {
    let with_spouse = answers.is("spouse_coming", "yes");
    let mut score = 0u32;

    let (age_table, edu_table) = if with_spouse {
        (AGE_WITH_SPOUSE, EDUCATION_WITH_SPOUSE)
    } else {
        (AGE_SINGLE, EDUCATION_SINGLE)
    };
    score += points(age_table, answers.text("age"));
    score += points(edu_table, answers.text("education_level"));

    let benchmark = language::lowest_benchmark(answers);
    score += LANGUAGE
        .iter()
        .find_map(|&(clb, pts)| (clb == benchmark).then_some(pts))
        .unwrap_or(0);

    score += points(CANADIAN_EXPERIENCE, answers.text("canadian_experience"));

    if with_spouse {
        score += points(SPOUSE_EDUCATION, answers.text("spouse_education"));
        score += points(SPOUSE_LANGUAGE, answers.text("spouse_language"));
        score += points(SPOUSE_EXPERIENCE, answers.text("spouse_experience"));
    }

    if answers.is("family_in_canada", "sibling") {
        score += 15;
    }

    if answers.is("education_country", "canada") {
        score += points(CANADIAN_EDUCATION_BONUS, answers.text("canadian_edu_level"));
    }

    // Second-official-language bonus, independent of the primary benchmark.
    score += match answers.text("french_level") {
        Some("nclc7_plus") => 50,
        Some("nclc5_6") => 25,
        _ => 0,
    };

    score += job_offer_bonus(answers);

    FederalScore {
        score: score.min(MAX_SCORE),
        max: MAX_SCORE,
        recent_cutoff: RECENT_GENERAL_CUTOFF,
    }
}

/// Job-offer bonus: +200 for a TEER 0 offer backed by an approved or exempt
/// LMIA, +50 for a TEER 1-3 offer under the same LMIA condition, otherwise
/// nothing. TEER 4/5 offers never score.
fn job_offer_bonus(answers: &Answers) -> u32 {
    if !answers.is("job_offer", "yes") {
        return 0;
    }
    let lmia_ok = matches!(
        answers.text("job_lmia"),
        Some("lmia_approved") | Some("lmia_exempt")
    );
    if !lmia_ok {
        return 0;
    }
    match answers.text("job_noc_teer") {
        Some("0") => 200,
        Some("1") | Some("2") | Some("3") => 50,
        _ => 0,
    }
}

/// Years of skilled Canadian work experience, for eligibility checks.
pub fn canadian_experience_years(answers: &Answers) -> u32 {
    bucket_years(answers.text("canadian_experience"))
}

/// Years of skilled foreign work experience, for eligibility checks.
pub fn foreign_experience_years(answers: &Answers) -> u32 {
    bucket_years(answers.text("foreign_experience"))
}
