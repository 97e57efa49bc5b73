//! Newfoundland & Labrador priority-skills grid.
//!
//! The highest pool threshold of the seven grids; a local job offer carries
//! the largest single factor.

use truenorth_types::Answers;

use super::{
    Province, ProvincialScore, clb_lookup, connection, job_offer_in, lookup,
    total_experience_years,
};
use crate::language;

pub const MAX: u32 = 100;
pub const THRESHOLD: u32 = 72;
pub const COMPETITIVE: u32 = 80;

const AGE: &[(&str, u32)] = &[
    ("18-24", 10),
    ("25-29", 12),
    ("30-34", 12),
    ("35-39", 10),
    ("40-44", 6),
    ("45-49", 3),
    ("50+", 0),
];

const EDUCATION: &[(&str, u32)] = &[
    ("none", 0),
    ("highschool", 3),
    ("oneyear", 9),
    ("twoyear", 12),
    ("bachelors", 16),
    ("two_degrees", 17),
    ("masters", 18),
    ("phd", 20),
];

const LANGUAGE: &[(u8, u32)] = &[(4, 8), (5, 10), (6, 13), (7, 16), (8, 18), (9, 20), (10, 22)];

const JOB_OFFER: u32 = 20;

fn experience_points(years: u32) -> u32 {
    match years {
        0 => 0,
        1 => 4,
        2 => 6,
        3 => 8,
        4 => 9,
        _ => 10,
    }
}

pub fn score(answers: &Answers) -> ProvincialScore {
    let mut score = 0;
    score += lookup(AGE, answers.text("age"));
    score += lookup(EDUCATION, answers.text("education_level"));
    score += clb_lookup(LANGUAGE, language::lowest_benchmark(answers));
    score += experience_points(total_experience_years(answers));

    if job_offer_in(answers, Province::Newfoundland) {
        score += JOB_OFFER;
    }
    for choice in ["family", "study"] {
        if connection(answers, Province::Newfoundland, choice) {
            score += 6;
        }
    }
    if connection(answers, Province::Newfoundland, "work") {
        score += 4;
    }

    ProvincialScore {
        province: Province::Newfoundland,
        score: score.min(MAX),
        max: MAX,
        threshold: THRESHOLD,
        competitive: COMPETITIVE,
        in_demand: Province::Newfoundland.in_demand(),
    }
}
