//! New Brunswick strategic-initiative grid.
//!
//! The only grid with a standalone French bonus, reflecting the province's
//! francophone recruitment streams.

use truenorth_types::Answers;

use super::{
    Province, ProvincialScore, clb_lookup, connection, job_offer_in, lookup,
    total_experience_years,
};
use crate::language;

pub const MAX: u32 = 100;
pub const THRESHOLD: u32 = 65;
pub const COMPETITIVE: u32 = 75;

const AGE: &[(&str, u32)] = &[
    ("18-24", 8),
    ("25-29", 10),
    ("30-34", 10),
    ("35-39", 8),
    ("40-44", 6),
    ("45-49", 4),
    ("50+", 0),
];

const EDUCATION: &[(&str, u32)] = &[
    ("none", 0),
    ("highschool", 5),
    ("oneyear", 12),
    ("twoyear", 15),
    ("bachelors", 20),
    ("two_degrees", 21),
    ("masters", 23),
    ("phd", 25),
];

const LANGUAGE: &[(u8, u32)] = &[(4, 8), (5, 10), (6, 12), (7, 15), (8, 17), (9, 19), (10, 20)];

const FRENCH: &[(&str, u32)] = &[("nclc7_plus", 10), ("nclc5_6", 5), ("none", 0)];

const JOB_OFFER: u32 = 15;

fn experience_points(years: u32) -> u32 {
    match years {
        0 => 0,
        1 => 5,
        2 => 7,
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
    score += lookup(FRENCH, answers.text("french_level"));
    score += experience_points(total_experience_years(answers));

    if job_offer_in(answers, Province::NewBrunswick) {
        score += JOB_OFFER;
    }
    for choice in ["family", "study", "work"] {
        if connection(answers, Province::NewBrunswick, choice) {
            score += 5;
        }
    }

    ProvincialScore {
        province: Province::NewBrunswick,
        score: score.min(MAX),
        max: MAX,
        threshold: THRESHOLD,
        competitive: COMPETITIVE,
        in_demand: Province::NewBrunswick.in_demand(),
    }
}
