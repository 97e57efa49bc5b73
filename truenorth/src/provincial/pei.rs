//! Prince Edward Island expression-of-interest grid.

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
    ("25-29", 12),
    ("30-34", 12),
    ("35-39", 10),
    ("40-44", 8),
    ("45-49", 4),
    ("50+", 0),
];

const EDUCATION: &[(&str, u32)] = &[
    ("none", 0),
    ("highschool", 4),
    ("oneyear", 10),
    ("twoyear", 14),
    ("bachelors", 17),
    ("two_degrees", 18),
    ("masters", 20),
    ("phd", 22),
];

const LANGUAGE: &[(u8, u32)] = &[(4, 8), (5, 11), (6, 14), (7, 17), (8, 20), (9, 22), (10, 24)];

const JOB_OFFER: u32 = 15;

fn experience_points(years: u32) -> u32 {
    match years {
        0 => 0,
        1 => 4,
        2 => 6,
        3 => 8,
        4 => 10,
        _ => 12,
    }
}

pub fn score(answers: &Answers) -> ProvincialScore {
    let mut score = 0;
    score += lookup(AGE, answers.text("age"));
    score += lookup(EDUCATION, answers.text("education_level"));
    score += clb_lookup(LANGUAGE, language::lowest_benchmark(answers));
    score += experience_points(total_experience_years(answers));

    if job_offer_in(answers, Province::PrinceEdwardIsland) {
        score += JOB_OFFER;
    }
    if connection(answers, Province::PrinceEdwardIsland, "family") {
        score += 6;
    }
    if connection(answers, Province::PrinceEdwardIsland, "study") {
        score += 5;
    }
    if connection(answers, Province::PrinceEdwardIsland, "work") {
        score += 4;
    }

    ProvincialScore {
        province: Province::PrinceEdwardIsland,
        score: score.min(MAX),
        max: MAX,
        threshold: THRESHOLD,
        competitive: COMPETITIVE,
        in_demand: Province::PrinceEdwardIsland.in_demand(),
    }
}
