//! Saskatchewan occupation-in-demand grid.

use truenorth_types::Answers;

use super::{
    Province, ProvincialScore, clb_lookup, connection, job_offer_in, lookup,
    total_experience_years,
};
use crate::language;

pub const MAX: u32 = 110;
pub const THRESHOLD: u32 = 60;
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
    ("highschool", 12),
    ("oneyear", 15),
    ("twoyear", 20),
    ("bachelors", 20),
    ("two_degrees", 22),
    ("masters", 23),
    ("phd", 23),
];

const LANGUAGE: &[(u8, u32)] = &[(4, 12), (5, 14), (6, 16), (7, 18), (8, 20), (9, 20), (10, 20)];

const JOB_OFFER: u32 = 20;
const FAMILY: u32 = 20;

fn experience_points(years: u32) -> u32 {
    match years {
        0 => 0,
        1 => 6,
        2 => 8,
        3 => 10,
        4 => 12,
        _ => 15,
    }
}

pub fn score(answers: &Answers) -> ProvincialScore {
    let mut score = 0;
    score += lookup(AGE, answers.text("age"));
    score += lookup(EDUCATION, answers.text("education_level"));
    score += clb_lookup(LANGUAGE, language::lowest_benchmark(answers));
    score += experience_points(total_experience_years(answers));

    if job_offer_in(answers, Province::Saskatchewan) {
        score += JOB_OFFER;
    }
    if connection(answers, Province::Saskatchewan, "family") {
        score += FAMILY;
    }
    if connection(answers, Province::Saskatchewan, "study") {
        score += 5;
    }
    if connection(answers, Province::Saskatchewan, "work") {
        score += 5;
    }

    ProvincialScore {
        province: Province::Saskatchewan,
        score: score.min(MAX),
        max: MAX,
        threshold: THRESHOLD,
        competitive: COMPETITIVE,
        in_demand: Province::Saskatchewan.in_demand(),
    }
}
