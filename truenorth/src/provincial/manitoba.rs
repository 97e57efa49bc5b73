//! Manitoba expression-of-interest grid.
//!
//! The only grid on a 1000-point scale. Adaptability dominates: an
//! in-province job offer alone is worth half the scale, and recognized
//! trade certification adds to the experience factor.

use truenorth_types::Answers;

use super::{
    Province, ProvincialScore, clb_lookup, connection, job_offer_in, lookup,
    total_experience_years,
};
use crate::language;

pub const MAX: u32 = 1000;
pub const THRESHOLD: u32 = 600;
pub const COMPETITIVE: u32 = 700;

const AGE: &[(&str, u32)] = &[
    ("18-24", 75),
    ("25-29", 75),
    ("30-34", 75),
    ("35-39", 75),
    ("40-44", 75),
    ("45-49", 40),
    ("50+", 0),
];

const EDUCATION: &[(&str, u32)] = &[
    ("none", 0),
    ("highschool", 40),
    ("oneyear", 70),
    ("twoyear", 100),
    ("bachelors", 110),
    ("two_degrees", 115),
    ("masters", 125),
    ("phd", 125),
];

const LANGUAGE: &[(u8, u32)] = &[
    (4, 50),
    (5, 62),
    (6, 75),
    (7, 88),
    (8, 100),
    (9, 113),
    (10, 125),
];

const TRADE_CERT: &[(&str, u32)] = &[("red_seal", 100), ("provincial", 50), ("no", 0)];

const JOB_OFFER: u32 = 500;
const FAMILY: u32 = 200;
const PRIOR_WORK: u32 = 100;
const PRIOR_STUDY: u32 = 100;
const ADAPTABILITY_MAX: u32 = 500;

fn experience_points(years: u32) -> u32 {
    match years {
        0 => 0,
        1 => 40,
        2 => 50,
        3 => 60,
        _ => 75,
    }
}

pub fn score(answers: &Answers) -> ProvincialScore {
    let mut score = 0;
    score += lookup(AGE, answers.text("age"));
    score += lookup(EDUCATION, answers.text("education_level"));
    score += clb_lookup(LANGUAGE, language::lowest_benchmark(answers));
    score += experience_points(total_experience_years(answers));
    score += lookup(TRADE_CERT, answers.text("trade_cert"));

    let mut adaptability = 0;
    if job_offer_in(answers, Province::Manitoba) {
        adaptability += JOB_OFFER;
    }
    if connection(answers, Province::Manitoba, "family") {
        adaptability += FAMILY;
    }
    if connection(answers, Province::Manitoba, "work") {
        adaptability += PRIOR_WORK;
    }
    if connection(answers, Province::Manitoba, "study") {
        adaptability += PRIOR_STUDY;
    }
    score += adaptability.min(ADAPTABILITY_MAX);

    ProvincialScore {
        province: Province::Manitoba,
        score: score.min(MAX),
        max: MAX,
        threshold: THRESHOLD,
        competitive: COMPETITIVE,
        in_demand: Province::Manitoba.in_demand(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Answers {
        let mut answers = Answers::new();
        answers.set("age", "30-34");
        answers.set("education_level", "bachelors");
        answers.set("english_test", "celpip");
        for id in ["celpip_speaking", "celpip_listening", "celpip_reading", "celpip_writing"] {
            answers.set(id, "8");
        }
        answers.set("foreign_experience", "3");
        answers.set("target_province", "manitoba");
        answers
    }

    #[test]
    fn core_factors_alone_miss_the_threshold() {
        // 75 + 110 + 100 + 60
        let result = score(&base());
        assert_eq!(result.score, 345);
        assert!(!result.is_eligible());
    }

    #[test]
    fn in_province_job_offer_clears_the_pool() {
        let mut answers = base();
        answers.set("job_offer", "yes");
        answers.set("job_province", "manitoba");
        let result = score(&answers);
        assert_eq!(result.score, 845);
        assert!(result.is_eligible());
    }

    #[test]
    fn adaptability_is_capped() {
        let mut answers = base();
        answers.set("job_offer", "yes");
        answers.set("job_province", "manitoba");
        answers.toggle("provincial_connection", "family");
        answers.toggle("provincial_connection", "work");
        answers.toggle("provincial_connection", "study");
        // 500 + 200 + 100 + 100 would exceed the adaptability cap.
        assert_eq!(score(&answers).score, 345 + 500);
    }

    #[test]
    fn trade_certification_adds_to_experience() {
        let mut answers = base();
        answers.set("trade_cert", "red_seal");
        assert_eq!(score(&answers).score, 445);
    }
}
