//! Alberta opportunity-stream grid.
//!
//! A 100-point grid in the classic skilled-worker shape, with a second
//! official-language top-up inside the language factor. Like the British
//! Columbia grid, the job-offer bonus requires a TEER 0-3 offer.

use truenorth_types::Answers;

use super::{
    Province, ProvincialScore, clb_lookup, connection, job_offer_in, lookup, skilled_job_tier,
    total_experience_years,
};
use crate::language;

pub const MAX: u32 = 100;
pub const THRESHOLD: u32 = 67;
pub const COMPETITIVE: u32 = 80;

const AGE: &[(&str, u32)] = &[
    ("18-24", 12),
    ("25-29", 12),
    ("30-34", 12),
    ("35-39", 10),
    ("40-44", 5),
    ("45-49", 2),
    ("50+", 0),
];

const EDUCATION: &[(&str, u32)] = &[
    ("none", 0),
    ("highschool", 5),
    ("oneyear", 15),
    ("twoyear", 19),
    ("bachelors", 21),
    ("two_degrees", 22),
    ("masters", 23),
    ("phd", 25),
];

const LANGUAGE: &[(u8, u32)] = &[(4, 0), (5, 0), (6, 0), (7, 16), (8, 20), (9, 24), (10, 24)];

const FRENCH: &[(&str, u32)] = &[("nclc7_plus", 4), ("nclc5_6", 2), ("none", 0)];

const JOB_OFFER: u32 = 10;
const ADAPTABILITY_MAX: u32 = 10;

fn experience_points(years: u32) -> u32 {
    match years {
        0 => 0,
        1 => 9,
        2 | 3 => 11,
        4 | 5 => 13,
        _ => 15,
    }
}

pub fn score(answers: &Answers) -> ProvincialScore {
    let mut score = 0;
    score += lookup(AGE, answers.text("age"));
    score += lookup(EDUCATION, answers.text("education_level"));
    score += clb_lookup(LANGUAGE, language::lowest_benchmark(answers));
    score += lookup(FRENCH, answers.text("french_level"));
    score += experience_points(total_experience_years(answers));

    if job_offer_in(answers, Province::Alberta) && skilled_job_tier(answers) {
        score += JOB_OFFER;
    }

    let mut adaptability = 0;
    for choice in ["family", "study", "work", "living"] {
        if connection(answers, Province::Alberta, choice) {
            adaptability += 5;
        }
    }
    score += adaptability.min(ADAPTABILITY_MAX);

    ProvincialScore {
        province: Province::Alberta,
        score: score.min(MAX),
        max: MAX,
        threshold: THRESHOLD,
        competitive: COMPETITIVE,
        in_demand: Province::Alberta.in_demand(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Answers {
        let mut answers = Answers::new();
        answers.set("age", "25-29");
        answers.set("education_level", "bachelors");
        answers.set("english_test", "celpip");
        for id in ["celpip_speaking", "celpip_listening", "celpip_reading", "celpip_writing"] {
            answers.set(id, "9");
        }
        answers.set("foreign_experience", "4_5");
        answers.set("target_province", "alberta");
        answers
    }

    #[test]
    fn strong_profile_clears_threshold() {
        // 12 + 21 + 24 + 13
        let result = score(&base());
        assert_eq!(result.score, 70);
        assert!(result.is_eligible());
    }

    #[test]
    fn language_below_clb7_scores_nothing() {
        let mut answers = base();
        for id in ["celpip_speaking", "celpip_listening", "celpip_reading", "celpip_writing"] {
            answers.set(id, "6");
        }
        assert_eq!(score(&answers).score, 46);
    }

    #[test]
    fn adaptability_capped_at_ten() {
        let mut answers = base();
        for choice in ["family", "study", "work", "living"] {
            answers.toggle("provincial_connection", choice);
        }
        assert_eq!(score(&answers).score, 80);
    }

    #[test]
    fn french_tops_up_language() {
        let mut answers = base();
        answers.set("french_level", "nclc7_plus");
        assert_eq!(score(&answers).score, 74);
    }
}
