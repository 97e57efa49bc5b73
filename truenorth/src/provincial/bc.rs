//! British Columbia skills-immigration grid.
//!
//! No age table; the grid weights a skilled in-province job offer heavily
//! and requires the offer to sit at TEER 0-3 before it scores.

use truenorth_types::Answers;

use super::{
    Province, ProvincialScore, clb_lookup, connection, job_offer_in, lookup, skilled_job_tier,
    total_experience_years,
};
use crate::language;

pub const MAX: u32 = 130;
pub const THRESHOLD: u32 = 85;
pub const COMPETITIVE: u32 = 110;

const EDUCATION: &[(&str, u32)] = &[
    ("none", 0),
    ("highschool", 5),
    ("oneyear", 10),
    ("twoyear", 10),
    ("bachelors", 20),
    ("two_degrees", 22),
    ("masters", 25),
    ("phd", 27),
];

const LANGUAGE: &[(u8, u32)] = &[(4, 10), (5, 14), (6, 18), (7, 22), (8, 26), (9, 30), (10, 30)];

const JOB_OFFER: u32 = 38;

fn experience_points(years: u32) -> u32 {
    match years {
        0 => 0,
        1 => 4,
        2 => 8,
        3 => 12,
        4 => 16,
        _ => 20,
    }
}

pub fn score(answers: &Answers) -> ProvincialScore {
    let mut score = 0;
    score += lookup(EDUCATION, answers.text("education_level"));
    score += clb_lookup(LANGUAGE, language::lowest_benchmark(answers));
    score += experience_points(total_experience_years(answers));

    if job_offer_in(answers, Province::BritishColumbia) && skilled_job_tier(answers) {
        score += JOB_OFFER;
    }
    if connection(answers, Province::BritishColumbia, "study") {
        score += 5;
    }
    if connection(answers, Province::BritishColumbia, "work") {
        score += 10;
    }

    ProvincialScore {
        province: Province::BritishColumbia,
        score: score.min(MAX),
        max: MAX,
        threshold: THRESHOLD,
        competitive: COMPETITIVE,
        in_demand: Province::BritishColumbia.in_demand(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_profile() -> Answers {
        let mut answers = Answers::new();
        answers.set("education_level", "masters");
        answers.set("english_test", "celpip");
        for id in ["celpip_speaking", "celpip_listening", "celpip_reading", "celpip_writing"] {
            answers.set(id, "9");
        }
        answers.set("canadian_experience", "2");
        answers.set("foreign_experience", "3");
        answers.set("target_province", "bc");
        answers
    }

    #[test]
    fn scores_core_factors() {
        // 25 education + 30 language + 20 experience
        assert_eq!(score(&strong_profile()).score, 75);
    }

    #[test]
    fn job_offer_requires_skilled_tier() {
        let mut answers = strong_profile();
        answers.set("job_offer", "yes");
        answers.set("job_province", "bc");
        answers.set("job_noc_teer", "4_5");
        assert_eq!(score(&answers).score, 75);

        answers.set("job_noc_teer", "1");
        let result = score(&answers);
        assert_eq!(result.score, 113);
        assert!(result.is_eligible());
        assert!(result.score >= COMPETITIVE);
    }

    #[test]
    fn connections_count_only_when_targeting_bc() {
        let mut answers = strong_profile();
        answers.toggle("provincial_connection", "work");
        answers.toggle("provincial_connection", "study");
        assert_eq!(score(&answers).score, 90);

        answers.set("target_province", "alberta");
        assert_eq!(score(&answers).score, 75);
    }
}
