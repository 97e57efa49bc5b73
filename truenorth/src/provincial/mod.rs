//! Provincial nomination score calculators.
//!
//! Seven independent point grids, one per modeled province. Each follows the
//! same shape as the federal calculator - bucketed tables for age, education,
//! language, and experience, plus province connection bonuses - but every
//! constant is per-province; no grid shares or derives values from another
//! grid or from the federal table.
//!
//! Connection bonuses only accrue toward the applicant's stated target
//! province; a job-offer bonus additionally requires the offer to be located
//! in the province being scored.

use serde::Serialize;
use truenorth_types::Answers;

use crate::bucket_years;

pub mod alberta;
pub mod bc;
pub mod manitoba;
pub mod new_brunswick;
pub mod newfoundland;
pub mod pei;
pub mod saskatchewan;

/// A modeled province.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Province {
    BritishColumbia,
    Saskatchewan,
    Manitoba,
    Alberta,
    NewBrunswick,
    PrinceEdwardIsland,
    Newfoundland,
}

impl Province {
    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::BritishColumbia => "British Columbia",
            Self::Saskatchewan => "Saskatchewan",
            Self::Manitoba => "Manitoba",
            Self::Alberta => "Alberta",
            Self::NewBrunswick => "New Brunswick",
            Self::PrinceEdwardIsland => "Prince Edward Island",
            Self::Newfoundland => "Newfoundland & Labrador",
        }
    }

    /// The answer value used by the province questions.
    pub fn answer_value(self) -> &'static str {
        match self {
            Self::BritishColumbia => "bc",
            Self::Saskatchewan => "saskatchewan",
            Self::Manitoba => "manitoba",
            Self::Alberta => "alberta",
            Self::NewBrunswick => "new_brunswick",
            Self::PrinceEdwardIsland => "pei",
            Self::Newfoundland => "newfoundland",
        }
    }

    /// Sector labels this province currently recruits for.
    pub fn in_demand(self) -> &'static [&'static str] {
        crate::pathways::in_demand(self.answer_value())
    }
}

/// A province's score with its grid's fixed scale and thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProvincialScore {
    pub province: Province,
    pub score: u32,
    pub max: u32,
    /// Minimum score to enter the province's candidate pool.
    pub threshold: u32,
    /// Score at which an invitation is realistically expected.
    pub competitive: u32,
    /// Sectors the province recruits for, to explain why it matches.
    pub in_demand: &'static [&'static str],
}

impl ProvincialScore {
    /// Distance above (positive) or below (negative) the pool threshold.
    pub fn margin(&self) -> i64 {
        i64::from(self.score) - i64::from(self.threshold)
    }

    pub fn is_eligible(&self) -> bool {
        self.score >= self.threshold
    }
}

/// Score every province and sort by descending margin, so eligible provinces
/// lead and near-misses follow in order of proximity.
pub fn all_scores(answers: &Answers) -> Vec<ProvincialScore> {
    let mut scores = vec![
        bc::score(answers),
        saskatchewan::score(answers),
        manitoba::score(answers),
        alberta::score(answers),
        new_brunswick::score(answers),
        pei::score(answers),
        newfoundland::score(answers),
    ];
    scores.sort_by_key(|s| std::cmp::Reverse(s.margin()));
    scores
}

pub(crate) fn lookup(table: &[(&str, u32)], key: Option<&str>) -> u32 {
    let Some(key) = key else { return 0 };
    table
        .iter()
        .find_map(|&(k, pts)| (k == key).then_some(pts))
        .unwrap_or(0)
}

pub(crate) fn clb_lookup(table: &[(u8, u32)], benchmark: u8) -> u32 {
    table
        .iter()
        .find_map(|&(clb, pts)| (clb == benchmark).then_some(pts))
        .unwrap_or(0)
}

/// Whether the applicant has named this province as their target.
pub(crate) fn targeting(answers: &Answers, province: Province) -> bool {
    answers.is("target_province", province.answer_value())
}

/// Whether a provincial-connection choice was selected, counted only toward
/// the target province.
pub(crate) fn connection(answers: &Answers, province: Province, choice: &str) -> bool {
    targeting(answers, province) && answers.selected("provincial_connection", choice)
}

/// Whether the applicant holds a job offer located in this province.
pub(crate) fn job_offer_in(answers: &Answers, province: Province) -> bool {
    answers.is("job_offer", "yes") && answers.is("job_province", province.answer_value())
}

/// Whether the job offer's tier qualifies as skilled (TEER 0-3).
pub(crate) fn skilled_job_tier(answers: &Answers) -> bool {
    matches!(
        answers.text("job_noc_teer"),
        Some("0") | Some("1") | Some("2") | Some("3")
    )
}

/// Combined years of skilled experience, domestic plus foreign.
pub(crate) fn total_experience_years(answers: &Answers) -> u32 {
    bucket_years(answers.text("canadian_experience")) + bucket_years(answers.text("foreign_experience"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_scores_sorted_by_descending_margin() {
        let mut answers = Answers::new();
        answers.set("age", "25-29");
        answers.set("education_level", "masters");
        answers.set("english_test", "celpip");
        for id in ["celpip_speaking", "celpip_listening", "celpip_reading", "celpip_writing"] {
            answers.set(id, "9");
        }
        answers.set("canadian_experience", "2");
        answers.set("foreign_experience", "3");
        answers.set("target_province", "manitoba");
        answers.toggle("provincial_connection", "family");

        let scores = all_scores(&answers);
        assert_eq!(scores.len(), 7);
        for pair in scores.windows(2) {
            assert!(pair[0].margin() >= pair[1].margin());
        }
    }

    #[test]
    fn entries_carry_their_in_demand_sectors() {
        let scores = all_scores(&Answers::new());
        let bc = scores
            .iter()
            .find(|s| s.province == Province::BritishColumbia)
            .unwrap();
        assert!(bc.in_demand.contains(&"tech"));
        let manitoba = scores
            .iter()
            .find(|s| s.province == Province::Manitoba)
            .unwrap();
        assert!(!manitoba.in_demand.contains(&"tech"));
    }

    #[test]
    fn connection_requires_target_province() {
        let mut answers = Answers::new();
        answers.set("target_province", "alberta");
        answers.toggle("provincial_connection", "family");

        assert!(connection(&answers, Province::Alberta, "family"));
        assert!(!connection(&answers, Province::Manitoba, "family"));
        assert!(!connection(&answers, Province::Alberta, "study"));
    }

    #[test]
    fn job_offer_location_gates_bonus() {
        let mut answers = Answers::new();
        answers.set("job_offer", "yes");
        answers.set("job_province", "bc");
        assert!(job_offer_in(&answers, Province::BritishColumbia));
        assert!(!job_offer_in(&answers, Province::Alberta));

        answers.set("job_offer", "no");
        assert!(!job_offer_in(&answers, Province::BritishColumbia));
    }

    #[test]
    fn empty_answers_score_zero_everywhere() {
        for score in all_scores(&Answers::new()) {
            assert_eq!(score.score, 0);
            assert!(!score.is_eligible());
        }
    }
}
