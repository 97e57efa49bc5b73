//! Category-based invitation draw matcher.
//!
//! Express Entry runs targeted draws with per-category cutoffs well below
//! the general cutoff. A profile matches a category through its occupation's
//! sector (or field of study, when no occupation is on file) or, for the
//! French category, through the reported French level. Matches are ranked
//! fully-qualified first, then by descending distance to the cutoff.

use serde::Serialize;
use truenorth_types::Answers;

use crate::noc;

/// The modeled draw categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawCategory {
    General,
    Stem,
    Healthcare,
    Trades,
    Transport,
    Agriculture,
    FrenchProficiency,
}

impl DrawCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General draw",
            Self::Stem => "STEM occupations",
            Self::Healthcare => "Healthcare occupations",
            Self::Trades => "Trade occupations",
            Self::Transport => "Transport occupations",
            Self::Agriculture => "Agriculture and agri-food",
            Self::FrenchProficiency => "French language proficiency",
        }
    }

    /// Approximate cutoff of recent draws in this category.
    pub fn cutoff(self) -> u32 {
        match self {
            Self::General => 525,
            Self::Stem => 480,
            Self::Healthcare => 430,
            Self::Trades => 425,
            Self::Transport => 435,
            Self::Agriculture => 435,
            Self::FrenchProficiency => 375,
        }
    }
}

const ALL: [DrawCategory; 7] = [
    DrawCategory::General,
    DrawCategory::Stem,
    DrawCategory::Healthcare,
    DrawCategory::Trades,
    DrawCategory::Transport,
    DrawCategory::Agriculture,
    DrawCategory::FrenchProficiency,
];

/// A category the profile matches, scored against that category's cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawMatch {
    pub category: DrawCategory,
    pub cutoff: u32,
    pub qualified: bool,
}

impl DrawMatch {
    fn new(category: DrawCategory, federal_score: u32) -> Self {
        Self {
            category,
            cutoff: category.cutoff(),
            qualified: federal_score >= category.cutoff(),
        }
    }
}

fn category_applies(answers: &Answers, category: DrawCategory) -> bool {
    let occupation_sector = noc::selected(answers).map(|occ| occ.category);
    let field = answers.text("field_of_study");
    let sector_or_field = |sector: &str, field_value: &str| {
        occupation_sector == Some(sector) || (occupation_sector.is_none() && field == Some(field_value))
    };
    match category {
        DrawCategory::General => true,
        DrawCategory::Stem => sector_or_field("STEM", "tech") || sector_or_field("STEM", "engineering"),
        DrawCategory::Healthcare => sector_or_field("Healthcare", "healthcare"),
        DrawCategory::Trades => sector_or_field("Trades", "trades"),
        DrawCategory::Transport => sector_or_field("Transport", "transport"),
        DrawCategory::Agriculture => sector_or_field("Agriculture", "agriculture"),
        DrawCategory::FrenchProficiency => matches!(
            answers.text("french_level"),
            Some("nclc7_plus") | Some("nclc5_6")
        ),
    }
}

/// All categories the profile matches, ranked qualified-first then by
/// descending `score - cutoff`.
pub fn matches(answers: &Answers, federal_score: u32) -> Vec<DrawMatch> {
    let mut matched: Vec<DrawMatch> = ALL
        .into_iter()
        .filter(|&category| category_applies(answers, category))
        .map(|category| DrawMatch::new(category, federal_score))
        .collect();
    matched.sort_by_key(|m| {
        (
            !m.qualified,
            i64::from(m.cutoff) - i64::from(federal_score),
        )
    });
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_draw_always_matches() {
        let matched = matches(&Answers::new(), 0);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].category, DrawCategory::General);
        assert!(!matched[0].qualified);
    }

    #[test]
    fn occupation_sector_selects_category() {
        let mut answers = Answers::new();
        answers.set("occupation", "31301");
        let matched = matches(&answers, 450);

        let healthcare = matched
            .iter()
            .find(|m| m.category == DrawCategory::Healthcare)
            .unwrap();
        assert!(healthcare.qualified);
        // Qualified categories lead the list.
        assert_eq!(matched[0].category, DrawCategory::Healthcare);
    }

    #[test]
    fn field_of_study_backstops_missing_occupation() {
        let mut answers = Answers::new();
        answers.set("field_of_study", "tech");
        assert!(
            matches(&answers, 0)
                .iter()
                .any(|m| m.category == DrawCategory::Stem)
        );

        // A non-STEM occupation on file overrides the field of study.
        answers.set("occupation", "31301");
        assert!(
            !matches(&answers, 0)
                .iter()
                .any(|m| m.category == DrawCategory::Stem)
        );
    }

    #[test]
    fn french_category_keys_on_level() {
        let mut answers = Answers::new();
        answers.set("french_level", "nclc7_plus");
        let matched = matches(&answers, 400);
        let french = matched
            .iter()
            .find(|m| m.category == DrawCategory::FrenchProficiency)
            .unwrap();
        assert!(french.qualified);

        answers.set("french_level", "none");
        assert!(
            !matches(&answers, 400)
                .iter()
                .any(|m| m.category == DrawCategory::FrenchProficiency)
        );
    }

    #[test]
    fn unqualified_matches_rank_by_proximity() {
        let mut answers = Answers::new();
        answers.set("occupation", "31301");
        answers.set("french_level", "nclc5_6");
        let matched = matches(&answers, 300);
        assert!(matched.iter().all(|m| !m.qualified));
        for pair in matched.windows(2) {
            assert!(pair[0].cutoff <= pair[1].cutoff);
        }
    }
}
