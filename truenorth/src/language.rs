//! Language-benchmark normalization.
//!
//! Every scoring table in this engine is keyed by a CLB-equivalent benchmark
//! (integer 4..=10). Each supported test family defines its own raw-score to
//! benchmark lookup per sub-skill; [`lowest_benchmark`] maps the four
//! sub-skill answers through the active family's tables and returns the
//! minimum. This function is the single source of truth for language
//! ability - calculators call it instead of re-reading the raw answers.

use truenorth_types::Answers;

/// A supported English test family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestFamily {
    /// IELTS General Training: four band scores (0.5 steps).
    Ielts,
    /// CELPIP General: integer levels 4-12.
    Celpip,
    /// PTE Core: numeric score ranges per sub-skill.
    PteCore,
}

/// The four scored sub-skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skill {
    Speaking,
    Listening,
    Reading,
    Writing,
}

impl Skill {
    pub const ALL: [Skill; 4] = [
        Skill::Speaking,
        Skill::Listening,
        Skill::Reading,
        Skill::Writing,
    ];
}

impl TestFamily {
    /// Determine the active family from the "which test" answer.
    pub fn from_answers(answers: &Answers) -> Option<Self> {
        match answers.text("english_test")? {
            "ielts" => Some(Self::Ielts),
            "celpip" => Some(Self::Celpip),
            "pte" => Some(Self::PteCore),
            _ => None,
        }
    }

    /// The answer-store id holding the raw score for a sub-skill.
    pub fn skill_id(self, skill: Skill) -> &'static str {
        match (self, skill) {
            (Self::Ielts, Skill::Speaking) => "ielts_speaking",
            (Self::Ielts, Skill::Listening) => "ielts_listening",
            (Self::Ielts, Skill::Reading) => "ielts_reading",
            (Self::Ielts, Skill::Writing) => "ielts_writing",
            (Self::Celpip, Skill::Speaking) => "celpip_speaking",
            (Self::Celpip, Skill::Listening) => "celpip_listening",
            (Self::Celpip, Skill::Reading) => "celpip_reading",
            (Self::Celpip, Skill::Writing) => "celpip_writing",
            (Self::PteCore, Skill::Speaking) => "pte_speaking",
            (Self::PteCore, Skill::Listening) => "pte_listening",
            (Self::PteCore, Skill::Reading) => "pte_reading",
            (Self::PteCore, Skill::Writing) => "pte_writing",
        }
    }

    /// Map a raw sub-skill score to its CLB-equivalent benchmark.
    pub fn benchmark(self, skill: Skill, raw: &str) -> Option<u8> {
        let table = match self {
            Self::Ielts => ielts_table(skill),
            Self::Celpip => CELPIP,
            Self::PteCore => pte_table(skill),
        };
        table
            .iter()
            .find_map(|&(score, clb)| (score == raw).then_some(clb))
    }
}

// IELTS band-to-CLB conversion differs per sub-skill.
fn ielts_table(skill: Skill) -> &'static [(&'static str, u8)] {
    match skill {
        Skill::Speaking => &[
            ("4.0", 4),
            ("5.0", 5),
            ("5.5", 6),
            ("6.0", 7),
            ("6.5", 8),
            ("7.0", 9),
            ("7.5", 9),
            ("8.0+", 10),
        ],
        Skill::Listening => &[
            ("4.5", 4),
            ("5.0", 5),
            ("5.5", 6),
            ("6.0", 7),
            ("7.0", 8),
            ("7.5", 9),
            ("8.0", 9),
            ("8.5+", 10),
        ],
        Skill::Reading => &[
            ("3.5", 4),
            ("4.0", 5),
            ("5.0", 6),
            ("6.0", 7),
            ("6.5", 8),
            ("7.0", 9),
            ("8.0+", 10),
        ],
        Skill::Writing => &[
            ("4.0", 4),
            ("5.0", 5),
            ("5.5", 6),
            ("6.0", 7),
            ("6.5", 8),
            ("7.0", 9),
            ("7.5+", 10),
        ],
    }
}

// CELPIP levels map 1:1 onto CLB for every sub-skill.
const CELPIP: &[(&str, u8)] = &[
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("10+", 10),
];

fn pte_table(skill: Skill) -> &'static [(&'static str, u8)] {
    match skill {
        Skill::Speaking => &[
            ("42-50", 4),
            ("51-58", 5),
            ("59-67", 6),
            ("68-75", 7),
            ("76-83", 8),
            ("84-88", 9),
            ("89+", 10),
        ],
        Skill::Listening => &[
            ("28-32", 4),
            ("33-38", 5),
            ("39-49", 6),
            ("50-59", 7),
            ("60-70", 8),
            ("71-81", 9),
            ("82+", 10),
        ],
        Skill::Reading => &[
            ("33-40", 4),
            ("41-50", 5),
            ("51-59", 6),
            ("60-68", 7),
            ("69-77", 8),
            ("78-87", 9),
            ("88+", 10),
        ],
        Skill::Writing => &[
            ("41-50", 4),
            ("51-59", 5),
            ("60-68", 6),
            ("69-78", 7),
            ("79-87", 8),
            ("88-89", 9),
            ("90", 10),
        ],
    }
}

/// The lowest CLB-equivalent benchmark across the four sub-skills of the
/// active test family.
///
/// Returns 0 ("no valid test on file") unless all four sub-skills are
/// answered and map through the family's tables.
pub fn lowest_benchmark(answers: &Answers) -> u8 {
    let Some(family) = TestFamily::from_answers(answers) else {
        return 0;
    };

    let mut lowest = u8::MAX;
    for skill in Skill::ALL {
        let Some(raw) = answers.text(family.skill_id(skill)) else {
            return 0;
        };
        let Some(clb) = family.benchmark(skill, raw) else {
            return 0;
        };
        lowest = lowest.min(clb);
    }
    lowest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ielts_answers(speaking: &str, listening: &str, reading: &str, writing: &str) -> Answers {
        let mut answers = Answers::new();
        answers.set("english_test", "ielts");
        answers.set("ielts_speaking", speaking);
        answers.set("ielts_listening", listening);
        answers.set("ielts_reading", reading);
        answers.set("ielts_writing", writing);
        answers
    }

    #[test]
    fn minimum_of_four_sub_skills() {
        let answers = ielts_answers("7.0", "7.5", "7.0", "7.0");
        assert_eq!(lowest_benchmark(&answers), 9);

        // One weak skill drags the whole benchmark down.
        let answers = ielts_answers("7.0", "7.5", "7.0", "5.5");
        assert_eq!(lowest_benchmark(&answers), 6);
    }

    #[test]
    fn missing_sub_skill_means_no_benchmark() {
        let mut answers = ielts_answers("7.0", "7.5", "7.0", "7.0");
        answers.remove("ielts_reading");
        assert_eq!(lowest_benchmark(&answers), 0);
    }

    #[test]
    fn unmapped_raw_score_means_no_benchmark() {
        let answers = ielts_answers("7.0", "7.5", "9.75", "7.0");
        assert_eq!(lowest_benchmark(&answers), 0);
    }

    #[test]
    fn no_test_means_no_benchmark() {
        let mut answers = Answers::new();
        assert_eq!(lowest_benchmark(&answers), 0);

        answers.set("english_test", "none");
        assert_eq!(lowest_benchmark(&answers), 0);
    }

    #[test]
    fn celpip_levels_map_directly() {
        let mut answers = Answers::new();
        answers.set("english_test", "celpip");
        for id in ["celpip_speaking", "celpip_listening", "celpip_reading", "celpip_writing"] {
            answers.set(id, "8");
        }
        assert_eq!(lowest_benchmark(&answers), 8);

        answers.set("celpip_writing", "10+");
        assert_eq!(lowest_benchmark(&answers), 8);
    }

    #[test]
    fn pte_ranges_map_per_skill() {
        let mut answers = Answers::new();
        answers.set("english_test", "pte");
        answers.set("pte_speaking", "84-88");
        answers.set("pte_listening", "71-81");
        answers.set("pte_reading", "78-87");
        answers.set("pte_writing", "88-89");
        assert_eq!(lowest_benchmark(&answers), 9);
    }
}
