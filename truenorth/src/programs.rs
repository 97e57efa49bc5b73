//! Federal program eligibility evaluators.
//!
//! Three fixed programs, each a list of named requirements checked against
//! the answer store. Status classification counts unmet requirements: none
//! unmet is eligible, exactly one unmet is likely, two or more is not
//! eligible. Each verdict carries one tip string chosen from the computed
//! federal score or profile.

use serde::Serialize;
use truenorth_types::Answers;

use crate::federal::{self, RECENT_GENERAL_CUTOFF};
use crate::{language, noc};

/// The modeled federal economic programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    FederalSkilledWorker,
    CanadianExperienceClass,
    FederalSkilledTrades,
}

impl Program {
    pub fn label(self) -> &'static str {
        match self {
            Self::FederalSkilledWorker => "Federal Skilled Worker (FSW)",
            Self::CanadianExperienceClass => "Canadian Experience Class (CEC)",
            Self::FederalSkilledTrades => "Federal Skilled Trades (FST)",
        }
    }
}

/// Verdict classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    Eligible,
    Likely,
    NotEligible,
}

impl EligibilityStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Eligible => "Likely Eligible",
            Self::Likely => "May Qualify",
            Self::NotEligible => "Not Eligible",
        }
    }

    fn from_unmet(unmet: usize) -> Self {
        match unmet {
            0 => Self::Eligible,
            1 => Self::Likely,
            _ => Self::NotEligible,
        }
    }
}

/// One named requirement and whether the profile meets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub text: &'static str,
    pub met: bool,
}

/// A program's full verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramVerdict {
    pub program: Program,
    pub requirements: Vec<Requirement>,
    pub status: EligibilityStatus,
    pub tip: &'static str,
}

fn verdict(program: Program, requirements: Vec<Requirement>, tip: &'static str) -> ProgramVerdict {
    let unmet = requirements.iter().filter(|r| !r.met).count();
    ProgramVerdict {
        program,
        requirements,
        status: EligibilityStatus::from_unmet(unmet),
        tip,
    }
}

/// Evaluate all three programs. `federal_score` is passed in so the report
/// assembler computes it exactly once.
pub fn evaluate_all(answers: &Answers, federal_score: u32) -> Vec<ProgramVerdict> {
    vec![
        skilled_worker(answers, federal_score),
        canadian_experience(answers),
        skilled_trades(answers),
    ]
}

fn skilled_worker(answers: &Answers, federal_score: u32) -> ProgramVerdict {
    let clb = language::lowest_benchmark(answers);
    let foreign = federal::foreign_experience_years(answers);
    let canadian = federal::canadian_experience_years(answers);

    let requirements = vec![
        Requirement {
            text: "CLB 7+ in all abilities",
            met: clb >= 7,
        },
        Requirement {
            text: "1+ year skilled work experience",
            met: foreign >= 1 || canadian >= 1,
        },
        Requirement {
            text: "Post-secondary education",
            met: answers
                .text("education_level")
                .is_some_and(|level| level != "highschool" && level != "none"),
        },
        Requirement {
            text: "ECA completed (if foreign education)",
            met: answers.is("education_country", "canada") || answers.is("eca_status", "yes"),
        },
        Requirement {
            text: "Proof of settlement funds",
            met: answers
                .text("settlement_funds")
                .is_some_and(|funds| funds != "difficult"),
        },
    ];

    let tip = if federal_score < RECENT_GENERAL_CUTOFF {
        "Score below recent general cutoffs. Consider a provincial nomination for +600 points."
    } else {
        "Your score is competitive for recent draws."
    };
    verdict(Program::FederalSkilledWorker, requirements, tip)
}

fn canadian_experience(answers: &Answers) -> ProgramVerdict {
    let clb = language::lowest_benchmark(answers);
    let canadian = federal::canadian_experience_years(answers);
    let teer = noc::selected(answers).map(|occ| occ.teer);

    let requirements = vec![
        Requirement {
            text: "1+ year Canadian work experience (last 3 years)",
            met: canadian >= 1,
        },
        Requirement {
            text: "CLB 7 for TEER 0/1, CLB 5 for TEER 2/3",
            met: match teer {
                Some(0 | 1) => clb >= 7,
                Some(2 | 3) => clb >= 5,
                _ => false,
            },
        },
        Requirement {
            text: "Skilled occupation (TEER 0-3)",
            met: teer.is_some_and(|t| t <= 3),
        },
    ];

    let tip = if canadian >= 1 {
        "Often the easiest route when you already hold Canadian experience."
    } else {
        "Gain Canadian work experience via a post-graduation or LMIA work permit first."
    };
    verdict(Program::CanadianExperienceClass, requirements, tip)
}

fn skilled_trades(answers: &Answers) -> ProgramVerdict {
    let clb = language::lowest_benchmark(answers);
    let certified = answers
        .text("trade_cert")
        .is_some_and(|cert| cert != "no");

    let requirements = vec![
        Requirement {
            text: "Trade certificate or 2 years experience",
            met: certified,
        },
        Requirement {
            text: "CLB 5 Speaking/Listening, CLB 4 Reading/Writing",
            met: clb >= 5,
        },
        Requirement {
            text: "Job offer or certificate of qualification",
            met: answers.is("job_offer", "yes") || certified,
        },
    ];

    verdict(
        Program::FederalSkilledTrades,
        requirements,
        "Best suited to Red Seal certified tradespeople with job offers.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_profile() -> Answers {
        let mut answers = Answers::new();
        answers.set("education_level", "bachelors");
        answers.set("education_country", "canada");
        answers.set("english_test", "celpip");
        for id in ["celpip_speaking", "celpip_listening", "celpip_reading", "celpip_writing"] {
            answers.set(id, "9");
        }
        answers.set("canadian_experience", "1");
        answers.set("occupation", "21231");
        answers.set("settlement_funds", "yes");
        answers
    }

    fn status_of(verdicts: &[ProgramVerdict], program: Program) -> EligibilityStatus {
        verdicts
            .iter()
            .find(|v| v.program == program)
            .map(|v| v.status)
            .unwrap()
    }

    #[test]
    fn strong_profile_is_eligible_for_fsw_and_cec() {
        let verdicts = evaluate_all(&strong_profile(), 470);
        assert_eq!(
            status_of(&verdicts, Program::FederalSkilledWorker),
            EligibilityStatus::Eligible
        );
        assert_eq!(
            status_of(&verdicts, Program::CanadianExperienceClass),
            EligibilityStatus::Eligible
        );
    }

    #[test]
    fn one_unmet_requirement_downgrades_to_likely() {
        let mut answers = strong_profile();
        answers.set("settlement_funds", "difficult");
        let verdicts = evaluate_all(&answers, 470);
        assert_eq!(
            status_of(&verdicts, Program::FederalSkilledWorker),
            EligibilityStatus::Likely
        );
    }

    #[test]
    fn two_unmet_requirements_mean_not_eligible() {
        let mut answers = strong_profile();
        answers.set("settlement_funds", "difficult");
        answers.set("education_level", "highschool");
        let verdicts = evaluate_all(&answers, 470);
        assert_eq!(
            status_of(&verdicts, Program::FederalSkilledWorker),
            EligibilityStatus::NotEligible
        );
    }

    #[test]
    fn cec_tier_dependent_language_threshold() {
        let mut answers = strong_profile();
        for id in ["celpip_speaking", "celpip_listening", "celpip_reading", "celpip_writing"] {
            answers.set(id, "5");
        }
        // TEER 1 occupation at CLB 5 fails the tier threshold.
        let verdicts = evaluate_all(&answers, 300);
        assert_eq!(
            status_of(&verdicts, Program::CanadianExperienceClass),
            EligibilityStatus::Likely
        );

        // A TEER 2 occupation accepts CLB 5.
        answers.set("occupation", "72010");
        let verdicts = evaluate_all(&answers, 300);
        assert_eq!(
            status_of(&verdicts, Program::CanadianExperienceClass),
            EligibilityStatus::Eligible
        );
    }

    #[test]
    fn trades_program_keys_on_certification() {
        let mut answers = strong_profile();
        answers.set("trade_cert", "red_seal");
        let verdicts = evaluate_all(&answers, 400);
        assert_eq!(
            status_of(&verdicts, Program::FederalSkilledTrades),
            EligibilityStatus::Eligible
        );

        answers.set("trade_cert", "no");
        let verdicts = evaluate_all(&answers, 400);
        assert_eq!(
            status_of(&verdicts, Program::FederalSkilledTrades),
            EligibilityStatus::NotEligible
        );
    }

    #[test]
    fn fsw_tip_switches_on_cutoff() {
        let low = evaluate_all(&strong_profile(), 400);
        let high = evaluate_all(&strong_profile(), 520);
        assert_ne!(low[0].tip, high[0].tip);
    }
}
