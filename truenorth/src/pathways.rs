//! Alternative immigration pathways and career-transition advice.
//!
//! A static catalog of non-Express-Entry routes, each gated by a condition
//! over the answer store. Conditions are ordinary [`Predicate`]s except
//! where a pathway keys on the selected occupation's sector, which lives in
//! the occupation directory rather than the answers.

use std::sync::OnceLock;

use serde::Serialize;
use truenorth_types::{Answers, Predicate};

use crate::noc;

/// How a pathway decides whether it applies to a profile.
#[derive(Debug, Clone)]
pub enum PathwayCondition {
    /// Always shown.
    Always,
    /// Shown when the predicate holds.
    Holds(Predicate),
    /// Shown when the selected occupation is in the sector, or when no
    /// occupation is on file and the fallback predicate holds.
    SectorOr {
        sectors: &'static [&'static str],
        fallback: Predicate,
    },
}

impl PathwayCondition {
    fn applies(&self, answers: &Answers) -> bool {
        match self {
            Self::Always => true,
            Self::Holds(predicate) => predicate.holds(answers),
            Self::SectorOr { sectors, fallback } => match noc::selected(answers) {
                Some(occupation) => sectors.contains(&occupation.category),
                None => fallback.holds(answers),
            },
        }
    }
}

/// A non-Express-Entry route to permanent residence.
#[derive(Debug, Clone, Serialize)]
pub struct Pathway {
    pub name: &'static str,
    pub description: &'static str,
    pub timeline: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    #[serde(skip)]
    condition: PathwayCondition,
}

fn catalog() -> &'static [Pathway] {
    static CATALOG: OnceLock<Vec<Pathway>> = OnceLock::new();
    CATALOG.get_or_init(build)
}

fn build() -> Vec<Pathway> {
    vec![
        Pathway {
            name: "Study, then post-graduation work, then CEC",
            description: "Study in Canada for 2 years, work on a 3-year post-graduation permit, apply after 1 year of work",
            timeline: "3-4 years to PR",
            pros: &["Canadian education bonus", "Canadian experience", "Lower competition"],
            cons: &["Tuition costs ($15-40k/year)", "Longer timeline"],
            condition: PathwayCondition::Holds(Predicate::All(vec![
                Predicate::not_equals("education_country", "canada"),
                Predicate::not_equals("canada_status", "work_open"),
            ])),
        },
        Pathway {
            name: "Canadian Experience Class direct",
            description: "Already on an open work permit with Canadian experience - apply directly via Express Entry",
            timeline: "6-8 months",
            pros: &["No minimum education", "No job offer required", "Direct pathway"],
            cons: &["Needs 1+ year Canadian skilled experience", "Tier-dependent language thresholds"],
            condition: PathwayCondition::Holds(Predicate::All(vec![
                Predicate::equals("canada_status", "work_open"),
                Predicate::answered("canadian_experience"),
                Predicate::not_equals("canadian_experience", "none"),
            ])),
        },
        Pathway {
            name: "Atlantic Immigration Program",
            description: "Employer-driven program for the Atlantic provinces with no score competition",
            timeline: "6-12 months",
            pros: &["No federal score needed", "Fast processing", "Employer and settlement support"],
            cons: &["Must stay in Atlantic Canada", "Job offer required"],
            condition: PathwayCondition::Always,
        },
        Pathway {
            name: "Rural & Northern Immigration Pilot",
            description: "Community-driven program for smaller towns and rural areas",
            timeline: "6-18 months",
            pros: &["Lower competition", "Community support", "Lower cost of living"],
            cons: &["Limited locations", "Must stay in the community 2+ years"],
            condition: PathwayCondition::Always,
        },
        Pathway {
            name: "British Columbia tech stream",
            description: "Fast-track for tech workers with weekly draws and expedited processing",
            timeline: "3-6 months",
            pros: &["+600 federal points on nomination", "Weekly draws"],
            cons: &["Tech occupations only", "Must intend to live in BC"],
            condition: PathwayCondition::SectorOr {
                sectors: &["STEM"],
                fallback: Predicate::equals("field_of_study", "tech"),
            },
        },
        Pathway {
            name: "Ontario tech draw",
            description: "Ontario targets tech workers through dedicated Express Entry draws",
            timeline: "4-8 months",
            pros: &["+600 federal points on nomination", "Access to the Toronto job market"],
            cons: &["Tech occupations only", "Competitive"],
            condition: PathwayCondition::SectorOr {
                sectors: &["STEM"],
                fallback: Predicate::equals("field_of_study", "tech"),
            },
        },
        Pathway {
            name: "Quebec experience program",
            description: "For those who studied or worked in Quebec; French proficiency required",
            timeline: "6-12 months",
            pros: &["Faster than regular Quebec immigration", "No points system"],
            cons: &["French B2 required", "Must stay in Quebec"],
            condition: PathwayCondition::Holds(Predicate::Any(vec![
                Predicate::equals("target_province", "quebec"),
                Predicate::All(vec![
                    Predicate::answered("french_level"),
                    Predicate::not_equals("french_level", "none"),
                ]),
            ])),
        },
        Pathway {
            name: "Home child care and support worker pilots",
            description: "Pathways for caregivers with Canadian work experience",
            timeline: "12-18 months",
            pros: &["No federal score needed", "Clear pathway after 2 years of work", "Can bring family"],
            cons: &["Specific caregiver occupations only", "Needs 2 years Canadian experience"],
            condition: PathwayCondition::SectorOr {
                sectors: &["Caregiving", "Healthcare"],
                fallback: Predicate::equals("field_of_study", "healthcare"),
            },
        },
        Pathway {
            name: "Agri-food pilot",
            description: "For workers in meat processing, greenhouse production, and livestock",
            timeline: "12-18 months",
            pros: &["No federal score needed", "TEER 4/5 eligible", "Clear pathway to PR"],
            cons: &["Specific occupations and industries only", "Needs 1 year Canadian experience"],
            condition: PathwayCondition::SectorOr {
                sectors: &["Agriculture"],
                fallback: Predicate::equals("field_of_study", "agriculture"),
            },
        },
        Pathway {
            name: "Start-up visa program",
            description: "For entrepreneurs with an innovative business backed by a designated organization",
            timeline: "12-18 months",
            pros: &["No federal score needed", "Can bring business partners"],
            cons: &["Needs designated-organization support", "Competitive pitch process"],
            condition: PathwayCondition::Always,
        },
        Pathway {
            name: "Self-employed persons program",
            description: "For experience in cultural activities, athletics, or farm management",
            timeline: "24-36 months",
            pros: &["No federal score needed", "No job offer required"],
            cons: &["Very specific criteria", "Long processing time"],
            condition: PathwayCondition::Holds(Predicate::one_of(
                "field_of_study",
                &["arts", "agriculture"],
            )),
        },
    ]
}

/// Every cataloged pathway whose condition holds for this profile, in
/// catalog order.
pub fn applicable(answers: &Answers) -> Vec<&'static Pathway> {
    catalog()
        .iter()
        .filter(|pathway| pathway.condition.applies(answers))
        .collect()
}

/// A suggested move toward a higher occupation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub action: &'static str,
    pub detail: &'static str,
    pub outcome: &'static str,
}

const GENERIC_TRANSITIONS: &[Transition] = &[
    Transition {
        action: "Transition to a supervisory role",
        detail: "Many TEER 4 roles have TEER 2/3 supervisor equivalents",
        outcome: "TEER 2-3",
    },
    Transition {
        action: "Get industry certifications",
        detail: "Professional certifications can qualify you for higher-tier roles",
        outcome: "TEER 1-2",
    },
    Transition {
        action: "Study in Canada",
        detail: "Canadian diploma plus a post-graduation work permit in a skilled field",
        outcome: "TEER 0-3",
    },
];

const SECTOR_TRANSITIONS: &[(&str, Transition)] = &[
    (
        "Sales",
        Transition {
            action: "Move into B2B sales or purchasing",
            detail: "Sales representative and purchasing agent roles sit at TEER 2",
            outcome: "TEER 2",
        },
    ),
    (
        "Hospitality",
        Transition {
            action: "Certify as a chef",
            detail: "Red Seal certification plus management experience lifts cook roles a tier",
            outcome: "TEER 2",
        },
    ),
    (
        "Caregiving",
        Transition {
            action: "Qualify as a nurse aide or practical nurse",
            detail: "A support-worker certificate or 1-2 year practical nursing diploma",
            outcome: "TEER 2-3",
        },
    ),
];

/// Transition advice, emitted only when the selected occupation sits at
/// TEER 4 or 5. Sector-specific suggestions lead, generic ones follow.
pub fn career_transitions(answers: &Answers) -> Vec<Transition> {
    let Some(occupation) = noc::selected(answers) else {
        return Vec::new();
    };
    if occupation.teer < 4 {
        return Vec::new();
    }

    let mut transitions = Vec::new();
    for (sector, transition) in SECTOR_TRANSITIONS {
        if *sector == occupation.category {
            transitions.push(*transition);
        }
    }
    transitions.extend_from_slice(GENERIC_TRANSITIONS);
    transitions
}

/// In-demand sector labels per province, keyed by the province answer value.
const IN_DEMAND: &[(&str, &[&str])] = &[
    ("bc", &["tech", "healthcare", "trades"]),
    ("ontario", &["tech", "healthcare", "trades"]),
    ("alberta", &["tech", "healthcare", "trades", "transport"]),
    ("saskatchewan", &["healthcare", "trades", "agriculture"]),
    ("manitoba", &["healthcare", "trades"]),
    ("nova_scotia", &["healthcare", "trades"]),
    ("new_brunswick", &["healthcare", "tech"]),
    ("pei", &["healthcare", "trades"]),
    ("newfoundland", &["healthcare", "trades"]),
];

/// The in-demand sectors for a province answer value.
pub fn in_demand(province: &str) -> &'static [&'static str] {
    IN_DEMAND
        .iter()
        .find_map(|&(key, sectors)| (key == province).then_some(sectors))
        .unwrap_or(&[])
}
