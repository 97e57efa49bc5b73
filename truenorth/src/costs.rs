//! Application cost estimate.
//!
//! Fixed government fee constants in Canadian dollars, scaled by applicant
//! count, plus a few conditional fees. Settlement funds are reported
//! separately because they are money to show, not money to spend.

use serde::Serialize;
use truenorth_types::Answers;

use crate::{language, questions};

pub const PROCESSING_FEE: u32 = 850;
pub const RIGHT_OF_PR_FEE: u32 = 515;
pub const CHILD_FEE: u32 = 230;
pub const BIOMETRICS_SINGLE: u32 = 85;
pub const BIOMETRICS_FAMILY: u32 = 170;
pub const LANGUAGE_TEST_FEE: u32 = 350;
pub const ECA_FEE: u32 = 240;
pub const MEDICAL_EXAM_FEE: u32 = 280;
pub const POLICE_CERTIFICATE_FEE: u32 = 50;

pub const SETTLEMENT_FUNDS_SINGLE: u32 = 14_690;
pub const SETTLEMENT_FUNDS_COUPLE: u32 = 18_288;
pub const SETTLEMENT_FUNDS_PER_CHILD: u32 = 4_500;

/// One line of the estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostItem {
    pub label: &'static str,
    pub amount_cad: u32,
}

/// The full estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub items: Vec<CostItem>,
    pub total_cad: u32,
    /// Funds to show, not to spend.
    pub settlement_funds_cad: u32,
}

fn adults(answers: &Answers) -> u32 {
    if answers.is("spouse_coming", "yes") { 2 } else { 1 }
}

fn children(answers: &Answers) -> u32 {
    answers
        .text("children_count")
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0)
}

/// Build the estimate from the current profile.
pub fn estimate(answers: &Answers) -> CostBreakdown {
    let adults = adults(answers);
    let children = children(answers);
    let mut items = Vec::new();

    items.push(CostItem {
        label: "Application processing fee",
        amount_cad: PROCESSING_FEE * adults,
    });
    items.push(CostItem {
        label: "Right of permanent residence fee",
        amount_cad: RIGHT_OF_PR_FEE * adults,
    });
    if children > 0 {
        items.push(CostItem {
            label: "Dependent child fee",
            amount_cad: CHILD_FEE * children,
        });
    }
    items.push(CostItem {
        label: "Biometrics",
        amount_cad: if adults > 1 {
            BIOMETRICS_FAMILY
        } else {
            BIOMETRICS_SINGLE
        },
    });

    let needs_test =
        language::lowest_benchmark(answers) == 0 || answers.flag(questions::TEST_EXPIRED);
    if needs_test {
        items.push(CostItem {
            label: "Language test",
            amount_cad: LANGUAGE_TEST_FEE,
        });
    }
    if answers.is("education_country", "foreign") && !answers.is("eca_status", "yes") {
        items.push(CostItem {
            label: "Educational credential assessment",
            amount_cad: ECA_FEE,
        });
    }

    items.push(CostItem {
        label: "Medical exam",
        amount_cad: MEDICAL_EXAM_FEE * adults,
    });
    items.push(CostItem {
        label: "Police certificates",
        amount_cad: POLICE_CERTIFICATE_FEE * adults,
    });

    let total_cad = items.iter().map(|item| item.amount_cad).sum();
    let settlement_funds_cad = if adults > 1 {
        SETTLEMENT_FUNDS_COUPLE
    } else {
        SETTLEMENT_FUNDS_SINGLE
    } + SETTLEMENT_FUNDS_PER_CHILD * children;

    CostBreakdown {
        items,
        total_cad,
        settlement_funds_cad,
    }
}
