//! End-to-end report assembly over canned profiles.

use chrono::NaiveDate;
use truenorth::programs::{EligibilityStatus, Program};
use truenorth::report::{Report, ReportError, assemble};
use truenorth::warnings::Severity;
use truenorth::{Answers, federal, provincial};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn report(answers: &Answers) -> Report {
    assemble(answers, today()).expect("profile should be complete")
}

#[test]
fn young_professional_report() {
    let answers = example_profiles::young_professional();
    let report = report(&answers);

    // 110 age + 120 education + 100 language + 40 Canadian experience.
    assert_eq!(report.federal.score, 370);
    assert!(report.warnings.is_empty());

    let fsw = &report.programs[0];
    assert_eq!(fsw.program, Program::FederalSkilledWorker);
    assert_eq!(fsw.status, EligibilityStatus::Eligible);

    assert_eq!(
        report.profile.language.as_deref(),
        Some("CLB 9 (valid until 2027-01-15)")
    );
    assert_eq!(report.profile.occupation.as_deref(), Some("Software Engineers"));
}

#[test]
fn accompanied_nurse_scores_lower_than_solo_equivalent() {
    let accompanied = example_profiles::accompanied_nurse();
    let mut solo = accompanied.clone();
    solo.set("marital_status", "single");
    solo.remove("spouse_coming");
    solo.remove("spouse_education");
    solo.remove("spouse_language");
    solo.remove("spouse_experience");

    let accompanied_score = federal::federal_score(&accompanied).score;
    let solo_score = federal::federal_score(&solo).score;
    assert!(accompanied_score < solo_score);
}

#[test]
fn tradesperson_is_eligible_for_fst_and_saskatchewan() {
    let answers = example_profiles::certified_tradesperson();
    let report = report(&answers);

    let fst = report
        .programs
        .iter()
        .find(|v| v.program == Program::FederalSkilledTrades)
        .unwrap();
    assert_eq!(fst.status, EligibilityStatus::Eligible);

    // The in-province job offer should put Saskatchewan on top.
    assert_eq!(
        report.provincial[0].province,
        provincial::Province::Saskatchewan
    );
    assert!(report.provincial[0].is_eligible());
    // The sector list explains the match: trades are in demand there.
    assert!(report.provincial[0].in_demand.contains(&"trades"));
}

#[test]
fn unprepared_explorer_gets_ordered_warnings() {
    let answers = example_profiles::unprepared_explorer();
    let report = report(&answers);

    let issues: Vec<&str> = report.warnings.iter().map(|w| w.issue).collect();
    assert_eq!(
        issues,
        [
            "No language test completed",
            "No ECA completed",
            "Criminal history may affect admissibility",
            "Previous visa refusal on record",
            "Occupation at TEER 4/5 is not eligible for Express Entry",
        ]
    );
    assert_eq!(report.warnings[0].severity, Severity::Urgent);
    assert!(!report.career_transitions.is_empty());

    // No valid test: both the fee and the timeline step appear.
    assert!(report.costs.items.iter().any(|i| i.label == "Language test"));
    assert_eq!(report.timeline[0].name, "Take a language test");
}

#[test]
fn provincial_results_sorted_by_descending_margin() {
    let report = report(&example_profiles::young_professional());
    for pair in report.provincial.windows(2) {
        assert!(pair[0].margin() >= pair[1].margin());
    }
}

#[test]
fn assembly_is_idempotent() {
    let answers = example_profiles::young_professional();
    let first = serde_json::to_value(report(&answers)).unwrap();
    let second = serde_json::to_value(report(&answers)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn report_serializes_with_snake_case_labels() {
    let value = serde_json::to_value(report(&example_profiles::unprepared_explorer())).unwrap();

    assert_eq!(value["programs"][0]["program"], "federal_skilled_worker");
    assert_eq!(value["warnings"][0]["severity"], "urgent");
    assert!(value["provincial"][0]["province"].is_string());
    assert!(value["provincial"][0]["in_demand"].is_array());
    assert_eq!(value["federal"]["max"], 1200);
}

#[test]
fn incomplete_profile_is_refused() {
    let mut answers = example_profiles::young_professional();
    answers.remove("settlement_funds");
    let err = assemble(&answers, today()).unwrap_err();
    assert_eq!(
        err,
        ReportError::IncompleteProfile {
            id: "settlement_funds"
        }
    );
}

#[test]
fn children_scale_fees_and_settlement_funds() {
    let answers = example_profiles::accompanied_nurse();
    let report = report(&answers);

    let child_fee = report
        .costs
        .items
        .iter()
        .find(|i| i.label == "Dependent child fee")
        .unwrap();
    assert_eq!(child_fee.amount_cad, 230);
    assert_eq!(report.costs.settlement_funds_cad, 18_288 + 4_500);
}
