//! Driving a full interview from the first question to the report.

use chrono::NaiveDate;
use truenorth::programs::EligibilityStatus;
use truenorth::{AnswerValue, QuestionKind};
use truenorth_wizard::{Session, SessionError, TestDateStatus};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// Feed a scripted profile into the session, answering whatever question
/// comes up. Panics if the script is missing an answer the branch needs.
fn drive(session: &mut Session, script: &[(&str, &str)]) {
    while let Some(question) = session.current() {
        let id = question.id();
        let Some((_, value)) = script.iter().find(|(k, _)| *k == id) else {
            match question.kind() {
                QuestionKind::MultiChoice => {
                    session.toggle("none").unwrap();
                    session.confirm().unwrap();
                    continue;
                }
                _ if question.is_optional() => {
                    session.confirm().unwrap();
                    continue;
                }
                _ => panic!("script has no answer for `{id}`"),
            }
        };
        session.submit(AnswerValue::from(*value)).unwrap();
    }
}

const YOUNG_PROFESSIONAL: &[(&str, &str)] = &[
    ("age", "25-29"),
    ("marital_status", "single"),
    ("current_location", "in_canada"),
    ("canada_status", "work_open"),
    ("time_in_canada", "1_2"),
    ("target_province", "bc"),
    ("education_level", "bachelors"),
    ("education_country", "foreign"),
    ("eca_status", "yes"),
    ("field_of_study", "tech"),
    ("occupation", "21231"),
    ("foreign_experience", "2"),
    ("canadian_experience", "1"),
    ("trade_cert", "no"),
    ("english_test", "ielts"),
    ("test_date", "2025-01-15"),
    ("ielts_speaking", "7.0"),
    ("ielts_listening", "7.5"),
    ("ielts_reading", "7.0"),
    ("ielts_writing", "7.0"),
    ("french_test", "none"),
    ("job_offer", "no"),
    ("family_in_canada", "none"),
    ("settlement_funds", "yes"),
    ("previous_refusal", "no"),
    ("medical_issues", "no"),
    ("criminal_history", "no"),
    ("primary_goal", "pr_fast"),
];

#[test]
fn full_interview_produces_a_report() {
    let mut session = Session::new(today());
    drive(&mut session, YOUNG_PROFESSIONAL);
    assert!(session.is_complete());
    assert_eq!(session.progress().fraction(), 1.0);

    let report = session.report().unwrap();
    assert_eq!(report.federal.score, 370);
    assert_eq!(report.programs[0].status, EligibilityStatus::Eligible);
    assert!(report.warnings.is_empty());
}

#[test]
fn report_is_refused_mid_interview() {
    let mut session = Session::new(today());
    session.submit(AnswerValue::from("25-29")).unwrap();
    assert!(matches!(
        session.report(),
        Err(SessionError::Report(_))
    ));
}

#[test]
fn progress_advances_monotonically() {
    let mut session = Session::new(today());
    let mut last = session.progress().fraction();
    let mut steps = Vec::new();

    // Manually replicate drive() so progress can be sampled between answers.
    while let Some(question) = session.current() {
        steps.push(question.step());
        let id = question.id();
        match YOUNG_PROFESSIONAL.iter().find(|(k, _)| *k == id) {
            Some((_, value)) => {
                session.submit(AnswerValue::from(*value)).unwrap();
            }
            None if question.kind() == QuestionKind::MultiChoice => {
                session.toggle("none").unwrap();
                session.confirm().unwrap();
            }
            None => session.confirm().unwrap(),
        }
        let now = session.progress().fraction();
        assert!(now >= last);
        last = now;
    }
    // Steps climb through the interview without jumping backward.
    assert!(steps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn future_test_date_is_rejected_with_a_message() {
    let mut session = Session::new(today());
    drive_until(&mut session, "test_date");

    let err = session.submit(AnswerValue::from("2025-12-01")).unwrap_err();
    assert_eq!(
        err,
        SessionError::Invalid("The test date cannot be in the future".into())
    );
    assert_eq!(session.current().unwrap().id(), "test_date");
}

#[test]
fn expiring_test_date_reports_months_remaining() {
    let mut session = Session::new(today());
    drive_until(&mut session, "test_date");

    let status = session.submit(AnswerValue::from("2023-08-15")).unwrap();
    match status.unwrap() {
        TestDateStatus::ExpiringSoon {
            expiry,
            months_remaining,
        } => {
            assert_eq!(expiry, NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
            assert_eq!(months_remaining, 2);
        }
        other => panic!("expected ExpiringSoon, got {other:?}"),
    }
    assert!(!session.answers().flag("test_expired"));
}

#[test]
fn untouched_multi_choice_advances_and_still_reports() {
    let mut session = Session::new(today());
    drive_until(&mut session, "provincial_connection");

    // Advance with nothing selected; no "none" pick needed.
    session.confirm().unwrap();
    assert_ne!(session.current().unwrap().id(), "provincial_connection");

    drive(&mut session, YOUNG_PROFESSIONAL);
    let report = session.report().unwrap();
    assert_eq!(report.federal.score, 370);
}

#[test]
fn restart_supports_a_second_applicant() {
    let mut session = Session::new(today());
    drive(&mut session, YOUNG_PROFESSIONAL);
    assert!(session.is_complete());

    session.restart();
    assert!(session.answers().is_empty());
    assert_eq!(session.current().unwrap().id(), "age");

    drive(&mut session, YOUNG_PROFESSIONAL);
    assert_eq!(session.report().unwrap().federal.score, 370);
}

fn drive_until(session: &mut Session, stop_at: &str) {
    while session.current().is_some_and(|q| q.id() != stop_at) {
        let question = session.current().unwrap();
        let id = question.id();
        match YOUNG_PROFESSIONAL.iter().find(|(k, _)| *k == id) {
            Some((_, value)) => {
                session.submit(AnswerValue::from(*value)).unwrap();
            }
            None if question.kind() == QuestionKind::MultiChoice => {
                session.toggle("none").unwrap();
                session.confirm().unwrap();
            }
            None => session.confirm().unwrap(),
        }
    }
    assert_eq!(session.current().unwrap().id(), stop_at);
}
