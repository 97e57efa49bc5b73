//! Per-question input validation.
//!
//! Validation runs before an answer is stored: a failure leaves the store
//! untouched and the cursor in place, and the message is meant for the
//! user, not a log.

use chrono::NaiveDate;
use truenorth::{AnswerValue, NONE_CHOICE, Question, QuestionKind, noc, questions};

/// Check a candidate value against a question. `today` anchors date checks.
pub fn validate(
    question: &Question,
    value: &AnswerValue,
    today: NaiveDate,
) -> Result<(), String> {
    match (question.kind(), value) {
        (QuestionKind::SingleChoice, AnswerValue::Text(choice)) => {
            if question.has_option(choice) {
                Ok(())
            } else {
                Err("Choose one of the listed options".into())
            }
        }
        // An empty selection list is a valid answer: multi-choice questions
        // never require a pick.
        (QuestionKind::MultiChoice, AnswerValue::Selections(choices)) => {
            if let Some(unknown) = choices.iter().find(|c| !question.has_option(c)) {
                return Err(format!("`{unknown}` is not one of the listed options"));
            }
            if choices.len() > 1 && choices.iter().any(|c| c == NONE_CHOICE) {
                return Err("\"None\" cannot be combined with other selections".into());
            }
            Ok(())
        }
        (QuestionKind::OccupationSearch, AnswerValue::Text(code)) => {
            if noc::by_code(code).is_some() {
                Ok(())
            } else {
                Err("Pick an occupation from the search results".into())
            }
        }
        (QuestionKind::Date, AnswerValue::Text(raw)) => {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| "Enter the date as YYYY-MM-DD".to_string())?;
            if question.id() == questions::TEST_DATE && date > today {
                return Err("The test date cannot be in the future".into());
            }
            Ok(())
        }
        (QuestionKind::Numeric, AnswerValue::Text(raw)) => {
            raw.trim()
                .parse::<u32>()
                .map(|_| ())
                .map_err(|_| "Enter a whole number (0 or more)".into())
        }
        (QuestionKind::Email, AnswerValue::Text(email)) => {
            let domain_ok = email
                .split('@')
                .nth(1)
                .is_some_and(|domain| domain.contains('.'));
            if email.matches('@').count() == 1 && domain_ok {
                Ok(())
            } else {
                Err("Enter a valid email (e.g., you@example.com)".into())
            }
        }
        _ => Err("That answer does not fit this question".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use truenorth::questions::questionnaire;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn question(id: &str) -> &'static Question {
        questionnaire().by_id(id).unwrap()
    }

    #[test]
    fn single_choice_rejects_unlisted_values() {
        let age = question("age");
        assert!(validate(age, &AnswerValue::from("25-29"), today()).is_ok());
        assert!(validate(age, &AnswerValue::from("26"), today()).is_err());
    }

    #[test]
    fn multi_choice_rejects_none_mixed_with_others() {
        let connections = question("provincial_connection");
        let mixed = AnswerValue::from(&["work", "none"][..]);
        assert!(validate(connections, &mixed, today()).is_err());

        let alone = AnswerValue::from(&["none"][..]);
        assert!(validate(connections, &alone, today()).is_ok());
    }

    #[test]
    fn multi_choice_accepts_an_empty_selection() {
        let connections = question("provincial_connection");
        let empty = AnswerValue::from(Vec::<String>::new());
        assert!(validate(connections, &empty, today()).is_ok());
    }

    #[test]
    fn occupation_must_come_from_the_directory() {
        let occupation = question("occupation");
        assert!(validate(occupation, &AnswerValue::from("21231"), today()).is_ok());
        assert!(validate(occupation, &AnswerValue::from("99999"), today()).is_err());
    }

    #[test]
    fn test_date_must_parse_and_not_be_future() {
        let test_date = question(questions::TEST_DATE);
        assert!(validate(test_date, &AnswerValue::from("2024-05-01"), today()).is_ok());
        assert!(validate(test_date, &AnswerValue::from("01/05/2024"), today()).is_err());
        assert!(validate(test_date, &AnswerValue::from("2025-07-01"), today()).is_err());
    }

    #[test]
    fn numeric_rejects_negatives_and_words() {
        let children = question("children_count");
        assert!(validate(children, &AnswerValue::from("2"), today()).is_ok());
        assert!(validate(children, &AnswerValue::from("0"), today()).is_ok());
        assert!(validate(children, &AnswerValue::from("-1"), today()).is_err());
        assert!(validate(children, &AnswerValue::from("two"), today()).is_err());
    }

    #[test]
    fn email_needs_one_at_sign_and_a_dotted_domain() {
        let email = question("contact_email");
        assert!(validate(email, &AnswerValue::from("a@b.com"), today()).is_ok());
        assert!(validate(email, &AnswerValue::from("a@b"), today()).is_err());
        assert!(validate(email, &AnswerValue::from("a.b.com"), today()).is_err());
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let age = question("age");
        assert!(validate(age, &AnswerValue::from(true), today()).is_err());
    }
}
