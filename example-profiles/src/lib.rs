//! Canned applicant profiles.
//!
//! Each profile answers every question its branch of the questionnaire
//! requires, so the full report can be assembled from it. Useful for demos
//! and for integration tests that need a realistic answer store without
//! driving a session.

use truenorth::Answers;

fn profile(entries: &[(&str, &str)], connections: &[&str]) -> Answers {
    let mut answers = Answers::new();
    for (id, value) in entries {
        answers.set(*id, *value);
    }
    for choice in connections {
        answers.toggle("provincial_connection", choice);
    }
    answers
}

/// A single software engineer in Canada on a post-graduation permit, with
/// one year of Canadian experience and strong IELTS results.
pub fn young_professional() -> Answers {
    profile(
        &[
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
        ],
        &["living", "study"],
    )
}

/// A married nurse abroad bringing a spouse with modest credentials.
pub fn accompanied_nurse() -> Answers {
    profile(
        &[
            ("age", "30-34"),
            ("marital_status", "married"),
            ("spouse_coming", "yes"),
            ("current_location", "outside"),
            ("target_province", "new_brunswick"),
            ("education_level", "bachelors"),
            ("education_country", "foreign"),
            ("eca_status", "yes"),
            ("field_of_study", "healthcare"),
            ("occupation", "31301"),
            ("foreign_experience", "4_5"),
            ("canadian_experience", "none"),
            ("trade_cert", "no"),
            ("english_test", "celpip"),
            ("test_date", "2024-11-01"),
            ("celpip_speaking", "9"),
            ("celpip_listening", "9"),
            ("celpip_reading", "9"),
            ("celpip_writing", "9"),
            ("french_test", "none"),
            ("job_offer", "no"),
            ("family_in_canada", "sibling"),
            ("settlement_funds", "exceed"),
            ("children_count", "1"),
            ("spouse_education", "twoyear"),
            ("spouse_language", "5_6"),
            ("spouse_experience", "none"),
            ("previous_refusal", "no"),
            ("medical_issues", "no"),
            ("criminal_history", "no"),
            ("primary_goal", "pr_fast"),
        ],
        &["family"],
    )
}

/// A Red Seal electrician with a Saskatchewan job offer.
pub fn certified_tradesperson() -> Answers {
    profile(
        &[
            ("age", "35-39"),
            ("marital_status", "single"),
            ("current_location", "outside"),
            ("target_province", "saskatchewan"),
            ("education_level", "twoyear"),
            ("education_country", "foreign"),
            ("eca_status", "in_progress"),
            ("field_of_study", "trades"),
            ("occupation", "72010"),
            ("foreign_experience", "6_plus"),
            ("canadian_experience", "none"),
            ("trade_cert", "red_seal"),
            ("english_test", "celpip"),
            ("test_date", "2025-02-20"),
            ("celpip_speaking", "7"),
            ("celpip_listening", "7"),
            ("celpip_reading", "7"),
            ("celpip_writing", "7"),
            ("french_test", "none"),
            ("job_offer", "yes"),
            ("job_lmia", "lmia_approved"),
            ("job_noc_teer", "2"),
            ("job_province", "saskatchewan"),
            ("family_in_canada", "none"),
            ("settlement_funds", "yes"),
            ("previous_refusal", "no"),
            ("medical_issues", "no"),
            ("criminal_history", "no"),
            ("primary_goal", "work_then_pr"),
        ],
        &["job_offer"],
    )
}

/// An early-stage explorer: no language test yet and a record that needs
/// legal attention. Exercises the warning checks.
pub fn unprepared_explorer() -> Answers {
    profile(
        &[
            ("age", "40-44"),
            ("marital_status", "divorced"),
            ("current_location", "outside"),
            ("target_province", "any"),
            ("education_level", "highschool"),
            ("education_country", "foreign"),
            ("eca_status", "no"),
            ("field_of_study", "other"),
            ("occupation", "64300"),
            ("foreign_experience", "6_plus"),
            ("canadian_experience", "none"),
            ("trade_cert", "no"),
            ("english_test", "none"),
            ("french_test", "none"),
            ("job_offer", "no"),
            ("family_in_canada", "none"),
            ("settlement_funds", "difficult"),
            ("previous_refusal", "once"),
            ("medical_issues", "not_sure"),
            ("criminal_history", "minor"),
            ("primary_goal", "not_sure"),
        ],
        &["none"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use truenorth::questions::questionnaire;

    #[test]
    fn every_profile_is_complete() {
        for (name, answers) in [
            ("young_professional", young_professional()),
            ("accompanied_nurse", accompanied_nurse()),
            ("certified_tradesperson", certified_tradesperson()),
            ("unprepared_explorer", unprepared_explorer()),
        ] {
            for question in questionnaire().questions() {
                if question.is_applicable(&answers) && !question.is_optional() {
                    assert!(
                        answers.contains(question.id()),
                        "{name} is missing `{}`",
                        question.id()
                    );
                }
            }
        }
    }
}
