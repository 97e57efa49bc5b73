//! The static question graph: every question, its options, and its
//! applicability condition, in presentation order.
//!
//! Built once per process; sessions borrow the shared definition.

use std::sync::OnceLock;

use truenorth_types::{ChoiceOption, Predicate, Question, QuestionKind, Questionnaire};

/// Id of the language-test date question. Setting it triggers the expiry
/// check in the session layer.
pub const TEST_DATE: &str = "test_date";

/// Id of the derived expired-test flag. Never user-entered; set by the
/// session layer as a side effect of date validation.
pub const TEST_EXPIRED: &str = "test_expired";

/// Number of wizard steps used for progress display.
pub const STEP_COUNT: u8 = 9;

/// Get the shared questionnaire definition.
pub fn questionnaire() -> &'static Questionnaire {
    static QUESTIONNAIRE: OnceLock<Questionnaire> = OnceLock::new();
    QUESTIONNAIRE.get_or_init(build)
}

fn single(
    id: &'static str,
    category: &'static str,
    step: u8,
    prompt: &'static str,
    options: Vec<ChoiceOption>,
) -> Question {
    Question::new(id, category, step, prompt, QuestionKind::SingleChoice).with_options(options)
}

fn opt(value: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption::new(value, label)
}

fn desc(value: &'static str, label: &'static str, description: &'static str) -> ChoiceOption {
    ChoiceOption::described(value, label, description)
}

fn build() -> Questionnaire {
    let mut questions = Vec::new();

    // Step 1: Personal Information
    questions.push(single(
        "age",
        "Personal Information",
        1,
        "What is your age?",
        vec![
            opt("18-24", "18-24 years old"),
            opt("25-29", "25-29 years old"),
            opt("30-34", "30-34 years old"),
            opt("35-39", "35-39 years old"),
            opt("40-44", "40-44 years old"),
            opt("45-49", "45-49 years old"),
            opt("50+", "50 years or older"),
        ],
    ));
    questions.push(single(
        "marital_status",
        "Personal Information",
        1,
        "What is your marital status?",
        vec![
            opt("single", "Single / Never Married"),
            opt("married", "Married or Common-law Partner"),
            opt("divorced", "Divorced / Separated / Widowed"),
        ],
    ));
    questions.push(
        single(
            "spouse_coming",
            "Personal Information",
            1,
            "Will your spouse/partner be included in your application?",
            vec![
                opt("yes", "Yes, applying together"),
                opt("no", "No, applying alone"),
            ],
        )
        .applicable_if(Predicate::equals("marital_status", "married")),
    );
    questions.push(single(
        "current_location",
        "Personal Information",
        1,
        "Where do you currently live?",
        vec![
            opt("in_canada", "Currently in Canada"),
            opt("outside", "Outside Canada"),
        ],
    ));

    // Step 2: Canadian Status
    questions.push(
        single(
            "canada_status",
            "Current Status",
            2,
            "What is your current immigration status in Canada?",
            vec![
                desc(
                    "work_employer",
                    "Work Permit (Employer-specific)",
                    "LMIA-based or employer-tied",
                ),
                desc(
                    "work_open",
                    "Work Permit (Open/PGWP)",
                    "Post-graduation or spouse open work permit",
                ),
                desc("study", "Study Permit", "Currently studying in Canada"),
                desc("visitor", "Visitor Status", "Tourist or visitor record"),
                desc("implied", "Implied Status", "Applied for extension, waiting"),
                desc("no_status", "No Valid Status", "Overstayed or no permit"),
            ],
        )
        .applicable_if(Predicate::equals("current_location", "in_canada")),
    );
    questions.push(
        single(
            "time_in_canada",
            "Current Status",
            2,
            "How long have you been living in Canada?",
            vec![
                opt("less_6", "Less than 6 months"),
                opt("6_12", "6-12 months"),
                opt("1_2", "1-2 years"),
                opt("2_3", "2-3 years"),
                opt("3_plus", "3+ years"),
            ],
        )
        .applicable_if(Predicate::equals("current_location", "in_canada")),
    );
    questions.push(single(
        "target_province",
        "Current Status",
        2,
        "Which province would you prefer to live in?",
        vec![
            opt("ontario", "Ontario"),
            opt("bc", "British Columbia"),
            opt("alberta", "Alberta"),
            opt("quebec", "Quebec"),
            opt("manitoba", "Manitoba"),
            opt("saskatchewan", "Saskatchewan"),
            opt("nova_scotia", "Nova Scotia"),
            opt("new_brunswick", "New Brunswick"),
            opt("pei", "Prince Edward Island"),
            opt("newfoundland", "Newfoundland & Labrador"),
            opt("any", "Open to any province"),
        ],
    ));

    // Step 3: Education
    questions.push(single(
        "education_level",
        "Education",
        3,
        "What is your highest completed education?",
        vec![
            opt("none", "Less than high school"),
            opt("highschool", "High school diploma"),
            opt("oneyear", "One-year post-secondary diploma/certificate"),
            opt("twoyear", "Two-year post-secondary diploma"),
            opt("bachelors", "Bachelor's degree (3+ years)"),
            opt("two_degrees", "Two or more degrees (one 3+ years)"),
            opt("masters", "Master's degree"),
            opt("phd", "Doctoral degree (PhD)"),
        ],
    ));
    questions.push(single(
        "education_country",
        "Education",
        3,
        "Where did you complete your highest education?",
        vec![opt("canada", "In Canada"), opt("foreign", "Outside Canada")],
    ));
    questions.push(
        single(
            "canadian_edu_level",
            "Education",
            3,
            "What Canadian credential do you have?",
            vec![
                opt("oneyear", "One-year certificate/diploma"),
                opt("twoyear", "Two-year diploma"),
                opt("threeyear", "Three-year bachelor's degree"),
                opt("masters", "Master's degree"),
                opt("phd", "PhD/Doctoral degree"),
            ],
        )
        .applicable_if(Predicate::equals("education_country", "canada")),
    );
    questions.push(
        single(
            "eca_status",
            "Education",
            3,
            "Do you have an Educational Credential Assessment (ECA)?",
            vec![
                desc("yes", "Yes, completed and valid", "Valid for 5 years from issue date"),
                desc("in_progress", "In progress", "Applied, waiting for results"),
                desc("no", "No, not started", "Takes 4-8 weeks to complete"),
            ],
        )
        .applicable_if(Predicate::equals("education_country", "foreign"))
        .with_help("ECA is required for Express Entry to verify foreign credentials"),
    );
    questions.push(single(
        "field_of_study",
        "Education",
        3,
        "What field did you study?",
        vec![
            opt("tech", "Computer Science / IT / Software"),
            opt("engineering", "Engineering (Civil, Mechanical, Electrical)"),
            opt("healthcare", "Healthcare / Nursing / Medicine"),
            opt("trades", "Skilled Trades (Electrical, Plumbing, Welding)"),
            opt("business", "Business / Finance / Accounting"),
            opt("science", "Science (Biology, Chemistry, Physics, Math)"),
            opt("education", "Education / Teaching"),
            opt("agriculture", "Agriculture / Agri-food"),
            opt("transport", "Transport / Logistics"),
            opt("hospitality", "Hospitality / Tourism"),
            opt("arts", "Arts / Design / Media"),
            opt("social", "Social Sciences / Humanities"),
            opt("other", "Other"),
        ],
    ));

    // Step 4: Work Experience & Occupation
    questions.push(Question::new(
        "occupation",
        "Work Experience",
        4,
        "What is your current or most recent occupation?",
        QuestionKind::OccupationSearch,
    ));
    questions.push(
        single(
            "foreign_experience",
            "Work Experience",
            4,
            "How many years of skilled work experience do you have OUTSIDE Canada?",
            vec![
                opt("none", "None or less than 1 year"),
                opt("1", "1 year"),
                opt("2", "2 years"),
                opt("3", "3 years"),
                opt("4_5", "4-5 years"),
                opt("6_plus", "6+ years"),
            ],
        )
        .with_help("Skilled work = NOC TEER 0, 1, 2, or 3 occupations only"),
    );
    questions.push(
        single(
            "canadian_experience",
            "Work Experience",
            4,
            "How many years of skilled work experience do you have IN Canada?",
            vec![
                opt("none", "None"),
                opt("1", "1 year"),
                opt("2", "2 years"),
                opt("3", "3 years"),
                opt("4", "4 years"),
                opt("5_plus", "5+ years"),
            ],
        )
        .with_help("Must be legal work with valid work permit"),
    );
    questions.push(single(
        "trade_cert",
        "Work Experience",
        4,
        "Do you have a Canadian trade certificate?",
        vec![
            desc("red_seal", "Yes, Red Seal certified", "Nationally recognized trade qualification"),
            desc("provincial", "Yes, provincial certification", "Province-specific trade license"),
            opt("no", "No trade certification"),
        ],
    ));

    // Step 5: Language Proficiency
    questions.push(single(
        "english_test",
        "Language Proficiency",
        5,
        "Have you taken an English language test?",
        vec![
            opt("ielts", "IELTS General Training"),
            opt("celpip", "CELPIP General"),
            opt("pte", "PTE Core"),
            opt("none", "Not yet / No valid test"),
        ],
    ));
    questions.push(
        Question::new(
            TEST_DATE,
            "Language Proficiency",
            5,
            "When did you take the test?",
            QuestionKind::Date,
        )
        .applicable_if(Predicate::one_of("english_test", &["ielts", "celpip", "pte"]))
        .with_help("Test results are valid for 2 years from the test date"),
    );
    push_ielts(&mut questions);
    push_celpip(&mut questions);
    push_pte(&mut questions);
    questions.push(single(
        "french_test",
        "Language Proficiency",
        5,
        "Have you taken a French language test?",
        vec![
            opt("tef", "TEF Canada"),
            opt("tcf", "TCF Canada"),
            opt("none", "No French test / Not applicable"),
        ],
    ));
    questions.push(
        single(
            "french_level",
            "Language Proficiency",
            5,
            "What is your French proficiency level (NCLC)?",
            vec![
                desc("nclc7_plus", "NCLC 7+ (Strong)", "All abilities NCLC 7 or higher"),
                desc("nclc5_6", "NCLC 5-6 (Moderate)", "Basic to intermediate French"),
                desc("below5", "Below NCLC 5", "Beginner French"),
            ],
        )
        .applicable_if(Predicate::not_equals("french_test", "none"))
        .with_help("NCLC 7+ qualifies you for French category draws with lower cutoffs"),
    );

    // Step 6: Job Offer & Provincial Connections
    questions.push(single(
        "job_offer",
        "Job Offer",
        6,
        "Do you have a valid job offer from a Canadian employer?",
        vec![
            opt("yes", "Yes, I have a job offer"),
            opt("in_progress", "In discussions / interviewing"),
            opt("no", "No job offer"),
        ],
    ));
    questions.push(
        single(
            "job_lmia",
            "Job Offer",
            6,
            "Is the job offer LMIA-supported or LMIA-exempt?",
            vec![
                desc("lmia_approved", "LMIA-approved", "Employer has positive LMIA"),
                desc("lmia_exempt", "LMIA-exempt", "CUSMA, intra-company, etc."),
                opt("not_sure", "Not sure / In progress"),
                desc("no_lmia", "No LMIA", "Job offer without LMIA"),
            ],
        )
        .applicable_if(Predicate::equals("job_offer", "yes")),
    );
    questions.push(
        single(
            "job_noc_teer",
            "Job Offer",
            6,
            "What NOC TEER level is the job offer?",
            vec![
                desc("0", "TEER 0 - Senior Management", "+200 CRS points"),
                desc("1", "TEER 1 - Professional", "+50 CRS points"),
                desc("2", "TEER 2 - Technical", "+50 CRS points"),
                desc("3", "TEER 3 - Skilled Trades", "+50 CRS points"),
                desc("4_5", "TEER 4 or 5", "No CRS points for job offer"),
                opt("not_sure", "Not sure"),
            ],
        )
        .applicable_if(Predicate::equals("job_offer", "yes"))
        .with_help("Not sure? Use the occupation finder to look up the job's TEER level"),
    );
    questions.push(
        single(
            "job_province",
            "Job Offer",
            6,
            "Which province is the job offer in?",
            vec![
                opt("ontario", "Ontario"),
                opt("bc", "British Columbia"),
                opt("alberta", "Alberta"),
                opt("manitoba", "Manitoba"),
                opt("saskatchewan", "Saskatchewan"),
                opt("nova_scotia", "Nova Scotia"),
                opt("new_brunswick", "New Brunswick"),
                opt("pei", "Prince Edward Island"),
                opt("newfoundland", "Newfoundland & Labrador"),
                opt("other", "Other territory"),
            ],
        )
        .applicable_if(Predicate::equals("job_offer", "yes")),
    );
    questions.push(
        Question::new(
            "provincial_connection",
            "Job Offer",
            6,
            "Do you have any connections to your preferred province? (Select all that apply)",
            QuestionKind::MultiChoice,
        )
        .with_options(vec![
            opt("work", "Previous work experience in province"),
            opt("study", "Previous education/study in province"),
            opt("family", "Family members (PR/citizen) in province"),
            opt("living", "Currently living in province"),
            opt("job_offer", "Job offer from employer in province"),
            opt("none", "No provincial connections"),
        ])
        .with_help("Multiple connections strengthen your PNP application"),
    );

    // Step 7: Family & Financial
    questions.push(single(
        "family_in_canada",
        "Family & Financial",
        7,
        "Do you have close family members who are Canadian citizens or PRs?",
        vec![
            desc("sibling", "Sibling (brother/sister)", "+15 CRS points"),
            opt("parent", "Parent or grandparent"),
            opt("child", "Adult child (18+)"),
            opt("extended", "Aunt / Uncle / Cousin"),
            opt("none", "No family in Canada"),
        ],
    ));
    questions.push(
        single(
            "settlement_funds",
            "Family & Financial",
            7,
            "Do you have proof of settlement funds?",
            vec![
                opt("yes", "Yes, I meet the requirement"),
                opt("exceed", "Yes, I exceed the requirement"),
                opt("can_arrange", "No, but I can arrange it"),
                opt("difficult", "No, it will be difficult"),
            ],
        )
        .with_help("Single: ~$14,690 CAD | Family of 4: ~$27,315 CAD"),
    );
    questions.push(
        Question::new(
            "children_count",
            "Family & Financial",
            7,
            "How many dependent children will accompany you?",
            QuestionKind::Numeric,
        )
        .optional(),
    );

    // Step 8: Spouse/Partner Details
    questions.push(
        single(
            "spouse_education",
            "Spouse Details",
            8,
            "What is your spouse's highest education level?",
            vec![
                opt("highschool", "High school or less"),
                opt("oneyear", "One-year diploma"),
                opt("twoyear", "Two-year diploma"),
                opt("bachelors", "Bachelor's degree"),
                opt("masters_plus", "Master's or PhD"),
            ],
        )
        .applicable_if(Predicate::equals("spouse_coming", "yes")),
    );
    questions.push(
        single(
            "spouse_language",
            "Spouse Details",
            8,
            "What is your spouse's English CLB level?",
            vec![
                opt("none", "No test / Below CLB 4"),
                opt("4", "CLB 4"),
                opt("5_6", "CLB 5-6"),
                opt("7_8", "CLB 7-8"),
                opt("9_plus", "CLB 9+"),
            ],
        )
        .applicable_if(Predicate::equals("spouse_coming", "yes")),
    );
    questions.push(
        single(
            "spouse_experience",
            "Spouse Details",
            8,
            "Does your spouse have Canadian work experience?",
            vec![
                opt("none", "None"),
                opt("1", "1 year"),
                opt("2_plus", "2+ years"),
            ],
        )
        .applicable_if(Predicate::equals("spouse_coming", "yes")),
    );

    // Step 9: Previous Applications & Admissibility
    questions.push(single(
        "previous_refusal",
        "Admissibility",
        9,
        "Have you ever been refused a Canadian visa or permit?",
        vec![
            opt("no", "No, never refused"),
            opt("once", "Yes, once"),
            opt("multiple", "Yes, multiple times"),
        ],
    ));
    questions.push(
        single(
            "medical_issues",
            "Admissibility",
            9,
            "Do you have any medical conditions that could affect admissibility?",
            vec![
                opt("no", "No medical concerns"),
                opt("manageable", "Yes, but manageable"),
                opt("significant", "Yes, significant condition"),
                opt("not_sure", "Not sure"),
            ],
        )
        .with_help("Conditions requiring excessive healthcare costs may affect eligibility"),
    );
    questions.push(single(
        "criminal_history",
        "Admissibility",
        9,
        "Do you have any criminal history (including DUI)?",
        vec![
            opt("no", "No criminal history"),
            opt("minor", "Yes, minor offense"),
            opt("serious", "Yes, serious offense"),
        ],
    ));
    questions.push(single(
        "primary_goal",
        "Admissibility",
        9,
        "What is your primary immigration goal?",
        vec![
            opt("pr_fast", "Permanent Residence ASAP"),
            opt("work_then_pr", "Work first, then PR"),
            opt("study_then_pr", "Study first, then work & PR"),
            opt("not_sure", "Not sure - need guidance"),
        ],
    ));
    questions.push(
        Question::new(
            "contact_email",
            "Admissibility",
            9,
            "Where should we send your results? (optional)",
            QuestionKind::Email,
        )
        .optional(),
    );

    Questionnaire::new(questions)
}

fn push_ielts(questions: &mut Vec<Question>) {
    let ielts = Predicate::equals("english_test", "ielts");
    questions.push(
        single(
            "ielts_speaking",
            "Language Proficiency",
            5,
            "What is your IELTS Speaking band score?",
            vec![
                desc("4.0", "4.0", "CLB 4"),
                desc("5.0", "5.0", "CLB 5"),
                desc("5.5", "5.5", "CLB 6"),
                desc("6.0", "6.0", "CLB 7"),
                desc("6.5", "6.5", "CLB 8"),
                desc("7.0", "7.0", "CLB 9"),
                desc("7.5", "7.5", "CLB 9"),
                desc("8.0+", "8.0 or higher", "CLB 10+"),
            ],
        )
        .applicable_if(ielts.clone()),
    );
    questions.push(
        single(
            "ielts_listening",
            "Language Proficiency",
            5,
            "What is your IELTS Listening band score?",
            vec![
                desc("4.5", "4.5", "CLB 4"),
                desc("5.0", "5.0", "CLB 5"),
                desc("5.5", "5.5", "CLB 6"),
                desc("6.0", "6.0", "CLB 7"),
                desc("7.0", "7.0", "CLB 8"),
                desc("7.5", "7.5", "CLB 9"),
                desc("8.0", "8.0", "CLB 9"),
                desc("8.5+", "8.5 or higher", "CLB 10+"),
            ],
        )
        .applicable_if(ielts.clone()),
    );
    questions.push(
        single(
            "ielts_reading",
            "Language Proficiency",
            5,
            "What is your IELTS Reading band score?",
            vec![
                desc("3.5", "3.5", "CLB 4"),
                desc("4.0", "4.0", "CLB 5"),
                desc("5.0", "5.0", "CLB 6"),
                desc("6.0", "6.0", "CLB 7"),
                desc("6.5", "6.5", "CLB 8"),
                desc("7.0", "7.0", "CLB 9"),
                desc("8.0+", "8.0 or higher", "CLB 10+"),
            ],
        )
        .applicable_if(ielts.clone()),
    );
    questions.push(
        single(
            "ielts_writing",
            "Language Proficiency",
            5,
            "What is your IELTS Writing band score?",
            vec![
                desc("4.0", "4.0", "CLB 4"),
                desc("5.0", "5.0", "CLB 5"),
                desc("5.5", "5.5", "CLB 6"),
                desc("6.0", "6.0", "CLB 7"),
                desc("6.5", "6.5", "CLB 8"),
                desc("7.0", "7.0", "CLB 9"),
                desc("7.5+", "7.5 or higher", "CLB 10+"),
            ],
        )
        .applicable_if(ielts),
    );
}

fn push_celpip(questions: &mut Vec<Question>) {
    let celpip = Predicate::equals("english_test", "celpip");
    let levels = || {
        vec![
            desc("4", "Level 4", "CLB 4"),
            desc("5", "Level 5", "CLB 5"),
            desc("6", "Level 6", "CLB 6"),
            desc("7", "Level 7", "CLB 7"),
            desc("8", "Level 8", "CLB 8"),
            desc("9", "Level 9", "CLB 9"),
            desc("10+", "Level 10-12", "CLB 10+"),
        ]
    };
    for (id, prompt) in [
        ("celpip_speaking", "What is your CELPIP Speaking score?"),
        ("celpip_listening", "What is your CELPIP Listening score?"),
        ("celpip_reading", "What is your CELPIP Reading score?"),
        ("celpip_writing", "What is your CELPIP Writing score?"),
    ] {
        questions.push(
            single(id, "Language Proficiency", 5, prompt, levels())
                .applicable_if(celpip.clone()),
        );
    }
}

fn push_pte(questions: &mut Vec<Question>) {
    let pte = Predicate::equals("english_test", "pte");
    questions.push(
        single(
            "pte_speaking",
            "Language Proficiency",
            5,
            "What is your PTE Core Speaking score?",
            vec![
                desc("42-50", "42-50", "CLB 4"),
                desc("51-58", "51-58", "CLB 5"),
                desc("59-67", "59-67", "CLB 6"),
                desc("68-75", "68-75", "CLB 7"),
                desc("76-83", "76-83", "CLB 8"),
                desc("84-88", "84-88", "CLB 9"),
                desc("89+", "89-90", "CLB 10+"),
            ],
        )
        .applicable_if(pte.clone()),
    );
    questions.push(
        single(
            "pte_listening",
            "Language Proficiency",
            5,
            "What is your PTE Core Listening score?",
            vec![
                desc("28-32", "28-32", "CLB 4"),
                desc("33-38", "33-38", "CLB 5"),
                desc("39-49", "39-49", "CLB 6"),
                desc("50-59", "50-59", "CLB 7"),
                desc("60-70", "60-70", "CLB 8"),
                desc("71-81", "71-81", "CLB 9"),
                desc("82+", "82-90", "CLB 10+"),
            ],
        )
        .applicable_if(pte.clone()),
    );
    questions.push(
        single(
            "pte_reading",
            "Language Proficiency",
            5,
            "What is your PTE Core Reading score?",
            vec![
                desc("33-40", "33-40", "CLB 4"),
                desc("41-50", "41-50", "CLB 5"),
                desc("51-59", "51-59", "CLB 6"),
                desc("60-68", "60-68", "CLB 7"),
                desc("69-77", "69-77", "CLB 8"),
                desc("78-87", "78-87", "CLB 9"),
                desc("88+", "88-90", "CLB 10+"),
            ],
        )
        .applicable_if(pte.clone()),
    );
    questions.push(
        single(
            "pte_writing",
            "Language Proficiency",
            5,
            "What is your PTE Core Writing score?",
            vec![
                desc("41-50", "41-50", "CLB 4"),
                desc("51-59", "51-59", "CLB 5"),
                desc("60-68", "60-68", "CLB 6"),
                desc("69-78", "69-78", "CLB 7"),
                desc("79-87", "79-87", "CLB 8"),
                desc("88-89", "88-89", "CLB 9"),
                desc("90", "90", "CLB 10"),
            ],
        )
        .applicable_if(pte),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use truenorth_types::Answers;

    #[test]
    fn ids_are_unique() {
        let questionnaire = questionnaire();
        let mut seen = std::collections::HashSet::new();
        for question in questionnaire.questions() {
            assert!(seen.insert(question.id()), "duplicate id: {}", question.id());
        }
    }

    #[test]
    fn steps_are_ordered() {
        let questionnaire = questionnaire();
        let steps: Vec<u8> = questionnaire.questions().iter().map(|q| q.step()).collect();
        let mut sorted = steps.clone();
        sorted.sort_unstable();
        assert_eq!(steps, sorted);
        assert_eq!(*steps.last().unwrap(), STEP_COUNT);
    }

    #[test]
    fn spouse_questions_gated_on_spouse_coming() {
        let questionnaire = questionnaire();
        let mut answers = Answers::new();
        answers.set("marital_status", "single");

        let index = questionnaire.position_of("spouse_education").unwrap();
        assert!(!questionnaire.questions()[index].is_applicable(&answers));

        answers.set("marital_status", "married");
        answers.set("spouse_coming", "yes");
        assert!(questionnaire.questions()[index].is_applicable(&answers));
    }

    #[test]
    fn test_date_only_applicable_with_a_test() {
        let questionnaire = questionnaire();
        let index = questionnaire.position_of(TEST_DATE).unwrap();
        let question = &questionnaire.questions()[index];

        let mut answers = Answers::new();
        answers.set("english_test", "none");
        assert!(!question.is_applicable(&answers));

        answers.set("english_test", "pte");
        assert!(question.is_applicable(&answers));
    }
}
