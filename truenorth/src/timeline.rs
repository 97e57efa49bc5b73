//! Application timeline.
//!
//! A fixed ordered list of steps with duration ranges. The language-test
//! and ECA steps only appear when the profile has not already satisfied
//! them.

use serde::Serialize;
use truenorth_types::Answers;

use crate::{language, questions};

/// One step of the journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineStep {
    pub name: &'static str,
    pub duration: &'static str,
}

fn step(name: &'static str, duration: &'static str) -> TimelineStep {
    TimelineStep { name, duration }
}

/// Build the ordered timeline for the current profile.
pub fn timeline(answers: &Answers) -> Vec<TimelineStep> {
    let mut steps = Vec::new();

    let has_valid_test =
        language::lowest_benchmark(answers) > 0 && !answers.flag(questions::TEST_EXPIRED);
    if !has_valid_test {
        steps.push(step("Take a language test", "8-12 weeks"));
    }

    let needs_eca = answers.is("education_country", "foreign") && !answers.is("eca_status", "yes");
    if needs_eca {
        steps.push(step("Obtain an educational credential assessment", "4-8 weeks"));
    }

    steps.push(step("Create an Express Entry profile", "1-2 weeks"));
    steps.push(step("Await an invitation to apply", "2 weeks - 6 months"));
    steps.push(step("Gather documents and submit", "4-8 weeks"));
    steps.push(step("Application processing", "~6 months"));
    steps.push(step("Confirmation and landing", "4-8 weeks"));

    steps
}
