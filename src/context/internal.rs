//! Internal implementation for the context module
//!
//! Pure string work: no I/O happens here.

pub const ROLE: &str = "{{ROLE}}";
pub const PROJECT_GOAL: &str = "{{PROJECT_GOAL}}";
pub const CONSTRAINTS: &str = "{{CONSTRAINTS}}";

const NOT_SPECIFIED: &str = "Not specified";
const NO_CONSTRAINTS: &str = "None";

/// Trimmed answers to the three context questions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub role: String,
    pub project_goal: String,
    pub constraints: String,
}

impl Answers {
    fn role_or_default(&self) -> &str {
        or_fallback(&self.role, NOT_SPECIFIED)
    }

    fn goal_or_default(&self) -> &str {
        or_fallback(&self.project_goal, NOT_SPECIFIED)
    }

    fn constraints_or_default(&self) -> &str {
        or_fallback(&self.constraints, NO_CONSTRAINTS)
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// The role placeholder is the sentinel for an unconfigured document
pub(super) fn needs_configuration(content: &str) -> bool {
    content.contains(ROLE)
}

/// Replace every occurrence of each placeholder, in role, goal,
/// constraints order.
pub fn render(content: &str, answers: &Answers) -> String {
    content
        .replace(ROLE, answers.role_or_default())
        .replace(PROJECT_GOAL, answers.goal_or_default())
        .replace(CONSTRAINTS, answers.constraints_or_default())
}
