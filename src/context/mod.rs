//! Step 3: fill the context document with project metadata.
//!
//! This module follows the dependable-rust pattern:
//! - Public interface (this file): the step, the prompt seam, the answers
//! - Internal implementation: placeholder substitution in internal.rs
//!
//! The document is configured at most once. Presence of the `{{ROLE}}`
//! placeholder is the only signal that it still needs filling; after a
//! run replaces it the document is left alone forever.
//!
//! # Example
//!
//! ```no_run
//! use bootstrap::context::{self, ScriptedPrompter};
//! use bootstrap::Layout;
//!
//! let layout = Layout::with_defaults(".")?;
//! let mut prompter = ScriptedPrompter::new(["Lead Dev", "ETL pipeline", ""]);
//! context::configure(&layout, &mut prompter)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::{Context as _, Result};
use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, Write};

use crate::layout::Layout;
use crate::ui;

pub use internal::{render, Answers, CONSTRAINTS, PROJECT_GOAL, ROLE};

/// Questions asked, in order
pub const ROLE_QUESTION: &str =
    "What is your Role? (e.g., Junior Data Engineer, Lead Dev, Analyst)";
pub const GOAL_QUESTION: &str =
    "What is the Core Project Goal? (e.g., ETL pipeline for camera trap data)";
pub const CONSTRAINTS_QUESTION: &str =
    "Are there specific constraints? (e.g., Raspberry Pi only, or press Enter to skip)";

/// What happened to the context document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextStatus {
    Missing,
    AlreadyConfigured,
    Configured,
}

/// Source of free-text answers. One line per question.
pub trait Prompter {
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Prompts on stdout and reads one line from stdin.
///
/// End of input counts as an empty answer.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        print!("  {question}\n  → ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Answers every question with empty input, so every fallback applies
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        println!("  {question}\n  → (default)");
        Ok(String::new())
    }
}

/// Replays canned answers; runs out into empty answers.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// Ask the three questions and collect trimmed answers
pub fn collect_answers(prompter: &mut dyn Prompter) -> Result<Answers> {
    let role = prompter.ask(ROLE_QUESTION)?.trim().to_string();
    let project_goal = prompter.ask(GOAL_QUESTION)?.trim().to_string();
    let constraints = prompter.ask(CONSTRAINTS_QUESTION)?.trim().to_string();
    Ok(Answers {
        role,
        project_goal,
        constraints,
    })
}

/// Fill the context document if it still carries the role placeholder.
///
/// The document is read once, substituted in memory, and written back in
/// one write.
pub fn configure(layout: &Layout, prompter: &mut dyn Prompter) -> Result<ContextStatus> {
    let doc_name = layout.relative(&layout.context_doc).display().to_string();

    if !layout.context_doc.exists() {
        ui::warn(&format!("{doc_name} not found, skipping context setup"));
        println!();
        return Ok(ContextStatus::Missing);
    }

    let content = fs::read_to_string(&layout.context_doc).with_context(|| {
        format!(
            "Failed to read context document: {}",
            layout.context_doc.display()
        )
    })?;

    if !internal::needs_configuration(&content) {
        ui::info(&format!("{doc_name} already configured, skipping..."));
        println!();
        return Ok(ContextStatus::AlreadyConfigured);
    }

    println!("📝 Let's configure your AI context ({doc_name}):");
    println!();

    let answers = collect_answers(prompter)?;
    let rendered = render(&content, &answers);

    fs::write(&layout.context_doc, rendered).with_context(|| {
        format!(
            "Failed to write context document: {}",
            layout.context_doc.display()
        )
    })?;

    println!();
    ui::success(&format!("{doc_name} updated with your project context"));
    println!();
    Ok(ContextStatus::Configured)
}
