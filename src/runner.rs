//! Top-level orchestration of the bootstrap steps.
//!
//! Strictly linear: install, env file, context, validation, cleanup.
//! Install failure stops before any file is touched; validation failure
//! stops before anything is deleted. Every command runs at most once.

use anyhow::Result;

use crate::cleanup::{self, CleanupReport};
use crate::config::BootstrapConfig;
use crate::context::{self, Prompter};
use crate::layout::Layout;
use crate::process::{self, display_command};
use crate::{deps, env_file, ui, validation};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Per-run switches from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Skip the cleanup step even when validation passes
    pub keep_artifacts: bool,
}

/// Why a run stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Install,
    Validation,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(Option<CleanupReport>),
    Failed(Stage),
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Completed(_) => EXIT_SUCCESS,
            RunOutcome::Failed(_) => EXIT_FAILURE,
        }
    }
}

/// Run every step and map the result to a process exit code.
///
/// File errors are printed with their context chain and count as failure.
pub fn run(
    layout: &Layout,
    config: &BootstrapConfig,
    prompter: &mut dyn Prompter,
    options: RunOptions,
) -> i32 {
    match execute(layout, config, prompter, options) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            ui::failure("Setup aborted");
            ui::detail(&format!("{e:#}"));
            EXIT_FAILURE
        }
    }
}

/// Run every step, returning how the run ended
pub fn execute(
    layout: &Layout,
    config: &BootstrapConfig,
    prompter: &mut dyn Prompter,
    options: RunOptions,
) -> Result<RunOutcome> {
    ui::banner(&config.context.title);

    if !deps::install(&config.commands.install, &layout.root).succeeded {
        println!();
        println!("💥 Setup failed during dependency installation");
        return Ok(RunOutcome::Failed(Stage::Install));
    }

    env_file::ensure(layout)?;
    context::configure(layout, prompter)?;

    if !validation::run(&config.commands.validate, &layout.root).succeeded {
        return Ok(RunOutcome::Failed(Stage::Validation));
    }

    if options.keep_artifacts {
        ui::info("Keeping smoke test artifacts and scripts (--keep-artifacts)");
        println!();
        ui::finished("Project is ready!");
        return Ok(RunOutcome::Completed(None));
    }

    let report = cleanup::run(layout)?;

    ui::finished("Project is ready! Don't forget to commit the cleanup deletions.");
    Ok(RunOutcome::Completed(Some(report)))
}

/// Print what a run would do without running anything
pub fn describe_plan(layout: &Layout, config: &BootstrapConfig) {
    ui::banner(&config.context.title);
    println!("📋 Plan (dry run - no changes will be made)");
    println!();

    let root = &layout.root;
    let command_line = |argv: &[String]| {
        let found = argv
            .first()
            .and_then(|program| process::resolve(program, root))
            .map(|path| format!("found at {}", path.display()))
            .unwrap_or_else(|| "not found".to_string());
        format!("{} ({found})", display_command(argv))
    };
    let state = |path: &std::path::Path| {
        let marker = if path.exists() { "exists" } else { "missing" };
        format!("{} [{marker}]", layout.relative(path).display())
    };

    println!("  Root:        {}", root.display());
    println!("  1. Install:  {}", command_line(&config.commands.install));
    println!(
        "  2. Env file: {} from {}",
        state(&layout.env_file),
        state(&layout.env_template)
    );
    println!("  3. Context:  {}", state(&layout.context_doc));
    println!("  4. Validate: {}", command_line(&config.commands.validate));
    println!("  5. Cleanup:");
    for path in &layout.smoke_artifacts {
        ui::item(&format!("   {}", state(path)));
    }
    ui::item(&format!("   {}", state(&layout.scripts_dir)));
    println!();
}
