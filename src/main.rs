use anyhow::Result;
use clap::Parser;

use bootstrap::context::{DefaultsPrompter, Prompter, StdinPrompter};
use bootstrap::runner::{self, RunOptions, EXIT_FAILURE};
use bootstrap::{layout, ui, Layout};

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Bootstrap a freshly cloned project template", long_about = None)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long)]
    root: Option<String>,

    /// Answer every prompt with its default
    #[arg(long)]
    non_interactive: bool,

    /// Keep smoke test artifacts and scripts after a passing run
    #[arg(long)]
    keep_artifacts: bool,

    /// Show what would run without changing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    let code = match execute(cli) {
        Ok(code) => code,
        Err(e) => {
            ui::failure("Setup could not start");
            ui::detail(&format!("{e:#}"));
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}

fn execute(cli: Cli) -> Result<i32> {
    let root = layout::project_root(cli.root.as_deref())?;

    // Everything under scripts/ is read here, before cleanup can remove it
    let (layout, config) = Layout::resolve(&root)?;

    if cli.dry_run {
        runner::describe_plan(&layout, &config);
        return Ok(0);
    }

    let non_interactive =
        cli.non_interactive || std::env::var("BOOTSTRAP_NONINTERACTIVE").is_ok();
    let mut prompter: Box<dyn Prompter> = if non_interactive {
        Box::new(DefaultsPrompter)
    } else {
        Box::new(StdinPrompter)
    };

    let options = RunOptions {
        keep_artifacts: cli.keep_artifacts,
    };
    Ok(runner::run(&layout, &config, prompter.as_mut(), options))
}
