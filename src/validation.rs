//! Step 4: run the validation suite with output streaming live.
//!
//! Only an exit status of exactly zero counts as a pass. A runner that
//! cannot be found or started fails closed.

use std::path::Path;

use crate::process::{self, CommandOutcome};
use crate::ui;

pub fn run(command: &[String], root: &Path) -> CommandOutcome {
    println!("🔥 Running Smoke Tests...");
    println!();

    let outcome = process::run(command, root);
    println!();
    if outcome.succeeded {
        ui::success("Tests passed. Environment is healthy.");
        println!();
    } else {
        ui::failure("Smoke tests failed! Keeping files for debugging.");
        ui::detail(&outcome.to_string());
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_runner_fails_closed() {
        let tmp = TempDir::new().unwrap();
        let outcome = run(&["no-such-test-runner-xyz".to_string()], tmp.path());
        assert!(!outcome.succeeded);
    }

    #[cfg(unix)]
    #[test]
    fn test_only_zero_passes() {
        let tmp = TempDir::new().unwrap();
        let sh = |script: &str| vec!["sh".to_string(), "-c".to_string(), script.to_string()];

        assert!(run(&sh("exit 0"), tmp.path()).succeeded);
        assert!(!run(&sh("exit 1"), tmp.path()).succeeded);
        assert_eq!(run(&sh("exit 5"), tmp.path()).exit_code, Some(5));
    }
}
