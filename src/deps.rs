//! Step 1: install runtime and development dependencies.

use std::path::Path;

use crate::process::{self, CommandOutcome};
use crate::ui;

/// Run the package manager's install command in `root`.
///
/// A failed outcome aborts the whole bootstrap; the caller decides that.
pub fn install(command: &[String], root: &Path) -> CommandOutcome {
    let description = "Installing all dependencies (including dev tools)";
    ui::action(description);

    let outcome = process::run(command, root);
    if outcome.succeeded {
        ui::success("Dependencies installed successfully");
        println!();
    } else {
        ui::failure(&format!("Failed: {description}"));
        ui::detail(&outcome.to_string());
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_package_manager_fails() {
        let tmp = TempDir::new().unwrap();
        let outcome = install(&["no-such-package-manager-xyz".to_string()], tmp.path());
        assert!(!outcome.succeeded);
        assert!(outcome.is_not_found());
    }

    #[cfg(unix)]
    #[test]
    fn test_install_runs_in_root() {
        let tmp = TempDir::new().unwrap();
        let cmd = vec!["sh".to_string(), "-c".to_string(), "touch uv.lock".to_string()];
        assert!(install(&cmd, tmp.path()).succeeded);
        assert!(tmp.path().join("uv.lock").exists());
    }
}
