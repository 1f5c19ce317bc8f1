//! External command invocation with a typed outcome.
//!
//! Commands inherit stdin/stdout/stderr so their output streams live to the
//! operator's console. Nothing here retries or times out.

use std::env;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Why a command did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandFailure {
    /// Program could not be located on PATH (or at the given path)
    NotFound,
    /// Program was found but could not be started
    SpawnFailed,
    /// Program ran and exited with a non-zero status
    ExitStatus(i32),
    /// Program was terminated by a signal
    Signaled,
}

/// Result of running one external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub succeeded: bool,
    pub exit_code: Option<i32>,
    pub message: Option<String>,
    pub failure: Option<CommandFailure>,
}

impl CommandOutcome {
    fn success() -> Self {
        Self {
            succeeded: true,
            exit_code: Some(0),
            message: None,
            failure: None,
        }
    }

    fn failed(failure: CommandFailure, message: String) -> Self {
        let exit_code = match failure {
            CommandFailure::ExitStatus(code) => Some(code),
            _ => None,
        };
        Self {
            succeeded: false,
            exit_code,
            message: Some(message),
            failure: Some(failure),
        }
    }

    /// True when the program itself was missing
    pub fn is_not_found(&self) -> bool {
        self.failure == Some(CommandFailure::NotFound)
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{message}"),
            None => write!(f, "exited successfully"),
        }
    }
}

/// Locate `program` the way the spawn will, relative to `cwd`
pub fn resolve(program: &str, cwd: &Path) -> Option<PathBuf> {
    which::which_in(program, env::var_os("PATH"), cwd).ok()
}

/// Run `argv` in `cwd`, blocking until it exits.
///
/// Never panics or errors: a missing program, a failed spawn and a
/// non-zero exit all come back as a failed outcome.
pub fn run(argv: &[String], cwd: &Path) -> CommandOutcome {
    let Some((program, args)) = argv.split_first() else {
        return CommandOutcome::failed(CommandFailure::NotFound, "empty command".to_string());
    };

    if resolve(program, cwd).is_none() {
        return CommandOutcome::failed(
            CommandFailure::NotFound,
            format!("command not found: {program}"),
        );
    }

    let status = match Command::new(program).args(args).current_dir(cwd).status() {
        Ok(status) => status,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return CommandOutcome::failed(
                CommandFailure::NotFound,
                format!("command not found: {program}"),
            );
        }
        Err(e) => {
            return CommandOutcome::failed(
                CommandFailure::SpawnFailed,
                format!("failed to start {program}: {e}"),
            );
        }
    };

    if status.success() {
        return CommandOutcome::success();
    }

    match status.code() {
        Some(code) => CommandOutcome::failed(
            CommandFailure::ExitStatus(code),
            format!("{} exited with status {code}", display_command(argv)),
        ),
        None => CommandOutcome::failed(
            CommandFailure::Signaled,
            format!("{} was terminated by a signal", display_command(argv)),
        ),
    }
}

/// Render argv for status lines
pub fn display_command(argv: &[String]) -> String {
    argv.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_command_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let outcome = run(&argv(&["this-command-does-not-exist-xyz123"]), tmp.path());
        assert!(!outcome.succeeded);
        assert!(outcome.is_not_found());
        assert_eq!(outcome.exit_code, None);
        assert!(outcome.to_string().contains("this-command-does-not-exist-xyz123"));
    }

    #[test]
    fn test_empty_command_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(!run(&[], tmp.path()).succeeded);
    }

    #[cfg(unix)]
    #[test]
    fn test_success_and_exit_codes() {
        let tmp = TempDir::new().unwrap();

        let ok = run(&argv(&["true"]), tmp.path());
        assert!(ok.succeeded);
        assert_eq!(ok.exit_code, Some(0));
        assert_eq!(ok.failure, None);

        let failed = run(&argv(&["sh", "-c", "exit 3"]), tmp.path());
        assert!(!failed.succeeded);
        assert_eq!(failed.exit_code, Some(3));
        assert_eq!(failed.failure, Some(CommandFailure::ExitStatus(3)));
        assert!(!failed.is_not_found());
    }

    #[cfg(unix)]
    #[test]
    fn test_killed_by_signal() {
        let tmp = TempDir::new().unwrap();
        let outcome = run(&argv(&["sh", "-c", "kill -9 $$"]), tmp.path());
        assert!(!outcome.succeeded);
        assert_eq!(outcome.failure, Some(CommandFailure::Signaled));
        assert_eq!(outcome.exit_code, None);
        assert!(outcome.to_string().contains("terminated by a signal"));
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_given_directory() {
        let tmp = TempDir::new().unwrap();
        let outcome = run(&argv(&["sh", "-c", "touch here.txt"]), tmp.path());
        assert!(outcome.succeeded);
        assert!(tmp.path().join("here.txt").exists());
    }

    #[test]
    fn test_display_command() {
        assert_eq!(display_command(&argv(&["uv", "run", "pytest", "-v"])), "uv run pytest -v");
    }
}
