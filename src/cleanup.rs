//! Step 5: remove validation fixtures and the bootstrap scaffolding.
//!
//! Only called after the validation suite passed. Missing paths are
//! skipped; any deletion error propagates and stops the run.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::layout::Layout;
use crate::ui;

/// Paths removed by a cleanup pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed_files: Vec<PathBuf>,
    pub removed_scripts_dir: Option<PathBuf>,
}

impl CleanupReport {
    pub fn is_empty(&self) -> bool {
        self.removed_files.is_empty() && self.removed_scripts_dir.is_none()
    }
}

pub fn run(layout: &Layout) -> Result<CleanupReport> {
    println!("🧹 Removing smoke test artifacts...");
    let mut report = CleanupReport::default();

    for path in &layout.smoke_artifacts {
        if !path.exists() {
            continue;
        }
        fs::remove_file(path)
            .with_context(|| format!("Failed to delete smoke artifact: {}", path.display()))?;
        ui::item(&format!("Deleted: {}", layout.relative(path).display()));
        report.removed_files.push(path.clone());
    }

    // Last: this directory holds the bootstrap itself and its settings
    let scripts = &layout.scripts_dir;
    if scripts.exists() {
        fs::remove_dir_all(scripts)
            .with_context(|| format!("Failed to delete scripts directory: {}", scripts.display()))?;
        ui::item(&format!("Deleted: {}/", layout.relative(scripts).display()));
        report.removed_scripts_dir = Some(scripts.clone());
    }

    println!();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scaffold(tmp: &TempDir) -> Layout {
        let layout = Layout::with_defaults(tmp.path()).unwrap();
        for path in &layout.smoke_artifacts {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "def test_smoke(): pass\n").unwrap();
        }
        fs::create_dir_all(layout.scripts_dir.join("nested")).unwrap();
        fs::write(layout.scripts_dir.join("setup.py"), "").unwrap();
        fs::write(layout.scripts_dir.join("nested/helper.sh"), "").unwrap();
        layout
    }

    #[test]
    fn test_removes_everything() {
        let tmp = TempDir::new().unwrap();
        let layout = scaffold(&tmp);

        let report = run(&layout).unwrap();

        for path in &layout.smoke_artifacts {
            assert!(!path.exists());
        }
        assert!(!layout.scripts_dir.exists());
        assert_eq!(report.removed_files.len(), 2);
        assert_eq!(report.removed_scripts_dir, Some(layout.scripts_dir.clone()));
    }

    #[test]
    fn test_missing_paths_are_skipped() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::with_defaults(tmp.path()).unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();
        fs::write(&layout.smoke_artifacts[0], "").unwrap();

        let report = run(&layout).unwrap();
        assert_eq!(report.removed_files, vec![layout.smoke_artifacts[0].clone()]);
        assert_eq!(report.removed_scripts_dir, None);
    }

    #[test]
    fn test_nothing_to_remove() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::with_defaults(tmp.path()).unwrap();
        assert!(run(&layout).unwrap().is_empty());
    }

    #[test]
    fn test_sibling_files_survive() {
        let tmp = TempDir::new().unwrap();
        let layout = scaffold(&tmp);
        let keep = tmp.path().join("src/app.py");
        fs::write(&keep, "print('hi')\n").unwrap();

        run(&layout).unwrap();
        assert!(keep.exists());
    }

    #[test]
    fn test_deletion_error_propagates() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::with_defaults(tmp.path()).unwrap();
        // A directory where a file is expected cannot be removed as a file
        fs::create_dir_all(&layout.smoke_artifacts[0]).unwrap();

        assert!(run(&layout).is_err());
    }
}
