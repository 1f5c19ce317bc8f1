//! Single source of truth for the bootstrap filesystem layout.
//!
//! This module defines WHERE things live. The root is fixed once at start
//! and every other path is derived from it and never recomputed.
//!
//! # Default Layout
//!
//! ```text
//! project/
//! ├── .env                     # Environment file (created once)
//! ├── .env.example             # Environment template (read-only)
//! ├── CLAUDE.md                # Context document (filled once)
//! ├── src/smoke.py             # Smoke artifact (deleted on success)
//! ├── tests/test_smoke.py      # Smoke artifact (deleted on success)
//! └── scripts/                 # Bootstrap scaffolding (deleted on success)
//!     └── bootstrap.toml       # Optional settings
//! ```

use anyhow::{bail, Context, Result};
use std::path::{Component, Path, PathBuf};

use crate::config::{BootstrapConfig, PathsSection};

/// Settings file name, looked up inside the default scripts directory
pub const CONFIG_FILE: &str = "bootstrap.toml";

/// Default scripts directory, relative to the root
pub const SCRIPTS_DIR: &str = "scripts";

/// Resolved paths for one bootstrap run.
#[derive(Debug, Clone)]
pub struct Layout {
    pub root: PathBuf,
    pub env_file: PathBuf,
    pub env_template: PathBuf,
    pub context_doc: PathBuf,
    pub smoke_artifacts: Vec<PathBuf>,
    pub scripts_dir: PathBuf,
}

impl Layout {
    /// Derive every path from `root` using the given path settings.
    ///
    /// Relative paths only; anything that could escape the root is refused.
    pub fn new(root: impl Into<PathBuf>, paths: &PathsSection) -> Result<Self> {
        let root = root.into();

        let scripts_rel = checked_relative(&paths.scripts_dir, "scripts_dir")?;

        let smoke_artifacts = paths
            .smoke_artifacts
            .iter()
            .map(|p| checked_relative(p, "smoke_artifacts").map(|rel| root.join(rel)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            env_file: root.join(checked_relative(&paths.env_file, "env_file")?),
            env_template: root.join(checked_relative(&paths.env_template, "env_template")?),
            context_doc: root.join(checked_relative(&paths.context_doc, "context_doc")?),
            scripts_dir: root.join(scripts_rel),
            smoke_artifacts,
            root,
        })
    }

    /// Layout with every default path under `root`
    pub fn with_defaults(root: impl Into<PathBuf>) -> Result<Self> {
        Self::new(root, &PathsSection::default())
    }

    /// Load `scripts/bootstrap.toml` (if any) and build the layout from it.
    ///
    /// The root is canonicalized here, once.
    pub fn resolve(root: &Path) -> Result<(Self, BootstrapConfig)> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Project root not found: {}", root.display()))?;
        let settings = config_path(&root);
        let config = crate::config::load(&settings)?;
        let layout = Self::new(root, &config.paths)?;

        // Cleanup removes scripts_dir, so refuse a root that was never scaffolded
        if !layout.scripts_dir.exists() && !settings.exists() {
            bail!(
                "No bootstrap scaffolding under {} (expected {}/ or {}); is this the project root?",
                layout.root.display(),
                layout.relative(&layout.scripts_dir).display(),
                layout.relative(&settings).display()
            );
        }
        Ok((layout, config))
    }

    /// Path relative to the root, for display
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Project root from `--root` (with `~` expanded) or the current directory
pub fn project_root(raw: Option<&str>) -> Result<PathBuf> {
    match raw {
        Some(raw) => Ok(PathBuf::from(shellexpand::tilde(raw).as_ref())),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

/// Settings file location: `<root>/scripts/bootstrap.toml`
pub fn config_path(root: &Path) -> PathBuf {
    root.join(SCRIPTS_DIR).join(CONFIG_FILE)
}

/// Normalize a configured relative path, rejecting absolute paths, `..`
/// and anything that reduces to the root itself
fn checked_relative(raw: &str, field: &str) -> Result<PathBuf> {
    let mut out = PathBuf::new();
    for component in Path::new(raw).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                bail!("{field} must be a path inside the project root: {raw}")
            }
        }
    }
    if out.as_os_str().is_empty() {
        bail!("{field} must name a path inside the project root, not the root itself: {raw:?}");
    }
    Ok(out)
}
