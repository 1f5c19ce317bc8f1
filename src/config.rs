//! Bootstrap settings stored in `scripts/bootstrap.toml`
//!
//! Every section is optional. A missing file means all defaults, which
//! reproduce the stock template: `uv sync`, `uv run pytest -v`, `.env`,
//! `CLAUDE.md` and the two smoke files.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BootstrapConfig {
    #[serde(default)]
    pub commands: CommandsSection,
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub context: ContextSection,
}

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandsSection {
    /// Dependency install command (argv)
    #[serde(default = "default_install")]
    pub install: Vec<String>,
    /// Validation suite command (argv), run with output streaming
    #[serde(default = "default_validate")]
    pub validate: Vec<String>,
}

fn default_install() -> Vec<String> {
    vec!["uv".to_string(), "sync".to_string()]
}
fn default_validate() -> Vec<String> {
    ["uv", "run", "pytest", "-v"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for CommandsSection {
    fn default() -> Self {
        Self {
            install: default_install(),
            validate: default_validate(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsSection {
    #[serde(default = "default_env_file")]
    pub env_file: String,
    #[serde(default = "default_env_template")]
    pub env_template: String,
    #[serde(default = "default_context_doc")]
    pub context_doc: String,
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: String,
    /// Validation fixtures removed after a passing run
    #[serde(default = "default_smoke_artifacts")]
    pub smoke_artifacts: Vec<String>,
}

fn default_env_file() -> String {
    ".env".to_string()
}
fn default_env_template() -> String {
    ".env.example".to_string()
}
fn default_context_doc() -> String {
    "CLAUDE.md".to_string()
}
fn default_scripts_dir() -> String {
    crate::layout::SCRIPTS_DIR.to_string()
}
fn default_smoke_artifacts() -> Vec<String> {
    vec!["src/smoke.py".to_string(), "tests/test_smoke.py".to_string()]
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            env_file: default_env_file(),
            env_template: default_env_template(),
            context_doc: default_context_doc(),
            scripts_dir: default_scripts_dir(),
            smoke_artifacts: default_smoke_artifacts(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSection {
    /// Banner title
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Python Template Repository Setup".to_string()
}

impl Default for ContextSection {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

// =============================================================================
// Load
// =============================================================================

/// Load settings from `path`, falling back to defaults when it is absent.
pub fn load(path: &Path) -> Result<BootstrapConfig> {
    if !path.exists() {
        return Ok(BootstrapConfig::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bootstrap config: {}", path.display()))?;

    let config: BootstrapConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse bootstrap config: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("Invalid bootstrap config: {}", path.display()))?;
    Ok(config)
}

impl BootstrapConfig {
    fn validate(&self) -> Result<()> {
        if self.commands.install.is_empty() {
            bail!("[commands] install must name a program");
        }
        if self.commands.validate.is_empty() {
            bail!("[commands] validate must name a program");
        }
        Ok(())
    }
}
