//! Step 2: create the environment file from its template if it is missing.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::layout::Layout;
use crate::ui;

/// What happened to the environment file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFileStatus {
    AlreadyExists,
    Created,
    NoTemplate,
}

/// Copy the template into a new environment file. Never overwrites.
pub fn ensure(layout: &Layout) -> Result<EnvFileStatus> {
    let env_name = layout.relative(&layout.env_file).display().to_string();

    if layout.env_file.exists() {
        ui::info(&format!("{env_name} already exists, skipping..."));
        println!();
        return Ok(EnvFileStatus::AlreadyExists);
    }

    if !layout.env_template.exists() {
        ui::warn(&format!(
            "No {} found, skipping {env_name} creation",
            layout.relative(&layout.env_template).display()
        ));
        println!();
        return Ok(EnvFileStatus::NoTemplate);
    }

    let contents = fs::read(&layout.env_template).with_context(|| {
        format!(
            "Failed to read environment template: {}",
            layout.env_template.display()
        )
    })?;
    write_new(&layout.env_file, &contents)?;

    ui::info(&format!("Created {env_name} from template"));
    println!();
    Ok(EnvFileStatus::Created)
}

/// Create `path` exclusively and write all of `contents`, flushing before
/// the handle is dropped. Fails if the file appeared in the meantime.
fn write_new(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Failed to create environment file: {}", path.display()))?;

    let written = file.write_all(contents).and_then(|_| file.sync_all());
    if let Err(e) = written {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(e)
            .with_context(|| format!("Failed to write environment file: {}", path.display()));
    }
    Ok(())
}
