//! High-level operations that correspond to CLI commands
//!
//! These modules hold the directory-level workflow for each bulkrename
//! command, separated from CLI concerns like argument parsing and output
//! formatting.

pub mod preview;
pub mod rename;

pub use preview::preview_operation;
pub use rename::{rename_operation, RenameOptions};

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// Resolve a user-supplied directory to an absolute, existing directory
pub(crate) fn resolve_directory(directory: &Path) -> Result<PathBuf> {
    let resolved = directory
        .canonicalize()
        .with_context(|| format!("Directory not found: {}", directory.display()))?;

    if !resolved.is_dir() {
        return Err(anyhow!("Not a directory: {}", directory.display()));
    }

    Ok(resolved)
}
