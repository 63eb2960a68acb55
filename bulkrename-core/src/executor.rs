use crate::error::RenameError;
use crate::planner::{FileItem, RenamePlan};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A rename that could not be performed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameFailure {
    pub original_name: String,
    pub new_name: String,
    pub message: String,
}

/// Outcome of executing a plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameResult {
    pub success_count: usize,
    /// `(original_name, new_name)` for every rename that happened, in plan order
    pub renamed: Vec<(String, String)>,
    /// Failures in plan order
    pub failures: Vec<RenameFailure>,
}

impl RenameResult {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// At most `cap` formatted failure lines plus the number left out
    pub fn failures_for_display(&self, cap: usize) -> (Vec<String>, usize) {
        let shown = self
            .failures
            .iter()
            .take(cap)
            .map(|f| format!("{}: {}", f.original_name, f.message))
            .collect();
        let hidden = self.failures.len().saturating_sub(cap);
        (shown, hidden)
    }
}

/// Rename every changed item of `plan`, in order, one at a time.
///
/// Collisions are not re-checked here; callers must only pass plans for
/// which `RenamePlan::is_executable` holds. A failing item is recorded and
/// the loop moves on. Nothing is rolled back.
pub fn execute(plan: &RenamePlan) -> RenameResult {
    let mut result = RenameResult::default();

    for item in plan.changed() {
        match rename_item(item) {
            Ok(()) => {
                info!("renamed '{}' -> '{}'", item.original_name, item.new_name);
                result.success_count += 1;
                result
                    .renamed
                    .push((item.original_name.clone(), item.new_name.clone()));
            },
            Err(e) => {
                warn!(
                    "failed to rename '{}' -> '{}': {}",
                    item.original_name, item.new_name, e
                );
                result.failures.push(RenameFailure {
                    original_name: item.original_name.clone(),
                    new_name: item.new_name.clone(),
                    message: e.to_string(),
                });
            },
        }
    }

    result
}

fn rename_item(item: &FileItem) -> Result<(), RenameError> {
    validate_name(&item.new_name)?;

    let from = item.path.as_path();
    let to = item.target_path();

    if target_occupied(from, &to) {
        return Err(RenameError::TargetExists(to));
    }

    fs::rename(from, &to).map_err(|e| RenameError::from_io(e, from, &to))
}

/// Reject names that cannot denote a single entry in the parent directory
fn validate_name(name: &str) -> Result<(), RenameError> {
    if name.is_empty() || name == "." || name == ".." || name.chars().any(is_forbidden_char) {
        return Err(RenameError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn is_forbidden_char(c: char) -> bool {
    if c == '/' || c == '\0' {
        return true;
    }
    cfg!(windows) && matches!(c, '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*')
}

/// True if `to` exists and is not merely `from` under a different case
fn target_occupied(from: &Path, to: &Path) -> bool {
    if fs::symlink_metadata(to).is_err() {
        return false;
    }
    !is_same_entry(from, to)
}

#[cfg(unix)]
fn is_same_entry(from: &Path, to: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::symlink_metadata(from), fs::symlink_metadata(to)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_entry(from: &Path, to: &Path) -> bool {
    match (from.file_name(), to.file_name()) {
        (Some(a), Some(b)) => {
            a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
        },
        _ => false,
    }
}
