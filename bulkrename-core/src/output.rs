use crate::executor::RenameResult;
use crate::planner::RenamePlan;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of planning a directory without touching it
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResult {
    pub directory: PathBuf,
    pub files: usize,
    pub pending: usize,
    pub unchanged: usize,
    pub collisions: usize,
    pub plan: RenamePlan,
}

impl PreviewResult {
    pub fn new(directory: PathBuf, plan: RenamePlan) -> Self {
        Self {
            directory,
            files: plan.len(),
            pending: plan.pending_count(),
            unchanged: plan.unchanged_count(),
            collisions: plan.collision_count(),
            plan,
        }
    }
}

/// Result of executing a plan
#[derive(Debug, Serialize, Deserialize)]
pub struct ExecuteResult {
    pub directory: PathBuf,
    /// Number of items the plan would rename
    pub planned: usize,
    pub dry_run: bool,
    pub result: RenameResult,
    /// The executed plan; items whose rename failed carry `ItemStatus::Error`
    pub plan: RenamePlan,
    /// Names in the directory after execution, as reloaded from disk
    pub files_after: Vec<String>,
    /// How many failures `format_summary` lists before truncating
    #[serde(skip, default = "default_failure_cap")]
    pub max_failures_shown: usize,
}

fn default_failure_cap() -> usize {
    5
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for PreviewResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "preview",
            "directory": self.directory,
            "summary": {
                "files": self.files,
                "pending": self.pending,
                "unchanged": self.unchanged,
                "collisions": self.collisions,
            },
            "plan": self.plan,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        writeln!(output, "Preview for {}", self.directory.display()).unwrap();
        writeln!(
            output,
            "{} files: {} to rename, {} unchanged",
            self.files, self.pending, self.unchanged
        )
        .unwrap();

        if self.collisions > 0 {
            writeln!(
                output,
                "⚠ {} files collide on {} names; resolve before renaming",
                self.collisions,
                self.plan.collisions.len()
            )
            .unwrap();
        }

        output
    }
}

impl OutputFormatter for ExecuteResult {
    fn format_json(&self) -> String {
        let failures: Vec<_> = self
            .result
            .failures
            .iter()
            .map(|f| {
                json!({
                    "original_name": f.original_name,
                    "new_name": f.new_name,
                    "error": f.message,
                })
            })
            .collect();

        let items: Vec<_> = self
            .plan
            .items
            .iter()
            .map(|item| {
                json!({
                    "original_name": item.original_name,
                    "new_name": item.new_name,
                    "status": item.status,
                })
            })
            .collect();

        serde_json::to_string(&json!({
            "success": self.result.is_complete(),
            "operation": "rename",
            "directory": self.directory,
            "dry_run": self.dry_run,
            "summary": {
                "planned": self.planned,
                "renamed": self.result.success_count,
                "failed": self.result.failures.len(),
            },
            "renamed": self.result.renamed,
            "failures": failures,
            "items": items,
            "files_after": self.files_after,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        if self.dry_run {
            return format!("Dry run: {} files would be renamed.\n", self.planned);
        }

        let mut output = String::new();

        writeln!(output, "✓ Renamed {} files.", self.result.success_count).unwrap();

        if !self.result.failures.is_empty() {
            writeln!(output).unwrap();
            writeln!(output, "Errors ({}):", self.result.failures.len()).unwrap();
            let (shown, hidden) = self.result.failures_for_display(self.max_failures_shown);
            for line in shown {
                writeln!(output, "  {}", line).unwrap();
            }
            if hidden > 0 {
                writeln!(output, "  ... and {} more", hidden).unwrap();
            }
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
