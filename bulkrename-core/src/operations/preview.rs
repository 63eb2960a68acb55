use super::resolve_directory;
use crate::listing::load_directory;
use crate::output::PreviewResult;
use crate::planner::plan;
use crate::rules::RuleConfig;
use anyhow::Result;
use log::debug;
use std::path::Path;

/// Preview operation - lists and plans a directory without mutating it
pub fn preview_operation(directory: &Path, rules: &RuleConfig) -> Result<PreviewResult> {
    let directory = resolve_directory(directory)?;
    let items = load_directory(&directory);
    debug!("Planning {} files in {}", items.len(), directory.display());

    let plan = plan(items, rules);
    Ok(PreviewResult::new(directory, plan))
}
