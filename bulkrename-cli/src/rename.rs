use anyhow::{anyhow, Result};
use bulkrename_core::{rename_operation, OutputFormatter, Preview, RenameOptions, RuleConfig};
use std::path::Path;

use crate::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub fn handle_rename(
    dir: &Path,
    rules: &RuleConfig,
    preview: Preview,
    dry_run: bool,
    auto_approve: bool,
    output: OutputFormat,
    use_color: bool,
    max_failures_shown: usize,
) -> Result<()> {
    let options = RenameOptions {
        // JSON output carries the plan itself
        preview_format: if output == OutputFormat::Json {
            Preview::None
        } else {
            preview
        },
        use_color,
        dry_run,
        auto_approve,
        max_failures_shown,
    };

    let (result, message) = rename_operation(dir, rules, &options)?;

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => {
            if let Some(message) = message {
                println!("{}", message);
            }
            if result.dry_run || result.result.success_count > 0 || !result.result.failures.is_empty()
            {
                print!("{}", result.format_summary());
            }
        },
    }

    if result.result.is_complete() {
        Ok(())
    } else {
        Err(anyhow!(
            "{} of {} renames failed (partial failure)",
            result.result.failures.len(),
            result.planned
        ))
    }
}
