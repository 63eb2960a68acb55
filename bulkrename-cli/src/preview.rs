use anyhow::Result;
use bulkrename_core::{preview_operation, write_preview, OutputFormatter, Preview, RuleConfig};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_preview(
    dir: &Path,
    rules: &RuleConfig,
    preview: Preview,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let result = preview_operation(dir, rules)?;

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => {
            write_preview(&result.plan, preview, Some(use_color))?;
            print!("{}", result.format_summary());
        },
    }

    Ok(())
}
