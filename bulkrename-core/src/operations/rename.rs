use super::resolve_directory;
use crate::executor::{execute, RenameResult};
use crate::listing::load_directory;
use crate::output::ExecuteResult;
use crate::planner::{plan, RenamePlan};
use crate::preview::{render_plan, Preview};
use crate::rules::RuleConfig;
use anyhow::{anyhow, Context, Result};
use log::info;
use std::io::{self, IsTerminal, Write as IoWrite};
use std::path::{Path, PathBuf};

/// How many colliding names an error message spells out
const COLLISIONS_LISTED: usize = 3;

#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub preview_format: Preview,
    pub use_color: bool,
    pub dry_run: bool,
    pub auto_approve: bool,
    pub max_failures_shown: usize,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            preview_format: Preview::Table,
            use_color: false,
            dry_run: false,
            auto_approve: false,
            max_failures_shown: 5,
        }
    }
}

/// Rename operation - plans the directory, asks for approval and executes.
///
/// The preview is printed before the confirmation prompt. When no prompt is
/// shown (dry run or auto-approve) it is returned alongside the result
/// instead, together with short status messages such as `Aborted.`. A batch
/// refused for collisions always prints its preview first.
pub fn rename_operation(
    directory: &Path,
    rules: &RuleConfig,
    options: &RenameOptions,
) -> Result<(ExecuteResult, Option<String>)> {
    let directory = resolve_directory(directory)?;
    let mut plan = plan(load_directory(&directory), rules);
    let planned = plan.pending_count();

    let preview_output = match options.preview_format {
        Preview::None => None,
        format => Some(render_plan(&plan, format, Some(options.use_color))),
    };

    // Colliding batches print their preview before the refusal
    let prompting = !options.dry_run && !options.auto_approve;
    if prompting || plan.has_collisions() {
        if let Some(preview) = &preview_output {
            println!("{}", preview);
        }
    }

    if plan.has_collisions() {
        return Err(collision_error(&plan));
    }

    if planned == 0 {
        return Ok((
            unexecuted(directory, &plan, options),
            Some("No files to rename.".to_string()),
        ));
    }

    if options.dry_run {
        let mut result = unexecuted(directory, &plan, options);
        result.dry_run = true;
        return Ok((result, preview_output));
    }

    validate_operation_safety(options.auto_approve)?;

    if !options.auto_approve && !get_user_confirmation(planned)? {
        return Ok((
            unexecuted(directory, &plan, options),
            Some("Aborted.".to_string()),
        ));
    }

    info!("Renaming {} files in {}", planned, directory.display());
    let result = execute(&plan);
    plan.record_result(&result);

    let files_after = load_directory(&directory)
        .into_iter()
        .map(|item| item.original_name)
        .collect();

    Ok((
        ExecuteResult {
            directory,
            planned,
            dry_run: false,
            result,
            plan,
            files_after,
            max_failures_shown: options.max_failures_shown,
        },
        if prompting { None } else { preview_output },
    ))
}

fn unexecuted(directory: PathBuf, plan: &RenamePlan, options: &RenameOptions) -> ExecuteResult {
    ExecuteResult {
        directory,
        planned: plan.pending_count(),
        dry_run: false,
        result: RenameResult::default(),
        files_after: plan.items.iter().map(|i| i.original_name.clone()).collect(),
        plan: plan.clone(),
        max_failures_shown: options.max_failures_shown,
    }
}

fn collision_error(plan: &RenamePlan) -> anyhow::Error {
    let names: Vec<&str> = plan
        .collisions
        .keys()
        .take(COLLISIONS_LISTED)
        .map(String::as_str)
        .collect();
    let more = plan.collisions.len().saturating_sub(COLLISIONS_LISTED);
    let suffix = if more > 0 {
        format!(" and {} more", more)
    } else {
        String::new()
    };

    anyhow!(
        "Refusing to rename: {} files collide on {}{}",
        plan.collision_count(),
        names.join(", "),
        suffix
    )
}

fn validate_operation_safety(auto_approve: bool) -> Result<()> {
    if !auto_approve && !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Cannot prompt for confirmation in non-interactive mode. Use auto_approve to skip the prompt."
        ));
    }
    Ok(())
}

fn get_user_confirmation(planned: usize) -> Result<bool> {
    print!("Rename {} files? [y/N]: ", planned);
    IoWrite::flush(&mut io::stdout()).context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;
    let input = input.trim().to_lowercase();

    Ok(input == "y" || input == "yes")
}
