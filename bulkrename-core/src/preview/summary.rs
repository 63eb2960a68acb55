use crate::planner::{ItemStatus, RenamePlan};
use std::fmt::Write;

/// Render plan as a plain, line-oriented summary
pub fn render_summary(plan: &RenamePlan) -> String {
    let mut output = String::new();

    writeln!(output, "[PLAN SUMMARY]").unwrap();
    writeln!(output, "Files: {}", plan.len()).unwrap();
    writeln!(output, "Pending: {}", plan.pending_count()).unwrap();
    writeln!(output, "Unchanged: {}", plan.unchanged_count()).unwrap();
    writeln!(output, "Collisions: {}", plan.collision_count()).unwrap();

    let renames: Vec<_> = plan
        .items
        .iter()
        .filter(|i| i.status == ItemStatus::Pending)
        .collect();
    if !renames.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "[RENAMES]").unwrap();
        for item in renames {
            writeln!(output, "{} -> {}", item.original_name, item.new_name).unwrap();
        }
    }

    if !plan.collisions.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "[COLLISIONS]").unwrap();
        for (name, indices) in &plan.collisions {
            let sources: Vec<&str> = indices
                .iter()
                .map(|&idx| plan.items[idx].original_name.as_str())
                .collect();
            writeln!(output, "{}: {}", name, sources.join(", ")).unwrap();
        }
    }

    output
}
