use crate::planner::{ItemStatus, RenamePlan};
use nu_ansi_term::{Color as AnsiColor, Style};
use similar::{ChangeTag, TextDiff};
use std::fmt::Write;

/// Render every changed item as a two-line character diff
pub fn render_diff(plan: &RenamePlan, use_color: bool) -> String {
    let mut output = String::new();

    for item in plan.changed() {
        let marker = match item.status {
            ItemStatus::Collision => " (collision)",
            ItemStatus::Error => " (error)",
            _ => "",
        };

        if use_color {
            let header = Style::new()
                .fg(AnsiColor::White)
                .bold()
                .paint(format!("@@ {}{} @@", item.original_name, marker));
            writeln!(output, "{}", header).unwrap();
        } else {
            writeln!(output, "@@ {}{} @@", item.original_name, marker).unwrap();
        }

        let (before, after) = highlight_change(&item.original_name, &item.new_name, use_color);
        writeln!(output, "-{}", before).unwrap();
        writeln!(output, "+{}", after).unwrap();
    }

    if output.is_empty() {
        output.push_str("No changes\n");
    }

    output
}

/// Build the old and new lines, highlighting the characters that differ
fn highlight_change(old: &str, new: &str, use_color: bool) -> (String, String) {
    if !use_color {
        return (old.to_string(), new.to_string());
    }

    let delete_style = Style::new()
        .on(AnsiColor::Rgb(0xC0, 0x52, 0x6A))
        .fg(AnsiColor::Rgb(0xFF, 0xFF, 0xFF));
    let insert_style = Style::new()
        .on(AnsiColor::Rgb(0x00, 0xA9, 0x58))
        .fg(AnsiColor::Rgb(0xFF, 0xFF, 0xFF));
    let delete_base = Style::new().fg(AnsiColor::Red);
    let insert_base = Style::new().fg(AnsiColor::Green);

    let mut before = String::new();
    let mut after = String::new();
    let diff = TextDiff::from_chars(old, new);
    for change in diff.iter_all_changes() {
        let text = change.value();
        match change.tag() {
            ChangeTag::Equal => {
                before.push_str(&delete_base.paint(text).to_string());
                after.push_str(&insert_base.paint(text).to_string());
            },
            ChangeTag::Delete => before.push_str(&delete_style.paint(text).to_string()),
            ChangeTag::Insert => after.push_str(&insert_style.paint(text).to_string()),
        }
    }

    (before, after)
}
