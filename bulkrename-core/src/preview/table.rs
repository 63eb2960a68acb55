use crate::planner::{FileItem, ItemStatus, RenamePlan};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

/// Render plan as a table: one row per item, in batch order
pub fn render_table(plan: &RenamePlan, use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
    }

    let headers = ["Name", "New Name", "Size", "Modified", "Status"];
    if use_color {
        table.set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    } else {
        table.set_header(headers);
    }

    for item in &plan.items {
        let mut new_name = Cell::new(&item.new_name);
        let mut status = Cell::new(item.status.to_string());
        if use_color {
            if let Some(color) = status_color(item.status) {
                new_name = new_name.fg(color);
                status = status.fg(color);
            }
        }

        table.add_row(vec![
            Cell::new(&item.original_name),
            new_name,
            Cell::new(format_size(item.size)),
            Cell::new(format_modified(item)),
            status,
        ]);
    }

    format!("{table}\n")
}

fn status_color(status: ItemStatus) -> Option<Color> {
    match status {
        ItemStatus::Unchanged => None,
        ItemStatus::Pending => Some(Color::Green),
        ItemStatus::Collision | ItemStatus::Error => Some(Color::Red),
    }
}

fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let kb = bytes as f64 / 1024.0;
    format!("{kb:.2} KB")
}

fn format_modified(item: &FileItem) -> String {
    item.modified
        .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(ItemStatus::Unchanged), None);
        assert_eq!(status_color(ItemStatus::Pending), Some(Color::Green));
        assert_eq!(status_color(ItemStatus::Collision), Some(Color::Red));
    }
}
