use crate::planner::FileItem;
use chrono::{DateTime, Local};
use log::warn;
use std::fs;
use std::path::Path;

/// List the regular files directly inside `dir`, sorted by name.
///
/// Every item starts out unchanged. An unreadable directory gives an empty
/// list and an unreadable entry is skipped; neither is an error. Names that
/// are not valid UTF-8 are skipped as well.
pub fn load_directory(dir: &Path) -> Vec<FileItem> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("cannot read directory {}: {}", dir.display(), e);
            return Vec::new();
        },
    };

    let base = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    let mut items = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            },
        };

        let path = entry.path();
        // Follows symlinks so a link to a regular file is listed like one
        let metadata = match fs::metadata(&path) {
            Ok(m) if m.is_file() => m,
            Ok(_) => continue,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                continue;
            },
        };

        let Ok(name) = entry.file_name().into_string() else {
            warn!("skipping non UTF-8 file name {}", path.display());
            continue;
        };

        let modified = metadata.modified().ok().map(DateTime::<Local>::from);
        items.push(FileItem::new(base.join(&name), name, metadata.len(), modified));
    }

    items.sort_by(|a, b| a.original_name.cmp(&b.original_name));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::ItemStatus;
    use tempfile::TempDir;

    #[test]
    fn test_lists_only_files_sorted() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "bb").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("subdir")).unwrap();
        fs::write(temp_dir.path().join("subdir").join("nested.txt"), "").unwrap();

        let items = load_directory(temp_dir.path());
        let names: Vec<_> = items.iter().map(|i| i.original_name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);

        assert_eq!(items[1].size, 2);
        assert!(items[0].modified.is_some());
        assert!(items[0].path.is_absolute());
        assert!(items.iter().all(|i| i.status == ItemStatus::Unchanged));
        assert!(items.iter().all(|i| i.new_name == i.original_name));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let items = load_directory(&temp_dir.path().join("does-not-exist"));
        assert!(items.is_empty());
    }

    #[test]
    fn test_includes_dotfiles() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".hidden"), "").unwrap();
        let items = load_directory(temp_dir.path());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].original_name, ".hidden");
    }
}
