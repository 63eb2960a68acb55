/// Split a filename into `(stem, extension)`.
///
/// The extension runs from the last `.` to the end, dot included. A dot in
/// the first or last position does not start an extension, so `.gitignore`
/// and `notes.` keep the whole name as the stem.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Ensure a user-supplied extension begins with a dot
pub fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(split_name("photo.jpg"), ("photo", ".jpg"));
    }

    #[test]
    fn test_split_multiple_dots_uses_last() {
        assert_eq!(split_name("archive.tar.gz"), ("archive.tar", ".gz"));
    }

    #[test]
    fn test_split_dotfile() {
        assert_eq!(split_name(".gitignore"), (".gitignore", ""));
        assert_eq!(split_name(".env.local"), (".env", ".local"));
    }

    #[test]
    fn test_split_no_extension() {
        assert_eq!(split_name("Makefile"), ("Makefile", ""));
        assert_eq!(split_name(""), ("", ""));
    }

    #[test]
    fn test_split_trailing_dot() {
        assert_eq!(split_name("notes."), ("notes.", ""));
    }

    #[test]
    fn test_split_non_ascii() {
        assert_eq!(split_name("café.txt"), ("café", ".txt"));
        assert_eq!(split_name("日本語.テキスト"), ("日本語", ".テキスト"));
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("md"), ".md");
        assert_eq!(normalize_extension(".md"), ".md");
        assert_eq!(normalize_extension(""), ".");
    }
}
