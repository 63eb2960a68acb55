use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single rename failed. One failure never stops the rest of a batch.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("permission denied")]
    PermissionDenied(#[source] io::Error),

    #[error("target already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("source no longer exists: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("invalid file name '{0}'")]
    InvalidName(String),

    #[error("{0}")]
    Io(#[source] io::Error),
}

impl RenameError {
    /// Classify an I/O error raised by the rename primitive
    pub fn from_io(err: io::Error, from: &std::path::Path, to: &std::path::Path) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(err),
            io::ErrorKind::AlreadyExists => Self::TargetExists(to.to_path_buf()),
            io::ErrorKind::NotFound if !from.exists() => Self::SourceMissing(from.to_path_buf()),
            io::ErrorKind::InvalidInput => Self::InvalidName(
                to.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            ),
            _ => Self::Io(err),
        }
    }
}
