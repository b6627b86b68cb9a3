//! File checks performed before a file is loaded into a buffer
//!
//! Rejects missing paths, directories, oversized files and files that look
//! binary (contain NUL bytes in their first 8KB).

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Why a file could not be opened as a text buffer
#[derive(Debug, Clone, PartialEq)]
pub enum BufferLoadError {
    NotFound,
    PermissionDenied,
    IsDirectory,
    /// File appears to be binary (contains null bytes)
    BinaryFile,
    TooLarge { size_mb: f64 },
    /// Other I/O error, including invalid UTF-8
    Io(String),
}

impl BufferLoadError {
    pub(crate) fn from_io(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(e.to_string()),
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::BinaryFile => format!("Cannot open binary file: {}", filename),
            Self::TooLarge { size_mb } => format!(
                "{} is too large ({:.1} MB, max {} MB)",
                filename,
                size_mb,
                MAX_FILE_SIZE / (1024 * 1024)
            ),
            Self::Io(msg) => format!("Error opening {}: {}", filename, msg),
        }
    }
}

impl std::fmt::Display for BufferLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::BinaryFile => write!(f, "binary file"),
            Self::TooLarge { size_mb } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BufferLoadError {}

/// Check that `path` is an existing, readable, reasonably sized file
pub fn validate_file_for_opening(path: &Path) -> Result<(), BufferLoadError> {
    let metadata = fs::metadata(path).map_err(BufferLoadError::from_io)?;

    if metadata.is_dir() {
        return Err(BufferLoadError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(BufferLoadError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Sniff the first 8KB for NUL bytes
///
/// Returns `false` on read errors so the actual load reports the failure.
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut head = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut head) else {
        return false;
    };

    head[..bytes_read].contains(&0)
}

/// File name of `path` for status and error messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
