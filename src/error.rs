//! Error types for Folio
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Folio operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Content file could not be found
    #[error("content file not found: {path}")]
    ContentNotFound { path: PathBuf },

    /// Content or config TOML failed to parse
    #[error("invalid TOML in {file}: {message}")]
    InvalidToml { file: PathBuf, message: String },

    /// Source directory missing
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Content references something that does not exist
    #[error("invalid content: {message}")]
    InvalidContent { message: String },

    /// Output path escapes the output directory
    #[error("path '{path}' escapes output directory '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// File watcher failure
    #[error("watch error: {0}")]
    Watch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<notify::Error> for FolioError {
    fn from(err: notify::Error) -> Self {
        FolioError::Watch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_toml() {
        let err = FolioError::InvalidToml {
            file: PathBuf::from("site.toml"),
            message: "expected `=`".to_string(),
        };
        assert_eq!(err.to_string(), "invalid TOML in site.toml: expected `=`");
    }

    #[test]
    fn test_error_display_path_escape() {
        let err = FolioError::PathEscape {
            path: PathBuf::from("../secret"),
            root: PathBuf::from("dist"),
        };
        assert_eq!(
            err.to_string(),
            "path '../secret' escapes output directory 'dist'"
        );
    }
}
