//! Error types for linkpage

use thiserror::Error;

/// Failure to obtain a usable page configuration.
///
/// Any of these aborts rendering entirely; the host markup keeps its
/// default, unpopulated state.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading a local configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request could not be completed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The document is not valid JSON or does not match the schema
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Clipboard write failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard could be opened on this platform
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard rejected the write
    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// Native share invocation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The user dismissed the share sheet
    #[error("Share aborted by user")]
    Aborted,

    /// Any other failure reported by the platform
    #[error("Share failed: {0}")]
    Failed(String),
}

/// Result type alias using LoadError
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::Status(404);
        assert_eq!(format!("{}", err), "Unexpected HTTP status: 404");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let load_err: LoadError = io_err.into();
        assert!(matches!(load_err, LoadError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let load_err: LoadError = json_err.into();
        assert!(matches!(load_err, LoadError::Parse(_)));
    }
}
