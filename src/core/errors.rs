/*!
# Error System for bom-fix

Per-file error taxonomy. Every failure carries the path it happened on
and the underlying cause, so a report line can be rendered from the
error alone.
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result of a single-file operation
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Error kind, stripped of its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Io,
    Decode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Io => write!(f, "IO"),
            ErrorKind::Decode => write!(f, "DECODE"),
        }
    }
}

/// Failure to normalize one file
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// File could not be opened, read or written
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File bytes are not valid UTF-8 (BOM or not)
    #[error("{}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl NormalizeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn decode(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Io,
            Self::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// Path the failure refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Decode { path, .. } => path,
        }
    }

    /// Cause text without the path prefix
    pub fn cause(&self) -> String {
        match self {
            Self::Io { source, .. } => source.to_string(),
            Self::Decode { source, .. } => source.to_string(),
        }
    }

    /// True when the underlying IO error is "not found"
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path_and_cause() {
        let err = NormalizeError::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );

        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.is_not_found());
        assert_eq!(err.path(), Path::new("missing.txt"));
        assert_eq!(err.to_string(), "missing.txt: No such file or directory");
    }

    #[test]
    fn test_decode_error_kind() {
        let source = String::from_utf8(vec![b'a', 0xFF]).unwrap_err();
        let err = NormalizeError::decode("bad.txt", source);

        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("bad.txt: "));
        assert!(err.cause().contains("invalid utf-8"));
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::Io.to_string(), "IO");
        assert_eq!(ErrorKind::Decode.to_string(), "DECODE");
    }
}
