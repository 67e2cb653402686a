//! Error types for asset filesystems.

use std::path::PathBuf;

use crate::path::{AssetPath, PathError};

/// Errors produced by asset filesystems and views.
///
/// A path that simply does not exist is not an error: lookups return
/// `Ok(None)` for that.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The directory a view should be rooted at does not exist.
    ///
    /// This means the bundle was built without the expected directory. It
    /// is deterministic for a given build and is never worth retrying.
    #[error("virtual root '{root}' not found in asset set")]
    Mapping { root: AssetPath },

    /// Path validation error.
    #[error("path error: {0}")]
    Path(#[from] PathError),

    /// A directory operation was attempted on a file.
    #[error("not a directory: {path}")]
    NotADirectory { path: AssetPath },

    /// A file operation was attempted on a directory.
    #[error("is a directory: {path}")]
    IsADirectory { path: AssetPath },

    /// Reading a bundle from disk failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this error is a missing virtual root.
    pub fn is_mapping(&self) -> bool {
        matches!(self, Error::Mapping { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use std::error::Error as StdError;

    #[test]
    fn mapping_display() {
        let e = Error::Mapping {
            root: path!("static"),
        };
        let display = e.to_string();
        assert!(display.contains("virtual root"));
        assert!(display.contains("'static'"));
        assert!(e.is_mapping());
    }

    #[test]
    fn path_error_conversion() {
        let path_err = AssetPath::parse("..").unwrap_err();
        let e: Error = path_err.into();
        assert!(matches!(e, Error::Path(_)));
        assert!(e.to_string().starts_with("path error"));
        assert!(StdError::source(&e).is_some());
        assert!(!e.is_mapping());
    }

    #[test]
    fn kind_mismatch_display() {
        let e = Error::NotADirectory {
            path: path!("index.html"),
        };
        assert_eq!(e.to_string(), "not a directory: index.html");

        let e = Error::IsADirectory { path: path!("css") };
        assert_eq!(e.to_string(), "is a directory: css");
    }

    #[test]
    fn io_error_source() {
        let e = Error::io(
            "/nonexistent/bundle",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(e.to_string().contains("/nonexistent/bundle"));
        assert!(e.to_string().contains("gone"));
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn mapping_error_has_no_source() {
        let e = Error::Mapping {
            root: AssetPath::root(),
        };
        assert!(StdError::source(&e).is_none());
    }
}
