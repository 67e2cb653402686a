//! Validated relative asset paths.

use std::fmt;

/// Errors related to path parsing and validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A path component is not allowed.
    #[error("invalid path component '{component}' at position {position}: {message}")]
    InvalidComponent {
        component: String,
        position: usize,
        message: String,
    },
    /// The path string is invalid as a whole.
    #[error("invalid path {path:?}: {message}")]
    InvalidPath { path: String, message: String },
}

/// A validated, slash-separated path relative to the root of a filesystem.
///
/// Parsing is strict: the root is spelled `"."`, and every other path is
/// one or more non-empty components joined by `/`. The components `.` and
/// `..` are rejected, as are backslashes and NUL bytes, so an `AssetPath`
/// can never climb out of whatever directory it is resolved against.
/// Nothing is normalized: `a/../b` is an error, not `b`.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AssetPath {
    components: Vec<String>,
}

impl AssetPath {
    /// The root path (`"."`).
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a path string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assetfs_core::AssetPath;
    ///
    /// let path = AssetPath::parse("js/bundle.js").unwrap();
    /// assert_eq!(path.len(), 2);
    /// assert!(AssetPath::parse(".").unwrap().is_root());
    ///
    /// assert!(AssetPath::parse("../secret").is_err());
    /// assert!(AssetPath::parse("/etc/passwd").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s == "." {
            return Ok(Self::root());
        }
        if s.is_empty() {
            return Err(PathError::InvalidPath {
                path: s.to_string(),
                message: "empty path (use \".\" for the root)".to_string(),
            });
        }
        if s.starts_with('/') {
            return Err(PathError::InvalidPath {
                path: s.to_string(),
                message: "absolute paths are not allowed".to_string(),
            });
        }
        if s.ends_with('/') {
            return Err(PathError::InvalidPath {
                path: s.to_string(),
                message: "trailing slash".to_string(),
            });
        }

        let components = s.split('/').map(str::to_string).collect();
        Self::try_from_components(components)
    }

    /// Try to create a path from components, validating each.
    pub fn try_from_components(components: Vec<String>) -> Result<Self, PathError> {
        for (i, component) in components.iter().enumerate() {
            Self::validate_component(component, i)?;
        }
        Ok(AssetPath { components })
    }

    /// Build a path from the components of a relative filesystem path.
    ///
    /// Used when indexing directories, where names come from the OS rather
    /// than from callers.
    pub fn try_from_fs_path(path: &std::path::Path) -> Result<Self, PathError> {
        let mut components = Vec::new();
        for (i, component) in path.components().enumerate() {
            match component {
                std::path::Component::Normal(name) => {
                    let name = name.to_str().ok_or_else(|| PathError::InvalidComponent {
                        component: name.to_string_lossy().into_owned(),
                        position: i,
                        message: "not valid UTF-8".to_string(),
                    })?;
                    components.push(name.to_string());
                }
                std::path::Component::CurDir => {}
                other => {
                    return Err(PathError::InvalidComponent {
                        component: other.as_os_str().to_string_lossy().into_owned(),
                        position: i,
                        message: "not a relative name".to_string(),
                    });
                }
            }
        }
        Self::try_from_components(components)
    }

    fn validate_component(component: &str, position: usize) -> Result<(), PathError> {
        let reject = |message: &str| -> Result<(), PathError> {
            Err(PathError::InvalidComponent {
                component: component.to_string(),
                position,
                message: message.to_string(),
            })
        };

        match component {
            "" => reject("empty component"),
            "." | ".." => reject("relative components are not allowed"),
            _ if component.contains('\\') => reject("backslash is not a separator"),
            _ if component.contains('\0') => reject("NUL byte"),
            _ => Ok(()),
        }
    }

    /// Check if this is the root path.
    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Same as [`AssetPath::is_root`].
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Iterate over components.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(String::as_str)
    }

    /// Join this path with another.
    #[must_use]
    pub fn join(&self, other: &AssetPath) -> AssetPath {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        AssetPath { components }
    }

    /// Append a single already-validated child name.
    pub(crate) fn child(&self, name: &str) -> AssetPath {
        let mut components = self.components.clone();
        components.push(name.to_string());
        AssetPath { components }
    }

    /// Check if this path has the given prefix.
    pub fn has_prefix(&self, prefix: &AssetPath) -> bool {
        prefix.components.len() <= self.components.len()
            && prefix.components == self.components[..prefix.components.len()]
    }

    /// Strip a prefix from this path.
    ///
    /// Returns `None` if the prefix doesn't match.
    #[must_use]
    pub fn strip_prefix(&self, prefix: &AssetPath) -> Option<AssetPath> {
        if self.has_prefix(prefix) {
            Some(AssetPath {
                components: self.components[prefix.components.len()..].to_vec(),
            })
        } else {
            None
        }
    }

    /// The parent directory, or `None` for the root.
    pub fn parent(&self) -> Option<AssetPath> {
        let (_, rest) = self.components.split_last()?;
        Some(AssetPath {
            components: rest.to_vec(),
        })
    }

    /// The last component, or `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// The extension of the last component, without the dot.
    ///
    /// Dotfiles like `.htaccess` have no extension.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => None,
            Some(i) => Some(&name[i + 1..]),
        }
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.components.join("/"))
        }
    }
}

impl std::str::FromStr for AssetPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetPath::parse(s)
    }
}

impl std::ops::Index<usize> for AssetPath {
    type Output = str;

    fn index(&self, i: usize) -> &Self::Output {
        &self.components[i]
    }
}

/// Macro for creating paths from literals.
///
/// # Example
///
/// ```rust
/// use assetfs_core::path;
///
/// let p = path!("css/index.css");
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::AssetPath::parse($s).expect("invalid path literal")
    };
}
