//! SubView: a filesystem re-rooted at one of its directories.
//!
//! A lookup of `P` against a view with prefix `static` resolves
//! `static/P` in the inner filesystem. Nothing is copied.
//!
//! Because [`AssetPath`] never contains `..`, a view can only reach paths
//! under its prefix.

use bytes::Bytes;

use crate::{AssetPath, DirEntry, Error, FileSystem, Metadata};

/// A read-only view of the directory `prefix` inside `inner`.
#[derive(Debug, Clone)]
pub struct SubView<F> {
    inner: F,
    prefix: AssetPath,
}

impl<F: FileSystem> SubView<F> {
    /// Re-root `inner` at `prefix`.
    ///
    /// Fails with [`Error::Mapping`] unless `prefix` is an existing
    /// directory of `inner`. The root prefix yields a view equivalent to
    /// `inner` itself.
    pub fn new(inner: F, prefix: AssetPath) -> Result<Self, Error> {
        match inner.stat(&prefix)? {
            Some(meta) if meta.is_dir() => Ok(SubView { inner, prefix }),
            _ => Err(Error::Mapping { root: prefix }),
        }
    }

    /// Re-root this view at one of its own directories.
    ///
    /// The prefixes are composed, so the result still wraps the original
    /// inner filesystem. Errors name `dir`, as [`FileSystem::sub`] would.
    pub fn narrow(&self, dir: &AssetPath) -> Result<SubView<F>, Error>
    where
        F: Clone,
    {
        SubView::new(self.inner.clone(), self.resolve(dir)).map_err(|e| match e {
            Error::Mapping { .. } => Error::Mapping { root: dir.clone() },
            other => self.rebase_error(other),
        })
    }

    /// The directory of the inner filesystem this view is rooted at.
    pub fn prefix(&self) -> &AssetPath {
        &self.prefix
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn into_inner(self) -> F {
        self.inner
    }

    fn resolve(&self, path: &AssetPath) -> AssetPath {
        self.prefix.join(path)
    }

    // Errors from the inner filesystem name inner paths; callers should
    // only ever see paths relative to the view.
    fn rebase_error(&self, error: Error) -> Error {
        let strip = |path: AssetPath| path.strip_prefix(&self.prefix).unwrap_or(path);
        match error {
            Error::NotADirectory { path } => Error::NotADirectory { path: strip(path) },
            Error::IsADirectory { path } => Error::IsADirectory { path: strip(path) },
            other => other,
        }
    }
}

impl<F: FileSystem> FileSystem for SubView<F> {
    fn stat(&self, path: &AssetPath) -> Result<Option<Metadata>, Error> {
        self.inner
            .stat(&self.resolve(path))
            .map_err(|e| self.rebase_error(e))
    }

    fn read_file(&self, path: &AssetPath) -> Result<Option<Bytes>, Error> {
        self.inner
            .read_file(&self.resolve(path))
            .map_err(|e| self.rebase_error(e))
    }

    fn read_dir(&self, path: &AssetPath) -> Result<Option<Vec<DirEntry>>, Error> {
        self.inner
            .read_dir(&self.resolve(path))
            .map_err(|e| self.rebase_error(e))
    }
}
