//! AssetSet: an immutable map from asset path to file content.
//!
//! Directories are not stored; they exist because files live beneath them.
//! The root always exists, even in an empty set.
//!
//! # Example
//!
//! ```rust
//! use assetfs_core::{AssetSet, Bytes, FileSystem, path};
//!
//! let assets = AssetSet::builder()
//!     .file(path!("static/index.html"), Bytes::from_static(b"<html></html>"))
//!     .build()
//!     .unwrap();
//!
//! assert!(assets.stat(&path!("static")).unwrap().unwrap().is_dir());
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path as FsPath;

use bytes::Bytes;

use crate::{AssetPath, DirEntry, Error, FileKind, FileSystem, Metadata};

/// An immutable collection of files addressed by [`AssetPath`].
///
/// Built once (from an embedded tree, a directory on disk, or a builder)
/// and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct AssetSet {
    files: BTreeMap<AssetPath, Bytes>,
    dirs: BTreeMap<AssetPath, BTreeMap<String, FileKind>>,
}

impl AssetSet {
    pub fn builder() -> AssetSetBuilder {
        AssetSetBuilder::default()
    }

    /// Index a tree embedded with `include_dir!`.
    ///
    /// Keys are relative to the embedded directory, so embedding a parent
    /// of `static/` keeps `static/` in every key. Entries whose names
    /// cannot be represented as an [`AssetPath`] are skipped with a warning.
    #[cfg(feature = "include-dir")]
    pub fn from_include_dir(dir: &'static include_dir::Dir<'static>) -> Self {
        fn collect(dir: &'static include_dir::Dir<'static>, builder: &mut AssetSetBuilder) {
            for file in dir.files() {
                match AssetPath::try_from_fs_path(file.path()) {
                    Ok(path) => builder.insert(path, Bytes::from_static(file.contents())),
                    Err(e) => log::warn!("Skipping embedded {}: {}", file.path().display(), e),
                }
            }
            for sub in dir.dirs() {
                collect(sub, builder);
            }
        }

        let mut builder = AssetSetBuilder::default();
        collect(dir, &mut builder);
        // A tree from the filesystem can't hold a file and a directory
        // under one name.
        let set = builder.build_unchecked();
        log::debug!(
            "Indexed {} embedded assets ({} bytes)",
            set.len(),
            set.total_size()
        );
        set
    }

    /// Read every file below `root` into memory.
    ///
    /// Keys are relative to `root`. Symlinks below `root` are skipped, so
    /// nothing outside it can be read.
    pub fn from_directory(root: impl AsRef<FsPath>) -> Result<Self, Error> {
        let root = root.as_ref();
        log::debug!("Reading {}...", root.display());

        let mut builder = AssetSetBuilder::default();
        for entry in walkdir::WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                Error::io(path, e.into())
            })?;
            if entry.path_is_symlink() && entry.depth() > 0 {
                log::warn!("Skipping {}: symbolic link", entry.path().display());
                continue;
            }
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let path = match AssetPath::try_from_fs_path(relative) {
                Ok(path) if !path.is_root() => path,
                Ok(_) => {
                    log::warn!("Skipping {}: not a directory", root.display());
                    continue;
                }
                Err(e) => {
                    log::warn!("Skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };

            let contents = fs::read(entry.path()).map_err(|e| Error::io(entry.path(), e))?;
            builder.insert(path, Bytes::from(contents));
        }

        let set = builder.build_unchecked();
        log::debug!(
            "Read {} assets ({} bytes) from {}",
            set.len(),
            set.total_size(),
            root.display()
        );
        Ok(set)
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Sum of all file sizes in bytes.
    pub fn total_size(&self) -> u64 {
        self.files.values().map(|b| b.len() as u64).sum()
    }

    /// Look up a file's content directly.
    pub fn get(&self, path: &AssetPath) -> Option<&Bytes> {
        self.files.get(path)
    }

    /// Iterate over all files in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&AssetPath, &Bytes)> {
        self.files.iter()
    }

    /// Whether `path` is a directory (has at least one file beneath it).
    pub fn is_dir(&self, path: &AssetPath) -> bool {
        self.dirs.contains_key(path)
    }
}

impl FileSystem for AssetSet {
    fn stat(&self, path: &AssetPath) -> Result<Option<Metadata>, Error> {
        if let Some(contents) = self.files.get(path) {
            return Ok(Some(Metadata::file(path, contents.len() as u64)));
        }
        if self.is_dir(path) {
            return Ok(Some(Metadata::directory(path)));
        }
        Ok(None)
    }

    fn read_file(&self, path: &AssetPath) -> Result<Option<Bytes>, Error> {
        if let Some(contents) = self.files.get(path) {
            return Ok(Some(contents.clone()));
        }
        if self.is_dir(path) {
            return Err(Error::IsADirectory { path: path.clone() });
        }
        Ok(None)
    }

    fn read_dir(&self, path: &AssetPath) -> Result<Option<Vec<DirEntry>>, Error> {
        if let Some(children) = self.dirs.get(path) {
            let entries = children
                .iter()
                .map(|(name, kind)| DirEntry {
                    name: name.clone(),
                    kind: *kind,
                })
                .collect();
            return Ok(Some(entries));
        }
        if self.files.contains_key(path) {
            return Err(Error::NotADirectory { path: path.clone() });
        }
        Ok(None)
    }
}

/// Collects files, then freezes them into an [`AssetSet`].
#[derive(Debug, Default)]
pub struct AssetSetBuilder {
    files: BTreeMap<AssetPath, Bytes>,
}

impl AssetSetBuilder {
    /// Add or replace a file.
    pub fn insert(&mut self, path: AssetPath, contents: impl Into<Bytes>) {
        self.files.insert(path, contents.into());
    }

    /// Chaining form of [`insert`](Self::insert).
    #[must_use]
    pub fn file(mut self, path: AssetPath, contents: impl Into<Bytes>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Freeze the collected files.
    ///
    /// Fails with [`Error::NotADirectory`] if a file was inserted at a path
    /// that another file needs as a directory (e.g. both `a` and `a/b`),
    /// and with [`Error::IsADirectory`] for a file at the root.
    pub fn build(self) -> Result<AssetSet, Error> {
        if self.files.contains_key(&AssetPath::root()) {
            return Err(Error::IsADirectory {
                path: AssetPath::root(),
            });
        }
        for path in self.files.keys() {
            let mut ancestor = path.parent();
            while let Some(dir) = ancestor {
                if self.files.contains_key(&dir) {
                    return Err(Error::NotADirectory { path: dir });
                }
                ancestor = dir.parent();
            }
        }
        Ok(self.build_unchecked())
    }

    fn build_unchecked(self) -> AssetSet {
        let mut dirs: BTreeMap<AssetPath, BTreeMap<String, FileKind>> = BTreeMap::new();
        dirs.insert(AssetPath::root(), BTreeMap::new());

        for path in self.files.keys() {
            let mut child = path.clone();
            let mut kind = FileKind::File;
            while let Some(parent) = child.parent() {
                if let Some(name) = child.file_name() {
                    dirs.entry(parent.clone())
                        .or_default()
                        .insert(name.to_string(), kind);
                }
                child = parent;
                kind = FileKind::Directory;
            }
        }

        AssetSet {
            files: self.files,
            dirs,
        }
    }
}
