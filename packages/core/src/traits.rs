//! The FileSystem trait: open, list and stat by path.

use std::sync::Arc;

use bytes::Bytes;

use crate::{AssetPath, DirEntry, Error, File, Metadata, SubView};

/// Read-only access to a tree of files addressed by [`AssetPath`].
///
/// Every method takes `&self`: implementations are immutable once built,
/// so one filesystem can be shared by any number of readers.
///
/// # Returns
///
/// * `Ok(None)` - Nothing exists at the path.
/// * `Ok(Some(_))` - The file, listing or metadata.
/// * `Err(Error)` - The path exists but the operation does not apply to
///   it (e.g. listing a file).
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn FileSystem>`.
pub trait FileSystem: Send + Sync {
    /// Get metadata for a file or directory.
    fn stat(&self, path: &AssetPath) -> Result<Option<Metadata>, Error>;

    /// Read a whole file.
    ///
    /// Fails with [`Error::IsADirectory`] if `path` is a directory.
    fn read_file(&self, path: &AssetPath) -> Result<Option<Bytes>, Error>;

    /// List a directory, sorted by name.
    ///
    /// Fails with [`Error::NotADirectory`] if `path` is a file.
    fn read_dir(&self, path: &AssetPath) -> Result<Option<Vec<DirEntry>>, Error>;

    /// Open a file for reading.
    fn open(&self, path: &AssetPath) -> Result<Option<File>, Error> {
        let Some(metadata) = self.stat(path)? else {
            return Ok(None);
        };
        if metadata.is_dir() {
            return Err(Error::IsADirectory { path: path.clone() });
        }
        Ok(self
            .read_file(path)?
            .map(|contents| File::new(metadata, contents)))
    }

    /// Check whether anything exists at `path`.
    fn exists(&self, path: &AssetPath) -> Result<bool, Error> {
        Ok(self.stat(path)?.is_some())
    }

    /// A view of the directory `dir`, with `dir` stripped from every path.
    ///
    /// Fails with [`Error::Mapping`] if `dir` is not a directory.
    fn sub(self, dir: &AssetPath) -> Result<SubView<Self>, Error>
    where
        Self: Sized,
    {
        SubView::new(self, dir.clone())
    }
}

// Blanket implementations for references and smart pointers

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn stat(&self, path: &AssetPath) -> Result<Option<Metadata>, Error> {
        (**self).stat(path)
    }

    fn read_file(&self, path: &AssetPath) -> Result<Option<Bytes>, Error> {
        (**self).read_file(path)
    }

    fn read_dir(&self, path: &AssetPath) -> Result<Option<Vec<DirEntry>>, Error> {
        (**self).read_dir(path)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for Box<T> {
    fn stat(&self, path: &AssetPath) -> Result<Option<Metadata>, Error> {
        self.as_ref().stat(path)
    }

    fn read_file(&self, path: &AssetPath) -> Result<Option<Bytes>, Error> {
        self.as_ref().read_file(path)
    }

    fn read_dir(&self, path: &AssetPath) -> Result<Option<Vec<DirEntry>>, Error> {
        self.as_ref().read_dir(path)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for Arc<T> {
    fn stat(&self, path: &AssetPath) -> Result<Option<Metadata>, Error> {
        self.as_ref().stat(path)
    }

    fn read_file(&self, path: &AssetPath) -> Result<Option<Bytes>, Error> {
        self.as_ref().read_file(path)
    }

    fn read_dir(&self, path: &AssetPath) -> Result<Option<Vec<DirEntry>>, Error> {
        self.as_ref().read_dir(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{path, FileKind};

    /// A filesystem holding exactly one file at `greeting.txt`.
    #[derive(Debug)]
    struct OneFile;

    impl FileSystem for OneFile {
        fn stat(&self, path: &AssetPath) -> Result<Option<Metadata>, Error> {
            Ok(if path.is_root() {
                Some(Metadata::directory(path))
            } else if path == &path!("greeting.txt") {
                Some(Metadata::file(path, 5))
            } else {
                None
            })
        }

        fn read_file(&self, path: &AssetPath) -> Result<Option<Bytes>, Error> {
            if path.is_root() {
                return Err(Error::IsADirectory { path: path.clone() });
            }
            Ok((path == &path!("greeting.txt")).then(|| Bytes::from_static(b"hello")))
        }

        fn read_dir(&self, path: &AssetPath) -> Result<Option<Vec<DirEntry>>, Error> {
            if path.is_root() {
                Ok(Some(vec![DirEntry {
                    name: "greeting.txt".to_string(),
                    kind: FileKind::File,
                }]))
            } else if path == &path!("greeting.txt") {
                Err(Error::NotADirectory { path: path.clone() })
            } else {
                Ok(None)
            }
        }
    }

    #[test]
    fn open_reads_through() {
        let file = OneFile.open(&path!("greeting.txt")).unwrap().unwrap();
        assert_eq!(file.metadata().name, "greeting.txt");
        assert_eq!(file.contents(), &Bytes::from_static(b"hello"));
    }

    #[test]
    fn open_missing_is_none() {
        assert!(OneFile.open(&path!("missing.txt")).unwrap().is_none());
        assert!(!OneFile.exists(&path!("missing.txt")).unwrap());
        assert!(OneFile.exists(&AssetPath::root()).unwrap());
    }

    #[test]
    fn open_directory_fails() {
        let err = OneFile.open(&AssetPath::root()).unwrap_err();
        assert!(matches!(err, Error::IsADirectory { .. }));
    }

    #[test]
    fn object_safety_works() {
        let boxed: Box<dyn FileSystem> = Box::new(OneFile);
        assert!(boxed.exists(&path!("greeting.txt")).unwrap());

        let shared: Arc<dyn FileSystem> = Arc::new(OneFile);
        let listing = shared.read_dir(&AssetPath::root()).unwrap().unwrap();
        assert_eq!(listing.len(), 1);

        let by_ref: &dyn FileSystem = &OneFile;
        assert!(by_ref.read_file(&path!("greeting.txt")).unwrap().is_some());
    }

    #[test]
    fn sub_requires_directory() {
        let err = OneFile.sub(&path!("greeting.txt")).unwrap_err();
        assert!(err.is_mapping());

        let err = OneFile.sub(&path!("nope")).unwrap_err();
        assert!(err.is_mapping());
    }
}
