//! Metadata, directory entries and open file handles.

use std::io::{self, Cursor, Read, Seek, SeekFrom};

use bytes::Bytes;
use serde::Serialize;

use crate::mime;
use crate::path::AssetPath;

/// What a path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Directory,
}

/// Information about a file or directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Last path component, or `"."` for the root.
    pub name: String,
    pub kind: FileKind,
    /// Size in bytes. Always 0 for directories.
    pub size: u64,
    /// Guessed from the extension. `None` for directories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<&'static str>,
}

impl Metadata {
    pub(crate) fn file(path: &AssetPath, size: u64) -> Self {
        Self::new(path, FileKind::File, size)
    }

    pub(crate) fn directory(path: &AssetPath) -> Self {
        Self::new(path, FileKind::Directory, 0)
    }

    fn new(path: &AssetPath, kind: FileKind, size: u64) -> Self {
        Metadata {
            name: path.file_name().unwrap_or(".").to_string(),
            kind,
            size,
            content_type: (kind == FileKind::File).then(|| mime::content_type_for(path)),
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == FileKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Directory
    }
}

/// A single entry returned by `read_dir`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DirEntry {
    pub name: String,
    pub kind: FileKind,
}

impl DirEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Directory
    }
}

/// An open, read-only file.
///
/// Reading advances an internal position, so `File` can be handed to
/// anything that takes `io::Read`. The underlying bytes are shared, never
/// copied.
#[derive(Debug, Clone)]
pub struct File {
    metadata: Metadata,
    cursor: Cursor<Bytes>,
}

impl File {
    pub(crate) fn new(metadata: Metadata, contents: Bytes) -> Self {
        File {
            metadata,
            cursor: Cursor::new(contents),
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The whole file, regardless of the read position.
    pub fn contents(&self) -> &Bytes {
        self.cursor.get_ref()
    }

    pub fn into_bytes(self) -> Bytes {
        self.cursor.into_inner()
    }

    pub fn position(&self) -> u64 {
        self.cursor.position()
    }
}

impl Read for File {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl Seek for File {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}
