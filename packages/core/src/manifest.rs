//! A serializable listing of every file a filesystem serves.

use serde::Serialize;

use crate::walk::walk;
use crate::{AssetPath, Error, FileSystem};

/// One file in a [`Manifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub path: String,
    pub size: u64,
    pub content_type: &'static str,
}

/// Every file reachable from the root of a filesystem, in path order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub files: Vec<ManifestEntry>,
    pub total_size: u64,
}

impl Manifest {
    /// Walk `fs` and record each file.
    pub fn build<F: FileSystem + ?Sized>(fs: &F) -> Result<Self, Error> {
        let files: Vec<ManifestEntry> = walk(fs, &AssetPath::root())?
            .into_iter()
            .filter(|(_, meta)| meta.is_file())
            .map(|(path, meta)| ManifestEntry {
                path: path.to_string(),
                size: meta.size,
                content_type: meta.content_type.unwrap_or(crate::mime::OCTET_STREAM),
            })
            .collect();
        let total_size = files.iter().map(|f| f.size).sum();
        Ok(Manifest { files, total_size })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&ManifestEntry> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
