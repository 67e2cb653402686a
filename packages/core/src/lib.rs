//! assetfs core: read-only filesystems over immutable asset bundles.
//!
//! - `AssetPath`: validated relative path; `..` and friends never parse
//! - `AssetSet`: immutable path → bytes map, built once per process
//! - `FileSystem`: open, list and stat by path
//! - `SubView`: a filesystem re-rooted at one of its directories
//!
//! # Example
//!
//! ```rust
//! use assetfs_core::{AssetSet, Bytes, FileSystem, SubView, path};
//!
//! let assets = AssetSet::builder()
//!     .file(path!("static/index.html"), Bytes::from_static(b"<html></html>"))
//!     .build()
//!     .unwrap();
//!
//! let view = SubView::new(assets, path!("static")).unwrap();
//! assert!(view.read_file(&path!("index.html")).unwrap().is_some());
//! ```

pub use bytes::Bytes;

mod asset_set;
mod error;
mod file;
pub mod manifest;
pub mod mime;
mod path;
mod sub_view;
mod traits;
pub mod walk;

pub use asset_set::{AssetSet, AssetSetBuilder};
pub use error::Error;
pub use file::{DirEntry, File, FileKind, Metadata};
pub use manifest::{Manifest, ManifestEntry};
pub use path::{AssetPath, PathError};
pub use sub_view::SubView;
pub use traits::FileSystem;
pub use walk::walk;
