//! # assetfs-static
//!
//! The web terminal's static bundle, compiled into the binary and exposed
//! as a read-only filesystem with the `static/` prefix stripped.
//!
//! ## Layout
//!
//! ```text
//! embed/
//!     static/         # virtual root, never visible through a view
//!         index.html
//!         css/
//!         js/
//! ```
//!
//! ## Example
//!
//! ```rust
//! use assetfs_core::{FileSystem, path};
//!
//! // Fails only if the binary was built without `embed/static/`.
//! let view = assetfs_static::static_view().expect("static assets are embedded");
//!
//! let html = view.read_file(&path!("index.html")).unwrap().unwrap();
//! assert!(html.starts_with(b"<!doctype html>"));
//! ```

pub mod config;
mod provider;

pub use config::{AssetSource, ProviderConfig, DEFAULT_ROOT};
pub use provider::{embedded_assets, static_view, StaticAssetProvider, StaticView};
