//! assetfs: read-only filesystem views over compiled-in static assets.
//!
//! The bundle lives under a virtual root named `static`. [`static_view`]
//! returns a filesystem rooted there, with the prefix stripped from every
//! path, or [`Error::Mapping`] if the binary was built without it.
//!
//! ```rust
//! use assetfs::{static_view, FileSystem, path};
//!
//! let view = static_view().unwrap();
//! let css = view.open(&path!("css/index.css")).unwrap().unwrap();
//! assert_eq!(css.metadata().content_type, Some("text/css; charset=utf-8"));
//! ```

pub use assetfs_core::*;
pub use assetfs_static::{
    embedded_assets, static_view, AssetSource, ProviderConfig, StaticAssetProvider, StaticView,
    DEFAULT_ROOT,
};
