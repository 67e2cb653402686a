//! StaticAssetProvider: hands out views rooted at the bundle's virtual root.

use std::sync::Arc;

use include_dir::{include_dir, Dir};
use lazy_static::lazy_static;

use assetfs_core::{AssetPath, AssetSet, Error, FileSystem, SubView};

use crate::config::{AssetSource, ProviderConfig, DEFAULT_ROOT};

/// A read-only view of the bundle with the virtual root stripped.
pub type StaticView = SubView<Arc<AssetSet>>;

// Embeds the parent of `static/`, so every key keeps its `static/` prefix.
static EMBED_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/embed");

lazy_static! {
    static ref EMBEDDED: Arc<AssetSet> = Arc::new(AssetSet::from_include_dir(&EMBED_DIR));
}

/// The compiled-in bundle, indexed on first use.
pub fn embedded_assets() -> Arc<AssetSet> {
    Arc::clone(&EMBEDDED)
}

/// Pairs an asset bundle with the directory views are rooted at.
#[derive(Debug, Clone)]
pub struct StaticAssetProvider {
    assets: Arc<AssetSet>,
    root: AssetPath,
}

impl StaticAssetProvider {
    pub fn new(assets: Arc<AssetSet>, root: AssetPath) -> Self {
        Self { assets, root }
    }

    /// The compiled-in bundle, rooted at `static`.
    pub fn embedded() -> Self {
        Self::new(embedded_assets(), assetfs_core::path!(DEFAULT_ROOT))
    }

    /// Build a provider from configuration.
    ///
    /// A directory source is read into memory here, once.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, Error> {
        let root = config.root_path()?;
        let assets = match &config.source {
            AssetSource::Embedded => embedded_assets(),
            AssetSource::Directory { path } => Arc::new(AssetSet::from_directory(path)?),
        };
        Ok(Self::new(assets, root))
    }

    /// Get a view rooted at the virtual root.
    ///
    /// Fails with [`Error::Mapping`] if the bundle has no files under the
    /// root. That only happens when the bundle was built wrong, so callers
    /// should treat it as fatal at startup.
    pub fn view(&self) -> Result<StaticView, Error> {
        let view = self.assets.clone().sub(&self.root)?;
        log::debug!(
            "Serving {} assets from virtual root '{}'",
            self.assets.len(),
            self.root
        );
        Ok(view)
    }

    pub fn assets(&self) -> &Arc<AssetSet> {
        &self.assets
    }

    pub fn root(&self) -> &AssetPath {
        &self.root
    }
}

/// Get a view of the compiled-in bundle with `static/` stripped.
///
/// ```rust
/// use assetfs_core::{FileSystem, path};
///
/// let view = assetfs_static::static_view().unwrap();
/// assert!(view.exists(&path!("index.html")).unwrap());
/// ```
pub fn static_view() -> Result<StaticView, Error> {
    StaticAssetProvider::embedded().view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetfs_core::{path, Bytes};

    fn provider(files: &[(&str, &'static [u8])]) -> StaticAssetProvider {
        let mut builder = AssetSet::builder();
        for &(path, data) in files {
            builder.insert(AssetPath::parse(path).unwrap(), Bytes::from_static(data));
        }
        StaticAssetProvider::new(Arc::new(builder.build().unwrap()), path!("static"))
    }

    #[test]
    fn view_strips_root() {
        let provider = provider(&[
            ("static/index.html", b"<html></html>"),
            ("static/js/app.js", b"run();"),
        ]);
        let view = provider.view().unwrap();
        assert_eq!(
            view.read_file(&path!("js/app.js")).unwrap(),
            Some(Bytes::from_static(b"run();"))
        );
        assert_eq!(view.prefix(), &path!("static"));
    }

    #[test]
    fn missing_root_fails() {
        let provider = provider(&[("public/index.html", b"<html></html>")]);
        let err = provider.view().unwrap_err();
        assert!(matches!(err, Error::Mapping { root } if root == path!("static")));
    }

    #[test]
    fn empty_bundle_fails() {
        let provider = provider(&[]);
        assert!(provider.view().unwrap_err().is_mapping());
    }

    #[test]
    fn misnamed_root_fails() {
        // A file named like the root is not a directory.
        let provider = provider(&[("static", b"not a dir")]);
        assert!(provider.view().unwrap_err().is_mapping());
    }

    #[test]
    fn embedded_bundle_has_static_root() {
        let assets = embedded_assets();
        assert!(!assets.is_empty());
        assert!(assets.iter().all(|(path, _)| path.has_prefix(&path!("static"))));
        assert!(Arc::ptr_eq(&assets, &embedded_assets()));
    }

    #[test]
    fn from_config_embedded() {
        let provider = StaticAssetProvider::from_config(&ProviderConfig::default()).unwrap();
        assert!(Arc::ptr_eq(provider.assets(), &embedded_assets()));
        assert_eq!(provider.root(), &path!("static"));
    }

    #[test]
    fn from_config_bad_root() {
        let config = ProviderConfig {
            root: "static/../..".to_string(),
            ..ProviderConfig::default()
        };
        let err = StaticAssetProvider::from_config(&config).unwrap_err();
        assert!(matches!(err, Error::Path(_)));
    }
}
