//! Provider configuration.
//!
//! Configurations are JSON objects like:
//! ```json
//! {"source": {"type": "embedded"}, "root": "static"}
//! {"source": {"type": "directory", "path": "/opt/app/assets"}}
//! ```
//! Both fields are optional; the default is the embedded bundle rooted at
//! `static`.

use serde::{Deserialize, Serialize};

use assetfs_core::{AssetPath, Error};

/// The virtual root every bundle is expected to carry.
pub const DEFAULT_ROOT: &str = "static";

/// Where the asset bundle comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AssetSource {
    /// The bundle compiled into this binary.
    #[default]
    Embedded,
    /// A directory read once at startup. It must contain the root
    /// directory (e.g. `<path>/static/index.html`).
    Directory { path: String },
}

/// Configuration for a [`StaticAssetProvider`](crate::StaticAssetProvider).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderConfig {
    #[serde(default)]
    pub source: AssetSource,
    #[serde(default = "default_root")]
    pub root: String,
}

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            source: AssetSource::default(),
            root: default_root(),
        }
    }
}

impl ProviderConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The configured root as a validated path.
    pub fn root_path(&self) -> Result<AssetPath, Error> {
        Ok(AssetPath::parse(&self.root)?)
    }
}
