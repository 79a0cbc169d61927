// src/config.rs

//! Descriptor configuration
//!
//! Optional TOML file naming the toolchain command and the dependency
//! manifest. A missing file means defaults; a malformed file is fatal.
//!
//! # Example pkgdesc.toml
//!
//! ```toml
//! toolchain = "mkpkg"
//! manifest = "dependencies.toml"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dependencies::DEFAULT_MANIFEST_PATH;
use crate::error::{Error, Result};

/// Default config file path, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "pkgdesc.toml";

const DEFAULT_TOOLCHAIN: &str = "mkpkg";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DescriptorConfig {
    /// Packaging toolchain command to delegate to
    #[serde(default = "default_toolchain")]
    pub toolchain: String,
    /// Dependency manifest path
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
}

fn default_toolchain() -> String {
    DEFAULT_TOOLCHAIN.to_string()
}

fn default_manifest() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST_PATH)
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            toolchain: default_toolchain(),
            manifest: default_manifest(),
        }
    }
}

impl DescriptorConfig {
    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| Error::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }
}
