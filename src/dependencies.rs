// src/dependencies.rs

//! Dependency set accumulation
//!
//! An ordered accumulator of the packages required to build the current
//! module, populated from an external manifest and then moved into the
//! metadata record. Resolution proper (version pinning, transitive closure,
//! conflict handling) belongs to the toolchain that consumes the manifest;
//! this module only reads the declaration and registers it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::slice;
use tracing::debug;

use crate::error::{Error, Result};

/// Default manifest file name, looked up next to the descriptor.
pub const DEFAULT_MANIFEST_PATH: &str = "dependencies.toml";

/// One named build requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDep {
    pub name: String,
    /// Source tree location, relative to the repository root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Opaque version string as declared in the manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Ordered accumulator of build requirements.
///
/// Builder-shaped: construct empty, apply registration calls, then move the
/// finished set into [`PackageMetadata`](crate::metadata::PackageMetadata).
/// Iteration order is insertion order. Registering a name that is already
/// present keeps the first entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DependencySet {
    entries: Vec<PackageDep>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one requirement. Idempotent per package name.
    pub fn add(&mut self, dep: PackageDep) {
        if self.contains(&dep.name) {
            debug!("dependency {} already registered, keeping first entry", dep.name);
            return;
        }
        self.entries.push(dep);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|dep| dep.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, PackageDep> {
        self.entries.iter()
    }
}

/// Resolution seam: populates a [`DependencySet`] with the current package's
/// declared requirements.
///
/// The actual resolution machinery behind the manifest is an opaque
/// collaborator; implementations here surface its declarations without
/// interpreting them.
pub trait DependencyResolver {
    /// Construct an empty dependency set.
    fn build_set(&self) -> DependencySet {
        DependencySet::new()
    }

    /// Register the current package as a buildable unit.
    fn register_self(&self, set: &mut DependencySet) -> Result<()>;
}

/// Shape of the on-disk dependency manifest.
#[derive(Debug, Deserialize)]
struct Manifest {
    package: ManifestPackage,
}

#[derive(Debug, Deserialize)]
struct ManifestPackage {
    name: String,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

/// [`DependencyResolver`] backed by a TOML manifest on disk.
pub struct ManifestResolver {
    manifest: PathBuf,
}

impl ManifestResolver {
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
        }
    }
}

impl DependencyResolver for ManifestResolver {
    fn register_self(&self, set: &mut DependencySet) -> Result<()> {
        let raw = fs::read_to_string(&self.manifest).map_err(|source| Error::ManifestRead {
            path: self.manifest.display().to_string(),
            source,
        })?;
        let manifest: Manifest = toml::from_str(&raw).map_err(|source| Error::ManifestParse {
            path: self.manifest.display().to_string(),
            source,
        })?;

        debug!(
            "registering {} from {}",
            manifest.package.name,
            self.manifest.display()
        );
        set.add(PackageDep {
            name: manifest.package.name,
            path: manifest.package.path,
            version: manifest.package.version,
        });
        Ok(())
    }
}
