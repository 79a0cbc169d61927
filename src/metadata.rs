// src/metadata.rs

//! Static package metadata consumed by the packaging toolchain

use serde::Serialize;

use crate::dependencies::DependencySet;

/// Descriptive record for one buildable module.
///
/// Created once from literal values, never mutated, and consumed exactly once
/// by [`Setup::run`](crate::setup::Setup::run). The dependency set must be
/// fully populated before the record is constructed; there is no guard beyond
/// the straight-line order of the descriptor itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageMetadata {
    /// Package name
    pub name: String,
    /// Root package identifier
    pub root_package: String,
    /// One-line description of the module
    pub description: String,
    pub author: String,
    pub author_email: String,
    /// Homepage URL
    pub url: String,
    /// Keyword list, order-preserving
    pub keywords: Vec<String>,
    /// License identifier
    pub license: String,
    /// Build requirements registered before the setup call
    pub dependencies: DependencySet,
}
