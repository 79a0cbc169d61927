// src/lib.rs

//! Package build descriptor
//!
//! Collects the static metadata for one documentation module, registers the
//! module's own dependency requirements from an external manifest, and hands
//! the finished record to an external packaging toolchain. The toolchain and
//! the resolver behind the manifest are collaborators, not part of this crate.
//!
//! # Architecture
//!
//! - `DependencySet`: ordered accumulator of build requirements, fully
//!   populated before the setup call
//! - `PackageMetadata`: immutable record consumed exactly once by setup
//! - `Setup`: the single injected entry point into the packaging toolchain
//! - Errors propagate untranslated to the process boundary; the descriptor
//!   has no recovery or retry of its own

pub mod config;
pub mod dependencies;
pub mod descriptor;
mod error;
pub mod metadata;
pub mod setup;

pub use config::DescriptorConfig;
pub use dependencies::{DependencyResolver, DependencySet, ManifestResolver, PackageDep};
pub use error::{Error, Result};
pub use metadata::PackageMetadata;
pub use setup::{Setup, ToolchainSetup};
