// src/error.rs

//! Error taxonomy for the descriptor
//!
//! Two failure families exist: dependency-resolution failures (the manifest
//! cannot be read or parsed) and packaging-toolchain failures (the toolchain
//! cannot be launched or dies abnormally). Nothing is caught or translated
//! inside the crate; every error propagates to the process boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read dependency manifest {path}: {source}")]
    ManifestRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dependency manifest {path}: {source}")]
    ManifestParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read descriptor config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse descriptor config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode package metadata: {0}")]
    MetadataEncode(#[from] serde_json::Error),

    #[error("failed to launch packaging toolchain {command}: {source}")]
    ToolchainSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("i/o error while running packaging toolchain {command}: {source}")]
    ToolchainIo {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("packaging toolchain {0} was terminated by a signal")]
    ToolchainKilled(String),
}

/// Result type for descriptor operations
pub type Result<T> = std::result::Result<T, Error>;
