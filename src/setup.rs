// src/setup.rs

//! Delegation into the packaging toolchain
//!
//! The descriptor never builds, stages, or installs anything itself. The
//! [`Setup`] trait is the single seam to the toolchain that does; the shipped
//! implementation spawns the configured command and reports its exit status
//! back unchanged.

use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::metadata::PackageMetadata;

/// External packaging entry point.
///
/// One method: hand over the finished metadata record and the caller's
/// command-line arguments, get back the toolchain's exit status. The
/// descriptor does not inspect or branch on that status.
pub trait Setup {
    fn run(&self, metadata: &PackageMetadata, args: &[String]) -> Result<i32>;
}

/// [`Setup`] implementation that spawns the packaging toolchain as a child
/// process.
///
/// The metadata record goes to the child's stdin as JSON and the caller's
/// arguments pass through verbatim, so the descriptor itself persists nothing
/// to disk. Exit codes are returned as-is; death by signal is an error.
pub struct ToolchainSetup {
    command: String,
}

impl ToolchainSetup {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Setup for ToolchainSetup {
    fn run(&self, metadata: &PackageMetadata, args: &[String]) -> Result<i32> {
        let encoded = serde_json::to_vec(metadata)?;

        info!("delegating to packaging toolchain: {}", self.command);
        debug!("forwarding {} argument(s)", args.len());

        let mut child = Command::new(&self.command)
            .args(args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| Error::ToolchainSpawn {
                command: self.command.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A toolchain that exits without draining stdin is not an error
            // here; its exit status is.
            if let Err(source) = stdin.write_all(&encoded) {
                if source.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(Error::ToolchainIo {
                        command: self.command.clone(),
                        source,
                    });
                }
            }
        }

        let status = child.wait().map_err(|source| Error::ToolchainIo {
            command: self.command.clone(),
            source,
        })?;
        status
            .code()
            .ok_or_else(|| Error::ToolchainKilled(self.command.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependencies::DependencySet;

    fn metadata() -> PackageMetadata {
        PackageMetadata {
            name: "current".to_string(),
            root_package: "current".to_string(),
            description: "test module".to_string(),
            author: "test".to_string(),
            author_email: "test@example.org".to_string(),
            url: "http://example.org".to_string(),
            keywords: vec![],
            license: "GPL".to_string(),
            dependencies: DependencySet::new(),
        }
    }

    #[test]
    fn test_exit_status_passes_through_unchanged() {
        let ok = ToolchainSetup::new("true");
        assert_eq!(ok.run(&metadata(), &[]).unwrap(), 0);

        let failing = ToolchainSetup::new("false");
        assert_eq!(failing.run(&metadata(), &[]).unwrap(), 1);
    }

    #[test]
    fn test_missing_toolchain_is_a_spawn_error() {
        let setup = ToolchainSetup::new("no-such-toolchain-command");
        let err = setup.run(&metadata(), &[]).unwrap_err();
        assert!(matches!(err, Error::ToolchainSpawn { .. }));
    }

    #[test]
    fn test_metadata_arrives_on_stdin_as_json() {
        // sh reads stdin and exits 0 only if the record mentions the package
        let setup = ToolchainSetup::new("sh");
        let args = vec![
            "-c".to_string(),
            "grep -q '\"name\":\"current\"'".to_string(),
        ];
        assert_eq!(setup.run(&metadata(), &args).unwrap(), 0);
    }
}
