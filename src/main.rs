// src/main.rs

use anyhow::Result;
use clap::Parser;
use pkgdesc::config::{DEFAULT_CONFIG_PATH, DescriptorConfig};
use pkgdesc::dependencies::ManifestResolver;
use pkgdesc::descriptor;
use pkgdesc::setup::ToolchainSetup;
use std::path::Path;
use tracing::info;

#[derive(Parser)]
#[command(name = "pkgdesc")]
#[command(author, version, about = "Build descriptor for the Central Processor documentation module", long_about = None)]
struct Cli {
    /// Arguments forwarded verbatim to the packaging toolchain
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = DescriptorConfig::load(Path::new(DEFAULT_CONFIG_PATH))?;
    info!(
        "describing package {} against manifest {}",
        descriptor::PKG_NAME,
        config.manifest.display()
    );

    let resolver = ManifestResolver::new(config.manifest.clone());
    let setup = ToolchainSetup::new(config.toolchain.clone());

    // The toolchain owns the meaning of the status; pass it along untouched.
    let status = descriptor::run(&resolver, &setup, &cli.args)?;
    std::process::exit(status);
}
