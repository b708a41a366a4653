//! # cargo-fc
//!
//! `cargo-fc` reads the `[features]` table of a Cargo manifest and prints the
//! non-redundant feature combinations to run in a CI test matrix.
//!
//! ## Quick Start
//! ```sh
//! cargo install cargo-fc
//! cargo fc
//! ```

use std::env;

use anyhow::Result;
use cargo_fc::fc_cli::normalize_args;
use cargo_fc::fc_features::version_banner;
use cargo_fc::fc_manifest::{feature_map, metadata_config, resolve_manifest_path};
use cargo_fc::{enumerate_combinations, load_manifest, print_combinations, Cli, ComboConfig};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_from(normalize_args(env::args()));
    debug!("CLI options: {:?}", cli);

    if cli.version {
        println!("{}", version_banner());
        return Ok(());
    }

    let manifest_path = resolve_manifest_path(cli.manifest_path.as_deref(), cli.locate)?;
    let manifest = load_manifest(&manifest_path)?;
    let features = feature_map(&manifest)?;

    let metadata = metadata_config(&manifest)?.unwrap_or_default();
    let config = ComboConfig::layered([&metadata, &cli.config_layer()])?;
    info!(
        "manifest {}: exclude {:?}, require {:?}",
        manifest_path.display(),
        config.exclude,
        config.require
    );

    let combos = enumerate_combinations(&features, &config)?;
    info!("{} combinations", combos.len());
    print_combinations(&combos, cli.format)
}
