use std::path::PathBuf;

use clap::Parser;

use crate::fc_config::PartialConfig;
use crate::fc_types::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "cargo-fc is for Feature Combos.", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version and feature flags in JSON format.
    #[arg(long, short = 'v')]
    pub version: bool,

    #[arg(long, value_name = "PATH", help = "Path to Cargo.toml (default: ./Cargo.toml).")]
    pub manifest_path: Option<PathBuf>,

    #[arg(
        long,
        conflicts_with = "manifest_path",
        help = "Find the manifest with `cargo locate-project`."
    )]
    pub locate: bool,

    #[arg(
        long,
        value_name = "NAME",
        value_delimiter = ',',
        help = "Feature that never takes part in a combination (repeatable)."
    )]
    pub exclude: Vec<String>,

    #[arg(
        long,
        value_name = "NAME",
        value_delimiter = ',',
        help = "At least one of these features must be in every combination (repeatable)."
    )]
    pub require: Vec<String>,

    #[arg(
        long,
        conflicts_with = "require",
        help = "Keep every combination, with or without a required feature."
    )]
    pub no_require: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

impl Cli {
    /// The command-line configuration layer. Lists not given on the command line are left unset.
    pub fn config_layer(&self) -> PartialConfig {
        PartialConfig {
            exclude: (!self.exclude.is_empty()).then(|| self.exclude.clone()),
            require: if self.no_require {
                Some(Vec::new())
            } else {
                (!self.require.is_empty()).then(|| self.require.clone())
            },
        }
    }
}

/// Drops the subcommand name cargo inserts when run as `cargo fc`.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args: Vec<String> = args.into_iter().collect();
    if args.len() > 1 && args[1] == "fc" {
        args.remove(1);
    }
    args
}
