#![doc = include_str!("../README.md")]

pub mod fc_cli;
pub use fc_cli::Cli;
pub mod fc_combos;
pub use fc_combos::enumerate_combinations;
pub mod fc_config;
pub use fc_config::{ComboConfig, PartialConfig};
pub mod fc_features;
pub mod fc_manifest;
pub use fc_manifest::{load_manifest, locate_manifest};
pub mod fc_output;
pub use fc_output::print_combinations;
pub mod fc_types;
pub use fc_types::*;
