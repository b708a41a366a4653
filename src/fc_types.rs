// src/fc_types.rs
use std::collections::{BTreeMap, BTreeSet};

/// Feature name -> the labels listed for it in the manifest's `[features]` table.
pub type FeatureMap = BTreeMap<String, BTreeSet<String>>;

/// One test configuration: the set of features enabled together.
pub type Combination = BTreeSet<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `a,b,c` per line.
    #[default]
    Plain,
    /// `--no-default-features --features a,b,c` per line.
    Cargo,
    /// A single JSON array of arrays.
    Json,
}
