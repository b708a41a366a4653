// src/fc_config.rs
use std::collections::BTreeSet;

use anyhow::{bail, Result};

/// Features that exist for packaging only and never show up in `#[cfg]`s.
pub const DEFAULT_EXCLUDE: &[&str] = &["full", "default"];

/// At least one of these has to be enabled for the crate to do anything useful.
pub const DEFAULT_REQUIRE: &[&str] = &["maxminddb", "ripe-geo"];

/// Resolved settings for one enumeration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboConfig {
    /// Administrative features removed before enumeration.
    pub exclude: BTreeSet<String>,
    /// Every combination must contain at least one of these. Empty means no constraint.
    pub require: BTreeSet<String>,
}

/// One configuration layer. `None` leaves the value to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialConfig {
    pub exclude: Option<Vec<String>>,
    pub require: Option<Vec<String>>,
}

impl Default for ComboConfig {
    fn default() -> Self {
        ComboConfig {
            exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            require: DEFAULT_REQUIRE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ComboConfig {
    /// Applies `layer` on top of `self`. Each list set in `layer` replaces ours as a whole.
    ///
    /// A blank name is an error; an empty list is how a group gets cleared.
    pub fn merge(mut self, layer: &PartialConfig) -> Result<Self> {
        if let Some(exclude) = &layer.exclude {
            self.exclude = to_set("exclude", exclude)?;
        }
        if let Some(require) = &layer.require {
            self.require = to_set("require", require)?;
        }
        Ok(self)
    }

    /// Builds the final config: defaults, then each layer in order of increasing precedence.
    pub fn layered<'a, I>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a PartialConfig>,
    {
        layers
            .into_iter()
            .try_fold(ComboConfig::default(), |config, layer| config.merge(layer))
    }
}

fn to_set(list: &str, names: &[String]) -> Result<BTreeSet<String>> {
    names
        .iter()
        .map(|name| match name.trim() {
            "" => bail!("`{}` contains a blank feature name", list),
            name => Ok(name.to_string()),
        })
        .collect()
}
