// src/fc_manifest.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, bail, Context, Result};
use toml::Value;
use tracing::debug;

use crate::fc_config::PartialConfig;
use crate::fc_types::FeatureMap;

/// Table under `[package.metadata]` holding per-crate settings.
pub const METADATA_TABLE: &str = "feature-combos";

/// Locate the Cargo.toml by invoking `cargo locate-project --message-format plain`.
/// If `workspace` is true, the `--workspace` flag is added so that the manifest
/// for the workspace root is returned.
pub fn locate_manifest(workspace: bool) -> Result<PathBuf> {
    let mut args = vec!["locate-project", "--message-format", "plain"];
    if workspace {
        args.push("--workspace");
    }

    let output = Command::new("cargo")
        .args(&args)
        .output()
        .context("failed to run cargo locate-project")?;
    if !output.status.success() {
        bail!(
            "cargo locate-project failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let manifest = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if manifest.is_empty() {
        bail!("No Cargo.toml found");
    }
    Ok(PathBuf::from(manifest))
}

/// Picks the manifest to read: an explicit path wins, then `cargo locate-project`
/// when `locate` is set, otherwise `Cargo.toml` in the current directory.
pub fn resolve_manifest_path(explicit: Option<&Path>, locate: bool) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None if locate => locate_manifest(false),
        None => Ok(PathBuf::from("Cargo.toml")),
    }
}

/// Reads and parses the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Value> {
    debug!("reading manifest {}", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    contents
        .parse::<Value>()
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Extracts the `[features]` table. Every entry must be an array of strings.
pub fn feature_map(manifest: &Value) -> Result<FeatureMap> {
    let features = manifest
        .get("features")
        .ok_or_else(|| anyhow!("manifest has no [features] table"))?
        .as_table()
        .ok_or_else(|| anyhow!("`features` is not a table"))?;

    let mut map = FeatureMap::new();
    for (name, deps) in features {
        let deps = string_array(deps).with_context(|| format!("feature `{}`", name))?;
        map.insert(name.clone(), deps.into_iter().collect());
    }
    debug!("declared features: {:?}", map.keys().collect::<Vec<_>>());
    Ok(map)
}

/// Reads `[package.metadata.feature-combos]`, if present.
///
/// ```
/// use cargo_fc::fc_manifest::metadata_config;
///
/// let manifest: toml::Value = r#"
///     [package.metadata.feature-combos]
///     require = ["sqlite", "postgres"]
/// "#
/// .parse()
/// .unwrap();
/// let layer = metadata_config(&manifest).unwrap().unwrap();
/// assert_eq!(layer.require.unwrap(), ["sqlite", "postgres"]);
/// assert!(layer.exclude.is_none());
/// ```
pub fn metadata_config(manifest: &Value) -> Result<Option<PartialConfig>> {
    let table = match manifest
        .get("package")
        .and_then(|p| p.get("metadata"))
        .and_then(|m| m.get(METADATA_TABLE))
    {
        Some(table) => table,
        None => return Ok(None),
    };
    if !table.is_table() {
        bail!("[package.metadata.{}] is not a table", METADATA_TABLE);
    }

    let list = |key: &str| -> Result<Option<Vec<String>>> {
        table
            .get(key)
            .map(|value| {
                string_array(value)
                    .with_context(|| format!("[package.metadata.{}] `{}`", METADATA_TABLE, key))
            })
            .transpose()
    };
    Ok(Some(PartialConfig {
        exclude: list("exclude")?,
        require: list("require")?,
    }))
}

fn string_array(value: &Value) -> Result<Vec<String>> {
    let array = value
        .as_array()
        .ok_or_else(|| anyhow!("expected an array of strings, found {}", value.type_str()))?;
    array
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| anyhow!("expected a string, found {}", item.type_str()))
        })
        .collect()
}
