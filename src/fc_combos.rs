// src/fc_combos.rs

use std::collections::BTreeSet;

use anyhow::{bail, Result};
use tracing::{debug, warn};

use crate::fc_config::ComboConfig;
use crate::fc_types::{Combination, FeatureMap};

/// Above this many selectable features the power set stops being "small"
/// and a warning is logged.
pub const MAX_SELECTABLE_FEATURES: usize = 24;

/// Width of the subset mask; [`subsets`] cannot index more names than this.
pub const MAX_MASK_FEATURES: usize = u64::BITS as usize;

/// Returns true when `dep` names another feature of the same manifest.
///
/// `dep:foo` enables an optional dependency and `foo/bar` (or `foo?/bar`)
/// enables a feature of a dependency; neither implies one of our own features.
///
/// ```
/// use cargo_fc::fc_combos::is_feature_dependency;
///
/// assert!(is_feature_dependency("ripe-geo"));
/// assert!(!is_feature_dependency("dep:maxminddb"));
/// assert!(!is_feature_dependency("tokio/rt-multi-thread"));
/// ```
pub fn is_feature_dependency(dep: &str) -> bool {
    !dep.starts_with("dep:") && !dep.contains('/')
}

/// Drops the excluded features and keeps only dependencies that are
/// themselves selectable features.
pub fn prepare_features(features: &FeatureMap, exclude: &BTreeSet<String>) -> FeatureMap {
    for name in exclude {
        if !features.contains_key(name) {
            debug!("excluded feature {:?} is not declared, skipping", name);
        }
    }

    features
        .iter()
        .filter(|(name, _)| !exclude.contains(*name))
        .map(|(name, deps)| {
            let deps = deps
                .iter()
                .filter(|dep| is_feature_dependency(dep))
                .filter(|dep| features.contains_key(*dep) && !exclude.contains(*dep))
                .cloned()
                .collect();
            (name.clone(), deps)
        })
        .collect()
}

/// Every subset of `names`, full set first and the empty set last.
///
/// Subset `mask` holds `names[i]` when bit `n - 1 - i` is set, so the first
/// name is the most significant one.
///
/// # Panics
///
/// Panics if `names` holds more than [`MAX_MASK_FEATURES`] entries.
pub fn subsets(names: &[String]) -> impl Iterator<Item = Combination> + '_ {
    let n = names.len();
    assert!(
        n <= MAX_MASK_FEATURES,
        "{} names do not fit a {}-bit subset mask",
        n,
        MAX_MASK_FEATURES
    );
    let full: u64 = if n == 0 { 0 } else { u64::MAX >> (64 - n) };
    (0..=full).rev().map(move |mask| {
        names
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1u64 << (n - 1 - i)) != 0)
            .map(|(_, name)| name.clone())
            .collect()
    })
}

/// True when `combo` holds at least one feature of the required group.
/// An empty group places no constraint.
pub fn satisfies_required(combo: &Combination, required: &BTreeSet<String>) -> bool {
    required.is_empty() || !combo.is_disjoint(required)
}

/// Removes every member implied by another member.
///
/// The implied set is computed from the membership at the start, so a
/// feature removed here still contributes its own dependencies.
pub fn reduce_redundant(combo: &Combination, features: &FeatureMap) -> Combination {
    let implied: BTreeSet<&String> = combo
        .iter()
        .filter_map(|name| features.get(name))
        .flatten()
        .collect();
    combo
        .iter()
        .filter(|name| !implied.contains(name))
        .cloned()
        .collect()
}

/// The features `combo` turns on once cargo follows every implied feature.
///
/// This is the set the required-group check was made against before
/// [`reduce_redundant`] dropped the implied members.
pub fn expand_implied(combo: &Combination, features: &FeatureMap) -> Combination {
    let mut enabled = combo.clone();
    let mut pending: Vec<&String> = combo.iter().collect();
    while let Some(name) = pending.pop() {
        for dep in features.get(name).into_iter().flatten() {
            if enabled.insert(dep.clone()) {
                pending.push(dep);
            }
        }
    }
    enabled
}

/// Members joined by `,`, the form printed and sorted on.
pub fn display_key(combo: &Combination) -> String {
    combo.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

/// Computes the deduplicated combinations for `features`, sorted by [`display_key`].
pub fn enumerate_combinations(
    features: &FeatureMap,
    config: &ComboConfig,
) -> Result<Vec<Combination>> {
    let features = prepare_features(features, &config.exclude);
    let names: Vec<String> = features.keys().cloned().collect();
    if names.len() > MAX_MASK_FEATURES {
        bail!(
            "{} selectable features cannot be enumerated (at most {}); exclude some of them",
            names.len(),
            MAX_MASK_FEATURES
        );
    }
    if names.len() > MAX_SELECTABLE_FEATURES {
        warn!(
            "{} selectable features produce 2^{} subsets, this may take a while",
            names.len(),
            names.len()
        );
    }
    if config.require.is_empty() {
        warn!("required feature group is empty, every subset is kept");
    } else if config.require.iter().all(|name| !features.contains_key(name)) {
        warn!(
            "none of the required features {:?} is declared, no combination can qualify",
            config.require
        );
    }
    debug!("enumerating subsets of {:?}", names);

    let mut seen = BTreeSet::new();
    let mut considered = 0usize;
    for combo in subsets(&names) {
        if !satisfies_required(&combo, &config.require) {
            continue;
        }
        considered += 1;
        seen.insert(reduce_redundant(&combo, &features));
    }
    debug!(
        "{} subsets qualified, {} distinct combinations after reduction",
        considered,
        seen.len()
    );

    let mut combos: Vec<(String, Combination)> = seen
        .into_iter()
        .map(|combo| (display_key(&combo), combo))
        .collect();
    combos.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(combos.into_iter().map(|(_, combo)| combo).collect())
}
