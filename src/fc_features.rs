/// Returns a vector of feature flag strings.
/// Enabled features are listed as-is while disabled ones are prefixed with "!".
pub fn get_feature_flags() -> Vec<&'static str> {
    [if cfg!(feature = "uses_serde") {
        "uses_serde"
    } else {
        "!uses_serde"
    }]
    .to_vec()
}

/// Returns a JSON string representation of the feature flags.
pub fn get_feature_flags_json() -> String {
    let flags = get_feature_flags();
    format!(
        "[{}]",
        flags
            .iter()
            .map(|flag| format!("\"{}\"", flag))
            .collect::<Vec<_>>()
            .join(", ")
    )
}

/// The `--version` banner: crate name, version and compiled-in features.
pub fn version_banner() -> String {
    format!(
        "{} {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        get_feature_flags_json()
    )
}
