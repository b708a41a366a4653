#![allow(dead_code)]
use std::fs;
use std::io::Result as IoResult;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// A wrapper around a temporary crate directory holding a single Cargo.toml.
pub struct TestProject {
    /// The temporary directory. When this is dropped, the directory and its contents are removed.
    pub temp_dir: TempDir,
    /// The root directory for the generated project.
    pub root: PathBuf,
}

impl TestProject {
    /// Create a project named `project_name` whose manifest ends with `extra`
    /// (a `[features]` table, metadata, ...).
    pub fn new(project_name: &str, extra: &str) -> IoResult<Self> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path().join(project_name);
        fs::create_dir_all(&root)?;
        fs::write(
            root.join("Cargo.toml"),
            format!(
                "[package]\nname = \"{}\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n{}",
                project_name, extra
            ),
        )?;
        Ok(TestProject { temp_dir, root })
    }

    /// Returns a reference to the project root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> PathBuf {
        self.root.join("Cargo.toml")
    }
}

/// The feature layout of a geo-lookup service with two interchangeable backends.
pub const GEO_FEATURES: &str = r#"
[features]
default = ["full"]
full = ["maxminddb", "multi-thread", "ripe-geo-autoupdate", "ripe-geo-embedded"]
maxminddb = ["dep:maxminddb"]
multi-thread = ["tokio/rt-multi-thread"]
ripe-geo = ["dep:ipnet"]
ripe-geo-autoupdate = ["ripe-geo", "dep:reqwest"]
ripe-geo-embedded = ["ripe-geo", "dep:flate2"]
"#;

/// Create a project with the [`GEO_FEATURES`] table.
pub fn create_geo_project() -> IoResult<TestProject> {
    TestProject::new("geo_project", GEO_FEATURES)
}

/// Splits stdout into lines; an empty stdout has no lines.
pub fn output_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
