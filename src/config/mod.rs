//! Build configuration (`cbuild.toml`).
//!
//! A root component directory may contain an optional `cbuild.toml`:
//!
//! ```toml
//! # Directories searched for components, relative to the root component
//! search_paths = ["components", "../shared"]
//!
//! # Also resolve "development" dependencies
//! dev = false
//!
//! # Base directory for module names (defaults to the root component)
//! root_path = "."
//!
//! # Where the CLI writes build outputs
//! output_dir = "build"
//! ```
//!
//! # Precedence
//!
//! Command-line flags override the environment (`CBUILD_DEV`), which overrides
//! the file, which overrides the defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::builder::BuilderOptions;
use crate::constants::{CONFIG_FILE_NAME, DEFAULT_COMPONENTS_DIR, DEFAULT_OUTPUT_DIR, DEV_MODE_ENV};
use crate::core::{BuildError, Result};
use crate::utils::resolve_against;

/// Settings read from `cbuild.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Global search paths, relative to the root component directory.
    pub search_paths: Vec<PathBuf>,

    /// Resolve development dependencies.
    pub dev: bool,

    /// Base directory for module names.
    pub root_path: Option<PathBuf>,

    /// Output directory of the CLI.
    pub output_dir: Option<PathBuf>,
}

impl BuildConfig {
    /// Loads `cbuild.toml` from `root_dir`, or the defaults if there is none.
    ///
    /// # Errors
    ///
    /// [`BuildError::ConfigRead`] or [`BuildError::ConfigParse`] when the file
    /// exists but cannot be read or parsed.
    pub async fn load(root_dir: &Path) -> Result<Self> {
        let path = root_dir.join(CONFIG_FILE_NAME);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            Self::load_from(&path).await
        } else {
            debug!(path = %path.display(), "no build configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific file.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|source| BuildError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| BuildError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `CBUILD_DEV` from the process environment.
    pub fn apply_env(&mut self) {
        let value = std::env::var(DEV_MODE_ENV).ok();
        self.apply_dev_override(value.as_deref());
    }

    /// Applies a `CBUILD_DEV` value: `1`/`true` enable dev mode, `0`/`false` disable it.
    ///
    /// Anything else leaves the setting unchanged.
    pub fn apply_dev_override(&mut self, value: Option<&str>) {
        match value.map(str::trim) {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => self.dev = true,
            Some(v) if v == "0" || v.eq_ignore_ascii_case("false") => self.dev = false,
            _ => {}
        }
    }

    /// Output directory, resolved against `root_dir`.
    pub fn output_dir(&self, root_dir: &Path) -> PathBuf {
        let dir = self.output_dir.as_deref().unwrap_or(Path::new(DEFAULT_OUTPUT_DIR));
        resolve_against(root_dir, dir)
    }

    /// Converts to [`BuilderOptions`] for the component in `root_dir`.
    ///
    /// Search paths are made absolute against `root_dir`, so every component in
    /// the graph shares the same lookup directories. When none are configured,
    /// `<root_dir>/components` is used.
    pub fn into_options(self, root_dir: &Path) -> BuilderOptions {
        let search_paths = if self.search_paths.is_empty() {
            vec![root_dir.join(DEFAULT_COMPONENTS_DIR)]
        } else {
            self.search_paths.iter().map(|path| resolve_against(root_dir, path)).collect()
        };

        BuilderOptions {
            root_path: self.root_path.map(|path| resolve_against(root_dir, &path)),
            dev: self.dev,
            search_paths,
        }
    }
}
