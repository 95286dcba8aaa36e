//! Component manifest (`component.json`) parsing.
//!
//! Every component directory contains a manifest describing what the component
//! depends on and which asset files it contributes to the build.
//!
//! # Manifest Format
//!
//! ```json
//! {
//!   "name": "app",
//!   "dependencies": { "ui/button": "*", "events": "1.0.0" },
//!   "development": { "assert": "*" },
//!   "local": ["sidebar"],
//!   "paths": ["lib"],
//!   "templates": ["template.html"],
//!   "scripts": ["index.js"],
//!   "styles": ["app.css"]
//! }
//! ```
//!
//! All keys are optional, and a key set to `null` counts as missing. Version
//! strings in `dependencies` and `development` are ignored: a dependency is
//! resolved by name to the first search directory that contains it. Key order
//! in the dependency objects is preserved and determines resolution order.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::builder::AssetCategory;
use crate::constants::MANIFEST_FILE_NAME;
use crate::core::{BuildError, Result};

/// Structured form of a component's `component.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Component name, used for diagnostics only.
    pub name: Option<String>,

    /// Required dependencies: name → version (version ignored).
    #[serde(deserialize_with = "null_as_default")]
    pub dependencies: Map<String, Value>,

    /// Development-only dependencies, resolved only in dev mode.
    #[serde(deserialize_with = "null_as_default")]
    pub development: Map<String, Value>,

    /// Local (sibling) components, resolved like dependencies.
    #[serde(deserialize_with = "null_as_default")]
    pub local: Vec<String>,

    /// Extra search directories, relative to the component directory.
    #[serde(deserialize_with = "null_as_default")]
    pub paths: Vec<PathBuf>,

    /// Template files wrapped as string modules in the scripts output.
    #[serde(deserialize_with = "null_as_default")]
    pub templates: Vec<String>,

    /// Script files wrapped as modules in the scripts output.
    #[serde(deserialize_with = "null_as_default")]
    pub scripts: Vec<String>,

    /// Stylesheets.
    #[serde(deserialize_with = "null_as_default")]
    pub styles: Vec<String>,

    /// Image files.
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<String>,

    /// Font files.
    #[serde(deserialize_with = "null_as_default")]
    pub fonts: Vec<String>,

    /// Miscellaneous files.
    #[serde(deserialize_with = "null_as_default")]
    pub files: Vec<String>,
}

impl Manifest {
    /// Reads and parses the manifest of the component in `directory`.
    ///
    /// Fails with [`BuildError::ManifestRead`] if the file is missing or
    /// unreadable and [`BuildError::ManifestParse`] if it is not a valid
    /// descriptor. No partial manifest is ever returned.
    pub async fn load(directory: &Path) -> Result<Self> {
        let path = directory.join(MANIFEST_FILE_NAME);
        let content =
            tokio::fs::read_to_string(&path).await.map_err(|source| BuildError::ManifestRead {
                directory: directory.to_path_buf(),
                source,
            })?;

        Self::parse(directory, &content)
    }

    /// Parses manifest content belonging to the component in `directory`.
    pub fn parse(directory: &Path, content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| BuildError::ManifestParse {
            directory: directory.to_path_buf(),
            source,
        })
    }

    /// Names of the required dependencies, in declaration order.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }

    /// Names of the development dependencies, in declaration order.
    pub fn development_names(&self) -> impl Iterator<Item = &str> {
        self.development.keys().map(String::as_str)
    }

    /// Names of the local components, in declaration order.
    pub fn local_names(&self) -> impl Iterator<Item = &str> {
        self.local.iter().map(String::as_str)
    }

    /// Files this component declares for an asset category.
    ///
    /// Templates are part of the scripts output but listed separately; see
    /// [`Manifest::templates`].
    pub fn files_for(&self, category: AssetCategory) -> &[String] {
        match category {
            AssetCategory::Scripts => &self.scripts,
            AssetCategory::Styles => &self.styles,
            AssetCategory::Images => &self.images,
            AssetCategory::Fonts => &self.fonts,
            AssetCategory::Files => &self.files,
        }
    }

    /// Human-readable label for log messages.
    pub fn display_name<'a>(&'a self, directory: &'a Path) -> std::borrow::Cow<'a, str> {
        match &self.name {
            Some(name) => name.as_str().into(),
            None => directory.to_string_lossy(),
        }
    }
}

/// Deserializes `null` as the type's default, like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
