//! Test fixtures for building component trees on disk
//!
//! [`ComponentTree`] writes `component.json` manifests and asset files into a
//! temporary directory so resolver and builder tests can run against a real
//! filesystem.

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::constants::MANIFEST_FILE_NAME;

/// A temporary directory holding a root component and its dependencies.
///
/// The root component lives in `<temp>/app`; installed components live in
/// `<temp>/app/components/<name>`.
pub struct ComponentTree {
    temp_dir: TempDir,
}

impl ComponentTree {
    /// Create an empty tree.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp directory")?;
        fs::create_dir_all(temp_dir.path().join("app")).context("Failed to create app directory")?;
        Ok(Self {
            temp_dir,
        })
    }

    /// The temporary directory itself.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory of the root component.
    pub fn root(&self) -> PathBuf {
        self.path().join("app")
    }

    /// Directory an installed component named `name` is placed in.
    pub fn component_dir(&self, name: &str) -> PathBuf {
        self.root().join("components").join(name)
    }

    /// Write the root manifest.
    pub fn root_manifest(&self, manifest: &Value) -> Result<&Self> {
        self.write_manifest(&self.root(), manifest)
    }

    /// Write an installed component's manifest.
    pub fn component(&self, name: &str, manifest: &Value) -> Result<&Self> {
        self.write_manifest(&self.component_dir(name), manifest)
    }

    /// Write a manifest into an arbitrary directory relative to the temp root.
    pub fn component_at(&self, rel: &str, manifest: &Value) -> Result<&Self> {
        self.write_manifest(&self.path().join(rel), manifest)
    }

    /// Write a file relative to the temp root.
    pub fn file(&self, rel: &str, content: &str) -> Result<&Self> {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(self)
    }

    /// Create the diamond `app -> {b, c} -> d`, each with one script.
    pub fn diamond() -> Result<Self> {
        let tree = Self::new()?;
        tree.root_manifest(&json!({"dependencies": {"b": "*", "c": "*"}, "scripts": ["index.js"]}))?
            .file("app/index.js", "app();")?
            .component("b", &json!({"dependencies": {"d": "*"}, "scripts": ["b.js"]}))?
            .file("app/components/b/b.js", "b();")?
            .component("c", &json!({"dependencies": {"d": "*"}, "scripts": ["c.js"]}))?
            .file("app/components/c/c.js", "c();")?
            .component("d", &json!({"scripts": ["d.js"]}))?
            .file("app/components/d/d.js", "d();")?;
        Ok(tree)
    }

    fn write_manifest(&self, dir: &Path, manifest: &Value) -> Result<&Self> {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        let content = serde_json::to_string_pretty(manifest)?;
        fs::write(dir.join(MANIFEST_FILE_NAME), content)
            .with_context(|| format!("Failed to write manifest in {}", dir.display()))?;
        Ok(self)
    }
}
