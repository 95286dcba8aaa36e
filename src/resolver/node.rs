//! In-memory representation of one resolved component.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tokio::sync::OnceCell;

use crate::core::Result;
use crate::manifest::Manifest;

/// One component within a build run, identified by its absolute directory.
///
/// Shared state (the dependency mapping, dev mode, search paths) lives in the
/// [`ResolutionContext`](super::ResolutionContext) that owns every node; a node
/// only carries what is specific to its own directory.
#[derive(Debug)]
pub struct Node {
    directory: PathBuf,
    manifest: OnceCell<Manifest>,
    /// Directories of this node's own dependencies in declaration order.
    /// Set once the node's fan-out has completed.
    children: OnceLock<Vec<PathBuf>>,
}

impl Node {
    /// Creates an unresolved node for an absolute, normalized directory.
    pub fn new(directory: PathBuf) -> Self {
        Self {
            directory,
            manifest: OnceCell::new(),
            children: OnceLock::new(),
        }
    }

    /// The component directory; the node's identity.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Loads the manifest on first call and returns the cached copy afterwards.
    ///
    /// Concurrent first calls share a single read of `component.json`.
    pub async fn manifest(&self) -> Result<&Manifest> {
        self.manifest.get_or_try_init(|| Manifest::load(&self.directory)).await
    }

    /// Directories of the node's direct dependencies, or `None` before resolution.
    pub fn children(&self) -> Option<&[PathBuf]> {
        self.children.get().map(Vec::as_slice)
    }

    pub(crate) fn set_children(&self, mut children: Vec<PathBuf>) {
        let mut seen = std::collections::HashSet::new();
        children.retain(|dir| seen.insert(dir.clone()));
        // Resolution of a node runs once; a second set is a no-op.
        let _ = self.children.set(children);
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.directory == other.directory
    }
}

impl Eq for Node {}
