//! Shared state of a single resolution and build run.

use dashmap::DashMap;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::OnceCell;

use super::node::Node;
use crate::builder::AssetCategory;

/// Explicit context passed through every recursive resolution and build call.
///
/// Owns the root node, the settings inherited by every node (dev mode and the
/// global search paths), the dependency mapping keyed by absolute directory,
/// and the per-category output cache of the root.
///
/// All mutation of the mapping goes through [`ResolutionContext::claim`], which
/// performs check-then-insert under one lock so that two concurrent
/// resolutions can never create two nodes for the same directory.
#[derive(Debug)]
pub struct ResolutionContext {
    root: Arc<Node>,
    root_path: PathBuf,
    dev: bool,
    search_paths: Vec<PathBuf>,
    dependencies: Mutex<HashMap<PathBuf, Arc<Node>>>,
    /// Dependencies in aggregation order, filled once by the first resolution.
    pub(super) resolved: OnceCell<Vec<Arc<Node>>>,
    category_cache: DashMap<AssetCategory, String>,
}

impl ResolutionContext {
    /// Creates a context for the component in `root_dir`.
    ///
    /// `root_dir` and `root_path` must already be absolute.
    pub fn new(root_dir: PathBuf, root_path: PathBuf, dev: bool, search_paths: Vec<PathBuf>) -> Self {
        Self {
            root: Arc::new(Node::new(root_dir)),
            root_path,
            dev,
            search_paths,
            dependencies: Mutex::new(HashMap::new()),
            resolved: OnceCell::new(),
            category_cache: DashMap::new(),
        }
    }

    /// The root component's node.
    pub fn root(&self) -> &Arc<Node> {
        &self.root
    }

    /// Whether `node` is the root of this run.
    pub fn is_root(&self, node: &Node) -> bool {
        node.directory() == self.root.directory()
    }

    /// Base directory that module names are made relative to.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Whether development dependencies are resolved.
    pub fn dev(&self) -> bool {
        self.dev
    }

    /// Global search paths inherited by every node.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    pub(crate) fn add_search_paths(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.search_paths.extend(paths);
    }

    /// Atomically registers `directory` unless it is already known.
    ///
    /// Returns the new node when this call created it, so the caller is the one
    /// responsible for expanding it. Returns `None` if the directory is the root
    /// or already present in the mapping.
    pub fn claim(&self, directory: &Path) -> Option<Arc<Node>> {
        if directory == self.root.directory() {
            return None;
        }

        let mut dependencies = self.dependencies.lock().unwrap_or_else(PoisonError::into_inner);
        if dependencies.contains_key(directory) {
            return None;
        }

        let node = Arc::new(Node::new(directory.to_path_buf()));
        dependencies.insert(directory.to_path_buf(), Arc::clone(&node));
        Some(node)
    }

    /// Number of distinct dependency directories discovered so far.
    pub fn dependency_count(&self) -> usize {
        self.dependencies.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub(super) fn clear_dependencies(&self) {
        self.dependencies.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Cached root output for a category, if already built.
    pub fn cached_output(&self, category: AssetCategory) -> Option<String> {
        self.category_cache.get(&category).map(|entry| entry.value().clone())
    }

    /// Stores the root output for a category and returns the cached value.
    ///
    /// The first stored value wins; entries are never replaced.
    pub fn store_output(&self, category: AssetCategory, output: String) -> String {
        self.category_cache.entry(category).or_insert(output).value().clone()
    }

    /// Orders every discovered dependency so that each node follows its own
    /// dependencies.
    ///
    /// Walks depth-first from the root in manifest declaration order and emits
    /// nodes in post-order. Nodes already visited are skipped, which also
    /// terminates manifest cycles.
    pub(super) fn aggregation_order(&self) -> Vec<Arc<Node>> {
        let dependencies = self.dependencies.lock().unwrap_or_else(PoisonError::into_inner);

        let mut visited: HashSet<&Path> = HashSet::new();
        visited.insert(self.root.directory());

        let mut order = Vec::with_capacity(dependencies.len());
        // Explicit stack of (node, next child index)
        let mut stack: Vec<(&Arc<Node>, usize)> = vec![(&self.root, 0)];

        while let Some((node, index)) = stack.pop() {
            let children = node.children().unwrap_or_default();

            match children.get(index) {
                Some(child_dir) => {
                    stack.push((node, index + 1));
                    if let Some(child) = dependencies.get(child_dir) {
                        if visited.insert(child.directory()) {
                            stack.push((child, 0));
                        }
                    }
                }
                None => {
                    if !self.is_root(node) {
                        order.push(Arc::clone(node));
                    }
                }
            }
        }

        order
    }
}
