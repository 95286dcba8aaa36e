//! Dependency graph resolution.
//!
//! Starting from the root component, every transitive dependency is discovered
//! and registered exactly once in the shared [`ResolutionContext`], keyed by
//! its absolute directory. A component reached through several paths (a
//! diamond) is expanded only by the first resolution that claims it.
//!
//! # Dependency classes
//!
//! A manifest declares three classes of dependencies, all looked up the same way:
//! - `dependencies` - always resolved
//! - `development` - resolved only in dev mode
//! - `local` - sibling components listed by name
//!
//! The lookup paths for a component are the global search paths followed by
//! the component's own `paths`, both relative to the component's directory.
//!
//! # Concurrency
//!
//! All declared dependencies of a node, across the three classes, are located
//! and expanded concurrently; the node is complete only when every one of them
//! (and their transitive closure) has finished. The first error aborts the run
//! and the remaining in-flight work is dropped.
//!
//! Cycles in manifests are not reported: a directory already present in the
//! mapping is never expanded again, which makes cyclic graphs terminate.

mod context;
mod locator;
mod node;

pub use context::ResolutionContext;
pub use locator::{locate_component, normalize_component_name};
pub use node::Node;

use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use crate::core::{BuildError, Result};

impl ResolutionContext {
    /// Resolves the whole graph below the root.
    ///
    /// The first call reads manifests and expands the graph; later calls (and
    /// concurrent callers) return the same dependency list without touching the
    /// filesystem. The list is in aggregation order: every component appears
    /// after its own dependencies.
    ///
    /// # Errors
    ///
    /// The first [`BuildError`](crate::core::BuildError) raised anywhere in the
    /// graph. No partial graph is returned and the mapping is emptied again.
    pub async fn resolve(&self) -> Result<&[Arc<Node>]> {
        let resolved = self
            .resolved
            .get_or_try_init(|| async {
                if let Err(err) = self.resolve_node(Arc::clone(self.root())).await {
                    // Half-expanded nodes must not survive into a retry
                    self.clear_dependencies();
                    return Err(err);
                }
                let order = self.aggregation_order();
                debug!(
                    root = %self.root().directory().display(),
                    dependencies = order.len(),
                    "dependency graph resolved"
                );
                Ok::<_, BuildError>(order)
            })
            .await?;

        Ok(resolved.as_slice())
    }

    /// Expands one node: loads its manifest and resolves all declared dependencies.
    fn resolve_node(&self, node: Arc<Node>) -> BoxFuture<'_, Result<()>> {
        async move {
            let manifest = node.manifest().await?;

            let lookup_paths: Vec<PathBuf> =
                self.search_paths().iter().chain(manifest.paths.iter()).cloned().collect();

            let development = manifest.development_names().filter(|_| self.dev());
            let names: Vec<&str> =
                manifest.dependency_names().chain(development).chain(manifest.local_names()).collect();
            debug!(
                component = %manifest.display_name(node.directory()),
                dependencies = names.len(),
                "expanding component"
            );

            let pending = names.iter().map(|name| self.resolve_dependency(&node, name, &lookup_paths));
            let children = try_join_all(pending).await?;

            node.set_children(children);
            Ok(())
        }
        .boxed()
    }

    /// Locates one declared dependency and expands it if this call is the first
    /// to see its directory.
    async fn resolve_dependency(
        &self,
        parent: &Node,
        name: &str,
        lookup_paths: &[PathBuf],
    ) -> Result<PathBuf> {
        let directory = locate_component(name, lookup_paths, parent.directory()).await?;

        match self.claim(&directory) {
            Some(child) => {
                debug!(component = name, directory = %directory.display(), "resolving component");
                self.resolve_node(child).await?;
            }
            None => {
                debug!(component = name, directory = %directory.display(), "component already resolved");
            }
        }

        Ok(directory)
    }
}
