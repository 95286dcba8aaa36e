//! Per-category aggregation over the resolved graph.
//!
//! The root drives the whole walk: it appends the output of every resolved
//! dependency (in aggregation order, so dependencies come before their
//! dependents) and then its own. Non-root nodes only contribute their own
//! files. Only the root caches its result.

use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, trace};

use super::category::AssetCategory;
use super::envelope;
use crate::core::{BuildError, Result};
use crate::resolver::{Node, ResolutionContext};

/// Builds `category` for `node`.
///
/// For the root, returns the cached output when present; otherwise resolves the
/// graph, builds every dependency, appends the root's own output and caches
/// the result. Non-empty parts are joined with a newline.
pub fn build_node<'a>(
    ctx: &'a ResolutionContext,
    node: &'a Arc<Node>,
    category: AssetCategory,
) -> BoxFuture<'a, Result<String>> {
    async move {
        let is_root = ctx.is_root(node);

        if is_root {
            if let Some(cached) = ctx.cached_output(category) {
                debug!(category = %category, "using cached output");
                return Ok(cached);
            }
            info!(category = %category, component = %node.directory().display(), "building");
        }

        let started = Instant::now();
        let dependencies = ctx.resolve().await?;

        let mut parts = Vec::new();
        if is_root {
            let outputs =
                try_join_all(dependencies.iter().map(|dep| build_node(ctx, dep, category))).await?;
            parts.extend(outputs.into_iter().filter(|output| !output.is_empty()));
        }

        let own = own_output(ctx, node, category).await?;
        if !own.is_empty() {
            parts.push(own);
        }

        let output = parts.join("\n");

        if is_root {
            info!(
                category = %category,
                bytes = output.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "built"
            );
            return Ok(ctx.store_output(category, output));
        }

        Ok(output)
    }
    .boxed()
}

/// The node's own contribution to `category`.
///
/// Scripts (and templates) become module envelopes. The other categories have
/// no transform yet and contribute nothing.
async fn own_output(ctx: &ResolutionContext, node: &Node, category: AssetCategory) -> Result<String> {
    let manifest = node.manifest().await?;
    trace!(component = %manifest.display_name(node.directory()), category = %category, "collecting assets");

    match category {
        AssetCategory::Scripts => {
            let templates = manifest.templates.iter().map(|file| async move {
                let (name, content) = read_asset(ctx, node, file).await?;
                Ok::<_, BuildError>(envelope::wrap(&name, &envelope::string_module(&content)))
            });
            let scripts = manifest.files_for(AssetCategory::Scripts).iter().map(|file| async move {
                let (name, content) = read_asset(ctx, node, file).await?;
                Ok::<_, BuildError>(envelope::wrap(&name, &content))
            });

            let (templates, scripts) = futures::try_join!(try_join_all(templates), try_join_all(scripts))?;

            Ok(templates.into_iter().chain(scripts).collect::<Vec<_>>().join("\n"))
        }
        AssetCategory::Styles | AssetCategory::Images | AssetCategory::Fonts | AssetCategory::Files => {
            Ok(String::new())
        }
    }
}

/// Reads a declared file, returning its module name and content.
///
/// Content that is not valid UTF-8 is decoded lossily.
async fn read_asset(ctx: &ResolutionContext, node: &Node, file: &str) -> Result<(String, String)> {
    let path: PathBuf = crate::utils::resolve_against(node.directory(), Path::new(file));
    trace!(file = %path.display(), "reading asset");

    let bytes = tokio::fs::read(&path).await.map_err(|source| BuildError::AssetRead {
        file: path.clone(),
        component: node.directory().to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes).into_owned();

    Ok((envelope::module_name(ctx.root_path(), &path), content))
}
