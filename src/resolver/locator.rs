//! Component lookup across search directories.
//!
//! A dependency name is turned into a directory by trying every search path in
//! order and picking the first candidate that contains a `component.json`.
//! Namespaced names (`group/name`) are stored on disk as `group-name`.

use futures::future::join_all;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::MANIFEST_FILE_NAME;
use crate::core::{BuildError, Result};
use crate::utils::resolve_against;

/// Converts a component name to its on-disk directory name.
///
/// Only the first `/` is replaced, so `group/name` becomes `group-name`.
#[must_use]
pub fn normalize_component_name(name: &str) -> String {
    name.replacen('/', "-", 1)
}

/// Finds the directory of component `name`.
///
/// Each entry of `search_paths` is joined with the normalized name and
/// resolved against `base_dir`. The existence checks run concurrently, but the
/// result is always the first matching entry in list order.
///
/// # Errors
///
/// [`BuildError::ComponentNotFound`] when no candidate contains a manifest.
/// The error names `base_dir`, the component that declared the dependency.
pub async fn locate_component(
    name: &str,
    search_paths: &[PathBuf],
    base_dir: &Path,
) -> Result<PathBuf> {
    let dir_name = normalize_component_name(name);

    let candidates: Vec<PathBuf> = search_paths
        .iter()
        .map(|search_path| resolve_against(base_dir, &search_path.join(&dir_name)))
        .collect();

    let checks = candidates.iter().map(|candidate| async move {
        tokio::fs::try_exists(candidate.join(MANIFEST_FILE_NAME)).await.unwrap_or(false)
    });
    let found = join_all(checks).await;

    match candidates.into_iter().zip(found).find_map(|(dir, exists)| exists.then_some(dir)) {
        Some(dir) => {
            debug!(component = name, directory = %dir.display(), "located component");
            Ok(dir)
        }
        None => Err(BuildError::ComponentNotFound {
            name: name.to_string(),
            directory: base_dir.to_path_buf(),
        }),
    }
}
