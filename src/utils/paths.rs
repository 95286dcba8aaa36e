//! Path utilities for normalization and relativization.
//!
//! Component directories are identity keys, so every path that ends up in the
//! dependency mapping is made absolute and lexically normalized first. These
//! helpers never touch the filesystem and do not resolve symbolic links.

use std::path::{Component, Path, PathBuf};

/// Normalizes a path by resolving `.` and `..` components.
///
/// Keeps the path's absolute or relative nature. A `..` directly below the
/// root is dropped, as the root has no parent.
///
/// # Examples
///
/// ```rust
/// use component_builder::utils::paths::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize_path(Path::new("/app/./components/../lib")), PathBuf::from("/app/lib"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Resolves `path` against `base` and normalizes the result.
///
/// Absolute paths are returned normalized; relative ones are joined onto `base`.
#[must_use]
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    normalize_path(&base.join(path))
}

/// Makes `path` absolute using the current working directory.
///
/// Falls back to the path itself if the working directory cannot be determined.
#[must_use]
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize_path(path);
    }

    match std::env::current_dir() {
        Ok(cwd) => resolve_against(&cwd, path),
        Err(_) => normalize_path(path),
    }
}

/// Computes the path of `target` relative to `base`.
///
/// Both inputs are normalized first. Walks up from `base` with `..` for every
/// component that is not shared with `target`.
///
/// ```rust
/// use component_builder::utils::paths::relative_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     relative_path(Path::new("/app"), Path::new("/app/components/x/x.js")),
///     PathBuf::from("components/x/x.js"),
/// );
/// assert_eq!(relative_path(Path::new("/app/a"), Path::new("/app/b/c.js")), PathBuf::from("../b/c.js"));
/// ```
#[must_use]
pub fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base = normalize_path(base);
    let target = normalize_path(target);

    let base_components: Vec<_> = base.components().collect();
    let target_components: Vec<_> = target.components().collect();

    let shared = base_components
        .iter()
        .zip(target_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in shared..base_components.len() {
        result.push("..");
    }
    for component in &target_components[shared..] {
        result.push(component.as_os_str());
    }
    result
}

/// Renders a path with `/` separators on every platform.
#[must_use]
pub fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
