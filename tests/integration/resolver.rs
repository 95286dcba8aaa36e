//! Dependency graph resolution against on-disk component trees.

use component_builder::builder::{Builder, BuilderOptions};
use component_builder::core::BuildError;
use serde_json::json;
use std::path::PathBuf;

use crate::common::{ComponentTree, init_test_logging};

fn options(tree: &ComponentTree, dev: bool) -> BuilderOptions {
    BuilderOptions {
        root_path: None,
        dev,
        search_paths: vec![tree.root().join("components")],
    }
}

async fn resolved_dirs(builder: &Builder) -> Vec<PathBuf> {
    builder
        .resolve()
        .await
        .unwrap()
        .iter()
        .map(|node| node.directory().to_path_buf())
        .collect()
}

#[tokio::test]
async fn test_diamond_resolves_shared_dependency_once() {
    init_test_logging(None);
    let tree = ComponentTree::diamond().unwrap();
    let builder = Builder::new(tree.root(), options(&tree, false));

    let dirs = resolved_dirs(&builder).await;

    assert_eq!(
        dirs,
        vec![tree.component_dir("d"), tree.component_dir("b"), tree.component_dir("c")]
    );
    assert_eq!(builder.context().dependency_count(), 3);
}

#[tokio::test]
async fn test_resolution_is_idempotent() {
    let tree = ComponentTree::diamond().unwrap();
    let builder = Builder::new(tree.root(), options(&tree, false));

    let first = resolved_dirs(&builder).await;
    let second = resolved_dirs(&builder).await;

    assert_eq!(first, second);
    assert_eq!(builder.context().dependency_count(), 3);
}

#[tokio::test]
async fn test_resolution_order_is_deterministic_across_builders() {
    let tree = ComponentTree::diamond().unwrap();

    let mut orders = Vec::new();
    for _ in 0..5 {
        let builder = Builder::new(tree.root(), options(&tree, false));
        orders.push(resolved_dirs(&builder).await);
    }

    assert!(orders.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn test_development_dependencies_follow_dev_mode() {
    let tree = ComponentTree::new().unwrap();
    tree.root_manifest(&json!({"dependencies": {"a": "*"}, "development": {"t": "*"}}))
        .unwrap()
        .component("a", &json!({}))
        .unwrap()
        .component("t", &json!({}))
        .unwrap();

    let builder = Builder::new(tree.root(), options(&tree, false));
    assert_eq!(resolved_dirs(&builder).await, vec![tree.component_dir("a")]);

    let builder = Builder::new(tree.root(), options(&tree, true));
    assert_eq!(
        resolved_dirs(&builder).await,
        vec![tree.component_dir("a"), tree.component_dir("t")]
    );
}

#[tokio::test]
async fn test_null_manifest_keys_are_treated_as_missing() {
    let tree = ComponentTree::new().unwrap();
    tree.root_manifest(&json!({"dependencies": {"a": "*"}, "development": null, "local": null}))
        .unwrap()
        .component("a", &json!({"dependencies": null, "scripts": null, "paths": null}))
        .unwrap();

    let builder = Builder::new(tree.root(), options(&tree, false));

    assert_eq!(resolved_dirs(&builder).await, vec![tree.component_dir("a")]);
}

#[tokio::test]
async fn test_local_components_resolve_through_manifest_paths() {
    let tree = ComponentTree::new().unwrap();
    tree.root_manifest(&json!({"local": ["widget"], "paths": ["lib"]}))
        .unwrap()
        .component_at("app/lib/widget", &json!({"dependencies": {"shared": "*"}}))
        .unwrap()
        .component("shared", &json!({}))
        .unwrap();

    let builder = Builder::new(tree.root(), options(&tree, false));

    assert_eq!(
        resolved_dirs(&builder).await,
        vec![tree.component_dir("shared"), tree.root().join("lib/widget")]
    );
}

#[tokio::test]
async fn test_missing_dependency_names_declaring_manifest() {
    let tree = ComponentTree::new().unwrap();
    tree.root_manifest(&json!({"dependencies": {"a": "*"}}))
        .unwrap()
        .component("a", &json!({"dependencies": {"ghost": "*"}}))
        .unwrap();

    let builder = Builder::new(tree.root(), options(&tree, false));
    let err = builder.resolve().await.unwrap_err();
    let message = err.to_string();

    match err {
        BuildError::ComponentNotFound {
            name,
            directory,
        } => {
            assert_eq!(name, "ghost");
            assert_eq!(directory, tree.component_dir("a"));
            let manifest = tree.component_dir("a").join("component.json");
            assert!(message.contains(&manifest.display().to_string()), "{message}");
        }
        other => panic!("expected ComponentNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_root_referenced_by_dependency_is_not_a_dependency() {
    let tree = ComponentTree::new().unwrap();
    tree.root_manifest(&json!({"dependencies": {"a": "*"}}))
        .unwrap()
        .component("a", &json!({"local": ["app"], "paths": ["../../.."]}))
        .unwrap();

    let builder = Builder::new(tree.root(), options(&tree, false));

    assert_eq!(resolved_dirs(&builder).await, vec![tree.component_dir("a")]);
}
