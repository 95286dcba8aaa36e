//! Per-category aggregation over resolved component trees.

use component_builder::builder::{AssetCategory, Builder, BuilderOptions};
use component_builder::core::BuildError;
use serde_json::json;

use crate::common::{ComponentTree, envelope, init_test_logging};

fn builder(tree: &ComponentTree) -> Builder {
    Builder::new(
        tree.root(),
        BuilderOptions {
            root_path: None,
            dev: false,
            search_paths: vec![tree.root().join("components")],
        },
    )
}

#[tokio::test]
async fn test_dependency_scripts_precede_root_scripts() {
    init_test_logging(None);
    let tree = ComponentTree::new().unwrap();
    tree.root_manifest(&json!({"dependencies": {"x": "*"}, "scripts": ["index.js"]}))
        .unwrap()
        .file("app/index.js", "var x = require('x');")
        .unwrap()
        .component("x", &json!({"scripts": ["x.js"]}))
        .unwrap()
        .file("app/components/x/x.js", "module.exports = 1;")
        .unwrap();

    let scripts = builder(&tree).build_category(AssetCategory::Scripts).await.unwrap();

    let expected = format!(
        "{}\n{}",
        envelope("components/x/x.js", "module.exports = 1;"),
        envelope("index.js", "var x = require('x');")
    );
    assert_eq!(scripts, expected);
}

#[tokio::test]
async fn test_diamond_contributes_shared_assets_once() {
    let tree = ComponentTree::diamond().unwrap();

    let scripts = builder(&tree).build_category(AssetCategory::Scripts).await.unwrap();

    assert_eq!(scripts.matches("d();").count(), 1);
    let d = scripts.find("d();").unwrap();
    let b = scripts.find("b();").unwrap();
    let c = scripts.find("c();").unwrap();
    let app = scripts.find("app();").unwrap();
    assert!(d < b && d < c, "shared dependency must come first:\n{scripts}");
    assert!(b < app && c < app, "root must come last:\n{scripts}");
}

#[tokio::test]
async fn test_repeated_builds_are_byte_identical() {
    let tree = ComponentTree::diamond().unwrap();

    let first = builder(&tree).build().await.unwrap();
    let second = builder(&tree).build().await.unwrap();

    assert_eq!(first.scripts, second.scripts);
    assert_eq!(first.styles, second.styles);
}

#[tokio::test]
async fn test_root_output_is_cached_after_first_build() {
    let tree = ComponentTree::diamond().unwrap();
    let builder = builder(&tree);

    let first = builder.build_category(AssetCategory::Scripts).await.unwrap();
    tree.file("app/components/d/d.js", "changed();").unwrap();
    let second = builder.build_category(AssetCategory::Scripts).await.unwrap();

    assert_eq!(first, second);
    assert!(!second.contains("changed();"));
}

#[tokio::test]
async fn test_build_produces_every_category() {
    let tree = ComponentTree::new().unwrap();
    tree.root_manifest(&json!({
        "templates": ["view.html"],
        "scripts": ["index.js"],
        "styles": ["index.css"],
    }))
    .unwrap()
    .file("app/view.html", "<p class=\"x\">hi</p>")
    .unwrap()
    .file("app/index.js", "start();")
    .unwrap()
    .file("app/index.css", "p { color: red; }")
    .unwrap();

    let artifact = builder(&tree).build().await.unwrap();

    assert_eq!(
        artifact.scripts,
        format!(
            "{}\n{}",
            envelope("view.html", r#"module.exports = "<p class=\"x\">hi</p>";"#),
            envelope("index.js", "start();")
        )
    );
    for category in [AssetCategory::Styles, AssetCategory::Images, AssetCategory::Fonts, AssetCategory::Files] {
        assert_eq!(artifact.get(category), "", "{category} should be empty");
    }
    assert!(artifact.runtime.contains("require.register"));
}

#[tokio::test]
async fn test_empty_tree_builds_empty_scripts() {
    let tree = ComponentTree::new().unwrap();
    tree.root_manifest(&json!({})).unwrap();

    let scripts = builder(&tree).build_category(AssetCategory::Scripts).await.unwrap();

    assert_eq!(scripts, "");
}

#[tokio::test]
async fn test_missing_script_file_fails_build() {
    let tree = ComponentTree::new().unwrap();
    tree.root_manifest(&json!({"dependencies": {"x": "*"}}))
        .unwrap()
        .component("x", &json!({"scripts": ["gone.js"]}))
        .unwrap();

    let err = builder(&tree).build().await.unwrap_err();

    match err {
        BuildError::AssetRead {
            file,
            ..
        } => assert_eq!(file, tree.component_dir("x").join("gone.js")),
        other => panic!("expected AssetRead, got {other:?}"),
    }
}
