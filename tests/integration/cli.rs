//! End-to-end tests of the `cbuild` binary.

use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;

use crate::common::{ComponentTree, cbuild, envelope};

fn single_dependency_tree() -> ComponentTree {
    let tree = ComponentTree::new().unwrap();
    tree.root_manifest(&json!({"dependencies": {"x": "*"}, "scripts": ["index.js"]}))
        .unwrap()
        .file("app/index.js", "main();")
        .unwrap()
        .component("x", &json!({"scripts": ["x.js"]}))
        .unwrap()
        .file("app/components/x/x.js", "x();")
        .unwrap();
    tree
}

#[test]
fn test_build_writes_scripts_and_styles() {
    let tree = single_dependency_tree();

    cbuild(tree.path())
        .args(["build", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Built 2 component(s)"));

    let js = fs::read_to_string(tree.root().join("build/build.js")).unwrap();
    let expected =
        format!("{}\n{}", envelope("components/x/x.js", "x();"), envelope("index.js", "main();"));
    assert!(js.starts_with("function require("), "runtime must come first");
    assert!(js.ends_with(&expected), "unexpected scripts output:\n{js}");

    let css = fs::read_to_string(tree.root().join("build/build.css")).unwrap();
    assert_eq!(css, "");
    assert!(!tree.root().join("build/images.txt").exists());
}

#[test]
fn test_build_honours_out_flag() {
    let tree = single_dependency_tree();

    cbuild(tree.path()).args(["build", "app", "--out", "dist"]).assert().success();

    assert!(tree.path().join("dist/build.js").exists());
    assert!(!tree.root().join("build").exists());
}

#[test]
fn test_build_reads_config_file() {
    let tree = ComponentTree::new().unwrap();
    tree.root_manifest(&json!({"dependencies": {"x": "*"}}))
        .unwrap()
        .component_at("app/vendor/x", &json!({"scripts": ["x.js"]}))
        .unwrap()
        .file("app/vendor/x/x.js", "x();")
        .unwrap()
        .file("app/cbuild.toml", "search_paths = [\"vendor\"]\noutput_dir = \"out\"\n")
        .unwrap();

    cbuild(tree.path()).args(["build", "app"]).assert().success();

    let js = fs::read_to_string(tree.root().join("out/build.js")).unwrap();
    assert!(js.contains(&envelope("vendor/x/x.js", "x();")));
}

#[test]
fn test_dev_env_includes_development_dependencies() {
    let tree = ComponentTree::new().unwrap();
    tree.root_manifest(&json!({"development": {"t": "*"}}))
        .unwrap()
        .component("t", &json!({}))
        .unwrap();

    let output = cbuild(tree.path()).args(["resolve", "app"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).trim().is_empty());

    cbuild(tree.path())
        .args(["resolve", "app"])
        .env("CBUILD_DEV", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("components/t"));
}

#[test]
fn test_resolve_json_lists_dependencies_in_order() {
    let tree = ComponentTree::diamond().unwrap();

    let output = cbuild(tree.path()).args(["resolve", "app", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["root"], json!(tree.root()));
    assert_eq!(
        value["dependencies"],
        json!([tree.component_dir("d"), tree.component_dir("b"), tree.component_dir("c")])
    );
}

#[test]
fn test_missing_component_reports_error() {
    let tree = ComponentTree::new().unwrap();
    tree.root_manifest(&json!({"dependencies": {"ghost": "*"}})).unwrap();

    cbuild(tree.path())
        .args(["build", "app"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not resolve directory for component \"ghost\""))
        .stderr(predicate::str::contains("--path"));
}

#[test]
fn test_invalid_manifest_reports_error() {
    let tree = ComponentTree::new().unwrap();
    tree.file("app/component.json", "{ not json").unwrap();

    cbuild(tree.path())
        .args(["resolve", "app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid component manifest"));
}
