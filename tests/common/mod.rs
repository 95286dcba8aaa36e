//! Common test utilities for cbuild integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub use component_builder::test_utils::{ComponentTree, init_test_logging};

/// A `cbuild` command running in `dir` with a clean environment.
pub fn cbuild(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cbuild").expect("cbuild binary should be built");
    cmd.current_dir(dir).env_remove("CBUILD_DEV").env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

/// Expected envelope for a module named `name` with body `content`.
pub fn envelope(name: &str, content: &str) -> String {
    format!("require.register(\"{name}\", function(exports, require, module){{\n{content}\n}});")
}
