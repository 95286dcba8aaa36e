//! Component Builder
//!
//! Resolves the dependency graph of self-describing components and merges
//! their assets into one build output per asset category.
//!
//! # Architecture Overview
//!
//! A component is a directory containing a `component.json` manifest that
//! declares its dependencies and the files it contributes:
//! - Dependencies are resolved by name to directories, searching an ordered
//!   list of lookup paths (no version solving)
//! - Every physical component is resolved and built at most once, however
//!   often it is referenced
//! - Dependency content is always emitted before dependent content
//! - Scripts are wrapped in self-registering module envelopes for the bundled
//!   `require` runtime
//!
//! # Core Modules
//!
//! - [`resolver`] - component lookup and concurrent, deduplicated graph resolution
//! - [`builder`] - per-category aggregation, module envelopes, build artifact
//! - [`manifest`] - `component.json` parsing
//!
//! ## Supporting Modules
//! - [`config`] - `cbuild.toml` build configuration
//! - [`core`] - error taxonomy and user-facing error rendering
//! - [`cli`] - the `cbuild` command line
//! - [`utils`] - path helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use component_builder::builder::{Builder, BuilderOptions};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let builder = Builder::new(
//!     "app",
//!     BuilderOptions {
//!         search_paths: vec!["components".into(), "..".into()],
//!         dev: false,
//!         root_path: None,
//!     },
//! );
//!
//! let artifact = builder.build().await?;
//! println!("{}\n{}", artifact.runtime, artifact.scripts);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod manifest;
pub mod resolver;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
