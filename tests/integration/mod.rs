//! Integration test suite for cbuild
//!
//! End-to-end tests that lay out component trees on disk and run the
//! resolver, the builder and the `cbuild` binary against them.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **resolver**: dependency graph resolution and deduplication
//! - **builder**: per-category aggregation and output ordering
//! - **cli**: `cbuild build` and `cbuild resolve`

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod builder;
mod cli;
mod resolver;
