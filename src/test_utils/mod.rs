//! Test utilities for the component builder
//!
//! Helpers for logging in tests and for laying out component trees on disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use component_builder::test_utils::ComponentTree;
//!
//! let tree = ComponentTree::diamond().unwrap();
//! assert!(tree.component_dir("d").join("component.json").exists());
//! ```

pub mod fixtures;

pub use fixtures::ComponentTree;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Runs once per process. Uses `level` when given, otherwise `RUST_LOG`;
/// with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
