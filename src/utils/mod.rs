//! Utility modules shared by the resolver, builder and CLI.

pub mod paths;

pub use paths::{absolutize, normalize_path, relative_path, resolve_against, to_forward_slashes};
