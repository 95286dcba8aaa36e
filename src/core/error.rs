//! Error handling for the component builder
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`BuildError`]) returned by the resolver and the
//!    aggregator, so callers can match on the exact failure
//! 2. **User-friendly messages** ([`ErrorContext`]) with suggestions, used by the CLI
//!
//! Every [`BuildError`] is fatal to the operation that produced it. Resolution
//! and aggregation never return partial results; the first error encountered is
//! propagated to the caller unchanged.
//!
//! # Examples
//!
//! ```rust,no_run
//! use component_builder::core::{BuildError, user_friendly_error};
//!
//! fn report(error: BuildError) {
//!     let ctx = user_friendly_error(anyhow::Error::from(error));
//!     ctx.display();
//! }
//! ```

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::MANIFEST_FILE_NAME;

/// The error type for resolution and build operations.
///
/// # Error Categories
///
/// ## Dependency Resolution
/// - [`ComponentNotFound`](BuildError::ComponentNotFound) - no search path contains the component
/// - [`ManifestRead`](BuildError::ManifestRead) - `component.json` missing or unreadable
/// - [`ManifestParse`](BuildError::ManifestParse) - `component.json` is not valid
///
/// ## Aggregation
/// - [`AssetRead`](BuildError::AssetRead) - a declared asset file could not be read
/// - [`UnknownCategory`](BuildError::UnknownCategory) - an asset category name was not recognised
///
/// ## Configuration
/// - [`ConfigRead`](BuildError::ConfigRead) / [`ConfigParse`](BuildError::ConfigParse) - `cbuild.toml` problems
#[derive(Error, Debug)]
pub enum BuildError {
    /// A dependency name did not match any directory in the lookup paths.
    ///
    /// `directory` is the component whose manifest declared the dependency.
    #[error(
        "Could not resolve directory for component \"{name}\" found in {}",
        directory.join(MANIFEST_FILE_NAME).display()
    )]
    ComponentNotFound {
        /// Dependency name as declared in the manifest
        name: String,
        /// Directory of the requesting component
        directory: PathBuf,
    },

    /// The component manifest could not be read.
    #[error("Failed to read component manifest in {}", directory.display())]
    ManifestRead {
        /// Component directory
        directory: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The component manifest is not a valid JSON descriptor.
    #[error("Invalid component manifest in {}", directory.display())]
    ManifestParse {
        /// Component directory
        directory: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A file declared by a component could not be read.
    #[error("Failed to read asset {} of component {}", file.display(), component.display())]
    AssetRead {
        /// Absolute path of the asset file
        file: PathBuf,
        /// Directory of the component that declared the file
        component: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An asset category name was not one of the known categories.
    #[error("Unknown asset category: {name}")]
    UnknownCategory {
        /// The unrecognised name
        name: String,
    },

    /// The build configuration file could not be read.
    #[error("Failed to read build configuration {}", path.display())]
    ConfigRead {
        /// Configuration file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The build configuration file is not valid TOML.
    #[error("Invalid build configuration {}", path.display())]
    ConfigParse {
        /// Configuration file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },
}

/// Error wrapper carrying a user-facing suggestion and details.
///
/// Produced by [`user_friendly_error`] and printed by the CLI.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: anyhow::Error,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context without suggestion or details.
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self {
            error: error.into(),
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        for cause in self.error.chain().skip(1) {
            eprintln!("  {}: {}", "caused by".yellow(), cause);
        }

        if let Some(details) = &self.details {
            eprintln!("\n{details}");
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("\n{}: {}", "suggestion".green().bold(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n{details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Convert any error into an [`ErrorContext`] with a suggestion tailored to the failure.
///
/// The error chain is searched for a [`BuildError`]; when none is found the
/// context carries the error alone.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let build_error = error.chain().find_map(|cause| cause.downcast_ref::<BuildError>());

    let (suggestion, details) = match build_error {
        Some(BuildError::ComponentNotFound { name, .. }) => (
            Some(format!(
                "Install \"{name}\" into one of the search paths, or add its parent directory with --path"
            )),
            Some("Namespaced names like \"group/name\" are looked up as \"group-name\".".to_string()),
        ),
        Some(BuildError::ManifestRead { directory, .. }) => (
            Some(format!("Check that {} contains a readable component.json", directory.display())),
            None,
        ),
        Some(BuildError::ManifestParse { .. }) => (
            Some("Fix the JSON syntax of the component manifest".to_string()),
            Some(
                "Manifest keys: dependencies, development (objects), local, paths, scripts, \
                 templates, styles, images, fonts, files (arrays)"
                    .to_string(),
            ),
        ),
        Some(BuildError::AssetRead { file, .. }) => (
            Some(format!("Create {} or remove it from the manifest", file.display())),
            None,
        ),
        Some(BuildError::UnknownCategory { .. }) => (
            Some("Use one of: scripts, styles, images, fonts, files".to_string()),
            None,
        ),
        Some(BuildError::ConfigRead { .. } | BuildError::ConfigParse { .. }) => {
            (Some("Check the syntax of cbuild.toml".to_string()), None)
        }
        None => (None, None),
    };

    let mut ctx = ErrorContext::new(error);
    if let Some(suggestion) = suggestion {
        ctx = ctx.with_suggestion(suggestion);
    }
    if let Some(details) = details {
        ctx = ctx.with_details(details);
    }
    ctx
}
