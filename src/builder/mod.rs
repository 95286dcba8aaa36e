//! Component builder: resolution plus per-category asset aggregation.
//!
//! A [`Builder`] is created for a root component directory. It resolves the
//! dependency graph once and then produces one merged string per
//! [`AssetCategory`], with dependency content ordered before dependent content.
//!
//! # Examples
//!
//! ```rust,no_run
//! use component_builder::builder::{AssetCategory, Builder, BuilderOptions};
//!
//! # async fn example() -> Result<(), component_builder::core::BuildError> {
//! let builder = Builder::new(
//!     "app",
//!     BuilderOptions {
//!         search_paths: vec!["components".into()],
//!         ..BuilderOptions::default()
//!     },
//! );
//!
//! let scripts = builder.build_category(AssetCategory::Scripts).await?;
//! let bundle = builder.build().await?;
//! assert_eq!(bundle.scripts, scripts);
//! # Ok(())
//! # }
//! ```
//!
//! # Caching
//!
//! Category outputs are cached for the lifetime of the builder and never
//! invalidated. Rebuilding after files change requires a new [`Builder`].

mod aggregate;
mod category;
pub mod envelope;
pub mod runtime;

pub use aggregate::build_node;
pub use category::AssetCategory;
pub use runtime::REQUIRE_RUNTIME;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::core::Result;
use crate::resolver::{Node, ResolutionContext};
use crate::utils::{absolutize, resolve_against};

/// Options for constructing a [`Builder`].
#[derive(Debug, Clone, Default)]
pub struct BuilderOptions {
    /// Base directory module names are made relative to.
    ///
    /// Defaults to the root component directory. A relative value is resolved
    /// against the root component directory.
    pub root_path: Option<PathBuf>,

    /// Resolve `development` dependencies as well.
    pub dev: bool,

    /// Global search paths, tried in order for every component. Relative
    /// entries are resolved against the directory of the component whose
    /// dependency is being looked up.
    pub search_paths: Vec<PathBuf>,
}

/// Merged build outputs, one string per asset category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifact {
    /// Registered script and template modules
    pub scripts: String,
    /// Merged stylesheets
    pub styles: String,
    /// Image output
    pub images: String,
    /// Font output
    pub fonts: String,
    /// Miscellaneous file output
    pub files: String,
    /// Module runtime the scripts output expects to be loaded first
    pub runtime: &'static str,
}

impl BuildArtifact {
    /// Output of a single category.
    pub fn get(&self, category: AssetCategory) -> &str {
        match category {
            AssetCategory::Scripts => &self.scripts,
            AssetCategory::Styles => &self.styles,
            AssetCategory::Images => &self.images,
            AssetCategory::Fonts => &self.fonts,
            AssetCategory::Files => &self.files,
        }
    }
}

/// Builds one root component and everything it depends on.
#[derive(Debug)]
pub struct Builder {
    context: ResolutionContext,
}

impl Builder {
    /// Creates a builder for the component in `dir`.
    ///
    /// Nothing is read from disk until the first resolution or build.
    pub fn new(dir: impl AsRef<Path>, options: BuilderOptions) -> Self {
        let started = Instant::now();
        let directory = absolutize(dir.as_ref());
        info!(component = %directory.display(), "initialising component builder");

        let root_path = match options.root_path {
            Some(root_path) => resolve_against(&directory, &root_path),
            None => directory.clone(),
        };

        let context = ResolutionContext::new(directory, root_path, options.dev, options.search_paths);
        info!(elapsed_ms = started.elapsed().as_millis() as u64, "initialised component builder");

        Self { context }
    }

    /// Appends global search paths.
    ///
    /// Only effective before the first resolution; the resolved graph is never
    /// recomputed.
    pub fn add_search_paths<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.context.add_search_paths(paths.into_iter().map(Into::into));
    }

    /// The root component node.
    pub fn root(&self) -> &Arc<Node> {
        self.context.root()
    }

    /// The shared resolution context of this build.
    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    /// Resolves the dependency graph (once) and returns every dependency in
    /// aggregation order.
    pub async fn resolve(&self) -> Result<&[Arc<Node>]> {
        self.context.resolve().await
    }

    /// Builds one asset category for the root, using the cache when possible.
    pub async fn build_category(&self, category: AssetCategory) -> Result<String> {
        build_node(&self.context, self.context.root(), category).await
    }

    /// Resolves the graph, then builds all categories concurrently.
    ///
    /// Fails as a whole if any category fails.
    pub async fn build(&self) -> Result<BuildArtifact> {
        // Resolve up front so the categories share one graph walk
        self.resolve().await?;

        let (scripts, styles, images, fonts, files) = tokio::try_join!(
            self.build_category(AssetCategory::Scripts),
            self.build_category(AssetCategory::Styles),
            self.build_category(AssetCategory::Images),
            self.build_category(AssetCategory::Fonts),
            self.build_category(AssetCategory::Files),
        )?;

        Ok(BuildArtifact {
            scripts,
            styles,
            images,
            fonts,
            files,
            runtime: REQUIRE_RUNTIME,
        })
    }
}
