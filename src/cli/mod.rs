//! Command-line interface for the component builder.
//!
//! # Commands
//!
//! - `build` - resolve a component and write its merged outputs
//! - `resolve` - print every resolved dependency in aggregation order
//!
//! # Global Options
//!
//! - `--verbose` - enable debug output
//! - `--quiet` - suppress everything except errors
//!
//! # Examples
//!
//! ```bash
//! cbuild build                       # build the component in the current directory
//! cbuild build app --dev --out dist  # include development dependencies
//! cbuild resolve app --format json   # list resolved component directories
//! ```

mod build;
mod resolve;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::builder::BuilderOptions;
use crate::config::BuildConfig;
use crate::constants::DEFAULT_COMPONENTS_DIR;
use crate::utils::{absolutize, resolve_against};

/// Root command and global options.
#[derive(Parser, Debug)]
#[command(name = "cbuild", version, about = "Build component bundles from component.json manifests")]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve dependencies and write the merged build outputs.
    ///
    /// See [`build::BuildCommand`].
    Build(build::BuildCommand),

    /// Print resolved component directories in aggregation order.
    ///
    /// See [`resolve::ResolveCommand`].
    Resolve(resolve::ResolveCommand),
}

/// Options shared by every command that resolves a component.
#[derive(Args, Debug, Clone)]
pub struct ComponentArgs {
    /// Root component directory
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Also resolve development dependencies
    #[arg(long)]
    dev: bool,

    /// Additional component search directory (repeatable, relative to DIR)
    #[arg(short = 'p', long = "path", value_name = "DIR")]
    paths: Vec<PathBuf>,

    /// Base directory that module names are relative to
    #[arg(long, value_name = "DIR")]
    root_path: Option<PathBuf>,
}

impl ComponentArgs {
    /// Absolute root component directory.
    fn root_dir(&self) -> PathBuf {
        absolutize(&self.dir)
    }

    /// Loads `cbuild.toml`, applies the environment, then the command-line flags.
    async fn load_config(&self, root_dir: &Path) -> Result<BuildConfig> {
        let mut config = BuildConfig::load(root_dir)
            .await
            .with_context(|| format!("Failed to load build configuration for {}", root_dir.display()))?;

        config.apply_env();

        if self.dev {
            config.dev = true;
        }
        if config.search_paths.is_empty() && !self.paths.is_empty() {
            config.search_paths.push(PathBuf::from(DEFAULT_COMPONENTS_DIR));
        }
        config.search_paths.extend(self.paths.iter().cloned());
        if let Some(root_path) = &self.root_path {
            config.root_path = Some(resolve_against(&absolutize(Path::new(".")), root_path));
        }

        Ok(config)
    }

    /// Resolves configuration into builder options.
    async fn builder_options(&self, root_dir: &Path) -> Result<(BuildConfig, BuilderOptions)> {
        let config = self.load_config(root_dir).await?;
        let options = config.clone().into_options(root_dir);
        Ok((config, options))
    }
}

impl Cli {
    /// Installs logging and runs the selected command.
    pub async fn execute(self) -> Result<()> {
        init_logging(self.log_level());

        match self.command {
            Commands::Build(cmd) => cmd.execute().await,
            Commands::Resolve(cmd) => cmd.execute().await,
        }
    }

    /// Log filter implied by the global flags; `None` keeps `RUST_LOG` or the default.
    #[must_use]
    pub fn log_level(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}

/// Installs the global `tracing` subscriber writing to stderr.
///
/// An explicit `level` wins over `RUST_LOG`; without either, `info` is used.
/// Calling this more than once is harmless.
pub fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
