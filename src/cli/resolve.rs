//! `cbuild resolve` - list resolved components.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use super::ComponentArgs;
use crate::builder::Builder;

/// Output format of the resolve command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One directory per line
    #[default]
    Text,
    /// JSON object with root and dependencies
    Json,
}

/// Resolves the dependency graph and prints it in aggregation order.
#[derive(Args, Debug)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub(super) component: ComponentArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct ResolveOutput {
    root: PathBuf,
    dependencies: Vec<PathBuf>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub async fn execute(self) -> Result<()> {
        let root_dir = self.component.root_dir();
        let (_, options) = self.component.builder_options(&root_dir).await?;

        let builder = Builder::new(&root_dir, options);
        let dependencies: Vec<PathBuf> = builder
            .resolve()
            .await
            .with_context(|| format!("Failed to resolve dependencies of {}", root_dir.display()))?
            .iter()
            .map(|node| node.directory().to_path_buf())
            .collect();

        match self.format {
            OutputFormat::Text => {
                for dir in &dependencies {
                    println!("{}", dir.display());
                }
            }
            OutputFormat::Json => {
                let output = ResolveOutput {
                    root: root_dir,
                    dependencies,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }

        Ok(())
    }
}
