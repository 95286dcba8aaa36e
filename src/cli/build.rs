//! `cbuild build` - write merged build outputs.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

use super::ComponentArgs;
use crate::builder::{AssetCategory, BuildArtifact, Builder};
use crate::constants::{SCRIPTS_OUTPUT_FILE, STYLES_OUTPUT_FILE};

/// Builds a component and writes one file per output.
///
/// `build.js` (module runtime followed by the scripts output) and `build.css`
/// are always written. Images, fonts and files are written to `<category>.txt`
/// only when non-empty.
#[derive(Args, Debug)]
pub struct BuildCommand {
    #[command(flatten)]
    pub(super) component: ComponentArgs,

    /// Output directory (default: `output_dir` from cbuild.toml, else DIR/build)
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,
}

impl BuildCommand {
    /// Execute the build command.
    pub async fn execute(self) -> Result<()> {
        let root_dir = self.component.root_dir();
        let (config, options) = self.component.builder_options(&root_dir).await?;

        let out_dir = match &self.out {
            Some(out) => crate::utils::absolutize(out),
            None => config.output_dir(&root_dir),
        };

        let builder = Builder::new(&root_dir, options);
        let artifact = builder
            .build()
            .await
            .with_context(|| format!("Failed to build component {}", root_dir.display()))?;

        let written = write_artifact(&artifact, &out_dir).await?;
        let components = builder.resolve().await?.len() + 1;

        info!(output = %out_dir.display(), files = written.len(), "build written");
        println!(
            "{} {} component(s) into {}",
            "Built".green().bold(),
            components,
            out_dir.display()
        );

        Ok(())
    }
}

/// Writes the artifact into `out_dir`, returning the paths written.
pub(crate) async fn write_artifact(artifact: &BuildArtifact, out_dir: &Path) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut outputs = vec![
        (SCRIPTS_OUTPUT_FILE.to_string(), format!("{}\n{}", artifact.runtime, artifact.scripts)),
        (STYLES_OUTPUT_FILE.to_string(), artifact.styles.clone()),
    ];
    for category in [AssetCategory::Images, AssetCategory::Fonts, AssetCategory::Files] {
        let content = artifact.get(category);
        if !content.is_empty() {
            outputs.push((format!("{category}.txt"), content.to_string()));
        }
    }

    let mut written = Vec::with_capacity(outputs.len());
    for (name, content) in outputs {
        let path = out_dir.join(name);
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
