//! Project initialization command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::config::{Config, CONFIG_FILE};

/// Write the canonical descriptor
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Project directory
    #[arg(default_value = ".")]
    pub dir: String,

    /// Overwrite an existing bundle.toml
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn execute(&self) -> Result<()> {
        let project_dir = Path::new(&self.dir);
        let config_path = project_dir.join(CONFIG_FILE);

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                config_path.display()
            );
        }

        fs::create_dir_all(project_dir).context("Failed to create project directory")?;

        let content = format!(
            "# Plugins run in declaration order.\n\n{}",
            Config::canonical().to_toml_string()?
        );
        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;

        info!("Wrote {}", config_path.display());
        eprintln!("  {} Created {}", "✓".green(), CONFIG_FILE.cyan());

        Ok(())
    }
}
