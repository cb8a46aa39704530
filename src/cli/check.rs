//! Check command implementation

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::config::Config;

/// Check the descriptor against the project on disk
#[derive(Args, Debug)]
pub struct CheckCommand {}

impl CheckCommand {
    pub fn execute(&self, config_path: &str) -> Result<()> {
        info!("Loading configuration from {}", config_path);
        let loaded = Config::load(config_path)?;

        let problems = loaded.check();
        if problems.is_empty() {
            eprintln!(
                "{} {} plugin(s) ready: {}",
                "✓".green().bold(),
                loaded.config.plugins().len(),
                loaded
                    .config
                    .plugins()
                    .iter()
                    .map(|p| p.name())
                    .collect::<Vec<_>>()
                    .join(", ")
                    .cyan()
            );
            return Ok(());
        }

        for problem in &problems {
            eprintln!("  {} {}", "✗".red(), problem);
        }
        anyhow::bail!("{} problem(s) found in {}", problems.len(), config_path)
    }
}
