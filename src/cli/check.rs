//! Check command implementation

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::config::BuildConfig;

/// Validate the build descriptor
#[derive(Args, Debug)]
pub struct CheckCommand {}

impl CheckCommand {
    pub fn execute(&self, config_path: &str) -> Result<()> {
        info!("Loading configuration from {}", config_path);
        let config = BuildConfig::load(config_path)?;

        eprintln!(
            "{} {} is a valid build descriptor\n",
            "✓".green().bold(),
            config_path.cyan()
        );

        eprintln!("  {} entry {}", "•".dimmed(), config.lib.entry.cyan());

        let formats: Vec<&str> = config
            .lib
            .formats
            .iter()
            .map(|format| format.as_str())
            .collect();
        eprintln!("  {} formats {}", "•".dimmed(), formats.join(", ").cyan());

        if let Some(name) = &config.lib.name {
            eprintln!("  {} global name {}", "•".dimmed(), name.yellow());
        }

        if config.css.bundling.is_unified() {
            eprintln!("  {} css {}", "•".dimmed(), "unified".cyan());
        } else {
            eprintln!("  {} css {}", "•".dimmed(), "split per chunk".cyan());
        }

        if let Some(compiler) = config.compiler() {
            eprintln!(
                "  {} component compiler: preprocess [{}], custom elements {}",
                "•".dimmed(),
                compiler.preprocess.join(", ").cyan(),
                if compiler.compiler_options.custom_element {
                    "on".green()
                } else {
                    "off".yellow()
                }
            );
        }

        eprintln!();

        Ok(())
    }
}
