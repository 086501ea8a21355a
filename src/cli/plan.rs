//! Plan command implementation

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::config::BuildConfig;
use crate::plan::{Artifact, ArtifactKind, BuildPlan};

/// Show the artifacts a build of this descriptor must produce
#[derive(Args, Debug)]
pub struct PlanCommand {
    /// Use the built-in tech-radar-editor descriptor instead of a config file
    #[arg(long)]
    pub builtin: bool,

    /// Emit the plan as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl PlanCommand {
    pub fn execute(&self, config_path: &str) -> Result<()> {
        let config = if self.builtin {
            BuildConfig::tech_radar_editor()
        } else {
            info!("Loading configuration from {}", config_path);
            BuildConfig::load(config_path)?
        };

        let plan = BuildPlan::from_config(&config)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
            return Ok(());
        }

        eprintln!(
            "{} {} {} {}",
            "→".blue(),
            plan.entry.cyan(),
            "→".dimmed(),
            plan.out_dir.cyan()
        );

        if let Some(name) = &plan.name {
            eprintln!("  {} global name {}", "•".dimmed(), name.yellow());
        }

        eprintln!();

        for artifact in &plan.artifacts {
            eprintln!(
                "  {} {} {}",
                "•".dimmed(),
                artifact.file_name.cyan(),
                describe(artifact).dimmed()
            );
        }

        eprintln!(
            "\n{} {} artifact(s) planned\n",
            "✓".green().bold(),
            plan.artifacts.len()
        );

        Ok(())
    }
}

fn describe(artifact: &Artifact) -> String {
    match artifact.kind {
        ArtifactKind::Bundle { format } => format!("{format} bundle"),
        ArtifactKind::Stylesheet => "unified stylesheet".to_string(),
    }
}
