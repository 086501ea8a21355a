//! Command-line interface for tech-radar-build
//!
//! Provides the main CLI structure using clap with subcommands for:
//! - `plan`: resolve the descriptor into its output artifacts
//! - `check`: validate a build descriptor
//! - `init`: project scaffolding

mod check;
mod init;
mod plan;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

pub use check::CheckCommand;
pub use init::InitCommand;
pub use plan::PlanCommand;

/// Build configuration front end for the tech-radar-editor component library
#[derive(Parser, Debug)]
#[command(name = "tech-radar-build")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to tech-radar.toml config file
    #[arg(short, long, global = true, default_value = "tech-radar.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the artifacts a build of this descriptor must produce
    Plan(PlanCommand),

    /// Validate the build descriptor
    Check(CheckCommand),

    /// Initialize a new component library project
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        print_banner();

        match &self.command {
            Commands::Plan(cmd) => cmd.execute(&self.config),
            Commands::Check(cmd) => cmd.execute(&self.config),
            Commands::Init(cmd) => cmd.execute(),
        }
    }
}

/// Print the tool banner
fn print_banner() {
    eprintln!(
        "\n{} {} {}\n",
        "◉".cyan(),
        "tech-radar-build".bold().cyan(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
