//! tech-radar-build - build configuration front end for the
//! tech-radar-editor web component library
//!
//! Declares how the library is built: which compiler plugin runs on
//! component source, which module formats are emitted, how the output
//! files are named, and how component styles are bundled. The heavy
//! lifting (module resolution, compilation, bundling) belongs to the
//! external bundler this descriptor is handed to.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod config;
mod plan;

pub use cli::Cli;
pub use config::BuildConfig;
pub use plan::BuildPlan;

/// Initialize the logging/tracing system
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("tech_radar_build=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tech_radar_build=info"))
    };

    // Logs go to stderr; stdout is reserved for `plan --json`
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    cli.execute()
}
