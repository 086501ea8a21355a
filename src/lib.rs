//! tech-radar-build library
//!
//! Core functionality for the tech-radar-editor build front end.

pub mod cli;
pub mod config;
pub mod plan;

pub use cli::Cli;
pub use config::BuildConfig;
pub use plan::BuildPlan;
