//! Configuration handling for the tech-radar-editor build
//!
//! Parses and manages tech-radar.toml build descriptors.

mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use schema::*;

/// Ways a build descriptor can be invalid
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one output format must be listed under [lib]")]
    NoFormats,

    #[error("output format '{0}' is listed more than once")]
    DuplicateFormat(ModuleFormat),

    #[error(
        "formats '{first}' and '{second}' both render to '{file_name}'; \
         add a [format] placeholder to lib.file_name"
    )]
    FileNameCollision {
        first: ModuleFormat,
        second: ModuleFormat,
        file_name: String,
    },

    #[error("format '{0}' exposes the library on the global scope and requires lib.name")]
    MissingGlobalName(ModuleFormat),

    #[error("entry module does not exist: {0}")]
    MissingEntry(PathBuf),
}

/// Main configuration structure — the build descriptor handed to the bundler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Plugin activations, in activation order
    #[serde(default)]
    pub plugins: Vec<PluginConfig>,

    /// Library build target
    pub lib: LibConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// CSS handling
    #[serde(default)]
    pub css: CssConfig,

    /// Root directory (computed from config file location)
    #[serde(skip)]
    pub root: PathBuf,
}

impl BuildConfig {
    /// Load a descriptor from a file path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let canonical_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        let content = fs::read_to_string(&canonical_path)
            .with_context(|| format!("Failed to read config file: {}", canonical_path.display()))?;

        let mut config: BuildConfig =
            toml::from_str(&content).with_context(|| "Failed to parse tech-radar.toml")?;

        // Set root directory to the directory containing the config file
        config.root = canonical_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        config.validate()?;

        Ok(config)
    }

    /// The descriptor for the tech-radar-editor component library
    ///
    /// Pure value construction; performs no I/O and cannot fail.
    pub fn tech_radar_editor() -> Self {
        Self {
            plugins: vec![PluginConfig::ComponentCompiler(CompilerConfig {
                compiler_options: CompilerOptions {
                    custom_element: true,
                },
                ..CompilerConfig::default()
            })],
            lib: LibConfig {
                entry: "src/main.ts".to_string(),
                formats: vec![ModuleFormat::Es, ModuleFormat::Umd],
                name: Some("TechRadarEditor".to_string()),
                file_name: FileNameTemplate::new("tech-radar-editor.[format].js"),
            },
            output: OutputConfig::default(),
            css: CssConfig {
                bundling: CssBundling::Unified,
            },
            root: PathBuf::from("."),
        }
    }

    /// Validate the descriptor against the project on disk
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_outputs()?;

        let entry = self.entry_path();
        if !entry.exists() {
            return Err(ConfigError::MissingEntry(entry));
        }

        Ok(())
    }

    /// Check the output shape invariants
    ///
    /// Every requested format must render to its own file name, and any
    /// format served from the global scope needs a library name. These
    /// checks are pure and do not touch the filesystem.
    pub fn validate_outputs(&self) -> Result<(), ConfigError> {
        let formats = &self.lib.formats;

        if formats.is_empty() {
            return Err(ConfigError::NoFormats);
        }

        for (index, &format) in formats.iter().enumerate() {
            if formats[..index].contains(&format) {
                return Err(ConfigError::DuplicateFormat(format));
            }

            if format.requires_global_name() && self.lib.name.is_none() {
                return Err(ConfigError::MissingGlobalName(format));
            }
        }

        let mut rendered: Vec<(String, ModuleFormat)> = Vec::new();
        for &format in formats {
            let file_name = self.lib.output_file_name(format);
            if let Some((_, first)) = rendered.iter().find(|(name, _)| *name == file_name) {
                return Err(ConfigError::FileNameCollision {
                    first: *first,
                    second: format,
                    file_name,
                });
            }
            rendered.push((file_name, format));
        }

        Ok(())
    }

    /// First component compiler activation, if any
    pub fn compiler(&self) -> Option<&CompilerConfig> {
        self.plugins.iter().find_map(|plugin| match plugin {
            PluginConfig::ComponentCompiler(compiler) => Some(compiler),
        })
    }

    /// Get the absolute output directory path
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.output.dir)
    }

    /// Get the absolute path of the entry module
    pub fn entry_path(&self) -> PathBuf {
        self.root.join(&self.lib.entry)
    }
}
