//! Configuration schema definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Module formats the library can be emitted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// Native ECMAScript module
    Es,
    /// CommonJS
    Cjs,
    /// Universal module definition, loadable as a script or a module
    Umd,
    /// Immediately-invoked function expression
    Iife,
}

impl ModuleFormat {
    /// The identifier used in config files and file-name templates
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleFormat::Es => "es",
            ModuleFormat::Cjs => "cjs",
            ModuleFormat::Umd => "umd",
            ModuleFormat::Iife => "iife",
        }
    }

    /// Formats consumable without a module system expose the library
    /// through a global identifier, which must be configured
    pub fn requires_global_name(self) -> bool {
        matches!(self, ModuleFormat::Umd | ModuleFormat::Iife)
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "es" => Ok(ModuleFormat::Es),
            "cjs" => Ok(ModuleFormat::Cjs),
            "umd" => Ok(ModuleFormat::Umd),
            "iife" => Ok(ModuleFormat::Iife),
            _ => Err(format!("Invalid module format: {value}")),
        }
    }
}

/// Output file-name template
///
/// The `[format]` placeholder is replaced with the format identifier when
/// the template is rendered, so a single template names every requested
/// output distinctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileNameTemplate {
    template: String,
}

impl FileNameTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Render the template for one output format
    pub fn render(&self, format: ModuleFormat) -> String {
        self.template.replace("[format]", format.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl From<String> for FileNameTemplate {
    fn from(template: String) -> Self {
        Self { template }
    }
}

/// Library build target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibConfig {
    /// Path to the single entry module, relative to the project root
    pub entry: String,

    /// Module formats to emit; each format is built independently
    pub formats: Vec<ModuleFormat>,

    /// Global identifier exposed to consumers loading the library without
    /// a module system (required by umd and iife output)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// File-name template for the emitted bundles
    pub file_name: FileNameTemplate,
}

impl LibConfig {
    /// Resolved output file name for one format
    pub fn output_file_name(&self, format: ModuleFormat) -> String {
        self.file_name.render(format)
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "dist".to_string()
}

/// How component styles are collected across the emitted outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssBundling {
    /// One stylesheet per output chunk
    Split,
    /// Every style fragment in the module graph concatenated into a
    /// single stylesheet artifact
    Unified,
}

impl Default for CssBundling {
    fn default() -> Self {
        CssBundling::Split
    }
}

impl CssBundling {
    pub fn is_unified(self) -> bool {
        self == CssBundling::Unified
    }
}

/// CSS handling configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CssConfig {
    /// Stylesheet bundling policy
    #[serde(default)]
    pub bundling: CssBundling,
}

/// A plugin activation; order in the config file is activation order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum PluginConfig {
    /// The component compiler, turning component source into portable
    /// custom elements
    #[serde(rename = "component-compiler")]
    ComponentCompiler(CompilerConfig),
}

/// Component compiler plugin options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Preprocessor steps applied to component source before compilation,
    /// in order
    #[serde(default = "default_preprocess")]
    pub preprocess: Vec<String>,

    /// Compiler output options
    #[serde(default)]
    pub compiler_options: CompilerOptions,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            preprocess: default_preprocess(),
            compiler_options: CompilerOptions::default(),
        }
    }
}

fn default_preprocess() -> Vec<String> {
    vec!["typescript".to_string(), "postcss".to_string()]
}

/// Component compiler output options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompilerOptions {
    /// Emit components as standard custom elements rather than
    /// framework-internal constructs
    #[serde(default)]
    pub custom_element: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_identifiers() {
        assert_eq!(ModuleFormat::Es.as_str(), "es");
        assert_eq!(ModuleFormat::Cjs.as_str(), "cjs");
        assert_eq!(ModuleFormat::Umd.as_str(), "umd");
        assert_eq!(ModuleFormat::Iife.as_str(), "iife");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("es".parse::<ModuleFormat>(), Ok(ModuleFormat::Es));
        assert_eq!("umd".parse::<ModuleFormat>(), Ok(ModuleFormat::Umd));
        assert!("amd".parse::<ModuleFormat>().is_err());
    }

    #[test]
    fn test_global_name_requirement() {
        assert!(ModuleFormat::Umd.requires_global_name());
        assert!(ModuleFormat::Iife.requires_global_name());
        assert!(!ModuleFormat::Es.requires_global_name());
        assert!(!ModuleFormat::Cjs.requires_global_name());
    }

    #[test]
    fn test_template_render() {
        let template = FileNameTemplate::new("tech-radar-editor.[format].js");
        assert_eq!(template.render(ModuleFormat::Es), "tech-radar-editor.es.js");
        assert_eq!(
            template.render(ModuleFormat::Umd),
            "tech-radar-editor.umd.js"
        );
    }

    #[test]
    fn test_template_without_placeholder_is_constant() {
        let template = FileNameTemplate::new("bundle.js");
        assert_eq!(template.render(ModuleFormat::Es), "bundle.js");
        assert_eq!(template.render(ModuleFormat::Umd), "bundle.js");
    }

    #[test]
    fn test_css_bundling_default_is_split() {
        assert_eq!(CssConfig::default().bundling, CssBundling::Split);
        assert!(!CssBundling::Split.is_unified());
        assert!(CssBundling::Unified.is_unified());
    }
}
