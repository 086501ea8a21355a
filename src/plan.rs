//! Resolved build plan
//!
//! Maps a build descriptor to the artifacts the bundler is obliged to
//! emit: one bundle per requested module format, named by the descriptor's
//! file-name template, plus a single combined stylesheet when the CSS
//! bundling policy is unified.

use serde::Serialize;

use crate::config::{BuildConfig, ConfigError, ModuleFormat};

/// File name the single combined stylesheet is emitted under
pub const UNIFIED_STYLESHEET: &str = "style.css";

/// What kind of output an artifact is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ArtifactKind {
    /// A module bundle in one output format
    Bundle { format: ModuleFormat },
    /// The combined stylesheet
    Stylesheet,
}

/// One output file the build must produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// File name within the output directory
    pub file_name: String,

    #[serde(flatten)]
    pub kind: ArtifactKind,
}

/// The full set of outputs a descriptor resolves to
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    /// Entry module the whole graph is built from
    pub entry: String,

    /// Global identifier for non-module consumers, when one is exposed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Output directory, relative to the project root
    pub out_dir: String,

    /// Artifacts in emission order: bundles first, stylesheet last
    pub artifacts: Vec<Artifact>,
}

impl BuildPlan {
    /// Resolve a descriptor into its output obligations
    pub fn from_config(config: &BuildConfig) -> Result<Self, ConfigError> {
        config.validate_outputs()?;

        let mut artifacts: Vec<Artifact> = config
            .lib
            .formats
            .iter()
            .map(|&format| Artifact {
                file_name: config.lib.output_file_name(format),
                kind: ArtifactKind::Bundle { format },
            })
            .collect();

        if config.css.bundling.is_unified() {
            artifacts.push(Artifact {
                file_name: UNIFIED_STYLESHEET.to_string(),
                kind: ArtifactKind::Stylesheet,
            });
        }

        Ok(Self {
            entry: config.lib.entry.clone(),
            name: config.lib.name.clone(),
            out_dir: config.output.dir.clone(),
            artifacts,
        })
    }

    /// Bundle artifacts only, in format order
    pub fn bundles(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts
            .iter()
            .filter(|artifact| matches!(artifact.kind, ArtifactKind::Bundle { .. }))
    }

    /// The stylesheet artifact, if the plan has one
    pub fn stylesheet(&self) -> Option<&Artifact> {
        self.artifacts
            .iter()
            .find(|artifact| artifact.kind == ArtifactKind::Stylesheet)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::{CssBundling, FileNameTemplate};

    #[test]
    fn test_canonical_plan() {
        let config = BuildConfig::tech_radar_editor();
        let plan = BuildPlan::from_config(&config).unwrap();

        assert_eq!(plan.entry, "src/main.ts");
        assert_eq!(plan.name.as_deref(), Some("TechRadarEditor"));
        assert_eq!(plan.out_dir, "dist");

        let names: Vec<&str> = plan
            .artifacts
            .iter()
            .map(|artifact| artifact.file_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "tech-radar-editor.es.js",
                "tech-radar-editor.umd.js",
                "style.css"
            ]
        );

        assert_eq!(plan.bundles().count(), 2);
        assert_eq!(
            plan.stylesheet().map(|artifact| artifact.file_name.as_str()),
            Some("style.css")
        );
    }

    #[test]
    fn test_split_css_omits_stylesheet() {
        let mut config = BuildConfig::tech_radar_editor();
        config.css.bundling = CssBundling::Split;

        let plan = BuildPlan::from_config(&config).unwrap();

        assert_eq!(plan.artifacts.len(), 2);
        assert!(plan.stylesheet().is_none());
    }

    #[test]
    fn test_invalid_descriptor_is_rejected() {
        let mut config = BuildConfig::tech_radar_editor();
        config.lib.file_name = FileNameTemplate::new("bundle.js");

        assert!(matches!(
            BuildPlan::from_config(&config),
            Err(ConfigError::FileNameCollision { .. })
        ));
    }

    #[test]
    fn test_plan_serializes_to_json() {
        let config = BuildConfig::tech_radar_editor();
        let plan = BuildPlan::from_config(&config).unwrap();

        let value = serde_json::to_value(&plan).unwrap();

        assert_eq!(value["entry"], "src/main.ts");
        assert_eq!(value["artifacts"][0]["kind"], "bundle");
        assert_eq!(value["artifacts"][0]["format"], "es");
        assert_eq!(value["artifacts"][2]["kind"], "stylesheet");
        assert_eq!(value["artifacts"][2]["file_name"], "style.css");
    }
}
