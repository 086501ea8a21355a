//! Project initialization command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

/// Initialize a new component library project
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Project name / directory
    #[arg(default_value = ".")]
    pub name: String,
}

impl InitCommand {
    pub fn execute(&self) -> Result<()> {
        let project_dir = Path::new(&self.name);

        eprintln!(
            "{} Initializing component library project...\n",
            "→".blue()
        );

        if self.name != "." {
            fs::create_dir_all(project_dir).context("Failed to create project directory")?;
        }

        fs::write(project_dir.join("tech-radar.toml"), CONFIG_TEMPLATE)
            .context("Failed to write tech-radar.toml")?;
        eprintln!("  {} Created {}", "✓".green(), "tech-radar.toml".cyan());

        let src_dir = project_dir.join("src");
        fs::create_dir_all(&src_dir).context("Failed to create src directory")?;

        fs::write(src_dir.join("main.ts"), ENTRY_TEMPLATE)
            .context("Failed to write src/main.ts")?;
        eprintln!("  {} Created {}", "✓".green(), "src/main.ts".cyan());

        fs::write(src_dir.join("style.css"), STYLE_TEMPLATE)
            .context("Failed to write src/style.css")?;
        eprintln!("  {} Created {}", "✓".green(), "src/style.css".cyan());

        eprintln!(
            "\n{} Project initialized successfully!\n",
            "✓".green().bold()
        );

        eprintln!("  Next steps:");
        if self.name != "." {
            eprintln!("    {} cd {}", "→".dimmed(), self.name.cyan());
        }
        eprintln!("    {} tech-radar-build check", "→".dimmed());
        eprintln!("    {} tech-radar-build plan", "→".dimmed());
        eprintln!();

        Ok(())
    }
}

const CONFIG_TEMPLATE: &str = r#"# tech-radar-editor build descriptor

[lib]
entry = "src/main.ts"
formats = ["es", "umd"]
name = "TechRadarEditor"
file_name = "tech-radar-editor.[format].js"

[output]
dir = "dist"

[css]
bundling = "unified"

[[plugins]]
name = "component-compiler"
preprocess = ["typescript", "postcss"]

[plugins.compiler_options]
custom_element = true
"#;

const ENTRY_TEMPLATE: &str = r#"import './style.css';

export class TechRadarEditor extends HTMLElement {
  connectedCallback(): void {
    this.innerHTML = '<svg class="radar" viewBox="0 0 400 400"></svg>';
  }
}

customElements.define('tech-radar-editor', TechRadarEditor);
"#;

const STYLE_TEMPLATE: &str = r#".radar {
  display: block;
  width: 100%;
  height: auto;
}
"#;
