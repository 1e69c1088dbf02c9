//! Write a starter configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tan_ui_static::assets::DEFAULT_TYPES_STUB;

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing tan-ui...");

    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    } else {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
    }

    let types_path = Path::new("src").join("styles.d.ts");
    if !types_path.exists() || yes {
        fs::create_dir_all("src").context("Failed to create src directory")?;
        fs::write(&types_path, DEFAULT_TYPES_STUB)
            .with_context(|| format!("Failed to write {}", types_path.display()))?;
        tracing::info!("Created {}", types_path.display());
    }

    tracing::info!("Run 'tan-ui build' to generate the stylesheet.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# tan-ui Configuration

[styles]
# Scratch directory for the manifest page and generator output (removed after build)
temp_dir = "dist-temp"

# Where the stylesheet is published
output_dir = "dist"
stylesheet = "tan-ui-kit.css"

# Theme tokens and base layers imported before scanning
input_css = "src/index.css"

# Ship a typed declaration for `import styles from "tan-ui-kit/styles"`
types_stub = true
types_source = "src/styles.d.ts"

# Minify the published stylesheet
minify = false

[generator]
# Placeholders: {entry_css} {markup} {temp_dir} {output}
program = "npx"
args = ["@tailwindcss/cli", "-i", "{entry_css}", "-o", "{output}"]
timeout_secs = 120
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config: crate::config::ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.styles.stylesheet, "tan-ui-kit.css");
        assert_eq!(config.generator.args[2], "{entry_css}");
    }
}
