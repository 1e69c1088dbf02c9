//! Configuration file (tan-ui.toml).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tan_ui_static::{CommandGenerator, StylesConfig};

/// Configuration file structure (tan-ui.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub styles: StylesSettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
}

#[derive(Debug, Deserialize)]
pub struct StylesSettings {
    #[serde(default = "default_temp_dir")]
    pub temp_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
    /// Project stylesheet with theme tokens
    pub input_css: Option<String>,
    /// Hand-written styles.d.ts to ship instead of the default stub
    pub types_source: Option<String>,
    #[serde(default = "default_true")]
    pub types_stub: bool,
    #[serde(default)]
    pub minify: bool,
}

impl Default for StylesSettings {
    fn default() -> Self {
        Self {
            temp_dir: default_temp_dir(),
            output_dir: default_output_dir(),
            stylesheet: default_stylesheet(),
            input_css: None,
            types_source: None,
            types_stub: true,
            minify: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_temp_dir() -> String {
    "dist-temp".to_string()
}
fn default_output_dir() -> String {
    "dist".to_string()
}
fn default_stylesheet() -> String {
    "tan-ui-kit.css".to_string()
}
fn default_true() -> bool {
    true
}
fn default_program() -> String {
    "npx".to_string()
}
fn default_args() -> Vec<String> {
    ["@tailwindcss/cli", "-i", "{entry_css}", "-o", "{output}"]
        .into_iter()
        .map(str::to_string)
        .collect()
}
fn default_timeout_secs() -> u64 {
    120
}

impl ConfigFile {
    /// Stylesheet build settings.
    pub fn styles_config(&self) -> StylesConfig {
        StylesConfig {
            temp_dir: PathBuf::from(&self.styles.temp_dir),
            output_dir: PathBuf::from(&self.styles.output_dir),
            stylesheet: self.styles.stylesheet.clone(),
            input_css: self.styles.input_css.as_ref().map(PathBuf::from),
            types_source: self.styles.types_source.as_ref().map(PathBuf::from),
            types_stub: self.styles.types_stub,
            minify: self.styles.minify,
        }
    }

    /// Generator process settings.
    pub fn generator(&self) -> CommandGenerator {
        CommandGenerator::new(&self.generator.program, self.generator.args.clone())
            .with_timeout(Duration::from_secs(self.generator.timeout_secs))
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
