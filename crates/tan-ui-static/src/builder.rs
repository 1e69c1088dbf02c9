//! Stylesheet build pipeline.
//!
//! Stages run strictly in order: render manifest, run generator, discover
//! the generated CSS, publish it, write the type stub, remove the temp dir.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tan_ui_components::{ComponentRegistry, RegistryError};

use crate::assets::{self, ArtifactLocation, FIXED_CSS};
use crate::generator::{CssGenerator, GenerateJob, GeneratorError};
use crate::manifest::{render_manifest_page, StyleManifestEntry, STYLE_MANIFEST};
use crate::templates::TemplateEngine;

/// File name of the rendered manifest page inside the temp dir.
pub const MARKUP_FILE: &str = "build-styles.html";

/// File name of the generator entry stylesheet inside the temp dir.
pub const ENTRY_CSS_FILE: &str = "build-styles.entry.css";

/// Configuration for building the stylesheet.
#[derive(Debug, Clone)]
pub struct StylesConfig {
    /// Temporary working directory, removed after publishing
    pub temp_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Published stylesheet file name
    pub stylesheet: String,

    /// Project stylesheet imported by the entry CSS (theme tokens etc.)
    pub input_css: Option<PathBuf>,

    /// Source for `styles.d.ts`
    pub types_source: Option<PathBuf>,

    /// Write `styles.d.ts` next to the stylesheet
    pub types_stub: bool,

    /// Minify the published CSS
    pub minify: bool,
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self {
            temp_dir: PathBuf::from("dist-temp"),
            output_dir: PathBuf::from("dist"),
            stylesheet: "tan-ui-kit.css".to_string(),
            input_css: None,
            types_source: None,
            types_stub: true,
            minify: false,
        }
    }
}

impl StylesConfig {
    /// Path of the published stylesheet.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.output_dir.join(&self.stylesheet)
    }

    /// Path of the published type declaration.
    pub fn types_path(&self) -> PathBuf {
        self.output_dir.join("styles.d.ts")
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Manifest entries rendered
    pub entries: usize,

    /// Where the generated CSS was found
    pub source: ArtifactLocation,

    /// Published stylesheet
    pub stylesheet: PathBuf,

    /// Published stylesheet size in bytes
    pub bytes: usize,

    /// Set when the temp dir could not be removed
    pub cleanup_error: Option<String>,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Generated stylesheet not found. Checked: {hashed_dir}/*.css and {fixed_path}")]
    ArtifactNotFound {
        hashed_dir: String,
        fixed_path: String,
    },

    #[error("Failed to remove temporary directory {path}: {message}")]
    CleanupFailure { path: String, message: String },

    #[error("Failed to read: {0}")]
    ReadError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to minify stylesheet: {0}")]
    MinifyError(String),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Removes the temp dir once the stylesheet is published.
pub type CleanupFn = fn(&Path) -> Result<(), BuildError>;

/// Stylesheet builder.
pub struct StylesBuilder<G> {
    config: StylesConfig,
    generator: G,
    registry: ComponentRegistry,
    manifest: &'static [StyleManifestEntry],
    templates: TemplateEngine,
    cleanup: CleanupFn,
}

impl<G: CssGenerator> StylesBuilder<G> {
    /// Create a builder over the built-in components and manifest.
    pub fn new(config: StylesConfig, generator: G) -> Self {
        Self {
            config,
            generator,
            registry: ComponentRegistry::builtin(),
            manifest: STYLE_MANIFEST,
            templates: TemplateEngine::new(),
            cleanup: assets::cleanup,
        }
    }

    /// Replace the final temp dir removal.
    pub fn with_cleanup(mut self, cleanup: CleanupFn) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Build the stylesheet.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let temp_dir = &self.config.temp_dir;

        let job = self.prepare(temp_dir)?;
        tracing::info!(
            "Rendered {} manifest entries to {}",
            self.manifest.len(),
            job.markup.display()
        );

        tracing::info!("Generating CSS with {}", self.generator.name());
        self.generator.generate(&job).await?;

        let (source, css) = assets::read_artifact(temp_dir)?;
        let css = if self.config.minify {
            assets::minify_css(&css)?
        } else {
            css
        };

        let stylesheet = self.config.stylesheet_path();
        assets::publish(&css, &stylesheet)?;
        tracing::info!(
            "Copied generated CSS from {} to {}",
            source.path().display(),
            stylesheet.display()
        );

        if self.config.types_stub {
            assets::write_types_stub(self.config.types_source.as_deref(), &self.config.types_path())?;
        }

        let cleanup_error = match (self.cleanup)(temp_dir) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!("{}", e);
                Some(e.to_string())
            }
        };

        Ok(BuildResult {
            entries: self.manifest.len(),
            source,
            stylesheet,
            bytes: css.len(),
            cleanup_error,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Write the manifest page and entry stylesheet into the temp dir.
    fn prepare(&self, temp_dir: &Path) -> Result<GenerateJob, BuildError> {
        // Leftovers from an aborted run would shadow this run's output.
        if temp_dir.exists() {
            assets::cleanup(temp_dir)?;
        }
        fs::create_dir_all(temp_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let markup = temp_dir.join(MARKUP_FILE);
        let page = render_manifest_page(&self.registry, self.manifest)?;
        fs::write(&markup, page).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let imports = match &self.config.input_css {
            Some(path) => vec![absolute(path)?.display().to_string()],
            // Rendered with `source(none)`; only the manifest is scanned.
            None => vec!["tailwindcss".to_string()],
        };
        let sources = vec![format!("./{}", MARKUP_FILE)];
        let entry = self
            .templates
            .render_entry_css(&imports, &sources)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let entry_css = temp_dir.join(ENTRY_CSS_FILE);
        fs::write(&entry_css, entry).map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(GenerateJob {
            temp_dir: temp_dir.to_path_buf(),
            markup,
            entry_css,
            output: temp_dir.join(FIXED_CSS),
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf, BuildError> {
    std::path::absolute(path)
        .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::scan_classes;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    /// Emits one rule per scanned class into a hashed asset file.
    struct ScanGenerator {
        hashed: bool,
    }

    impl CssGenerator for ScanGenerator {
        fn name(&self) -> &str {
            "scan"
        }

        async fn generate(&self, job: &GenerateJob) -> Result<(), GeneratorError> {
            let markup = fs::read_to_string(&job.markup).map_err(|e| GeneratorError::Other(e.to_string()))?;
            let css: String = scan_classes(&markup)
                .iter()
                .map(|c| format!("/* {} */\n", c))
                .collect();
            let target = if self.hashed {
                let dir = job.temp_dir.join("assets");
                fs::create_dir_all(&dir).map_err(|e| GeneratorError::Other(e.to_string()))?;
                dir.join("build-styles-1a2b3c.css")
            } else {
                job.output.clone()
            };
            fs::write(target, css).map_err(|e| GeneratorError::Other(e.to_string()))
        }
    }

    /// Writes nothing.
    struct SilentGenerator;

    impl CssGenerator for SilentGenerator {
        fn name(&self) -> &str {
            "silent"
        }

        async fn generate(&self, _job: &GenerateJob) -> Result<(), GeneratorError> {
            Ok(())
        }
    }

    fn config(root: &Path) -> StylesConfig {
        StylesConfig {
            temp_dir: root.join("dist-temp"),
            output_dir: root.join("dist"),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn builds_and_publishes_stylesheet() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());

        let result = StylesBuilder::new(config.clone(), ScanGenerator { hashed: true })
            .build()
            .await
            .unwrap();

        assert_eq!(result.entries, STYLE_MANIFEST.len());
        assert!(matches!(result.source, ArtifactLocation::Hashed(_)));
        assert!(result.cleanup_error.is_none());

        let css = fs::read_to_string(config.stylesheet_path()).unwrap();
        assert!(css.contains("bg-destructive"));
        assert!(css.contains("data-open:animate-accordion-down"));
        assert!(config.types_path().exists());
        assert!(!config.temp_dir.exists());
    }

    fn failing_cleanup(path: &Path) -> Result<(), BuildError> {
        Err(BuildError::CleanupFailure {
            path: path.display().to_string(),
            message: "Directory not empty".to_string(),
        })
    }

    #[tokio::test]
    async fn cleanup_failure_does_not_fail_build() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());

        let result = StylesBuilder::new(config.clone(), ScanGenerator { hashed: true })
            .with_cleanup(failing_cleanup)
            .build()
            .await
            .unwrap();

        let message = result.cleanup_error.expect("cleanup error reported");
        assert!(message.contains("dist-temp"));
        assert!(config.stylesheet_path().exists());
        assert!(config.types_path().exists());
        assert!(config.temp_dir.exists());
    }

    #[tokio::test]
    async fn uses_fixed_output_when_not_hashed() {
        let temp = tempdir().unwrap();
        let result = StylesBuilder::new(config(temp.path()), ScanGenerator { hashed: false })
            .build()
            .await
            .unwrap();

        assert!(matches!(result.source, ArtifactLocation::Fixed(_)));
    }

    #[tokio::test]
    async fn rebuild_is_byte_identical() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());
        let builder = StylesBuilder::new(config.clone(), ScanGenerator { hashed: true });

        builder.build().await.unwrap();
        let first = fs::read(config.stylesheet_path()).unwrap();
        builder.build().await.unwrap();
        let second = fs::read(config.stylesheet_path()).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn missing_artifact_fails_build() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());

        let err = StylesBuilder::new(config.clone(), SilentGenerator)
            .build()
            .await
            .unwrap_err();

        assert!(matches!(err, BuildError::ArtifactNotFound { .. }));
        assert!(!config.stylesheet_path().exists());
    }

    #[tokio::test]
    async fn entry_css_imports_input_and_sources_manifest() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("index.css");
        fs::write(&input, "@import \"tailwindcss\";").unwrap();
        let config = StylesConfig {
            input_css: Some(input),
            ..config(temp.path())
        };

        let builder = StylesBuilder::new(config.clone(), SilentGenerator);
        let job = builder.prepare(&config.temp_dir).unwrap();
        let entry = fs::read_to_string(&job.entry_css).unwrap();

        assert!(entry.contains("index.css\";"));
        assert!(entry.contains("@source \"./build-styles.html\";"));
        assert!(job.markup.exists());
    }

    #[tokio::test]
    async fn default_entry_css_only_sources_manifest() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());

        let builder = StylesBuilder::new(config.clone(), SilentGenerator);
        let job = builder.prepare(&config.temp_dir).unwrap();
        let entry = fs::read_to_string(&job.entry_css).unwrap();

        assert!(entry.contains("@import \"tailwindcss\" source(none);"));
        assert!(entry.contains("@source \"./build-styles.html\";"));
    }

    #[tokio::test]
    async fn stale_temp_output_is_cleared_before_generating() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());
        fs::create_dir_all(config.temp_dir.join("assets")).unwrap();
        fs::write(config.temp_dir.join("assets/old.css"), "stale").unwrap();

        let err = StylesBuilder::new(config, SilentGenerator).build().await.unwrap_err();

        assert!(matches!(err, BuildError::ArtifactNotFound { .. }));
    }
}
