//! Stylesheet artifact handling: discovery, minification, publish and cleanup.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::builder::BuildError;

/// Directory (under the temp dir) where generators emit hashed assets.
pub const ASSETS_DIR: &str = "assets";

/// Fixed fallback file name (under the temp dir).
pub const FIXED_CSS: &str = "build-styles.css";

/// Default declaration for typed stylesheet imports.
pub const DEFAULT_TYPES_STUB: &str =
    "// Type declaration for styles import\ndeclare const styles: string;\nexport default styles;\n";

/// Where a generated stylesheet was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactLocation {
    /// A (possibly content-hashed) file under `assets/`
    Hashed(PathBuf),
    /// The fixed fallback path
    Fixed(PathBuf),
}

impl ArtifactLocation {
    pub fn path(&self) -> &Path {
        match self {
            ArtifactLocation::Hashed(p) | ArtifactLocation::Fixed(p) => p,
        }
    }
}

/// Locate the generated stylesheet in a temp directory.
///
/// The first `.css` file in `assets/` (by file name) wins; otherwise the fixed
/// `build-styles.css` is used. Neither existing is `ArtifactNotFound`.
pub fn discover_artifact(temp_dir: &Path) -> Result<ArtifactLocation, BuildError> {
    let assets_dir = temp_dir.join(ASSETS_DIR);
    let fixed = temp_dir.join(FIXED_CSS);

    if assets_dir.is_dir() {
        let hashed = WalkDir::new(&assets_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .find(|e| {
                e.file_type().is_file()
                    && e.file_name().to_str().is_some_and(|n| n.ends_with(".css"))
            });

        if let Some(entry) = hashed {
            tracing::debug!("Found generated stylesheet {}", entry.path().display());
            return Ok(ArtifactLocation::Hashed(entry.into_path()));
        }
    }

    if fixed.is_file() {
        tracing::debug!("Using fixed stylesheet path {}", fixed.display());
        return Ok(ArtifactLocation::Fixed(fixed));
    }

    Err(BuildError::ArtifactNotFound {
        hashed_dir: assets_dir.display().to_string(),
        fixed_path: fixed.display().to_string(),
    })
}

/// Discover the generated stylesheet and read its contents.
///
/// The bytes are returned untouched; generators are not required to emit UTF-8.
pub fn read_artifact(temp_dir: &Path) -> Result<(ArtifactLocation, Vec<u8>), BuildError> {
    let location = discover_artifact(temp_dir)?;
    let css = fs::read(location.path())
        .map_err(|e| BuildError::ReadError(format!("{}: {}", location.path().display(), e)))?;
    Ok((location, css))
}

/// Write CSS verbatim to `destination`, creating parent directories.
pub fn publish(css: &[u8], destination: &Path) -> Result<(), BuildError> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
    }
    fs::write(destination, css)
        .map_err(|e| BuildError::WriteError(format!("{}: {}", destination.display(), e)))
}

/// Write the stylesheet type declaration next to the published CSS.
///
/// Copies `source` when it exists, otherwise writes [`DEFAULT_TYPES_STUB`].
pub fn write_types_stub(source: Option<&Path>, destination: &Path) -> Result<(), BuildError> {
    let content = match source {
        Some(path) if path.is_file() => fs::read_to_string(path)
            .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))?,
        _ => DEFAULT_TYPES_STUB.to_string(),
    };
    publish(content.as_bytes(), destination)
}

/// Remove the temp directory tree.
///
/// A missing directory is not an error.
pub fn cleanup(temp_dir: &Path) -> Result<(), BuildError> {
    match fs::remove_dir_all(temp_dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(BuildError::CleanupFailure {
            path: temp_dir.display().to_string(),
            message: e.to_string(),
        }),
    }
}

/// Minify CSS using lightningcss.
pub fn minify_css(css: &[u8]) -> Result<Vec<u8>, BuildError> {
    use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

    let css = std::str::from_utf8(css)
        .map_err(|e| BuildError::MinifyError(format!("stylesheet is not UTF-8: {}", e)))?;
    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| BuildError::MinifyError(format!("CSS parse error: {}", e)))?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| BuildError::MinifyError(format!("CSS minify error: {}", e)))?;

    Ok(minified.code.into_bytes())
}
