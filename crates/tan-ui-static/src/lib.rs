//! Stylesheet packaging for tan-ui.
//!
//! Renders every component combination listed in the style manifest, hands
//! the result to an external class-to-CSS generator and publishes the
//! generated stylesheet at a fixed path.

pub mod assets;
pub mod builder;
pub mod coverage;
pub mod generator;
pub mod manifest;
pub mod templates;

pub use assets::{cleanup, discover_artifact, publish, read_artifact, ArtifactLocation};
pub use builder::{BuildError, BuildResult, CleanupFn, StylesBuilder, StylesConfig};
pub use coverage::{check_coverage, scan_classes, CoverageGap, CoverageReport};
pub use generator::{CommandGenerator, CssGenerator, GenerateJob, GeneratorError};
pub use manifest::{render_manifest_page, StyleManifestEntry, STYLE_MANIFEST};
