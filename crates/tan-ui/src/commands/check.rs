//! Manifest coverage check.

use anyhow::Result;
use tan_ui_components::ComponentRegistry;
use tan_ui_static::{check_coverage, STYLE_MANIFEST};

/// Run the check command. Fails when any class is left out of the manifest.
pub fn run() -> Result<()> {
    let report = check_coverage(&ComponentRegistry::builtin(), STYLE_MANIFEST)?;

    if !report.is_complete() {
        for gap in &report.gaps {
            tracing::error!("{}", gap);
        }
        anyhow::bail!(
            "Style manifest is missing classes for {} rule(s); add entries to STYLE_MANIFEST",
            report.gaps.len()
        );
    }

    tracing::info!(
        "Style manifest covers all rules ({} entries, {} classes)",
        report.entries,
        report.classes_found
    );

    Ok(())
}
