//! Print or write the style manifest page.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tan_ui_components::ComponentRegistry;
use tan_ui_static::{render_manifest_page, STYLE_MANIFEST};

/// Run the manifest command.
pub fn run(output: Option<PathBuf>) -> Result<()> {
    let page = render_manifest_page(&ComponentRegistry::builtin(), STYLE_MANIFEST)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, page).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", page),
    }

    Ok(())
}
