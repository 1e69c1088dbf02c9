//! The style manifest: every component instance rendered during the
//! enumeration pass so the CSS generator sees all reachable classes.
//!
//! The list is curated by hand. Adding a value to a component axis without
//! adding an entry here is caught by [`check_coverage`](crate::check_coverage).

use serde::Serialize;
use tan_ui_components::ComponentRegistry;
use tan_ui_variants::Selections;

use crate::builder::BuildError;
use crate::templates::{ManifestContext, RenderedEntry, TemplateEngine};

/// One component instance in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleManifestEntry {
    /// Component name as known to the registry
    pub component: &'static str,

    /// Axis selections for this instance
    pub selections: &'static [(&'static str, &'static str)],
}

impl StyleManifestEntry {
    /// Stable identifier, e.g. `button-destructive-lg`.
    pub fn id(&self) -> String {
        let mut id = self.component.to_string();
        for (_, value) in self.selections {
            id.push('-');
            id.push_str(value);
        }
        id
    }

    pub fn selections(&self) -> Selections {
        self.selections.iter().copied().collect()
    }
}

const fn button(selections: &'static [(&'static str, &'static str)]) -> StyleManifestEntry {
    StyleManifestEntry {
        component: "button",
        selections,
    }
}

/// The built-in manifest.
pub const STYLE_MANIFEST: &[StyleManifestEntry] = &[
    button(&[("variant", "default"), ("size", "default")]),
    button(&[("variant", "default"), ("size", "sm")]),
    button(&[("variant", "default"), ("size", "lg")]),
    button(&[("variant", "default"), ("size", "icon")]),
    button(&[("variant", "default"), ("size", "xs")]),
    button(&[("variant", "destructive"), ("size", "default")]),
    button(&[("variant", "destructive"), ("size", "sm")]),
    button(&[("variant", "destructive"), ("size", "lg")]),
    button(&[("variant", "outline"), ("size", "default")]),
    button(&[("variant", "outline"), ("size", "sm")]),
    button(&[("variant", "outline"), ("size", "lg")]),
    button(&[("variant", "secondary"), ("size", "default")]),
    button(&[("variant", "secondary"), ("size", "sm")]),
    button(&[("variant", "secondary"), ("size", "lg")]),
    button(&[("variant", "ghost"), ("size", "default")]),
    button(&[("variant", "ghost"), ("size", "sm")]),
    button(&[("variant", "ghost"), ("size", "lg")]),
    button(&[("variant", "link"), ("size", "default")]),
    button(&[("variant", "link"), ("size", "sm")]),
    button(&[("variant", "link"), ("size", "lg")]),
    StyleManifestEntry {
        component: "accordion",
        selections: &[],
    },
];

/// Render each manifest entry to markup.
pub fn render_entries(
    registry: &ComponentRegistry,
    entries: &[StyleManifestEntry],
) -> Result<Vec<RenderedEntry>, BuildError> {
    entries
        .iter()
        .map(|entry| {
            let element = registry.render_sample(entry.component, &entry.selections())?;
            Ok(RenderedEntry {
                id: entry.id(),
                component: entry.component.to_string(),
                markup: element.to_html(),
            })
        })
        .collect()
}

/// Render the full manifest page that the CSS generator scans.
pub fn render_manifest_page(
    registry: &ComponentRegistry,
    entries: &[StyleManifestEntry],
) -> Result<String, BuildError> {
    let context = ManifestContext {
        title: "tan-ui style manifest".to_string(),
        entries: render_entries(registry, entries)?,
    };

    TemplateEngine::new()
        .render_manifest(&context)
        .map_err(|e| BuildError::TemplateError(e.to_string()))
}
