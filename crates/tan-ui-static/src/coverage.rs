//! Class scanning and manifest coverage.
//!
//! The CSS generator only emits rules for classes it finds in the manifest
//! page, so every token a spec can produce must appear in some rendered
//! entry. [`check_coverage`] compares spec rules against the classes
//! actually present in the rendered manifest.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tan_ui_components::ComponentRegistry;

use crate::builder::BuildError;
use crate::manifest::{render_entries, StyleManifestEntry};

/// Collect every class token found in `class="..."` attributes.
pub fn scan_classes(markup: &str) -> BTreeSet<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"\sclass="([^"]*)""#).expect("Invalid class attribute regex")
    });

    RE.captures_iter(markup)
        .filter_map(|caps| caps.get(1))
        .flat_map(|m| {
            unescape_attr(m.as_str())
                .split_ascii_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

fn unescape_attr(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Classes a spec declares that no manifest entry renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageGap {
    /// Component whose spec declares the classes
    pub component: String,

    /// Axis and value of the rule, or `None` for base classes
    pub rule: Option<(String, String)>,

    /// Tokens absent from every rendered entry
    pub missing: Vec<String>,
}

impl fmt::Display for CoverageGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule {
            Some((axis, value)) => write!(f, "{} {}={}", self.component, axis, value)?,
            None => write!(f, "{} (base)", self.component)?,
        }
        write!(f, ": missing {}", self.missing.join(" "))
    }
}

/// Result of a coverage check.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CoverageReport {
    /// Number of entries rendered
    pub entries: usize,

    /// Distinct classes found in the rendered manifest
    pub classes_found: usize,

    /// Uncovered rules
    pub gaps: Vec<CoverageGap>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.gaps.is_empty()
    }
}

/// Check that every class of every registered spec appears in the manifest.
pub fn check_coverage(
    registry: &ComponentRegistry,
    entries: &[StyleManifestEntry],
) -> Result<CoverageReport, BuildError> {
    let rendered = render_entries(registry, entries)?;
    let found: BTreeSet<String> = rendered.iter().flat_map(|e| scan_classes(&e.markup)).collect();

    let missing = |classes: &[String]| -> Vec<String> {
        classes.iter().filter(|c| !found.contains(*c)).cloned().collect()
    };

    let mut gaps = Vec::new();
    for spec in registry.specs() {
        let base = missing(spec.base());
        if !base.is_empty() {
            gaps.push(CoverageGap {
                component: spec.component().to_string(),
                rule: None,
                missing: base,
            });
        }

        for axis in spec.axes() {
            for rule in &axis.rules {
                let absent = missing(&rule.classes);
                if !absent.is_empty() {
                    gaps.push(CoverageGap {
                        component: spec.component().to_string(),
                        rule: Some((axis.name.clone(), rule.value.clone())),
                        missing: absent,
                    });
                }
            }
        }
    }

    for gap in &gaps {
        tracing::debug!("Coverage gap: {}", gap);
    }

    Ok(CoverageReport {
        entries: rendered.len(),
        classes_found: found.len(),
        gaps,
    })
}
