//! Template engine for the manifest page and generator entry stylesheet.

use minijinja::{context, Environment};

/// A manifest entry rendered to markup.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RenderedEntry {
    /// Entry identifier
    pub id: String,
    /// Component name
    pub component: String,
    /// Rendered HTML
    pub markup: String,
}

/// Context for rendering the manifest page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ManifestContext {
    /// Page title
    pub title: String,
    /// Rendered entries
    pub entries: Vec<RenderedEntry>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with default templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("manifest.html".to_string(), MANIFEST_TEMPLATE.to_string())
            .expect("Failed to add manifest template");

        env.add_template_owned("entry.css".to_string(), ENTRY_CSS_TEMPLATE.to_string())
            .expect("Failed to add entry stylesheet template");

        Self { env }
    }

    /// Render the manifest page.
    pub fn render_manifest(&self, context: &ManifestContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("manifest.html")?;
        tmpl.render(context)
    }

    /// Render the generator entry stylesheet.
    ///
    /// `imports` are written as `@import` rules; `sources` as `@source` rules
    /// relative to the entry file. A bare `tailwindcss` import disables
    /// automatic source detection so only `sources` are scanned.
    pub fn render_entry_css(
        &self,
        imports: &[String],
        sources: &[String],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("entry.css")?;
        tmpl.render(context! { imports => imports, sources => sources })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const MANIFEST_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{{ title }}</title>
</head>
<body>
{%- for entry in entries %}
  <section data-manifest-entry="{{ entry.id }}" data-component="{{ entry.component }}">
    {{ entry.markup | safe }}
  </section>
{%- endfor %}
</body>
</html>
"#;

const ENTRY_CSS_TEMPLATE: &str = r#"/* Generated by tan-ui. */
{%- for path in imports %}
{%- if path == "tailwindcss" %}
@import "tailwindcss" source(none);
{%- else %}
@import "{{ path }}";
{%- endif %}
{%- endfor %}
{%- for path in sources %}
@source "{{ path }}";
{%- endfor %}
"#;
