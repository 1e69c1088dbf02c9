//! Button with variant and size styling.

use std::sync::LazyLock;

use tan_ui_variants::{merge_classes, resolve, Selections, VariantError, VariantSpec};

use crate::markup::Element;

const BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md \
    text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 \
    [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 \
    outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px]";

/// Button variant values with their classes.
pub const VARIANTS: &[(&str, &str)] = &[
    ("default", "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90"),
    (
        "destructive",
        "bg-destructive text-white shadow-xs hover:bg-destructive/90 \
         focus-visible:ring-destructive/20",
    ),
    (
        "outline",
        "border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground",
    ),
    ("secondary", "bg-secondary text-secondary-foreground shadow-xs hover:bg-secondary/80"),
    ("ghost", "hover:bg-accent hover:text-accent-foreground"),
    ("link", "text-primary underline-offset-4 hover:underline"),
];

/// Button size values with their classes.
pub const SIZES: &[(&str, &str)] = &[
    ("default", "h-9 px-4 py-2 has-[>svg]:px-3"),
    ("xs", "h-7 rounded-md gap-1 px-2 text-xs has-[>svg]:px-1.5"),
    ("sm", "h-8 rounded-md gap-1.5 px-3 has-[>svg]:px-2.5"),
    ("lg", "h-10 rounded-md px-6 has-[>svg]:px-4"),
    ("icon", "size-9"),
];

static SPEC: LazyLock<VariantSpec> = LazyLock::new(|| {
    VariantSpec::builder("button")
        .base(BASE)
        .axis("variant", "default", VARIANTS.iter().copied())
        .axis("size", "default", SIZES.iter().copied())
        .build()
        .expect("button spec is valid")
});

/// The button's variant spec.
pub fn button_spec() -> &'static VariantSpec {
    &SPEC
}

/// Button builder.
///
/// Variant and size are plain strings so selections coming from
/// configuration or markup pass through the same validation as code.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    variant: Option<String>,
    size: Option<String>,
    disabled: bool,
    button_type: String,
    class: Vec<String>,
}

impl Button {
    /// Create a button with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: None,
            size: None,
            disabled: false,
            button_type: "button".to_string(),
            class: Vec::new(),
        }
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// `type` attribute (defaults to "button").
    pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
        self.button_type = button_type.into();
        self
    }

    /// Extra classes, applied after variant and size classes.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class.push(class.into());
        self
    }

    /// Build a button from a selection map (used for manifest samples).
    pub fn from_selections(label: impl Into<String>, selections: &Selections) -> Self {
        let mut button = Self::new(label);
        button.variant = selections.get("variant").map(str::to_string);
        button.size = selections.get("size").map(str::to_string);
        button
    }

    fn selections(&self) -> Selections {
        let mut sel = Selections::new();
        if let Some(v) = &self.variant {
            sel.insert("variant", v.as_str());
        }
        if let Some(s) = &self.size {
            sel.insert("size", s.as_str());
        }
        sel
    }

    /// Final class list after conflict merging.
    pub fn classes(&self) -> Result<Vec<String>, VariantError> {
        let resolved = resolve(button_spec(), &self.selections(), &self.class)?;
        Ok(merge_classes(resolved.iter()))
    }

    /// Render the button element.
    pub fn render(&self) -> Result<Element, VariantError> {
        let mut el = Element::new("button")
            .attr("data-slot", "button")
            .attr("type", self.button_type.as_str())
            .classes(self.classes()?)
            .flag_if("disabled", self.disabled);
        if let Some(v) = &self.variant {
            el = el.attr("data-variant", v.as_str());
        }
        if let Some(s) = &self.size {
            el = el.attr("data-size", s.as_str());
        }
        Ok(el.text(self.label.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spec_declares_variant_then_size() {
        let spec = button_spec();
        let axes: Vec<&str> = spec.axes().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(axes, ["variant", "size"]);
        assert_eq!(spec.axis("variant").unwrap().values().count(), 6);
        assert_eq!(spec.axis("size").unwrap().values().count(), 5);
    }

    #[test]
    fn renders_default_button() {
        let html = Button::new("Save").render().unwrap().to_html();

        assert!(html.starts_with(r#"<button class="inline-flex"#));
        assert!(html.contains("bg-primary"));
        assert!(html.contains("h-9"));
        assert!(html.contains(r#"data-slot="button""#));
        assert!(html.ends_with(">Save</button>"));
    }

    #[test]
    fn small_size_replaces_base_gap() {
        let classes = Button::new("x").size("sm").classes().unwrap();
        assert!(classes.contains(&"gap-1.5".to_string()));
        assert!(!classes.contains(&"gap-2".to_string()));
    }

    #[test]
    fn destructive_ring_color_replaces_base_ring_color() {
        let classes = Button::new("x").variant("destructive").classes().unwrap();
        assert!(classes.contains(&"focus-visible:ring-destructive/20".to_string()));
        assert!(!classes.contains(&"focus-visible:ring-ring/50".to_string()));
        assert!(classes.contains(&"focus-visible:ring-[3px]".to_string()));
    }

    #[test]
    fn caller_class_wins() {
        let classes = Button::new("x").class("px-8 bg-red-500").classes().unwrap();
        assert_eq!(&classes[classes.len() - 2..], ["px-8", "bg-red-500"]);
        assert!(!classes.contains(&"px-4".to_string()));
        assert!(!classes.contains(&"bg-primary".to_string()));
    }

    #[test]
    fn caller_shorthand_overrides_size_longhands() {
        let classes = Button::new("x").class("p-0").classes().unwrap();
        assert!(!classes.contains(&"px-4".to_string()));
        assert!(!classes.contains(&"py-2".to_string()));
        assert_eq!(classes.last().map(String::as_str), Some("p-0"));

        let classes = Button::new("x").class("size-12").classes().unwrap();
        assert!(!classes.contains(&"h-9".to_string()));
        assert!(classes.contains(&"size-12".to_string()));
    }

    #[test]
    fn extra_small_size_replaces_base_text_size() {
        let classes = Button::new("x").size("xs").classes().unwrap();
        assert!(classes.contains(&"text-xs".to_string()));
        assert!(!classes.contains(&"text-sm".to_string()));
        assert!(classes.contains(&"h-7".to_string()));
    }

    #[test]
    fn rejects_unknown_variant() {
        let err = Button::new("x").variant("shiny").render().unwrap_err();
        assert!(matches!(err, VariantError::InvalidVariant { .. }));
    }

    #[test]
    fn renders_disabled_flag() {
        let html = Button::new("x").disabled(true).render().unwrap().to_html();
        assert!(html.contains(" disabled"));
    }
}
