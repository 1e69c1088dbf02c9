//! Registry of built-in component specs.
//!
//! Provides lookup by component name and renders sample instances for the
//! style manifest.

use tan_ui_variants::{Selections, VariantError, VariantSpec};

use crate::accordion::{Accordion, AccordionItem, AccordionPart};
use crate::button::{button_spec, Button};
use crate::markup::Element;

/// A registry of component specs.
#[derive(Debug)]
pub struct ComponentRegistry {
    specs: Vec<&'static VariantSpec>,
}

impl ComponentRegistry {
    /// Registry holding every built-in spec.
    pub fn builtin() -> Self {
        let mut specs = vec![button_spec()];
        specs.extend(AccordionPart::ALL.iter().map(|p| p.spec()));
        Self { specs }
    }

    /// All registered specs.
    pub fn specs(&self) -> &[&'static VariantSpec] {
        &self.specs
    }

    /// Look up a spec by component name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&'static VariantSpec> {
        self.specs
            .iter()
            .copied()
            .find(|s| s.component().eq_ignore_ascii_case(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get all registered component names.
    pub fn names(&self) -> Vec<&str> {
        self.specs.iter().map(|s| s.component()).collect()
    }

    /// Render a sample instance of a component for the given selections.
    pub fn render_sample(
        &self,
        component: &str,
        selections: &Selections,
    ) -> Result<Element, RegistryError> {
        let spec = self
            .get(component)
            .ok_or_else(|| RegistryError::ComponentNotFound(component.to_string()))?;

        if let Some((axis, _)) = selections.iter().find(|(axis, _)| spec.axis(axis).is_none()) {
            return Err(VariantError::UnknownAxis {
                component: spec.component().to_string(),
                axis: axis.to_string(),
            }
            .into());
        }

        match spec.component() {
            "button" => Ok(Button::from_selections("Button", selections).render()?),
            "accordion" => Ok(Accordion::new()
                .item(AccordionItem::new("item-1", "Trigger", "Content").open(true))
                .item(AccordionItem::new("item-2", "Trigger", "Content"))
                .render()?),
            _ => Err(RegistryError::ComponentNotFound(component.to_string())),
        }
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error(transparent)]
    Variant(#[from] VariantError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_lists_button_and_accordion_parts() {
        let registry = ComponentRegistry::builtin();
        assert!(registry.contains("Button"));
        assert!(registry.contains("accordion-trigger"));
        assert_eq!(registry.names().len(), 1 + AccordionPart::ALL.len());
    }

    #[test]
    fn renders_button_sample() {
        let registry = ComponentRegistry::builtin();
        let sel = Selections::new().with("variant", "ghost").with("size", "icon");
        let html = registry.render_sample("button", &sel).unwrap().to_html();
        assert!(html.contains("hover:bg-accent"));
        assert!(html.contains("size-9"));
    }

    #[test]
    fn accordion_sample_has_open_and_closed_items() {
        let html = ComponentRegistry::builtin()
            .render_sample("accordion", &Selections::new())
            .unwrap()
            .to_html();
        assert!(html.contains("data-open"));
        assert!(html.contains("data-closed"));
    }

    #[test]
    fn unknown_component_is_reported() {
        let err = ComponentRegistry::builtin()
            .render_sample("tooltip", &Selections::new())
            .unwrap_err();
        assert!(matches!(err, RegistryError::ComponentNotFound(_)));
    }

    #[test]
    fn accordion_parts_have_no_sample() {
        let err = ComponentRegistry::builtin()
            .render_sample("accordion-trigger", &Selections::new())
            .unwrap_err();
        assert!(matches!(err, RegistryError::ComponentNotFound(_)));
    }

    #[test]
    fn undeclared_sample_axis_is_reported() {
        let err = ComponentRegistry::builtin()
            .render_sample("accordion", &Selections::new().with("size", "lg"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::Variant(VariantError::UnknownAxis { .. })));
    }

    #[test]
    fn invalid_sample_selection_is_reported() {
        let err = ComponentRegistry::builtin()
            .render_sample("button", &Selections::new().with("size", "xl"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::Variant(VariantError::InvalidVariant { .. })));
    }
}
