//! Accordion structure and styles.
//!
//! Open/closed behaviour, keyboard handling and ARIA wiring belong to the
//! primitives engine at runtime. Rendering here emits the slot structure and
//! the state attributes that engine exposes (`data-open`, `data-closed`,
//! `data-panel-open`), which the classes hook into for rotation and height
//! animation.

use std::sync::LazyLock;

use tan_ui_variants::{merge_classes, resolve, Selections, VariantError, VariantSpec};

use crate::markup::Element;

/// One styled part of the accordion, each a zero-axis spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionPart {
    Root,
    Item,
    Header,
    Trigger,
    Chevron,
    Panel,
    Content,
    Divider,
}

impl AccordionPart {
    pub const ALL: [AccordionPart; 8] = [
        AccordionPart::Root,
        AccordionPart::Item,
        AccordionPart::Header,
        AccordionPart::Trigger,
        AccordionPart::Chevron,
        AccordionPart::Panel,
        AccordionPart::Content,
        AccordionPart::Divider,
    ];

    /// Component name used for the part's spec.
    pub fn name(self) -> &'static str {
        match self {
            AccordionPart::Root => "accordion",
            AccordionPart::Item => "accordion-item",
            AccordionPart::Header => "accordion-header",
            AccordionPart::Trigger => "accordion-trigger",
            AccordionPart::Chevron => "accordion-chevron",
            AccordionPart::Panel => "accordion-panel",
            AccordionPart::Content => "accordion-content",
            AccordionPart::Divider => "accordion-divider",
        }
    }

    fn base(self) -> &'static str {
        match self {
            AccordionPart::Root => "w-full",
            AccordionPart::Item => "group",
            AccordionPart::Header => "flex",
            AccordionPart::Trigger => {
                "flex w-full flex-1 items-center justify-between py-4 px-4 text-left text-sm \
                 font-medium text-foreground hover:opacity-80 transition-all \
                 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring \
                 focus-visible:ring-offset-2 focus-visible:ring-offset-background \
                 disabled:pointer-events-none disabled:opacity-50 [&[data-panel-open]>svg]:rotate-180"
            }
            AccordionPart::Chevron => "shrink-0 text-black transition-transform duration-200",
            AccordionPart::Panel => {
                "overflow-hidden data-open:animate-accordion-down data-closed:animate-accordion-up"
            }
            AccordionPart::Content => {
                "pt-0 pb-4 px-4 text-sm text-muted-foreground h-(--accordion-panel-height) \
                 data-ending-style:h-0 data-starting-style:h-0 [&_p:not(:last-child)]:mb-4"
            }
            AccordionPart::Divider => {
                "border-b border-(--accordion-divider,var(--color-gray-800)) mx-5 \
                 group-last:border-b-0"
            }
        }
    }

    /// The part's variant spec.
    pub fn spec(self) -> &'static VariantSpec {
        &SPECS[self as usize]
    }

    fn classes(self, extra: &[String]) -> Result<Vec<String>, VariantError> {
        let resolved = resolve(self.spec(), &Selections::new(), extra)?;
        Ok(merge_classes(resolved.iter()))
    }
}

static SPECS: LazyLock<Vec<VariantSpec>> = LazyLock::new(|| {
    AccordionPart::ALL
        .iter()
        .map(|part| {
            VariantSpec::builder(part.name())
                .base(part.base())
                .build()
                .expect("accordion part specs have no axes")
        })
        .collect()
});

/// Chevron path (24x24 viewBox).
const CHEVRON_PATH: &str = "m6 9 6 6 6-6";

/// One collapsible section.
#[derive(Debug, Clone)]
pub struct AccordionItem {
    value: String,
    trigger: String,
    content: String,
    open: bool,
    disabled: bool,
    trigger_class: Vec<String>,
    content_class: Vec<String>,
    class: Vec<String>,
}

impl AccordionItem {
    pub fn new(value: impl Into<String>, trigger: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            trigger: trigger.into(),
            content: content.into(),
            open: false,
            disabled: false,
            trigger_class: Vec::new(),
            content_class: Vec::new(),
            class: Vec::new(),
        }
    }

    /// Render this item expanded.
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class.push(class.into());
        self
    }

    pub fn trigger_class(mut self, class: impl Into<String>) -> Self {
        self.trigger_class.push(class.into());
        self
    }

    pub fn content_class(mut self, class: impl Into<String>) -> Self {
        self.content_class.push(class.into());
        self
    }

    fn render(&self, index: usize, open: bool) -> Result<Element, VariantError> {
        let trigger_id = format!("accordion-trigger-{}", index);
        let panel_id = format!("accordion-panel-{}", index);
        let state = if open { "data-open" } else { "data-closed" };

        let chevron = Element::new("svg")
            .classes(AccordionPart::Chevron.classes(&[])?)
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", "20")
            .attr("height", "20")
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("stroke-width", "2")
            .attr("aria-hidden", "true")
            .child(Element::new("path").attr("d", CHEVRON_PATH));

        let trigger = Element::new("button")
            .attr("data-slot", "accordion-trigger")
            .attr("type", "button")
            .attr("id", trigger_id.as_str())
            .attr("aria-controls", panel_id.as_str())
            .attr("aria-expanded", if open { "true" } else { "false" })
            .classes(AccordionPart::Trigger.classes(&self.trigger_class)?)
            .flag_if("data-panel-open", open)
            .flag_if("disabled", self.disabled)
            .text(self.trigger.as_str())
            .child(chevron);

        let header = Element::new("h3")
            .classes(AccordionPart::Header.classes(&[])?)
            .child(trigger);

        let content = Element::new("div")
            .classes(AccordionPart::Content.classes(&self.content_class)?)
            .flag(state)
            .text(self.content.as_str());

        let panel = Element::new("div")
            .attr("data-slot", "accordion-content")
            .attr("id", panel_id.as_str())
            .attr("role", "region")
            .attr("aria-labelledby", trigger_id.as_str())
            .classes(AccordionPart::Panel.classes(&[])?)
            .flag(state)
            .flag_if("hidden", !open)
            .child(content);

        let divider = Element::new("div")
            .attr("aria-hidden", "true")
            .classes(AccordionPart::Divider.classes(&[])?);

        Ok(Element::new("div")
            .attr("data-slot", "accordion-item")
            .attr("data-value", self.value.as_str())
            .classes(AccordionPart::Item.classes(&self.class)?)
            .flag(state)
            .flag_if("data-disabled", self.disabled)
            .child(header)
            .child(panel)
            .child(divider))
    }
}

/// Accordion root.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    items: Vec<AccordionItem>,
    multiple: bool,
    divider_color: Option<String>,
    class: Vec<String>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: AccordionItem) -> Self {
        self.items.push(item);
        self
    }

    /// Allow several sections open at once.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Divider colour, exposed as `--accordion-divider`.
    pub fn divider_color(mut self, color: impl Into<String>) -> Self {
        self.divider_color = Some(color.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class.push(class.into());
        self
    }

    /// Render the accordion. In single mode only the first item flagged
    /// open is rendered open.
    pub fn render(&self) -> Result<Element, VariantError> {
        let mut root = Element::new("div")
            .attr("data-slot", "accordion")
            .classes(AccordionPart::Root.classes(&self.class)?)
            .flag_if("data-multiple", self.multiple);

        if let Some(color) = &self.divider_color {
            root = root.attr("style", format!("--accordion-divider: {}", color));
        }

        let mut opened = false;
        for (index, item) in self.items.iter().enumerate() {
            let open = item.open && (self.multiple || !opened);
            opened |= open;
            root = root.child(item.render(index, open)?);
        }

        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Node;

    fn sample() -> Accordion {
        Accordion::new()
            .item(AccordionItem::new("a", "First", "One").open(true))
            .item(AccordionItem::new("b", "Second", "Two").open(true))
    }

    fn items(root: &Element) -> Vec<&Element> {
        root.children()
            .iter()
            .filter_map(|n| match n {
                Node::Element(e) => Some(e),
                Node::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn part_specs_are_named_and_axis_free() {
        for part in AccordionPart::ALL {
            assert_eq!(part.spec().component(), part.name());
            assert!(part.spec().axes().is_empty());
        }
    }

    #[test]
    fn single_mode_opens_only_first_flagged_item() {
        let root = sample().render().unwrap();
        let items = items(&root);

        assert_eq!(items[0].get_attr("data-open"), Some(None));
        assert_eq!(items[1].get_attr("data-closed"), Some(None));
        assert_eq!(items[1].get_attr("data-open"), None);
    }

    #[test]
    fn multiple_mode_keeps_all_open() {
        let root = sample().multiple(true).render().unwrap();
        for item in items(&root) {
            assert_eq!(item.get_attr("data-open"), Some(None));
        }
        assert_eq!(root.get_attr("data-multiple"), Some(None));
    }

    #[test]
    fn exposes_panel_state_for_style_hooks() {
        let root = sample().render().unwrap();
        let trigger = root.find_slot("accordion-trigger").unwrap();

        assert_eq!(trigger.get_attr("aria-expanded"), Some(Some("true")));
        assert_eq!(trigger.get_attr("data-panel-open"), Some(None));
        assert!(trigger
            .class_list()
            .iter()
            .any(|c| c == "[&[data-panel-open]>svg]:rotate-180"));
    }

    #[test]
    fn divider_color_becomes_custom_property() {
        let html = sample().divider_color("#ff0000").render().unwrap().to_html();
        assert!(html.contains(r#"style="--accordion-divider: #ff0000""#));
        assert!(html.contains("border-(--accordion-divider,var(--color-gray-800))"));
    }

    #[test]
    fn closed_panels_are_hidden() {
        let html = Accordion::new()
            .item(AccordionItem::new("a", "T", "C"))
            .render()
            .unwrap()
            .to_html();
        assert!(html.contains("data-closed"));
        assert!(html.contains(" hidden"));
    }

    #[test]
    fn content_class_overrides_padding() {
        let root = Accordion::new()
            .item(AccordionItem::new("a", "T", "C").content_class("px-6"))
            .render()
            .unwrap();
        let html = root.to_html();
        assert!(html.contains("px-6"));
        assert!(!html.contains("pb-4 px-4"));
    }
}
