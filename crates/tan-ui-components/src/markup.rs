//! Minimal HTML element builder used to render component markup.

use std::fmt::Write;

/// Elements without closing tags.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A node in rendered markup.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An HTML element with attributes, classes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, Option<String>)>,
    classes: Vec<String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute with a value, replacing an earlier one of the same name.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, Some(value.into()));
        self
    }

    /// Set a valueless (boolean) attribute.
    pub fn flag(mut self, name: &str) -> Self {
        self.set(name, None);
        self
    }

    /// Set a boolean attribute only when `on` is true.
    pub fn flag_if(self, name: &str, on: bool) -> Self {
        if on {
            self.flag(name)
        } else {
            self
        }
    }

    /// Replace the class list.
    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class_list(&self) -> &[String] {
        &self.classes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Attribute value; `Some(None)` for boolean attributes.
    pub fn get_attr(&self, name: &str) -> Option<Option<&str>> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref())
    }

    /// Depth-first search for the first descendant (or self) with a `data-slot`.
    pub fn find_slot(&self, slot: &str) -> Option<&Element> {
        if self.get_attr("data-slot") == Some(Some(slot)) {
            return Some(self);
        }
        self.children.iter().find_map(|c| match c {
            Node::Element(e) => e.find_slot(slot),
            Node::Text(_) => None,
        })
    }

    /// Render to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_attr(&self.classes.join(" ")));
        }
        for (name, value) in &self.attributes {
            match value {
                Some(v) => {
                    let _ = write!(out, " {}=\"{}\"", name, escape_attr(v));
                }
                None => {
                    let _ = write!(out, " {}", name);
                }
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(e) => e.write_html(out),
                Node::Text(t) => out.push_str(&escape_text(t)),
            }
        }

        let _ = write!(out, "</{}>", self.tag);
    }

    fn set(&mut self, name: &str, value: Option<String>) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }
}

/// Escape text content.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
///
/// `&` is only escaped where it could begin a character reference, so
/// arbitrary-variant classes such as `[&_p]:mb-4` stay byte-identical in the
/// output and remain visible to class scanners.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' if chars.peek().is_some_and(|n| n.is_ascii_alphanumeric() || *n == '#') => {
                out.push_str("&amp;")
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements() {
        let html = Element::new("div")
            .classes(["flex", "gap-2"])
            .attr("data-slot", "root")
            .child(Element::new("span").text("a < b"))
            .to_html();

        assert_eq!(
            html,
            r#"<div class="flex gap-2" data-slot="root"><span>a &lt; b</span></div>"#
        );
    }

    #[test]
    fn renders_boolean_and_void_elements() {
        let html = Element::new("input").flag("disabled").attr("type", "text").to_html();
        assert_eq!(html, r#"<input disabled type="text">"#);
    }

    #[test]
    fn keeps_arbitrary_variant_classes_intact() {
        let html = Element::new("div")
            .classes(["[&_p:not(:last-child)]:mb-4", "[&_svg:not([class*='size-'])]:size-4"])
            .to_html();
        assert!(html.contains("[&_p:not(:last-child)]:mb-4"));
        assert!(html.contains("[&_svg:not([class*='size-'])]:size-4"));
    }

    #[test]
    fn escapes_quotes_and_entity_like_ampersands() {
        assert_eq!(escape_attr(r#"a"b"#), "a&quot;b");
        assert_eq!(escape_attr("&amp;"), "&amp;amp;");
        assert_eq!(escape_attr("[&>svg]"), "[&>svg]");
    }

    #[test]
    fn replaces_attributes_and_finds_slots() {
        let el = Element::new("div")
            .attr("data-state", "closed")
            .attr("data-state", "open")
            .child(Element::new("button").attr("data-slot", "trigger"));

        assert_eq!(el.get_attr("data-state"), Some(Some("open")));
        assert_eq!(el.find_slot("trigger").map(Element::tag), Some("button"));
    }
}
