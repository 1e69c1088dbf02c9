//! Styled UI primitives for tan-ui.
//!
//! Each component is defined by [`VariantSpec`](tan_ui_variants::VariantSpec)s
//! and renders to an [`Element`] tree that can be serialized to HTML.

pub mod accordion;
pub mod button;
pub mod markup;
pub mod registry;

pub use accordion::{Accordion, AccordionItem, AccordionPart};
pub use button::{button_spec, Button};
pub use markup::{escape_attr, escape_text, Element, Node};
pub use registry::{ComponentRegistry, RegistryError};
