//! Variant resolution for tan-ui components.
//!
//! A [`VariantSpec`] declares the styling axes of a component (for example
//! `variant` and `size`), the values each axis accepts and the class tokens
//! every value contributes. [`resolve`] turns a selection into an ordered
//! [`ResolvedClassSet`], and [`merge_classes`] applies the last-occurrence-wins
//! conflict rule the consuming utility stylesheet relies on.

pub mod error;
pub mod merge;
pub mod resolver;
pub mod spec;

pub use error::VariantError;
pub use merge::{conflict_key, merge_classes};
pub use resolver::{resolve, ResolvedClassSet, Selections};
pub use spec::{split_tokens, Axis, ClassRule, VariantSpec, VariantSpecBuilder};
