//! Errors raised while declaring or resolving variants.

/// Errors that can occur when building a spec or resolving a selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariantError {
    #[error("Invalid value '{value}' for axis '{axis}' of {component} (allowed: {})", allowed.join(", "))]
    InvalidVariant {
        component: String,
        axis: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Unknown axis '{axis}' for {component}")]
    UnknownAxis { component: String, axis: String },

    #[error("Invalid variant spec for {component}: {message}")]
    InvalidSpec { component: String, message: String },
}
