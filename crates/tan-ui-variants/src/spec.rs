//! Variant declarations: axes, allowed values and the classes they contribute.

use serde::Serialize;

use crate::error::VariantError;

/// Class tokens contributed by one value of an axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRule {
    /// Axis value this rule applies to (e.g. "destructive")
    pub value: String,

    /// Class tokens, in declaration order
    pub classes: Vec<String>,
}

/// A named styling dimension with a fixed set of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Axis {
    /// Axis name (e.g. "variant", "size")
    pub name: String,

    /// Allowed values with their class rules, in declaration order
    pub rules: Vec<ClassRule>,

    /// Value used when a selection omits this axis
    pub default: String,
}

impl Axis {
    /// Look up the rule for a value.
    pub fn rule(&self, value: &str) -> Option<&ClassRule> {
        self.rules.iter().find(|r| r.value == value)
    }

    /// Allowed values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.value.as_str())
    }
}

/// The complete styling declaration of one component.
///
/// Built once per component through [`VariantSpec::builder`], which
/// validates the axes; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantSpec {
    component: String,
    base: Vec<String>,
    axes: Vec<Axis>,
}

impl VariantSpec {
    /// Start declaring a spec for a component.
    pub fn builder(component: impl Into<String>) -> VariantSpecBuilder {
        VariantSpecBuilder {
            component: component.into(),
            base: Vec::new(),
            axes: Vec::new(),
        }
    }

    /// Component name.
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Classes present regardless of selection.
    pub fn base(&self) -> &[String] {
        &self.base
    }

    /// Axes in declaration order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Look up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|a| a.name == name)
    }
}

/// Builder for [`VariantSpec`].
#[derive(Debug)]
pub struct VariantSpecBuilder {
    component: String,
    base: Vec<String>,
    axes: Vec<Axis>,
}

impl VariantSpecBuilder {
    /// Append base classes (whitespace separated).
    pub fn base(mut self, classes: &str) -> Self {
        self.base.extend(split_tokens(classes));
        self
    }

    /// Declare an axis. `rules` pairs each allowed value with its classes.
    pub fn axis<'a>(
        mut self,
        name: &str,
        default: &str,
        rules: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        self.axes.push(Axis {
            name: name.to_string(),
            default: default.to_string(),
            rules: rules
                .into_iter()
                .map(|(value, classes)| ClassRule {
                    value: value.to_string(),
                    classes: split_tokens(classes),
                })
                .collect(),
        });
        self
    }

    /// Validate and build the spec.
    pub fn build(self) -> Result<VariantSpec, VariantError> {
        let invalid = |message: String| VariantError::InvalidSpec {
            component: self.component.clone(),
            message,
        };

        for (i, axis) in self.axes.iter().enumerate() {
            if axis.name.is_empty() {
                return Err(invalid("axis name is empty".to_string()));
            }
            if self.axes[..i].iter().any(|a| a.name == axis.name) {
                return Err(invalid(format!("axis '{}' declared twice", axis.name)));
            }
            if axis.rules.is_empty() {
                return Err(invalid(format!("axis '{}' has no values", axis.name)));
            }
            for (j, rule) in axis.rules.iter().enumerate() {
                if axis.rules[..j].iter().any(|r| r.value == rule.value) {
                    return Err(invalid(format!(
                        "value '{}' declared twice on axis '{}'",
                        rule.value, axis.name
                    )));
                }
            }
            if axis.rule(&axis.default).is_none() {
                return Err(invalid(format!(
                    "default '{}' is not an allowed value of axis '{}'",
                    axis.default, axis.name
                )));
            }
        }

        Ok(VariantSpec {
            component: self.component,
            base: self.base,
            axes: self.axes,
        })
    }
}

/// Split a class string into tokens on ASCII whitespace.
pub fn split_tokens(classes: &str) -> Vec<String> {
    classes.split_ascii_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VariantSpecBuilder {
        VariantSpec::builder("chip")
            .base("inline-flex  rounded-md")
            .axis("tone", "plain", [("plain", "bg-muted"), ("loud", "bg-primary text-white")])
    }

    #[test]
    fn builds_valid_spec() {
        let spec = sample().build().unwrap();

        assert_eq!(spec.component(), "chip");
        assert_eq!(spec.base(), ["inline-flex", "rounded-md"]);
        let tone = spec.axis("tone").unwrap();
        assert_eq!(tone.values().collect::<Vec<_>>(), ["plain", "loud"]);
        assert_eq!(tone.rule("loud").unwrap().classes, ["bg-primary", "text-white"]);
    }

    #[test]
    fn rejects_default_outside_allowed_values() {
        let err = VariantSpec::builder("chip")
            .axis("tone", "quiet", [("plain", "bg-muted")])
            .build()
            .unwrap_err();

        assert!(matches!(err, VariantError::InvalidSpec { .. }));
        assert!(err.to_string().contains("quiet"));
    }

    #[test]
    fn rejects_duplicate_axes_and_values() {
        let dup_axis = sample().axis("tone", "a", [("a", "x")]).build();
        assert!(matches!(dup_axis, Err(VariantError::InvalidSpec { .. })));

        let dup_value = VariantSpec::builder("chip")
            .axis("tone", "a", [("a", "x"), ("a", "y")])
            .build();
        assert!(matches!(dup_value, Err(VariantError::InvalidSpec { .. })));
    }

    #[test]
    fn allows_zero_axis_specs() {
        let spec = VariantSpec::builder("divider").base("border-b").build().unwrap();
        assert!(spec.axes().is_empty());
    }
}
