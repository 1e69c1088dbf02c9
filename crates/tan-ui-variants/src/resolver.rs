//! Deterministic class resolution.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::error::VariantError;
use crate::spec::VariantSpec;

/// Caller-chosen axis values. Axes left out fall back to the spec default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selections(BTreeMap<String, String>);

impl Selections {
    /// Empty selection (every axis at its default).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the value for an axis.
    pub fn with(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(axis, value);
        self
    }

    /// Add or replace the value for an axis.
    pub fn insert(&mut self, axis: impl Into<String>, value: impl Into<String>) {
        self.0.insert(axis.into(), value.into());
    }

    /// Selected value for an axis, if any.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.0.get(axis).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected (axis, value) pairs ordered by axis name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selections {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Ordered, de-duplicated class tokens for one component instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedClassSet(Vec<String>);

impl ResolvedClassSet {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for ResolvedClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Resolve a selection against a spec.
///
/// Output order is base classes, then each axis's rule classes in axis
/// declaration order, then `overrides`. When a token repeats, only its last
/// occurrence is kept, so overrides always form the tail of the result.
pub fn resolve<S: AsRef<str>>(
    spec: &VariantSpec,
    selections: &Selections,
    overrides: &[S],
) -> Result<ResolvedClassSet, VariantError> {
    for (axis, _) in selections.iter() {
        if spec.axis(axis).is_none() {
            return Err(VariantError::UnknownAxis {
                component: spec.component().to_string(),
                axis: axis.to_string(),
            });
        }
    }

    let mut tokens: Vec<&str> = spec.base().iter().map(String::as_str).collect();

    for axis in spec.axes() {
        let value = selections.get(&axis.name).unwrap_or(&axis.default);
        let rule = axis.rule(value).ok_or_else(|| VariantError::InvalidVariant {
            component: spec.component().to_string(),
            axis: axis.name.clone(),
            value: value.to_string(),
            allowed: axis.values().map(str::to_string).collect(),
        })?;
        tokens.extend(rule.classes.iter().map(String::as_str));
    }

    tokens.extend(overrides.iter().flat_map(|o| o.as_ref().split_ascii_whitespace()));

    Ok(ResolvedClassSet(dedupe_keep_last(tokens)))
}

fn dedupe_keep_last(tokens: Vec<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut kept: Vec<String> = tokens
        .into_iter()
        .rev()
        .filter(|t| seen.insert(*t))
        .map(str::to_string)
        .collect();
    kept.reverse();
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NO_OVERRIDES: &[&str] = &[];

    fn button() -> VariantSpec {
        VariantSpec::builder("button")
            .base("inline-flex items-center rounded-md text-sm")
            .axis(
                "variant",
                "default",
                [
                    ("default", "bg-primary text-primary-foreground"),
                    ("destructive", "bg-destructive text-white"),
                    ("ghost", "hover:bg-accent"),
                ],
            )
            .axis(
                "size",
                "default",
                [("default", "h-9 px-4"), ("lg", "h-10 rounded-md px-6")],
            )
            .build()
            .unwrap()
    }

    fn tokens(set: &ResolvedClassSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn every_axis_value_contributes_its_rule() {
        let spec = button();
        for axis in spec.axes() {
            for rule in &axis.rules {
                let sel = Selections::new().with(axis.name.clone(), rule.value.clone());
                let resolved = resolve(&spec, &sel, NO_OVERRIDES).unwrap();
                for class in &rule.classes {
                    assert!(
                        resolved.contains(class),
                        "{}={} missing {}",
                        axis.name,
                        rule.value,
                        class
                    );
                }
            }
        }
    }

    #[test]
    fn empty_selection_equals_explicit_defaults() {
        let spec = button();
        let implicit = resolve(&spec, &Selections::new(), NO_OVERRIDES).unwrap();
        let explicit = resolve(
            &spec,
            &Selections::new().with("variant", "default").with("size", "default"),
            NO_OVERRIDES,
        )
        .unwrap();

        assert_eq!(implicit, explicit);
    }

    #[test]
    fn follows_declaration_order_not_selection_order() {
        let spec = button();
        let sel: Selections = [("size", "lg"), ("variant", "ghost")].into_iter().collect();
        let resolved = resolve(&spec, &sel, NO_OVERRIDES).unwrap();

        assert_eq!(
            tokens(&resolved),
            ["inline-flex", "items-center", "text-sm", "hover:bg-accent", "h-10", "rounded-md", "px-6"]
        );
    }

    #[test]
    fn overrides_come_last() {
        let spec = button();
        let resolved = resolve(
            &spec,
            &Selections::new().with("variant", "destructive"),
            &["inline-flex w-full", "text-sm"],
        )
        .unwrap();

        let all = tokens(&resolved);
        assert_eq!(&all[all.len() - 3..], ["inline-flex", "w-full", "text-sm"]);
        assert_eq!(all.iter().filter(|t| **t == "inline-flex").count(), 1);
    }

    #[test]
    fn unknown_value_fails_without_partial_result() {
        let spec = button();
        let err = resolve(&spec, &Selections::new().with("variant", "shiny"), NO_OVERRIDES)
            .unwrap_err();

        assert_eq!(
            err,
            VariantError::InvalidVariant {
                component: "button".to_string(),
                axis: "variant".to_string(),
                value: "shiny".to_string(),
                allowed: vec!["default".into(), "destructive".into(), "ghost".into()],
            }
        );
    }

    #[test]
    fn unknown_axis_fails() {
        let err = resolve(&button(), &Selections::new().with("tone", "loud"), NO_OVERRIDES)
            .unwrap_err();
        assert!(matches!(err, VariantError::UnknownAxis { .. }));
    }

    #[test]
    fn destructive_lg_is_union_and_stable() {
        let spec = button();
        let sel = Selections::new().with("variant", "destructive").with("size", "lg");
        let first = resolve(&spec, &sel, NO_OVERRIDES).unwrap();
        let second = resolve(&spec, &sel, NO_OVERRIDES).unwrap();

        assert_eq!(first, second);

        let mut expected: Vec<&str> = spec.base().iter().map(String::as_str).collect();
        expected.extend(["bg-destructive", "text-white", "h-10", "rounded-md", "px-6"]);
        let mut got = tokens(&first);
        expected.sort_unstable();
        expected.dedup();
        got.sort_unstable();
        assert_eq!(got, expected);
    }

    #[test]
    fn displays_as_class_attribute() {
        let spec = VariantSpec::builder("x").base("a b").build().unwrap();
        let resolved = resolve(&spec, &Selections::new(), &["c"]).unwrap();
        assert_eq!(resolved.to_string(), "a b c");
    }
}
