//! Resolve a component selection to its class list.

use anyhow::{Context, Result};
use tan_ui_components::ComponentRegistry;
use tan_ui_variants::{merge_classes, resolve, Selections};

/// Parse `axis=value` arguments.
fn parse_selections(args: &[String]) -> Result<Selections> {
    args.iter()
        .map(|arg| {
            let (axis, value) = arg
                .split_once('=')
                .with_context(|| format!("Expected axis=value, got '{}'", arg))?;
            Ok((axis.trim(), value.trim()))
        })
        .collect()
}

/// Resolve classes for a component.
pub fn resolve_classes(
    component: &str,
    selections: &[String],
    class: &[String],
    merge: bool,
) -> Result<Vec<String>> {
    let registry = ComponentRegistry::builtin();
    let spec = registry.get(component).with_context(|| {
        format!(
            "Unknown component '{}' (known: {})",
            component,
            registry.names().join(", ")
        )
    })?;

    let selections = parse_selections(selections)?;
    let resolved = resolve(spec, &selections, class)?;

    Ok(if merge {
        merge_classes(resolved.iter())
    } else {
        resolved.into_vec()
    })
}

/// Run the resolve command.
pub fn run(
    component: &str,
    selections: &[String],
    class: &[String],
    merge: bool,
    json: bool,
) -> Result<()> {
    let classes = resolve_classes(component, selections, class, merge)?;

    if json {
        println!("{}", serde_json::to_string(&classes)?);
    } else {
        println!("{}", classes.join(" "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_button_selection() {
        let classes =
            resolve_classes("button", &args(&["variant=destructive", "size=lg"]), &[], false)
                .unwrap();
        assert!(classes.contains(&"bg-destructive".to_string()));
        assert!(classes.contains(&"h-10".to_string()));
    }

    #[test]
    fn override_classes_trail_output() {
        let classes = resolve_classes("button", &[], &args(&["w-full"]), true).unwrap();
        assert_eq!(classes.last().map(String::as_str), Some("w-full"));
    }

    #[test]
    fn rejects_malformed_selection() {
        assert!(resolve_classes("button", &args(&["variant"]), &[], false).is_err());
    }

    #[test]
    fn rejects_unknown_component_and_value() {
        assert!(resolve_classes("tooltip", &[], &[], false).is_err());
        assert!(resolve_classes("button", &args(&["size=xl"]), &[], false).is_err());
    }
}
