//! Conflict-aware class merging.
//!
//! Utility stylesheets resolve two classes that set the same property by
//! source order, so a class list like `px-4 px-6` only ever applies `px-6`.
//! [`merge_classes`] makes that rule explicit: tokens sharing a conflict key
//! collapse to their last occurrence, and a shorthand such as `p-0` also
//! removes earlier longhands it covers (`px-4`, `pt-2`).

use std::collections::HashSet;

const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "contents",
    "table", "hidden", "flow-root",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "none", "inner"];

/// Prefix groups, longest first so `px-` wins over `p-`.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("min-w-", "min-w"),
    ("max-w-", "max-w"),
    ("min-h-", "min-h"),
    ("max-h-", "max-h"),
    ("size-", "size"),
    ("w-", "w"),
    ("h-", "h"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("ps-", "ps"),
    ("pe-", "pe"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("ms-", "ms"),
    ("me-", "me"),
    ("m-", "m"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("opacity-", "opacity"),
    ("items-", "align-items"),
    ("justify-", "justify-content"),
    ("whitespace-", "whitespace"),
    ("cursor-", "cursor"),
    ("pointer-events-", "pointer-events"),
    ("overflow-", "overflow"),
    ("duration-", "duration"),
    ("underline-offset-", "underline-offset"),
    ("z-", "z-index"),
    ("animate-", "animation"),
    ("rotate-", "rotate"),
];

/// Longhand groups overridden by a later shorthand group.
const SUPERSEDES: &[(&str, &[&str])] = &[
    ("p", &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"]),
    ("px", &["pr", "pl", "ps", "pe"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"]),
    ("mx", &["mr", "ml", "ms", "me"]),
    ("my", &["mt", "mb"]),
    ("size", &["w", "h"]),
    ("gap", &["gap-x", "gap-y"]),
    (
        "rounded",
        &[
            "rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded-s", "rounded-e",
            "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl",
        ],
    ),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
    (
        "border-w",
        &[
            "border-w-x", "border-w-y", "border-w-t", "border-w-r", "border-w-b", "border-w-l",
            "border-w-s", "border-w-e",
        ],
    ),
    ("border-w-x", &["border-w-r", "border-w-l"]),
    ("border-w-y", &["border-w-t", "border-w-b"]),
    (
        "border-color",
        &[
            "border-color-x", "border-color-y", "border-color-t", "border-color-r",
            "border-color-b", "border-color-l", "border-color-s", "border-color-e",
        ],
    ),
    ("border-color-x", &["border-color-r", "border-color-l"]),
    ("border-color-y", &["border-color-t", "border-color-b"]),
];

fn superseded(group: &str) -> &'static [&'static str] {
    SUPERSEDES
        .iter()
        .find(|(shorthand, _)| *shorthand == group)
        .map(|(_, longhands)| *longhands)
        .unwrap_or_default()
}

/// Merge class tokens, keeping the last token of every conflict group.
///
/// Survivors keep their relative order. Inputs may carry several
/// whitespace-separated tokens per item.
pub fn merge_classes<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let all: Vec<String> = tokens
        .into_iter()
        .flat_map(|t| {
            t.as_ref()
                .split_ascii_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    // Walking backwards, a kept token claims its own key and the keys of
    // every longhand it covers under the same modifiers.
    let mut claimed = HashSet::new();
    let mut kept: Vec<String> = all
        .into_iter()
        .rev()
        .filter(|t| {
            let (scope, group) = conflict_parts(t);
            if !claimed.insert(format!("{}{}", scope, group)) {
                return false;
            }
            for longhand in superseded(&group) {
                claimed.insert(format!("{}{}", scope, longhand));
            }
            true
        })
        .collect();
    kept.reverse();
    kept
}

/// Conflict key for a token: modifiers, importance and utility group.
///
/// Tokens sharing a key set the same property under the same conditions.
/// Unrecognised utilities are their own group.
pub fn conflict_key(token: &str) -> String {
    let (scope, group) = conflict_parts(token);
    format!("{}{}", scope, group)
}

/// Split a token's conflict key into its scope (`modifiers|!|`) and group.
fn conflict_parts(token: &str) -> (String, String) {
    let (modifiers, utility) = split_modifiers(token);
    let (important, utility) = match utility.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => match utility.strip_suffix('!') {
            Some(rest) => (true, rest),
            None => (false, utility),
        },
    };
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    let group = utility_group(utility).map(str::to_string).unwrap_or_else(|| utility.to_string());

    let scope = format!("{}|{}|", modifiers, if important { "!" } else { "" });
    (scope, group)
}

/// Split `hover:focus:bg-x` into (`hover:focus:`, `bg-x`), ignoring colons
/// inside brackets and parentheses.
fn split_modifiers(token: &str) -> (&str, &str) {
    let mut depth = 0i32;
    let mut split = 0;
    for (i, c) in token.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            ':' if depth == 0 => split = i + 1,
            _ => {}
        }
    }
    token.split_at(split)
}

fn utility_group(utility: &str) -> Option<&'static str> {
    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }

    match utility {
        "rounded" => return Some("rounded"),
        "border" => return Some("border-w"),
        "ring" => return Some("ring-w"),
        "shadow" => return Some("shadow"),
        "outline" | "outline-none" | "outline-hidden" => return Some("outline-style"),
        "transition" => return Some("transition"),
        "shrink" => return Some("shrink"),
        "grow" => return Some("grow"),
        "underline" | "no-underline" | "line-through" | "overline" => {
            return Some("text-decoration")
        }
        _ => {}
    }

    if let Some(rest) = utility.strip_prefix("text-") {
        return Some(if TEXT_SIZES.contains(&rest) || is_length(rest) {
            "text-size"
        } else if TEXT_ALIGN.contains(&rest) {
            "text-align"
        } else {
            "text-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&rest) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(rest) = utility.strip_prefix("rounded-") {
        return Some(rounded_group(rest));
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        return Some(border_group(rest));
    }
    if let Some(rest) = utility.strip_prefix("ring-offset-") {
        return Some(if is_width(rest) {
            "ring-offset-w"
        } else {
            "ring-offset-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("ring-") {
        return Some(if is_width(rest) {
            "ring-w"
        } else if rest == "inset" {
            "ring-inset"
        } else {
            "ring-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("shadow-") {
        return Some(if SHADOW_SIZES.contains(&rest) {
            "shadow"
        } else {
            "shadow-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("bg-") {
        return Some(match rest {
            "fixed" | "local" | "scroll" => "bg-attachment",
            "cover" | "contain" | "auto" => "bg-size",
            _ => "bg-color",
        });
    }
    if let Some(rest) = utility.strip_prefix("outline-") {
        return Some(if is_width(rest) {
            "outline-w"
        } else if rest.starts_with("offset-") {
            "outline-offset"
        } else {
            "outline-color"
        });
    }
    if utility.starts_with("transition-") {
        return Some("transition");
    }
    if utility.starts_with("shrink-") {
        return Some("shrink");
    }
    if utility.starts_with("grow-") {
        return Some("grow");
    }

    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

fn rounded_group(rest: &str) -> &'static str {
    match rest.split('-').next() {
        Some("t") => "rounded-t",
        Some("r") => "rounded-r",
        Some("b") => "rounded-b",
        Some("l") => "rounded-l",
        Some("tl") => "rounded-tl",
        Some("tr") => "rounded-tr",
        Some("br") => "rounded-br",
        Some("bl") => "rounded-bl",
        Some("s") => "rounded-s",
        Some("e") => "rounded-e",
        _ => "rounded",
    }
}

fn border_group(rest: &str) -> &'static str {
    let (side, value) = match rest.split_once('-') {
        Some((side @ ("x" | "y" | "t" | "r" | "b" | "l" | "s" | "e"), value)) => (side, Some(value)),
        _ => match rest {
            "x" | "y" | "t" | "r" | "b" | "l" | "s" | "e" => (rest, None),
            _ => ("", Some(rest)),
        },
    };

    let width = match value {
        None => true,
        Some(v) => is_width(v),
    };
    let style = matches!(
        value,
        Some("solid" | "dashed" | "dotted" | "double" | "hidden" | "none")
    );

    match (side, width, style) {
        (_, _, true) => "border-style",
        ("", true, _) => "border-w",
        ("x", true, _) => "border-w-x",
        ("y", true, _) => "border-w-y",
        ("t", true, _) => "border-w-t",
        ("r", true, _) => "border-w-r",
        ("b", true, _) => "border-w-b",
        ("l", true, _) => "border-w-l",
        ("s", true, _) => "border-w-s",
        ("e", true, _) => "border-w-e",
        ("", false, _) => "border-color",
        ("x", false, _) => "border-color-x",
        ("y", false, _) => "border-color-y",
        ("t", false, _) => "border-color-t",
        ("r", false, _) => "border-color-r",
        ("b", false, _) => "border-color-b",
        ("l", false, _) => "border-color-l",
        ("s", false, _) => "border-color-s",
        _ => "border-color-e",
    }
}

/// Bare integers or arbitrary lengths (`2`, `[3px]`).
fn is_width(value: &str) -> bool {
    (!value.is_empty() && value.chars().all(|c| c.is_ascii_digit())) || is_length(value)
}

fn is_length(value: &str) -> bool {
    let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) else {
        return false;
    };
    let inner = inner.strip_prefix("length:").unwrap_or(inner);
    inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}
