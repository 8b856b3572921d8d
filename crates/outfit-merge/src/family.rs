//! Utility families.
//!
//! A family is the set of utilities that set the same CSS property, so only
//! one of them can win. `px-2` and `px-4` share the `padding-x` family;
//! `px-2` and `py-2` do not.
//!
//! Some families are shorthands for others (`p-*` sets every side that
//! `px-*` or `pt-*` would); [`conflicting_groups`] lists which families a
//! shorthand displaces.

use std::fmt;

/// The family a utility belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family<'a> {
    /// A named group from the built-in rules (e.g. `"padding-x"`).
    Group(&'static str),
    /// An arbitrary property utility such as `[mask-type:luminance]`,
    /// keyed by the property name.
    Property(&'a str),
}

impl fmt::Display for Family<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Group(group) => write!(f, "{}", group),
            Family::Property(property) => write!(f, "[{}]", property),
        }
    }
}

/// Classifies a utility (modifiers and markers already stripped).
///
/// Returns `None` for utilities the rules don't recognize; callers treat
/// those as their own family.
///
/// # Example
///
/// ```rust
/// use outfit_merge::{classify, Family};
///
/// assert_eq!(classify("text-sm"), Some(Family::Group("font-size")));
/// assert_eq!(classify("text-muted-foreground"), Some(Family::Group("text-color")));
/// assert_eq!(classify("card-root"), None);
/// ```
pub fn classify(utility: &str) -> Option<Family<'_>> {
    if let Some(property) = arbitrary_property(utility) {
        return Some(Family::Property(property));
    }
    exact_group(utility)
        .or_else(|| prefixed_group(utility))
        .map(Family::Group)
}

/// Returns the families displaced by a token of `group`.
///
/// A later `p-4` removes an earlier `px-2`, but a later `px-2` leaves an
/// earlier `p-4` in place.
pub fn conflicting_groups(group: &str) -> &'static [&'static str] {
    match group {
        "padding" => &[
            "padding-x",
            "padding-y",
            "padding-t",
            "padding-r",
            "padding-b",
            "padding-l",
            "padding-s",
            "padding-e",
        ],
        "padding-x" => &["padding-r", "padding-l", "padding-s", "padding-e"],
        "padding-y" => &["padding-t", "padding-b"],
        "margin" => &[
            "margin-x", "margin-y", "margin-t", "margin-r", "margin-b", "margin-l", "margin-s",
            "margin-e",
        ],
        "margin-x" => &["margin-r", "margin-l", "margin-s", "margin-e"],
        "margin-y" => &["margin-t", "margin-b"],
        "inset" => &[
            "inset-x", "inset-y", "top", "right", "bottom", "left", "start", "end",
        ],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "size" => &["width", "height"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "scale" => &["scale-x", "scale-y"],
        "font-size" => &["leading"],
        "rounded" => &[
            "rounded-s",
            "rounded-e",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-ss",
            "rounded-se",
            "rounded-ee",
            "rounded-es",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
            "border-w-s",
            "border-w-e",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x",
            "border-color-y",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
            "border-color-s",
            "border-color-e",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        _ => &[],
    }
}

fn arbitrary_property(utility: &str) -> Option<&str> {
    let inner = utility.strip_prefix('[')?.strip_suffix(']')?;
    let (property, _) = inner.split_once(':')?;
    Some(property)
}

fn exact_group(utility: &str) -> Option<&'static str> {
    let group = match utility {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid"
        | "inline-grid" | "table" | "contents" | "flow-root" | "list-item" | "hidden" => {
            "display"
        }
        "static" | "fixed" | "absolute" | "relative" | "sticky" => "position",
        "visible" | "invisible" | "collapse" => "visibility",
        "italic" | "not-italic" => "font-style",
        "underline" | "overline" | "line-through" | "no-underline" => "text-decoration",
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => "text-transform",
        "truncate" => "text-overflow",
        "antialiased" | "subpixel-antialiased" => "font-smoothing",
        "sr-only" | "not-sr-only" => "screen-reader",
        "grow" => "grow",
        "shrink" => "shrink",
        "border" => "border-w",
        "rounded" => "rounded",
        "shadow" => "shadow",
        "ring" => "ring-w",
        "transition" => "transition",
        "outline" => "outline-style",
        _ => return None,
    };
    Some(group)
}

/// Prefixes whose whole value space belongs to one family, longest first
/// where two prefixes overlap.
const SIMPLE_PREFIXES: &[(&str, &str)] = &[
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("inset-x-", "inset-x"),
    ("inset-y-", "inset-y"),
    ("inset-", "inset"),
    ("top-", "top"),
    ("right-", "right"),
    ("bottom-", "bottom"),
    ("left-", "left"),
    ("start-", "start"),
    ("end-", "end"),
    ("min-w-", "min-width"),
    ("max-w-", "max-width"),
    ("w-", "width"),
    ("min-h-", "min-height"),
    ("max-h-", "max-height"),
    ("h-", "height"),
    ("size-", "size"),
    ("z-", "z-index"),
    ("opacity-", "opacity"),
    ("cursor-", "cursor"),
    ("select-", "user-select"),
    ("pointer-events-", "pointer-events"),
    ("tracking-", "tracking"),
    ("leading-", "leading"),
    ("whitespace-", "whitespace"),
    ("transition-", "transition"),
    ("duration-", "duration"),
    ("ease-", "ease"),
    ("delay-", "delay"),
    ("animate-", "animation"),
    ("items-", "align-items"),
    ("justify-items-", "justify-items"),
    ("justify-self-", "justify-self"),
    ("justify-", "justify-content"),
    ("content-", "align-content"),
    ("self-", "align-self"),
    ("place-items-", "place-items"),
    ("place-content-", "place-content"),
    ("place-self-", "place-self"),
    ("translate-x-", "translate-x"),
    ("translate-y-", "translate-y"),
    ("rotate-", "rotate"),
    ("scale-x-", "scale-x"),
    ("scale-y-", "scale-y"),
    ("scale-", "scale"),
    ("order-", "order"),
    ("basis-", "flex-basis"),
    ("grow-", "grow"),
    ("shrink-", "shrink"),
    ("line-clamp-", "line-clamp"),
    ("aspect-", "aspect-ratio"),
    ("underline-offset-", "underline-offset"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("overflow-", "overflow"),
    ("grid-cols-", "grid-cols"),
    ("grid-rows-", "grid-rows"),
    ("col-span-", "col-span"),
    ("row-span-", "row-span"),
    ("backdrop-blur-", "backdrop-blur"),
    ("blur-", "blur"),
    ("fill-", "fill"),
    ("stroke-", "stroke"),
];

/// Spacing utilities keyed by the part before the first `-`.
const SPACING_HEADS: &[(&str, &str)] = &[
    ("p", "padding"),
    ("px", "padding-x"),
    ("py", "padding-y"),
    ("pt", "padding-t"),
    ("pr", "padding-r"),
    ("pb", "padding-b"),
    ("pl", "padding-l"),
    ("ps", "padding-s"),
    ("pe", "padding-e"),
    ("m", "margin"),
    ("mx", "margin-x"),
    ("my", "margin-y"),
    ("mt", "margin-t"),
    ("mr", "margin-r"),
    ("mb", "margin-b"),
    ("ml", "margin-l"),
    ("ms", "margin-s"),
    ("me", "margin-e"),
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];

const RADIUS_SIZES: &[&str] = &[
    "none", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "full",
];

fn prefixed_group(utility: &str) -> Option<&'static str> {
    if let Some(value) = utility.strip_prefix("flex-") {
        return Some(match value {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        });
    }
    if let Some(value) = utility.strip_prefix("text-") {
        return Some(text_group(value));
    }
    if let Some(value) = utility.strip_prefix("font-") {
        return Some(font_group(value));
    }
    if let Some(value) = utility.strip_prefix("bg-") {
        return Some(background_group(value));
    }
    if let Some(value) = utility.strip_prefix("border-") {
        return Some(border_group(value));
    }
    if let Some(value) = utility.strip_prefix("rounded-") {
        return Some(rounded_group(value));
    }
    if let Some(value) = utility.strip_prefix("ring-offset-") {
        return Some(if is_length(value) {
            "ring-offset-w"
        } else {
            "ring-offset-color"
        });
    }
    if let Some(value) = utility.strip_prefix("ring-") {
        return Some(match value {
            "inset" => "ring-inset",
            v if is_length(v) => "ring-w",
            _ => "ring-color",
        });
    }
    if utility.starts_with("outline-offset-") {
        return Some("outline-offset");
    }
    if let Some(value) = utility.strip_prefix("outline-") {
        return Some(match value {
            "none" | "solid" | "dashed" | "dotted" | "double" | "hidden" => "outline-style",
            v if is_length(v) => "outline-w",
            _ => "outline-color",
        });
    }
    if let Some(value) = utility.strip_prefix("shadow-") {
        return Some(if SHADOW_SIZES.contains(&value) || is_arbitrary(value) {
            "shadow"
        } else {
            "shadow-color"
        });
    }
    if let Some(value) = utility.strip_prefix("decoration-") {
        return Some(match value {
            "solid" | "double" | "dotted" | "dashed" | "wavy" => "decoration-style",
            v if is_length(v) || v == "auto" || v == "from-font" => "decoration-thickness",
            _ => "decoration-color",
        });
    }
    if let Some(value) = utility.strip_prefix("list-") {
        return Some(match value {
            "inside" | "outside" => "list-position",
            _ => "list-style-type",
        });
    }
    if let Some(value) = utility.strip_prefix("object-") {
        return Some(match value {
            "contain" | "cover" | "fill" | "none" | "scale-down" => "object-fit",
            _ => "object-position",
        });
    }

    for (prefix, group) in SIMPLE_PREFIXES {
        if utility.starts_with(*prefix) {
            return Some(*group);
        }
    }

    let (head, value) = utility.split_once('-')?;
    if value.is_empty() {
        return None;
    }
    SPACING_HEADS
        .iter()
        .find(|(spacing_head, _)| *spacing_head == head)
        .map(|(_, group)| *group)
}

fn text_group(value: &str) -> &'static str {
    match value {
        "left" | "center" | "right" | "justify" | "start" | "end" => "text-align",
        "ellipsis" | "clip" => "text-overflow",
        "wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
        v if is_font_size(v) => "font-size",
        _ => "text-color",
    }
}

fn is_font_size(value: &str) -> bool {
    // `text-sm/6` carries a line height after the slash.
    let size = value.split_once('/').map_or(value, |(size, _)| size);
    FONT_SIZES.contains(&size) || (is_arbitrary(size) && is_length(size))
}

fn font_group(value: &str) -> &'static str {
    if FONT_WEIGHTS.contains(&value) {
        return "font-weight";
    }
    match arbitrary_inner(value) {
        Some(inner) if inner.chars().all(|c| c.is_ascii_digit()) => "font-weight",
        _ => "font-family",
    }
}

fn background_group(value: &str) -> &'static str {
    match value {
        "fixed" | "local" | "scroll" => "bg-attachment",
        "auto" | "cover" | "contain" => "bg-size",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        "center" | "top" | "bottom" | "left" | "right" | "left-top" | "left-bottom"
        | "right-top" | "right-bottom" => "bg-position",
        "none" => "bg-image",
        v if v.starts_with("gradient-") => "bg-image",
        v if v.starts_with("clip-") => "bg-clip",
        v if v.starts_with("origin-") => "bg-origin",
        _ => "bg-color",
    }
}

fn border_group(value: &str) -> &'static str {
    match value {
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => return "border-style",
        "collapse" | "separate" => return "border-collapse",
        v if is_length(v) => return "border-w",
        v if v.starts_with("spacing") => return "border-spacing",
        _ => {}
    }

    let (head, rest) = value.split_once('-').unwrap_or((value, ""));
    let width = rest.is_empty() || is_length(rest);
    match (head, width) {
        ("x", true) => "border-w-x",
        ("y", true) => "border-w-y",
        ("t", true) => "border-w-t",
        ("r", true) => "border-w-r",
        ("b", true) => "border-w-b",
        ("l", true) => "border-w-l",
        ("s", true) => "border-w-s",
        ("e", true) => "border-w-e",
        ("x", false) => "border-color-x",
        ("y", false) => "border-color-y",
        ("t", false) => "border-color-t",
        ("r", false) => "border-color-r",
        ("b", false) => "border-color-b",
        ("l", false) => "border-color-l",
        ("s", false) => "border-color-s",
        ("e", false) => "border-color-e",
        _ => "border-color",
    }
}

fn rounded_group(value: &str) -> &'static str {
    if RADIUS_SIZES.contains(&value) || is_arbitrary(value) {
        return "rounded";
    }
    let head = value.split_once('-').map_or(value, |(head, _)| head);
    match head {
        "s" => "rounded-s",
        "e" => "rounded-e",
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "ss" => "rounded-ss",
        "se" => "rounded-se",
        "ee" => "rounded-ee",
        "es" => "rounded-es",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        _ => "rounded",
    }
}

fn arbitrary_inner(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

fn is_arbitrary(value: &str) -> bool {
    arbitrary_inner(value).is_some()
}

/// A bare number (`2`, `0.5`, `px`) or an arbitrary length (`[3px]`, `[length:var(--w)]`).
fn is_length(value: &str) -> bool {
    if value == "px" || value.parse::<f64>().is_ok() {
        return true;
    }
    match arbitrary_inner(value) {
        Some(inner) => {
            inner.starts_with("length:")
                || inner
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_digit() || c == '.')
        }
        None => false,
    }
}
