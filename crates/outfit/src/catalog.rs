//! Built-in widget schemas.
//!
//! The catalog covers the component set of a typical utility-class design
//! system:
//!
//! | Kind | Axes |
//! |------|------|
//! | `button` | `variant` (default, destructive, outline, secondary, ghost, link), `size` (default, sm, lg, icon) |
//! | `badge` | `variant` (default, secondary, destructive, outline) |
//! | `alert` | `variant` (default, destructive) |
//! | `card` | `imagePosition` (top, bottom, none; `top` when an image is supplied), `titleHeadingLevel` (h2, h3, h4) |
//! | `input` | none |
//! | `skeleton` | none |
//! | `quote` | none |
//! | `numbered-list` | none |
//! | `list-item` | `spacing` (trailing, flush) |
//!
//! [`registry`] returns all of them, registered in that order. It is also
//! what [`global`](crate::global) falls back to.

use crate::error::{Error, SchemaError};
use crate::registry::SchemaRegistry;
use crate::schema::{AxisDefinition, DefaultValue, VariantSchema};

pub const BUTTON: &str = "button";
pub const BADGE: &str = "badge";
pub const ALERT: &str = "alert";
pub const CARD: &str = "card";
pub const INPUT: &str = "input";
pub const SKELETON: &str = "skeleton";
pub const QUOTE: &str = "quote";
pub const NUMBERED_LIST: &str = "numbered-list";
pub const LIST_ITEM: &str = "list-item";

/// Input name whose presence moves a card's image to the top.
pub const CARD_IMAGE_INPUT: &str = "image";

pub fn button() -> Result<VariantSchema, SchemaError> {
    VariantSchema::builder()
        .base(
            "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md \
             text-sm font-medium ring-offset-background transition-colors \
             focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring \
             focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50",
        )
        .axis(
            AxisDefinition::builder("variant")
                .value("default", "bg-primary text-primary-foreground hover:bg-primary/90")
                .value(
                    "destructive",
                    "bg-destructive text-destructive-foreground hover:bg-destructive/90",
                )
                .value(
                    "outline",
                    "border border-input bg-background hover:bg-accent hover:text-accent-foreground",
                )
                .value(
                    "secondary",
                    "bg-secondary text-secondary-foreground hover:bg-secondary/80",
                )
                .value("ghost", "hover:bg-accent hover:text-accent-foreground")
                .value("link", "text-primary underline-offset-4 hover:underline")
                .default_value("default"),
        )
        .axis(
            AxisDefinition::builder("size")
                .value("default", "h-10 px-4 py-2")
                .value("sm", "h-9 rounded-md px-3")
                .value("lg", "h-11 rounded-md px-8")
                .value("icon", "h-10 w-10")
                .default_value("default"),
        )
        .build()
}

pub fn badge() -> Result<VariantSchema, SchemaError> {
    VariantSchema::builder()
        .base(
            "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs \
             font-semibold transition-colors focus:outline-none focus:ring-2 \
             focus:ring-ring focus:ring-offset-2",
        )
        .axis(
            AxisDefinition::builder("variant")
                .value(
                    "default",
                    "border-transparent bg-primary text-primary-foreground hover:bg-primary/80",
                )
                .value(
                    "secondary",
                    "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80",
                )
                .value(
                    "destructive",
                    "border-transparent bg-destructive text-destructive-foreground hover:bg-destructive/80",
                )
                .value("outline", "text-foreground")
                .default_value("default"),
        )
        .build()
}

pub fn alert() -> Result<VariantSchema, SchemaError> {
    VariantSchema::builder()
        .base(
            "relative w-full rounded-lg border p-4 [&>svg~*]:pl-7 \
             [&>svg+div]:translate-y-[-3px] [&>svg]:absolute [&>svg]:left-4 \
             [&>svg]:top-4 [&>svg]:text-foreground",
        )
        .axis(
            AxisDefinition::builder("variant")
                .value("default", "bg-background text-foreground")
                .value(
                    "destructive",
                    "border-destructive/50 text-destructive dark:border-destructive \
                     [&>svg]:text-destructive",
                )
                .default_value("default"),
        )
        .build()
}

pub fn card() -> Result<VariantSchema, SchemaError> {
    VariantSchema::builder()
        .base("rounded-lg border bg-card text-card-foreground shadow-sm transition-shadow hover:shadow-md")
        .axis(
            AxisDefinition::builder("imagePosition")
                .value("top", "flex flex-col")
                .value("bottom", "flex flex-col-reverse")
                .value("none", "flex flex-col")
                .default_value(DefaultValue::when_present(CARD_IMAGE_INPUT, "top", "none")),
        )
        .axis(
            AxisDefinition::builder("titleHeadingLevel")
                .value("h2", "")
                .value("h3", "")
                .value("h4", "")
                .default_value("h2"),
        )
        .build()
}

pub fn input() -> Result<VariantSchema, SchemaError> {
    VariantSchema::builder()
        .base(
            "flex h-10 w-full rounded-md border border-input bg-background px-3 py-2 \
             text-base ring-offset-background file:border-0 file:bg-transparent \
             file:text-sm file:font-medium file:text-foreground \
             placeholder:text-muted-foreground focus-visible:outline-none \
             focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 \
             disabled:cursor-not-allowed disabled:opacity-50 md:text-sm",
        )
        .build()
}

pub fn skeleton() -> Result<VariantSchema, SchemaError> {
    VariantSchema::builder()
        .base("animate-pulse rounded-md bg-muted")
        .build()
}

pub fn quote() -> Result<VariantSchema, SchemaError> {
    VariantSchema::builder()
        .base(
            "border-l-4 border-gray-300 pl-4 text-gray-700 italic \
             dark:border-gray-600 dark:text-gray-300",
        )
        .build()
}

pub fn numbered_list() -> Result<VariantSchema, SchemaError> {
    VariantSchema::builder()
        .base(
            "list-inside list-decimal text-sm/6 text-center sm:text-left \
             font-[family-name:var(--font-geist-mono)]",
        )
        .build()
}

pub fn list_item() -> Result<VariantSchema, SchemaError> {
    VariantSchema::builder()
        .base("tracking-[-.01em]")
        .axis(
            AxisDefinition::builder("spacing")
                .value("trailing", "mb-2")
                .value("flush", "")
                .default_value("flush"),
        )
        .build()
}

/// Every built-in schema, registered under its kind.
pub fn registry() -> Result<SchemaRegistry, Error> {
    let schemas: [(&str, fn() -> Result<VariantSchema, SchemaError>); 9] = [
        (BUTTON, button),
        (BADGE, badge),
        (ALERT, alert),
        (CARD, card),
        (INPUT, input),
        (SKELETON, skeleton),
        (QUOTE, quote),
        (NUMBERED_LIST, numbered_list),
        (LIST_ITEM, list_item),
    ];

    let mut registry = SchemaRegistry::new();
    for (kind, build) in schemas {
        registry.register(kind, build()?)?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionRecord;

    const NO_OVERRIDES: &[&str] = &[];

    fn compose(kind: &str, options: OptionRecord) -> String {
        registry()
            .unwrap()
            .compose(kind, &options, NO_OVERRIDES)
            .unwrap()
            .tokens
            .to_string()
    }

    #[test]
    fn test_registry_kinds() {
        let registry = registry().unwrap();
        assert_eq!(
            registry.kinds().collect::<Vec<_>>(),
            vec![
                "button",
                "badge",
                "alert",
                "card",
                "input",
                "skeleton",
                "quote",
                "numbered-list",
                "list-item"
            ]
        );
    }

    #[test]
    fn test_button_defaults() {
        let classes = compose(BUTTON, OptionRecord::new());
        assert!(classes.contains("bg-primary"));
        assert!(classes.contains("h-10"));
        assert!(classes.contains("disabled:opacity-50"));
    }

    #[test]
    fn test_button_variants_and_sizes() {
        let destructive = compose(BUTTON, OptionRecord::new().set("variant", "destructive"));
        assert!(destructive.contains("bg-destructive"));
        assert!(!destructive.contains("bg-primary "));

        let small = compose(BUTTON, OptionRecord::new().set("size", "sm"));
        assert!(small.split(' ').any(|t| t == "h-9"));
        assert!(!small.split(' ').any(|t| t == "h-10"));

        let large = compose(BUTTON, OptionRecord::new().set("size", "lg"));
        assert!(large.split(' ').any(|t| t == "h-11"));
    }

    #[test]
    fn test_icon_button_is_square() {
        let icon = compose(BUTTON, OptionRecord::new().set("size", "icon"));
        let tokens: Vec<&str> = icon.split(' ').collect();
        assert!(tokens.contains(&"h-10"));
        assert!(tokens.contains(&"w-10"));
        assert!(!tokens.contains(&"px-4"));
    }

    #[test]
    fn test_card_image_position() {
        let registry = registry().unwrap();
        let with_image = registry
            .resolve(CARD, &OptionRecord::new().input(CARD_IMAGE_INPUT))
            .unwrap();
        assert_eq!(with_image.get("imagePosition"), Some("top"));
        assert_eq!(with_image.get("titleHeadingLevel"), Some("h2"));

        let without_image = registry.resolve(CARD, &OptionRecord::new()).unwrap();
        assert_eq!(without_image.get("imagePosition"), Some("none"));
    }

    #[test]
    fn test_card_bottom_reverses() {
        let classes = compose(CARD, OptionRecord::new().set("imagePosition", "bottom"));
        assert_eq!(
            classes,
            "rounded-lg border bg-card text-card-foreground shadow-sm transition-shadow \
             hover:shadow-md flex flex-col-reverse"
        );
    }

    #[test]
    fn test_list_item_spacing() {
        assert_eq!(
            compose(LIST_ITEM, OptionRecord::new().set("spacing", "trailing")),
            "tracking-[-.01em] mb-2"
        );
        assert_eq!(compose(LIST_ITEM, OptionRecord::new()), "tracking-[-.01em]");
    }

    #[test]
    fn test_alert_destructive_keeps_svg_scope() {
        let classes = compose(ALERT, OptionRecord::new().set("variant", "destructive"));
        let tokens: Vec<&str> = classes.split(' ').collect();
        assert!(tokens.contains(&"[&>svg]:text-destructive"));
        assert!(!tokens.contains(&"[&>svg]:text-foreground"));
        assert!(tokens.contains(&"border-destructive/50"));
    }
}
