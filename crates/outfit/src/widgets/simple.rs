//! Widgets whose layout is just a class list.

use super::{overrides, Widget};
use crate::catalog;
use crate::compose::TokenSequence;
use crate::error::Result;
use crate::options::OptionRecord;
use crate::registry::SchemaRegistry;

axis_enum! {
    /// Visual style of a badge.
    BadgeVariant, axis = "variant" {
        Default => "default",
        Secondary => "secondary",
        Destructive => "destructive",
        Outline => "outline",
    }
    default = Default
}

axis_enum! {
    /// Visual style of an alert.
    AlertVariant, axis = "variant" {
        Default => "default",
        Destructive => "destructive",
    }
    default = Default
}

fn classes(
    registry: &SchemaRegistry,
    kind: &str,
    options: OptionRecord,
    class: Option<&str>,
) -> Result<TokenSequence> {
    Ok(registry.compose(kind, &options, &overrides(class))?.tokens)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeProps {
    pub variant: Option<BadgeVariant>,
    pub class: Option<String>,
}

impl BadgeProps {
    pub fn new(variant: BadgeVariant) -> Self {
        Self {
            variant: Some(variant),
            class: None,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Widget for BadgeProps {
    const KIND: &'static str = catalog::BADGE;
    type Layout = TokenSequence;

    fn layout(&self, registry: &SchemaRegistry) -> Result<TokenSequence> {
        let options = OptionRecord::new()
            .set_opt(BadgeVariant::AXIS, self.variant.map(BadgeVariant::as_str));
        classes(registry, Self::KIND, options, self.class.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertProps {
    pub variant: Option<AlertVariant>,
    pub class: Option<String>,
}

impl AlertProps {
    pub fn new(variant: AlertVariant) -> Self {
        Self {
            variant: Some(variant),
            class: None,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Widget for AlertProps {
    const KIND: &'static str = catalog::ALERT;
    type Layout = TokenSequence;

    fn layout(&self, registry: &SchemaRegistry) -> Result<TokenSequence> {
        let options = OptionRecord::new()
            .set_opt(AlertVariant::AXIS, self.variant.map(AlertVariant::as_str));
        classes(registry, Self::KIND, options, self.class.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputProps {
    pub class: Option<String>,
}

impl Widget for InputProps {
    const KIND: &'static str = catalog::INPUT;
    type Layout = TokenSequence;

    fn layout(&self, registry: &SchemaRegistry) -> Result<TokenSequence> {
        classes(registry, Self::KIND, OptionRecord::new(), self.class.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkeletonProps {
    pub class: Option<String>,
}

impl Widget for SkeletonProps {
    const KIND: &'static str = catalog::SKELETON;
    type Layout = TokenSequence;

    fn layout(&self, registry: &SchemaRegistry) -> Result<TokenSequence> {
        classes(registry, Self::KIND, OptionRecord::new(), self.class.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SchemaRegistry {
        catalog::registry().unwrap()
    }

    #[test]
    fn test_badge_variants() {
        let registry = registry();
        let default = BadgeProps::default().layout(&registry).unwrap();
        assert!(default.contains("bg-primary"));

        let outline = BadgeProps::new(BadgeVariant::Outline).layout(&registry).unwrap();
        assert!(outline.contains("text-foreground"));
        assert!(!outline.contains("bg-primary"));
    }

    #[test]
    fn test_alert_destructive() {
        let classes = AlertProps::new(AlertVariant::Destructive)
            .layout(&registry())
            .unwrap();
        assert!(classes.contains("text-destructive"));
        assert!(!classes.contains("text-foreground"));
    }

    #[test]
    fn test_input_keeps_custom_class() {
        let classes = InputProps {
            class: Some("custom-class".to_string()),
        }
        .layout(&registry())
        .unwrap();
        assert!(classes.contains("custom-class"));
        assert!(classes.contains("rounded-md"));
    }

    #[test]
    fn test_skeleton_size_override() {
        let classes = SkeletonProps {
            class: Some("h-4 w-20".to_string()),
        }
        .layout(&registry())
        .unwrap();
        assert_eq!(classes.to_string(), "animate-pulse rounded-md bg-muted h-4 w-20");
    }

    #[test]
    fn test_enum_values_are_in_catalog() {
        let registry = registry();
        let badge = registry.get(catalog::BADGE).unwrap();
        for variant in BadgeVariant::ALL {
            assert!(badge.axis("variant").unwrap().is_allowed(variant.as_str()));
        }
        let alert = registry.get(catalog::ALERT).unwrap();
        for variant in AlertVariant::ALL {
            assert!(alert.axis("variant").unwrap().is_allowed(variant.as_str()));
        }
    }
}
