use serde::Serialize;

use super::{overrides, Widget};
use crate::action::Action;
use crate::catalog;
use crate::compose::TokenSequence;
use crate::error::Result;
use crate::options::{OptionRecord, ResolvedOptions};
use crate::policy::LinkTarget;
use crate::registry::SchemaRegistry;

axis_enum! {
    /// Visual style of a button.
    ButtonVariant, axis = "variant" {
        Default => "default",
        Destructive => "destructive",
        Outline => "outline",
        Secondary => "secondary",
        Ghost => "ghost",
        Link => "link",
    }
    default = Default
}

axis_enum! {
    /// Button dimensions. `Icon` is square.
    ButtonSize, axis = "size" {
        Default => "default",
        Sm => "sm",
        Lg => "lg",
        Icon => "icon",
    }
    default = Default
}

/// Options for a button.
#[derive(Debug, Clone, Default)]
pub struct ButtonProps {
    pub variant: Option<ButtonVariant>,
    pub size: Option<ButtonSize>,
    pub action: Option<Action>,
    pub class: Option<String>,
}

impl ButtonProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    fn options(&self) -> OptionRecord {
        OptionRecord::new()
            .set_opt(ButtonVariant::AXIS, self.variant.map(ButtonVariant::as_str))
            .set_opt(ButtonSize::AXIS, self.size.map(ButtonSize::as_str))
    }
}

/// A planned button.
///
/// A button carrying a link action renders as an anchor; `link` holds its
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonLayout {
    pub classes: TokenSequence,
    pub options: ResolvedOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkTarget>,
}

impl Widget for ButtonProps {
    const KIND: &'static str = catalog::BUTTON;
    type Layout = ButtonLayout;

    fn layout(&self, registry: &SchemaRegistry) -> Result<ButtonLayout> {
        let composed = registry.compose(
            Self::KIND,
            &self.options(),
            &overrides(self.class.as_deref()),
        )?;
        Ok(ButtonLayout {
            classes: composed.tokens,
            options: composed.options,
            text: self.action.as_ref().map(|action| action.text().to_string()),
            link: self.action.as_ref().and_then(Action::link_target),
        })
    }
}
