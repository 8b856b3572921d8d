use serde::Serialize;

use super::button::ButtonProps;
use super::{overrides, Widget};
use crate::action::Action;
use crate::catalog;
use crate::compose::TokenSequence;
use crate::error::Result;
use crate::options::{OptionRecord, ResolvedOptions};
use crate::policy::{should_render_media, LinkTarget, NONE_POSITION};
use crate::registry::SchemaRegistry;

/// Image width when the caller gives none.
pub const DEFAULT_IMAGE_WIDTH: u32 = 400;
/// Image height when the caller gives none.
pub const DEFAULT_IMAGE_HEIGHT: u32 = 300;

const MEDIA_CLASSES: &str = "relative w-full overflow-hidden rounded-t-lg";
const IMAGE_CLASSES: &str = "h-48 w-full object-cover";
const BODY_CLASSES: &str = "flex flex-col gap-4 p-6";
const TITLE_CLASSES: &str = "text-xl leading-tight font-semibold tracking-tight";
const DESCRIPTION_CLASSES: &str = "text-muted-foreground text-sm";
const ACTION_CLASSES: &str = "mt-2";

axis_enum! {
    /// Where a card draws its image.
    ImagePosition, axis = "imagePosition" {
        Top => "top",
        Bottom => "bottom",
        None => "none",
    }
    default = None
}

axis_enum! {
    /// Heading element used for a card title.
    HeadingLevel, axis = "titleHeadingLevel" {
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
    }
    default = H2
}

/// An image supplied to a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Image {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width: None,
            height: None,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Options for a card.
#[derive(Debug, Clone)]
pub struct CardProps {
    pub title: String,
    pub description: String,
    pub heading: Option<HeadingLevel>,
    pub image: Option<Image>,
    pub image_position: Option<ImagePosition>,
    pub cta: Option<Action>,
    pub class: Option<String>,
}

impl CardProps {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            heading: None,
            image: None,
            image_position: None,
            cta: None,
            class: None,
        }
    }

    pub fn heading(mut self, heading: HeadingLevel) -> Self {
        self.heading = Some(heading);
        self
    }

    pub fn image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    pub fn image_position(mut self, position: ImagePosition) -> Self {
        self.image_position = Some(position);
        self
    }

    pub fn cta(mut self, cta: Action) -> Self {
        self.cta = Some(cta);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    fn options(&self) -> OptionRecord {
        OptionRecord::new()
            .set_opt(
                ImagePosition::AXIS,
                self.image_position.map(ImagePosition::as_str),
            )
            .set_opt(HeadingLevel::AXIS, self.heading.map(HeadingLevel::as_str))
            .input_if(catalog::CARD_IMAGE_INPUT, self.image.is_some())
    }
}

/// The image block of a planned card, with dimensions filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
    pub container_classes: &'static str,
    pub image_classes: &'static str,
}

impl Media {
    fn from_image(image: &Image) -> Self {
        Self {
            src: image.src.clone(),
            alt: image.alt.clone(),
            width: image.width.unwrap_or(DEFAULT_IMAGE_WIDTH),
            height: image.height.unwrap_or(DEFAULT_IMAGE_HEIGHT),
            container_classes: MEDIA_CLASSES,
            image_classes: IMAGE_CLASSES,
        }
    }
}

/// The call-to-action of a planned card, drawn as a default button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLayout {
    pub text: String,
    pub wrapper_classes: &'static str,
    pub classes: TokenSequence,
    /// Anchor attributes for link actions; `None` for handlers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkTarget>,
}

/// A planned card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLayout {
    pub classes: TokenSequence,
    pub options: ResolvedOptions,
    pub heading: HeadingLevel,
    pub title: String,
    pub title_classes: &'static str,
    pub description: String,
    pub description_classes: &'static str,
    pub body_classes: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionLayout>,
}

impl Widget for CardProps {
    const KIND: &'static str = catalog::CARD;
    type Layout = CardLayout;

    fn layout(&self, registry: &SchemaRegistry) -> Result<CardLayout> {
        let composed = registry.compose(
            Self::KIND,
            &self.options(),
            &overrides(self.class.as_deref()),
        )?;

        let position = composed
            .options
            .get(ImagePosition::AXIS)
            .unwrap_or(NONE_POSITION);
        let media = if should_render_media(self.image.as_ref(), position) {
            self.image.as_ref().map(Media::from_image)
        } else {
            None
        };

        let heading = composed
            .options
            .get(HeadingLevel::AXIS)
            .map(str::parse::<HeadingLevel>)
            .transpose()?
            .unwrap_or_default();

        let action = match &self.cta {
            Some(cta) => {
                let button = ButtonProps::new().action(cta.clone()).layout(registry)?;
                Some(ActionLayout {
                    text: cta.text().to_string(),
                    wrapper_classes: ACTION_CLASSES,
                    classes: button.classes,
                    link: button.link,
                })
            }
            None => None,
        };

        Ok(CardLayout {
            classes: composed.tokens,
            options: composed.options,
            heading,
            title: self.title.clone(),
            title_classes: TITLE_CLASSES,
            description: self.description.clone(),
            description_classes: DESCRIPTION_CLASSES,
            body_classes: BODY_CLASSES,
            media,
            action,
        })
    }
}
