use serde::Serialize;

use super::{overrides, Widget};
use crate::catalog;
use crate::compose::TokenSequence;
use crate::error::Result;
use crate::options::OptionRecord;
use crate::registry::SchemaRegistry;

const TEXT_CLASSES: &str = "mb-2";
const ATTRIBUTION_CLASSES: &str = "text-sm text-gray-600 not-italic dark:text-gray-400";

/// Options for a block quote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteProps {
    pub quote: String,
    pub source: Option<String>,
    pub class: Option<String>,
}

impl QuoteProps {
    pub fn new(quote: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            ..Self::default()
        }
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// The footer naming a quote's source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribution {
    /// Source prefixed with an em dash.
    pub text: String,
    pub classes: &'static str,
}

/// A planned quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteLayout {
    pub classes: TokenSequence,
    /// Quote text wrapped in quotation marks.
    pub text: String,
    pub text_classes: &'static str,
    /// Present only for a non-blank source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Attribution>,
}

impl Widget for QuoteProps {
    const KIND: &'static str = catalog::QUOTE;
    type Layout = QuoteLayout;

    fn layout(&self, registry: &SchemaRegistry) -> Result<QuoteLayout> {
        let composed = registry.compose(
            Self::KIND,
            &OptionRecord::new(),
            &overrides(self.class.as_deref()),
        )?;

        let attribution = self
            .source
            .as_deref()
            .map(str::trim)
            .filter(|source| !source.is_empty())
            .map(|source| Attribution {
                text: format!("\u{2014} {}", source),
                classes: ATTRIBUTION_CLASSES,
            });

        Ok(QuoteLayout {
            classes: composed.tokens,
            text: format!("\"{}\"", self.quote),
            text_classes: TEXT_CLASSES,
            attribution,
        })
    }
}
