use std::collections::HashSet;

use serde::Serialize;

use super::{overrides, Widget};
use crate::catalog;
use crate::compose::TokenSequence;
use crate::error::Result;
use crate::options::OptionRecord;
use crate::policy::{margin_plan, Spacing};
use crate::registry::SchemaRegistry;

/// Options for an ordered list of text items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberedListProps {
    pub items: Vec<String>,
    pub class: Option<String>,
    pub aria_label: Option<String>,
}

impl NumberedListProps {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }
}

/// One planned list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItemLayout {
    /// Stable identity, unique within the list: the item text, or
    /// `item-{index}` when the text is blank or already taken. A taken
    /// fallback gets a numeric suffix (`item-1-2`).
    pub key: String,
    pub text: String,
    pub spacing: Spacing,
    pub classes: TokenSequence,
}

/// A planned numbered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedListLayout {
    pub classes: TokenSequence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    pub items: Vec<ListItemLayout>,
}

fn unique_key(seen: &mut HashSet<String>, text: &str, index: usize) -> String {
    if !text.trim().is_empty() && seen.insert(text.to_string()) {
        return text.to_string();
    }
    let fallback = format!("item-{}", index);
    let mut key = fallback.clone();
    let mut suffix = 1;
    while !seen.insert(key.clone()) {
        suffix += 1;
        key = format!("{}-{}", fallback, suffix);
    }
    key
}

impl Widget for NumberedListProps {
    const KIND: &'static str = catalog::NUMBERED_LIST;
    type Layout = NumberedListLayout;

    fn layout(&self, registry: &SchemaRegistry) -> Result<NumberedListLayout> {
        let composed = registry.compose(
            Self::KIND,
            &OptionRecord::new(),
            &overrides(self.class.as_deref()),
        )?;

        let item_schema = registry.get(catalog::LIST_ITEM)?;
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(self.items.len());

        let plan = margin_plan(self.items.len());
        for (index, (text, spacing)) in self.items.iter().zip(plan).enumerate() {
            let key = unique_key(&mut seen, text, index);
            let item = item_schema.compose(
                &OptionRecord::new().set("spacing", spacing.as_str()),
                &[] as &[&str],
            )?;
            items.push(ListItemLayout {
                key,
                text: text.clone(),
                spacing,
                classes: item.tokens,
            });
        }

        Ok(NumberedListLayout {
            classes: composed.tokens,
            aria_label: self.aria_label.clone(),
            items,
        })
    }
}
