//! Variant schemas.
//!
//! A [`VariantSchema`] describes one widget kind as data:
//!
//! - **base tokens** that every instance carries,
//! - an ordered list of **axes** ([`AxisDefinition`]), each with a closed set
//!   of values, the tokens each value contributes, and a default
//!   ([`DefaultValue`]).
//!
//! Axis order matters twice: derived defaults are evaluated in that order,
//! and axis tokens are appended in that order when composing classes.
//!
//! Schemas are immutable once built. Share them through a
//! [`SchemaRegistry`](crate::SchemaRegistry).

mod axis;
mod default;

pub use axis::{AxisBuilder, AxisDefinition};
pub use default::{DefaultContext, DefaultValue, DeriveFn};

use indexmap::IndexMap;

use crate::error::{ResolveError, SchemaError};
use crate::options::{OptionRecord, ResolvedOptions};

/// The closed set of option axes for one widget kind.
///
/// # Example
///
/// ```rust
/// use outfit::{AxisDefinition, OptionRecord, VariantSchema};
///
/// let schema = VariantSchema::builder()
///     .base("border")
///     .axis(
///         AxisDefinition::builder("variant")
///             .value("default", "bg-a")
///             .value("destructive", "bg-b")
///             .default_value("default"),
///     )
///     .axis(
///         AxisDefinition::builder("size")
///             .value("sm", "h-9")
///             .value("lg", "h-11")
///             .default_value("sm"),
///     )
///     .build()
///     .unwrap();
///
/// let composed = schema
///     .compose(&OptionRecord::new().set("variant", "destructive"), &[] as &[&str])
///     .unwrap();
/// assert_eq!(composed.tokens.to_string(), "border bg-b h-9");
/// ```
#[derive(Debug, Clone)]
pub struct VariantSchema {
    base: Vec<String>,
    axes: IndexMap<String, AxisDefinition>,
}

impl VariantSchema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Widget-invariant tokens.
    pub fn base(&self) -> &[String] {
        &self.base
    }

    /// Iterates over axes in declaration order.
    pub fn axes(&self) -> impl Iterator<Item = &AxisDefinition> {
        self.axes.values()
    }

    /// Looks up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&AxisDefinition> {
        self.axes.get(name)
    }

    /// Axis names in declaration order.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(String::as_str)
    }

    /// Number of axes.
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// True for schemas with no axes (base tokens only).
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Resolves a partial option record against this schema.
    ///
    /// Shorthand for [`resolve`](crate::resolve)`(self, options)`.
    pub fn resolve(&self, options: &OptionRecord) -> Result<ResolvedOptions, ResolveError> {
        crate::resolve::resolve(self, options)
    }
}

/// Builder for [`VariantSchema`].
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    base: Vec<String>,
    axes: Vec<AxisBuilder>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends whitespace-separated base tokens.
    pub fn base(mut self, tokens: &str) -> Self {
        self.base
            .extend(tokens.split_whitespace().map(str::to_owned));
        self
    }

    /// Appends base tokens from a list.
    pub fn base_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Declares the next axis.
    pub fn axis(mut self, axis: AxisBuilder) -> Self {
        self.axes.push(axis);
        self
    }

    /// Validates every axis and builds the schema.
    pub fn build(self) -> Result<VariantSchema, SchemaError> {
        let mut axes = IndexMap::with_capacity(self.axes.len());
        for builder in self.axes {
            if axes.contains_key(builder.name()) {
                return Err(SchemaError::DuplicateAxis {
                    axis: builder.name().to_string(),
                });
            }
            let axis = builder.build()?;
            axes.insert(axis.name().to_string(), axis);
        }
        Ok(VariantSchema {
            base: self.base,
            axes,
        })
    }
}
