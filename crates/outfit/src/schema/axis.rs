//! Axis definitions.

use indexmap::IndexMap;

use super::default::DefaultValue;
use crate::error::SchemaError;

/// One configurable dimension of a widget: its closed set of values, the
/// tokens each value contributes, and its default.
#[derive(Debug, Clone)]
pub struct AxisDefinition {
    name: String,
    values: IndexMap<String, Vec<String>>,
    default: DefaultValue,
}

impl AxisDefinition {
    /// Starts building an axis named `name`.
    pub fn builder(name: impl Into<String>) -> AxisBuilder {
        AxisBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates over the allowed values in declaration order.
    pub fn allowed_values(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns true if `value` is one of the axis' values.
    pub fn is_allowed(&self, value: &str) -> bool {
        self.values.contains_key(value)
    }

    /// Tokens contributed when `value` is selected. Empty for unknown values.
    pub fn tokens_for(&self, value: &str) -> &[String] {
        self.values.get(value).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn default_value(&self) -> &DefaultValue {
        &self.default
    }

    pub(crate) fn allowed_list(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}

/// Builder for [`AxisDefinition`].
///
/// Problems (duplicate values, tokens for undeclared values, a bad default)
/// are collected while building and reported by [`AxisBuilder::build`].
///
/// # Example
///
/// ```rust
/// use outfit::AxisDefinition;
///
/// let size = AxisDefinition::builder("size")
///     .value("sm", "h-9 px-3")
///     .value("lg", "h-11 px-8")
///     .default_value("sm")
///     .build()
///     .unwrap();
///
/// assert_eq!(size.tokens_for("lg"), ["h-11", "px-8"]);
/// ```
#[derive(Debug, Clone)]
pub struct AxisBuilder {
    name: String,
    values: IndexMap<String, Vec<String>>,
    default: Option<DefaultValue>,
    problem: Option<SchemaError>,
}

impl AxisBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: IndexMap::new(),
            default: None,
            problem: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declares a value and the whitespace-separated tokens it contributes.
    pub fn value(self, value: impl Into<String>, tokens: &str) -> Self {
        self.value_tokens(value, tokens.split_whitespace())
    }

    /// Declares a value with an explicit token list.
    pub fn value_tokens<I, S>(mut self, value: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let value = value.into();
        if self.values.contains_key(&value) {
            self.record(SchemaError::DuplicateValue {
                axis: self.name.clone(),
                value,
            });
            return self;
        }
        let tokens = tokens.into_iter().map(Into::into).collect();
        self.values.insert(value, tokens);
        self
    }

    /// Adds tokens to a value that was already declared.
    pub fn extend_tokens(mut self, value: &str, tokens: &str) -> Self {
        match self.values.get_mut(value) {
            Some(existing) => existing.extend(tokens.split_whitespace().map(str::to_owned)),
            None => self.record(SchemaError::TokensForUnknownValue {
                axis: self.name.clone(),
                value: value.to_string(),
            }),
        }
        self
    }

    /// Sets the default, either a value name or a [`DefaultValue`].
    pub fn default_value(mut self, default: impl Into<DefaultValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Validates and builds the axis.
    pub fn build(self) -> Result<AxisDefinition, SchemaError> {
        if let Some(problem) = self.problem {
            return Err(problem);
        }
        if self.values.is_empty() {
            return Err(SchemaError::EmptyAxis { axis: self.name });
        }
        let default = match self.default {
            Some(default) => default,
            None => return Err(SchemaError::MissingDefault { axis: self.name }),
        };
        if let Some(value) = default.as_static() {
            if !self.values.contains_key(value) {
                return Err(SchemaError::DefaultNotAllowed {
                    value: value.to_string(),
                    allowed: self.values.keys().cloned().collect(),
                    axis: self.name,
                });
            }
        }

        Ok(AxisDefinition {
            name: self.name,
            values: self.values,
            default,
        })
    }

    fn record(&mut self, problem: SchemaError) {
        // Keep the first problem; later ones are usually knock-on effects.
        if self.problem.is_none() {
            self.problem = Some(problem);
        }
    }
}
