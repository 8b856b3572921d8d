//! Axis defaults, static or derived from the rest of the input.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::options::OptionRecord;

/// Function computing a default from the invocation's inputs.
pub type DeriveFn = Arc<dyn Fn(&DefaultContext<'_>) -> String + Send + Sync>;

/// How an axis picks its value when the caller leaves it unset.
///
/// Most axes have a fixed default. Some depend on other inputs: a card's
/// image position is `top` when an image is supplied and `none` otherwise.
/// Derived defaults are evaluated in axis declaration order, so a derived
/// default may read any axis declared before it.
#[derive(Clone)]
pub enum DefaultValue {
    /// Always the same value.
    Static(String),
    /// Computed per invocation.
    Derived(DeriveFn),
}

impl DefaultValue {
    /// A fixed default.
    pub fn fixed(value: impl Into<String>) -> Self {
        DefaultValue::Static(value.into())
    }

    /// A default computed from the invocation's [`DefaultContext`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use outfit::DefaultValue;
    ///
    /// // Icon-only buttons default to the square size.
    /// let size = DefaultValue::derived(|ctx| {
    ///     if ctx.has_input("icon") && !ctx.has_input("label") {
    ///         "icon".to_string()
    ///     } else {
    ///         "default".to_string()
    ///     }
    /// });
    /// ```
    pub fn derived<F>(f: F) -> Self
    where
        F: Fn(&DefaultContext<'_>) -> String + Send + Sync + 'static,
    {
        DefaultValue::Derived(Arc::new(f))
    }

    /// `then` when the named input is present, `otherwise` when it isn't.
    pub fn when_present(
        input: impl Into<String>,
        then: impl Into<String>,
        otherwise: impl Into<String>,
    ) -> Self {
        let input = input.into();
        let then = then.into();
        let otherwise = otherwise.into();
        Self::derived(move |ctx| {
            if ctx.has_input(&input) {
                then.clone()
            } else {
                otherwise.clone()
            }
        })
    }

    /// Returns the static value, or `None` for derived defaults.
    pub fn as_static(&self) -> Option<&str> {
        match self {
            DefaultValue::Static(value) => Some(value),
            DefaultValue::Derived(_) => None,
        }
    }

    pub(crate) fn evaluate(&self, ctx: &DefaultContext<'_>) -> String {
        match self {
            DefaultValue::Static(value) => value.clone(),
            DefaultValue::Derived(derive) => derive(ctx),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Static(value) => f.debug_tuple("Static").field(value).finish(),
            DefaultValue::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::fixed(value)
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        DefaultValue::Static(value)
    }
}

/// What a derived default can see.
///
/// The caller's record (selections and inputs) plus the axes already
/// resolved earlier in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct DefaultContext<'a> {
    record: &'a OptionRecord,
    resolved: &'a IndexMap<String, String>,
}

impl<'a> DefaultContext<'a> {
    pub(crate) fn new(record: &'a OptionRecord, resolved: &'a IndexMap<String, String>) -> Self {
        Self { record, resolved }
    }

    /// Returns true if the caller supplied the named input.
    pub fn has_input(&self, name: &str) -> bool {
        self.record.has_input(name)
    }

    /// Returns the value the caller explicitly selected for `axis`.
    pub fn selected(&self, axis: &str) -> Option<&'a str> {
        self.record.get(axis)
    }

    /// Returns the value of an axis resolved before this one.
    pub fn resolved(&self, axis: &str) -> Option<&'a str> {
        self.resolved.get(axis).map(String::as_str)
    }
}
