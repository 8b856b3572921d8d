//! Option records: what a caller asked for, and what it resolved to.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// The options supplied for a single widget invocation.
///
/// An option record holds two things:
///
/// - **Selections**: axis name to chosen value. An axis that was never set
///   (or set with `None`) is left to the schema's default.
/// - **Inputs**: names of non-axis payloads the caller supplied, such as a
///   card's `image`. Derived defaults inspect these.
///
/// Records are built by value and then only read, so the same record
/// resolves identically no matter how many times it is used.
///
/// # Example
///
/// ```rust
/// use outfit::OptionRecord;
///
/// let record = OptionRecord::new()
///     .set("variant", "destructive")
///     .set_opt("size", None::<&str>)
///     .input("image");
///
/// assert_eq!(record.get("variant"), Some("destructive"));
/// assert_eq!(record.get("size"), None);
/// assert!(record.has_input("image"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionRecord {
    selections: IndexMap<String, String>,
    inputs: IndexSet<String>,
}

impl OptionRecord {
    /// Creates an empty record: every axis unset, no inputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `value` for `axis`.
    pub fn set(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.selections.insert(axis.into(), value.into());
        self
    }

    /// Selects `value` for `axis` when it is `Some`, leaves the axis unset otherwise.
    ///
    /// `None` also clears an earlier selection for the same axis.
    pub fn set_opt<V: Into<String>>(mut self, axis: impl Into<String>, value: Option<V>) -> Self {
        let axis = axis.into();
        match value {
            Some(value) => {
                self.selections.insert(axis, value.into());
            }
            None => {
                self.selections.shift_remove(&axis);
            }
        }
        self
    }

    /// Marks a non-axis input as present.
    pub fn input(mut self, name: impl Into<String>) -> Self {
        self.inputs.insert(name.into());
        self
    }

    /// Marks a non-axis input as present when `present` is true.
    pub fn input_if(self, name: impl Into<String>, present: bool) -> Self {
        if present {
            self.input(name)
        } else {
            self
        }
    }

    /// Returns the value selected for `axis`, if any.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.selections.get(axis).map(String::as_str)
    }

    /// Returns true if the caller supplied the named input.
    pub fn has_input(&self, name: &str) -> bool {
        self.inputs.contains(name)
    }

    /// Iterates over selections in the order they were made.
    pub fn selections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections
            .iter()
            .map(|(axis, value)| (axis.as_str(), value.as_str()))
    }

    /// Iterates over supplied input names.
    pub fn inputs(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(String::as_str)
    }

    /// Returns true if nothing was selected and no input was supplied.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty() && self.inputs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for OptionRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |record, (axis, value)| record.set(axis, value))
    }
}

/// Every axis of a schema mapped to a concrete value.
///
/// Produced only by [`resolve`](crate::resolve); entries follow the schema's
/// axis declaration order. Serializes as a plain map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedOptions {
    values: IndexMap<String, String>,
}

impl ResolvedOptions {
    pub(crate) fn from_values(values: IndexMap<String, String>) -> Self {
        Self { values }
    }

    /// Returns the resolved value of `axis`.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.values.get(axis).map(String::as_str)
    }

    /// Iterates over `(axis, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(axis, value)| (axis.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
