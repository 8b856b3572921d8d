//! Error types.
//!
//! Every failure here is local and synchronous: a schema that breaks its own
//! invariants, a caller passing a value outside an axis, or a registry used
//! out of order. None of them are retried; they point at a call site to fix.

use std::path::PathBuf;

use thiserror::Error;

/// A schema definition that violates its own invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// An axis declares no values at all.
    #[error("axis '{axis}' declares no values")]
    EmptyAxis { axis: String },

    /// Two axes in one schema share a name.
    #[error("axis '{axis}' is declared more than once")]
    DuplicateAxis { axis: String },

    /// An axis lists the same value twice.
    #[error("axis '{axis}' declares value '{value}' more than once")]
    DuplicateValue { axis: String, value: String },

    /// An axis has no default.
    #[error("axis '{axis}' has no default value")]
    MissingDefault { axis: String },

    /// A static default is not one of the axis' values.
    #[error(
        "default '{value}' of axis '{axis}' is not one of: {}",
        .allowed.join(", ")
    )]
    DefaultNotAllowed {
        axis: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Tokens were attached to a value the axis doesn't declare.
    #[error("axis '{axis}' assigns tokens to undeclared value '{value}'")]
    TokensForUnknownValue { axis: String, value: String },
}

/// Failure to turn a partial option record into resolved options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A supplied value is outside the axis' closed set of values.
    #[error(
        "invalid value '{value}' for axis '{axis}', expected one of: {}",
        .allowed.join(", ")
    )]
    InvalidOptionValue {
        axis: String,
        value: String,
        allowed: Vec<String>,
    },

    /// The caller selected an axis the schema doesn't declare.
    #[error("unknown axis '{axis}', available: {}", .available.join(", "))]
    UnknownAxis {
        axis: String,
        available: Vec<String>,
    },

    /// A derived default produced a value the axis doesn't declare.
    #[error("derived default for axis '{axis}' produced undeclared value '{value}'")]
    InvalidDerivedDefault { axis: String, value: String },
}

/// Misuse of a [`SchemaRegistry`](crate::SchemaRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A schema is already registered under this kind.
    #[error("a schema is already registered for kind '{kind}'")]
    DuplicateSchema { kind: String },

    /// No schema is registered under this kind.
    #[error("unknown widget kind '{kind}', registered: {}", .available.join(", "))]
    UnknownKind {
        kind: String,
        available: Vec<String>,
    },

    /// The process-wide registry was installed twice, or after first use.
    #[error("the global schema registry is already installed")]
    AlreadyInstalled,
}

/// Failure to load a YAML stylesheet.
#[derive(Debug, Error)]
pub enum StylesheetError {
    /// The document is not valid YAML or doesn't have the stylesheet shape.
    #[error("failed to parse stylesheet: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The stylesheet file could not be read.
    #[error("failed to read stylesheet {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A schema in the stylesheet breaks its invariants.
    #[error("invalid schema for kind '{kind}': {source}")]
    Schema {
        kind: String,
        #[source]
        source: SchemaError,
    },

    /// A kind is declared more than once.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// An action descriptor that isn't exactly one of handler or link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Both a click handler and a destination were supplied.
    #[error("action '{text}' has both a click handler and an href")]
    Ambiguous { text: String },

    /// Neither a click handler nor a destination was supplied.
    #[error("action '{text}' has neither a click handler nor an href")]
    Missing { text: String },

    /// The action has no visible text.
    #[error("action text must not be empty")]
    EmptyText,
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Stylesheet(#[from] StylesheetError),

    #[error(transparent)]
    Action(#[from] ActionError),

    /// A registered schema resolved to a value a typed widget can't represent.
    #[error("axis '{axis}' resolved to '{value}', which this widget does not support")]
    UnsupportedValue { axis: String, value: String },
}

/// Result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
