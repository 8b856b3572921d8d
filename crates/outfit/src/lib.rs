//! # outfit - Schema-driven variant resolution
//!
//! Presentational components tend to share one piece of logic: a handful of
//! enum-like options (`variant`, `size`, `imagePosition`) are mapped to a
//! class string, with defaults, a few defaults that depend on other inputs,
//! and caller overrides that must win over the component's own classes.
//!
//! `outfit` turns that logic into data. Each widget kind is a
//! [`VariantSchema`]; resolving and composing options is the same code for
//! every widget.
//!
//! ## Pipeline
//!
//! ```text
//! OptionRecord ──resolve──▶ ResolvedOptions ──merge──▶ TokenSequence
//!                  ▲                            ▲
//!            VariantSchema               base + axis + override tokens
//! ```
//!
//! 1. [`resolve`] validates every selected value and fills unset axes from
//!    their defaults, in axis declaration order.
//! 2. [`merge`] concatenates base tokens, each axis' tokens and caller
//!    overrides, then drops earlier tokens that a later one overrides (see
//!    [`outfit_merge`]).
//! 3. [`VariantSchema::compose`] does both.
//!
//! ## Example
//!
//! ```rust
//! use outfit::{AxisDefinition, OptionRecord, VariantSchema};
//!
//! let button = VariantSchema::builder()
//!     .base("inline-flex rounded-md")
//!     .axis(
//!         AxisDefinition::builder("variant")
//!             .value("default", "bg-primary text-primary-foreground")
//!             .value("destructive", "bg-destructive text-destructive-foreground")
//!             .default_value("default"),
//!     )
//!     .axis(
//!         AxisDefinition::builder("size")
//!             .value("default", "h-10 px-4")
//!             .value("sm", "h-9 px-3")
//!             .default_value("default"),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let composed = button
//!     .compose(&OptionRecord::new().set("size", "sm"), &["px-6"])
//!     .unwrap();
//!
//! assert_eq!(composed.options.get("variant"), Some("default"));
//! assert_eq!(
//!     composed.tokens.to_string(),
//!     "inline-flex rounded-md bg-primary text-primary-foreground h-9 px-6"
//! );
//! ```
//!
//! ## Beyond classes
//!
//! - [`SchemaRegistry`] maps widget kinds to schemas; [`global`] holds one
//!   for the process, defaulting to the built-in [`catalog`].
//! - [`Stylesheet`] loads schemas from YAML.
//! - [`policy`] has the structural decisions a renderer needs besides the
//!   class string: link isolation, media visibility, list spacing.
//! - [`Action`] is a call-to-action that is either a handler or a link.
//! - [`widgets`] plans typed widgets (buttons, cards, quotes, lists) into
//!   layouts.

pub mod action;
pub mod catalog;
mod compose;
pub mod error;
mod options;
pub mod policy;
mod registry;
mod resolve;
mod schema;
mod stylesheet;
pub mod widgets;

pub use action::{Action, Callback};
pub use compose::{merge, Composition, TokenSequence};
pub use error::{
    ActionError, Error, RegistryError, ResolveError, Result, SchemaError, StylesheetError,
};
pub use options::{OptionRecord, ResolvedOptions};
pub use policy::{
    is_external_destination, margin_plan, margin_policy, should_render_media, LinkTarget,
    Spacing,
};
pub use registry::{global, install, SchemaRegistry};
pub use resolve::resolve;
pub use schema::{
    AxisBuilder, AxisDefinition, DefaultContext, DefaultValue, DeriveFn, SchemaBuilder,
    VariantSchema,
};
pub use stylesheet::Stylesheet;
pub use widgets::Widget;

pub use outfit_merge::{merge_classes, merge_tokens};
