//! Schema registry keyed by widget kind.
//!
//! [`SchemaRegistry`] maps a widget kind (`"button"`, `"card"`, ...) to its
//! [`VariantSchema`]. Registration is strict:
//!
//! - registering a kind twice is an error, not a silent replacement,
//! - looking up a kind that was never registered is an error listing the
//!   kinds that were.
//!
//! Both point at startup configuration mistakes and are meant to be
//! surfaced, not recovered from.
//!
//! # Process-wide registry
//!
//! Most applications want one registry for their lifetime. [`install`] sets
//! it once; [`global`] returns it, falling back to the built-in
//! [catalog](crate::catalog) when nothing was installed. After the first call
//! to either, the global registry is read-only, so concurrent readers never
//! need a lock.
//!
//! # Example
//!
//! ```rust
//! use outfit::{AxisDefinition, OptionRecord, SchemaRegistry, VariantSchema};
//!
//! let mut registry = SchemaRegistry::new();
//! registry
//!     .register(
//!         "badge",
//!         VariantSchema::builder()
//!             .base("inline-flex rounded-full border")
//!             .axis(
//!                 AxisDefinition::builder("variant")
//!                     .value("default", "bg-primary")
//!                     .value("outline", "text-foreground")
//!                     .default_value("default"),
//!             )
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! let composed = registry
//!     .compose("badge", &OptionRecord::new().set("variant", "outline"), &[] as &[&str])
//!     .unwrap();
//! assert_eq!(composed.tokens.to_string(), "inline-flex rounded-full border text-foreground");
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::compose::Composition;
use crate::error::{Error, RegistryError};
use crate::options::{OptionRecord, ResolvedOptions};
use crate::schema::VariantSchema;

static GLOBAL: OnceCell<SchemaRegistry> = OnceCell::new();

/// Widget kind to schema, in registration order.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, Arc<VariantSchema>>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `schema` under `kind`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateSchema`] if `kind` is already registered.
    pub fn register(
        &mut self,
        kind: impl Into<String>,
        schema: VariantSchema,
    ) -> Result<(), RegistryError> {
        self.register_shared(kind.into(), Arc::new(schema))
    }

    pub(crate) fn register_shared(
        &mut self,
        kind: String,
        schema: Arc<VariantSchema>,
    ) -> Result<(), RegistryError> {
        if self.schemas.contains_key(&kind) {
            return Err(RegistryError::DuplicateSchema { kind });
        }
        debug!(kind = %kind, axes = schema.len(), "registered schema");
        self.schemas.insert(kind, schema);
        Ok(())
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (String, Arc<VariantSchema>)> {
        self.schemas.into_iter()
    }

    /// Returns the schema registered under `kind`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownKind`] if nothing is registered under `kind`.
    pub fn get(&self, kind: &str) -> Result<&Arc<VariantSchema>, RegistryError> {
        self.schemas
            .get(kind)
            .ok_or_else(|| RegistryError::UnknownKind {
                kind: kind.to_string(),
                available: self.schemas.keys().cloned().collect(),
            })
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.schemas.contains_key(kind)
    }

    /// Registered kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Resolves `options` against the schema for `kind`.
    pub fn resolve(&self, kind: &str, options: &OptionRecord) -> Result<ResolvedOptions, Error> {
        Ok(self.get(kind)?.resolve(options)?)
    }

    /// Resolves and composes `options` against the schema for `kind`.
    pub fn compose<O: AsRef<str>>(
        &self,
        kind: &str,
        options: &OptionRecord,
        overrides: &[O],
    ) -> Result<Composition, Error> {
        Ok(self.get(kind)?.compose(options, overrides)?)
    }
}

/// Installs `registry` as the process-wide registry.
///
/// # Errors
///
/// [`RegistryError::AlreadyInstalled`] if a registry was installed before,
/// or if [`global`] already fell back to the built-in catalog.
pub fn install(registry: SchemaRegistry) -> Result<(), RegistryError> {
    let kinds = registry.len();
    GLOBAL
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInstalled)?;
    debug!(kinds, "installed global schema registry");
    Ok(())
}

/// Returns the process-wide registry.
///
/// The first call without a prior [`install`] builds the built-in catalog.
pub fn global() -> Result<&'static SchemaRegistry, Error> {
    GLOBAL.get_or_try_init(|| {
        debug!("no schema registry installed, using built-in catalog");
        crate::catalog::registry()
    })
}
