//! YAML stylesheets.
//!
//! A stylesheet declares schemas as data, one top-level key per widget kind:
//!
//! ```yaml
//! button:
//!   base: "inline-flex items-center justify-center"
//!   axes:
//!     variant:
//!       default: default
//!       values:
//!         default: "bg-primary text-primary-foreground"
//!         destructive: [bg-destructive, text-destructive-foreground]
//!     size:
//!       default: default
//!       values:
//!         default: "h-10 px-4 py-2"
//!         sm: "h-9 px-3"
//! card:
//!   axes:
//!     imagePosition:
//!       default: { when_present: image, then: top, otherwise: none }
//!       values: { top: "flex flex-col", bottom: "flex flex-col-reverse", none: "flex flex-col" }
//! ```
//!
//! - Token lists are a whitespace-separated string or a YAML sequence.
//! - `default` is a value name, or a `when_present` / `then` / `otherwise`
//!   mapping that picks a value by whether a named input was supplied.
//! - Kinds, axes and values keep their file order. Declaring any of them
//!   twice is an error, never a silent replacement.
//!
//! Every schema goes through [`VariantSchema::builder`], so a stylesheet is
//! held to the same invariants as schemas built in code.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use tracing::debug;

use crate::error::{RegistryError, SchemaError, StylesheetError};
use crate::registry::SchemaRegistry;
use crate::schema::{AxisDefinition, DefaultValue, VariantSchema};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenList {
    Joined(String),
    Split(Vec<String>),
}

impl TokenList {
    fn into_tokens(self) -> Vec<String> {
        match self {
            TokenList::Joined(joined) => joined.split_whitespace().map(str::to_owned).collect(),
            TokenList::Split(split) => split
                .iter()
                .flat_map(|entry| entry.split_whitespace())
                .map(str::to_owned)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDefault {
    Value(String),
    WhenPresent {
        when_present: String,
        then: String,
        otherwise: String,
    },
}

impl From<RawDefault> for DefaultValue {
    fn from(raw: RawDefault) -> Self {
        match raw {
            RawDefault::Value(value) => DefaultValue::fixed(value),
            RawDefault::WhenPresent {
                when_present,
                then,
                otherwise,
            } => DefaultValue::when_present(when_present, then, otherwise),
        }
    }
}

/// Mapping entries in document order, repeated keys included.
#[derive(Debug)]
struct Entries<V>(Vec<(String, V)>);

impl<V> Default for Entries<V> {
    fn default() -> Self {
        Entries(Vec::new())
    }
}

impl<'de, V> Deserialize<'de> for Entries<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V> Visitor<'de> for EntriesVisitor<V>
        where
            V: Deserialize<'de>,
        {
            type Value = Entries<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Entries::default())
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAxis {
    #[serde(default)]
    default: Option<RawDefault>,
    values: Entries<Option<TokenList>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSchema {
    #[serde(default)]
    base: Option<TokenList>,
    #[serde(default)]
    axes: Entries<RawAxis>,
}

impl RawSchema {
    fn build(self) -> Result<VariantSchema, SchemaError> {
        let mut builder = VariantSchema::builder();
        if let Some(base) = self.base {
            builder = builder.base_tokens(base.into_tokens());
        }
        for (name, raw) in self.axes.0 {
            let mut axis = AxisDefinition::builder(name);
            for (value, tokens) in raw.values.0 {
                let tokens = tokens.map(TokenList::into_tokens).unwrap_or_default();
                axis = axis.value_tokens(value, tokens);
            }
            if let Some(default) = raw.default {
                axis = axis.default_value(default);
            }
            builder = builder.axis(axis);
        }
        builder.build()
    }
}

/// Schemas loaded from a YAML document, in file order.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    schemas: SchemaRegistry,
}

impl Stylesheet {
    /// Parses and validates a stylesheet.
    ///
    /// # Errors
    ///
    /// - [`StylesheetError::Parse`] for malformed YAML or an unexpected shape.
    /// - [`StylesheetError::Schema`] when a kind breaks a schema invariant,
    ///   including an axis or value declared twice.
    /// - [`StylesheetError::Registry`] when a kind is declared twice.
    pub fn from_yaml(source: &str) -> Result<Self, StylesheetError> {
        let raw: Entries<RawSchema> = serde_yaml::from_str(source)?;
        let mut schemas = SchemaRegistry::new();
        for (kind, raw_schema) in raw.0 {
            match raw_schema.build() {
                Ok(schema) => schemas.register(kind, schema)?,
                Err(source) => return Err(StylesheetError::Schema { kind, source }),
            }
        }
        debug!(kinds = schemas.len(), "parsed stylesheet");
        Ok(Self { schemas })
    }

    /// Reads and parses a stylesheet file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StylesheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading stylesheet");
        Self::from_yaml(&source)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.schemas.kinds()
    }

    pub fn get(&self, kind: &str) -> Option<&VariantSchema> {
        self.schemas.get(kind).ok().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Registers every kind into `registry`, in file order.
    ///
    /// Stops at the first kind `registry` already has.
    pub fn register_into(self, registry: &mut SchemaRegistry) -> Result<(), RegistryError> {
        for (kind, schema) in self.schemas.into_entries() {
            registry.register_shared(kind, schema)?;
        }
        Ok(())
    }

    /// A new registry holding exactly this stylesheet's kinds.
    pub fn into_registry(self) -> SchemaRegistry {
        self.schemas
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionRecord;
    use std::io::Write;

    const BUTTON_AND_CARD: &str = r#"
button:
  base: "inline-flex items-center"
  axes:
    variant:
      default: default
      values:
        default: "bg-primary"
        destructive: [bg-destructive, "text-destructive-foreground"]
    size:
      default: sm
      values:
        sm: "h-9 px-3"
        lg: "h-11 px-8"
card:
  axes:
    imagePosition:
      default: { when_present: image, then: top, otherwise: none }
      values: { top: "flex flex-col", bottom: "flex flex-col-reverse", none: "flex flex-col" }
    titleHeadingLevel:
      default: h2
      values:
        h2:
        h3: ""
        h4: []
"#;

    #[test]
    fn test_from_yaml_keeps_file_order() {
        let sheet = Stylesheet::from_yaml(BUTTON_AND_CARD).unwrap();
        assert_eq!(sheet.kinds().collect::<Vec<_>>(), vec!["button", "card"]);

        let button = sheet.get("button").unwrap();
        assert_eq!(button.base(), ["inline-flex", "items-center"]);
        assert_eq!(button.axis_names().collect::<Vec<_>>(), vec!["variant", "size"]);
        assert_eq!(
            button.axis("variant").unwrap().tokens_for("destructive"),
            ["bg-destructive", "text-destructive-foreground"]
        );
    }

    #[test]
    fn test_values_without_tokens() {
        let sheet = Stylesheet::from_yaml(BUTTON_AND_CARD).unwrap();
        let level = sheet.get("card").unwrap().axis("titleHeadingLevel").unwrap();
        assert_eq!(level.allowed_values().collect::<Vec<_>>(), vec!["h2", "h3", "h4"]);
        assert!(level.tokens_for("h3").is_empty());
    }

    #[test]
    fn test_conditional_default() {
        let registry = Stylesheet::from_yaml(BUTTON_AND_CARD)
            .unwrap()
            .into_registry();

        let with_image = registry
            .resolve("card", &OptionRecord::new().input("image"))
            .unwrap();
        assert_eq!(with_image.get("imagePosition"), Some("top"));

        let without_image = registry.resolve("card", &OptionRecord::new()).unwrap();
        assert_eq!(without_image.get("imagePosition"), Some("none"));
    }

    #[test]
    fn test_compose_from_stylesheet() {
        let registry = Stylesheet::from_yaml(BUTTON_AND_CARD)
            .unwrap()
            .into_registry();
        let composed = registry
            .compose(
                "button",
                &OptionRecord::new().set("size", "lg"),
                &["px-4"],
            )
            .unwrap();
        assert_eq!(
            composed.tokens.to_string(),
            "inline-flex items-center bg-primary h-11 px-4"
        );
    }

    #[test]
    fn test_malformed_yaml() {
        let err = Stylesheet::from_yaml("button: [unclosed").unwrap_err();
        assert!(matches!(err, StylesheetError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Stylesheet::from_yaml("button:\n  bases: \"border\"\n").unwrap_err();
        assert!(matches!(err, StylesheetError::Parse(_)));
    }

    #[test]
    fn test_schema_error_names_kind() {
        let source = r#"
badge:
  axes:
    variant:
      default: primary
      values:
        default: "bg-primary"
"#;
        match Stylesheet::from_yaml(source).unwrap_err() {
            StylesheetError::Schema { kind, source } => {
                assert_eq!(kind, "badge");
                assert!(matches!(source, SchemaError::DefaultNotAllowed { .. }));
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_default() {
        let source = "alert:\n  axes:\n    variant:\n      values:\n        default: \"bg-background\"\n";
        let err = Stylesheet::from_yaml(source).unwrap_err();
        assert!(matches!(
            err,
            StylesheetError::Schema {
                source: SchemaError::MissingDefault { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUTTON_AND_CARD.as_bytes()).unwrap();

        let sheet = Stylesheet::from_file(file.path()).unwrap();
        assert_eq!(sheet.len(), 2);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = Stylesheet::from_file(&path).unwrap_err();
        match err {
            StylesheetError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_register_into_detects_collisions() {
        let mut registry = Stylesheet::from_yaml(BUTTON_AND_CARD)
            .unwrap()
            .into_registry();
        let err = Stylesheet::from_yaml(BUTTON_AND_CARD)
            .unwrap()
            .register_into(&mut registry)
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateSchema { ref kind } if kind == "button"));
    }

    #[test]
    fn test_kind_declared_twice() {
        let source = "button:\n  base: \"a\"\nbutton:\n  base: \"b\"\n";
        let err = Stylesheet::from_yaml(source).unwrap_err();
        assert!(matches!(
            err,
            StylesheetError::Registry(RegistryError::DuplicateSchema { ref kind }) if kind == "button"
        ));
    }

    #[test]
    fn test_axis_declared_twice() {
        let source = r#"
chip:
  axes:
    tone:
      default: a
      values: { a: "x" }
    tone:
      default: b
      values: { b: "y" }
"#;
        let err = Stylesheet::from_yaml(source).unwrap_err();
        assert!(matches!(
            err,
            StylesheetError::Schema {
                ref kind,
                source: SchemaError::DuplicateAxis { ref axis },
            } if kind == "chip" && axis == "tone"
        ));
    }

    #[test]
    fn test_value_declared_twice() {
        let source = r#"
chip:
  axes:
    tone:
      default: a
      values:
        a: "x"
        a: "y"
"#;
        let err = Stylesheet::from_yaml(source).unwrap_err();
        assert!(matches!(
            err,
            StylesheetError::Schema {
                source: SchemaError::DuplicateValue { ref axis, ref value },
                ..
            } if axis == "tone" && value == "a"
        ));
    }
}
