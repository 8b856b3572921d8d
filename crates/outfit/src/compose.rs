//! Token composition: base, per-axis and override tokens merged by family.

use std::fmt;

use outfit_merge::merge_tokens;
use serde::Serialize;

use crate::error::ResolveError;
use crate::options::{OptionRecord, ResolvedOptions};
use crate::schema::VariantSchema;

/// An ordered list of style tokens with no two tokens from the same family.
///
/// Displays as the space-joined class string and serializes as that string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `token` survived the merge.
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl Serialize for TokenSequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl IntoIterator for TokenSequence {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        TokenSequence(merge_tokens(tokens))
    }
}

/// Merges base tokens, the tokens of each resolved axis value, and caller
/// overrides, in that order of increasing precedence.
///
/// Axis tokens follow the schema's declaration order. Axes missing from
/// `resolved` contribute nothing. Conflicting tokens are resolved by utility
/// family with the later token winning; see [`outfit_merge::merge_tokens`].
///
/// # Example
///
/// ```rust
/// use outfit::{merge, AxisDefinition, OptionRecord, VariantSchema};
///
/// let schema = VariantSchema::builder()
///     .axis(
///         AxisDefinition::builder("variant")
///             .value("default", "bg-a")
///             .value("destructive", "bg-b")
///             .default_value("default"),
///     )
///     .build()
///     .unwrap();
/// let resolved = schema.resolve(&OptionRecord::new()).unwrap();
///
/// let tokens = merge(&["border"], &resolved, &schema, &["bg-c"]);
/// assert_eq!(tokens.to_string(), "border bg-c");
/// ```
pub fn merge<B, O>(
    base: &[B],
    resolved: &ResolvedOptions,
    schema: &VariantSchema,
    overrides: &[O],
) -> TokenSequence
where
    B: AsRef<str>,
    O: AsRef<str>,
{
    let base = base.iter().map(|t| t.as_ref());
    let axis_tokens = schema.axes().flat_map(|axis| {
        resolved
            .get(axis.name())
            .map(|value| axis.tokens_for(value))
            .unwrap_or(&[])
            .iter()
            .map(String::as_str)
    });
    let overrides = overrides.iter().map(|t| t.as_ref());

    TokenSequence(merge_tokens(base.chain(axis_tokens).chain(overrides)))
}

/// The outcome of composing one widget invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Composition {
    /// Every axis with its concrete value.
    pub options: ResolvedOptions,
    /// Merged class tokens.
    pub tokens: TokenSequence,
}

impl VariantSchema {
    /// Resolves `options`, then merges this schema's base tokens, the axis
    /// tokens and `overrides`.
    pub fn compose<O: AsRef<str>>(
        &self,
        options: &OptionRecord,
        overrides: &[O],
    ) -> Result<Composition, ResolveError> {
        let resolved = self.resolve(options)?;
        let tokens = merge(self.base(), &resolved, self, overrides);
        Ok(Composition {
            options: resolved,
            tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AxisDefinition, DefaultValue};

    const NO_OVERRIDES: &[&str] = &[];

    fn button_schema() -> VariantSchema {
        VariantSchema::builder()
            .axis(
                AxisDefinition::builder("variant")
                    .value("default", "bg-a")
                    .value("destructive", "bg-b")
                    .default_value("default"),
            )
            .axis(
                AxisDefinition::builder("size")
                    .value("sm", "h-9")
                    .value("lg", "h-11")
                    .default_value("sm"),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_merge_end_to_end() {
        let schema = button_schema();
        let resolved = schema
            .resolve(&OptionRecord::new().set("variant", "destructive"))
            .unwrap();
        assert_eq!(
            resolved.iter().collect::<Vec<_>>(),
            vec![("variant", "destructive"), ("size", "sm")]
        );

        let tokens = merge(&["border"], &resolved, &schema, NO_OVERRIDES);
        assert_eq!(tokens.as_slice(), ["border", "bg-b", "h-9"]);
    }

    #[test]
    fn test_override_wins_over_axis_token() {
        let schema = button_schema();
        let resolved = schema.resolve(&OptionRecord::new()).unwrap();
        let tokens = merge(&["border"], &resolved, &schema, &["h-12", "shadow"]);
        assert_eq!(tokens.as_slice(), ["border", "bg-a", "h-12", "shadow"]);
        assert!(!tokens.contains("h-9"));
    }

    #[test]
    fn test_axis_tokens_follow_declaration_order() {
        let schema = VariantSchema::builder()
            .axis(
                AxisDefinition::builder("tone")
                    .value("muted", "text-muted-foreground")
                    .default_value("muted"),
            )
            .axis(
                AxisDefinition::builder("emphasis")
                    .value("strong", "font-semibold text-foreground")
                    .default_value("strong"),
            )
            .build()
            .unwrap();
        let resolved = schema.resolve(&OptionRecord::new()).unwrap();
        let tokens = merge(NO_OVERRIDES, &resolved, &schema, NO_OVERRIDES);
        assert_eq!(tokens.to_string(), "font-semibold text-foreground");
    }

    #[test]
    fn test_value_without_tokens_contributes_nothing() {
        let schema = VariantSchema::builder()
            .base("text-lg")
            .axis(
                AxisDefinition::builder("level")
                    .value("h2", "")
                    .value("h3", "")
                    .default_value("h2"),
            )
            .build()
            .unwrap();
        let composed = schema.compose(&OptionRecord::new(), NO_OVERRIDES).unwrap();
        assert_eq!(composed.tokens.as_slice(), ["text-lg"]);
    }

    #[test]
    fn test_compose_uses_schema_base() {
        let schema = VariantSchema::builder()
            .base("rounded-lg border shadow-sm")
            .axis(
                AxisDefinition::builder("imagePosition")
                    .value("top", "flex flex-col")
                    .value("bottom", "flex flex-col-reverse")
                    .value("none", "flex flex-col")
                    .default_value(DefaultValue::when_present("image", "top", "none")),
            )
            .build()
            .unwrap();

        let composed = schema
            .compose(
                &OptionRecord::new().input("image").set("imagePosition", "bottom"),
                &["shadow-lg"],
            )
            .unwrap();
        assert_eq!(composed.options.get("imagePosition"), Some("bottom"));
        assert_eq!(
            composed.tokens.to_string(),
            "rounded-lg border flex flex-col-reverse shadow-lg"
        );
    }

    #[test]
    fn test_compose_propagates_resolve_errors() {
        let err = button_schema()
            .compose(&OptionRecord::new().set("size", "xl"), NO_OVERRIDES)
            .unwrap_err();
        assert!(matches!(err, ResolveError::InvalidOptionValue { .. }));
    }

    #[test]
    fn test_composition_serializes() {
        let composed = button_schema()
            .compose(&OptionRecord::new().set("size", "lg"), &["bg-c"])
            .unwrap();
        insta::assert_json_snapshot!(composed, @r#"
        {
          "options": {
            "variant": "default",
            "size": "lg"
          },
          "tokens": "h-11 bg-c"
        }
        "#);
    }

    #[test]
    fn test_token_sequence_from_vec_merges() {
        let tokens = TokenSequence::from(vec!["p-2".to_string(), "p-4".to_string()]);
        assert_eq!(tokens.into_vec(), vec!["p-4".to_string()]);
    }
}
