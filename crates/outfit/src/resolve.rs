//! Resolution of partial option records.

use indexmap::IndexMap;
use tracing::trace;

use crate::error::ResolveError;
use crate::options::{OptionRecord, ResolvedOptions};
use crate::schema::{DefaultContext, VariantSchema};

/// Fills in every axis of `schema` from a partial option record.
///
/// For each axis, in declaration order:
///
/// 1. A value the caller selected must be one of the axis' values, otherwise
///    [`ResolveError::InvalidOptionValue`].
/// 2. An unset axis takes its default. Derived defaults see the caller's
///    record and every axis resolved before this one; a derived value outside
///    the axis fails with [`ResolveError::InvalidDerivedDefault`].
///
/// Selections naming an axis the schema doesn't declare fail with
/// [`ResolveError::UnknownAxis`] before anything is resolved.
///
/// Resolution has no hidden state: the same schema and record always give
/// the same result.
///
/// # Example
///
/// ```rust
/// use outfit::{resolve, AxisDefinition, DefaultValue, OptionRecord, VariantSchema};
///
/// let card = VariantSchema::builder()
///     .axis(
///         AxisDefinition::builder("imagePosition")
///             .value("top", "flex flex-col")
///             .value("bottom", "flex flex-col-reverse")
///             .value("none", "flex flex-col")
///             .default_value(DefaultValue::when_present("image", "top", "none")),
///     )
///     .build()
///     .unwrap();
///
/// let with_image = resolve(&card, &OptionRecord::new().input("image")).unwrap();
/// assert_eq!(with_image.get("imagePosition"), Some("top"));
///
/// let without_image = resolve(&card, &OptionRecord::new()).unwrap();
/// assert_eq!(without_image.get("imagePosition"), Some("none"));
/// ```
pub fn resolve(
    schema: &VariantSchema,
    options: &OptionRecord,
) -> Result<ResolvedOptions, ResolveError> {
    if let Some((axis, _)) = options
        .selections()
        .find(|(axis, _)| schema.axis(axis).is_none())
    {
        return Err(ResolveError::UnknownAxis {
            axis: axis.to_string(),
            available: schema.axis_names().map(str::to_owned).collect(),
        });
    }

    let mut values: IndexMap<String, String> = IndexMap::with_capacity(schema.len());

    for axis in schema.axes() {
        let value = match options.get(axis.name()) {
            Some(selected) => {
                if !axis.is_allowed(selected) {
                    return Err(ResolveError::InvalidOptionValue {
                        axis: axis.name().to_string(),
                        value: selected.to_string(),
                        allowed: axis.allowed_list(),
                    });
                }
                selected.to_string()
            }
            None => {
                let derived = axis
                    .default_value()
                    .evaluate(&DefaultContext::new(options, &values));
                if !axis.is_allowed(&derived) {
                    return Err(ResolveError::InvalidDerivedDefault {
                        axis: axis.name().to_string(),
                        value: derived,
                    });
                }
                derived
            }
        };
        trace!(axis = axis.name(), value = %value, "resolved axis");
        values.insert(axis.name().to_string(), value);
    }

    Ok(ResolvedOptions::from_values(values))
}
