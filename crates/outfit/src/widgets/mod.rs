//! Typed widget front-ends.
//!
//! Each widget pairs a props struct (what a caller writes) with a layout
//! (what a presentation layer draws). Layouts are planned against a
//! [`SchemaRegistry`], so swapping the registry for a stylesheet-backed one
//! restyles every widget without touching this module.
//!
//! Planning is pure: the same props and registry always give the same layout.

/// Declares a closed set of axis values as an enum.
///
/// Generates `as_str`, `ALL`, `Display`, `FromStr` (failing with
/// [`Error::UnsupportedValue`](crate::Error::UnsupportedValue)) and a
/// `Serialize` impl writing the value name.
macro_rules! axis_enum {
    (
        $(#[$meta:meta])*
        $name:ident, axis = $axis:literal {
            $( $(#[$variant_meta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
        default = $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl $name {
            /// Axis this enum selects values for.
            pub const AXIS: &'static str = $axis;

            /// Every value in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The value name used in schemas.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                match value {
                    $($value => Ok($name::$variant),)+
                    other => Err($crate::Error::UnsupportedValue {
                        axis: $axis.to_string(),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

mod button;
mod card;
mod list;
mod quote;
mod simple;

pub use button::{ButtonLayout, ButtonProps, ButtonSize, ButtonVariant};
pub use card::{
    ActionLayout, CardLayout, CardProps, HeadingLevel, Image, ImagePosition, Media,
    DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH,
};
pub use list::{ListItemLayout, NumberedListLayout, NumberedListProps};
pub use quote::{Attribution, QuoteLayout, QuoteProps};
pub use simple::{AlertProps, AlertVariant, BadgeProps, BadgeVariant, InputProps, SkeletonProps};

use crate::error::Result;
use crate::registry::SchemaRegistry;

/// A widget whose layout is planned from a schema registry.
pub trait Widget {
    /// Registry kind holding this widget's schema.
    const KIND: &'static str;

    /// What planning produces.
    type Layout;

    /// Plans the layout against `registry`.
    fn layout(&self, registry: &SchemaRegistry) -> Result<Self::Layout>;
}

/// Caller classes as an override list.
fn overrides(class: Option<&str>) -> Vec<&str> {
    class.into_iter().collect()
}

