//! Structural policies.
//!
//! Small pure decisions a presentation layer needs beside the class string:
//! whether a link leaves the site, whether a media block is drawn, and which
//! items of a list carry trailing spacing.

use serde::Serialize;

/// The position value that hides a widget's media block.
pub const NONE_POSITION: &str = "none";

/// `rel` attribute given to links that open in a new browsing context.
pub const ISOLATION_REL: &str = "noopener noreferrer";

/// Returns true if `href` points off-site.
///
/// Only absolute `http://`, `https://` and protocol-relative `//` URLs are
/// external. Relative paths, fragments and other schemes (`mailto:`,
/// `tel:`) stay in the current context.
///
/// ```rust
/// use outfit::is_external_destination;
///
/// assert!(is_external_destination("https://example.com"));
/// assert!(is_external_destination("//example.com"));
/// assert!(!is_external_destination("/about"));
/// assert!(!is_external_destination("mailto:hello@example.com"));
/// ```
pub fn is_external_destination(href: &str) -> bool {
    let href = href.trim_start();
    if href.starts_with("//") {
        return true;
    }
    ["http://", "https://"].iter().any(|scheme| {
        href.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Returns true if a media block should be drawn: media is present and the
/// resolved position is not [`NONE_POSITION`].
pub fn should_render_media<M>(media: Option<&M>, position: &str) -> bool {
    media.is_some() && position != NONE_POSITION
}

/// Spacing decision for one element of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// Followed by trailing spacing.
    Trailing,
    /// No trailing spacing (last element).
    Flush,
}

impl Spacing {
    /// The `list-item` schema's `spacing` value for this decision.
    pub fn as_str(self) -> &'static str {
        match self {
            Spacing::Trailing => "trailing",
            Spacing::Flush => "flush",
        }
    }

    pub fn is_trailing(self) -> bool {
        self == Spacing::Trailing
    }
}

/// Spacing for element `index` of a sequence of `total` elements.
///
/// Every element except the last gets trailing spacing. Indices outside the
/// sequence are flush.
pub fn margin_policy(index: usize, total: usize) -> Spacing {
    if index < total.saturating_sub(1) {
        Spacing::Trailing
    } else {
        Spacing::Flush
    }
}

/// One spacing decision per element; empty for an empty sequence.
///
/// ```rust
/// use outfit::{margin_plan, Spacing};
///
/// assert_eq!(
///     margin_plan(3),
///     vec![Spacing::Trailing, Spacing::Trailing, Spacing::Flush]
/// );
/// assert!(margin_plan(0).is_empty());
/// ```
pub fn margin_plan(total: usize) -> Vec<Spacing> {
    (0..total).map(|index| margin_policy(index, total)).collect()
}

/// Anchor attributes for a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTarget {
    pub href: String,
    /// Open in a new browsing context.
    pub new_context: bool,
    /// `rel` attribute, set only for external destinations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<&'static str>,
}

impl LinkTarget {
    /// Derives anchor attributes from `href`.
    pub fn for_href(href: impl Into<String>) -> Self {
        let href = href.into();
        let external = is_external_destination(&href);
        Self {
            href,
            new_context: external,
            rel: external.then_some(ISOLATION_REL),
        }
    }

    /// `target` attribute, `_blank` for external destinations.
    pub fn target(&self) -> Option<&'static str> {
        self.new_context.then_some("_blank")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn only_last_element_is_flush(total in 1usize..64) {
            let plan = margin_plan(total);
            prop_assert_eq!(plan.len(), total);
            prop_assert_eq!(plan[total - 1], Spacing::Flush);
            prop_assert!(plan[..total - 1].iter().all(|s| s.is_trailing()));
        }

        #[test]
        fn relative_paths_are_internal(path in "/[a-z0-9/_-]{0,24}") {
            prop_assume!(!path.starts_with("//"));
            prop_assert!(!is_external_destination(&path));
        }
    }
}
