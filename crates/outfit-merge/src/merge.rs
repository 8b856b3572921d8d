//! Conflict-aware merging.

use std::collections::HashSet;

use tracing::trace;

use crate::family::{classify, conflicting_groups, Family};
use crate::token::ParsedToken;

/// Merges class lists, keeping the last token of every utility family.
///
/// Each source may hold several whitespace-separated tokens. Sources are
/// read left to right; when two tokens set the same property under the same
/// modifiers, the earlier one is dropped. Unrelated tokens are all kept, in
/// their original relative order. Unrecognized tokens only collide with
/// exact duplicates of themselves.
///
/// # Example
///
/// ```rust
/// use outfit_merge::merge_tokens;
///
/// let merged = merge_tokens(["px-2 py-1 bg-red-500", "hover:bg-red-600", "p-3 bg-blue-500"]);
/// assert_eq!(merged, vec!["hover:bg-red-600", "p-3", "bg-blue-500"]);
/// ```
pub fn merge_tokens<I, S>(sources: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sources: Vec<S> = sources.into_iter().collect();
    let tokens: Vec<&str> = sources
        .iter()
        .flat_map(|source| source.as_ref().split_whitespace())
        .collect();

    let mut claimed: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    // Walk backwards so the first token seen for a family is the winner.
    for token in tokens.iter().rev() {
        let parsed = ParsedToken::parse(token);
        let scope = parsed.scope_key();
        let family = classify(parsed.utility);

        let key = match family {
            Some(family) => format!("{}|{}", scope, family),
            None => format!("{}|={}{}", scope, sign(&parsed), parsed.utility),
        };

        if claimed.contains(&key) {
            trace!(token = %token, key = %key, "dropping overridden token");
            continue;
        }

        if let Some(Family::Group(group)) = family {
            for displaced in conflicting_groups(group) {
                claimed.insert(format!("{}|{}", scope, displaced));
            }
        }
        claimed.insert(key);
        kept.push(token);
    }

    kept.reverse();
    kept.into_iter().map(str::to_owned).collect()
}

/// Merges class lists into a single space-separated class string.
///
/// ```rust
/// use outfit_merge::merge_classes;
///
/// assert_eq!(
///     merge_classes(&["border-l-4 pl-4 italic", "pl-6 not-italic"]),
///     "border-l-4 pl-6 not-italic"
/// );
/// ```
pub fn merge_classes(sources: &[&str]) -> String {
    merge_tokens(sources).join(" ")
}

fn sign(parsed: &ParsedToken<'_>) -> &'static str {
    if parsed.negative {
        "-"
    } else {
        ""
    }
}
