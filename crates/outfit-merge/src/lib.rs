//! # outfit-merge - Conflict-aware utility class merging
//!
//! Utility-first CSS builds an element's look out of small single-purpose
//! classes (`px-4`, `bg-primary`, `hover:underline`). When a component's
//! own classes are combined with a caller's, two classes often set the same
//! property and the stylesheet, not the markup, decides which one wins.
//! This crate removes that ambiguity: the later class wins and the earlier
//! one is dropped.
//!
//! ## Example
//!
//! ```rust
//! use outfit_merge::merge_tokens;
//!
//! let base = "inline-flex h-10 px-4 py-2 bg-primary";
//! let size = "h-9 px-3";
//! let caller = "bg-destructive";
//!
//! let merged = merge_tokens([base, size, caller]);
//! assert_eq!(merged, vec!["inline-flex", "py-2", "h-9", "px-3", "bg-destructive"]);
//! ```
//!
//! ## Rules
//!
//! - A token is `modifiers:` + optional `!` + optional `-` + utility.
//! - Two tokens conflict when they share modifiers, importance and
//!   [`Family`].
//! - Shorthand families displace their longhands (`p-*` over `px-*`), see
//!   [`conflicting_groups`].
//! - Tokens no rule recognizes only conflict with exact duplicates.

mod family;
mod merge;
mod token;

pub use family::{classify, conflicting_groups, Family};
pub use merge::{merge_classes, merge_tokens};
pub use token::ParsedToken;
