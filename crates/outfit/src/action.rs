//! Action descriptors.
//!
//! A call-to-action is either an imperative handler or a navigable
//! destination, never both. [`Action`] encodes that as a two-case enum;
//! [`Action::from_parts`] is the boundary where loosely-typed input (an
//! optional handler and an optional href) is checked.

use std::fmt;
use std::sync::Arc;

use crate::error::ActionError;
use crate::policy::LinkTarget;

/// Click handler attached to an action.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// A labelled action: run a handler, or follow a link.
#[derive(Clone)]
pub enum Action {
    Handler { text: String, callback: Callback },
    Link { text: String, href: String },
}

impl Action {
    /// A link action.
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Result<Self, ActionError> {
        let text = non_empty(text.into())?;
        Ok(Action::Link {
            text,
            href: href.into(),
        })
    }

    /// A handler action.
    pub fn handler<F>(text: impl Into<String>, callback: F) -> Result<Self, ActionError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let text = non_empty(text.into())?;
        Ok(Action::Handler {
            text,
            callback: Arc::new(callback),
        })
    }

    /// Builds an action from optional parts, requiring exactly one of
    /// `on_click` and `href`.
    ///
    /// ```rust
    /// use outfit::{Action, ActionError};
    ///
    /// let action = Action::from_parts("Read more", None, Some("/docs".to_string())).unwrap();
    /// assert_eq!(action.href(), Some("/docs"));
    ///
    /// let err = Action::from_parts("Read more", None, None).unwrap_err();
    /// assert_eq!(err, ActionError::Missing { text: "Read more".to_string() });
    /// ```
    pub fn from_parts(
        text: impl Into<String>,
        on_click: Option<Callback>,
        href: Option<String>,
    ) -> Result<Self, ActionError> {
        let text = non_empty(text.into())?;
        match (on_click, href) {
            (Some(_), Some(_)) => Err(ActionError::Ambiguous { text }),
            (None, None) => Err(ActionError::Missing { text }),
            (Some(callback), None) => Ok(Action::Handler { text, callback }),
            (None, Some(href)) => Ok(Action::Link { text, href }),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Action::Handler { text, .. } | Action::Link { text, .. } => text,
        }
    }

    /// The destination of a link action.
    pub fn href(&self) -> Option<&str> {
        match self {
            Action::Link { href, .. } => Some(href),
            Action::Handler { .. } => None,
        }
    }

    /// Anchor attributes for a link action.
    pub fn link_target(&self) -> Option<LinkTarget> {
        self.href().map(LinkTarget::for_href)
    }

    /// Runs the handler. Returns false for link actions.
    pub fn invoke(&self) -> bool {
        match self {
            Action::Handler { callback, .. } => {
                callback();
                true
            }
            Action::Link { .. } => false,
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Handler { text, .. } => f
                .debug_struct("Handler")
                .field("text", text)
                .finish_non_exhaustive(),
            Action::Link { text, href } => f
                .debug_struct("Link")
                .field("text", text)
                .field("href", href)
                .finish(),
        }
    }
}

fn non_empty(text: String) -> Result<String, ActionError> {
    if text.trim().is_empty() {
        Err(ActionError::EmptyText)
    } else {
        Ok(text)
    }
}
