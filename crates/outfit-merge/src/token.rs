//! Splitting a utility token into modifiers, importance and the utility itself.

/// A utility token broken into the parts that decide what it can conflict with.
///
/// `hover:!-mt-2` parses into modifiers `["hover"]`, `important = true`,
/// `negative = true` and utility `mt-2`.
///
/// # Example
///
/// ```rust
/// use outfit_merge::ParsedToken;
///
/// let token = ParsedToken::parse("[&>svg]:hover:text-destructive");
/// assert_eq!(token.modifiers, vec!["[&>svg]", "hover"]);
/// assert_eq!(token.utility, "text-destructive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken<'a> {
    /// The token exactly as written.
    pub raw: &'a str,
    /// Variant prefixes (`hover`, `sm`, `[&>svg]`), in source order.
    pub modifiers: Vec<&'a str>,
    /// Whether the token carries the `!` important marker.
    pub important: bool,
    /// Whether the utility was written with a leading `-`.
    pub negative: bool,
    /// The utility with modifiers and markers removed.
    pub utility: &'a str,
}

impl<'a> ParsedToken<'a> {
    /// Parses a single token.
    ///
    /// Colons inside `[...]` or `(...)` belong to arbitrary values and never
    /// split modifiers.
    pub fn parse(raw: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;

        for (i, c) in raw.char_indices() {
            match c {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&raw[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }

        let mut utility = &raw[start..];
        let mut important = false;
        if let Some(rest) = utility.strip_prefix('!') {
            important = true;
            utility = rest;
        } else if let Some(rest) = utility.strip_suffix('!') {
            important = true;
            utility = rest;
        }

        let mut negative = false;
        if let Some(rest) = utility.strip_prefix('-') {
            negative = true;
            utility = rest;
        }

        Self {
            raw,
            modifiers,
            important,
            negative,
            utility,
        }
    }

    /// Returns the key shared by every token that competes in the same scope.
    ///
    /// Plain modifiers are order-insensitive (`hover:focus:` equals
    /// `focus:hover:`). Arbitrary modifiers such as `[&>svg]` keep their
    /// position, since moving them changes the selector.
    pub fn scope_key(&self) -> String {
        let mut ordered: Vec<&str> = Vec::with_capacity(self.modifiers.len());
        let mut run: Vec<&str> = Vec::new();

        for modifier in &self.modifiers {
            if modifier.starts_with('[') {
                run.sort_unstable();
                ordered.append(&mut run);
                ordered.push(modifier);
            } else {
                run.push(modifier);
            }
        }
        run.sort_unstable();
        ordered.append(&mut run);

        let mut key = ordered.join(":");
        if self.important {
            key.push('!');
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_utility() {
        let token = ParsedToken::parse("px-4");
        assert!(token.modifiers.is_empty());
        assert!(!token.important);
        assert!(!token.negative);
        assert_eq!(token.utility, "px-4");
    }

    #[test]
    fn test_parse_modifiers() {
        let token = ParsedToken::parse("dark:hover:bg-primary/90");
        assert_eq!(token.modifiers, vec!["dark", "hover"]);
        assert_eq!(token.utility, "bg-primary/90");
    }

    #[test]
    fn test_parse_colon_inside_arbitrary_value() {
        let token = ParsedToken::parse("font-[family-name:var(--font-geist-mono)]");
        assert!(token.modifiers.is_empty());
        assert_eq!(token.utility, "font-[family-name:var(--font-geist-mono)]");
    }

    #[test]
    fn test_parse_arbitrary_modifier() {
        let token = ParsedToken::parse("[&>svg+div]:translate-y-[-3px]");
        assert_eq!(token.modifiers, vec!["[&>svg+div]"]);
        assert_eq!(token.utility, "translate-y-[-3px]");
        assert!(!token.negative);
    }

    #[test]
    fn test_parse_important_prefix_and_suffix() {
        let prefix = ParsedToken::parse("!p-2");
        assert!(prefix.important);
        assert_eq!(prefix.utility, "p-2");

        let suffix = ParsedToken::parse("sm:p-2!");
        assert!(suffix.important);
        assert_eq!(suffix.utility, "p-2");
    }

    #[test]
    fn test_parse_negative() {
        let token = ParsedToken::parse("hover:-mt-2");
        assert!(token.negative);
        assert_eq!(token.utility, "mt-2");
    }

    #[test]
    fn test_scope_key_sorts_plain_modifiers() {
        let a = ParsedToken::parse("hover:focus:p-2");
        let b = ParsedToken::parse("focus:hover:p-4");
        assert_eq!(a.scope_key(), b.scope_key());
    }

    #[test]
    fn test_scope_key_keeps_arbitrary_position() {
        let a = ParsedToken::parse("[&>svg]:hover:p-2");
        let b = ParsedToken::parse("hover:[&>svg]:p-2");
        assert_ne!(a.scope_key(), b.scope_key());
    }

    #[test]
    fn test_scope_key_distinguishes_important() {
        let a = ParsedToken::parse("p-2");
        let b = ParsedToken::parse("!p-2");
        assert_ne!(a.scope_key(), b.scope_key());
        assert_eq!(a.scope_key(), "");
    }
}
