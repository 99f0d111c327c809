//! Whitespace tokenizer over one input line.

/// Lazy cursor over the whitespace-delimited tokens of a line.
///
/// The line is never modified. At any point [`Tokens::remainder`] returns the
/// unread suffix verbatim, which is how multi-word names and descriptions
/// keep their inner spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    /// Creates a cursor over `line`, ignoring the line terminator and any
    /// trailing whitespace.
    #[must_use]
    pub fn new(line: &'a str) -> Self {
        Self {
            rest: line.trim_end(),
        }
    }

    /// Returns the unread text without its leading whitespace.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        self.rest.trim_start()
    }

    /// Consumes the cursor, returning the unread text or `None` when nothing
    /// is left.
    #[must_use]
    pub fn into_remainder(self) -> Option<&'a str> {
        Some(self.remainder()).filter(|rest| !rest.is_empty())
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let unread = self.rest.trim_start();
        if unread.is_empty() {
            self.rest = unread;
            return None;
        }
        let end = unread.find(char::is_whitespace).unwrap_or(unread.len());
        let (token, rest) = unread.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::Tokens;

    #[test]
    fn yields_tokens_separated_by_any_whitespace() {
        let tokens: Vec<_> = Tokens::new("l  1\t2 3\n").collect();
        assert_eq!(tokens, vec!["l", "1", "2", "3"]);
    }

    #[test]
    fn remainder_keeps_inner_spacing() {
        let mut tokens = Tokens::new("t 5 write   the report\n");
        assert_eq!(tokens.next(), Some("t"));
        assert_eq!(tokens.next(), Some("5"));
        assert_eq!(tokens.remainder(), "write   the report");
    }

    #[test]
    fn empty_remainder_is_none() {
        let mut tokens = Tokens::new("u   \r\n");
        assert_eq!(tokens.next(), Some("u"));
        assert_eq!(tokens.into_remainder(), None);
    }

    #[test]
    fn blank_line_has_no_tokens() {
        assert_eq!(Tokens::new("   \n").next(), None);
    }
}
