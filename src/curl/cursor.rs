//! Cursor over tokenized curl arguments

/// Forward-only cursor over command tokens
///
/// Flags that take a value pull it with [`TokenCursor::next_argument`],
/// which makes "this flag consumes the next token" explicit at the call
/// site instead of hiding it in index arithmetic.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [String],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [String]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Next token, advancing the cursor
    pub fn next_token(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token.as_str())
    }

    /// Value for a flag that takes an argument
    ///
    /// The following token is consumed unconditionally, even when it looks
    /// like another flag (`-d -x` sends the literal data `-x`, as curl does).
    pub fn next_argument(&mut self) -> Option<&'a str> {
        self.next_token()
    }

    #[cfg(test)]
    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Tokens consumed so far
    #[cfg(test)]
    pub fn position(&self) -> usize {
        self.pos
    }
}
