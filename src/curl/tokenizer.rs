//! Shell-word tokenizer for curl command lines
//!
//! Resolves single quotes, double quotes and backslash escapes the way a
//! POSIX shell would for the simple cases found in copied curl commands.
//! There is no variable expansion, globbing or command substitution.

/// Split a command line into shell words
///
/// Never fails. An unterminated quote absorbs the rest of the input into
/// the current token.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut escaped = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if escaped {
            escaped = false;
            // Line continuation
            if c == '\n' {
                continue;
            }
            if c == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
                continue;
            }
            current.push(c);
            continue;
        }

        match c {
            '\\' if !in_single_quote => {
                escaped = true;
            }
            '\'' if !in_double_quote => {
                in_single_quote = !in_single_quote;
            }
            '"' if !in_single_quote => {
                in_double_quote = !in_double_quote;
            }
            c if c.is_whitespace() && !in_single_quote && !in_double_quote => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => {
                current.push(c);
            }
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    if in_single_quote || in_double_quote {
        tracing::debug!(tokens = tokens.len(), "unterminated quote absorbed into last token");
    }
    tracing::trace!(tokens = tokens.len(), "tokenized command");

    tokens
}
