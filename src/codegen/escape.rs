//! String literal escaping for the target languages
//!
//! Emitters are string templates, so every value that lands inside a
//! literal goes through one of these helpers first.

use serde_json::Value;

/// Shell-escape a string for safe inclusion in a command
pub fn shell_quote(s: &str) -> String {
    let needs_escaping = s.is_empty()
        || s.chars().any(|c| {
            matches!(c, ' ' | '\'' | '"' | '\\' | '$' | '`' | '!' | '*' | '?' |
                        '[' | ']' | '{' | '}' | '(' | ')' | '<' | '>' | '|' |
                        '&' | ';' | '#' | '~')
                || c.is_whitespace()
        });

    if !needs_escaping {
        return s.to_string();
    }

    // Close the quote, emit a double-quoted ', reopen
    format!("'{}'", s.replace('\'', "'\"'\"'"))
}

/// Body of a C-style double-quoted literal (Java, C#, Go, Python, JSON-ish)
pub fn double_quoted(s: &str) -> String {
    escape_with(s, '"')
}

/// Body of a JavaScript single-quoted literal
pub fn js_single_quoted(s: &str) -> String {
    escape_with(s, '\'')
}

/// Body of a PHP or Ruby single-quoted literal
///
/// Only the quote and backslash are special; newlines stay literal.
pub fn plain_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

fn escape_with(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Complete Rust string literal
pub fn rust_string(s: &str) -> String {
    format!("{:?}", s)
}

/// Complete Rust raw string literal with enough `#`s to hold `s`
pub fn rust_raw_string(s: &str) -> String {
    let mut hashes = 0;
    let mut run: Option<usize> = None;
    for c in s.chars() {
        run = match (c, run) {
            ('"', _) => Some(0),
            ('#', Some(n)) => Some(n + 1),
            _ => None,
        };
        if let Some(n) = run {
            hashes = hashes.max(n + 1);
        }
    }
    let fence = "#".repeat(hashes.max(1));
    format!("r{fence}\"{s}\"{fence}")
}

/// Complete Go string literal, raw (backticks) when possible
pub fn go_string(s: &str) -> String {
    if s.contains('`') || s.contains('\r') {
        format!("\"{}\"", double_quoted(s))
    } else {
        format!("`{}`", s)
    }
}

/// Render a JSON value as a Python literal
///
/// `null`, `true` and `false` become `None`, `True` and `False`; strings
/// use double quotes. Nested containers are indented by four spaces
/// starting from `indent`.
pub fn python_literal(value: &Value, indent: usize) -> String {
    let pad = " ".repeat(indent + 4);
    let close = " ".repeat(indent);
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", double_quoted(s)),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let mut out = String::from("[\n");
            for item in items {
                out.push_str(&format!("{}{},\n", pad, python_literal(item, indent + 4)));
            }
            out.push_str(&format!("{}]", close));
            out
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let mut out = String::from("{\n");
            for (key, item) in map {
                out.push_str(&format!(
                    "{}\"{}\": {},\n",
                    pad,
                    double_quoted(key),
                    python_literal(item, indent + 4)
                ));
            }
            out.push_str(&format!("{}}}", close));
            out
        }
    }
}

/// Indent every line after the first by `prefix`
///
/// Used to nest a multi-line literal (pretty JSON) inside generated code.
pub fn indent_continuation(text: &str, prefix: &str) -> String {
    text.lines().collect::<Vec<_>>().join(&format!("\n{}", prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shell_quote_simple() {
        assert_eq!(shell_quote("hello"), "hello");
        assert_eq!(shell_quote("hello world"), "'hello world'");
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn test_shell_quote_quotes() {
        assert_eq!(shell_quote("it's"), "'it'\"'\"'s'");
    }

    #[test]
    fn test_shell_quote_special_chars() {
        assert_eq!(shell_quote("$HOME"), "'$HOME'");
        assert_eq!(shell_quote("a & b"), "'a & b'");
        assert_eq!(shell_quote("http://x/y?a=1"), "'http://x/y?a=1'");
    }

    #[test]
    fn test_shell_quote_unicode_whitespace() {
        for s in ["a\u{a0}b", "a\x0bb", "a\x0cb"] {
            let quoted = shell_quote(s);
            assert_eq!(quoted, format!("'{}'", s));
            assert_eq!(crate::curl::tokenize(&quoted), vec![s.to_string()]);
        }
    }

    #[test]
    fn test_double_quoted() {
        assert_eq!(double_quoted("say \"hi\"\n"), "say \\\"hi\\\"\\n");
        assert_eq!(double_quoted("a\\b"), "a\\\\b");
        assert_eq!(double_quoted("it's"), "it's");
        assert_eq!(double_quoted("\u{1}"), "\\u0001");
    }

    #[test]
    fn test_js_single_quoted() {
        assert_eq!(js_single_quoted("it's"), "it\\'s");
        assert_eq!(js_single_quoted("\"x\""), "\"x\"");
    }

    #[test]
    fn test_plain_single_quoted() {
        assert_eq!(plain_single_quoted("it's a\\b"), "it\\'s a\\\\b");
        assert_eq!(plain_single_quoted("line\nbreak"), "line\nbreak");
    }

    #[test]
    fn test_rust_strings() {
        assert_eq!(rust_string("a\"b"), "\"a\\\"b\"");
        assert_eq!(rust_raw_string("{\"a\":1}"), "r#\"{\"a\":1}\"#");
        assert_eq!(rust_raw_string("x\"#y"), "r##\"x\"#y\"##");
    }

    #[test]
    fn test_go_string() {
        assert_eq!(go_string("{\"a\":1}"), "`{\"a\":1}`");
        assert_eq!(go_string("a`b"), "\"a`b\"");
    }

    #[test]
    fn test_python_literal() {
        let value = json!({"name": "John", "tags": [], "admin": false, "meta": null, "n": [1, true]});
        let expected = "{\n    \"name\": \"John\",\n    \"tags\": [],\n    \"admin\": False,\n    \"meta\": None,\n    \"n\": [\n        1,\n        True,\n    ],\n}";
        assert_eq!(python_literal(&value, 0), expected);
    }

    #[test]
    fn test_indent_continuation() {
        assert_eq!(indent_continuation("{\n  \"a\": 1\n}", "  "), "{\n    \"a\": 1\n  }");
    }
}
