//! Curl command parser
//!
//! Turns a tokenized curl command into a [`ParsedRequest`]. Only a command
//! that does not start with `curl` is rejected; every other oddity (unknown
//! flags, malformed headers, data that is not JSON) degrades to a partial
//! result.

use url::form_urlencoded;

use super::cursor::TokenCursor;
use super::flags;
use super::tokenizer::tokenize;
use crate::errors::{CurlexError, Result};
use crate::models::{Auth, Body, KeyValue, Method, ParsedRequest};

/// Mutable state threaded through the flag handlers
#[derive(Debug, Default)]
pub struct ParseState {
    pub request: ParsedRequest,
    /// `--json` was given
    pub json_flag: bool,
    /// `-G` / `--get` was given
    pub get_flag: bool,
    /// `-I` / `--head` was given
    pub head_flag: bool,
}

impl ParseState {
    /// Append request data, joining repeated data with `&`
    ///
    /// The joined content is classified again so two `-d` fragments that
    /// no longer form valid JSON end up as text.
    pub fn push_data(&mut self, data: &str) {
        let body = match self.request.body.take() {
            Some(Body::Form { content }) => Body::Form {
                content: join_data(&content, data),
            },
            Some(existing) => match existing.content() {
                Some(content) => Body::detect(join_data(content, data)),
                None => Body::detect(data),
            },
            None => Body::detect(data),
        };
        self.request.body = Some(body);
    }

    /// Append already URL-encoded form data
    pub fn push_form(&mut self, encoded: &str) {
        let content = match self.request.body.take().as_ref().and_then(Body::content) {
            Some(existing) => join_data(existing, encoded),
            None => encoded.to_string(),
        };
        self.request.body = Some(Body::Form { content });
    }

    /// Record the request URL, splitting off the query string into params
    ///
    /// Only the first URL wins.
    pub fn capture_url(&mut self, raw: &str) {
        if self.request.url.is_some() {
            tracing::debug!(url = raw, "ignoring additional URL");
            return;
        }

        let raw = strip_matching_quotes(raw);
        let (base, query) = match raw.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (raw, None),
        };

        if let Some(query) = query {
            let query = query.split_once('#').map_or(query, |(q, _fragment)| q);
            self.request.params.extend(
                form_urlencoded::parse(query.as_bytes())
                    .map(|(key, value)| KeyValue::new(key, value)),
            );
        }
        self.request.url = Some(base.to_string());
    }

    /// Apply the post-pass rules and hand back the request
    fn finish(mut self) -> ParsedRequest {
        if self.get_flag {
            self.move_data_to_query();
        }

        if self.request.method.is_none() {
            if self.head_flag {
                self.request.method = Some(Method::Head);
            } else if self.request.body.is_some() {
                self.request.method = Some(Method::Post);
            }
        }

        if self.json_flag {
            for (name, value) in [("Content-Type", "application/json"), ("Accept", "application/json")] {
                let present = self.request.headers.iter().any(|h| h.key.eq_ignore_ascii_case(name));
                if !present {
                    self.request.headers.push(KeyValue::new(name, value));
                }
            }
        }

        promote_bearer(&mut self.request);
        self.request
    }

    fn move_data_to_query(&mut self) {
        if let Some(content) = self.request.body.take().as_ref().and_then(Body::content) {
            self.request.params.extend(
                form_urlencoded::parse(content.as_bytes())
                    .map(|(key, value)| KeyValue::new(key, value)),
            );
        }
    }
}

/// Parse a curl command line into a partial request
///
/// # Errors
///
/// [`CurlexError::NotCurl`] when the first word is not `curl`.
pub fn parse_curl(command: &str) -> Result<ParsedRequest> {
    let tokens = tokenize(command.trim());
    match tokens.first() {
        Some(first) if first == "curl" => {}
        _ => return Err(CurlexError::NotCurl),
    }

    let mut state = ParseState::default();
    let mut cursor = TokenCursor::new(&tokens[1..]);

    while let Some(token) = cursor.next_token() {
        if token.starts_with('-') {
            apply_flag(&mut state, token, &mut cursor);
        } else if state.request.url.is_none() && looks_like_url(token) {
            state.capture_url(token);
        } else {
            tracing::debug!(token, "ignoring stray argument");
        }
    }

    Ok(state.finish())
}

/// Dispatch one flag-shaped token through the registry
fn apply_flag(state: &mut ParseState, token: &str, cursor: &mut TokenCursor<'_>) {
    if let Some(spec) = flags::lookup(token) {
        if !spec.takes_value {
            (spec.handler)(state, "");
        } else if let Some(value) = cursor.next_argument() {
            (spec.handler)(state, value);
        } else {
            tracing::debug!(flag = spec.name(), "flag is missing its argument");
        }
        return;
    }

    // --flag=value
    if let Some((name, value)) = token.strip_prefix("--").and_then(|_| token.split_once('=')) {
        if let Some(spec) = flags::lookup(name).filter(|spec| spec.takes_value) {
            (spec.handler)(state, value);
            return;
        }
    }

    // -XPOST, -HAccept:*/*
    if !token.starts_with("--") {
        if let Some(spec) = token.get(..2).and_then(flags::lookup).filter(|spec| spec.takes_value) {
            (spec.handler)(state, &token[2..]);
            return;
        }
    }

    tracing::debug!(flag = token, "ignoring unknown flag");
}

/// Heuristic for the bare URL argument
fn looks_like_url(token: &str) -> bool {
    token.contains("://") || token.contains("localhost")
}

fn strip_matching_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

fn join_data(existing: &str, data: &str) -> String {
    format!("{}&{}", existing, data)
}

/// Turn an `Authorization: Bearer …` header into first-class auth
///
/// `Authorization: Basic …` headers are left alone.
fn promote_bearer(request: &mut ParsedRequest) {
    const PREFIX: &str = "Bearer ";

    let is_bearer =
        |h: &KeyValue| h.key.eq_ignore_ascii_case("authorization") && h.value.starts_with(PREFIX);

    let Some(token) = request
        .headers
        .iter()
        .find(|h| is_bearer(*h))
        .map(|h| h.value[PREFIX.len()..].to_string())
    else {
        return;
    };

    request.headers.retain(|h| !is_bearer(h));
    tracing::debug!("promoted Authorization header to bearer auth");
    request.auth = Some(Auth::bearer(token));
}
