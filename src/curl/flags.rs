//! Curl flag registry
//!
//! Every flag the importer understands is one [`FlagSpec`] entry: its
//! spellings, whether it consumes an argument, and the handler applied to
//! the parse state. Flags missing from the table are ignored by the parser
//! without consuming anything.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::parser::ParseState;
use crate::models::{Auth, KeyValue, Method};

/// Handler invoked with the flag's argument (empty for boolean flags)
pub type FlagHandler = fn(&mut ParseState, &str);

/// One registered curl flag
#[derive(Debug)]
pub struct FlagSpec {
    /// All spellings, short and long
    pub names: &'static [&'static str],
    /// Whether the flag consumes the following token
    pub takes_value: bool,
    pub handler: FlagHandler,
}

impl FlagSpec {
    /// Canonical (first) spelling
    pub fn name(&self) -> &'static str {
        self.names[0]
    }
}

static FLAGS: &[FlagSpec] = &[
    FlagSpec { names: &["-X", "--request"], takes_value: true, handler: request_method },
    FlagSpec { names: &["-H", "--header"], takes_value: true, handler: header },
    FlagSpec {
        names: &["-d", "--data", "--data-raw", "--data-binary", "--data-ascii"],
        takes_value: true,
        handler: data,
    },
    FlagSpec { names: &["--data-urlencode"], takes_value: true, handler: data_urlencode },
    FlagSpec { names: &["--json"], takes_value: true, handler: json },
    FlagSpec { names: &["-u", "--user"], takes_value: true, handler: user },
    FlagSpec { names: &["--oauth2-bearer"], takes_value: true, handler: oauth2_bearer },
    FlagSpec { names: &["-A", "--user-agent"], takes_value: true, handler: user_agent },
    FlagSpec { names: &["-e", "--referer"], takes_value: true, handler: referer },
    FlagSpec { names: &["--url"], takes_value: true, handler: url },
    FlagSpec { names: &["-I", "--head"], takes_value: false, handler: head },
    FlagSpec { names: &["-G", "--get"], takes_value: false, handler: get },
    // Flags outside the request model. Their argument is swallowed so a
    // file name or proxy address is never mistaken for the request URL.
    FlagSpec {
        names: &[
            "-o", "--output", "-m", "--max-time", "--connect-timeout", "-x", "--proxy",
            "-U", "--proxy-user", "--cacert", "--capath", "-E", "--cert", "--key",
            "--cert-type", "--key-type", "-w", "--write-out", "--max-redirs", "--retry",
            "--retry-delay", "--retry-max-time", "-b", "--cookie", "-c", "--cookie-jar",
            "-F", "--form", "--form-string", "-T", "--upload-file", "-r", "--range",
            "-D", "--dump-header", "--resolve", "--connect-to", "--interface",
            "-y", "--speed-time", "-Y", "--speed-limit", "--limit-rate", "-K", "--config",
        ],
        takes_value: true,
        handler: skip,
    },
];

static FLAG_INDEX: Lazy<HashMap<&'static str, &'static FlagSpec>> = Lazy::new(|| {
    FLAGS
        .iter()
        .flat_map(|spec| spec.names.iter().map(move |name| (*name, spec)))
        .collect()
});

/// Look up a flag by any of its spellings
pub fn lookup(flag: &str) -> Option<&'static FlagSpec> {
    FLAG_INDEX.get(flag).copied()
}

/// All registered flags, in table order
#[cfg(test)]
pub fn registered() -> &'static [FlagSpec] {
    FLAGS
}

// =============================================================================
// HANDLERS
// =============================================================================

fn request_method(state: &mut ParseState, value: &str) {
    state.request.method = Some(Method::parse(value));
}

fn header(state: &mut ParseState, value: &str) {
    match parse_header(value) {
        Some((key, value)) => state.request.headers.push(KeyValue::new(key, value)),
        None => tracing::debug!(header = value, "dropping malformed header"),
    }
}

fn data(state: &mut ParseState, value: &str) {
    state.push_data(value);
}

fn data_urlencode(state: &mut ParseState, value: &str) {
    state.push_form(&encode_data_urlencode(value));
}

fn json(state: &mut ParseState, value: &str) {
    state.push_data(value);
    state.json_flag = true;
}

fn user(state: &mut ParseState, value: &str) {
    let (username, password) = value.split_once(':').unwrap_or((value, ""));
    state.request.auth = Some(Auth::basic(username, password));
}

fn oauth2_bearer(state: &mut ParseState, value: &str) {
    state.request.auth = Some(Auth::bearer(value));
}

fn user_agent(state: &mut ParseState, value: &str) {
    state.request.headers.push(KeyValue::new("User-Agent", value));
}

fn referer(state: &mut ParseState, value: &str) {
    state.request.headers.push(KeyValue::new("Referer", value));
}

fn url(state: &mut ParseState, value: &str) {
    state.capture_url(value);
}

fn head(state: &mut ParseState, _value: &str) {
    state.head_flag = true;
}

fn get(state: &mut ParseState, _value: &str) {
    state.get_flag = true;
}

fn skip(_state: &mut ParseState, value: &str) {
    tracing::debug!(argument = value, "skipping argument of unmodelled flag");
}

// =============================================================================
// HELPERS
// =============================================================================

/// Split `Name: Value` on the first colon
///
/// Returns `None` when there is no colon or the name is empty.
pub(crate) fn parse_header(header: &str) -> Option<(String, String)> {
    let (name, value) = header.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}

/// Encode a `--data-urlencode` argument the way curl does
///
/// `content` and `=content` encode the whole content; `name=content`
/// keeps the name and encodes only the content.
pub(crate) fn encode_data_urlencode(value: &str) -> String {
    match value.split_once('=') {
        Some(("", content)) => urlencoding::encode(content).into_owned(),
        Some((name, content)) => format!("{}={}", name, urlencoding::encode(content)),
        None => urlencoding::encode(value).into_owned(),
    }
}
