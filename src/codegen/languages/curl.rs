//! curl command emitter
//!
//! The output feeds straight back into [`crate::curl::parse_curl`], so the
//! flags used here are the ones the importer understands.

use url::form_urlencoded;

use crate::codegen::effective::{EffectiveBody, EffectiveRequest};
use crate::codegen::escape::shell_quote;
use crate::codegen::Emitter;
use crate::models::Method;

pub struct Curl;

impl Emitter for Curl {
    fn language(&self) -> &'static str {
        "curl"
    }

    fn label(&self) -> &'static str {
        "cURL"
    }

    fn render(&self, request: &EffectiveRequest) -> String {
        let mut first = vec!["curl".to_string()];

        // POST is implied by the data flags, HEAD has its own flag
        let implied = (request.method == Method::Get && request.body.is_none())
            || (request.method == Method::Post && !request.body.is_none());
        if request.method == Method::Head {
            first.push("-I".to_string());
        } else if !implied {
            first.push(format!("-X {}", shell_quote(request.method.as_str())));
        }
        first.push(shell_quote(&request.full_url()));

        let mut lines = vec![first.join(" ")];

        for (name, value) in &request.headers {
            lines.push(format!("-H {}", shell_quote(&format!("{}: {}", name, value))));
        }

        if let Some(creds) = &request.basic_auth {
            lines.push(format!("-u {}", shell_quote(&creds.user_pass())));
        }

        match &request.body {
            EffectiveBody::None => {}
            EffectiveBody::Json { raw, .. } => lines.push(format!("--data-raw {}", shell_quote(raw))),
            EffectiveBody::Text(text) => lines.push(format!("--data-raw {}", shell_quote(text))),
            EffectiveBody::Form(form) => {
                for segment in form.segments() {
                    lines.push(format!("--data-urlencode {}", shell_quote(&data_urlencode_arg(segment))));
                }
            }
        }

        lines.join(" \\\n  ")
    }
}

/// `--data-urlencode` argument that curl encodes back into `segment`
///
/// curl treats the text before the first `=` or `@` as a literal name, so
/// names stay percent-encoded. A segment without `=` uses the `=content`
/// form unless its content is free of `=` and `@`.
fn data_urlencode_arg(segment: &str) -> String {
    let decoded: Vec<(String, String)> = form_urlencoded::parse(segment.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let (name, value) = match decoded.into_iter().next() {
        Some(pair) => pair,
        None => return String::from("="),
    };

    match segment.split_once('=') {
        Some(_) => format!("{}={}", urlencoding::encode(&name), value),
        None if name.contains(['=', '@']) => format!("={}", name),
        None => name,
    }
}
