//! JavaScript emitters: the Fetch API and axios

use crate::codegen::effective::{EffectiveBody, EffectiveRequest, FormBody};
use crate::codegen::escape::{indent_continuation, js_single_quoted};
use crate::codegen::Emitter;

/// `fetch()` with an options object
pub struct Fetch;

/// axios request config
pub struct Axios;

impl Emitter for Fetch {
    fn language(&self) -> &'static str {
        "javascript-fetch"
    }

    fn label(&self) -> &'static str {
        "JavaScript (fetch)"
    }

    fn render(&self, request: &EffectiveRequest) -> String {
        let mut code = String::new();

        if request.query.is_empty() {
            code.push_str(&format!("const url = '{}';\n\n", js_single_quoted(&request.url)));
        } else {
            code.push_str(&format!("const params = {};\n", search_params(&request.query, "")));
            code.push_str(&format!(
                "const url = '{}{}' + params;\n\n",
                js_single_quoted(&request.url),
                request.query_separator()
            ));
        }

        code.push_str("const options = {\n");
        code.push_str(&format!("  method: '{}',\n", js_single_quoted(request.method.as_str())));

        // fetch has no basic-auth option
        let headers = request.headers_with_basic_auth();
        if !headers.is_empty() {
            code.push_str(&headers_object(&headers, "  "));
        }

        match &request.body {
            EffectiveBody::None => {}
            EffectiveBody::Json { value: Some(_), .. } => {
                let json = request.body.json_text().unwrap_or_default();
                code.push_str(&format!("  body: JSON.stringify({}),\n", indent_continuation(&json, "  ")));
            }
            EffectiveBody::Json { raw, value: None } | EffectiveBody::Text(raw) => {
                code.push_str(&format!("  body: '{}',\n", js_single_quoted(raw)));
            }
            EffectiveBody::Form(FormBody { pairs: Some(pairs), .. }) => {
                code.push_str(&format!("  body: {},\n", search_params(pairs, "  ")));
            }
            EffectiveBody::Form(FormBody { encoded, pairs: None }) => {
                code.push_str(&format!("  body: '{}',\n", js_single_quoted(encoded)));
            }
        }

        code.push_str("};\n\n");
        code.push_str("fetch(url, options)\n");
        code.push_str("  .then(response => response.text())\n");
        code.push_str("  .then(data => console.log(data))\n");
        code.push_str("  .catch(error => console.error('Error:', error));\n");

        code
    }
}

impl Emitter for Axios {
    fn language(&self) -> &'static str {
        "javascript-axios"
    }

    fn label(&self) -> &'static str {
        "JavaScript (axios)"
    }

    fn render(&self, request: &EffectiveRequest) -> String {
        let mut code = String::from("const axios = require('axios');\n\n");

        code.push_str("axios({\n");
        code.push_str(&format!("  method: '{}',\n", js_single_quoted(&request.method.as_str().to_lowercase())));
        code.push_str(&format!("  url: '{}',\n", js_single_quoted(&request.url)));

        if !request.query.is_empty() {
            code.push_str(&format!("  params: {},\n", search_params(&request.query, "  ")));
        }

        if !request.headers.is_empty() {
            code.push_str(&headers_object(&request.headers, "  "));
        }

        if let Some(creds) = &request.basic_auth {
            code.push_str("  auth: {\n");
            code.push_str(&format!("    username: '{}',\n", js_single_quoted(&creds.username)));
            code.push_str(&format!("    password: '{}',\n", js_single_quoted(&creds.password)));
            code.push_str("  },\n");
        }

        match &request.body {
            EffectiveBody::None => {}
            EffectiveBody::Json { value: Some(_), .. } => {
                let json = request.body.json_text().unwrap_or_default();
                code.push_str(&format!("  data: {},\n", indent_continuation(&json, "  ")));
            }
            EffectiveBody::Json { raw, value: None } | EffectiveBody::Text(raw) => {
                code.push_str(&format!("  data: '{}',\n", js_single_quoted(raw)));
            }
            EffectiveBody::Form(FormBody { pairs: Some(pairs), .. }) => {
                code.push_str(&format!("  data: {},\n", search_params(pairs, "  ")));
            }
            EffectiveBody::Form(FormBody { encoded, pairs: None }) => {
                code.push_str(&format!("  data: '{}',\n", js_single_quoted(encoded)));
            }
        }

        code.push_str("})\n");
        code.push_str("  .then(response => console.log(response.data))\n");
        code.push_str("  .catch(error => console.error('Error:', error));\n");

        code
    }
}

/// `headers: { … },` block at the given indentation
fn headers_object(headers: &[(String, String)], indent: &str) -> String {
    let mut out = format!("{}headers: {{\n", indent);
    for (name, value) in headers {
        out.push_str(&format!(
            "{}  '{}': '{}',\n",
            indent,
            js_single_quoted(name),
            js_single_quoted(value)
        ));
    }
    out.push_str(&format!("{}}},\n", indent));
    out
}

/// `new URLSearchParams([...])` keeping order and repeated keys
fn search_params(pairs: &[(String, String)], indent: &str) -> String {
    let mut out = String::from("new URLSearchParams([\n");
    for (key, value) in pairs {
        out.push_str(&format!(
            "{}  ['{}', '{}'],\n",
            indent,
            js_single_quoted(key),
            js_single_quoted(value)
        ));
    }
    out.push_str(&format!("{}])", indent));
    out
}
