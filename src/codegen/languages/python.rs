//! Python emitter (requests library)

use crate::codegen::effective::{EffectiveBody, EffectiveRequest, FormBody};
use crate::codegen::escape::{double_quoted, python_literal};
use crate::codegen::Emitter;
use crate::models::Method;

pub struct Requests;

impl Emitter for Requests {
    fn language(&self) -> &'static str {
        "python-requests"
    }

    fn label(&self) -> &'static str {
        "Python (requests)"
    }

    fn render(&self, request: &EffectiveRequest) -> String {
        let mut code = String::from("import requests\n\n");
        let mut kwargs: Vec<String> = Vec::new();

        code.push_str(&format!("url = {}\n", py_str(&request.url)));

        // A list of tuples keeps order and repeated keys
        if !request.query.is_empty() {
            code.push_str(&format!("params = {}\n", tuple_list(&request.query)));
            kwargs.push("params=params".to_string());
        }

        if !request.headers.is_empty() {
            code.push_str("headers = {\n");
            for (name, value) in &request.headers {
                code.push_str(&format!("    {}: {},\n", py_str(name), py_str(value)));
            }
            code.push_str("}\n");
            kwargs.push("headers=headers".to_string());
        }

        match &request.body {
            EffectiveBody::None => {}
            EffectiveBody::Json { value: Some(value), .. } => {
                code.push_str(&format!("payload = {}\n", python_literal(value, 0)));
                kwargs.push("json=payload".to_string());
            }
            EffectiveBody::Json { raw, value: None }
            | EffectiveBody::Text(raw)
            | EffectiveBody::Form(FormBody { encoded: raw, pairs: None }) => {
                code.push_str(&format!("data = {}\n", py_str(raw)));
                kwargs.push("data=data".to_string());
            }
            EffectiveBody::Form(FormBody { pairs: Some(pairs), .. }) => {
                code.push_str(&format!("data = {}\n", tuple_list(pairs)));
                kwargs.push("data=data".to_string());
            }
        }

        if let Some(creds) = &request.basic_auth {
            kwargs.push(format!("auth=({}, {})", py_str(&creds.username), py_str(&creds.password)));
        }

        code.push_str("\nresponse = ");
        match python_function(&request.method) {
            Some(function) => code.push_str(&format!("requests.{}(\n    url", function)),
            None => code.push_str(&format!("requests.request(\n    {},\n    url", py_str(request.method.as_str()))),
        }
        for kwarg in &kwargs {
            code.push_str(&format!(",\n    {}", kwarg));
        }
        code.push_str(",\n)\n\n");

        code.push_str("print(response.status_code)\n");
        code.push_str("print(response.text)\n");

        code
    }
}

/// requests has module-level helpers for the common verbs
fn python_function(method: &Method) -> Option<&'static str> {
    match method {
        Method::Get => Some("get"),
        Method::Post => Some("post"),
        Method::Put => Some("put"),
        Method::Patch => Some("patch"),
        Method::Delete => Some("delete"),
        Method::Head => Some("head"),
        Method::Options => Some("options"),
        _ => None,
    }
}

fn py_str(s: &str) -> String {
    format!("\"{}\"", double_quoted(s))
}

fn tuple_list(pairs: &[(String, String)]) -> String {
    let mut out = String::from("[\n");
    for (key, value) in pairs {
        out.push_str(&format!("    ({}, {}),\n", py_str(key), py_str(value)));
    }
    out.push(']');
    out
}
