//! Rust emitter (reqwest, async)

use crate::codegen::effective::{EffectiveBody, EffectiveRequest};
use crate::codegen::escape::{indent_continuation, rust_raw_string, rust_string};
use crate::codegen::Emitter;
use crate::models::Method;

pub struct Reqwest;

impl Emitter for Reqwest {
    fn language(&self) -> &'static str {
        "rust-reqwest"
    }

    fn label(&self) -> &'static str {
        "Rust (reqwest)"
    }

    fn render(&self, request: &EffectiveRequest) -> String {
        let mut code = String::from("use std::error::Error;\n\n");
        code.push_str("#[tokio::main]\n");
        code.push_str("async fn main() -> Result<(), Box<dyn Error>> {\n");
        code.push_str("    let client = reqwest::Client::new();\n\n");

        let url = rust_string(&request.full_url());
        code.push_str("    let response = client\n");
        match &request.method {
            Method::Get | Method::Post | Method::Put | Method::Patch | Method::Delete | Method::Head => {
                code.push_str(&format!("        .{}({})\n", request.method.as_str().to_lowercase(), url));
            }
            Method::Options | Method::Connect | Method::Trace => {
                code.push_str(&format!("        .request(reqwest::Method::{}, {})\n", request.method, url));
            }
            Method::Custom(name) => {
                code.push_str(&format!(
                    "        .request(reqwest::Method::from_bytes({}.as_bytes())?, {})\n",
                    rust_string(name),
                    url
                ));
            }
        }

        for (name, value) in &request.headers {
            code.push_str(&format!("        .header({}, {})\n", rust_string(name), rust_string(value)));
        }

        if let Some(creds) = &request.basic_auth {
            code.push_str(&format!(
                "        .basic_auth({}, Some({}))\n",
                rust_string(&creds.username),
                rust_string(&creds.password)
            ));
        }

        match &request.body {
            EffectiveBody::None => {}
            EffectiveBody::Json { value: Some(_), .. } => {
                // Whitespace inside pretty JSON is free to reindent
                let json = indent_continuation(&request.body.json_text().unwrap_or_default(), "        ");
                code.push_str(&format!("        .body({})\n", rust_raw_string(&json)));
            }
            body => {
                let payload = body.payload().unwrap_or_default();
                code.push_str(&format!("        .body({})\n", rust_raw_string(&payload)));
            }
        }

        code.push_str("        .send()\n");
        code.push_str("        .await?;\n\n");
        code.push_str("    println!(\"{}\", response.status());\n");
        code.push_str("    println!(\"{}\", response.text().await?);\n\n");
        code.push_str("    Ok(())\n");
        code.push_str("}\n");

        code
    }
}
