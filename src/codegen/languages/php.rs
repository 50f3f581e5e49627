//! PHP emitter (ext-curl)

use crate::codegen::effective::EffectiveRequest;
use crate::codegen::escape::plain_single_quoted;
use crate::codegen::Emitter;
use crate::models::Method;

pub struct PhpCurl;

impl Emitter for PhpCurl {
    fn language(&self) -> &'static str {
        "php-curl"
    }

    fn label(&self) -> &'static str {
        "PHP (cURL)"
    }

    fn render(&self, request: &EffectiveRequest) -> String {
        let mut code = String::from("<?php\n\n");
        code.push_str("$curl = curl_init();\n\n");

        code.push_str("curl_setopt_array($curl, [\n");
        code.push_str(&format!("    CURLOPT_URL => {},\n", php_str(&request.full_url())));
        code.push_str("    CURLOPT_RETURNTRANSFER => true,\n");
        if request.method == Method::Head {
            code.push_str("    CURLOPT_NOBODY => true,\n");
        } else {
            code.push_str(&format!("    CURLOPT_CUSTOMREQUEST => {},\n", php_str(request.method.as_str())));
        }

        if !request.headers.is_empty() {
            code.push_str("    CURLOPT_HTTPHEADER => [\n");
            for (name, value) in &request.headers {
                code.push_str(&format!("        {},\n", php_str(&format!("{}: {}", name, value))));
            }
            code.push_str("    ],\n");
        }

        if let Some(creds) = &request.basic_auth {
            code.push_str("    CURLOPT_HTTPAUTH => CURLAUTH_BASIC,\n");
            code.push_str(&format!("    CURLOPT_USERPWD => {},\n", php_str(&creds.user_pass())));
        }

        if let Some(payload) = request.body.payload() {
            code.push_str(&format!("    CURLOPT_POSTFIELDS => {},\n", php_str(&payload)));
        }

        code.push_str("]);\n\n");
        code.push_str("$response = curl_exec($curl);\n");
        code.push_str("$status = curl_getinfo($curl, CURLINFO_HTTP_CODE);\n");
        code.push_str("curl_close($curl);\n\n");
        code.push_str("echo $status . \"\\n\";\n");
        code.push_str("echo $response;\n");

        code
    }
}

fn php_str(s: &str) -> String {
    format!("'{}'", plain_single_quoted(s))
}
