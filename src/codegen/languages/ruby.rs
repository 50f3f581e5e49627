//! Ruby emitter (Net::HTTP)

use crate::codegen::effective::{EffectiveBody, EffectiveRequest, FormBody};
use crate::codegen::escape::plain_single_quoted;
use crate::codegen::Emitter;
use crate::models::Method;

pub struct NetHttp;

impl Emitter for NetHttp {
    fn language(&self) -> &'static str {
        "ruby-net-http"
    }

    fn label(&self) -> &'static str {
        "Ruby (Net::HTTP)"
    }

    fn render(&self, request: &EffectiveRequest) -> String {
        let mut code = String::from("require 'net/http'\n");
        code.push_str("require 'uri'\n\n");

        code.push_str(&format!("uri = URI({})\n", rb_str(&request.url)));
        if !request.query.is_empty() {
            let encoded = format!("URI.encode_www_form({})", pair_array(&request.query));
            if request.query_separator() == '&' {
                code.push_str(&format!("uri.query = [uri.query, {}].join('&')\n", encoded));
            } else {
                code.push_str(&format!("uri.query = {}\n", encoded));
            }
        }
        code.push('\n');

        match request_class(&request.method) {
            Some(class) => code.push_str(&format!("request = Net::HTTP::{}.new(uri)\n", class)),
            None => code.push_str(&format!(
                "request = Net::HTTPGenericRequest.new({}, true, true, uri)\n",
                rb_str(request.method.as_str())
            )),
        }

        for (name, value) in &request.headers {
            code.push_str(&format!("request[{}] = {}\n", rb_str(name), rb_str(value)));
        }
        if let Some(creds) = &request.basic_auth {
            code.push_str(&format!(
                "request.basic_auth({}, {})\n",
                rb_str(&creds.username),
                rb_str(&creds.password)
            ));
        }

        match &request.body {
            EffectiveBody::None => {}
            EffectiveBody::Form(FormBody { pairs: Some(pairs), .. }) => {
                code.push_str(&format!("request.body = URI.encode_www_form({})\n", pair_array(pairs)));
            }
            body => {
                let payload = body.payload().unwrap_or_default();
                code.push_str(&format!("request.body = {}\n", rb_str(&payload)));
            }
        }

        code.push_str("\nresponse = Net::HTTP.start(uri.hostname, uri.port, use_ssl: uri.scheme == 'https') do |http|\n");
        code.push_str("  http.request(request)\n");
        code.push_str("end\n\n");
        code.push_str("puts response.code\n");
        code.push_str("puts response.body\n");

        code
    }
}

fn request_class(method: &Method) -> Option<&'static str> {
    match method {
        Method::Get => Some("Get"),
        Method::Post => Some("Post"),
        Method::Put => Some("Put"),
        Method::Patch => Some("Patch"),
        Method::Delete => Some("Delete"),
        Method::Head => Some("Head"),
        Method::Options => Some("Options"),
        Method::Trace => Some("Trace"),
        Method::Connect | Method::Custom(_) => None,
    }
}

fn rb_str(s: &str) -> String {
    format!("'{}'", plain_single_quoted(s))
}

fn pair_array(pairs: &[(String, String)]) -> String {
    let items: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("[{}, {}]", rb_str(k), rb_str(v)))
        .collect();
    format!("[{}]", items.join(", "))
}
