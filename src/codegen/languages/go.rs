//! Go emitter (net/http)

use crate::codegen::effective::{EffectiveBody, EffectiveRequest, FormBody};
use crate::codegen::escape::{double_quoted, go_string};
use crate::codegen::Emitter;

pub struct NetHttp;

impl Emitter for NetHttp {
    fn language(&self) -> &'static str {
        "go-http"
    }

    fn label(&self) -> &'static str {
        "Go (net/http)"
    }

    fn render(&self, request: &EffectiveRequest) -> String {
        let form = matches!(request.body, EffectiveBody::Form(FormBody { pairs: Some(_), .. }));
        let uses_url = !request.query.is_empty() || form;
        let has_body = !request.body.is_none();

        let mut imports = vec!["fmt", "io", "net/http"];
        if uses_url {
            imports.push("net/url");
        }
        if has_body {
            imports.push("strings");
        }

        let mut code = String::from("package main\n\nimport (\n");
        for import in imports {
            code.push_str(&format!("\t\"{}\"\n", import));
        }
        code.push_str(")\n\nfunc main() {\n");

        if request.query.is_empty() {
            code.push_str(&format!("\tendpoint := {}\n", go_str(&request.url)));
        } else {
            code.push_str("\tparams := url.Values{}\n");
            for (key, value) in &request.query {
                code.push_str(&format!("\tparams.Add({}, {})\n", go_str(key), go_str(value)));
            }
            code.push_str(&format!(
                "\tendpoint := {} + \"{}\" + params.Encode()\n",
                go_str(&request.url),
                request.query_separator()
            ));
        }

        match &request.body {
            EffectiveBody::None => {}
            EffectiveBody::Form(FormBody { pairs: Some(pairs), .. }) => {
                code.push_str("\n\tform := url.Values{}\n");
                for (key, value) in pairs {
                    code.push_str(&format!("\tform.Add({}, {})\n", go_str(key), go_str(value)));
                }
                code.push_str("\tbody := strings.NewReader(form.Encode())\n");
            }
            body => {
                let payload = body.payload().unwrap_or_default();
                code.push_str(&format!("\n\tbody := strings.NewReader({})\n", go_string(&payload)));
            }
        }

        code.push_str(&format!(
            "\n\treq, err := http.NewRequest({}, endpoint, {})\n",
            go_str(request.method.as_str()),
            if has_body { "body" } else { "nil" }
        ));
        code.push_str("\tif err != nil {\n\t\tpanic(err)\n\t}\n");

        for (name, value) in &request.headers {
            code.push_str(&format!("\treq.Header.Add({}, {})\n", go_str(name), go_str(value)));
        }
        if let Some(creds) = &request.basic_auth {
            code.push_str(&format!(
                "\treq.SetBasicAuth({}, {})\n",
                go_str(&creds.username),
                go_str(&creds.password)
            ));
        }

        code.push_str("\n\tresp, err := http.DefaultClient.Do(req)\n");
        code.push_str("\tif err != nil {\n\t\tpanic(err)\n\t}\n");
        code.push_str("\tdefer resp.Body.Close()\n\n");
        code.push_str("\trespBody, err := io.ReadAll(resp.Body)\n");
        code.push_str("\tif err != nil {\n\t\tpanic(err)\n\t}\n\n");
        code.push_str("\tfmt.Println(resp.Status)\n");
        code.push_str("\tfmt.Println(string(respBody))\n");
        code.push_str("}\n");

        code
    }
}

fn go_str(s: &str) -> String {
    format!("\"{}\"", double_quoted(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Auth, Body, Method, RequestModel};

    fn render(model: &RequestModel) -> String {
        NetHttp.render(&EffectiveRequest::resolve(model, None))
    }

    #[test]
    fn test_get_imports_minimal() {
        let code = render(&RequestModel::new("https://example.com"));
        assert!(code.contains("import (\n\t\"fmt\"\n\t\"io\"\n\t\"net/http\"\n)\n"));
        assert!(code.contains("\tendpoint := \"https://example.com\"\n"));
        assert!(code.contains("http.NewRequest(\"GET\", endpoint, nil)"));
    }

    #[test]
    fn test_json_body_raw_string() {
        let model = RequestModel::new("https://api.x")
            .with_method(Method::Post)
            .with_body(Body::Json { content: r#"{"a":1}"#.to_string() });
        let code = render(&model);
        assert!(code.contains("\t\"strings\"\n"));
        assert!(!code.contains("net/url"));
        assert!(code.contains("\tbody := strings.NewReader(`{\n  \"a\": 1\n}`)\n"));
        assert!(code.contains("http.NewRequest(\"POST\", endpoint, body)"));
        assert!(code.contains("\treq.Header.Add(\"Content-Type\", \"application/json\")\n"));
    }

    #[test]
    fn test_query_and_basic_auth() {
        let model = RequestModel::new("https://api.x/s")
            .with_param("q", "rust")
            .with_auth(Auth::basic("u", "p"));
        let code = render(&model);
        assert!(code.contains("\t\"net/url\"\n"));
        assert!(code.contains("\tparams.Add(\"q\", \"rust\")\n"));
        assert!(code.contains("\tendpoint := \"https://api.x/s\" + \"?\" + params.Encode()\n"));
        assert!(code.contains("\treq.SetBasicAuth(\"u\", \"p\")\n"));
    }

    #[test]
    fn test_form_body() {
        let model = RequestModel::new("http://x")
            .with_method(Method::Post)
            .with_body(Body::Form { content: "a=1".to_string() });
        let code = render(&model);
        assert!(code.contains("\tform.Add(\"a\", \"1\")\n\tbody := strings.NewReader(form.Encode())\n"));
    }

    #[test]
    fn test_bare_form_sent_verbatim() {
        let model = RequestModel::new("http://x")
            .with_method(Method::Post)
            .with_body(Body::Form { content: "hello%20world".to_string() });
        let code = NetHttp.render(&EffectiveRequest::resolve(&model, None));
        assert!(code.contains("\tbody := strings.NewReader(`hello%20world`)\n"));
        assert!(!code.contains("form.Add"));
        assert!(!code.contains("\"net/url\""));
    }

    #[test]
    fn test_query_appended_to_existing_query() {
        let model = RequestModel::new("http://x/s?fixed=1").with_param("q", "2");
        let code = NetHttp.render(&EffectiveRequest::resolve(&model, None));
        assert!(code.contains("\tendpoint := \"http://x/s?fixed=1\" + \"&\" + params.Encode()\n"));
    }
}
