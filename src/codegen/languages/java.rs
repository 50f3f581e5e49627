//! Java emitter (java.net.http.HttpClient)

use crate::codegen::effective::EffectiveRequest;
use crate::codegen::escape::double_quoted;
use crate::codegen::Emitter;

pub struct HttpClient;

impl Emitter for HttpClient {
    fn language(&self) -> &'static str {
        "java-httpclient"
    }

    fn label(&self) -> &'static str {
        "Java (HttpClient)"
    }

    fn render(&self, request: &EffectiveRequest) -> String {
        let mut code = String::from("import java.net.URI;\n");
        code.push_str("import java.net.http.HttpClient;\n");
        code.push_str("import java.net.http.HttpRequest;\n");
        code.push_str("import java.net.http.HttpResponse;\n\n");

        code.push_str("public class Main {\n");
        code.push_str("    public static void main(String[] args) throws Exception {\n");
        code.push_str("        HttpClient client = HttpClient.newHttpClient();\n\n");

        code.push_str("        HttpRequest request = HttpRequest.newBuilder()\n");
        code.push_str(&format!("            .uri(URI.create({}))\n", java_str(&request.full_url())));

        let publisher = match request.body.payload() {
            Some(payload) => format!("HttpRequest.BodyPublishers.ofString({})", java_str(&payload)),
            None => "HttpRequest.BodyPublishers.noBody()".to_string(),
        };
        code.push_str(&format!(
            "            .method({}, {})\n",
            java_str(request.method.as_str()),
            publisher
        ));

        // Authenticator-based basic auth waits for a challenge; send it up front
        for (name, value) in request.headers_with_basic_auth() {
            code.push_str(&format!("            .header({}, {})\n", java_str(&name), java_str(&value)));
        }

        code.push_str("            .build();\n\n");
        code.push_str("        HttpResponse<String> response = client.send(request, HttpResponse.BodyHandlers.ofString());\n\n");
        code.push_str("        System.out.println(response.statusCode());\n");
        code.push_str("        System.out.println(response.body());\n");
        code.push_str("    }\n");
        code.push_str("}\n");

        code
    }
}

fn java_str(s: &str) -> String {
    format!("\"{}\"", double_quoted(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Auth, Body, Method, RequestModel};

    #[test]
    fn test_get_no_body() {
        let model = RequestModel::new("https://example.com").with_param("a", "b c");
        let code = HttpClient.render(&EffectiveRequest::resolve(&model, None));
        assert!(code.contains("            .uri(URI.create(\"https://example.com?a=b+c\"))\n"));
        assert!(code.contains("            .method(\"GET\", HttpRequest.BodyPublishers.noBody())\n"));
    }

    #[test]
    fn test_post_with_escaped_body_and_basic_header() {
        let model = RequestModel::new("https://api.x")
            .with_method(Method::Post)
            .with_auth(Auth::basic("user", "pass"))
            .with_body(Body::Json { content: r#"{"a":"b"}"#.to_string() });
        let code = HttpClient.render(&EffectiveRequest::resolve(&model, None));
        assert!(code.contains(
            ".method(\"POST\", HttpRequest.BodyPublishers.ofString(\"{\\n  \\\"a\\\": \\\"b\\\"\\n}\"))"
        ));
        assert!(code.contains("            .header(\"Authorization\", \"Basic dXNlcjpwYXNz\")\n"));
    }

    #[test]
    fn test_form_segment_without_equals() {
        let model = RequestModel::new("http://x")
            .with_method(Method::Post)
            .with_body(Body::Form { content: "token".to_string() });
        let code = HttpClient.render(&EffectiveRequest::resolve(&model, None));
        assert!(code.contains("BodyPublishers.ofString(\"token\")"));
    }
}
