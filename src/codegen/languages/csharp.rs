//! C# emitter (System.Net.Http.HttpClient)

use crate::codegen::effective::{EffectiveRequest, CONTENT_TYPE};
use crate::codegen::escape::double_quoted;
use crate::codegen::Emitter;

pub struct HttpClient;

impl Emitter for HttpClient {
    fn language(&self) -> &'static str {
        "csharp-httpclient"
    }

    fn label(&self) -> &'static str {
        "C# (HttpClient)"
    }

    fn render(&self, request: &EffectiveRequest) -> String {
        let payload = request.body.payload();
        let content_type = request.header(CONTENT_TYPE);

        let mut code = String::from("using System;\n");
        code.push_str("using System.Net.Http;\n");
        if payload.is_some() && content_type.is_some() {
            code.push_str("using System.Net.Http.Headers;\n");
        }
        if payload.is_some() {
            code.push_str("using System.Text;\n");
        }
        code.push_str("using System.Threading.Tasks;\n\n");

        code.push_str("class Program\n{\n");
        code.push_str("    static async Task Main()\n    {\n");
        code.push_str("        using var client = new HttpClient();\n\n");

        code.push_str(&format!(
            "        using var request = new HttpRequestMessage(new HttpMethod({}), {});\n",
            cs_str(request.method.as_str()),
            cs_str(&request.full_url())
        ));

        // Content-Type is a content header in .NET, not a request header
        for (name, value) in request.headers_with_basic_auth() {
            if name.eq_ignore_ascii_case(CONTENT_TYPE) {
                continue;
            }
            code.push_str(&format!(
                "        request.Headers.TryAddWithoutValidation({}, {});\n",
                cs_str(&name),
                cs_str(&value)
            ));
        }

        if let Some(payload) = &payload {
            code.push_str(&format!(
                "        request.Content = new StringContent({}, Encoding.UTF8);\n",
                cs_str(payload)
            ));
            if let Some(content_type) = content_type {
                code.push_str(&format!(
                    "        request.Content.Headers.ContentType = MediaTypeHeaderValue.Parse({});\n",
                    cs_str(content_type)
                ));
            }
        }

        code.push_str("\n        using var response = await client.SendAsync(request);\n\n");
        code.push_str("        Console.WriteLine((int)response.StatusCode);\n");
        code.push_str("        Console.WriteLine(await response.Content.ReadAsStringAsync());\n");
        code.push_str("    }\n}\n");

        code
    }
}

fn cs_str(s: &str) -> String {
    format!("\"{}\"", double_quoted(s))
}
