//! Effective request: the model reduced to what goes on the wire
//!
//! Emitters never look at a [`RequestModel`] directly. They get an
//! [`EffectiveRequest`] in which inactive entries are gone, the base URL
//! is applied, auth is materialized and the body content type is settled.

use serde_json::Value;
use url::form_urlencoded;

use super::auth::{materialize, BasicCredentials, Credential};
use crate::models::{Body, Method, RequestModel};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body in its rendered form
#[derive(Debug, Clone, PartialEq)]
pub enum EffectiveBody {
    None,
    /// `value` is present when `raw` parses as JSON
    Json { raw: String, value: Option<Value> },
    Text(String),
    Form(FormBody),
}

/// Form body as stored, plus its decoded pairs when it has them
#[derive(Debug, Clone, PartialEq)]
pub struct FormBody {
    /// Stored segments joined with `&`, each byte-for-byte as written
    pub encoded: String,
    /// Decoded `name=value` pairs; `None` when any segment has no `=`
    pub pairs: Option<Vec<(String, String)>>,
}

impl FormBody {
    /// Split stored form content on `&` and newlines
    pub fn parse(content: &str) -> Self {
        let segments = form_segments(content);
        let pairs = segments
            .iter()
            .all(|segment| segment.contains('='))
            .then(|| parse_form(content));
        Self {
            encoded: segments.join("&"),
            pairs,
        }
    }

    /// Non-empty segments of the stored content
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.encoded.split('&').filter(|s| !s.is_empty())
    }
}

impl EffectiveBody {
    fn from_model(body: &Body) -> Self {
        match body {
            Body::None => EffectiveBody::None,
            Body::Json { content } => EffectiveBody::Json {
                raw: content.clone(),
                value: serde_json::from_str(content).ok(),
            },
            Body::Text { content } => EffectiveBody::Text(content.clone()),
            Body::Form { content } => EffectiveBody::Form(FormBody::parse(content)),
        }
    }

    /// Content type implied by the body tag
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            EffectiveBody::Json { .. } => Some(JSON_CONTENT_TYPE),
            EffectiveBody::Form(_) => Some(FORM_CONTENT_TYPE),
            EffectiveBody::None | EffectiveBody::Text(_) => None,
        }
    }

    /// Pretty-printed JSON, or the raw content when it does not parse
    pub fn json_text(&self) -> Option<String> {
        match self {
            EffectiveBody::Json { raw, value } => Some(
                value
                    .as_ref()
                    .and_then(|v| serde_json::to_string_pretty(v).ok())
                    .unwrap_or_else(|| raw.clone()),
            ),
            _ => None,
        }
    }

    /// Exact bytes to send, as a string
    pub fn payload(&self) -> Option<String> {
        match self {
            EffectiveBody::None => None,
            EffectiveBody::Json { .. } => self.json_text(),
            EffectiveBody::Text(text) => Some(text.clone()),
            EffectiveBody::Form(form) => Some(form.encoded.clone()),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, EffectiveBody::None)
    }
}

/// Request ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveRequest {
    pub method: Method,
    /// URL with the base applied, without the query string
    pub url: String,
    pub query: Vec<(String, String)>,
    /// Active headers, auth header and content type, in emission order
    pub headers: Vec<(String, String)>,
    /// Basic credentials, for emitters with a native basic-auth API
    pub basic_auth: Option<BasicCredentials>,
    pub body: EffectiveBody,
}

impl EffectiveRequest {
    /// Resolve a model against an optional base URL
    pub fn resolve(model: &RequestModel, base_url: Option<&str>) -> Self {
        let credential = materialize(&model.auth);
        let shadowed = credential.as_ref().and_then(Credential::header_name);

        let mut headers: Vec<(String, String)> = model
            .active_headers()
            .filter(|h| !shadowed.is_some_and(|name| h.key.eq_ignore_ascii_case(name)))
            .map(|h| (h.key.clone(), h.value.clone()))
            .collect();

        let mut query: Vec<(String, String)> = model
            .active_params()
            .map(|p| (p.key.clone(), p.value.clone()))
            .collect();

        let mut basic_auth = None;
        match credential {
            Some(Credential::Header { name, value }) => headers.push((name, value)),
            Some(Credential::Query { key, value }) => query.push((key, value)),
            Some(Credential::Basic(creds)) => basic_auth = Some(creds),
            None => {}
        }

        let body = EffectiveBody::from_model(&model.body);
        if let Some(content_type) = body.content_type() {
            let present = headers.iter().any(|(k, _)| k.eq_ignore_ascii_case(CONTENT_TYPE));
            if !present {
                headers.push((CONTENT_TYPE.to_string(), content_type.to_string()));
            }
        }

        Self {
            method: model.method.clone(),
            url: join_url(base_url, &model.url),
            query,
            headers,
            basic_auth,
            body,
        }
    }

    /// URL with the query string appended, form-urlencoded
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        format!("{}{}{}", self.url, self.query_separator(), encode_pairs(&self.query))
    }

    /// `&` when the URL already carries a query string, else `?`
    pub fn query_separator(&self) -> char {
        if self.url.contains('?') {
            '&'
        } else {
            '?'
        }
    }

    /// Headers plus an explicit `Authorization: Basic …` header
    ///
    /// For targets without a native basic-auth helper.
    pub fn headers_with_basic_auth(&self) -> Vec<(String, String)> {
        let mut headers = self.headers.clone();
        if let Some(creds) = &self.basic_auth {
            headers.push(("Authorization".to_string(), creds.header_value()));
        }
        headers
    }

    /// Value of the first header named `name`, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Join a relative URL onto a base
///
/// URLs with a scheme are returned untouched, as is everything when there
/// is no base.
pub fn join_url(base_url: Option<&str>, url: &str) -> String {
    let base = match base_url.map(str::trim).filter(|b| !b.is_empty()) {
        Some(base) if !url.contains("://") => base,
        _ => return url.to_string(),
    };
    let path = url.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Split form content into pairs
///
/// Pairs are separated by `&` or newlines and percent/plus decoded.
pub fn parse_form(content: &str) -> Vec<(String, String)> {
    form_segments(content)
        .into_iter()
        .flat_map(|segment| form_urlencoded::parse(segment.as_bytes()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn form_segments(content: &str) -> Vec<&str> {
    content
        .split(['&', '\n'])
        .map(|segment| segment.trim_end_matches('\r'))
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// `application/x-www-form-urlencoded` serialization
pub fn encode_pairs(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiKeyLocation, Auth, KeyValue};

    #[test]
    fn test_join_url() {
        assert_eq!(join_url(Some("https://api.x"), "/users"), "https://api.x/users");
        assert_eq!(join_url(Some("https://api.x/"), "users"), "https://api.x/users");
        assert_eq!(join_url(Some("https://api.x"), "http://other/y"), "http://other/y");
        assert_eq!(join_url(None, "/users"), "/users");
        assert_eq!(join_url(Some("  "), "/users"), "/users");
        assert_eq!(join_url(Some("https://api.x/v1/"), ""), "https://api.x/v1/");
    }

    #[test]
    fn test_inactive_entries_skipped() {
        let mut model = RequestModel::new("http://x")
            .with_header("A", "1")
            .with_param("p", "1")
            .with_param("q", "2");
        model.headers[0] = KeyValue::new("A", "1").inactive();
        model.params[1].active = false;

        let request = EffectiveRequest::resolve(&model, None);
        assert!(request.headers.is_empty());
        assert_eq!(request.full_url(), "http://x?p=1");
    }

    #[test]
    fn test_query_encoding() {
        let model = RequestModel::new("http://x/s").with_param("q", "a b&c");
        assert_eq!(EffectiveRequest::resolve(&model, None).full_url(), "http://x/s?q=a+b%26c");
    }

    #[test]
    fn test_bearer_shadows_stored_authorization() {
        let model = RequestModel::new("http://x")
            .with_header("authorization", "Bearer stale")
            .with_header("Accept", "*/*")
            .with_auth(Auth::bearer("fresh"));
        let request = EffectiveRequest::resolve(&model, None);
        assert_eq!(
            request.headers,
            vec![
                ("Accept".to_string(), "*/*".to_string()),
                ("Authorization".to_string(), "Bearer fresh".to_string()),
            ]
        );
    }

    #[test]
    fn test_api_key_query() {
        let model = RequestModel::new("http://x")
            .with_param("a", "1")
            .with_auth(Auth::api_key("key", "s3cret", ApiKeyLocation::Query));
        assert_eq!(EffectiveRequest::resolve(&model, None).full_url(), "http://x?a=1&key=s3cret");
    }

    #[test]
    fn test_basic_kept_separate() {
        let model = RequestModel::new("http://x").with_auth(Auth::basic("user", "pass"));
        let request = EffectiveRequest::resolve(&model, None);
        assert!(request.headers.is_empty());
        assert_eq!(request.basic_auth, Some(BasicCredentials::new("user", "pass")));
        assert_eq!(
            request.headers_with_basic_auth(),
            vec![("Authorization".to_string(), "Basic dXNlcjpwYXNz".to_string())]
        );
    }

    #[test]
    fn test_json_content_type_added_once() {
        let model = RequestModel::new("http://x").with_body(Body::Json { content: r#"{"a":1}"#.to_string() });
        let request = EffectiveRequest::resolve(&model, None);
        assert_eq!(request.header("content-type"), Some(JSON_CONTENT_TYPE));
        assert_eq!(request.body.json_text().as_deref(), Some("{\n  \"a\": 1\n}"));

        let model = model.with_header("content-type", "application/vnd.api+json");
        let request = EffectiveRequest::resolve(&model, None);
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("Content-Type"), Some("application/vnd.api+json"));
    }

    #[test]
    fn test_invalid_json_kept_raw() {
        let model = RequestModel::new("http://x").with_body(Body::Json { content: "{oops".to_string() });
        let request = EffectiveRequest::resolve(&model, None);
        assert_eq!(request.body.json_text().as_deref(), Some("{oops"));
    }

    #[test]
    fn test_form_body() {
        let model = RequestModel::new("http://x").with_body(Body::Form { content: "a=1&b=x%20y\nc=3".to_string() });
        let request = EffectiveRequest::resolve(&model, None);
        assert_eq!(request.header("Content-Type"), Some(FORM_CONTENT_TYPE));
        assert_eq!(request.body.payload().as_deref(), Some("a=1&b=x%20y&c=3"));
        match &request.body {
            EffectiveBody::Form(form) => assert_eq!(
                form.pairs.as_deref(),
                Some(&[
                    ("a".to_string(), "1".to_string()),
                    ("b".to_string(), "x y".to_string()),
                    ("c".to_string(), "3".to_string()),
                ][..])
            ),
            other => panic!("expected a form body, got {:?}", other),
        }
    }

    #[test]
    fn test_form_segment_without_equals_kept_verbatim() {
        let form = FormBody::parse("hello%20world");
        assert_eq!(form.encoded, "hello%20world");
        assert_eq!(form.pairs, None);

        let form = FormBody::parse("token&a=1\r\n");
        assert_eq!(form.encoded, "token&a=1");
        assert_eq!(form.pairs, None);
        assert_eq!(form.segments().collect::<Vec<_>>(), vec!["token", "a=1"]);
    }

    #[test]
    fn test_query_separator_follows_existing_query() {
        let model = RequestModel::new("http://x/s?fixed=1").with_param("q", "2");
        let request = EffectiveRequest::resolve(&model, None);
        assert_eq!(request.query_separator(), '&');
        assert_eq!(request.full_url(), "http://x/s?fixed=1&q=2");
    }

    #[test]
    fn test_text_body_has_no_content_type() {
        let model = RequestModel::new("http://x").with_body(Body::Text { content: "hi".to_string() });
        assert!(EffectiveRequest::resolve(&model, None).headers.is_empty());
    }
}
