//! Request model shared by the curl parser and the snippet generator
//!
//! A [`RequestModel`] is the canonical description of an HTTP request. It
//! is built fresh per parse (see [`ParsedRequest`]) or per editor change,
//! and is never mutated by code generation.
//!
//! The serde shape mirrors the interchange object used by editor front ends:
//!
//! ```json
//! {
//!   "method": "POST",
//!   "url": "https://api.example.com/users",
//!   "headers": [{"id": "…", "key": "Accept", "value": "*/*", "active": true}],
//!   "params": [],
//!   "body": {"type": "json", "content": "{\"name\":\"John\"}"},
//!   "auth": {"type": "bearer", "token": "abc"}
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// METHOD
// =============================================================================

/// HTTP method
///
/// Standard methods get their own variant; anything else survives as
/// [`Method::Custom`] so `-X PURGE` round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Connect,
    Trace,
    Custom(String),
}

impl Method {
    /// Parse a method name case-insensitively
    pub fn parse(name: &str) -> Self {
        let upper = name.trim().to_uppercase();
        match upper.as_str() {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "PATCH" => Method::Patch,
            "DELETE" => Method::Delete,
            "HEAD" => Method::Head,
            "OPTIONS" => Method::Options,
            "CONNECT" => Method::Connect,
            "TRACE" => Method::Trace,
            _ => Method::Custom(upper),
        }
    }

    /// Uppercase wire name
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Connect => "CONNECT",
            Method::Trace => "TRACE",
            Method::Custom(name) => name,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Method {
    fn from(s: String) -> Self {
        Method::parse(&s)
    }
}

impl From<Method> for String {
    fn from(method: Method) -> Self {
        method.as_str().to_string()
    }
}

// =============================================================================
// KEY/VALUE ENTRIES
// =============================================================================

/// A header or query parameter entry
///
/// `id` is an opaque identifier for editor list diffing. It has no meaning
/// to the engine and is regenerated freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    #[serde(default = "fresh_id")]
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl KeyValue {
    /// Create an active entry with a fresh id
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: fresh_id(),
            key: key.into(),
            value: value.into(),
            active: true,
        }
    }

    /// Same entry, toggled off
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

fn fresh_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn default_active() -> bool {
    true
}

// =============================================================================
// BODY & AUTH
// =============================================================================

/// Request body, exactly one variant at a time
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Body {
    #[default]
    None,
    Json { content: String },
    Text { content: String },
    Form { content: String },
}

impl Body {
    /// Classify raw data: JSON if it parses, text otherwise
    pub fn detect(content: impl Into<String>) -> Self {
        let content = content.into();
        match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(_) => Body::Json { content },
            Err(_) => Body::Text { content },
        }
    }

    /// Raw content, `None` for [`Body::None`]
    pub fn content(&self) -> Option<&str> {
        match self {
            Body::None => None,
            Body::Json { content } | Body::Text { content } | Body::Form { content } => Some(content),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Body::None)
    }
}

/// Where an API key is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApiKeyLocation {
    #[default]
    Header,
    Query,
}

/// Request authentication
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Auth {
    #[default]
    None,
    Basic {
        username: String,
        #[serde(default)]
        password: String,
    },
    Bearer {
        token: String,
    },
    #[serde(rename_all = "camelCase")]
    ApiKey {
        key: String,
        value: String,
        #[serde(default)]
        add_to: ApiKeyLocation,
    },
}

impl Auth {
    /// Basic credentials
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Auth::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Bearer token
    pub fn bearer(token: impl Into<String>) -> Self {
        Auth::Bearer { token: token.into() }
    }

    /// API key sent as a header or query parameter
    pub fn api_key(key: impl Into<String>, value: impl Into<String>, add_to: ApiKeyLocation) -> Self {
        Auth::ApiKey {
            key: key.into(),
            value: value.into(),
            add_to,
        }
    }
}

// =============================================================================
// REQUEST MODEL
// =============================================================================

/// Canonical, serialization-agnostic request description
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestModel {
    pub method: Method,
    pub url: String,
    pub headers: Vec<KeyValue>,
    pub params: Vec<KeyValue>,
    pub body: Body,
    pub auth: Auth,
}

impl RequestModel {
    /// Create a GET request for `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(KeyValue::new(key, value));
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(KeyValue::new(key, value));
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    /// Headers that take part in emission
    pub fn active_headers(&self) -> impl Iterator<Item = &KeyValue> {
        self.headers.iter().filter(|h| h.active)
    }

    /// Query parameters that take part in emission
    pub fn active_params(&self) -> impl Iterator<Item = &KeyValue> {
        self.params.iter().filter(|p| p.active)
    }
}

// =============================================================================
// PARTIAL MODEL
// =============================================================================

/// Partial request extracted from a curl command
///
/// Fields are `None` (or empty) when the command carried no matching
/// information, so the result can be merged over an existing template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub headers: Vec<KeyValue>,
    pub params: Vec<KeyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
}

impl ParsedRequest {
    /// Method the request will actually use
    pub fn effective_method(&self) -> Method {
        self.method.clone().unwrap_or_default()
    }

    /// Overlay the extracted fields onto `base`
    ///
    /// Present scalar fields replace the base value; header and param lists
    /// replace the base lists only when non-empty.
    pub fn merge_into(self, mut base: RequestModel) -> RequestModel {
        if let Some(method) = self.method {
            base.method = method;
        }
        if let Some(url) = self.url {
            base.url = url;
        }
        if !self.headers.is_empty() {
            base.headers = self.headers;
        }
        if !self.params.is_empty() {
            base.params = self.params;
        }
        if let Some(body) = self.body {
            base.body = body;
        }
        if let Some(auth) = self.auth {
            base.auth = auth;
        }
        base
    }

    /// Complete model with defaults for everything the command left out
    pub fn into_model(self) -> RequestModel {
        self.merge_into(RequestModel::default())
    }
}
