//! Code snippet generation
//!
//! One canonical [`RequestModel`], N independent renderers. Each target
//! language is an [`Emitter`] registered in a static list; adding a
//! language means adding one emitter and one registry line.
//!
//! ```
//! use curlex::codegen::generate_snippets;
//! use curlex::models::{Auth, RequestModel};
//!
//! let model = RequestModel::new("/users").with_auth(Auth::bearer("abc"));
//! let snippets = generate_snippets(&model, Some("https://api.example.com"));
//!
//! assert_eq!(snippets[0].language, "curl");
//! assert!(snippets[0].code.contains("https://api.example.com/users"));
//! assert!(snippets.iter().all(|s| s.code.contains("Bearer abc")));
//! ```

pub mod auth;
pub mod effective;
pub mod escape;
pub mod languages;

use serde::{Deserialize, Serialize};

use crate::errors::{CurlexError, Result};
use crate::models::RequestModel;
pub use effective::{EffectiveBody, EffectiveRequest, FormBody};

/// Generated source for one target language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    /// Stable machine key, e.g. `python-requests`
    pub language: String,
    /// Human-facing name, e.g. `Python (requests)`
    pub label: String,
    pub code: String,
}

/// Renders an effective request as source code in one language
pub trait Emitter: Send + Sync {
    /// Stable machine key
    fn language(&self) -> &'static str;

    /// Display name
    fn label(&self) -> &'static str;

    /// Render the request. Must not fail for any resolved request.
    fn render(&self, request: &EffectiveRequest) -> String;

    /// Resolve `model` and render it into a snippet
    fn snippet(&self, model: &RequestModel, base_url: Option<&str>) -> CodeSnippet {
        let request = EffectiveRequest::resolve(model, base_url);
        self.snippet_for(&request)
    }

    /// Render an already resolved request into a snippet
    fn snippet_for(&self, request: &EffectiveRequest) -> CodeSnippet {
        CodeSnippet {
            language: self.language().to_string(),
            label: self.label().to_string(),
            code: self.render(request),
        }
    }
}

static EMITTERS: &[&dyn Emitter] = &[
    &languages::curl::Curl,
    &languages::javascript::Fetch,
    &languages::javascript::Axios,
    &languages::python::Requests,
    &languages::go::NetHttp,
    &languages::rust::Reqwest,
    &languages::java::HttpClient,
    &languages::php::PhpCurl,
    &languages::ruby::NetHttp,
    &languages::csharp::HttpClient,
];

/// All registered emitters, in registration order
pub fn emitters() -> &'static [&'static dyn Emitter] {
    EMITTERS
}

/// `(language, label)` for every registered emitter
pub fn languages() -> Vec<(&'static str, &'static str)> {
    EMITTERS.iter().map(|e| (e.language(), e.label())).collect()
}

/// Find an emitter by language key
pub fn find_emitter(language: &str) -> Option<&'static dyn Emitter> {
    EMITTERS.iter().copied().find(|e| e.language() == language)
}

/// Render `model` in every registered language
///
/// Output order is the registration order and is identical across calls.
pub fn generate_snippets(model: &RequestModel, base_url: Option<&str>) -> Vec<CodeSnippet> {
    let request = EffectiveRequest::resolve(model, base_url);
    tracing::debug!(
        method = %request.method,
        url = %request.url,
        headers = request.headers.len(),
        "generating snippets"
    );
    EMITTERS.iter().map(|e| e.snippet_for(&request)).collect()
}

/// Render `model` in a single language
///
/// # Errors
///
/// [`CurlexError::UnknownLanguage`] when no emitter has that key.
pub fn generate_snippet(language: &str, model: &RequestModel, base_url: Option<&str>) -> Result<CodeSnippet> {
    find_emitter(language)
        .map(|e| e.snippet(model, base_url))
        .ok_or_else(|| CurlexError::UnknownLanguage(language.to_string()))
}
