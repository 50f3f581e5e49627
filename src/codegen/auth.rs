//! Authentication materialization
//!
//! Turns the model's [`Auth`] into what actually goes on the wire: a
//! header, a query parameter, or basic credentials that an emitter may hand
//! to a native basic-auth API.

use base64::Engine;

use crate::models::{ApiKeyLocation, Auth};

/// HTTP Basic credentials (RFC 7617)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Basic base64(username:password)`
    pub fn header_value(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password);
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());
        format!("Basic {}", encoded)
    }

    /// `username:password`, the form curl's `-u` and PHP's `CURLOPT_USERPWD` take
    pub fn user_pass(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }
}

/// Wire form of an [`Auth`] value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Header { name: String, value: String },
    Query { key: String, value: String },
    Basic(BasicCredentials),
}

impl Credential {
    /// Header name this credential occupies, if any
    ///
    /// Stored headers with the same name are dropped at render time so a
    /// request never carries the credential twice.
    pub fn header_name(&self) -> Option<&str> {
        match self {
            Credential::Header { name, .. } => Some(name),
            Credential::Basic(_) => Some("Authorization"),
            Credential::Query { .. } => None,
        }
    }
}

/// Resolve auth into its wire form
pub fn materialize(auth: &Auth) -> Option<Credential> {
    match auth {
        Auth::None => None,
        Auth::Basic { username, password } => {
            Some(Credential::Basic(BasicCredentials::new(username.clone(), password.clone())))
        }
        Auth::Bearer { token } => Some(Credential::Header {
            name: "Authorization".to_string(),
            value: format!("Bearer {}", token),
        }),
        Auth::ApiKey { key, value, add_to: ApiKeyLocation::Header } => Some(Credential::Header {
            name: key.clone(),
            value: value.clone(),
        }),
        Auth::ApiKey { key, value, add_to: ApiKeyLocation::Query } => Some(Credential::Query {
            key: key.clone(),
            value: value.clone(),
        }),
    }
}
