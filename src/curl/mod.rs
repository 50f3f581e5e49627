//! Curl command import
//!
//! ```
//! use curlex::curl::parse_curl;
//! use curlex::models::{Auth, Method};
//!
//! let parsed = parse_curl("curl -H 'Authorization: Bearer abc' -d 'a=1' https://api.example.com/items?page=2").unwrap();
//! assert_eq!(parsed.method, Some(Method::Post));
//! assert_eq!(parsed.url.as_deref(), Some("https://api.example.com/items"));
//! assert_eq!(parsed.params[0].key, "page");
//! assert_eq!(parsed.auth, Some(Auth::bearer("abc")));
//! ```

pub mod cursor;
pub mod flags;
pub mod parser;
pub mod tokenizer;

pub use cursor::TokenCursor;
pub use flags::FlagSpec;
pub use parser::parse_curl;
pub use tokenizer::tokenize;
