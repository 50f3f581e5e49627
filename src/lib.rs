//! curlex library interface
//!
//! Parses curl commands into a canonical request model and renders that
//! model as ready-to-run code in many languages.
//!
//! # Module Organization
//!
//! - [`curl`] - Tokenizer and curl command parser (tokenize, parse_curl)
//! - [`models`] - Request model (RequestModel, ParsedRequest)
//! - [`codegen`] - Snippet generator and per-language emitters
//! - [`errors`] - Error types (CurlexError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic for the binary

pub mod cli;
pub mod codegen;
pub mod config;
pub mod core;
pub mod curl;
pub mod errors;
pub mod models;
pub mod output;
pub mod status;

pub use codegen::{generate_snippet, generate_snippets, languages, CodeSnippet};
pub use curl::{parse_curl, tokenize};
pub use errors::{CurlexError, Result};
pub use models::{ParsedRequest, RequestModel};
