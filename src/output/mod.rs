//! Output handling for snippets, models and the language list

pub mod writer;

pub use writer::{write_languages, write_model, write_snippets};
