//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Snippet output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One labelled block per language
    #[default]
    Text,
    /// A JSON array of snippets
    Json,
}

impl OutputFormat {
    /// Parse a config-file value
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name, true).ok()
    }
}

/// curlex - turn curl commands into code
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "curlex")]
#[command(version, about = "Parse curl commands and render them as code in many languages")]
#[command(after_help = "With no COMMAND and no --model, the curl command is read from stdin.")]
pub struct Args {
    /// Only emit these languages (repeatable; see --list-languages)
    #[arg(short = 'l', long = "lang", value_name = "KEY")]
    pub languages: Vec<String>,

    /// Base URL joined onto relative model URLs
    #[arg(short = 'b', long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Read a request model JSON document instead of a curl command ("-" for stdin)
    #[arg(short = 'm', long = "model", value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Print the parsed request model as JSON instead of snippets
    #[arg(long = "parse-only")]
    pub parse_only: bool,

    /// Snippet output format
    #[arg(long = "format", value_enum, value_name = "FMT")]
    pub format: Option<OutputFormat>,

    /// List registered languages and exit
    #[arg(long = "list-languages")]
    pub list_languages: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    /// The curl command, as separate words or one quoted string
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Args {
    /// Reassemble the command words into a single curl command line
    ///
    /// A lone word is taken verbatim so a quoted command keeps its quoting;
    /// several words are re-quoted so the tokenizer splits them back the same way.
    pub fn command_line(&self) -> Option<String> {
        match self.command.as_slice() {
            [] => None,
            [single] => Some(single.clone()),
            words => Some(
                words
                    .iter()
                    .map(|w| crate::codegen::escape::shell_quote(w))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}
