//! Main execution logic for the curlex binary

use std::io::{self, Read};
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, OutputFormat};
use crate::codegen::{self, CodeSnippet};
use crate::config::Config;
use crate::curl::parse_curl;
use crate::errors::{CurlexError, Result};
use crate::models::RequestModel;
use crate::output;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Handles argument parsing, logging setup and configuration loading, then
/// dispatches to [`program`].
pub fn run(args: Vec<String>) -> ExitStatus {
    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    init_logging(parsed.debug);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config: {}", e);
            Config::default()
        }
    };

    match program(parsed, config) {
        Ok(status) => status,
        Err(e) => handle_error(e),
    }
}

/// Run one invocation against an already loaded config
pub fn program(args: Args, config: Config) -> Result<ExitStatus> {
    tracing::debug!(?args, ?config, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_languages {
        output::write_languages(&mut out, &codegen::languages())?;
        return Ok(ExitStatus::Success);
    }

    let model = load_model(&args)?;

    if args.parse_only {
        output::write_model(&mut out, &model)?;
        return Ok(ExitStatus::Success);
    }

    let base_url = args.base_url.as_deref().or(config.base_url.as_deref());
    let format = args.format.or(config.format).unwrap_or_default();
    let languages = if args.languages.is_empty() {
        &config.languages
    } else {
        &args.languages
    };

    let snippets = render(&model, base_url, languages)?;
    output::write_snippets(&mut out, &snippets, format)?;

    Ok(ExitStatus::Success)
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--debug`.
fn init_logging(debug: bool) {
    let default = if debug { "curlex=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

/// Build the request model from `--model` or the curl command
fn load_model(args: &Args) -> Result<RequestModel> {
    if let Some(path) = &args.model {
        let text = read_input(path)?;
        return Ok(serde_json::from_str(&text)?);
    }

    let command = match args.command_line() {
        Some(command) => command,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(parse_curl(&command)?.into_model())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| CurlexError::Argument(format!("{}: {}", path.display(), e)))
    }
}

/// Render every registered language, or only `languages` in the order given
fn render(model: &RequestModel, base_url: Option<&str>, languages: &[String]) -> Result<Vec<CodeSnippet>> {
    if languages.is_empty() {
        return Ok(codegen::generate_snippets(model, base_url));
    }
    languages
        .iter()
        .map(|lang| codegen::generate_snippet(lang, model, base_url))
        .collect()
}

fn handle_error(error: CurlexError) -> ExitStatus {
    eprintln!("error: {}", error);
    ExitStatus::Error
}
