//! Output writer for generated snippets

use std::io::Write;

use crate::cli::OutputFormat;
use crate::codegen::CodeSnippet;
use crate::errors::Result;
use crate::models::RequestModel;

/// Write snippets in the requested format
///
/// Text output is one `### Label (key)` block per snippet, separated by a
/// blank line. JSON output is a pretty-printed array of snippet objects.
pub fn write_snippets<W: Write>(out: &mut W, snippets: &[CodeSnippet], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (i, snippet) in snippets.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "### {} ({})", snippet.label, snippet.language)?;
                out.write_all(snippet.code.as_bytes())?;
                if !snippet.code.ends_with('\n') {
                    writeln!(out)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, snippets)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Write a request model as pretty JSON
pub fn write_model<W: Write>(out: &mut W, model: &RequestModel) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, model)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Write the `(key, label)` table of registered languages
pub fn write_languages<W: Write>(out: &mut W, languages: &[(&str, &str)]) -> Result<()> {
    let width = languages.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, label) in languages {
        writeln!(out, "{:<width$}  {}", key, label, width = width)?;
    }
    out.flush()?;
    Ok(())
}
