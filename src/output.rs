//! Output formatting for path tree results.
//!
//! Provides functions to format a [`PathTreeResult`] as the rendered graph, JSON,
//! Markdown, or a flat list of leaf paths.

use crate::{PathTreeError, PathTreeResult};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Graph,
    Json,
    Markdown,
    Paths,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Graph | OutputFormat::Paths => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
        }
    }
}

/// Formats the result into a string.
///
/// `pretty` only affects JSON, which is indented when set.
pub fn format_result(
    result: &PathTreeResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, PathTreeError> {
    match format {
        OutputFormat::Graph => Ok(result.graph.clone()),
        OutputFormat::Json => format_json(result, pretty),
        OutputFormat::Markdown => Ok(format_markdown(result)),
        OutputFormat::Paths => Ok(format_paths(result)),
    }
}

/// Writes the formatted result to a file.
pub fn write_result_to_file(
    result: &PathTreeResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), PathTreeError> {
    let content = format_result(result, format, pretty)?;
    fs::write(&path, content).map_err(|e| PathTreeError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_json(result: &PathTreeResult, pretty: bool) -> Result<String, PathTreeError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

fn format_markdown(result: &PathTreeResult) -> String {
    let mut out = String::with_capacity(result.graph.len() + 16);
    out.push_str("```text\n");
    out.push_str(&result.graph);
    if !result.graph.is_empty() && !result.graph.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n");
    out
}

fn format_paths(result: &PathTreeResult) -> String {
    result
        .tree
        .leaf_paths()
        .iter()
        .map(|segments| segments.join("/"))
        .collect::<Vec<_>>()
        .join("\n")
}
