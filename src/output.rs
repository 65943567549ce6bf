//! Output formatting for diff results.
//!
//! Three renderers consume the same [`DiffEntry`] tree:
//!
//! - [`stylish`]: nested brace blocks with `+`/`-` markers
//! - [`plain`]: one sentence per changed property, addressed by dotted path
//! - [`json`]: a structured JSON object keyed by property name
//!
//! Every renderer re-sorts siblings with [`OutputOptions::key_order`], so the
//! output does not depend on the order the entries were built in.
//!
//! # Examples
//!
//! ```
//! use gendiff::{compute_diff, format_diff, DiffConfig, OutputFormat, OutputOptions, Value};
//!
//! let old: Value = [("timeout".to_string(), Value::from(50))].into_iter().collect();
//! let new: Value = [("timeout".to_string(), Value::from(20))].into_iter().collect();
//! let diff = compute_diff(&old, &new, &DiffConfig::default()).unwrap();
//!
//! let output = format_diff(&diff, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
//! assert_eq!(output, "Property 'timeout' was updated. From 50 to 20");
//! ```

pub mod json;
pub mod plain;
pub mod stylish;

use crate::diff::{Diff, DiffEntry};
use crate::error::OutputError;
use crate::order::KeyOrdering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Output format selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Nested brace blocks, one line per key
    #[default]
    Stylish,
    /// One sentence per added, removed or updated property
    Plain,
    /// Structured JSON object
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Stylish => "stylish",
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stylish" => Ok(OutputFormat::Stylish),
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(OutputError::unknown_format(other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for controlling output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Order of sibling keys in the rendered output
    pub key_order: KeyOrdering,
    /// Wrap stylish `+`/`-` lines in ANSI colors
    pub colored: bool,
}

/// Formats a diff according to the specified format and options.
///
/// # Examples
///
/// ```
/// use gendiff::{format_diff, Diff, OutputFormat, OutputOptions};
///
/// let output = format_diff(&Diff::default(), &OutputFormat::Stylish, &OutputOptions::default()).unwrap();
/// assert_eq!(output, "{\n}");
/// ```
pub fn format_diff(
    diff: &Diff,
    format: &OutputFormat,
    options: &OutputOptions,
) -> Result<String, OutputError> {
    render_entries(&diff.entries, format, options)
}

/// Renders a bare entry sequence, as produced by [`crate::diff_mappings`].
pub fn render_entries(
    entries: &[DiffEntry],
    format: &OutputFormat,
    options: &OutputOptions,
) -> Result<String, OutputError> {
    debug!(format = %format, entries = entries.len(), "rendering diff");
    match format {
        OutputFormat::Stylish => Ok(stylish::render(entries, options)),
        OutputFormat::Plain => Ok(plain::render(entries, options)),
        OutputFormat::Json => json::render(entries, options),
    }
}

/// Siblings in rendering order.
pub(crate) fn sorted<'a>(entries: &'a [DiffEntry], order: &KeyOrdering) -> Vec<&'a DiffEntry> {
    let mut sorted: Vec<&DiffEntry> = entries.iter().collect();
    order.sort_by_key(&mut sorted, |entry| entry.key.as_str());
    sorted
}
