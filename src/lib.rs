//! gendiff - structural diff of configuration files.
//!
//! This library compares two configuration documents (JSON, YAML or TOML) key
//! by key and renders the differences as a nested "stylish" tree, as "plain"
//! sentences, or as a structured "json" object.
//!
//! # Example
//!
//! ```no_run
//! use gendiff::{compute_diff, format_diff, parse_file, DiffConfig, OutputFormat, OutputOptions};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Parse two files
//! let old = parse_file(Path::new("file1.json"))?;
//! let new = parse_file(Path::new("file2.json"))?;
//!
//! // Classify every key
//! let diff = compute_diff(&old, &new, &DiffConfig::default())?;
//!
//! // Format the output
//! let output = format_diff(&diff, &OutputFormat::Stylish, &OutputOptions::default())?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod error;
pub mod order;
pub mod output;
pub mod parser;
pub mod tree;

// Re-export commonly used types for convenience
pub use diff::{compute_diff, diff_mappings, Diff, DiffConfig, DiffEntry, DiffKind, DiffStats};
pub use error::{DiffError, GendiffError, OutputError, ParseError};
pub use order::{KeyOrder, KeyOrdering, Lexicographic};
pub use output::{format_diff, render_entries, OutputFormat, OutputOptions};
pub use parser::{
    load_document, parse_content, parse_file, parse_json, parse_toml, parse_yaml, shared_format,
    FileFormat,
};
pub use tree::{Mapping, Value};

use std::path::Path;
use tracing::info;

/// Reads, parses, diffs and renders two files in one call.
///
/// `format` is one of `"stylish"`, `"plain"` or `"json"` and is checked before
/// either file is read. Both files must share a format.
///
/// # Examples
///
/// ```no_run
/// let output = gendiff::gen_diff("file1.yml", "file2.yml", "plain")?;
/// println!("{}", output);
/// # Ok::<(), gendiff::GendiffError>(())
/// ```
pub fn gen_diff(
    path1: impl AsRef<Path>,
    path2: impl AsRef<Path>,
    format: &str,
) -> Result<String, GendiffError> {
    let format: OutputFormat = format.parse()?;
    let (path1, path2) = (path1.as_ref(), path2.as_ref());

    shared_format(path1, path2)?;

    let left = load_document(path1)?;
    let right = load_document(path2)?;

    let entries = diff_mappings(&left, &right, &DiffConfig::default())?;
    let diff = Diff::new(entries);
    info!(
        changes = diff.stats.total_changes(),
        %format,
        "compared {} and {}",
        path1.display(),
        path2.display()
    );

    Ok(format_diff(&diff, &format, &OutputOptions::default())?)
}
