//! Dotted-path sentence rendering.
//!
//! ```text
//! Property 'common.follow' was added with value: false
//! Property 'common.setting2' was removed
//! Property 'common.setting3' was updated. From true to null
//! ```

use super::{sorted, OutputOptions};
use crate::diff::{join_path, DiffEntry, DiffKind};
use crate::tree::Value;

pub fn render(entries: &[DiffEntry], options: &OutputOptions) -> String {
    let mut lines = Vec::new();
    collect_lines(entries, "", options, &mut lines);
    lines.join("\n")
}

fn collect_lines(entries: &[DiffEntry], parent: &str, options: &OutputOptions, lines: &mut Vec<String>) {
    for entry in sorted(entries, &options.key_order) {
        let path = join_path(parent, &entry.key);
        match &entry.kind {
            DiffKind::Added(value) => lines.push(format!(
                "Property '{}' was added with value: {}",
                path,
                stringify(value)
            )),
            DiffKind::Removed(_) => lines.push(format!("Property '{}' was removed", path)),
            DiffKind::Changed {
                old_value,
                new_value,
            } => lines.push(format!(
                "Property '{}' was updated. From {} to {}",
                path,
                stringify(old_value),
                stringify(new_value)
            )),
            DiffKind::Nested(children) => collect_lines(children, &path, options, lines),
            DiffKind::Unchanged(_) => {}
        }
    }
}

fn stringify(value: &Value) -> String {
    match value {
        complex if complex.is_complex() => "[complex value]".to_string(),
        Value::String(s) => format!("'{}'", escape(s)),
        scalar => scalar.to_string(),
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
