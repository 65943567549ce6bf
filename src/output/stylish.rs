//! Nested-brace rendering.
//!
//! ```text
//! {
//!     common: {
//!       + follow: false
//!         setting1: Value 1
//!       - setting2: 200
//!     }
//! }
//! ```
//!
//! A block at depth `d` closes at `4*d` spaces. Entry lines carry a two
//! character marker at `4*d + 2` and the key at `4*d + 4`.

use super::{sorted, OutputOptions};
use crate::diff::{DiffEntry, DiffKind};
use crate::order::KeyOrdering;
use crate::tree::Value;
use colored::Colorize;

const INDENT: usize = 4;

pub fn render(entries: &[DiffEntry], options: &OutputOptions) -> String {
    render_block(entries, 0, options)
}

fn render_block(entries: &[DiffEntry], depth: usize, options: &OutputOptions) -> String {
    let mut lines = vec!["{".to_string()];
    for entry in sorted(entries, &options.key_order) {
        render_entry(entry, depth, options, &mut lines);
    }
    lines.push(format!("{}}}", indent(depth * INDENT)));
    lines.join("\n")
}

fn render_entry(entry: &DiffEntry, depth: usize, options: &OutputOptions, lines: &mut Vec<String>) {
    let key = &entry.key;
    let text = |value: &Value| stringify(value, depth + 1, &options.key_order);
    let line = |marker: Marker, value: &str| marked_line(marker, key, value, depth, options);

    match &entry.kind {
        DiffKind::Added(value) => lines.push(line(Marker::Added, &text(value))),
        DiffKind::Removed(value) => lines.push(line(Marker::Removed, &text(value))),
        DiffKind::Changed {
            old_value,
            new_value,
        } => {
            lines.push(line(Marker::Removed, &text(old_value)));
            lines.push(line(Marker::Added, &text(new_value)));
        }
        DiffKind::Unchanged(value) => lines.push(line(Marker::Same, &text(value))),
        DiffKind::Nested(children) => {
            let block = render_block(children, depth + 1, options);
            lines.push(line(Marker::Same, &block));
        }
    }
}

#[derive(Clone, Copy)]
enum Marker {
    Added,
    Removed,
    Same,
}

fn marked_line(marker: Marker, key: &str, value: &str, depth: usize, options: &OutputOptions) -> String {
    let sign = match marker {
        Marker::Added => "+ ",
        Marker::Removed => "- ",
        Marker::Same => "  ",
    };
    let body = format!("{}{}: {}", sign, key, value);
    let body = match (options.colored, marker) {
        (true, Marker::Added) => body.green().to_string(),
        (true, Marker::Removed) => body.red().to_string(),
        _ => body,
    };
    format!("{}{}", indent(depth * INDENT + 2), body)
}

/// Text of a value whose entry line belongs to the block at `depth - 1`.
///
/// A mapping opens a brace block: its lines sit at `4*depth + 4` and the
/// closing brace at `4*depth`, under the first character of the owning key.
fn stringify(value: &Value, depth: usize, order: &KeyOrdering) -> String {
    let Value::Mapping(map) = value else {
        return value.to_string();
    };

    let mut keys: Vec<&String> = map.keys().collect();
    order.sort(&mut keys);

    let mut lines = vec!["{".to_string()];
    for key in keys {
        lines.push(format!(
            "{}{}: {}",
            indent(depth * INDENT + INDENT),
            key,
            stringify(&map[key], depth + 1, order)
        ));
    }
    lines.push(format!("{}}}", indent(depth * INDENT)));
    lines.join("\n")
}

fn indent(width: usize) -> String {
    " ".repeat(width)
}
