//! Structured JSON rendering.
//!
//! Each property maps to a wrapper object describing its change:
//!
//! ```json
//! {
//!     "host": "hexlet.io",
//!     "settings": {
//!         "log": {
//!             "type": "added",
//!             "value": true
//!         }
//!     },
//!     "timeout": {
//!         "type": "changed",
//!         "oldValue": 50,
//!         "newValue": 20
//!     }
//! }
//! ```
//!
//! Unchanged properties hold their bare value and nested properties hold the
//! rendered object of their children, without a wrapper.

use super::OutputOptions;
use crate::diff::{DiffEntry, DiffKind};
use crate::error::OutputError;
use crate::order::KeyOrdering;
use crate::tree::Value;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

pub fn render(entries: &[DiffEntry], options: &OutputOptions) -> Result<String, OutputError> {
    let view = EntriesView {
        entries,
        order: &options.key_order,
    };

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    view.serialize(&mut serializer)
        .map_err(|e| OutputError::JsonSerializationError { source: e })?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

struct EntriesView<'a> {
    entries: &'a [DiffEntry],
    order: &'a KeyOrdering,
}

impl Serialize for EntriesView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in super::sorted(self.entries, self.order) {
            map.serialize_entry(
                &entry.key,
                &EntryView {
                    entry,
                    order: self.order,
                },
            )?;
        }
        map.end()
    }
}

struct EntryView<'a> {
    entry: &'a DiffEntry,
    order: &'a KeyOrdering,
}

impl Serialize for EntryView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let order = self.order;
        let view = |value| ValueView { value, order };

        match &self.entry.kind {
            DiffKind::Added(value) | DiffKind::Removed(value) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", self.entry.kind_name())?;
                map.serialize_entry("value", &view(value))?;
                map.end()
            }
            DiffKind::Changed {
                old_value,
                new_value,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", self.entry.kind_name())?;
                map.serialize_entry("oldValue", &view(old_value))?;
                map.serialize_entry("newValue", &view(new_value))?;
                map.end()
            }
            DiffKind::Unchanged(value) => view(value).serialize(serializer),
            DiffKind::Nested(children) => EntriesView {
                entries: children,
                order,
            }
            .serialize(serializer),
        }
    }
}

/// A plain value with mapping keys in rendering order.
struct ValueView<'a> {
    value: &'a Value,
    order: &'a KeyOrdering,
}

impl Serialize for ValueView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Mapping(map) => {
                let mut keys: Vec<&String> = map.keys().collect();
                self.order.sort(&mut keys);
                let mut out = serializer.serialize_map(Some(keys.len()))?;
                for key in keys {
                    out.serialize_entry(
                        key,
                        &ValueView {
                            value: &map[key],
                            order: self.order,
                        },
                    )?;
                }
                out.end()
            }
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&ValueView {
                        value: item,
                        order: self.order,
                    })?;
                }
                seq.end()
            }
            scalar => scalar.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Mapping;
    use serde_json::json;

    fn render_default(entries: &[DiffEntry]) -> String {
        render(entries, &OutputOptions::default()).unwrap()
    }

    #[test]
    fn test_changed_wrapper() {
        let entries = vec![DiffEntry::changed("timeout", Value::from(50), Value::from(20))];
        let output = render_default(&entries);
        let expected = "{\n    \"timeout\": {\n        \"type\": \"changed\",\n        \"oldValue\": 50,\n        \"newValue\": 20\n    }\n}";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_unchanged_is_bare_value() {
        let entries = vec![DiffEntry::unchanged("host", Value::from("hexlet.io"))];
        let parsed: serde_json::Value = serde_json::from_str(&render_default(&entries)).unwrap();
        assert_eq!(parsed, json!({"host": "hexlet.io"}));
    }

    #[test]
    fn test_nested_has_no_wrapper() {
        let entries = vec![DiffEntry::nested(
            "settings",
            vec![
                DiffEntry::added("log", Value::from(true)),
                DiffEntry::removed("level", Value::Null),
            ],
        )];
        let parsed: serde_json::Value = serde_json::from_str(&render_default(&entries)).unwrap();
        assert_eq!(
            parsed,
            json!({
                "settings": {
                    "level": {"type": "removed", "value": null},
                    "log": {"type": "added", "value": true}
                }
            })
        );
    }

    #[test]
    fn test_mapping_leaf_is_plain_object() {
        let mut inner = Mapping::new();
        inner.insert("key5".to_string(), Value::from("value5"));
        inner.insert("list".to_string(), Value::List(vec![Value::from(1)]));
        let entries = vec![DiffEntry::added("setting5", Value::Mapping(inner))];
        let parsed: serde_json::Value = serde_json::from_str(&render_default(&entries)).unwrap();
        assert_eq!(
            parsed,
            json!({"setting5": {"type": "added", "value": {"key5": "value5", "list": [1]}}})
        );
    }

    #[test]
    fn test_top_level_keys_sorted() {
        let entries = vec![
            DiffEntry::added("zeta", Value::from(1)),
            DiffEntry::added("alpha", Value::from(2)),
        ];
        let output = render_default(&entries);
        let alpha = output.find("\"alpha\"").unwrap();
        let zeta = output.find("\"zeta\"").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn test_module_example_layout() {
        let entries = vec![
            DiffEntry::changed("timeout", Value::from(50), Value::from(20)),
            DiffEntry::nested("settings", vec![DiffEntry::added("log", Value::from(true))]),
            DiffEntry::unchanged("host", Value::from("hexlet.io")),
        ];
        let expected = r#"{
    "host": "hexlet.io",
    "settings": {
        "log": {
            "type": "added",
            "value": true
        }
    },
    "timeout": {
        "type": "changed",
        "oldValue": 50,
        "newValue": 20
    }
}"#;
        assert_eq!(render_default(&entries), expected);
    }

    #[test]
    fn test_empty_entries() {
        assert_eq!(render_default(&[]), "{}");
    }
}
