//! In-memory representation of a parsed configuration document.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::collections::BTreeMap;
use std::fmt;

pub use serde_json::Number;

/// String-keyed children of a [`Value::Mapping`]. Keys are unique.
pub type Mapping = BTreeMap<String, Value>;

/// A node of a parsed JSON, YAML or TOML document.
///
/// Only [`Value::Mapping`] is compared structurally by the differ. Every other
/// variant, [`Value::List`] included, is an opaque leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// Integers and floats stay distinct: `1` is not equal to `1.0`.
    Number(Number),
    String(String),
    List(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Mapping(_) => "mapping",
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns true for mappings and lists.
    pub fn is_complex(&self) -> bool {
        matches!(self, Value::Mapping(_) | Value::List(_))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Mapping(iter.into_iter().collect())
    }
}

/// Scalar text: `true`/`false`, `null`, canonical number text, strings verbatim.
///
/// Lists print inline as `[a, b]`; mappings print as `{key: value, ...}`.
/// Renderers that need block layout for mappings do their own traversal.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::from(50).to_string(), "50");
        assert_eq!(Value::from("hexlet.io").to_string(), "hexlet.io");
        assert_eq!(Value::from("").to_string(), "");
    }

    #[test]
    fn test_display_float_keeps_fraction() {
        let n = Number::from_f64(1.5).unwrap();
        assert_eq!(Value::Number(n).to_string(), "1.5");
    }

    #[test]
    fn test_display_list() {
        let list = Value::List(vec![Value::from(1), Value::from("a"), Value::Null]);
        assert_eq!(list.to_string(), "[1, a, null]");
    }

    #[test]
    fn test_equality_is_type_exact() {
        assert_ne!(Value::from(0), Value::Bool(false));
        assert_ne!(Value::Null, Value::Bool(false));
        assert_ne!(Value::from("20"), Value::from(20));
        let float_one = Value::Number(Number::from_f64(1.0).unwrap());
        assert_ne!(Value::from(1), float_one);
    }

    #[test]
    fn test_serialize_mapping() {
        let value: Value = [
            ("b".to_string(), Value::from(true)),
            ("a".to_string(), Value::List(vec![Value::from(1)])),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"a":[1],"b":true}"#);
    }
}
