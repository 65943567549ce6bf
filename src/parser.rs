//! File parsing for JSON, YAML and TOML formats.
//!
//! This module turns configuration text into the [`Value`] tree the differ
//! works on. The format of a file is chosen from its extension; files with any
//! other extension are rejected rather than guessed at.
//!
//! # Examples
//!
//! ```no_run
//! use gendiff::parser::parse_file;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Parse a JSON file
//! let value = parse_file(Path::new("file1.json"))?;
//!
//! // Parse a YAML file
//! let value = parse_file(Path::new("file1.yml"))?;
//! # Ok(())
//! # }
//! ```

use crate::error::ParseError;
use crate::tree::{Mapping, Number, Value};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Input document format, selected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
    Toml,
}

impl FileFormat {
    /// Detects the format from `path`'s extension, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use gendiff::parser::FileFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(FileFormat::from_path(Path::new("a.YML")).unwrap(), FileFormat::Yaml);
    /// assert!(FileFormat::from_path(Path::new("a.ini")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(FileFormat::Json),
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "toml" => Ok(FileFormat::Toml),
            _ => Err(ParseError::unsupported_format(
                path.to_string_lossy().to_string(),
                extension,
            )),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileFormat::Json => "json",
            FileFormat::Yaml => "yaml",
            FileFormat::Toml => "toml",
        })
    }
}

/// Returns the format both paths share.
///
/// Fails with `ParseError::FormatMismatch` when the extensions select
/// different formats.
pub fn shared_format(first: &Path, second: &Path) -> Result<FileFormat, ParseError> {
    let format = FileFormat::from_path(first)?;
    let other = FileFormat::from_path(second)?;
    if format != other {
        return Err(ParseError::format_mismatch(format.to_string(), other.to_string()));
    }
    Ok(format)
}

/// Parses a file into a [`Value`].
///
/// # Errors
///
/// This function will return an error if:
/// - The file does not exist (`ParseError::FileNotFound`)
/// - The file cannot be read (`ParseError::ReadError`)
/// - The extension is not `.json`, `.yaml`, `.yml` or `.toml` (`ParseError::UnsupportedFormat`)
/// - The content is not valid for its format (`JsonError`, `YamlError`, `TomlError`)
pub fn parse_file(path: &Path) -> Result<Value, ParseError> {
    let format = FileFormat::from_path(path)?;

    if !path.exists() {
        return Err(ParseError::file_not_found(
            path.to_string_lossy().to_string(),
        ));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy().to_string(), e))?;

    debug!(path = %path.display(), %format, bytes = content.len(), "parsing file");
    parse_content(&content, format, &path.to_string_lossy())
}

/// Parses a file whose document root must be a mapping.
pub fn load_document(path: &Path) -> Result<Mapping, ParseError> {
    match parse_file(path)? {
        Value::Mapping(map) => Ok(map),
        _ => Err(ParseError::not_a_mapping(
            path.to_string_lossy().to_string(),
        )),
    }
}

/// Parses `content` in the given format. `origin` names the source in errors.
///
/// Empty or whitespace-only content yields an empty mapping.
pub fn parse_content(content: &str, format: FileFormat, origin: &str) -> Result<Value, ParseError> {
    if content.trim().is_empty() {
        return Ok(Value::Mapping(Mapping::new()));
    }

    match format {
        FileFormat::Json => parse_json(content).map_err(|e| ParseError::json_error(origin, e)),
        FileFormat::Yaml => parse_yaml(content).map_err(|e| ParseError::yaml_error(origin, e)),
        FileFormat::Toml => parse_toml(content).map_err(|e| ParseError::toml_error(origin, e)),
    }
}

/// Parses a JSON string into a [`Value`].
///
/// # Examples
///
/// ```
/// use gendiff::parser::parse_json;
///
/// let json = r#"{"host": "hexlet.io", "timeout": 50}"#;
/// let value = parse_json(json).unwrap();
/// assert!(value.is_mapping());
/// ```
pub fn parse_json(content: &str) -> Result<Value, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(json_to_value(value))
}

/// Parses a YAML string into a [`Value`].
///
/// # Examples
///
/// ```
/// use gendiff::parser::parse_yaml;
///
/// let yaml = "host: hexlet.io\ntimeout: 50";
/// let value = parse_yaml(yaml).unwrap();
/// assert!(value.is_mapping());
/// ```
pub fn parse_yaml(content: &str) -> Result<Value, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    yaml_to_value(value)
}

/// Parses a TOML document into a [`Value::Mapping`].
pub fn parse_toml(content: &str) -> Result<Value, toml::de::Error> {
    let table: toml::Table = toml::from_str(content)?;
    toml_to_value(toml::Value::Table(table))
}

fn json_to_value(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::List(arr.into_iter().map(json_to_value).collect()),
        serde_json::Value::Object(obj) => {
            Value::Mapping(obj.into_iter().map(|(k, v)| (k, json_to_value(v))).collect())
        }
    }
}

/// Converts YAML into a [`Value`].
///
/// Anchors and merge keys are already resolved by the parser. Tags are dropped.
/// Non-string mapping keys are converted to strings; when two keys stringify to
/// the same text the later one wins. `.inf` and `.nan` are rejected.
fn yaml_to_value(value: serde_yaml::Value) -> Result<Value, serde_yaml::Error> {
    Ok(match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number(&n)?,
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => Value::List(
            seq.into_iter()
                .map(yaml_to_value)
                .collect::<Result<_, _>>()?,
        ),
        serde_yaml::Value::Mapping(map) => {
            let mut mapping = Mapping::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    serde_yaml::Value::Null => "null".to_string(),
                    other => format!("{:?}", other),
                };
                let value = yaml_to_value(v)?;
                if mapping.contains_key(&key) {
                    debug!(%key, "duplicate key after stringification, keeping the later value");
                }
                mapping.insert(key, value);
            }
            Value::Mapping(mapping)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_value(tagged.value)?,
    })
}

fn yaml_number(n: &serde_yaml::Number) -> Result<Value, serde_yaml::Error> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Number(i.into()))
    } else if let Some(u) = n.as_u64() {
        Ok(Value::Number(u.into()))
    } else {
        finite_number(n.as_f64().unwrap_or(f64::NAN), &n.to_string())
    }
}

fn toml_to_value(value: toml::Value) -> Result<Value, toml::de::Error> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => finite_number(f, &f.to_string())?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::List(
            arr.into_iter()
                .map(toml_to_value)
                .collect::<Result<_, _>>()?,
        ),
        toml::Value::Table(table) => Value::Mapping(
            table
                .into_iter()
                .map(|(k, v)| Ok((k, toml_to_value(v)?)))
                .collect::<Result<_, toml::de::Error>>()?,
        ),
    })
}

/// Infinities and NaN have no number form in the tree and are refused.
fn finite_number<E: serde::de::Error>(f: f64, text: &str) -> Result<Value, E> {
    Number::from_f64(f)
        .map(Value::Number)
        .ok_or_else(|| E::custom(format!("unsupported non-finite number: {}", text)))
}
