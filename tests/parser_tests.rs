use gendiff::{load_document, parse_file, parse_json, parse_toml, parse_yaml, FileFormat, ParseError, Value};
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

#[test]
fn test_fixture_formats_parse_to_same_tree() {
    let dir = Path::new("tests/fixtures");
    let json = parse_file(&dir.join("file1.json")).unwrap();
    let yaml = parse_file(&dir.join("file1.yml")).unwrap();
    let toml = parse_file(&dir.join("file1.toml")).unwrap();
    assert_eq!(json, yaml);
    assert_eq!(json, toml);
}

#[test]
fn test_nested_json_and_yaml_match() {
    let dir = Path::new("tests/fixtures");
    assert_eq!(
        load_document(&dir.join("nested2.json")).unwrap(),
        load_document(&dir.join("nested2.yml")).unwrap()
    );
}

#[test]
fn test_list_root_is_not_a_document() {
    let path = Path::new("tests/fixtures/list.json");
    assert!(matches!(parse_file(path).unwrap(), Value::List(_)));
    assert!(matches!(
        load_document(path).unwrap_err(),
        ParseError::NotAMapping { .. }
    ));
}

#[test]
fn test_parse_invalid_content() {
    assert!(parse_json("{\"a\": }").is_err());
    assert!(parse_yaml("key: value: invalid").is_err());
    assert!(parse_toml("key = ").is_err());
}

#[test]
fn test_invalid_file_reports_path() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    writeln!(file, "{{broken").unwrap();

    let err = parse_file(file.path()).unwrap_err();
    assert!(matches!(err, ParseError::JsonError { .. }));
    assert!(err.to_string().contains(&*file.path().to_string_lossy()));
}

#[test]
fn test_unsupported_extension() {
    let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(file, "{{}}").unwrap();

    match parse_file(file.path()).unwrap_err() {
        ParseError::UnsupportedFormat { extension, .. } => assert_eq!(extension, "txt"),
        other => panic!("Expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn test_empty_file_is_empty_mapping() {
    let file = Builder::new().suffix(".yaml").tempfile().unwrap();
    assert!(load_document(file.path()).unwrap().is_empty());
}

#[test]
fn test_format_display() {
    assert_eq!(FileFormat::Json.to_string(), "json");
    assert_eq!(FileFormat::Yaml.to_string(), "yaml");
    assert_eq!(FileFormat::Toml.to_string(), "toml");
}

#[test]
fn test_non_finite_float_is_not_read_as_string() {
    let mut file = Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(file, "a: .inf").unwrap();

    match parse_file(file.path()).unwrap_err() {
        ParseError::YamlError { source, .. } => assert!(source.to_string().contains(".inf")),
        other => panic!("Expected YamlError, got {other:?}"),
    }

    let mut quoted = Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(quoted, "a: '.inf'").unwrap();
    assert_eq!(load_document(quoted.path()).unwrap()["a"], Value::from(".inf"));
}
