use gendiff::{gen_diff, DiffError, GendiffError, OutputError, ParseError};

#[test]
fn test_parse_error_display() {
    let err = ParseError::file_not_found("test.json");
    assert_eq!(err.to_string(), "File not found: test.json");
}

#[test]
fn test_output_error_display() {
    let err = OutputError::UnknownFormat {
        format: "xml".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown output format: xml");
}

#[test]
fn test_gendiff_error_from_diff_error() {
    let err: GendiffError = DiffError::NotAMapping { side: "left" }.into();
    assert!(matches!(err, GendiffError::Diff(_)));
    assert_eq!(err.to_string(), "left document is not a mapping");
}

#[test]
fn test_gen_diff_rejects_unknown_format_first() {
    let err = gen_diff("missing1.json", "missing2.json", "xml").unwrap_err();
    assert!(matches!(
        err,
        GendiffError::Output(OutputError::UnknownFormat { ref format }) if format == "xml"
    ));
}

#[test]
fn test_gen_diff_missing_file() {
    let err = gen_diff("tests/fixtures/nonexistent.json", "tests/fixtures/file1.json", "stylish")
        .unwrap_err();
    assert!(matches!(
        err,
        GendiffError::Parse(ParseError::FileNotFound { .. })
    ));
}

#[test]
fn test_gen_diff_format_mismatch() {
    let err = gen_diff("tests/fixtures/file1.json", "tests/fixtures/file2.yml", "stylish")
        .unwrap_err();
    assert_eq!(err.to_string(), "Different file formats: json and yaml");
}

#[test]
fn test_gen_diff_success() {
    let output = gen_diff("tests/fixtures/file1.yml", "tests/fixtures/file2.yml", "plain").unwrap();
    assert_eq!(
        output,
        "Property 'follow' was removed\n\
         Property 'proxy' was removed\n\
         Property 'timeout' was updated. From 50 to 20\n\
         Property 'verbose' was added with value: true"
    );
}
