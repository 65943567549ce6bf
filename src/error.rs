//! Custom error types for gendiff.

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported file format '{extension}' for {path}")]
    UnsupportedFormat { path: String, extension: String },

    #[error("Different file formats: {first} and {second}")]
    FormatMismatch { first: String, second: String },

    #[error("Document root in {path} is not a mapping")]
    NotAMapping { path: String },
}

#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    #[error("{side} document is not a mapping")]
    NotAMapping { side: &'static str },

    #[error("Nesting depth limit of {limit} exceeded at '{path}'")]
    DepthLimitExceeded { limit: usize, path: String },
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Unknown output format: {format}")]
    UnknownFormat { format: String },

    #[error("Failed to serialize to JSON: {source}")]
    JsonSerializationError {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum GendiffError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl ParseError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn json_error(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonError {
            path: path.into(),
            source,
        }
    }

    pub fn yaml_error(path: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::YamlError {
            path: path.into(),
            source,
        }
    }

    pub fn toml_error(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::TomlError {
            path: path.into(),
            source,
        }
    }

    pub fn unsupported_format(path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            path: path.into(),
            extension: extension.into(),
        }
    }

    pub fn format_mismatch(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::FormatMismatch {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn not_a_mapping(path: impl Into<String>) -> Self {
        Self::NotAMapping { path: path.into() }
    }
}

impl OutputError {
    pub fn unknown_format(format: impl Into<String>) -> Self {
        Self::UnknownFormat {
            format: format.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::file_not_found("test.json");
        assert_eq!(err.to_string(), "File not found: test.json");
    }

    #[test]
    fn test_unsupported_format_error() {
        let err = ParseError::unsupported_format("/path/to/file.txt", "txt");
        assert!(err.to_string().contains("Unsupported file format 'txt'"));
        assert!(err.to_string().contains("/path/to/file.txt"));
    }

    #[test]
    fn test_output_error_display() {
        let err = OutputError::unknown_format("xml");
        assert_eq!(err.to_string(), "Unknown output format: xml");
    }

    #[test]
    fn test_depth_error_display() {
        let err = DiffError::DepthLimitExceeded {
            limit: 2,
            path: "a.b.c".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Nesting depth limit of 2 exceeded at 'a.b.c'"
        );
    }

    #[test]
    fn test_gendiff_error_from_parse_error() {
        let parse_err = ParseError::file_not_found("test.json");
        let err: GendiffError = parse_err.into();
        assert!(matches!(err, GendiffError::Parse(_)));
        assert_eq!(err.to_string(), "File not found: test.json");
    }
}
