//! Error types for AsyncAPI document loading, reference bundling and validation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors while turning a file on disk into a typed document.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid YAML in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    // Structural errors (exit code 1)
    #[error("{} is not a valid AsyncAPI document: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

/// Errors while inlining external `$ref` pointers.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("cannot resolve $ref \"{reference}\" in {}: {source}", referrer.display())]
    Unresolvable {
        reference: String,
        referrer: PathBuf,
        #[source]
        source: Box<LoadError>,
    },

    #[error("fragment {fragment} not found while resolving $ref \"{reference}\"")]
    FragmentNotFound { reference: String, fragment: String },

    #[error("reference cycle: {}", format_chain(chain))]
    Cycle { chain: Vec<String> },

    #[error("reference nesting exceeds depth limit {limit}: {}", format_chain(chain))]
    DepthExceeded { limit: usize, chain: Vec<String> },
}

/// A single structural violation found while building the typed model.
///
/// `path` is an RFC 6901 JSON Pointer into the resolved document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}: unknown field `{key}` in {shape}", display_path(path))]
    UnknownField {
        path: String,
        shape: &'static str,
        key: String,
    },

    #[error("{}: missing required field `{field}` in {shape}", display_path(path))]
    MissingField {
        path: String,
        shape: &'static str,
        field: &'static str,
    },

    #[error("{}: expected {expected}, got {actual}", display_path(path))]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("{}: {value} violates constraint: {constraint}", display_path(path))]
    Constraint {
        path: String,
        constraint: String,
        value: String,
    },
}

/// The kinds of failure a `load` call can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Io,
    Decode,
    Reference,
    ReferenceCycle,
    UnknownField,
    MissingField,
    TypeMismatch,
    Constraint,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Io => "io",
            ErrorKind::Decode => "decode",
            ErrorKind::Reference => "reference",
            ErrorKind::ReferenceCycle => "reference_cycle",
            ErrorKind::UnknownField => "unknown_field",
            ErrorKind::MissingField => "missing_field",
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::Constraint => "constraint",
        };
        f.write_str(name)
    }
}

impl LoadError {
    /// Classifies this error.
    ///
    /// A failure inside an externally referenced file is reported as
    /// [`ErrorKind::Reference`], whatever went wrong in that file.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => ErrorKind::Io,
            LoadError::Decode { .. } => ErrorKind::Decode,
            LoadError::Reference(e) => e.kind(),
            LoadError::Invalid { source, .. } => source.kind(),
        }
    }

    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Io => 3,
            ErrorKind::Decode | ErrorKind::Reference | ErrorKind::ReferenceCycle => 2,
            _ => 1,
        }
    }

    /// The structural violation, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            LoadError::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ReferenceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReferenceError::Cycle { .. } | ReferenceError::DepthExceeded { .. } => {
                ErrorKind::ReferenceCycle
            }
            _ => ErrorKind::Reference,
        }
    }
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::UnknownField { .. } => ErrorKind::UnknownField,
            ValidationError::MissingField { .. } => ErrorKind::MissingField,
            ValidationError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ValidationError::Constraint { .. } => ErrorKind::Constraint,
        }
    }

    /// JSON Pointer of the offending node.
    pub fn path(&self) -> &str {
        match self {
            ValidationError::UnknownField { path, .. }
            | ValidationError::MissingField { path, .. }
            | ValidationError::TypeMismatch { path, .. }
            | ValidationError::Constraint { path, .. } => path,
        }
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

fn format_chain(chain: &[String]) -> String {
    chain.join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_exit_codes() {
        let err = LoadError::FileNotFound {
            path: PathBuf::from("asyncapi.yaml"),
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.kind(), ErrorKind::Io);

        let err = LoadError::Reference(ReferenceError::Cycle {
            chain: vec!["a.yaml".into(), "b.yaml".into(), "a.yaml".into()],
        });
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.kind(), ErrorKind::ReferenceCycle);

        let err = LoadError::Invalid {
            path: PathBuf::from("asyncapi.yaml"),
            source: ValidationError::MissingField {
                path: "/info".into(),
                shape: "Info",
                field: "version",
            },
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }

    #[test]
    fn nested_reference_failure_is_a_reference_error() {
        let inner = LoadError::FileNotFound {
            path: PathBuf::from("missing.yaml"),
        };
        let err = LoadError::Reference(ReferenceError::Unresolvable {
            reference: "missing.yaml".into(),
            referrer: PathBuf::from("root.yaml"),
            source: Box::new(inner),
        });
        assert_eq!(err.kind(), ErrorKind::Reference);
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn cycle_display_lists_chain() {
        let err = ReferenceError::Cycle {
            chain: vec!["a.yaml".into(), "b.yaml".into(), "a.yaml".into()],
        };
        assert_eq!(
            err.to_string(),
            "reference cycle: a.yaml -> b.yaml -> a.yaml"
        );
    }

    #[test]
    fn validation_error_display() {
        let err = ValidationError::UnknownField {
            path: "/info".into(),
            shape: "Info",
            key: "foo".into(),
        };
        assert_eq!(err.to_string(), "/info: unknown field `foo` in Info");

        let err = ValidationError::Constraint {
            path: "/channels/events/bindings/amqp/exchange/type".into(),
            constraint: "one of topic, direct, fanout, headers, default".into(),
            value: "\"invalid-kind\"".into(),
        };
        assert_eq!(
            err.to_string(),
            "/channels/events/bindings/amqp/exchange/type: \"invalid-kind\" violates constraint: one of topic, direct, fanout, headers, default"
        );
    }

    #[test]
    fn root_path_displays_as_slash() {
        let err = ValidationError::MissingField {
            path: String::new(),
            shape: "AsyncApi",
            field: "info",
        };
        assert_eq!(err.to_string(), "/: missing required field `info` in AsyncApi");
    }
}
