//! Core types shared by the loader, resolver and validator.

use serde_json::Value;

/// Prefix of internal pointers into the document's `components` table.
pub const COMPONENTS_PREFIX: &str = "#/components/";

/// File suffixes treated as external documents by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Default bound on how deeply external files may include each other.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Append one reference token to a JSON Pointer (RFC 6901 escaping).
pub fn pointer_push(path: &str, token: &str) -> String {
    let escaped = token.replace('~', "~0").replace('/', "~1");
    format!("{}/{}", path, escaped)
}

/// Split a `$ref` value into its file part and optional `#fragment`.
pub fn split_reference(reference: &str) -> (&str, Option<&str>) {
    match reference.find('#') {
        Some(idx) => (&reference[..idx], Some(&reference[idx..])),
        None => (reference, None),
    }
}

/// Check if a string carries a URL scheme (`http://`, `file://`, `ftp://`, ...).
pub fn is_url(s: &str) -> bool {
    let Some((scheme, _)) = s.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// How the resolver treats a `$ref` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefTarget<'a> {
    /// Pointer inside the current document (`#/components/...`). Left in place.
    Internal,
    /// Local file to inline, with an optional JSON Pointer fragment.
    External {
        file: &'a str,
        fragment: Option<&'a str>,
    },
    /// Remote URL or unrecognised suffix. Left in place.
    Opaque,
}

/// Options for document loading.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// File suffixes (without the dot) that mark a `$ref` as an external file.
    pub extensions: Vec<String>,
    /// Maximum nesting of external files before loading is aborted.
    pub max_depth: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LoadOptions {
    /// Create options with the default extensions and depth bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recognised external-file suffixes.
    ///
    /// Leading dots are stripped and suffixes are matched case-insensitively.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    /// Set the maximum external-file nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Classify a `$ref` value.
    pub fn classify<'a>(&self, reference: &'a str) -> RefTarget<'a> {
        if reference.starts_with('#') {
            return RefTarget::Internal;
        }
        if is_url(reference) {
            return RefTarget::Opaque;
        }

        let (file, fragment) = split_reference(reference);
        let recognised = std::path::Path::new(file)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                let e = e.to_lowercase();
                self.extensions.iter().any(|known| *known == e)
            })
            .unwrap_or(false);

        if recognised {
            RefTarget::External { file, fragment }
        } else {
            RefTarget::Opaque
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_internal() {
        let options = LoadOptions::default();
        assert_eq!(
            options.classify("#/components/schemas/User"),
            RefTarget::Internal
        );
        assert_eq!(options.classify("#/channels/x"), RefTarget::Internal);
    }

    #[test]
    fn classify_external_yaml() {
        let options = LoadOptions::default();
        assert_eq!(
            options.classify("channels/user.yaml"),
            RefTarget::External {
                file: "channels/user.yaml",
                fragment: None
            }
        );
        assert_eq!(
            options.classify("common.YML#/components/schemas/Id"),
            RefTarget::External {
                file: "common.YML",
                fragment: Some("#/components/schemas/Id")
            }
        );
    }

    #[test]
    fn classify_opaque() {
        let options = LoadOptions::default();
        assert_eq!(
            options.classify("https://example.com/schema.yaml"),
            RefTarget::Opaque
        );
        assert_eq!(options.classify("file:///abs/a.yaml"), RefTarget::Opaque);
        assert_eq!(
            options.classify("ftp://host/a.yaml#/components"),
            RefTarget::Opaque
        );
        assert_eq!(options.classify("schema.avsc"), RefTarget::Opaque);
        assert_eq!(options.classify("noextension"), RefTarget::Opaque);
    }

    #[test]
    fn custom_extensions_replace_defaults() {
        let options = LoadOptions::new().extensions([".yaml"]);
        assert!(matches!(
            options.classify("a.yaml"),
            RefTarget::External { .. }
        ));
        assert_eq!(options.classify("a.json"), RefTarget::Opaque);
    }

    #[test]
    fn pointer_push_escapes_tokens() {
        assert_eq!(pointer_push("", "channels"), "/channels");
        assert_eq!(
            pointer_push("/channels", "user/signup"),
            "/channels/user~1signup"
        );
        assert_eq!(pointer_push("", "a~b"), "/a~0b");
    }

    #[test]
    fn url_needs_a_scheme() {
        assert!(is_url("http://example.com/a.yaml"));
        assert!(is_url("svn+ssh://host/a.yaml"));
        assert!(!is_url("dir/a.yaml"));
        assert!(!is_url("://a.yaml"));
        assert!(!is_url("1ab://a.yaml"));
    }

    #[test]
    fn split_reference_fragment() {
        assert_eq!(split_reference("a.yaml"), ("a.yaml", None));
        assert_eq!(split_reference("a.yaml#/x"), ("a.yaml", Some("#/x")));
    }
}
