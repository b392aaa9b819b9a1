//! Document linting - static analysis of AsyncAPI files.
//!
//! Checks documents for:
//! - YAML syntax errors
//! - Broken $ref references (file not found, anchor not found, cycles)
//! - Structural violations against the AsyncAPI shapes
//! - Message examples that don't match their payload schema

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{LoadError, ReferenceError};
use crate::loader::{into_model, load_document, navigate_fragment};
use crate::resolver::resolve_document;
use crate::types::{pointer_push, LoadOptions, RefTarget, DEFAULT_EXTENSIONS};

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic message from linting.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub file: PathBuf,
    /// JSON Pointer to the issue (e.g. "/channels/user~1signup/publish")
    pub path: String,
    pub message: String,
}

impl Diagnostic {
    fn error(code: &str, file: &Path, path: &str, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code: code.to_string(),
            file: file.to_path_buf(),
            path: display_path(path),
            message,
        }
    }

    fn warning(code: &str, file: &Path, path: &str, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            file: file.to_path_buf(),
            path: display_path(path),
            message,
        }
    }
}

/// Result of linting a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Status of a linted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Ok,
    Error,
    Warning,
}

/// Result of linting a directory or set of files.
#[derive(Debug, Clone, Serialize)]
pub struct LintResult {
    pub path: PathBuf,
    pub files_checked: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub warnings: usize,
    pub results: Vec<FileResult>,
}

impl LintResult {
    /// Returns true if all files passed (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors == 0
    }
}

/// Lint a file or directory.
///
/// A file is always linted. In a directory, every `.yaml`/`.yml`/`.json`
/// file whose root has an `asyncapi` key is linted; other files are taken
/// to be fragments pulled in by reference and are skipped.
/// If `strict` is true, warnings are treated as errors.
pub fn lint(path: &Path, strict: bool) -> LintResult {
    lint_with(path, strict, &LoadOptions::default())
}

/// Lint with explicit reference options.
pub fn lint_with(path: &Path, strict: bool, options: &LoadOptions) -> LintResult {
    let files = collect_document_files(path);
    // Results name files relative to the linted directory, or to the file's own directory.
    let base = if path.is_file() {
        path.parent().unwrap_or(path)
    } else {
        path
    };
    let mut results = Vec::new();
    let mut total_errors = 0;
    let mut total_warnings = 0;

    for file in &files {
        let file_result = lint_file_with(file, base, options);
        total_errors += file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        total_warnings += file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        results.push(file_result);
    }

    let failed = results
        .iter()
        .filter(|r| {
            if strict {
                r.status != FileStatus::Ok
            } else {
                r.status == FileStatus::Error
            }
        })
        .count();

    LintResult {
        path: path.to_path_buf(),
        files_checked: results.len(),
        passed: results.len() - failed,
        failed,
        errors: total_errors,
        warnings: total_warnings,
        results,
    }
}

/// Lint a single AsyncAPI document.
pub fn lint_file(file: &Path, base_path: &Path) -> FileResult {
    lint_file_with(file, base_path, &LoadOptions::default())
}

fn lint_file_with(file: &Path, base_path: &Path, options: &LoadOptions) -> FileResult {
    let diagnostics = match load_document(file) {
        Ok(document) => check_document(&document, file, options),
        Err(e) => vec![Diagnostic::error(
            "E001",
            file,
            "",
            format!("syntax error: {}", e),
        )],
    };

    FileResult {
        file: file.strip_prefix(base_path).unwrap_or(file).to_path_buf(),
        status: status_of(&diagnostics),
        diagnostics,
    }
}

fn check_document(document: &Value, file: &Path, options: &LoadOptions) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let file_dir = file.parent().unwrap_or(Path::new("."));
    visit_refs(document, "", &mut |reference, path| {
        check_file_ref(reference, file, file_dir, path, options, &mut diagnostics);
    });

    // Deeper checks need a fully bundled tree; broken file refs were reported above.
    if diagnostics.is_empty() {
        match resolve_document(document, file, options) {
            Ok(tree) => check_bundled(tree, file, &mut diagnostics),
            Err(e) => diagnostics.push(reference_diagnostic(&e, file)),
        }
    }

    if document.get("id").is_none() {
        diagnostics.push(Diagnostic::warning(
            "W002",
            file,
            "",
            "document missing id field".to_string(),
        ));
    }

    diagnostics
}

fn check_bundled(tree: Value, file: &Path, diagnostics: &mut Vec<Diagnostic>) {
    // Anchors are looked up after bundling, since `components` may itself come from a file.
    visit_refs(&tree, "", &mut |reference, path| {
        if reference.starts_with('#') && navigate_fragment(&tree, reference).is_none() {
            diagnostics.push(Diagnostic::error(
                "E003",
                file,
                path,
                format!("anchor not found: {}", reference),
            ));
        }
    });

    check_examples(&tree, file, diagnostics);

    if let Err(LoadError::Invalid { source, .. }) = into_model(tree, file) {
        diagnostics.push(Diagnostic::error(
            "E004",
            file,
            source.path(),
            source.to_string(),
        ));
    }
}

fn reference_diagnostic(err: &ReferenceError, file: &Path) -> Diagnostic {
    let code = match err {
        ReferenceError::Cycle { .. } | ReferenceError::DepthExceeded { .. } => "E005",
        ReferenceError::FragmentNotFound { .. } => "E003",
        ReferenceError::Unresolvable { .. } => "E002",
    };
    Diagnostic::error(code, file, "", err.to_string())
}

/// Call `visit` with every `$ref` string in `value` and the pointer of its mapping.
fn visit_refs(value: &Value, path: &str, visit: &mut dyn FnMut(&str, &str)) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(ref_val)) = map.get("$ref") {
                visit(ref_val, path);
            }

            for (key, val) in map {
                visit_refs(val, &pointer_push(path, key), visit);
            }
        }
        Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate() {
                visit_refs(item, &pointer_push(path, &i.to_string()), visit);
            }
        }
        _ => {}
    }
}

/// Check that an external file reference points at an existing file and anchor.
fn check_file_ref(
    ref_val: &str,
    file: &Path,
    file_dir: &Path,
    path: &str,
    options: &LoadOptions,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let RefTarget::External {
        file: file_part,
        fragment,
    } = options.classify(ref_val)
    else {
        // Internal anchors are checked on the bundled tree; remote refs can't be checked locally.
        return;
    };

    let ref_path = file_dir.join(file_part);
    if !ref_path.exists() {
        diagnostics.push(Diagnostic::error(
            "E002",
            file,
            path,
            format!("file not found: {}", file_part),
        ));
        return;
    }

    let Some(frag) = fragment else {
        return;
    };
    // A referenced file that fails to decode is reported when bundling.
    if let Ok(ref_document) = load_document(&ref_path) {
        if navigate_fragment(&ref_document, frag).is_none() {
            diagnostics.push(Diagnostic::error(
                "E003",
                file,
                path,
                format!("anchor not found in {}: {}", file_part, frag),
            ));
        }
    }
}

/// Check every message example payload against its message's payload schema.
fn check_examples(tree: &Value, file: &Path, diagnostics: &mut Vec<Diagnostic>) {
    let Some(channels) = tree.get("channels").and_then(Value::as_object) else {
        return;
    };

    for (name, channel) in channels {
        for op in ["publish", "subscribe"] {
            let Some(message) = channel.get(op).and_then(|o| o.get("message")) else {
                continue;
            };
            let message = match message.get("$ref").and_then(Value::as_str) {
                Some(reference) if reference.starts_with('#') => {
                    match navigate_fragment(tree, reference) {
                        Some(target) => target,
                        None => continue,
                    }
                }
                _ => message,
            };
            let path = pointer_push(&pointer_push(&pointer_push("", "channels"), name), op);
            check_message_examples(message, tree, file, &pointer_push(&path, "message"), diagnostics);
        }
    }
}

fn check_message_examples(
    message: &Value,
    tree: &Value,
    file: &Path,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let (Some(schema), Some(examples)) = (
        message.get("payload"),
        message.get("examples").and_then(Value::as_array),
    ) else {
        return;
    };

    // Internal refs in the payload schema point into the document's components.
    let mut schema = schema.clone();
    if let (Value::Object(map), Some(components)) = (&mut schema, tree.get("components")) {
        map.entry("components").or_insert_with(|| components.clone());
    }

    // Payload schemas are a superset of JSON Schema draft-07.
    let validator = match jsonschema::options()
        .with_draft(jsonschema::Draft::Draft7)
        .build(&schema)
    {
        Ok(v) => v,
        Err(e) => {
            debug!(path, error = %e, "payload schema does not compile, skipping examples");
            return;
        }
    };

    for (i, example) in examples.iter().enumerate() {
        let Some(payload) = example.get("payload") else {
            continue;
        };
        let example_path = pointer_push(&pointer_push(&pointer_push(path, "examples"), &i.to_string()), "payload");
        for error in validator.iter_errors(payload) {
            diagnostics.push(Diagnostic::warning(
                "W001",
                file,
                &format!("{}{}", example_path, error.instance_path),
                format!("example does not match payload schema: {}", error),
            ));
        }
    }
}

fn status_of(diagnostics: &[Diagnostic]) -> FileStatus {
    if diagnostics.iter().any(|d| d.severity == Severity::Error) {
        FileStatus::Error
    } else if diagnostics.iter().any(|d| d.severity == Severity::Warning) {
        FileStatus::Warning
    } else {
        FileStatus::Ok
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// Collect the AsyncAPI documents in a path (file or directory).
fn collect_document_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    let mut files = Vec::new();
    collect_files_recursive(path, &mut files);
    files.sort();
    files
}

fn collect_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files_recursive(&path, files);
        } else if has_document_extension(&path) && is_root_document(&path) {
            files.push(path);
        }
    }
}

fn has_document_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| DEFAULT_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Undecodable files are kept so their syntax errors get reported.
fn is_root_document(path: &Path) -> bool {
    match load_document(path) {
        Ok(document) => document.get("asyncapi").is_some(),
        Err(_) => true,
    }
}
