//! Document loading.
//!
//! Reads YAML (or JSON) documents into untyped trees, bundles their external
//! references and builds the typed [`AsyncApi`] model.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::model::AsyncApi;
use crate::resolver::resolve_document;
use crate::types::LoadOptions;
use crate::validator::build;

/// Read and decode one document without touching its references.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// `LoadError::ReadError` if it can't be read, or `LoadError::Decode`
/// if it isn't valid YAML.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "reading document");
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    decode(&content, path)
}

/// Decode a document held in memory.
///
/// # Errors
///
/// Returns `LoadError::Decode` if the string isn't valid YAML.
pub fn load_str(content: &str) -> Result<Value, LoadError> {
    decode(content, Path::new("<string>"))
}

fn decode(content: &str, path: &Path) -> Result<Value, LoadError> {
    serde_yaml::from_str(content).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Navigate a JSON Pointer fragment (e.g. `#/components/schemas/Id`).
///
/// `#` and `#/` select the whole document.
pub fn navigate_fragment<'a>(document: &'a Value, fragment: &str) -> Option<&'a Value> {
    let pointer = fragment.trim_start_matches('#');
    if pointer.is_empty() || pointer == "/" {
        return Some(document);
    }
    document.pointer(pointer)
}

/// Load `path` and inline its external references, without validating.
///
/// # Errors
///
/// Returns the I/O or decode error of the root file, or
/// `LoadError::Reference` for the first reference that fails.
pub fn bundle(path: &Path, options: &LoadOptions) -> Result<Value, LoadError> {
    let document = load_document(path)?;
    let resolved = resolve_document(&document, path, options)?;
    Ok(resolved)
}

/// Load an AsyncAPI document with default options.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// let doc = asyncapi_model::load(Path::new("asyncapi.yaml")).unwrap();
/// for (name, channel) in &doc.channels {
///     println!("{}: {}", name, channel.operations().count());
/// }
/// ```
///
/// # Errors
///
/// See [`load_with`].
pub fn load(path: &Path) -> Result<AsyncApi, LoadError> {
    load_with(path, &LoadOptions::default())
}

/// Load, bundle and validate an AsyncAPI document.
///
/// # Errors
///
/// Fails with the first error of any phase: I/O and decode errors of the
/// root file, reference errors while bundling, or `LoadError::Invalid` for
/// the first structural violation of the bundled tree.
pub fn load_with(path: &Path, options: &LoadOptions) -> Result<AsyncApi, LoadError> {
    let tree = bundle(path, options)?;
    let model = into_model(tree, path)?;
    info!(
        path = %path.display(),
        channels = model.channels.len(),
        "loaded AsyncAPI document"
    );
    Ok(model)
}

/// Build the typed model from an already bundled tree.
pub fn into_model(tree: Value, path: &Path) -> Result<AsyncApi, LoadError> {
    build(tree).map_err(|source| LoadError::Invalid {
        path: PathBuf::from(path),
        source,
    })
}
