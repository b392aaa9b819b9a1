//! External `$ref` inlining.
//!
//! Builds a new tree in which every reference to a local document file is
//! replaced by that file's contents, themselves resolved against the
//! referenced file's directory. Internal (`#...`) and opaque references
//! (remote URLs, unrecognised suffixes) are copied through untouched.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::ReferenceError;
use crate::loader::{load_document, navigate_fragment};
use crate::types::{LoadOptions, RefTarget};

/// Inline every external reference below `node` with default options.
///
/// Relative file paths are resolved against `base_dir`.
///
/// # Errors
///
/// Fails on the first reference that cannot be loaded, whose fragment does
/// not exist, or that leads back into a file already being expanded.
pub fn resolve(node: &Value, base_dir: &Path) -> Result<Value, ReferenceError> {
    resolve_with(node, base_dir, &LoadOptions::default())
}

/// Inline every external reference below `node`.
pub fn resolve_with(
    node: &Value,
    base_dir: &Path,
    options: &LoadOptions,
) -> Result<Value, ReferenceError> {
    let mut resolver = Resolver::new(options, base_dir.to_path_buf());
    resolver.walk(node, base_dir)
}

/// Resolve the tree decoded from `file`.
///
/// `file` itself counts as being expanded, so a reference back to the root
/// document is reported as a cycle.
pub(crate) fn resolve_document(
    node: &Value,
    file: &Path,
    options: &LoadOptions,
) -> Result<Value, ReferenceError> {
    let base_dir = file.parent().unwrap_or(Path::new("."));
    let mut resolver = Resolver::new(options, file.to_path_buf());
    resolver.stack.push(Frame {
        key: frame_key(file, None),
        file: file.to_path_buf(),
    });
    resolver.walk(node, base_dir)
}

/// A file (and fragment) currently being expanded.
struct Frame {
    key: String,
    file: PathBuf,
}

struct Resolver<'a> {
    options: &'a LoadOptions,
    /// Reported as the referrer of references found outside any loaded file.
    origin: PathBuf,
    stack: Vec<Frame>,
    depth: usize,
}

impl<'a> Resolver<'a> {
    fn new(options: &'a LoadOptions, origin: PathBuf) -> Self {
        Self {
            options,
            origin,
            stack: Vec::new(),
            depth: 0,
        }
    }

    fn walk(&mut self, node: &Value, base_dir: &Path) -> Result<Value, ReferenceError> {
        match node {
            Value::Object(map) => {
                if let Some(Value::String(reference)) = map.get("$ref") {
                    match self.options.classify(reference) {
                        RefTarget::External { file, fragment } => {
                            return self.inline(reference, file, fragment, base_dir);
                        }
                        RefTarget::Internal => {
                            trace!(reference = %reference, "leaving internal $ref");
                        }
                        RefTarget::Opaque => {
                            trace!(reference = %reference, "leaving opaque $ref");
                        }
                    }
                }

                let mut out = Map::with_capacity(map.len());
                for (key, value) in map {
                    out.insert(key.clone(), self.walk(value, base_dir)?);
                }
                Ok(Value::Object(out))
            }
            Value::Array(items) => items
                .iter()
                .map(|item| self.walk(item, base_dir))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            scalar => Ok(scalar.clone()),
        }
    }

    /// Frames currently being expanded, followed by `next`.
    fn chain_to(&self, next: String) -> Vec<String> {
        let mut chain: Vec<String> = self.stack.iter().map(|f| f.key.clone()).collect();
        chain.push(next);
        chain
    }

    /// Load `file`, select `fragment`, and resolve the result in place of the
    /// reference marker. Sibling keys of `$ref` are dropped.
    fn inline(
        &mut self,
        reference: &str,
        file: &str,
        fragment: Option<&str>,
        base_dir: &Path,
    ) -> Result<Value, ReferenceError> {
        let target = base_dir.join(file);
        let key = frame_key(&target, fragment);

        if self.stack.iter().any(|frame| frame.key == key) {
            return Err(ReferenceError::Cycle {
                chain: self.chain_to(key),
            });
        }
        if self.depth >= self.options.max_depth {
            return Err(ReferenceError::DepthExceeded {
                limit: self.options.max_depth,
                chain: self.chain_to(key),
            });
        }

        let referrer = self
            .stack
            .last()
            .map(|frame| frame.file.clone())
            .unwrap_or_else(|| self.origin.clone());

        debug!(reference, file = %target.display(), "inlining external $ref");
        let document =
            load_document(&target).map_err(|source| ReferenceError::Unresolvable {
                reference: reference.to_string(),
                referrer,
                source: Box::new(source),
            })?;

        let selected = match fragment {
            Some(fragment) => navigate_fragment(&document, fragment).ok_or_else(|| {
                ReferenceError::FragmentNotFound {
                    reference: reference.to_string(),
                    fragment: fragment.to_string(),
                }
            })?,
            None => &document,
        };

        let target_dir = target.parent().unwrap_or(base_dir).to_path_buf();
        self.stack.push(Frame {
            key,
            file: target,
        });
        self.depth += 1;
        let resolved = self.walk(selected, &target_dir);
        self.depth -= 1;
        self.stack.pop();
        resolved
    }
}

/// Identity of an expansion: canonical path plus fragment.
fn frame_key(file: &Path, fragment: Option<&str>) -> String {
    let canonical = file.canonicalize().unwrap_or_else(|_| file.to_path_buf());
    format!("{}{}", canonical.display(), fragment.unwrap_or(""))
}
