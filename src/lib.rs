//! AsyncAPI 2.3.0 document model
//!
//! Loads an AsyncAPI document from disk, inlines references to other local
//! document files, and validates the result against a closed-world typed
//! model of the specification.
//!
//! # Example
//!
//! ```
//! use asyncapi_model::{build, AsyncApi};
//! use serde_json::json;
//!
//! let tree = json!({
//!     "asyncapi": "2.3.0",
//!     "info": { "title": "Account Service", "version": "1.0.0" },
//!     "channels": {
//!         "user/signedup": {
//!             "subscribe": {
//!                 "message": { "$ref": "#/components/messages/UserSignedUp" }
//!             }
//!         }
//!     },
//!     "components": {
//!         "messages": {
//!             "UserSignedUp": {
//!                 "payload": { "type": "object" }
//!             }
//!         }
//!     }
//! });
//!
//! let doc: AsyncApi = build(tree).unwrap();
//! let channel = doc.channel("user/signedup").unwrap();
//! let reference = channel.subscribe.as_ref().unwrap().message.as_ref().unwrap();
//! let reference = reference.as_reference().unwrap();
//! assert!(doc.components.as_ref().unwrap().resolve_message(reference).is_some());
//! ```
//!
//! # Reference handling
//!
//! | `$ref` value | Treatment |
//! |--------------|-----------|
//! | `#/components/...` | kept; look up with [`Components`] or [`AsyncApi::lookup_component`] |
//! | `path/to/file.yaml` | file loaded relative to the referencing file and inlined |
//! | `file.yaml#/pointer` | file loaded, pointer selected, result inlined |
//! | `scheme://...` (`https`, `file`, `ftp`, ...), other suffixes | kept verbatim |
//!
//! Unknown keys are rejected at every level of the document.

#[macro_use]
mod shape;

mod error;
mod linter;
mod loader;
mod resolver;
mod types;
mod validator;

pub mod model;

pub use error::{ErrorKind, LoadError, ReferenceError, ValidationError};
pub use linter::{
    lint, lint_file, lint_with, Diagnostic, FileResult, FileStatus, LintResult, Severity,
};
pub use loader::{bundle, into_model, load, load_document, load_str, load_with, navigate_fragment};
pub use model::{shape_by_name, shapes, AsyncApi, Components, Reference};
pub use resolver::{resolve, resolve_with};
pub use shape::{
    Bounded, Describe, EmailAddress, Field, KeyPattern, Kind, MapKey, PositiveNumber, Record, Shape,
};
pub use types::{LoadOptions, RefTarget, DEFAULT_EXTENSIONS, DEFAULT_MAX_DEPTH};
pub use validator::{build, validate_node, validate_shape};
