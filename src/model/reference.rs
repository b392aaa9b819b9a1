use serde::{Deserialize, Serialize};

use crate::shape::{Describe, Kind, Record};
use crate::types::COMPONENTS_PREFIX;

shape! {
    /// A pointer to another object. Internal references start with
    /// `#/components/`; anything the bundler left in place (remote URLs,
    /// unrecognised files) is kept verbatim.
    pub struct Reference {
        "$ref" => reference: String,
    }
}

impl Reference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    pub fn is_internal(&self) -> bool {
        self.reference.starts_with('#')
    }

    /// Split `#/components/<section>/<name>` into `(section, name)`.
    pub fn component(&self) -> Option<(&str, &str)> {
        let rest = self.reference.strip_prefix(COMPONENTS_PREFIX)?;
        let (section, name) = rest.split_once('/')?;
        if section.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some((section, name))
    }
}

/// `Union[T, Reference]`: a lone `$ref` key selects the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrRef<T> {
    Reference(Reference),
    Item(T),
}

impl<T> OrRef<T> {
    pub fn as_item(&self) -> Option<&T> {
        match self {
            OrRef::Item(item) => Some(item),
            OrRef::Reference(_) => None,
        }
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            OrRef::Reference(reference) => Some(reference),
            OrRef::Item(_) => None,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, OrRef::Reference(_))
    }
}

impl<T: Record> Describe for OrRef<T> {
    fn kind() -> Kind {
        Kind::OrReference(T::shape())
    }
}
