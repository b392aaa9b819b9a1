//! Shape registry mechanics.
//!
//! Every AsyncAPI object type is declared once with [`shape!`]. The macro
//! emits the Rust struct (with serde aliases and `deny_unknown_fields`) and a
//! static [`Shape`] table describing the same fields. The validator walks the
//! table generically; serde then builds the typed value.
//!
//! Field kinds are derived from the Rust field type through [`Describe`], so
//! the table and the struct cannot disagree:
//!
//! | Rust type | [`Kind`] | required |
//! |-----------|----------|----------|
//! | `String` | `String` | yes |
//! | `Option<T>` | kind of `T` | no |
//! | `Vec<T>` | `List` | yes |
//! | `BTreeMap<K, V>` | `Map` (keys checked against `K`'s pattern) | yes |
//! | `OrRef<T>` | `OrReference` | yes |
//! | `i64` | `Integer` within `i64` range | yes |
//! | `Bounded<MIN, MAX>` | `Integer` with bounds | yes |
//!
//! Fields flagged `[default]` are never required.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The declared type of one field.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    String,
    Integer { min: Option<i64>, max: Option<i64> },
    Number { exclusive_min: Option<f64> },
    Boolean,
    /// Absolute URL.
    Url,
    Email,
    /// Any value, kept as-is.
    Any,
    /// Closed set of string values.
    Enum(&'static [&'static str]),
    Record(&'static Shape),
    /// `Union[Shape, Reference]`: a lone `$ref` key selects the reference.
    OrReference(&'static Shape),
    List(fn() -> Kind),
    Map {
        keys: Option<&'static KeyPattern>,
        values: fn() -> Kind,
    },
    /// Two alternatives, picked by the JSON type of the value.
    Either(fn() -> Kind, fn() -> Kind),
}

impl Kind {
    /// Shallow check that `value` has the JSON type this kind expects.
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            Kind::String | Kind::Url | Kind::Email | Kind::Enum(_) => value.is_string(),
            Kind::Integer { .. } => value.is_i64() || value.is_u64(),
            Kind::Number { .. } => value.is_number(),
            Kind::Boolean => value.is_boolean(),
            Kind::Any => true,
            Kind::Record(_) | Kind::OrReference(_) | Kind::Map { .. } => value.is_object(),
            Kind::List(_) => value.is_array(),
            Kind::Either(a, b) => a().admits(value) || b().admits(value),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::String => f.write_str("string"),
            Kind::Integer { .. } => f.write_str("integer"),
            Kind::Number { .. } => f.write_str("number"),
            Kind::Boolean => f.write_str("boolean"),
            Kind::Url => f.write_str("URL string"),
            Kind::Email => f.write_str("email string"),
            Kind::Any => f.write_str("any value"),
            Kind::Enum(_) => f.write_str("string"),
            Kind::Record(shape) => write!(f, "{} object", shape.name),
            Kind::OrReference(shape) => write!(f, "{} object or Reference", shape.name),
            Kind::List(item) => write!(f, "array of {}", item()),
            Kind::Map { values, .. } => write!(f, "map of {}", values()),
            Kind::Either(a, b) => write!(f, "{} or {}", a(), b()),
        }
    }
}

/// One field of a [`Shape`].
#[derive(Debug)]
pub struct Field {
    /// Key in the document.
    pub wire: &'static str,
    /// Rust field name; differs from `wire` for aliased keys (`$ref`, `type`, `is`, ...).
    pub name: &'static str,
    pub required: bool,
    pub kind: fn() -> Kind,
    pub default: Option<fn() -> Value>,
}

/// Field table of one record type. Closed-world: keys outside `fields` are rejected.
#[derive(Debug)]
pub struct Shape {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Shape {
    /// Look up a field by its document key.
    pub fn field(&self, wire: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.wire == wire)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static Field> {
        self.fields.iter().filter(|f| f.required)
    }
}

/// Pattern every key of a map must match.
pub struct KeyPattern {
    name: &'static str,
    source: &'static str,
    compiled: OnceLock<Regex>,
}

impl KeyPattern {
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        Self {
            name,
            source,
            compiled: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn is_match(&self, key: &str) -> bool {
        self.compiled
            .get_or_init(|| Regex::new(self.source).expect("key patterns are valid regexes"))
            .is_match(key)
    }
}

impl fmt::Debug for KeyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPattern")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish()
    }
}

/// Maps a Rust field type to its [`Kind`].
pub trait Describe {
    /// Whether the field may be left out of the document.
    const OPTIONAL: bool = false;

    fn kind() -> Kind;

    /// Used to skip absent optional fields when serializing.
    fn is_absent(&self) -> bool {
        false
    }
}

/// A type with its own field table.
pub trait Record: Describe + DeserializeOwned {
    fn shape() -> &'static Shape;
}

/// Key type of a map field.
pub trait MapKey: Ord {
    fn pattern() -> Option<&'static KeyPattern>;
}

impl Describe for String {
    fn kind() -> Kind {
        Kind::String
    }
}

impl Describe for bool {
    fn kind() -> Kind {
        Kind::Boolean
    }
}

impl Describe for i64 {
    fn kind() -> Kind {
        Kind::Integer {
            min: Some(i64::MIN),
            max: Some(i64::MAX),
        }
    }
}

impl Describe for u64 {
    fn kind() -> Kind {
        Kind::Integer {
            min: Some(0),
            max: None,
        }
    }
}

impl Describe for f64 {
    fn kind() -> Kind {
        Kind::Number {
            exclusive_min: None,
        }
    }
}

impl Describe for Value {
    fn kind() -> Kind {
        Kind::Any
    }
}

impl Describe for url::Url {
    fn kind() -> Kind {
        Kind::Url
    }
}

impl<T: Describe> Describe for Option<T> {
    const OPTIONAL: bool = true;

    fn kind() -> Kind {
        T::kind()
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Describe> Describe for Box<T> {
    const OPTIONAL: bool = T::OPTIONAL;

    fn kind() -> Kind {
        T::kind()
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn kind() -> Kind {
        Kind::List(T::kind)
    }
}

impl<K: MapKey, V: Describe> Describe for BTreeMap<K, V> {
    fn kind() -> Kind {
        Kind::Map {
            keys: K::pattern(),
            values: V::kind,
        }
    }
}

impl MapKey for String {
    fn pattern() -> Option<&'static KeyPattern> {
        None
    }
}

/// Integer restricted to `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bounded<const MIN: i64, const MAX: i64>(pub i64);

impl<const MIN: i64, const MAX: i64> Bounded<MIN, MAX> {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl<const MIN: i64, const MAX: i64> Describe for Bounded<MIN, MAX> {
    fn kind() -> Kind {
        Kind::Integer {
            min: Some(MIN),
            max: Some(MAX),
        }
    }
}

/// Number strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositiveNumber(pub f64);

impl Describe for PositiveNumber {
    fn kind() -> Kind {
        Kind::Number {
            exclusive_min: Some(0.0),
        }
    }
}

/// String holding an email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(pub String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Loose structural check: one `@`, non-empty local part, dotted domain, no whitespace.
    pub fn is_valid(s: &str) -> bool {
        match s.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !s.chars().any(char::is_whitespace)
            }
            None => false,
        }
    }
}

impl Describe for EmailAddress {
    fn kind() -> Kind {
        Kind::Email
    }
}

/// Declare a closed-world record type and its field table.
///
/// ```ignore
/// shape! {
///     /// Contact information for the exposed API.
///     pub struct Contact {
///         "name" => name: Option<String>,
///         "url" => url: Option<url::Url>,
///     }
/// }
/// ```
macro_rules! shape {
    (@has_default) => {
        false
    };
    (@has_default default) => {
        true
    };
    (@default $ty:ty) => {
        None
    };
    (@default $ty:ty, default) => {{
        fn default_value() -> serde_json::Value {
            serde_json::to_value(<$ty as Default>::default()).unwrap_or(serde_json::Value::Null)
        }
        Some(default_value as fn() -> serde_json::Value)
    }};
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $wire:literal => $field:ident : $ty:ty $([$flag:ident])?,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire)]
                #[serde(skip_serializing_if = "crate::shape::Describe::is_absent")]
                $(#[serde($flag)])?
                pub $field: $ty,
            )*
        }

        impl crate::shape::Describe for $name {
            fn kind() -> crate::shape::Kind {
                crate::shape::Kind::Record(<Self as crate::shape::Record>::shape())
            }
        }

        impl crate::shape::Record for $name {
            fn shape() -> &'static crate::shape::Shape {
                static SHAPE: crate::shape::Shape = crate::shape::Shape {
                    name: stringify!($name),
                    fields: &[
                        $(
                            crate::shape::Field {
                                wire: $wire,
                                name: stringify!($field),
                                required: !<$ty as crate::shape::Describe>::OPTIONAL
                                    && !shape!(@has_default $($flag)?),
                                kind: <$ty as crate::shape::Describe>::kind,
                                default: shape!(@default $ty $(, $flag)?),
                            },
                        )*
                    ],
                };
                &SHAPE
            }
        }
    };
}

/// Declare a closed string enumeration.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )*
        }

        impl $name {
            /// Accepted document values.
            pub const VALUES: &'static [&'static str] = &[$($wire),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl crate::shape::Describe for $name {
            fn kind() -> crate::shape::Kind {
                crate::shape::Kind::Enum(Self::VALUES)
            }
        }
    };
}

/// Declare a string newtype used as a pattern-constrained map key.
macro_rules! pattern_key {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $pattern:literal;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl crate::shape::MapKey for $name {
            fn pattern() -> Option<&'static crate::shape::KeyPattern> {
                static PATTERN: crate::shape::KeyPattern =
                    crate::shape::KeyPattern::new(stringify!($name), $pattern);
                Some(&PATTERN)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_is_optional() {
        assert!(<Option<String> as Describe>::OPTIONAL);
        assert!(!<String as Describe>::OPTIONAL);
        assert!(<Box<Option<String>> as Describe>::OPTIONAL);
    }

    #[test]
    fn kind_admits_by_json_type() {
        assert!(Kind::String.admits(&json!("x")));
        assert!(!Kind::String.admits(&json!(1)));
        assert!(u64::kind().admits(&json!(3)));
        assert!(!u64::kind().admits(&json!(1.5)));
        assert!(Kind::Any.admits(&Value::Null));
        assert!(<Vec<String>>::kind().admits(&json!([])));
    }

    #[test]
    fn either_admits_both_sides() {
        let kind = Kind::Either(bool::kind, String::kind);
        assert!(kind.admits(&json!(true)));
        assert!(kind.admits(&json!("x")));
        assert!(!kind.admits(&json!(1)));
        assert_eq!(kind.to_string(), "boolean or string");
    }

    #[test]
    fn key_pattern_matches() {
        static IDENT: KeyPattern = KeyPattern::new("Ident", r"^[A-Za-z0-9_\-]+$");
        assert!(IDENT.is_match("production-1"));
        assert!(!IDENT.is_match("has space"));
        assert_eq!(IDENT.name(), "Ident");
    }

    #[test]
    fn bounded_kind_carries_limits() {
        match <Bounded<0, 2>>::kind() {
            Kind::Integer { min, max } => {
                assert_eq!(min, Some(0));
                assert_eq!(max, Some(2));
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn email_check() {
        assert!(EmailAddress::is_valid("support@example.com"));
        assert!(!EmailAddress::is_valid("support.example.com"));
        assert!(!EmailAddress::is_valid("@example.com"));
        assert!(!EmailAddress::is_valid("a@b@example.com"));
        assert!(!EmailAddress::is_valid("a@localhost"));
        assert!(!EmailAddress::is_valid("a b@example.com"));
    }
}
