//! Structural validation of a resolved document tree against the shape registry.
//!
//! The walker is generic: it only follows [`Kind`] descriptors, so every
//! record type is validated by the same code. Once a tree passes, serde builds
//! the typed value from it.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::shape::{EmailAddress, Kind, KeyPattern, Record, Shape};
use crate::types::{json_type_name, pointer_push};

/// Validate `node` against `kind`. `path` is the JSON Pointer of `node`.
///
/// Stops at the first violation, visiting keys in document order.
pub fn validate_node(node: &Value, kind: Kind, path: &str) -> Result<(), ValidationError> {
    match kind {
        Kind::Any => Ok(()),
        Kind::String => expect_str(node, kind, path).map(|_| ()),
        Kind::Boolean => {
            if node.is_boolean() {
                Ok(())
            } else {
                Err(mismatch(path, kind, node))
            }
        }
        Kind::Integer { min, max } => check_integer(node, min, max, path),
        Kind::Number { exclusive_min } => {
            let n = node.as_f64().ok_or_else(|| mismatch(path, kind, node))?;
            match exclusive_min {
                Some(bound) if n <= bound => Err(constraint(path, format!("> {}", bound), node)),
                _ => Ok(()),
            }
        }
        Kind::Url => {
            let s = expect_str(node, kind, path)?;
            url::Url::parse(s)
                .map(|_| ())
                .map_err(|_| constraint(path, "absolute URL".to_string(), node))
        }
        Kind::Email => {
            let s = expect_str(node, kind, path)?;
            if EmailAddress::is_valid(s) {
                Ok(())
            } else {
                Err(constraint(path, "email address".to_string(), node))
            }
        }
        Kind::Enum(values) => {
            let s = expect_str(node, kind, path)?;
            if values.contains(&s) {
                Ok(())
            } else {
                Err(constraint(path, format!("one of {}", values.join(", ")), node))
            }
        }
        Kind::Record(shape) => match node {
            Value::Object(map) => validate_record(map, shape, path),
            _ => Err(mismatch(path, kind, node)),
        },
        Kind::OrReference(shape) => match node {
            Value::Object(map) if is_reference_marker(map) => match &map["$ref"] {
                Value::String(_) => Ok(()),
                other => Err(ValidationError::TypeMismatch {
                    path: pointer_push(path, "$ref"),
                    expected: "string".to_string(),
                    actual: json_type_name(other).to_string(),
                }),
            },
            Value::Object(map) => validate_record(map, shape, path),
            _ => Err(mismatch(path, kind, node)),
        },
        Kind::List(item) => match node {
            Value::Array(items) => {
                let item_kind = item();
                for (i, value) in items.iter().enumerate() {
                    validate_node(value, item_kind, &pointer_push(path, &i.to_string()))?;
                }
                Ok(())
            }
            _ => Err(mismatch(path, kind, node)),
        },
        Kind::Map { keys, values } => match node {
            Value::Object(map) => validate_map(map, keys, values(), path),
            _ => Err(mismatch(path, kind, node)),
        },
        Kind::Either(a, b) => {
            let (a, b) = (a(), b());
            if a.admits(node) {
                validate_node(node, a, path)
            } else if b.admits(node) {
                validate_node(node, b, path)
            } else {
                Err(mismatch(path, kind, node))
            }
        }
    }
}

/// Validate `node` as an instance of `shape`.
pub fn validate_shape(node: &Value, shape: &'static Shape) -> Result<(), ValidationError> {
    validate_node(node, Kind::Record(shape), "")
}

/// Validate `node` against `T`'s shape, then build the typed value.
///
/// # Errors
///
/// Returns the first structural violation. The tree is fully checked before
/// any value is constructed, so no partial model escapes.
pub fn build<T: Record>(node: Value) -> Result<T, ValidationError> {
    let shape = T::shape();
    validate_shape(&node, shape)?;
    serde_json::from_value(node).map_err(|e| ValidationError::TypeMismatch {
        path: String::new(),
        expected: shape.name.to_string(),
        actual: e.to_string(),
    })
}

/// A mapping whose only key is `$ref`.
fn is_reference_marker(map: &Map<String, Value>) -> bool {
    map.len() == 1 && map.contains_key("$ref")
}

fn validate_record(
    map: &Map<String, Value>,
    shape: &'static Shape,
    path: &str,
) -> Result<(), ValidationError> {
    if let Some(key) = map.keys().find(|key| shape.field(key).is_none()) {
        return Err(ValidationError::UnknownField {
            path: path.to_string(),
            shape: shape.name,
            key: key.clone(),
        });
    }

    if let Some(field) = shape.required_fields().find(|f| !map.contains_key(f.wire)) {
        return Err(ValidationError::MissingField {
            path: path.to_string(),
            shape: shape.name,
            field: field.wire,
        });
    }

    for (key, value) in map {
        let Some(field) = shape.field(key) else {
            continue;
        };
        // Explicit null on an optional field reads as absent.
        if value.is_null() && !field.required && field.default.is_none() {
            continue;
        }
        validate_node(value, (field.kind)(), &pointer_push(path, key))?;
    }
    Ok(())
}

fn validate_map(
    map: &Map<String, Value>,
    keys: Option<&'static KeyPattern>,
    values: Kind,
    path: &str,
) -> Result<(), ValidationError> {
    for (key, value) in map {
        let child = pointer_push(path, key);
        if let Some(pattern) = keys {
            if !pattern.is_match(key) {
                return Err(ValidationError::Constraint {
                    path: child,
                    constraint: format!("{} key matching {}", pattern.name(), pattern.source()),
                    value: Value::String(key.clone()).to_string(),
                });
            }
        }
        validate_node(value, values, &child)?;
    }
    Ok(())
}

fn check_integer(
    node: &Value,
    min: Option<i64>,
    max: Option<i64>,
    path: &str,
) -> Result<(), ValidationError> {
    let n = match (node.as_i64(), node.as_u64()) {
        (Some(n), _) => i128::from(n),
        (None, Some(n)) => i128::from(n),
        _ => return Err(mismatch(path, Kind::Integer { min, max }, node)),
    };

    let below = min.is_some_and(|min| n < i128::from(min));
    let above = max.is_some_and(|max| n > i128::from(max));
    if !below && !above {
        return Ok(());
    }

    let bound = match (min, max) {
        (Some(min), Some(max)) => format!("between {} and {}", min, max),
        (Some(min), None) => format!(">= {}", min),
        (None, Some(max)) => format!("<= {}", max),
        (None, None) => unreachable!("unbounded integers always pass"),
    };
    Err(constraint(path, bound, node))
}

fn expect_str<'a>(node: &'a Value, kind: Kind, path: &str) -> Result<&'a str, ValidationError> {
    node.as_str().ok_or_else(|| mismatch(path, kind, node))
}

fn mismatch(path: &str, expected: Kind, node: &Value) -> ValidationError {
    ValidationError::TypeMismatch {
        path: path.to_string(),
        expected: expected.to_string(),
        actual: json_type_name(node).to_string(),
    }
}

fn constraint(path: &str, constraint: String, node: &Value) -> ValidationError {
    ValidationError::Constraint {
        path: path.to_string(),
        constraint,
        value: node.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bindings::{
        AmqpExchange, AmqpExchangeType, AmqpOperationBinding, MqttServerBinding,
    };
    use crate::model::{AsyncApi, Info, OrRef, Schema, SchemaType, Server};
    use serde_json::json;

    #[test]
    fn info_rejects_unknown_field() {
        let err = validate_shape(&json!({"foo": 1}), Info::shape()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownField {
                path: String::new(),
                shape: "Info",
                key: "foo".to_string(),
            }
        );
    }

    #[test]
    fn info_accepts_required_fields() {
        let info: Info = build(json!({"title": "t", "version": "1"})).unwrap();
        assert_eq!(info.title, "t");
        assert_eq!(info.version, "1");
        assert!(info.description.is_none());
    }

    #[test]
    fn info_missing_version() {
        let err = validate_shape(&json!({"title": "t"}), Info::shape()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField {
                shape: "Info",
                field: "version",
                ..
            }
        ));
    }

    #[test]
    fn amqp_exchange_type_enum() {
        let err = validate_shape(&json!({"type": "invalid-kind"}), AmqpExchange::shape())
            .unwrap_err();
        match err {
            ValidationError::Constraint {
                path,
                constraint,
                value,
            } => {
                assert_eq!(path, "/type");
                assert_eq!(constraint, "one of topic, direct, fanout, headers, default");
                assert_eq!(value, "\"invalid-kind\"");
            }
            other => panic!("unexpected error {other:?}"),
        }

        let exchange: AmqpExchange = build(json!({"type": "topic"})).unwrap();
        assert_eq!(exchange.param_type, Some(AmqpExchangeType::Topic));
    }

    #[test]
    fn unknown_field_reported_before_missing_field() {
        let err = validate_shape(&json!({"title": "t", "foo": 1}), Info::shape()).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { .. }));
    }

    #[test]
    fn nested_paths_are_json_pointers() {
        let doc = json!({
            "info": {"title": "t", "version": "1"},
            "channels": {
                "user/signup": {
                    "publish": {"message": {"payload": {"type": 7}}}
                }
            }
        });
        let err = validate_shape(&doc, AsyncApi::shape()).unwrap_err();
        assert_eq!(err.path(), "/channels/user~1signup/publish/message/payload/type");
        assert!(matches!(err, ValidationError::TypeMismatch { .. }));
    }

    #[test]
    fn lone_ref_selects_reference() {
        let doc = json!({"url": "mqtt://broker", "protocol": "mqtt", "bindings": {"$ref": "#/components/serverBindings/mqtt"}});
        let server: Server = build(doc).unwrap();
        assert!(server.bindings.unwrap().is_reference());

        let err = validate_shape(
            &json!({"url": "u", "protocol": "p", "bindings": {"$ref": 1}}),
            Server::shape(),
        )
        .unwrap_err();
        assert_eq!(err.path(), "/bindings/$ref");
    }

    #[test]
    fn ref_with_siblings_is_validated_as_item() {
        let err = validate_shape(
            &json!({"url": "u", "protocol": "p", "bindings": {"$ref": "#/x", "mqtt": {}}}),
            Server::shape(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnknownField { ref key, shape: "ServerBindings", .. } if key == "$ref"
        ));
    }

    #[test]
    fn bounded_integer() {
        let err = validate_shape(
            &json!({"lastWill": {"qos": 3}}),
            MqttServerBinding::shape(),
        )
        .unwrap_err();
        match err {
            ValidationError::Constraint {
                path, constraint, ..
            } => {
                assert_eq!(path, "/lastWill/qos");
                assert_eq!(constraint, "between 0 and 2");
            }
            other => panic!("unexpected error {other:?}"),
        }

        let err = validate_shape(&json!({"keepAlive": -1}), MqttServerBinding::shape())
            .unwrap_err();
        assert!(matches!(err, ValidationError::Constraint { ref constraint, .. } if constraint == ">= 0"));

        let err = validate_shape(&json!({"keepAlive": 1.5}), MqttServerBinding::shape())
            .unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { .. }));
    }

    #[test]
    fn integer_beyond_i64_range_names_the_field() {
        let doc = json!({"priority": 9_223_372_036_854_775_808u64});
        let err = build::<AmqpOperationBinding>(doc).unwrap_err();
        match err {
            ValidationError::Constraint {
                path,
                constraint,
                value,
            } => {
                assert_eq!(path, "/priority");
                assert_eq!(
                    constraint,
                    "between -9223372036854775808 and 9223372036854775807"
                );
                assert_eq!(value, "9223372036854775808");
            }
            other => panic!("unexpected error {other:?}"),
        }

        let binding: AmqpOperationBinding = build(json!({"priority": -5})).unwrap();
        assert_eq!(binding.priority, Some(-5));
    }

    #[test]
    fn url_fields_must_parse() {
        let err = validate_shape(
            &json!({"title": "t", "version": "1", "termsOfService": "not a url"}),
            Info::shape(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::Constraint { ref constraint, .. } if constraint == "absolute URL"));
    }

    #[test]
    fn email_must_look_like_address() {
        let err = validate_shape(
            &json!({"title": "t", "version": "1", "contact": {"email": "nobody"}}),
            Info::shape(),
        )
        .unwrap_err();
        assert_eq!(err.path(), "/contact/email");
    }

    #[test]
    fn server_names_must_match_pattern() {
        let doc = json!({
            "info": {"title": "t", "version": "1"},
            "channels": {},
            "servers": {"bad name": {"url": "u", "protocol": "p"}}
        });
        let err = validate_shape(&doc, AsyncApi::shape()).unwrap_err();
        match err {
            ValidationError::Constraint { path, value, .. } => {
                assert_eq!(path, "/servers/bad name");
                assert_eq!(value, "\"bad name\"");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn null_optional_field_is_absent() {
        let info: Info =
            build(json!({"title": "t", "version": "1", "description": null})).unwrap();
        assert!(info.description.is_none());
    }

    #[test]
    fn null_required_field_is_a_mismatch() {
        let err = validate_shape(&json!({"title": null, "version": "1"}), Info::shape())
            .unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { ref path, .. } if path == "/title"));
    }

    #[test]
    fn schema_type_single_or_list() {
        let schema: Schema = build(json!({"type": ["string", "null"]})).unwrap();
        assert!(matches!(schema.param_type, Some(SchemaType::Multiple(ref t)) if t.len() == 2));

        let err = validate_shape(&json!({"type": ["string", "text"]}), Schema::shape())
            .unwrap_err();
        assert_eq!(err.path(), "/type/1");

        let err = validate_shape(&json!({"type": 1}), Schema::shape()).unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { .. }));
    }

    #[test]
    fn schema_properties_may_be_references() {
        let schema: Schema = build(json!({
            "type": "object",
            "properties": {
                "id": {"$ref": "#/components/schemas/Id"},
                "name": {"type": "string"}
            }
        }))
        .unwrap();
        let properties = schema.properties.unwrap();
        assert!(properties["id"].is_reference());
    }

    #[test]
    fn defaults_fill_absent_fields() {
        let doc: AsyncApi = build(json!({
            "info": {"title": "t", "version": "1"},
            "channels": {}
        }))
        .unwrap();
        assert_eq!(doc.asyncapi.as_str(), "2.3.0");
        assert!(doc.channels.is_empty());
    }

    #[test]
    fn or_ref_items_build() {
        let value: OrRef<Info> = serde_json::from_value(json!({"title": "t", "version": "1"}))
            .unwrap();
        assert!(!value.is_reference());
    }
}
