//! End-to-end loading tests: reference bundling, validation and the typed model.

use std::fs;
use std::path::PathBuf;

use asyncapi_model::model::bindings::AmqpChannelType;
use asyncapi_model::model::{AsyncApi, Info};
use asyncapi_model::{
    build, bundle, load, load_with, resolve, validate_shape, ErrorKind, LoadError, LoadOptions,
    Record, ReferenceError, ValidationError,
};
use serde_json::json;
use tempfile::TempDir;

fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

const ROOT: &str = r#"asyncapi: 2.3.0
info:
  title: Account Service
  version: 1.0.0
channels:
  user/signup:
    $ref: channel.yaml
"#;

const CHANNEL: &str = r#"description: Signup events
publish:
  operationId: onUserSignUp
  message:
    name: UserSignedUp
    payload:
      type: object
      properties:
        email:
          type: string
          format: email
"#;

mod resolution {
    use super::*;

    #[test]
    fn no_external_refs_is_identity() {
        let dir = TempDir::new().unwrap();
        let tree = json!({
            "info": {"title": "t", "version": "1"},
            "channels": {"a": {"publish": {"message": {"$ref": "#/components/messages/A"}}}}
        });
        assert_eq!(resolve(&tree, dir.path()).unwrap(), tree);
    }

    #[test]
    fn inlining_removes_ref_key() {
        let dir = TempDir::new().unwrap();
        write_temp_file(&dir, "sub.yaml", "a: 1\n");

        let resolved = resolve(&json!({"$ref": "sub.yaml"}), dir.path()).unwrap();
        assert_eq!(resolved, json!({"a": 1}));
    }

    #[test]
    fn internal_ref_untouched() {
        let dir = TempDir::new().unwrap();
        let node = json!({"$ref": "#/components/schemas/Foo"});
        assert_eq!(resolve(&node, dir.path()).unwrap(), node);
    }

    #[test]
    fn transitive_chain() {
        let dir = TempDir::new().unwrap();
        write_temp_file(&dir, "a.yaml", "$ref: b.yaml\n");
        write_temp_file(&dir, "b.yaml", "x: 1\n");

        let resolved = resolve(&json!({"$ref": "a.yaml"}), dir.path()).unwrap();
        assert_eq!(resolved, json!({"x": 1}));
    }

    #[test]
    fn lookup_relative_to_referencing_file() {
        let dir = TempDir::new().unwrap();
        write_temp_file(&dir, "dir/a.yaml", "$ref: b.yaml\n");
        write_temp_file(&dir, "dir/b.yaml", "where: dir\n");
        write_temp_file(&dir, "b.yaml", "where: root\n");

        let resolved = resolve(&json!({"$ref": "dir/a.yaml"}), dir.path()).unwrap();
        assert_eq!(resolved, json!({"where": "dir"}));
    }
}

mod validation {
    use super::*;

    #[test]
    fn info_closed_world() {
        let err = validate_shape(&json!({"foo": 1}), Info::shape()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownField);

        assert!(validate_shape(&json!({"title": "t", "version": "1"}), Info::shape()).is_ok());
    }

    #[test]
    fn info_required_version() {
        let err = validate_shape(&json!({"title": "t"}), Info::shape()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField {
                field: "version",
                ..
            }
        ));
    }

    #[test]
    fn amqp_exchange_type() {
        let exchange = asyncapi_model::shape_by_name("AmqpExchange").unwrap();
        let err = validate_shape(&json!({"type": "invalid-kind"}), exchange).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Constraint);
        assert!(validate_shape(&json!({"type": "topic"}), exchange).is_ok());
    }

    #[test]
    fn unknown_top_level_key_rejected() {
        let err = build::<AsyncApi>(json!({
            "info": {"title": "t", "version": "1"},
            "channels": {},
            "paths": {}
        }))
        .unwrap_err();
        assert!(
            matches!(err, ValidationError::UnknownField { ref key, shape: "AsyncApi", .. } if key == "paths")
        );
    }
}

mod end_to_end {
    use super::*;

    #[test]
    fn channel_from_external_file() {
        let dir = TempDir::new().unwrap();
        let root = write_temp_file(&dir, "asyncapi.yaml", ROOT);
        write_temp_file(&dir, "channel.yaml", CHANNEL);

        let doc = load(&root).unwrap();
        let channel = doc.channel("user/signup").unwrap();
        let publish = channel.publish.as_ref().unwrap();
        assert_eq!(publish.operation_id.as_deref(), Some("onUserSignUp"));

        let message = publish.message.as_ref().unwrap().as_item().unwrap();
        assert_eq!(message.name.as_deref(), Some("UserSignedUp"));
        assert_eq!(
            message.payload.as_ref().unwrap().required_properties().count(),
            0
        );
        assert_eq!(doc.asyncapi.as_str(), "2.3.0");
    }

    #[test]
    fn fragment_refs_into_shared_components() {
        let dir = TempDir::new().unwrap();
        let root = write_temp_file(
            &dir,
            "asyncapi.yaml",
            r#"asyncapi: 2.3.0
info: {title: t, version: '1'}
channels:
  events:
    bindings:
      amqp:
        is: routingKey
        exchange:
          $ref: shared/amqp.yaml#/exchanges/events
    subscribe:
      message:
        $ref: '#/components/messages/Event'
components:
  messages:
    Event:
      payload:
        $ref: shared/schemas.yaml#/Event
"#,
        );
        write_temp_file(
            &dir,
            "shared/amqp.yaml",
            "exchanges:\n  events:\n    name: events\n    type: topic\n    durable: true\n",
        );
        write_temp_file(
            &dir,
            "shared/schemas.yaml",
            "Event:\n  type: object\n  properties:\n    id:\n      $ref: ids.yaml\n",
        );
        write_temp_file(&dir, "shared/ids.yaml", "type: string\nformat: uuid\n");

        let doc = load(&root).unwrap();
        let bindings = doc.channel("events").unwrap().bindings.as_ref().unwrap();
        let amqp = bindings.as_item().unwrap().amqp.as_ref().unwrap();
        assert_eq!(amqp.param_is, Some(AmqpChannelType::RoutingKey));
        assert_eq!(
            amqp.exchange.as_ref().unwrap().name.as_deref(),
            Some("events")
        );

        let components = doc.components.as_ref().unwrap();
        let event = components.message("Event").unwrap();
        let id = &event.payload.as_ref().unwrap().properties.as_ref().unwrap()["id"];
        assert_eq!(id.format.as_deref(), Some("uuid"));

        let subscribe = doc.channel("events").unwrap().subscribe.as_ref().unwrap();
        let reference = subscribe.message.as_ref().unwrap().as_reference().unwrap();
        assert_eq!(reference.component(), Some(("messages", "Event")));
        assert!(doc.lookup_component(reference).is_some());
    }

    #[test]
    fn missing_root_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn malformed_root_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let root = write_temp_file(&dir, "asyncapi.yaml", "info: {title: t\n");
        let err = load(&root).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.to_string().contains("asyncapi.yaml"));
    }

    #[test]
    fn broken_external_file_is_reference_error() {
        let dir = TempDir::new().unwrap();
        let root = write_temp_file(&dir, "asyncapi.yaml", ROOT);
        write_temp_file(&dir, "channel.yaml", "publish: [\n");

        let err = load(&root).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Reference);
        match err {
            LoadError::Reference(ReferenceError::Unresolvable { reference, .. }) => {
                assert_eq!(reference, "channel.yaml");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn cycle_between_files() {
        let dir = TempDir::new().unwrap();
        let root = write_temp_file(&dir, "asyncapi.yaml", ROOT);
        write_temp_file(&dir, "channel.yaml", "publish:\n  message:\n    $ref: message.yaml\n");
        write_temp_file(&dir, "message.yaml", "payload:\n  $ref: channel.yaml\n");

        let err = load(&root).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ReferenceCycle);
        assert!(err.to_string().starts_with("reference cycle: "));
    }

    #[test]
    fn structural_error_names_field_path() {
        let dir = TempDir::new().unwrap();
        let root = write_temp_file(&dir, "asyncapi.yaml", ROOT);
        write_temp_file(
            &dir,
            "channel.yaml",
            "publish:\n  message:\n    bindings:\n      mqtt:\n        qos: 1\n",
        );

        let err = load(&root).unwrap_err();
        let violation = err.validation().unwrap();
        assert_eq!(
            violation.path(),
            "/channels/user~1signup/publish/message/bindings/mqtt"
        );
        assert!(matches!(
            violation,
            ValidationError::UnknownField { shape: "MqttMessageBinding", .. }
        ));
    }

    #[test]
    fn bundle_yields_self_contained_tree() {
        let dir = TempDir::new().unwrap();
        let root = write_temp_file(&dir, "asyncapi.yaml", ROOT);
        write_temp_file(&dir, "channel.yaml", CHANNEL);

        let tree = bundle(&root, &LoadOptions::default()).unwrap();
        assert_eq!(
            tree["channels"]["user/signup"]["publish"]["operationId"],
            "onUserSignUp"
        );
        assert!(tree["channels"]["user/signup"].get("$ref").is_none());
    }

    #[test]
    fn custom_extensions_leave_yaml_refs_opaque() {
        let dir = TempDir::new().unwrap();
        let root = write_temp_file(&dir, "asyncapi.yaml", ROOT);
        write_temp_file(&dir, "channel.yaml", CHANNEL);

        // Only .json is external now; the marker stays and ChannelItem accepts `$ref`.
        let options = LoadOptions::new().extensions(["json"]);
        let doc = load_with(&root, &options).unwrap();
        let channel = doc.channel("user/signup").unwrap();
        assert_eq!(channel.reference.as_deref(), Some("channel.yaml"));
        assert!(channel.publish.is_none());
    }

    #[test]
    fn typed_model_serializes_with_wire_names() {
        let dir = TempDir::new().unwrap();
        let root = write_temp_file(&dir, "asyncapi.yaml", ROOT);
        write_temp_file(&dir, "channel.yaml", CHANNEL);

        let doc = load(&root).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["asyncapi"], "2.3.0");
        assert_eq!(
            value["channels"]["user/signup"]["publish"]["operationId"],
            "onUserSignUp"
        );
        assert!(value["info"].get("description").is_none());
    }
}
