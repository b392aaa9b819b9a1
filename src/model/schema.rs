//! JSON Schema (draft 07) superset used for payloads, headers and bindings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ExternalDocumentation;
use crate::shape::{Describe, Kind, PositiveNumber};

string_enum! {
    pub enum JsonType {
        Null = "null",
        Boolean = "boolean",
        Object = "object",
        Array = "array",
        Number = "number",
        String = "string",
        Integer = "integer",
    }
}

/// `type`: one JSON type or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(JsonType),
    Multiple(Vec<JsonType>),
}

impl SchemaType {
    pub fn contains(&self, ty: JsonType) -> bool {
        match self {
            SchemaType::Single(single) => *single == ty,
            SchemaType::Multiple(many) => many.contains(&ty),
        }
    }
}

impl Describe for SchemaType {
    fn kind() -> Kind {
        Kind::Either(JsonType::kind, <Vec<JsonType>>::kind)
    }
}

/// `items`: one schema for every element, or one per position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaItems {
    Single(Box<Schema>),
    Tuple(Vec<Schema>),
}

impl Describe for SchemaItems {
    fn kind() -> Kind {
        Kind::Either(Schema::kind, <Vec<Schema>>::kind)
    }
}

/// `additionalProperties` / `additionalItems`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolOrSchema {
    Bool(bool),
    Schema(Box<Schema>),
}

impl Describe for BoolOrSchema {
    fn kind() -> Kind {
        Kind::Either(bool::kind, Schema::kind)
    }
}

shape! {
    /// A JSON Schema draft 07 object plus the AsyncAPI keywords
    /// `discriminator`, `externalDocs` and `deprecated`.
    pub struct Schema {
        "$id" => id: Option<String>,
        "$schema" => dialect: Option<String>,
        "$comment" => comment: Option<String>,
        "$ref" => reference: Option<String>,
        "title" => title: Option<String>,
        "description" => description: Option<String>,
        "type" => param_type: Option<SchemaType>,
        "format" => format: Option<String>,
        "enum" => enum_values: Option<Vec<Value>>,
        "const" => const_value: Option<Value>,
        "default" => default: Option<Value>,
        "examples" => examples: Option<Vec<Value>>,
        "multipleOf" => multiple_of: Option<PositiveNumber>,
        "maximum" => maximum: Option<f64>,
        "exclusiveMaximum" => exclusive_maximum: Option<f64>,
        "minimum" => minimum: Option<f64>,
        "exclusiveMinimum" => exclusive_minimum: Option<f64>,
        "maxLength" => max_length: Option<u64>,
        "minLength" => min_length: Option<u64>,
        "pattern" => pattern: Option<String>,
        "items" => items: Option<SchemaItems>,
        "additionalItems" => additional_items: Option<BoolOrSchema>,
        "maxItems" => max_items: Option<u64>,
        "minItems" => min_items: Option<u64>,
        "uniqueItems" => unique_items: Option<bool>,
        "contains" => contains: Option<Box<Schema>>,
        "maxProperties" => max_properties: Option<u64>,
        "minProperties" => min_properties: Option<u64>,
        "required" => required: Option<Vec<String>>,
        "properties" => properties: Option<BTreeMap<String, Schema>>,
        "patternProperties" => pattern_properties: Option<BTreeMap<String, Schema>>,
        "additionalProperties" => additional_properties: Option<BoolOrSchema>,
        "propertyNames" => property_names: Option<Box<Schema>>,
        "if" => if_schema: Option<Box<Schema>>,
        "then" => then_schema: Option<Box<Schema>>,
        "else" => else_schema: Option<Box<Schema>>,
        "allOf" => all_of: Option<Vec<Schema>>,
        "anyOf" => any_of: Option<Vec<Schema>>,
        "oneOf" => one_of: Option<Vec<Schema>>,
        "not" => not: Option<Box<Schema>>,
        "definitions" => definitions: Option<BTreeMap<String, Schema>>,
        "readOnly" => read_only: Option<bool>,
        "writeOnly" => write_only: Option<bool>,
        "contentEncoding" => content_encoding: Option<String>,
        "contentMediaType" => content_media_type: Option<String>,
        /// Property used to tell apart polymorphic payloads.
        "discriminator" => discriminator: Option<String>,
        "externalDocs" => external_docs: Option<ExternalDocumentation>,
        "deprecated" => deprecated: bool [default],
    }
}

impl Schema {
    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// Names listed in `required`.
    pub fn required_properties(&self) -> impl Iterator<Item = &str> {
        self.required.iter().flatten().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_type_forms() {
        let single: SchemaType = serde_json::from_value(json!("string")).unwrap();
        assert!(single.contains(JsonType::String));

        let many: SchemaType = serde_json::from_value(json!(["string", "null"])).unwrap();
        assert!(many.contains(JsonType::Null));
        assert!(!many.contains(JsonType::Integer));
    }

    #[test]
    fn deprecated_defaults_to_false() {
        let schema: Schema = serde_json::from_value(json!({"type": "object"})).unwrap();
        assert!(!schema.deprecated);
    }

    #[test]
    fn nested_reference_is_kept() {
        let schema: Schema = serde_json::from_value(json!({
            "type": "object",
            "required": ["user"],
            "properties": {
                "user": { "$ref": "#/components/schemas/userCreate" }
            }
        }))
        .unwrap();
        let user = &schema.properties.as_ref().unwrap()["user"];
        assert!(user.is_reference());
        assert_eq!(schema.required_properties().collect::<Vec<_>>(), vec!["user"]);
    }

    #[test]
    fn additional_properties_bool_or_schema() {
        let schema: Schema = serde_json::from_value(json!({
            "additionalProperties": false,
            "items": [{ "type": "string" }, { "type": "integer" }]
        }))
        .unwrap();
        assert_eq!(schema.additional_properties, Some(BoolOrSchema::Bool(false)));
        assert!(matches!(schema.items, Some(SchemaItems::Tuple(ref v)) if v.len() == 2));
    }
}
