use std::collections::BTreeMap;

use serde_json::Value;

use super::{ExternalDocumentation, MessageBindings, OrRef, Schema, Tag};

shape! {
    pub struct Message {
        /// Schema of the application headers. Must be of type `object`.
        "headers" => headers: Option<OrRef<Schema>>,
        "payload" => payload: Option<Schema>,
        "correlationId" => correlation_id: Option<OrRef<CorrelationId>>,
        /// Format of `payload`, e.g. an Avro or JSON Schema media type.
        "schemaFormat" => schema_format: Option<String>,
        "contentType" => content_type: Option<String>,
        "name" => name: Option<String>,
        "title" => title: Option<String>,
        "summary" => summary: Option<String>,
        "description" => description: Option<String>,
        "tags" => tags: Option<Vec<Tag>>,
        "externalDocs" => external_docs: Option<ExternalDocumentation>,
        "bindings" => bindings: Option<OrRef<MessageBindings>>,
        "examples" => examples: Option<Vec<MessageExample>>,
        "traits" => traits: Option<Vec<OrRef<MessageTrait>>>,
    }
}

shape! {
    /// Message fields shared between messages, merged in through `traits`.
    pub struct MessageTrait {
        "headers" => headers: Option<OrRef<Schema>>,
        "correlationId" => correlation_id: Option<OrRef<CorrelationId>>,
        "schemaFormat" => schema_format: Option<String>,
        "contentType" => content_type: Option<String>,
        "name" => name: Option<String>,
        "title" => title: Option<String>,
        "summary" => summary: Option<String>,
        "description" => description: Option<String>,
        "tags" => tags: Option<Vec<Tag>>,
        "externalDocs" => external_docs: Option<ExternalDocumentation>,
        "bindings" => bindings: Option<OrRef<MessageBindings>>,
        "examples" => examples: Option<Vec<MessageExample>>,
    }
}

shape! {
    /// Example of a message. Headers and payload are example data, not schemas.
    pub struct MessageExample {
        "headers" => headers: Option<BTreeMap<String, Value>>,
        "payload" => payload: Option<Value>,
        "name" => name: Option<String>,
        "summary" => summary: Option<String>,
    }
}

shape! {
    pub struct CorrelationId {
        "description" => description: Option<String>,
        /// Runtime expression, e.g. `$message.header#/correlationId`.
        "location" => location: String,
    }
}
