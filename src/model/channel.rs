use std::collections::BTreeMap;

use super::{
    ChannelBindings, ExternalDocumentation, Message, OperationBindings, OrRef, Schema, Tag,
};

pattern_key! {
    /// Name of a channel parameter, as used in `{name}` templates.
    pub struct ParameterName = r"^[A-Za-z0-9_\-]+$";
}

shape! {
    /// Operations available on one channel.
    pub struct ChannelItem {
        /// Left unresolved only when it points inside the document or to a remote URL.
        "$ref" => reference: Option<String>,
        "description" => description: Option<String>,
        /// Names of `servers` entries this channel is available on. Empty means all.
        "servers" => servers: Option<Vec<String>>,
        /// Messages the application consumes from this channel.
        "subscribe" => subscribe: Option<Operation>,
        /// Messages the application sends to this channel.
        "publish" => publish: Option<Operation>,
        "parameters" => parameters: Option<BTreeMap<ParameterName, OrRef<Parameter>>>,
        "bindings" => bindings: Option<OrRef<ChannelBindings>>,
    }
}

impl ChannelItem {
    /// Both operations, publish first.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.publish.iter().chain(self.subscribe.iter())
    }
}

shape! {
    pub struct Parameter {
        "description" => description: Option<String>,
        "schema" => param_schema: Option<OrRef<Schema>>,
        /// Runtime expression locating the value in the message.
        "location" => location: Option<String>,
    }
}

shape! {
    pub struct Operation {
        "operationId" => operation_id: Option<String>,
        "summary" => summary: Option<String>,
        "description" => description: Option<String>,
        "tags" => tags: Option<Vec<Tag>>,
        "externalDocs" => external_docs: Option<ExternalDocumentation>,
        "bindings" => bindings: Option<OrRef<OperationBindings>>,
        /// Applied to the operation in order, later traits win.
        "traits" => traits: Option<Vec<OrRef<OperationTrait>>>,
        "message" => message: Option<OrRef<Message>>,
    }
}

shape! {
    /// Operation fields shared between operations, merged in through `traits`.
    pub struct OperationTrait {
        "operationId" => operation_id: Option<String>,
        "summary" => summary: Option<String>,
        "description" => description: Option<String>,
        "tags" => tags: Option<Vec<Tag>>,
        "externalDocs" => external_docs: Option<ExternalDocumentation>,
        "bindings" => bindings: Option<OrRef<OperationBindings>>,
    }
}
