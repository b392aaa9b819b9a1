use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    ChannelBindings, ChannelItem, CorrelationId, Message, MessageBindings, MessageTrait,
    OperationBindings, OperationTrait, OrRef, Parameter, Reference, Schema, SecurityRequirement,
    SecurityScheme, ServerBindings,
};
use crate::shape::{Describe, EmailAddress, Kind};

/// Version of the specification this model implements.
pub const ASYNCAPI_VERSION: &str = "2.3.0";

/// Value of the root `asyncapi` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AsyncApiVersion(pub String);

impl Default for AsyncApiVersion {
    fn default() -> Self {
        Self(ASYNCAPI_VERSION.to_string())
    }
}

impl AsyncApiVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Describe for AsyncApiVersion {
    fn kind() -> Kind {
        Kind::String
    }
}

pattern_key! {
    /// Name of a server in the `servers` map.
    pub struct ServerIdentifier = r"^[A-Za-z0-9_\-]+$";
}

pattern_key! {
    /// Key of a reusable object under `components`.
    pub struct ComponentKey = r"^[A-Za-z0-9_\-]+$";
}

pattern_key! {
    /// Channel name: a relative URI, optionally templated (RFC 6570).
    pub struct ChannelUri = r#"^([^\x00-\x20\x7f"'%<>\\^`{|}]|%[0-9A-Fa-f]{2}|\{[+#./;?&=,!@|]?((\w|%[0-9A-Fa-f]{2})(\.?(\w|%[0-9A-Fa-f]{2}))*(:[1-9]\d{0,3}|\*)?)(,((\w|%[0-9A-Fa-f]{2})(\.?(\w|%[0-9A-Fa-f]{2}))*(:[1-9]\d{0,3}|\*)?))*\})*$"#;
}

shape! {
    /// Root of an AsyncAPI document.
    pub struct AsyncApi {
        /// Specification version the document uses.
        "asyncapi" => asyncapi: AsyncApiVersion [default],
        /// Identifier of the application the document defines.
        "id" => param_id: Option<String>,
        "info" => info: Info,
        "servers" => servers: Option<BTreeMap<ServerIdentifier, Server>>,
        /// Default content type for messages that don't set `contentType`.
        "defaultContentType" => default_content_type: Option<String>,
        "channels" => channels: BTreeMap<ChannelUri, ChannelItem>,
        "components" => components: Option<Components>,
        "tags" => tags: Option<Vec<Tag>>,
        "externalDocs" => external_docs: Option<ExternalDocumentation>,
    }
}

impl AsyncApi {
    /// Look up a channel by name.
    pub fn channel(&self, name: &str) -> Option<&ChannelItem> {
        self.channels.get(name)
    }

    /// Look up a server by name.
    pub fn server(&self, name: &str) -> Option<&Server> {
        self.servers.as_ref()?.get(name)
    }

    /// Dereference an internal `#/components/...` reference.
    ///
    /// Returns the raw component serialized back to a tree, so any section
    /// can be reached with one call. Typed accessors live on [`Components`].
    pub fn lookup_component(&self, reference: &Reference) -> Option<Value> {
        let (section, name) = reference.component()?;
        let components = serde_json::to_value(self.components.as_ref()?).ok()?;
        components.get(section)?.get(name).cloned()
    }
}

shape! {
    /// Metadata about the API.
    pub struct Info {
        "title" => title: String,
        "version" => version: String,
        "description" => description: Option<String>,
        "termsOfService" => terms_of_service: Option<url::Url>,
        "contact" => contact: Option<Contact>,
        "license" => license: Option<License>,
    }
}

shape! {
    pub struct Contact {
        "name" => name: Option<String>,
        "url" => url: Option<url::Url>,
        "email" => email: Option<EmailAddress>,
    }
}

shape! {
    pub struct License {
        "name" => name: String,
        "url" => url: Option<url::Url>,
    }
}

shape! {
    /// A message broker or endpoint the application connects to.
    pub struct Server {
        /// URL of the target host, may contain `{variable}` placeholders.
        "url" => url: String,
        "protocol" => protocol: String,
        "protocolVersion" => protocol_version: Option<String>,
        "description" => description: Option<String>,
        "variables" => variables: Option<BTreeMap<String, ServerVariable>>,
        "security" => security: Option<Vec<SecurityRequirement>>,
        "bindings" => bindings: Option<OrRef<ServerBindings>>,
    }
}

shape! {
    /// Substitution value for a server URL template variable.
    pub struct ServerVariable {
        "enum" => enum_values: Option<Vec<String>>,
        "default" => default: Option<String>,
        "description" => description: Option<String>,
        "examples" => examples: Option<Vec<String>>,
    }
}

shape! {
    pub struct Tag {
        "name" => name: String,
        "description" => description: Option<String>,
        "externalDocs" => external_docs: Option<ExternalDocumentation>,
    }
}

shape! {
    pub struct ExternalDocumentation {
        "description" => description: Option<String>,
        "url" => url: url::Url,
    }
}

shape! {
    /// Reusable objects. Nothing here applies to the API unless referenced.
    pub struct Components {
        "schemas" => schemas: Option<BTreeMap<ComponentKey, OrRef<Schema>>>,
        "servers" => servers: Option<BTreeMap<ComponentKey, OrRef<Server>>>,
        "channels" => channels: Option<BTreeMap<ComponentKey, ChannelItem>>,
        "messages" => messages: Option<BTreeMap<ComponentKey, OrRef<Message>>>,
        "securitySchemes" => security_schemes: Option<BTreeMap<ComponentKey, OrRef<SecurityScheme>>>,
        "parameters" => parameters: Option<BTreeMap<ComponentKey, OrRef<Parameter>>>,
        "correlationIds" => correlation_ids: Option<BTreeMap<ComponentKey, OrRef<CorrelationId>>>,
        "operationTraits" => operation_traits: Option<BTreeMap<ComponentKey, OrRef<OperationTrait>>>,
        "messageTraits" => message_traits: Option<BTreeMap<ComponentKey, OrRef<MessageTrait>>>,
        "serverBindings" => server_bindings: Option<BTreeMap<ComponentKey, OrRef<ServerBindings>>>,
        "channelBindings" => channel_bindings: Option<BTreeMap<ComponentKey, OrRef<ChannelBindings>>>,
        "operationBindings" => operation_bindings: Option<BTreeMap<ComponentKey, OrRef<OperationBindings>>>,
        "messageBindings" => message_bindings: Option<BTreeMap<String, OrRef<MessageBindings>>>,
    }
}

/// Follow `name` inside one components section, chasing references to
/// other entries of the same section.
fn follow<'a, T>(
    section: Option<&'a BTreeMap<ComponentKey, OrRef<T>>>,
    section_name: &str,
    name: &str,
) -> Option<&'a T> {
    let section = section?;
    let mut current = name;
    // A chain can visit each entry at most once.
    for _ in 0..=section.len() {
        match section.get(current)? {
            OrRef::Item(item) => return Some(item),
            OrRef::Reference(reference) => match reference.component() {
                Some((s, next)) if s == section_name => current = next,
                _ => return None,
            },
        }
    }
    None
}

impl Components {
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        follow(self.schemas.as_ref(), "schemas", name)
    }

    pub fn message(&self, name: &str) -> Option<&Message> {
        follow(self.messages.as_ref(), "messages", name)
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        follow(self.parameters.as_ref(), "parameters", name)
    }

    pub fn security_scheme(&self, name: &str) -> Option<&SecurityScheme> {
        follow(self.security_schemes.as_ref(), "securitySchemes", name)
    }

    pub fn correlation_id(&self, name: &str) -> Option<&CorrelationId> {
        follow(self.correlation_ids.as_ref(), "correlationIds", name)
    }

    pub fn operation_trait(&self, name: &str) -> Option<&OperationTrait> {
        follow(self.operation_traits.as_ref(), "operationTraits", name)
    }

    pub fn message_trait(&self, name: &str) -> Option<&MessageTrait> {
        follow(self.message_traits.as_ref(), "messageTraits", name)
    }

    /// Dereference a `#/components/messages/...` reference.
    pub fn resolve_message(&self, reference: &Reference) -> Option<&Message> {
        match reference.component()? {
            ("messages", name) => self.message(name),
            _ => None,
        }
    }

    /// Dereference a `#/components/schemas/...` reference.
    pub fn resolve_schema(&self, reference: &Reference) -> Option<&Schema> {
        match reference.component()? {
            ("schemas", name) => self.schema(name),
            _ => None,
        }
    }
}
