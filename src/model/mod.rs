//! AsyncAPI 2.3.0 object model.
//!
//! Field names, aliases and optionality follow the published specification:
//! <https://www.asyncapi.com/docs/reference/specification/v2.3.0>

mod channel;
mod document;
mod message;
mod reference;
mod schema;
mod security;

pub mod bindings;

pub use channel::{ChannelItem, Operation, OperationTrait, Parameter, ParameterName};
pub use document::{
    AsyncApi, AsyncApiVersion, ChannelUri, ComponentKey, Components, Contact,
    ExternalDocumentation, Info, License, Server, ServerIdentifier, ServerVariable, Tag,
    ASYNCAPI_VERSION,
};
pub use message::{CorrelationId, Message, MessageExample, MessageTrait};
pub use reference::{OrRef, Reference};
pub use schema::{BoolOrSchema, JsonType, Schema, SchemaItems, SchemaType};
pub use security::{
    OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme, SecuritySchemeLocation,
    SecuritySchemeType,
};

use crate::shape::{Record, Shape};

use bindings::*;

/// Every record type of the model, root first.
const SHAPES: &[fn() -> &'static Shape] = &[
    AsyncApi::shape,
    Info::shape,
    Contact::shape,
    License::shape,
    Server::shape,
    ServerVariable::shape,
    ChannelItem::shape,
    Operation::shape,
    OperationTrait::shape,
    Parameter::shape,
    Message::shape,
    MessageTrait::shape,
    MessageExample::shape,
    CorrelationId::shape,
    Tag::shape,
    ExternalDocumentation::shape,
    Components::shape,
    Reference::shape,
    Schema::shape,
    SecurityScheme::shape,
    OAuthFlows::shape,
    OAuthFlow::shape,
    ServerBindings::shape,
    ChannelBindings::shape,
    OperationBindings::shape,
    MessageBindings::shape,
    HttpChannelBinding::shape,
    HttpMessageBinding::shape,
    HttpOperationBinding::shape,
    HttpServerBinding::shape,
    WebSocketsChannelBinding::shape,
    WebSocketsMessageBinding::shape,
    WebSocketsOperationBinding::shape,
    WebSocketsServerBinding::shape,
    KafkaChannelBinding::shape,
    KafkaMessageBinding::shape,
    KafkaOperationBinding::shape,
    KafkaServerBinding::shape,
    AnypointMqChannelBinding::shape,
    AnypointMqMessageBinding::shape,
    AnypointMqOperationBinding::shape,
    AnypointMqServerBinding::shape,
    AmqpExchange::shape,
    AmqpQueue::shape,
    AmqpChannelBinding::shape,
    AmqpMessageBinding::shape,
    AmqpOperationBinding::shape,
    AmqpServerBinding::shape,
    Amqp1ChannelBinding::shape,
    Amqp1MessageBinding::shape,
    Amqp1OperationBinding::shape,
    Amqp1ServerBinding::shape,
    MqttLastWill::shape,
    MqttChannelBinding::shape,
    MqttMessageBinding::shape,
    MqttOperationBinding::shape,
    MqttServerBinding::shape,
    Mqtt5ChannelBinding::shape,
    Mqtt5MessageBinding::shape,
    Mqtt5OperationBinding::shape,
    Mqtt5ServerBinding::shape,
    NatsChannelBinding::shape,
    NatsMessageBinding::shape,
    NatsOperationBinding::shape,
    NatsServerBinding::shape,
    JmsChannelBinding::shape,
    JmsMessageBinding::shape,
    JmsOperationBinding::shape,
    JmsServerBinding::shape,
    SnsChannelBinding::shape,
    SnsMessageBinding::shape,
    SnsOperationBinding::shape,
    SnsServerBinding::shape,
    SolaceQueue::shape,
    SolaceDestination::shape,
    SolaceChannelBinding::shape,
    SolaceMessageBinding::shape,
    SolaceOperationBinding::shape,
    SolaceServerBinding::shape,
    SqsChannelBinding::shape,
    SqsMessageBinding::shape,
    SqsOperationBinding::shape,
    SqsServerBinding::shape,
    StompChannelBinding::shape,
    StompMessageBinding::shape,
    StompOperationBinding::shape,
    StompServerBinding::shape,
    RedisChannelBinding::shape,
    RedisMessageBinding::shape,
    RedisOperationBinding::shape,
    RedisServerBinding::shape,
    MercureChannelBinding::shape,
    MercureMessageBinding::shape,
    MercureOperationBinding::shape,
    MercureServerBinding::shape,
    IbmMqQueue::shape,
    IbmMqTopic::shape,
    IbmMqChannelBinding::shape,
    IbmMqMessageBinding::shape,
    IbmMqServerBinding::shape,
];

/// All registered shapes.
pub fn shapes() -> impl Iterator<Item = &'static Shape> {
    SHAPES.iter().map(|shape| shape())
}

/// Look up a shape by type name (e.g. `"Info"`, `"AmqpExchange"`).
pub fn shape_by_name(name: &str) -> Option<&'static Shape> {
    shapes().find(|shape| shape.name == name)
}
