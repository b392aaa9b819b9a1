//! Protocol-specific binding objects.
//!
//! Each protocol contributes a channel, message, operation and server
//! binding. Families marked reserved by their binding specification carry
//! no fields and accept only an empty object.

mod amqp;
mod anypointmq;
mod http;
mod ibmmq;
mod kafka;
mod mqtt;
mod nats;
mod reserved;
mod solace;
mod websockets;

pub use amqp::*;
pub use anypointmq::*;
pub use http::*;
pub use ibmmq::*;
pub use kafka::*;
pub use mqtt::*;
pub use nats::*;
pub use reserved::*;
pub use solace::*;
pub use websockets::*;

shape! {
    /// Server bindings keyed by protocol.
    pub struct ServerBindings {
        "http" => http: Option<HttpServerBinding>,
        "ws" => ws: Option<WebSocketsServerBinding>,
        "kafka" => kafka: Option<KafkaServerBinding>,
        "anypointmq" => anypointmq: Option<AnypointMqServerBinding>,
        "amqp" => amqp: Option<AmqpServerBinding>,
        "amqp1" => amqp1: Option<Amqp1ServerBinding>,
        "mqtt" => mqtt: Option<MqttServerBinding>,
        "mqtt5" => mqtt5: Option<Mqtt5ServerBinding>,
        "nats" => nats: Option<NatsServerBinding>,
        "jms" => jms: Option<JmsServerBinding>,
        "sns" => sns: Option<SnsServerBinding>,
        "solace" => solace: Option<SolaceServerBinding>,
        "sqs" => sqs: Option<SqsServerBinding>,
        "stomp" => stomp: Option<StompServerBinding>,
        "redis" => redis: Option<RedisServerBinding>,
        "mercure" => mercure: Option<MercureServerBinding>,
        "ibmmq" => ibmmq: Option<IbmMqServerBinding>,
    }
}

shape! {
    /// Channel bindings keyed by protocol.
    pub struct ChannelBindings {
        "http" => http: Option<HttpChannelBinding>,
        "ws" => ws: Option<WebSocketsChannelBinding>,
        "kafka" => kafka: Option<KafkaChannelBinding>,
        "anypointmq" => anypointmq: Option<AnypointMqChannelBinding>,
        "amqp" => amqp: Option<AmqpChannelBinding>,
        "amqp1" => amqp1: Option<Amqp1ChannelBinding>,
        "mqtt" => mqtt: Option<MqttChannelBinding>,
        "mqtt5" => mqtt5: Option<Mqtt5ChannelBinding>,
        "nats" => nats: Option<NatsChannelBinding>,
        "jms" => jms: Option<JmsChannelBinding>,
        "sns" => sns: Option<SnsChannelBinding>,
        "solace" => solace: Option<SolaceChannelBinding>,
        "sqs" => sqs: Option<SqsChannelBinding>,
        "stomp" => stomp: Option<StompChannelBinding>,
        "redis" => redis: Option<RedisChannelBinding>,
        "mercure" => mercure: Option<MercureChannelBinding>,
        "ibmmq" => ibmmq: Option<IbmMqChannelBinding>,
    }
}

shape! {
    /// Operation bindings keyed by protocol. IBM MQ defines none.
    pub struct OperationBindings {
        "http" => http: Option<HttpOperationBinding>,
        "ws" => ws: Option<WebSocketsOperationBinding>,
        "kafka" => kafka: Option<KafkaOperationBinding>,
        "anypointmq" => anypointmq: Option<AnypointMqOperationBinding>,
        "amqp" => amqp: Option<AmqpOperationBinding>,
        "amqp1" => amqp1: Option<Amqp1OperationBinding>,
        "mqtt" => mqtt: Option<MqttOperationBinding>,
        "mqtt5" => mqtt5: Option<Mqtt5OperationBinding>,
        "nats" => nats: Option<NatsOperationBinding>,
        "jms" => jms: Option<JmsOperationBinding>,
        "sns" => sns: Option<SnsOperationBinding>,
        "solace" => solace: Option<SolaceOperationBinding>,
        "sqs" => sqs: Option<SqsOperationBinding>,
        "stomp" => stomp: Option<StompOperationBinding>,
        "redis" => redis: Option<RedisOperationBinding>,
        "mercure" => mercure: Option<MercureOperationBinding>,
    }
}

shape! {
    /// Message bindings keyed by protocol.
    pub struct MessageBindings {
        "http" => http: Option<HttpMessageBinding>,
        "ws" => ws: Option<WebSocketsMessageBinding>,
        "kafka" => kafka: Option<KafkaMessageBinding>,
        "anypointmq" => anypointmq: Option<AnypointMqMessageBinding>,
        "amqp" => amqp: Option<AmqpMessageBinding>,
        "amqp1" => amqp1: Option<Amqp1MessageBinding>,
        "mqtt" => mqtt: Option<MqttMessageBinding>,
        "mqtt5" => mqtt5: Option<Mqtt5MessageBinding>,
        "nats" => nats: Option<NatsMessageBinding>,
        "jms" => jms: Option<JmsMessageBinding>,
        "sns" => sns: Option<SnsMessageBinding>,
        "solace" => solace: Option<SolaceMessageBinding>,
        "sqs" => sqs: Option<SqsMessageBinding>,
        "stomp" => stomp: Option<StompMessageBinding>,
        "redis" => redis: Option<RedisMessageBinding>,
        "mercure" => mercure: Option<MercureMessageBinding>,
        "ibmmq" => ibmmq: Option<IbmMqMessageBinding>,
    }
}
