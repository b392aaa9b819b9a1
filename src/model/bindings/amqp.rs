//! AMQP 0-9-1 bindings.

use crate::shape::Bounded;

string_enum! {
    /// What an AMQP channel represents.
    pub enum AmqpChannelType {
        Queue = "queue",
        RoutingKey = "routingKey",
    }
}

string_enum! {
    pub enum AmqpExchangeType {
        Topic = "topic",
        Direct = "direct",
        Fanout = "fanout",
        Headers = "headers",
        Default = "default",
    }
}

shape! {
    pub struct AmqpExchange {
        /// At most 255 characters.
        "name" => name: Option<String>,
        "type" => param_type: Option<AmqpExchangeType>,
        "durable" => durable: Option<bool>,
        "autoDelete" => auto_delete: Option<bool>,
        "vhost" => vhost: Option<String>,
    }
}

shape! {
    pub struct AmqpQueue {
        "name" => name: Option<String>,
        "durable" => durable: Option<bool>,
        "exclusive" => exclusive: Option<bool>,
        "autoDelete" => auto_delete: Option<bool>,
        "vhost" => vhost: Option<String>,
    }
}

shape! {
    pub struct AmqpChannelBinding {
        /// Whether the channel is a queue or a routing key on an exchange.
        "is" => param_is: Option<AmqpChannelType>,
        /// Only when `is` is `routingKey`.
        "exchange" => exchange: Option<AmqpExchange>,
        /// Only when `is` is `queue`.
        "queue" => queue: Option<AmqpQueue>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct AmqpMessageBinding {
        "contentEncoding" => content_encoding: Option<String>,
        "messageType" => message_type: Option<String>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct AmqpOperationBinding {
        /// TTL of the message in milliseconds.
        "expiration" => expiration: Option<u64>,
        "userId" => user_id: Option<String>,
        "cc" => cc: Option<Vec<String>>,
        "priority" => priority: Option<i64>,
        /// 1 = transient, 2 = persistent.
        "deliveryMode" => delivery_mode: Option<Bounded<1, 2>>,
        "mandatory" => mandatory: Option<bool>,
        "bcc" => bcc: Option<Vec<String>>,
        "replyTo" => reply_to: Option<String>,
        "timestamp" => timestamp: Option<bool>,
        "ack" => ack: Option<bool>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct AmqpServerBinding {}
}
