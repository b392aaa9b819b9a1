//! IBM MQ bindings.

use crate::shape::Bounded;

string_enum! {
    pub enum IbmMqDestinationType {
        Topic = "topic",
        Queue = "queue",
    }
}

shape! {
    pub struct IbmMqQueue {
        /// Queue object name, at most 48 characters.
        "objectName" => object_name: String,
        "isPartitioned" => is_partitioned: Option<bool>,
        "exclusive" => exclusive: Option<bool>,
    }
}

shape! {
    pub struct IbmMqTopic {
        "string" => string: Option<String>,
        "objectName" => object_name: Option<String>,
        "durablePermitted" => durable_permitted: Option<bool>,
        "lastMsgRetained" => last_msg_retained: Option<bool>,
    }
}

shape! {
    pub struct IbmMqChannelBinding {
        "destinationType" => destination_type: Option<IbmMqDestinationType>,
        "queue" => queue: Option<IbmMqQueue>,
        "topic" => topic: Option<IbmMqTopic>,
        "maxMsgLength" => max_msg_length: Option<Bounded<0, 104_857_600>>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct IbmMqMessageBinding {
        /// `string`, `jms` or `binary`.
        "type" => param_type: Option<String>,
        "headers" => headers: Option<String>,
        "description" => description: Option<String>,
        /// Milliseconds; 0 means unlimited.
        "expiry" => expiry: Option<u64>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct IbmMqServerBinding {
        "groupId" => group_id: Option<String>,
        "ccdtQueueManagerName" => ccdt_queue_manager_name: Option<String>,
        "cipherSpec" => cipher_spec: Option<String>,
        "multiEndpointServer" => multi_endpoint_server: Option<bool>,
        /// Seconds.
        "heartBeatInterval" => heart_beat_interval: Option<Bounded<0, 999_999>>,
        "bindingVersion" => binding_version: Option<String>,
    }
}
