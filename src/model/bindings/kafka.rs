//! Kafka bindings.

use crate::model::Schema;

shape! {
    pub struct KafkaChannelBinding {}
}

shape! {
    pub struct KafkaMessageBinding {
        /// Schema of the message key.
        "key" => key: Option<Schema>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct KafkaOperationBinding {
        "groupId" => group_id: Option<Schema>,
        "clientId" => client_id: Option<Schema>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct KafkaServerBinding {}
}
