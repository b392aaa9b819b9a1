//! Anypoint MQ bindings.

use crate::model::Schema;

string_enum! {
    pub enum AnypointMqDestinationType {
        Queue = "queue",
        Exchange = "exchange",
        FifoQueue = "fifo-queue",
    }
}

shape! {
    pub struct AnypointMqChannelBinding {
        /// Defaults to the channel name.
        "destination" => destination: Option<String>,
        "destinationType" => destination_type: Option<AnypointMqDestinationType>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct AnypointMqMessageBinding {
        /// Protocol headers; must be of type `object`.
        "headers" => headers: Option<Schema>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct AnypointMqOperationBinding {}
}

shape! {
    pub struct AnypointMqServerBinding {}
}
