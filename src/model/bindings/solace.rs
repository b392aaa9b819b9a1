//! Solace bindings.

string_enum! {
    pub enum SolaceDestinationType {
        Queue = "queue",
        Topic = "topic",
    }
}

string_enum! {
    pub enum SolaceQueueAccessType {
        Exclusive = "exclusive",
        NonExclusive = "nonExclusive",
    }
}

shape! {
    pub struct SolaceQueue {
        "name" => name: Option<String>,
        "topicSubscriptions" => topic_subscriptions: Option<Vec<String>>,
        "accessType" => access_type: Option<SolaceQueueAccessType>,
    }
}

shape! {
    pub struct SolaceDestination {
        "destinationType" => destination_type: Option<SolaceDestinationType>,
        "deliveryMode" => delivery_mode: Option<String>,
        "queue" => queue: Option<SolaceQueue>,
    }
}

shape! {
    pub struct SolaceChannelBinding {}
}

shape! {
    pub struct SolaceMessageBinding {}
}

shape! {
    pub struct SolaceOperationBinding {
        "bindingVersion" => binding_version: Option<String>,
        "destinations" => destinations: Option<Vec<SolaceDestination>>,
    }
}

shape! {
    pub struct SolaceServerBinding {
        "bindingVersion" => binding_version: Option<String>,
        /// Message VPN of the Solace broker.
        "msgVpn" => msg_vpn: Option<String>,
    }
}
