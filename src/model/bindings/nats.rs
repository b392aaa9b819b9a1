//! NATS bindings.

shape! {
    pub struct NatsChannelBinding {}
}

shape! {
    pub struct NatsMessageBinding {}
}

shape! {
    pub struct NatsOperationBinding {
        /// Queue group name; at most 255 characters.
        "queue" => queue: Option<String>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct NatsServerBinding {}
}
