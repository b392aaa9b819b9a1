//! WebSockets bindings.

use crate::model::Schema;

string_enum! {
    /// HTTP method used for the upgrade request.
    pub enum WebSocketsMethod {
        Get = "GET",
        Post = "POST",
    }
}

shape! {
    pub struct WebSocketsChannelBinding {
        "method" => method: Option<WebSocketsMethod>,
        "query" => query: Option<Schema>,
        "headers" => headers: Option<Schema>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct WebSocketsMessageBinding {}
}

shape! {
    pub struct WebSocketsOperationBinding {}
}

shape! {
    pub struct WebSocketsServerBinding {}
}
