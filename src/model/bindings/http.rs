//! HTTP bindings.

use crate::model::Schema;

string_enum! {
    pub enum HttpOperationBindingType {
        Request = "request",
        Response = "response",
    }
}

shape! {
    pub struct HttpChannelBinding {}
}

shape! {
    pub struct HttpMessageBinding {
        "headers" => headers: Option<Schema>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct HttpOperationBinding {
        "type" => param_type: HttpOperationBindingType,
        /// HTTP method; only for `request` operations.
        "method" => method: Option<String>,
        /// Schema of the query parameters; must be of type `object`.
        "query" => query: Option<Schema>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct HttpServerBinding {}
}
