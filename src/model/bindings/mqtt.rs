//! MQTT 3.x bindings.

use crate::shape::Bounded;

/// MQTT quality of service: 0, 1 or 2.
pub type QoS = Bounded<0, 2>;

shape! {
    pub struct MqttChannelBinding {}
}

shape! {
    pub struct MqttMessageBinding {
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    pub struct MqttOperationBinding {
        "qos" => qos: Option<QoS>,
        "retain" => retain: Option<bool>,
        "bindingVersion" => binding_version: Option<String>,
    }
}

shape! {
    /// Message the broker publishes when the client disconnects ungracefully.
    pub struct MqttLastWill {
        "topic" => topic: Option<String>,
        "qos" => qos: Option<QoS>,
        "message" => message: Option<String>,
        "retain" => retain: Option<bool>,
    }
}

shape! {
    pub struct MqttServerBinding {
        "clientId" => client_id: Option<String>,
        "cleanSession" => clean_session: Option<bool>,
        "lastWill" => last_will: Option<MqttLastWill>,
        /// Seconds.
        "keepAlive" => keep_alive: Option<u64>,
        "bindingVersion" => binding_version: Option<String>,
    }
}
