//! Families whose binding objects are reserved for future use.

shape! { pub struct Amqp1ChannelBinding {} }
shape! { pub struct Amqp1MessageBinding {} }
shape! { pub struct Amqp1OperationBinding {} }
shape! { pub struct Amqp1ServerBinding {} }

shape! { pub struct Mqtt5ChannelBinding {} }
shape! { pub struct Mqtt5MessageBinding {} }
shape! { pub struct Mqtt5OperationBinding {} }
shape! { pub struct Mqtt5ServerBinding {} }

shape! { pub struct JmsChannelBinding {} }
shape! { pub struct JmsMessageBinding {} }
shape! { pub struct JmsOperationBinding {} }
shape! { pub struct JmsServerBinding {} }

shape! { pub struct SnsChannelBinding {} }
shape! { pub struct SnsMessageBinding {} }
shape! { pub struct SnsOperationBinding {} }
shape! { pub struct SnsServerBinding {} }

shape! { pub struct SqsChannelBinding {} }
shape! { pub struct SqsMessageBinding {} }
shape! { pub struct SqsOperationBinding {} }
shape! { pub struct SqsServerBinding {} }

shape! { pub struct StompChannelBinding {} }
shape! { pub struct StompMessageBinding {} }
shape! { pub struct StompOperationBinding {} }
shape! { pub struct StompServerBinding {} }

shape! { pub struct RedisChannelBinding {} }
shape! { pub struct RedisMessageBinding {} }
shape! { pub struct RedisOperationBinding {} }
shape! { pub struct RedisServerBinding {} }

shape! { pub struct MercureChannelBinding {} }
shape! { pub struct MercureMessageBinding {} }
shape! { pub struct MercureOperationBinding {} }
shape! { pub struct MercureServerBinding {} }
