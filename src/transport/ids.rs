use serde::Deserialize;

use crate::domain::{MessageId, ValidationError};

/// Message id returned by GOSMS.ge as either JSON number or JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TransportMessageId {
    Int(u64),
    String(String),
}

impl TransportMessageId {
    pub fn into_domain(self) -> Result<MessageId, ValidationError> {
        match self {
            Self::Int(value) => Ok(MessageId::from(value)),
            Self::String(value) => MessageId::new(value),
        }
    }
}

/// Pick whichever of `messageId` / `message_id` the gateway sent, preferring the
/// camel-case key.
pub fn pick_message_id(
    camel: Option<TransportMessageId>,
    snake: Option<TransportMessageId>,
) -> Result<Option<MessageId>, ValidationError> {
    camel.or(snake).map(TransportMessageId::into_domain).transpose()
}
