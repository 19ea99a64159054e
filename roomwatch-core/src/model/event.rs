use crate::constants::NEW_MESSAGE_EVENT;
use crate::error::FrameError;
use serde::{Deserialize, Serialize};

/// Decoded inbound text frame. Fields other than `event` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundEvent {
    pub event: String,
}

impl InboundEvent {
    pub fn decode(text: &str) -> Result<Self, FrameError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn is_new_message(&self) -> bool {
        self.event == NEW_MESSAGE_EVENT
    }
}
