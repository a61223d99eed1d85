//! JSON documents printed by the command surface.

use std::fmt;

use serde::Serialize;

use crate::record::SessionRecord;

pub const CHAT_NOT_FOUND: &str = "Chat not found";

/// One result document. Serialises untagged, so each variant's fields are
/// the top-level keys, e.g. `{"success":true,"chat":{...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Chat { success: bool, chat: SessionRecord },
    List { success: bool, count: usize, chats: Vec<SessionRecord> },
    Message { success: bool, message: String },
    Error { success: bool, error: String },
}

impl Response {
    pub fn chat(chat: SessionRecord) -> Self {
        Self::Chat { success: true, chat }
    }

    pub fn list(chats: Vec<SessionRecord>) -> Self {
        Self::List {
            success: true,
            count: chats.len(),
            chats,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            success: true,
            message: message.into(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self::Error {
            success: false,
            error: error.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::error(CHAT_NOT_FOUND)
    }

    pub fn is_success(&self) -> bool {
        match self {
            Self::Chat { success, .. }
            | Self::List { success, .. }
            | Self::Message { success, .. }
            | Self::Error { success, .. } => *success,
        }
    }
}

/// Compact single-line JSON.
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
