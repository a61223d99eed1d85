//! Persisted and printed shape of a chat session.

use serde::{Deserialize, Serialize};
use splay_index::ChatNode;

/// The three externally visible fields of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub title: String,
    pub timestamp: i64,
}

impl SessionRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            timestamp,
        }
    }
}

/// Carriage returns are dropped on the way out of the index.
impl From<&ChatNode> for SessionRecord {
    fn from(node: &ChatNode) -> Self {
        Self {
            id: node.key().to_string(),
            title: strip_carriage_returns(node.title()),
            timestamp: node.timestamp(),
        }
    }
}

/// On-disk document: `{"chats":[...]}` in ascending id order.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HistoryDocument {
    #[serde(default)]
    pub chats: Vec<SessionRecord>,
}

pub fn strip_carriage_returns(text: &str) -> String {
    text.chars().filter(|&c| c != '\r').collect()
}
