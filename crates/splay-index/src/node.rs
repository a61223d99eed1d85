use crate::types::Node;

/// A chat session held in the index.
///
/// `key` is the session id and never changes once the node is created;
/// `title` and `timestamp` are overwritten when the same id is inserted
/// again. The link fields are arena indices owned by the enclosing
/// [`SessionTree`](crate::SessionTree).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatNode {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub key: String,
    pub title: String,
    pub timestamp: i64,
}

impl ChatNode {
    pub fn new(key: String, title: String, timestamp: i64) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            key,
            title,
            timestamp,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl Node for ChatNode {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// Key accessor for the generic helpers in [`util`](crate::util).
pub(crate) fn key_of(node: &ChatNode) -> &str {
    &node.key
}
