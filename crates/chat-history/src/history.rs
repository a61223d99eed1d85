use chrono::Utc;
use splay_index::{sort_by_recency, SessionTree};
use tracing::{debug, info, warn};

use crate::config::HistoryConfig;
use crate::error::HistoryError;
use crate::record::SessionRecord;
use crate::store::SessionStore;

/// Chat history: a [`SessionTree`] kept in sync with a [`SessionStore`].
///
/// Every operation that changes the tree, including a successful
/// [`access`](Self::access) which reshapes it, writes the full record list
/// back to the store before returning.
pub struct ChatHistory<S: SessionStore> {
    tree: SessionTree,
    store: S,
    config: HistoryConfig,
}

impl<S: SessionStore> ChatHistory<S> {
    /// Loads every stored record into a fresh tree.
    pub fn open(store: S, config: HistoryConfig) -> Result<Self, HistoryError> {
        let records = store.load_all()?;
        let mut tree = SessionTree::with_capacity(records.len());
        for record in records {
            tree.insert(record.id, record.title, record.timestamp);
        }
        debug!(chats = tree.len(), "opened chat history");
        Ok(Self { tree, store, config })
    }

    /// Adds a session or updates the title and timestamp of an existing one.
    /// `timestamp` defaults to the current Unix time.
    pub fn add(&mut self, id: &str, title: &str, timestamp: Option<i64>) -> Result<SessionRecord, HistoryError> {
        if id.is_empty() {
            return Err(HistoryError::EmptyKey);
        }
        let timestamp = timestamp.unwrap_or_else(|| Utc::now().timestamp());
        let before = self.tree.len();
        let record = SessionRecord::from(self.tree.insert(id, title, timestamp));
        if self.tree.len() > before {
            info!(id, timestamp, "added chat");
        } else {
            info!(id, timestamp, "updated chat");
        }
        self.persist()?;
        Ok(record)
    }

    /// Looks a session up and moves it to the root of the index.
    pub fn access(&mut self, id: &str) -> Result<Option<SessionRecord>, HistoryError> {
        let Some(record) = self.tree.access(id).map(SessionRecord::from) else {
            debug!(id, "access missed");
            return Ok(None);
        };
        debug!(id, "accessed chat");
        self.persist()?;
        Ok(Some(record))
    }

    /// Sessions newest first. With a list limit configured, only the first
    /// `limit` sessions in id order are considered.
    pub fn list(&self) -> Vec<SessionRecord> {
        let mut nodes = match self.config.list_limit {
            Some(limit) => {
                let collected = self.tree.collect_up_to(limit);
                if collected.truncated {
                    warn!(limit, total = self.tree.len(), "chat list truncated");
                }
                collected.nodes
            }
            None => self.tree.in_order(),
        };
        sort_by_recency(&mut nodes);
        nodes.into_iter().map(SessionRecord::from).collect()
    }

    /// Removes a session; `false` when the id is unknown.
    pub fn delete_by_key(&mut self, id: &str) -> Result<bool, HistoryError> {
        if !self.tree.delete(id) {
            debug!(id, "delete missed");
            return Ok(false);
        }
        info!(id, "deleted chat");
        self.persist()?;
        Ok(true)
    }

    pub fn clear_all(&mut self) -> Result<(), HistoryError> {
        let dropped = self.tree.len();
        self.tree.clear();
        info!(dropped, "cleared chat history");
        self.persist()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn tree(&self) -> &SessionTree {
        &self.tree
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<(), HistoryError> {
        let records: Vec<SessionRecord> = self.tree.iter().map(SessionRecord::from).collect();
        self.store.save_all(&records)
    }
}
