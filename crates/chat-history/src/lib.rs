//! Chat session history on top of [`splay_index`].
//!
//! [`ChatHistory`] wraps a [`SessionTree`](splay_index::SessionTree) and a
//! [`SessionStore`]: records are loaded once when the history is opened and
//! the whole history is written back after every change. The `chat-history`
//! binary exposes the operations as subcommands and prints one JSON document
//! per invocation.
//!
//! - [`store`]: [`SessionStore`] trait, [`JsonFileStore`], [`MemoryStore`]
//! - [`record`]: [`SessionRecord`] and the `{"chats":[...]}` document
//! - [`config`]: [`HistoryConfig`] from defaults and environment
//! - [`history`]: the [`ChatHistory`] facade
//! - [`cli`]: [`Command`] parsing and dispatch
//! - [`response`]: `{"success":...}` result documents
//!
//! ```
//! use chat_history::{ChatHistory, HistoryConfig, MemoryStore};
//!
//! let mut history = ChatHistory::open(MemoryStore::default(), HistoryConfig::default()).unwrap();
//! history.add("s1", "Trip Planning", Some(100)).unwrap();
//! history.add("s2", "Recipe Ideas", Some(200)).unwrap();
//!
//! let ids: Vec<String> = history.list().into_iter().map(|r| r.id).collect();
//! assert_eq!(ids, ["s2", "s1"]);
//! assert_eq!(history.store().save_count(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod record;
pub mod response;
pub mod store;

pub use cli::{execute, Command, Outcome};
pub use config::HistoryConfig;
pub use error::HistoryError;
pub use history::ChatHistory;
pub use record::{HistoryDocument, SessionRecord};
pub use response::Response;
pub use store::{JsonFileStore, MemoryStore, SessionStore};
