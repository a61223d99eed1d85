use std::path::PathBuf;

use crate::error::HistoryError;

pub const DEFAULT_HISTORY_FILE: &str = "chat_history.json";
pub const HISTORY_FILE_ENV: &str = "CHAT_HISTORY_FILE";
pub const LIST_LIMIT_ENV: &str = "CHAT_HISTORY_LIST_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Where [`JsonFileStore`](crate::JsonFileStore) keeps the history.
    pub history_file: PathBuf,
    /// Most sessions `list` returns; `None` lists everything.
    pub list_limit: Option<usize>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            list_limit: None,
        }
    }
}

impl HistoryConfig {
    /// Defaults overridden by `CHAT_HISTORY_FILE` / `CHAT_HISTORY_LIST_LIMIT`.
    pub fn from_env() -> Result<Self, HistoryError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    ///
    /// Empty values are ignored. A list limit of `0` means no limit.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HistoryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(file) = lookup(HISTORY_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.history_file = PathBuf::from(file);
        }
        if let Some(raw) = lookup(LIST_LIMIT_ENV).filter(|v| !v.trim().is_empty()) {
            let limit: usize = raw.trim().parse().map_err(|_| {
                HistoryError::Config(format!("{LIST_LIMIT_ENV} must be a non-negative integer, got {raw:?}"))
            })?;
            config = config.with_list_limit(limit);
        }
        Ok(config)
    }

    pub fn with_history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_file = path.into();
        self
    }

    pub fn with_list_limit(mut self, limit: usize) -> Self {
        self.list_limit = (limit > 0).then_some(limit);
        self
    }
}
