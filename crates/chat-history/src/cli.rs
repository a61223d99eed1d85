//! Command surface: parsed subcommands dispatched onto a [`ChatHistory`].

use clap::Subcommand;

use crate::error::HistoryError;
use crate::history::ChatHistory;
use crate::response::Response;
use crate::store::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a chat session, or update the title and timestamp of an existing one
    Add {
        id: String,
        title: String,
        /// Unix seconds; defaults to now
        #[arg(allow_negative_numbers = true)]
        timestamp: Option<i64>,
    },
    /// Look up a chat session and move it to the front of the index
    Access { id: String },
    /// List chat sessions, most recent first
    List,
    /// Delete a chat session
    Delete { id: String },
    /// Delete every chat session
    Clear,
    /// Print the current shape of the index
    Tree,
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Response(Response),
    /// Plain-text tree dump from [`Command::Tree`].
    Text(String),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Response(r) => write!(f, "{r}"),
            Outcome::Text(t) => f.write_str(t),
        }
    }
}

/// Run one command. Unknown ids produce a `success:false` response rather
/// than an error; errors are reserved for persistence and input failures.
pub fn execute<S: SessionStore>(history: &mut ChatHistory<S>, command: Command) -> Result<Outcome, HistoryError> {
    let response = match command {
        Command::Add { id, title, timestamp } => Response::chat(history.add(&id, &title, timestamp)?),
        Command::Access { id } => match history.access(&id)? {
            Some(record) => Response::chat(record),
            None => Response::not_found(),
        },
        Command::List => Response::list(history.list()),
        Command::Delete { id } => {
            if history.delete_by_key(&id)? {
                Response::message("Chat deleted")
            } else {
                Response::not_found()
            }
        }
        Command::Clear => {
            history.clear_all()?;
            Response::message("All chats cleared")
        }
        Command::Tree => return Ok(Outcome::Text(history.tree().to_string())),
    };
    Ok(Outcome::Response(response))
}
