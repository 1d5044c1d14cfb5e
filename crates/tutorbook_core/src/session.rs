//! One interactive session over a record storage backend.
//!
//! # Responsibility
//! - Load the record book at start, falling back to an empty one.
//! - Run each input line through parse, execute and save.
//!
//! # Invariants
//! - Storage is written only after a mutating command succeeded.
//! - Storage failures never undo an in-memory change; they surface as warnings.
//! - After a failed load nothing is saved until `clear` succeeds, so an
//!   unreadable data file is never overwritten by an unrelated edit.

use crate::command::{Command, CommandError, CommandResult};
use crate::model::record_book::RecordBook;
use crate::parser::{parse_command, ParseError};
use crate::storage::RecordStorage;
use crate::store::RecordStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Parse(ParseError),
    Command(CommandError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
        }
    }
}

impl From<ParseError> for SessionError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for SessionError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

/// Outcome of an accepted input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub result: CommandResult,
    /// Set when the command succeeded but its change was not saved.
    pub storage_warning: Option<String>,
}

pub struct Session<S: RecordStorage> {
    storage: S,
    store: RecordStore,
    load_warning: Option<String>,
    saving_suspended: bool,
}

pub const MESSAGE_SAVING_SUSPENDED: &str = "Changes are kept in memory only: the stored data \
could not be read and saving now would overwrite it. Run `clear` to start a new record book \
on disk.";

impl<S: RecordStorage> Session<S> {
    /// Loads the stored record book; unreadable data yields an empty book and
    /// a load warning.
    pub fn start(mut storage: S) -> Self {
        let (book, load_warning) = match storage.load() {
            Ok(book) => (book, None),
            Err(err) => {
                warn!(
                    "event=session_start module=session status=degraded error_code={}",
                    err.code()
                );
                (
                    RecordBook::new(),
                    Some(format!(
                        "Stored data could not be read ({err}). Starting with an empty record book; \
                         nothing is saved until you run `clear`."
                    )),
                )
            }
        };
        Self {
            storage,
            store: RecordStore::new(book),
            saving_suspended: load_warning.is_some(),
            load_warning,
        }
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns whether mutations are currently kept out of storage.
    pub fn is_saving_suspended(&self) -> bool {
        self.saving_suspended
    }

    /// Parses and runs one input line.
    pub fn execute(&mut self, line: &str) -> Result<Reply, SessionError> {
        let command = parse_command(line)?;
        let mutating = command.is_mutating();
        let resets_book = matches!(command, Command::Clear(_));
        let result = command.execute(&mut self.store)?;

        if resets_book && self.saving_suspended {
            info!("event=session_save module=session status=resumed");
            self.saving_suspended = false;
        }
        let storage_warning = match (mutating, self.saving_suspended) {
            (false, _) => None,
            (true, true) => Some(MESSAGE_SAVING_SUSPENDED.to_string()),
            (true, false) => self.persist(),
        };
        Ok(Reply {
            result,
            storage_warning,
        })
    }

    fn persist(&mut self) -> Option<String> {
        match self.storage.save(self.store.record_book()) {
            Ok(()) => None,
            Err(err) => {
                warn!(
                    "event=session_save module=session status=error error_code={}",
                    err.code()
                );
                Some(format!("Could not save data to storage: {err}"))
            }
        }
    }
}
