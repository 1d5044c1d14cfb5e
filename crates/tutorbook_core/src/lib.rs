//! Core of TutorBook: records, commands and persistence for a tutor's
//! students, lessons and assignments.
//! Front ends feed raw input lines to a `Session` and render its replies.

pub mod command;
pub mod logging;
pub mod model;
pub mod parser;
pub mod session;
pub mod storage;
pub mod store;

pub use command::{Command, CommandError, CommandResult, DisplayedList, Index};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record_book::RecordBook;
pub use parser::{command_words, parse_command, ParseError};
pub use session::{Reply, Session, SessionError};
pub use storage::{RecordStorage, SqliteRecordStorage, StorageError, StorageResult};
pub use store::RecordStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
