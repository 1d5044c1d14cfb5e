//! Input line to `Command` translation.
//!
//! # Responsibility
//! - Split a raw line into a command word and its argument tail.
//! - Route the tail to the parser registered for that word.
//! - Turn field validation failures into user-facing parse errors.
//!
//! # Invariants
//! - Lookup is an exact, case-sensitive match against `COMMAND_TABLE`.
//! - Parsers never touch the record store; they only build commands.

mod assignment;
mod general;
mod lesson;
mod student;
pub mod tokenizer;
mod util;

pub use tokenizer::{tokenize, ArgumentMultimap, Prefix};
pub use util::parse_index;

use crate::command::{Command, HelpCommand};
use crate::model::fields::FieldError;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Failure while turning an input line into a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Blank input.
    MalformedInput,
    /// Command word not in the dispatch table.
    UnknownCommand,
    /// Required fields missing or preamble in the wrong shape.
    InvalidFormat { usage: &'static str },
    /// A value failed its field's validation.
    InvalidValue { message: &'static str },
    /// Positional index is not a positive integer.
    InvalidIndex,
    /// Single-valued fields given more than once.
    DuplicatePrefixes(Vec<Prefix>),
    /// Edit command without any field to change.
    NoFieldEdited,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput => {
                write!(f, "{MESSAGE_INVALID_COMMAND_FORMAT}{}", HelpCommand::USAGE)
            }
            Self::UnknownCommand => f.write_str(MESSAGE_UNKNOWN_COMMAND),
            Self::InvalidFormat { usage } => write!(f, "{MESSAGE_INVALID_COMMAND_FORMAT}{usage}"),
            Self::InvalidValue { message } => f.write_str(message),
            Self::InvalidIndex => f.write_str(MESSAGE_INVALID_INDEX),
            Self::DuplicatePrefixes(prefixes) => {
                let joined = prefixes
                    .iter()
                    .map(Prefix::as_str)
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(
                    f,
                    "Multiple values specified for the following single-valued field(s): {joined}"
                )
            }
            Self::NoFieldEdited => f.write_str("At least one field to edit must be provided."),
        }
    }
}

impl Error for ParseError {}

impl From<FieldError> for ParseError {
    fn from(value: FieldError) -> Self {
        Self::InvalidValue {
            message: value.constraints,
        }
    }
}

impl ParseError {
    /// Stable code for log events; carries no user data.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedInput => "malformed_input",
            Self::UnknownCommand => "unknown_command",
            Self::InvalidFormat { .. } => "invalid_format",
            Self::InvalidValue { .. } => "invalid_value",
            Self::InvalidIndex => "invalid_index",
            Self::DuplicatePrefixes(_) => "duplicate_prefixes",
            Self::NoFieldEdited => "no_field_edited",
        }
    }
}

/// Parser for the argument tail of one command word.
pub type ParserFn = fn(&str) -> Result<Command, ParseError>;

/// Every recognized command word and the parser it routes to.
pub const COMMAND_TABLE: &[(&str, ParserFn)] = &[
    ("add", student::parse_add_student),
    ("addStudent", student::parse_add_student),
    ("addLesson", lesson::parse_add_lesson),
    ("addAssignment", assignment::parse_add_assignment),
    ("edit", student::parse_edit_student),
    ("editStudent", student::parse_edit_student),
    ("delete", student::parse_delete_student),
    ("deleteStudent", student::parse_delete_student),
    ("deleteAssignment", assignment::parse_delete_assignment),
    ("clear", general::parse_clear),
    ("find", student::parse_find),
    ("listStudents", student::parse_list_students),
    ("listLessons", lesson::parse_list_lessons),
    ("markAssignment", assignment::parse_mark_assignment),
    ("unmarkAssignment", assignment::parse_unmark_assignment),
    ("exit", general::parse_exit),
    ("help", general::parse_help),
];

/// Recognized command words in table order.
pub fn command_words() -> impl Iterator<Item = &'static str> {
    COMMAND_TABLE.iter().map(|(word, _)| *word)
}

/// Parses one raw input line.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        debug!("event=parse_command module=parser status=rejected error_code=malformed_input");
        return Err(ParseError::MalformedInput);
    }

    let (command_word, arguments) = match trimmed.find(char::is_whitespace) {
        Some(at) => trimmed.split_at(at),
        None => (trimmed, ""),
    };

    let Some(parser) = lookup(command_word) else {
        debug!("event=parse_command module=parser status=rejected error_code=unknown_command");
        return Err(ParseError::UnknownCommand);
    };

    let outcome = parser(arguments);
    match &outcome {
        Ok(command) => debug!(
            "event=parse_command module=parser status=ok command_word={command_word} command={}",
            command.name()
        ),
        Err(err) => debug!(
            "event=parse_command module=parser status=rejected command_word={command_word} error_code={}",
            err.code()
        ),
    }
    outcome
}

fn lookup(command_word: &str) -> Option<ParserFn> {
    COMMAND_TABLE
        .iter()
        .find(|(word, _)| *word == command_word)
        .map(|(_, parser)| *parser)
}

#[cfg(test)]
mod tests {
    use super::{command_words, parse_command, ParseError, COMMAND_TABLE};
    use crate::command::Command;

    #[test]
    fn blank_input_is_malformed() {
        assert_eq!(parse_command("   "), Err(ParseError::MalformedInput));
        assert!(ParseError::MalformedInput
            .to_string()
            .starts_with("Invalid command format! \n"));
    }

    #[test]
    fn command_words_are_case_sensitive() {
        assert_eq!(parse_command("LIST"), Err(ParseError::UnknownCommand));
        assert_eq!(parse_command("liststudents"), Err(ParseError::UnknownCommand));
        assert!(matches!(
            parse_command("listStudents"),
            Ok(Command::ListStudents(_))
        ));
    }

    #[test]
    fn table_words_are_unique() {
        let mut words: Vec<_> = command_words().collect();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), COMMAND_TABLE.len());
    }
}
