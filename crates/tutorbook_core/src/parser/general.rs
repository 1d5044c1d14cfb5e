//! Parsers for commands that take no arguments. Trailing text is ignored.

use super::ParseError;
use crate::command::{ClearCommand, Command, ExitCommand, HelpCommand};

pub(super) fn parse_clear(_arguments: &str) -> Result<Command, ParseError> {
    Ok(Command::Clear(ClearCommand))
}

pub(super) fn parse_help(_arguments: &str) -> Result<Command, ParseError> {
    Ok(Command::Help(HelpCommand))
}

pub(super) fn parse_exit(_arguments: &str) -> Result<Command, ParseError> {
    Ok(Command::Exit(ExitCommand))
}
