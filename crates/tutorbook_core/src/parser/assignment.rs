//! Parsers for assignment commands.
//!
//! All four share one shape: `INDEX as/ASSIGNMENT` or `n/NAME as/ASSIGNMENT`.

use super::tokenizer::{tokenize, PREFIX_ASSIGNMENT, PREFIX_NAME};
use super::util::parse_index;
use super::ParseError;
use crate::command::{
    AddAssignmentCommand, Command, DeleteAssignmentCommand, MarkAssignmentCommand, StudentTarget,
    UnmarkAssignmentCommand,
};
use crate::model::fields::{AssignmentName, Name};

fn parse_targeted(
    arguments: &str,
    usage: &'static str,
) -> Result<(StudentTarget, AssignmentName), ParseError> {
    let map = tokenize(arguments, &[PREFIX_NAME, PREFIX_ASSIGNMENT]);
    let Some(assignment) = map.value(PREFIX_ASSIGNMENT) else {
        return Err(ParseError::InvalidFormat { usage });
    };
    map.ensure_single_valued(&[PREFIX_NAME, PREFIX_ASSIGNMENT])?;

    let target = match (map.preamble(), map.value(PREFIX_NAME)) {
        (preamble, None) if !preamble.is_empty() => StudentTarget::Index(parse_index(preamble)?),
        ("", Some(name)) => StudentTarget::Name(Name::parse(name)?),
        _ => return Err(ParseError::InvalidFormat { usage }),
    };
    Ok((target, AssignmentName::parse(assignment)?))
}

pub(super) fn parse_add_assignment(arguments: &str) -> Result<Command, ParseError> {
    let (target, assignment) = parse_targeted(arguments, AddAssignmentCommand::USAGE)?;
    Ok(Command::AddAssignment(AddAssignmentCommand::new(target, assignment)))
}

pub(super) fn parse_delete_assignment(arguments: &str) -> Result<Command, ParseError> {
    let (target, assignment) = parse_targeted(arguments, DeleteAssignmentCommand::USAGE)?;
    Ok(Command::DeleteAssignment(DeleteAssignmentCommand::new(target, assignment)))
}

pub(super) fn parse_mark_assignment(arguments: &str) -> Result<Command, ParseError> {
    let (target, assignment) = parse_targeted(arguments, MarkAssignmentCommand::USAGE)?;
    Ok(Command::MarkAssignment(MarkAssignmentCommand::new(target, assignment)))
}

pub(super) fn parse_unmark_assignment(arguments: &str) -> Result<Command, ParseError> {
    let (target, assignment) = parse_targeted(arguments, UnmarkAssignmentCommand::USAGE)?;
    Ok(Command::UnmarkAssignment(UnmarkAssignmentCommand::new(target, assignment)))
}
