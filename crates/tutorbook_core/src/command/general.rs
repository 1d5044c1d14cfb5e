use super::{
    AddAssignmentCommand, AddLessonCommand, AddStudentCommand, CommandError, CommandResult,
    DeleteAssignmentCommand, DeleteStudentCommand, DisplayedList, EditStudentCommand, FindCommand,
    ListLessonsCommand, ListStudentsCommand, MarkAssignmentCommand, UnmarkAssignmentCommand,
};
use crate::model::record_book::RecordBook;
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const USAGE: &'static str = "clear: Deletes every student and lesson. There is no confirmation.\n\
        Example: clear";

    pub fn execute(self, store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        store.replace_record_book(RecordBook::new());
        Ok(CommandResult::refreshing(
            "Record book has been cleared!",
            DisplayedList::Students,
        ))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const USAGE: &'static str = "help: Shows program usage instructions.\nExample: help";

    pub fn execute(self, _store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            show_help: true,
            ..CommandResult::new(help_text())
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const USAGE: &'static str = "exit: Saves and exits the program.\nExample: exit";

    pub fn execute(self, _store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            exit: true,
            ..CommandResult::new("Exiting TutorBook as requested ...")
        })
    }
}

const ALL_USAGES: &[&str] = &[
    AddStudentCommand::USAGE,
    EditStudentCommand::USAGE,
    DeleteStudentCommand::USAGE,
    FindCommand::USAGE,
    ListStudentsCommand::USAGE,
    AddLessonCommand::USAGE,
    ListLessonsCommand::USAGE,
    AddAssignmentCommand::USAGE,
    DeleteAssignmentCommand::USAGE,
    MarkAssignmentCommand::USAGE,
    UnmarkAssignmentCommand::USAGE,
    ClearCommand::USAGE,
    HelpCommand::USAGE,
    ExitCommand::USAGE,
];

/// Usage text of every command, one block per command.
pub fn help_text() -> String {
    ALL_USAGES.join("\n\n")
}
