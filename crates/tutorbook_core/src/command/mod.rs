//! Executable commands over the record store.
//!
//! # Responsibility
//! - Represent one parsed unit of work per `Command` variant.
//! - Execute it against a caller-provided `RecordStore` and report the outcome.
//!
//! # Invariants
//! - `Command::execute` consumes the command; a command runs at most once.
//! - Positional indices resolve against the store's filtered view at execution time.
//! - A failing command leaves the store exactly as it was: every updated
//!   entity is built in full before it replaces the stored one.

mod assignment;
mod general;
mod index;
mod lesson;
mod student;

pub use assignment::{
    AddAssignmentCommand, DeleteAssignmentCommand, MarkAssignmentCommand, StudentTarget,
    UnmarkAssignmentCommand,
};
pub use general::{help_text, ClearCommand, ExitCommand, HelpCommand};
pub use index::Index;
pub use lesson::{AddLessonCommand, ListLessonsCommand};
pub use student::{
    AddStudentCommand, DeleteStudentCommand, EditStudentCommand, EditStudentDescriptor,
    FindCommand, ListStudentsCommand,
};

use crate::model::assignment::AssignmentListError;
use crate::model::fields::{AssignmentName, Name};
use crate::model::student::Student;
use crate::model::unique_list::UniqueListError;
use crate::store::RecordStore;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MESSAGE_INVALID_STUDENT_DISPLAYED_INDEX: &str = "The student index provided is invalid";

/// Which displayed list a successful command wants refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayedList {
    Students,
    Lessons,
}

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Human-readable feedback for the user.
    pub feedback: String,
    /// Displayed list to refresh, if any.
    pub refresh: Option<DisplayedList>,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            refresh: None,
            show_help: false,
            exit: false,
        }
    }

    pub fn refreshing(feedback: impl Into<String>, list: DisplayedList) -> Self {
        Self {
            refresh: Some(list),
            ..Self::new(feedback)
        }
    }
}

/// Record category named in duplicate diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Student,
    Lesson,
    Assignment,
}

/// Failure while executing a command against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Index is outside the currently displayed list.
    InvalidDisplayedIndex,
    /// A record with the same identity already exists.
    DuplicateRecord(RecordKind),
    /// Target student has no assignment with this name.
    AssignmentNotFound(AssignmentName),
    /// No student with this name exists.
    StudentNotFound(Name),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDisplayedIndex => f.write_str(MESSAGE_INVALID_STUDENT_DISPLAYED_INDEX),
            Self::DuplicateRecord(RecordKind::Student) => {
                f.write_str("This student already exists in the record book")
            }
            Self::DuplicateRecord(RecordKind::Lesson) => {
                f.write_str("This lesson already exists in the record book")
            }
            Self::DuplicateRecord(RecordKind::Assignment) => {
                f.write_str("This assignment already exists for the student")
            }
            Self::AssignmentNotFound(name) => {
                write!(f, "No assignment named `{name}` found for this student")
            }
            Self::StudentNotFound(name) => {
                write!(f, "No student named `{name}` found in the record book")
            }
        }
    }
}

impl Error for CommandError {}

impl CommandError {
    /// Stable code for log events; carries no user data.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDisplayedIndex => "invalid_displayed_index",
            Self::DuplicateRecord(_) => "duplicate_record",
            Self::AssignmentNotFound(_) => "assignment_not_found",
            Self::StudentNotFound(_) => "student_not_found",
        }
    }
}

impl From<AssignmentListError> for CommandError {
    fn from(value: AssignmentListError) -> Self {
        match value {
            AssignmentListError::Duplicate(_) => Self::DuplicateRecord(RecordKind::Assignment),
            AssignmentListError::NotFound(name) => Self::AssignmentNotFound(name),
        }
    }
}

/// One parsed unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddStudent(AddStudentCommand),
    EditStudent(EditStudentCommand),
    DeleteStudent(DeleteStudentCommand),
    Find(FindCommand),
    ListStudents(ListStudentsCommand),
    AddLesson(AddLessonCommand),
    ListLessons(ListLessonsCommand),
    AddAssignment(AddAssignmentCommand),
    DeleteAssignment(DeleteAssignmentCommand),
    MarkAssignment(MarkAssignmentCommand),
    UnmarkAssignment(UnmarkAssignmentCommand),
    Clear(ClearCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    /// Stable snake_case name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddStudent(_) => "add_student",
            Self::EditStudent(_) => "edit_student",
            Self::DeleteStudent(_) => "delete_student",
            Self::Find(_) => "find",
            Self::ListStudents(_) => "list_students",
            Self::AddLesson(_) => "add_lesson",
            Self::ListLessons(_) => "list_lessons",
            Self::AddAssignment(_) => "add_assignment",
            Self::DeleteAssignment(_) => "delete_assignment",
            Self::MarkAssignment(_) => "mark_assignment",
            Self::UnmarkAssignment(_) => "unmark_assignment",
            Self::Clear(_) => "clear",
            Self::Help(_) => "help",
            Self::Exit(_) => "exit",
        }
    }

    /// Returns whether a successful run changes persisted records.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::AddStudent(_)
                | Self::EditStudent(_)
                | Self::DeleteStudent(_)
                | Self::AddLesson(_)
                | Self::AddAssignment(_)
                | Self::DeleteAssignment(_)
                | Self::MarkAssignment(_)
                | Self::UnmarkAssignment(_)
                | Self::Clear(_)
        )
    }

    /// Runs the command against `store`.
    pub fn execute(self, store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        let name = self.name();
        let outcome = match self {
            Self::AddStudent(command) => command.execute(store),
            Self::EditStudent(command) => command.execute(store),
            Self::DeleteStudent(command) => command.execute(store),
            Self::Find(command) => command.execute(store),
            Self::ListStudents(command) => command.execute(store),
            Self::AddLesson(command) => command.execute(store),
            Self::ListLessons(command) => command.execute(store),
            Self::AddAssignment(command) => command.execute(store),
            Self::DeleteAssignment(command) => command.execute(store),
            Self::MarkAssignment(command) => command.execute(store),
            Self::UnmarkAssignment(command) => command.execute(store),
            Self::Clear(command) => command.execute(store),
            Self::Help(command) => command.execute(store),
            Self::Exit(command) => command.execute(store),
        };

        match &outcome {
            Ok(_) => info!("event=command_execute module=command status=ok command={name}"),
            Err(err) => debug!(
                "event=command_execute module=command status=rejected command={name} error_code={}",
                err.code()
            ),
        }
        outcome
    }
}

/// Clones the student displayed at `index`.
fn displayed_student(store: &RecordStore, index: Index) -> Result<Student, CommandError> {
    store
        .filtered_students()
        .get(index.zero_based())
        .map(|student| (*student).clone())
        .ok_or(CommandError::InvalidDisplayedIndex)
}

fn replace_student(
    store: &mut RecordStore,
    target: &Student,
    edited: Student,
) -> Result<(), CommandError> {
    store
        .record_book_mut()
        .set_student(target, edited)
        .map_err(|err| match err {
            UniqueListError::Duplicate => CommandError::DuplicateRecord(RecordKind::Student),
            UniqueListError::NotFound => CommandError::StudentNotFound(target.name().clone()),
        })
}
