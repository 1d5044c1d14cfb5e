//! Assignment commands. Each resolves its target student first, then applies
//! one change to a copy of that student's assignment list.

use super::{displayed_student, replace_student, CommandError, CommandResult, DisplayedList, Index};
use crate::model::assignment::Assignment;
use crate::model::fields::{AssignmentName, Name};
use crate::model::student::Student;
use crate::store::RecordStore;

/// How an assignment command picks its student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentTarget {
    /// Position in the displayed student list.
    Index(Index),
    /// Exact student name, looked up across all students.
    Name(Name),
}

impl StudentTarget {
    pub fn resolve(&self, store: &RecordStore) -> Result<Student, CommandError> {
        match self {
            Self::Index(index) => displayed_student(store, *index),
            Self::Name(name) => store
                .record_book()
                .find_student(name)
                .cloned()
                .ok_or_else(|| CommandError::StudentNotFound(name.clone())),
        }
    }
}

/// Shared execution path: resolve, update a copy, replace.
fn update_student(
    store: &mut RecordStore,
    target: &StudentTarget,
    update: impl FnOnce(&Student) -> Result<Student, CommandError>,
) -> Result<Student, CommandError> {
    let student = target.resolve(store)?;
    let updated = update(&student)?;
    replace_student(store, &student, updated.clone())?;
    Ok(updated)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAssignmentCommand {
    target: StudentTarget,
    assignment: AssignmentName,
}

impl AddAssignmentCommand {
    pub const USAGE: &'static str = "addAssignment: Adds an assignment to a student.\n\
        Parameters: INDEX as/ASSIGNMENT or n/STUDENT_NAME as/ASSIGNMENT\n\
        Example: addAssignment 1 as/Worksheet 1";

    pub fn new(target: StudentTarget, assignment: AssignmentName) -> Self {
        Self { target, assignment }
    }

    pub fn execute(self, store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        let assignment = Assignment::new(self.assignment.clone());
        let student = update_student(store, &self.target, |student| {
            student.with_assignment_added(assignment).map_err(CommandError::from)
        })?;
        Ok(CommandResult::refreshing(
            format!(
                "New assignment added to {}: {}",
                student.name(),
                self.assignment
            ),
            DisplayedList::Students,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAssignmentCommand {
    target: StudentTarget,
    assignment: AssignmentName,
}

impl DeleteAssignmentCommand {
    pub const USAGE: &'static str = "deleteAssignment: Removes an assignment from a student.\n\
        Parameters: INDEX as/ASSIGNMENT or n/STUDENT_NAME as/ASSIGNMENT\n\
        Example: deleteAssignment n/Amy Bee as/Worksheet 1";

    pub fn new(target: StudentTarget, assignment: AssignmentName) -> Self {
        Self { target, assignment }
    }

    pub fn execute(self, store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        let student = update_student(store, &self.target, |student| {
            student.with_assignment_removed(&self.assignment).map_err(CommandError::from)
        })?;
        Ok(CommandResult::refreshing(
            format!(
                "Deleted assignment from {}: {}",
                student.name(),
                self.assignment
            ),
            DisplayedList::Students,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkAssignmentCommand {
    target: StudentTarget,
    assignment: AssignmentName,
}

impl MarkAssignmentCommand {
    pub const USAGE: &'static str = "markAssignment: Marks a student's assignment as completed.\n\
        Parameters: INDEX as/ASSIGNMENT or n/STUDENT_NAME as/ASSIGNMENT\n\
        Example: markAssignment 1 as/Worksheet 1";

    pub fn new(target: StudentTarget, assignment: AssignmentName) -> Self {
        Self { target, assignment }
    }

    pub fn execute(self, store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        let student = update_student(store, &self.target, |student| {
            student.with_assignment_marked(&self.assignment).map_err(CommandError::from)
        })?;
        Ok(CommandResult::refreshing(
            format!(
                "Marked assignment of {} as done: {}",
                student.name(),
                self.assignment
            ),
            DisplayedList::Students,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmarkAssignmentCommand {
    target: StudentTarget,
    assignment: AssignmentName,
}

impl UnmarkAssignmentCommand {
    pub const USAGE: &'static str = "unmarkAssignment: Marks a student's assignment as not completed.\n\
        Parameters: INDEX as/ASSIGNMENT or n/STUDENT_NAME as/ASSIGNMENT\n\
        Example: unmarkAssignment n/Amy Bee as/Worksheet 1";

    pub fn new(target: StudentTarget, assignment: AssignmentName) -> Self {
        Self { target, assignment }
    }

    pub fn execute(self, store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        let student = update_student(store, &self.target, |student| {
            student.with_assignment_unmarked(&self.assignment).map_err(CommandError::from)
        })?;
        Ok(CommandResult::refreshing(
            format!(
                "Marked assignment of {} as not done: {}",
                student.name(),
                self.assignment
            ),
            DisplayedList::Students,
        ))
    }
}
