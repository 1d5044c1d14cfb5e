//! Student-level commands.

use super::{
    displayed_student, replace_student, CommandError, CommandResult, DisplayedList, Index,
    RecordKind,
};
use crate::model::fields::{Address, Email, Name, Phone, Subject, Tag};
use crate::model::student::Student;
use crate::store::{RecordStore, StudentFilter};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStudentCommand {
    student: Student,
}

impl AddStudentCommand {
    pub const USAGE: &'static str = "addStudent (alias: add): Adds a student to the record book.\n\
        Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS s/SUBJECT [t/TAG]...\n\
        Example: addStudent n/Amy Bee p/85355255 e/amy@gmail.com a/123 Clementi Ave s/Math t/friends";

    pub fn new(student: Student) -> Self {
        Self { student }
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    pub fn execute(self, store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        let feedback = format!("New student added: {}", self.student);
        store
            .record_book_mut()
            .add_student(self.student)
            .map_err(|_| CommandError::DuplicateRecord(RecordKind::Student))?;
        Ok(CommandResult::refreshing(feedback, DisplayedList::Students))
    }
}

/// Fields to overwrite on an edited student. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditStudentDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub subject: Option<Subject>,
    /// `Some(empty)` clears all tags.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditStudentDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.subject.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited student; assignments carry over unchanged.
    pub fn apply_to(&self, student: &Student) -> Student {
        Student::new(
            self.name.clone().unwrap_or_else(|| student.name().clone()),
            self.phone.clone().unwrap_or_else(|| student.phone().clone()),
            self.email.clone().unwrap_or_else(|| student.email().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| student.address().clone()),
            self.subject
                .clone()
                .unwrap_or_else(|| student.subject().clone()),
            self.tags.clone().unwrap_or_else(|| student.tags().clone()),
        )
        .with_assignments(student.assignments().clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditStudentCommand {
    index: Index,
    descriptor: EditStudentDescriptor,
}

impl EditStudentCommand {
    pub const USAGE: &'static str = "editStudent (alias: edit): Edits the student at the displayed index. \
        Existing values are overwritten; t/ with no value clears all tags.\n\
        Parameters: INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [s/SUBJECT] [t/TAG]...\n\
        Example: editStudent 1 p/91234567 e/amy@example.com";

    pub fn new(index: Index, descriptor: EditStudentDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(self, store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        let target = displayed_student(store, self.index)?;
        let edited = self.descriptor.apply_to(&target);

        if edited == target {
            return Ok(CommandResult::new(format!(
                "No changes made to student: {target}"
            )));
        }
        if !target.is_same_student(&edited) && store.record_book().has_student(&edited) {
            return Err(CommandError::DuplicateRecord(RecordKind::Student));
        }

        let feedback = format!("Edited Student: {edited}");
        replace_student(store, &target, edited)?;
        store.set_student_filter(StudentFilter::All);
        Ok(CommandResult::refreshing(feedback, DisplayedList::Students))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStudentCommand {
    index: Index,
}

impl DeleteStudentCommand {
    pub const USAGE: &'static str = "deleteStudent (alias: delete): Deletes the student at the displayed index.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: deleteStudent 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn execute(self, store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        let target = displayed_student(store, self.index)?;
        store
            .record_book_mut()
            .remove_student(&target)
            .map_err(|_| CommandError::StudentNotFound(target.name().clone()))?;
        Ok(CommandResult::refreshing(
            format!("Deleted Student: {target}"),
            DisplayedList::Students,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub const USAGE: &'static str = "find: Lists students whose names contain any of the keywords \
        (case-insensitive, whole words).\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find amy bob";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn execute(self, store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        store.set_student_filter(StudentFilter::NameKeywords(self.keywords));
        let listed = store.filtered_students().len();
        Ok(CommandResult::refreshing(
            format!("{listed} students listed!"),
            DisplayedList::Students,
        ))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListStudentsCommand;

impl ListStudentsCommand {
    pub const USAGE: &'static str = "listStudents: Lists all students.\nExample: listStudents";

    pub fn execute(self, store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        store.set_student_filter(StudentFilter::All);
        Ok(CommandResult::refreshing(
            "Listed all students",
            DisplayedList::Students,
        ))
    }
}
