//! Student entity.
//!
//! # Responsibility
//! - Aggregate contact fields, tags and assignments of one student.
//! - Produce updated copies for assignment changes.
//!
//! # Invariants
//! - Two students are the same student when their names are equal.
//! - `PartialEq` compares every field, including tags and assignments.
//! - A `Student` never shares its assignment list with another value;
//!   `with_assignment_*` return independent copies.

use crate::model::assignment::{Assignment, AssignmentListError, UniqueAssignmentList};
use crate::model::fields::{Address, AssignmentName, Email, Name, Phone, Subject, Tag};
use crate::model::unique_list::Identity;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    subject: Subject,
    tags: BTreeSet<Tag>,
    assignments: UniqueAssignmentList,
}

impl Student {
    /// Creates a student with no assignments.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        subject: Subject,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            subject,
            tags,
            assignments: UniqueAssignmentList::new(),
        }
    }

    /// Replaces the assignment list, e.g. when restoring persisted data.
    pub fn with_assignments(mut self, assignments: UniqueAssignmentList) -> Self {
        self.assignments = assignments;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn assignments(&self) -> &UniqueAssignmentList {
        &self.assignments
    }

    /// Weak identity used for duplicate rejection.
    pub fn is_same_student(&self, other: &Student) -> bool {
        self.name == other.name
    }

    pub fn with_assignment_added(
        &self,
        assignment: Assignment,
    ) -> Result<Student, AssignmentListError> {
        self.updated(|assignments| assignments.add(assignment))
    }

    pub fn with_assignment_removed(
        &self,
        name: &AssignmentName,
    ) -> Result<Student, AssignmentListError> {
        self.updated(|assignments| assignments.remove(name).map(drop))
    }

    pub fn with_assignment_marked(
        &self,
        name: &AssignmentName,
    ) -> Result<Student, AssignmentListError> {
        self.updated(|assignments| assignments.mark(name))
    }

    pub fn with_assignment_unmarked(
        &self,
        name: &AssignmentName,
    ) -> Result<Student, AssignmentListError> {
        self.updated(|assignments| assignments.unmark(name))
    }

    fn updated(
        &self,
        change: impl FnOnce(&mut UniqueAssignmentList) -> Result<(), AssignmentListError>,
    ) -> Result<Student, AssignmentListError> {
        let mut next = self.clone();
        change(&mut next.assignments)?;
        Ok(next)
    }
}

impl Identity for Student {
    fn is_same(&self, other: &Self) -> bool {
        self.is_same_student(other)
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Subject: {}; Tags: ",
            self.name, self.phone, self.email, self.address, self.subject
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        Ok(())
    }
}
