//! Assignment model and the per-student assignment list.
//!
//! # Invariants
//! - Assignments are identified by exact, case-sensitive name.
//! - A `UniqueAssignmentList` never holds two assignments with the same name.
//! - Mark/unmark are idempotent.

use crate::model::fields::AssignmentName;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    name: AssignmentName,
    is_done: bool,
}

impl Assignment {
    /// Creates a not-yet-completed assignment.
    pub fn new(name: AssignmentName) -> Self {
        Self::with_status(name, false)
    }

    pub fn with_status(name: AssignmentName, is_done: bool) -> Self {
        Self { name, is_done }
    }

    pub fn name(&self) -> &AssignmentName {
        &self.name
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn mark(&mut self) {
        self.is_done = true;
    }

    pub fn unmark(&mut self) {
        self.is_done = false;
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let marker = if self.is_done { "X" } else { " " };
        write!(f, "[{marker}] {}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentListError {
    /// An assignment with this name already exists.
    Duplicate(AssignmentName),
    /// No assignment has this name.
    NotFound(AssignmentName),
}

impl Display for AssignmentListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(name) => write!(f, "assignment `{name}` already exists"),
            Self::NotFound(name) => write!(f, "assignment `{name}` not found"),
        }
    }
}

impl Error for AssignmentListError {}

/// Ordered assignments of one student, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueAssignmentList {
    items: Vec<Assignment>,
}

impl UniqueAssignmentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from persisted items, rejecting repeated names.
    pub fn from_vec(items: Vec<Assignment>) -> Result<Self, AssignmentListError> {
        let mut list = Self::new();
        for item in items {
            list.add(item)?;
        }
        Ok(list)
    }

    pub fn contains(&self, name: &AssignmentName) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &AssignmentName) -> Option<&Assignment> {
        self.items.iter().find(|item| item.name == *name)
    }

    /// Appends `assignment` unless its name is taken.
    pub fn add(&mut self, assignment: Assignment) -> Result<(), AssignmentListError> {
        if self.contains(&assignment.name) {
            return Err(AssignmentListError::Duplicate(assignment.name));
        }
        self.items.push(assignment);
        Ok(())
    }

    pub fn remove(&mut self, name: &AssignmentName) -> Result<Assignment, AssignmentListError> {
        let position = self
            .items
            .iter()
            .position(|item| item.name == *name)
            .ok_or_else(|| AssignmentListError::NotFound(name.clone()))?;
        Ok(self.items.remove(position))
    }

    pub fn mark(&mut self, name: &AssignmentName) -> Result<(), AssignmentListError> {
        self.get_mut(name)?.mark();
        Ok(())
    }

    pub fn unmark(&mut self, name: &AssignmentName) -> Result<(), AssignmentListError> {
        self.get_mut(name)?.unmark();
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn get_mut(&mut self, name: &AssignmentName) -> Result<&mut Assignment, AssignmentListError> {
        self.items
            .iter_mut()
            .find(|item| item.name == *name)
            .ok_or_else(|| AssignmentListError::NotFound(name.clone()))
    }
}

impl<'a> IntoIterator for &'a UniqueAssignmentList {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Assignment, AssignmentListError, UniqueAssignmentList};
    use crate::model::fields::AssignmentName;

    fn name(value: &str) -> AssignmentName {
        AssignmentName::parse(value).unwrap()
    }

    #[test]
    fn add_rejects_same_name_and_keeps_size() {
        let mut list = UniqueAssignmentList::new();
        list.add(Assignment::new(name("Worksheet 1"))).unwrap();
        let err = list
            .add(Assignment::with_status(name("Worksheet 1"), true))
            .unwrap_err();
        assert_eq!(err, AssignmentListError::Duplicate(name("Worksheet 1")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn names_match_case_sensitively() {
        let mut list = UniqueAssignmentList::new();
        list.add(Assignment::new(name("Essay"))).unwrap();
        list.add(Assignment::new(name("essay"))).unwrap();
        assert_eq!(list.len(), 2);
        assert!(matches!(
            list.mark(&name("ESSAY")),
            Err(AssignmentListError::NotFound(_))
        ));
    }

    #[test]
    fn mark_then_unmark_restores_flag_and_is_idempotent() {
        let mut list = UniqueAssignmentList::new();
        list.add(Assignment::new(name("Worksheet 1"))).unwrap();

        list.mark(&name("Worksheet 1")).unwrap();
        list.mark(&name("Worksheet 1")).unwrap();
        assert!(list.get(&name("Worksheet 1")).unwrap().is_done());

        list.unmark(&name("Worksheet 1")).unwrap();
        assert!(!list.get(&name("Worksheet 1")).unwrap().is_done());
    }

    #[test]
    fn remove_preserves_order_of_remaining_items() {
        let mut list = UniqueAssignmentList::from_vec(vec![
            Assignment::new(name("A")),
            Assignment::new(name("B")),
            Assignment::new(name("C")),
        ])
        .unwrap();
        list.remove(&name("B")).unwrap();
        let names: Vec<&str> = list.iter().map(|item| item.name().as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert!(list.remove(&name("B")).is_err());
    }

    #[test]
    fn display_shows_completion_marker() {
        let mut assignment = Assignment::new(name("Essay"));
        assert_eq!(assignment.to_string(), "[ ] Essay");
        assignment.mark();
        assert_eq!(assignment.to_string(), "[X] Essay");
    }
}
