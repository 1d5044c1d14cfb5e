//! Storage-facing record shapes.
//!
//! # Responsibility
//! - Mirror every entity as plain optional strings for serde and SQL rows.
//! - Convert back into validated entities, reporting the first bad field.
//!
//! # Invariants
//! - Conversion checks fields in declaration order; a missing field is
//!   reported before any later field is validated.
//! - Lesson subjects are stored as one `", "`-joined string in sorted order.

use super::{StorageError, StorageResult};
use crate::model::assignment::{Assignment, UniqueAssignmentList};
use crate::model::datetime::{Date, Time};
use crate::model::fields::{Address, AssignmentName, Email, Name, Phone, Subject, Tag};
use crate::model::lesson::Lesson;
use crate::model::record_book::RecordBook;
use crate::model::student::Student;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const MESSAGE_DUPLICATE_STUDENT: &str = "Students list contains duplicate student(s).";
pub const MESSAGE_DUPLICATE_LESSON: &str = "Lessons list contains duplicate lesson(s).";
pub const MESSAGE_DUPLICATE_ASSIGNMENT: &str =
    "Assignments list contains duplicate assignment(s).";

const SUBJECT_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedLesson {
    pub subject: Option<String>,
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl From<&Lesson> for PersistedLesson {
    fn from(lesson: &Lesson) -> Self {
        let subjects: Vec<&str> = lesson.subjects().iter().map(Subject::as_str).collect();
        Self {
            subject: Some(subjects.join(SUBJECT_SEPARATOR)),
            name: Some(lesson.student_name().to_string()),
            date: Some(lesson.date().to_input_string()),
            time: Some(lesson.time().to_input_string()),
        }
    }
}

impl PersistedLesson {
    const ENTITY: &'static str = "Lesson";

    pub fn to_model(&self) -> StorageResult<Lesson> {
        let name = Name::parse(required(&self.name, Self::ENTITY, Name::LABEL)?)?;
        let date = Date::parse(required(&self.date, Self::ENTITY, Date::LABEL)?)?;
        let time = Time::parse(required(&self.time, Self::ENTITY, Time::LABEL)?)?;
        let subjects = required(&self.subject, Self::ENTITY, Subject::LABEL)?
            .split(',')
            .map(|part| Subject::parse(part.trim()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Lesson::new(name, date, time, subjects)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedAssignment {
    pub name: Option<String>,
    #[serde(default)]
    pub done: bool,
}

impl From<&Assignment> for PersistedAssignment {
    fn from(assignment: &Assignment) -> Self {
        Self {
            name: Some(assignment.name().to_string()),
            done: assignment.is_done(),
        }
    }
}

impl PersistedAssignment {
    const ENTITY: &'static str = "Assignment";

    pub fn to_model(&self) -> StorageResult<Assignment> {
        let name = required(&self.name, Self::ENTITY, AssignmentName::LABEL)?;
        let name = AssignmentName::parse(name)?;
        Ok(Assignment::with_status(name, self.done))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedStudent {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub subject: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub assignments: Vec<PersistedAssignment>,
}

impl From<&Student> for PersistedStudent {
    fn from(student: &Student) -> Self {
        Self {
            name: Some(student.name().to_string()),
            phone: Some(student.phone().to_string()),
            email: Some(student.email().to_string()),
            address: Some(student.address().to_string()),
            subject: Some(student.subject().to_string()),
            tags: student.tags().iter().map(Tag::to_string).collect(),
            assignments: student
                .assignments()
                .iter()
                .map(PersistedAssignment::from)
                .collect(),
        }
    }
}

impl PersistedStudent {
    const ENTITY: &'static str = "Student";

    pub fn to_model(&self) -> StorageResult<Student> {
        let name = Name::parse(required(&self.name, Self::ENTITY, Name::LABEL)?)?;
        let phone = Phone::parse(required(&self.phone, Self::ENTITY, Phone::LABEL)?)?;
        let email = Email::parse(required(&self.email, Self::ENTITY, Email::LABEL)?)?;
        let address = Address::parse(required(&self.address, Self::ENTITY, Address::LABEL)?)?;
        let subject = Subject::parse(required(&self.subject, Self::ENTITY, Subject::LABEL)?)?;
        let tags = self
            .tags
            .iter()
            .map(|tag| Tag::parse(tag.as_str()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        let assignments = self
            .assignments
            .iter()
            .map(PersistedAssignment::to_model)
            .collect::<StorageResult<Vec<_>>>()?;
        let assignments = UniqueAssignmentList::from_vec(assignments)
            .map_err(|_| StorageError::DuplicateRecords(MESSAGE_DUPLICATE_ASSIGNMENT))?;

        Ok(Student::new(name, phone, email, address, subject, tags).with_assignments(assignments))
    }
}

/// Whole record book as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecordBook {
    #[serde(default)]
    pub students: Vec<PersistedStudent>,
    #[serde(default)]
    pub lessons: Vec<PersistedLesson>,
}

impl From<&RecordBook> for PersistedRecordBook {
    fn from(book: &RecordBook) -> Self {
        Self {
            students: book.students().iter().map(PersistedStudent::from).collect(),
            lessons: book.lessons().iter().map(PersistedLesson::from).collect(),
        }
    }
}

impl PersistedRecordBook {
    pub fn to_model(&self) -> StorageResult<RecordBook> {
        let mut book = RecordBook::new();
        for persisted in &self.students {
            book.add_student(persisted.to_model()?)
                .map_err(|_| StorageError::DuplicateRecords(MESSAGE_DUPLICATE_STUDENT))?;
        }
        for persisted in &self.lessons {
            book.add_lesson(persisted.to_model()?)
                .map_err(|_| StorageError::DuplicateRecords(MESSAGE_DUPLICATE_LESSON))?;
        }
        Ok(book)
    }
}

fn required<'a>(
    value: &'a Option<String>,
    entity: &'static str,
    field: &'static str,
) -> StorageResult<&'a str> {
    value
        .as_deref()
        .ok_or(StorageError::MissingField { entity, field })
}

#[cfg(test)]
mod tests {
    use super::{PersistedLesson, PersistedRecordBook, PersistedStudent, MESSAGE_DUPLICATE_STUDENT};
    use crate::model::datetime::Time;
    use crate::storage::StorageError;
    use chrono::{Duration, Local};

    fn future_date() -> String {
        (Local::now().date_naive() + Duration::days(30))
            .format("%-d-%-m-%Y")
            .to_string()
    }

    fn lesson() -> PersistedLesson {
        PersistedLesson {
            subject: Some("Physics, Math".to_string()),
            name: Some("Amy Bee".to_string()),
            date: Some(future_date()),
            time: Some("14:00".to_string()),
        }
    }

    #[test]
    fn lesson_subjects_split_on_commas() {
        let model = lesson().to_model().expect("valid lesson");
        assert_eq!(model.subjects().len(), 2);
        assert_eq!(
            PersistedLesson::from(&model).subject.as_deref(),
            Some("Math, Physics")
        );
    }

    #[test]
    fn missing_lesson_fields_name_the_field() {
        let mut missing_time = lesson();
        missing_time.time = None;
        let err = missing_time.to_model().expect_err("time missing");
        assert_eq!(err.to_string(), "Lesson's Time field is missing!");

        let mut missing_name = lesson();
        missing_name.name = None;
        missing_name.time = None;
        let err = missing_name.to_model().expect_err("name missing first");
        assert_eq!(err.to_string(), "Lesson's Name field is missing!");
    }

    #[test]
    fn invalid_lesson_field_reports_constraints() {
        let mut bad_time = lesson();
        bad_time.time = Some("25:00".to_string());
        assert!(matches!(
            bad_time.to_model(),
            Err(StorageError::InvalidValue(message)) if message == Time::CONSTRAINTS
        ));
    }

    #[test]
    fn duplicate_students_are_rejected() {
        let student = PersistedStudent {
            name: Some("Amy Bee".to_string()),
            phone: Some("85355255".to_string()),
            email: Some("amy@gmail.com".to_string()),
            address: Some("123 Clementi Ave".to_string()),
            subject: Some("Math".to_string()),
            ..Default::default()
        };
        let mut other_phone = student.clone();
        other_phone.phone = Some("99999999".to_string());
        let book = PersistedRecordBook {
            students: vec![student, other_phone],
            lessons: Vec::new(),
        };
        let err = book.to_model().expect_err("duplicate names");
        assert_eq!(err.to_string(), MESSAGE_DUPLICATE_STUDENT);
    }
}
