//! Lesson entity.
//!
//! # Invariants
//! - A lesson is identified by `(student_name, date, time)`.
//! - The subject set is never empty.

use crate::model::datetime::{Date, Time};
use crate::model::fields::{FieldError, Name, Subject};
use crate::model::unique_list::Identity;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

pub const MESSAGE_NO_SUBJECTS: &str = "A lesson must cover at least one subject";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    student_name: Name,
    date: Date,
    time: Time,
    subjects: BTreeSet<Subject>,
}

impl Lesson {
    pub fn new(
        student_name: Name,
        date: Date,
        time: Time,
        subjects: BTreeSet<Subject>,
    ) -> Result<Self, FieldError> {
        if subjects.is_empty() {
            return Err(FieldError::new(Subject::LABEL, MESSAGE_NO_SUBJECTS));
        }
        Ok(Self {
            student_name,
            date,
            time,
            subjects,
        })
    }

    pub fn student_name(&self) -> &Name {
        &self.student_name
    }

    pub fn date(&self) -> &Date {
        &self.date
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn subjects(&self) -> &BTreeSet<Subject> {
        &self.subjects
    }

    pub fn is_same_lesson(&self, other: &Lesson) -> bool {
        self.student_name == other.student_name
            && self.date == other.date
            && self.time == other.time
    }
}

impl Identity for Lesson {
    fn is_same(&self, other: &Self) -> bool {
        self.is_same_lesson(other)
    }
}

impl Display for Lesson {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Date: {}; Time: {}; Subjects: ",
            self.student_name, self.date, self.time
        )?;
        for subject in &self.subjects {
            write!(f, "[{subject}]")?;
        }
        Ok(())
    }
}
