//! Authoritative collections of students and lessons.

use crate::model::fields::Name;
use crate::model::lesson::Lesson;
use crate::model::student::Student;
use crate::model::unique_list::{UniqueList, UniqueListError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBook {
    students: UniqueList<Student>,
    lessons: UniqueList<Lesson>,
}

impl RecordBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(
        students: Vec<Student>,
        lessons: Vec<Lesson>,
    ) -> Result<Self, UniqueListError> {
        Ok(Self {
            students: UniqueList::from_vec(students)?,
            lessons: UniqueList::from_vec(lessons)?,
        })
    }

    pub fn students(&self) -> &[Student] {
        self.students.as_slice()
    }

    pub fn lessons(&self) -> &[Lesson] {
        self.lessons.as_slice()
    }

    pub fn has_student(&self, student: &Student) -> bool {
        self.students.contains(student)
    }

    pub fn find_student(&self, name: &Name) -> Option<&Student> {
        self.students.iter().find(|student| student.name() == name)
    }

    pub fn add_student(&mut self, student: Student) -> Result<(), UniqueListError> {
        self.students.add(student)
    }

    pub fn set_student(&mut self, target: &Student, edited: Student) -> Result<(), UniqueListError> {
        self.students.set(target, edited)
    }

    pub fn remove_student(&mut self, target: &Student) -> Result<Student, UniqueListError> {
        self.students.remove(target)
    }

    pub fn add_lesson(&mut self, lesson: Lesson) -> Result<(), UniqueListError> {
        self.lessons.add(lesson)
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.lessons.is_empty()
    }
}
