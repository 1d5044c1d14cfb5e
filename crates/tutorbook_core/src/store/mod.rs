//! In-memory record store with filtered views.
//!
//! # Responsibility
//! - Own the record book for the lifetime of a session.
//! - Track the active student and lesson filters that positional indices are
//!   resolved against.
//!
//! # Invariants
//! - Filtered views are recomputed from the record book on every read; they
//!   never hold stale entities.
//! - Mutations go through `RecordBook`, so duplicate rejection always applies.

mod filter;

pub use filter::{LessonFilter, StudentFilter};

use crate::model::lesson::Lesson;
use crate::model::record_book::RecordBook;
use crate::model::student::Student;

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    book: RecordBook,
    student_filter: StudentFilter,
    lesson_filter: LessonFilter,
}

impl RecordStore {
    pub fn new(book: RecordBook) -> Self {
        Self {
            book,
            ..Self::default()
        }
    }

    pub fn record_book(&self) -> &RecordBook {
        &self.book
    }

    pub fn record_book_mut(&mut self) -> &mut RecordBook {
        &mut self.book
    }

    /// Replaces all records and resets both filters.
    pub fn replace_record_book(&mut self, book: RecordBook) {
        self.book = book;
        self.student_filter = StudentFilter::All;
        self.lesson_filter = LessonFilter::default();
    }

    pub fn student_filter(&self) -> &StudentFilter {
        &self.student_filter
    }

    pub fn set_student_filter(&mut self, filter: StudentFilter) {
        self.student_filter = filter;
    }

    pub fn lesson_filter(&self) -> &LessonFilter {
        &self.lesson_filter
    }

    pub fn set_lesson_filter(&mut self, filter: LessonFilter) {
        self.lesson_filter = filter;
    }

    /// Students currently displayed, in record-book order.
    pub fn filtered_students(&self) -> Vec<&Student> {
        self.book
            .students()
            .iter()
            .filter(|student| self.student_filter.matches(student))
            .collect()
    }

    /// Lessons currently displayed, in record-book order.
    pub fn filtered_lessons(&self) -> Vec<&Lesson> {
        self.book
            .lessons()
            .iter()
            .filter(|lesson| self.lesson_filter.matches(lesson))
            .collect()
    }
}
