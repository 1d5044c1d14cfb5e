//! Lesson-level commands.

use super::{CommandError, CommandResult, DisplayedList, RecordKind};
use crate::model::lesson::Lesson;
use crate::store::{LessonFilter, RecordStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLessonCommand {
    lesson: Lesson,
}

impl AddLessonCommand {
    pub const USAGE: &'static str = "addLesson: Schedules a lesson.\n\
        Parameters: n/STUDENT_NAME d/DATE (d-M-yyyy, after today) tm/TIME (HH:mm) s/SUBJECT [s/SUBJECT]...\n\
        Example: addLesson n/Amy Bee d/5-10-2030 tm/14:00 s/Math s/Physics";

    pub fn new(lesson: Lesson) -> Self {
        Self { lesson }
    }

    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    pub fn execute(self, store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        let feedback = format!("New lesson added: {}", self.lesson);
        store
            .record_book_mut()
            .add_lesson(self.lesson)
            .map_err(|_| CommandError::DuplicateRecord(RecordKind::Lesson))?;
        Ok(CommandResult::refreshing(feedback, DisplayedList::Lessons))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLessonsCommand {
    filter: LessonFilter,
}

impl ListLessonsCommand {
    pub const USAGE: &'static str = "listLessons: Lists lessons, optionally only those matching \
        every given filter.\n\
        Parameters: [n/STUDENT_NAME] [d/DATE] [s/SUBJECT]\n\
        Example: listLessons s/Math";

    pub fn new(filter: LessonFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &LessonFilter {
        &self.filter
    }

    pub fn execute(self, store: &mut RecordStore) -> Result<CommandResult, CommandError> {
        let unfiltered = self.filter.is_unfiltered();
        store.set_lesson_filter(self.filter);
        let feedback = if unfiltered {
            "Listed all lessons".to_string()
        } else {
            format!("{} lessons listed!", store.filtered_lessons().len())
        };
        Ok(CommandResult::refreshing(feedback, DisplayedList::Lessons))
    }
}
