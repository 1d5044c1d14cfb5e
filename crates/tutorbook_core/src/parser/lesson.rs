//! Parsers for lesson-level commands.

use super::tokenizer::{tokenize, PREFIX_DATE, PREFIX_NAME, PREFIX_SUBJECT, PREFIX_TIME};
use super::util::{parse_subjects, require_prefixes, required_value};
use super::ParseError;
use crate::command::{AddLessonCommand, Command, ListLessonsCommand};
use crate::model::datetime::{Date, Time};
use crate::model::fields::{Name, Subject};
use crate::model::lesson::Lesson;
use crate::store::LessonFilter;

pub(super) fn parse_add_lesson(arguments: &str) -> Result<Command, ParseError> {
    let usage = AddLessonCommand::USAGE;
    let map = tokenize(
        arguments,
        &[PREFIX_NAME, PREFIX_DATE, PREFIX_TIME, PREFIX_SUBJECT],
    );
    require_prefixes(
        &map,
        &[PREFIX_NAME, PREFIX_DATE, PREFIX_TIME, PREFIX_SUBJECT],
        true,
        usage,
    )?;
    map.ensure_single_valued(&[PREFIX_NAME, PREFIX_DATE, PREFIX_TIME])?;

    let lesson = Lesson::new(
        Name::parse(required_value(&map, PREFIX_NAME, usage)?)?,
        Date::parse(required_value(&map, PREFIX_DATE, usage)?)?,
        Time::parse(required_value(&map, PREFIX_TIME, usage)?)?,
        parse_subjects(map.all_values(PREFIX_SUBJECT))?,
    )?;
    Ok(Command::AddLesson(AddLessonCommand::new(lesson)))
}

pub(super) fn parse_list_lessons(arguments: &str) -> Result<Command, ParseError> {
    let map = tokenize(arguments, &[PREFIX_NAME, PREFIX_DATE, PREFIX_SUBJECT]);
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: ListLessonsCommand::USAGE,
        });
    }
    map.ensure_single_valued(&[PREFIX_NAME, PREFIX_DATE, PREFIX_SUBJECT])?;

    let filter = LessonFilter {
        student: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
        date: map.value(PREFIX_DATE).map(Date::parse).transpose()?,
        subject: map.value(PREFIX_SUBJECT).map(Subject::parse).transpose()?,
    };
    Ok(Command::ListLessons(ListLessonsCommand::new(filter)))
}
