//! Display filters for the student and lesson views.

use crate::model::datetime::Date;
use crate::model::fields::{Name, Subject};
use crate::model::lesson::Lesson;
use crate::model::student::Student;

/// Predicate selecting which students are displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StudentFilter {
    #[default]
    All,
    /// Any name word equals any keyword, ignoring ASCII case.
    NameKeywords(Vec<String>),
}

impl StudentFilter {
    pub fn matches(&self, student: &Student) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(keywords) => student.name().as_str().split_whitespace().any(|word| {
                keywords
                    .iter()
                    .any(|keyword| word.eq_ignore_ascii_case(keyword))
            }),
        }
    }
}

/// Conjunctive predicate selecting which lessons are displayed.
///
/// `LessonFilter::default()` matches every lesson.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonFilter {
    pub student: Option<Name>,
    pub date: Option<Date>,
    pub subject: Option<Subject>,
}

impl LessonFilter {
    pub fn is_unfiltered(&self) -> bool {
        self.student.is_none() && self.date.is_none() && self.subject.is_none()
    }

    pub fn matches(&self, lesson: &Lesson) -> bool {
        let student_ok = self.student.as_ref().map_or(true, |name| {
            lesson
                .student_name()
                .as_str()
                .eq_ignore_ascii_case(name.as_str())
        });
        let date_ok = self.date.map_or(true, |date| *lesson.date() == date);
        let subject_ok = self
            .subject
            .as_ref()
            .map_or(true, |subject| lesson.subjects().contains(subject));
        student_ok && date_ok && subject_ok
    }
}

#[cfg(test)]
mod tests {
    use super::{LessonFilter, StudentFilter};
    use crate::model::datetime::{Date, Time};
    use crate::model::fields::{Address, Email, Name, Phone, Subject};
    use crate::model::lesson::Lesson;
    use crate::model::student::Student;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn student(name: &str) -> Student {
        Student::new(
            Name::parse(name).unwrap(),
            Phone::parse("85355255").unwrap(),
            Email::parse("amy@gmail.com").unwrap(),
            Address::parse("Clementi").unwrap(),
            Subject::parse("Math").unwrap(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn keywords_match_whole_name_words() {
        let filter = StudentFilter::NameKeywords(vec!["bee".to_string()]);
        assert!(filter.matches(&student("Amy Bee")));
        assert!(!filter.matches(&student("Amy Beatrice")));
        assert!(StudentFilter::All.matches(&student("Anyone")));
    }

    #[test]
    fn lesson_filter_requires_every_given_field() {
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let date = Date::parse_as_of("5-1-2030", today).unwrap();
        let lesson = Lesson::new(
            Name::parse("Amy Bee").unwrap(),
            date,
            Time::parse("14:00").unwrap(),
            BTreeSet::from([Subject::parse("Math").unwrap()]),
        )
        .unwrap();

        let by_name_and_date = LessonFilter {
            student: Some(Name::parse("amy bee").unwrap()),
            date: Some(date),
            subject: None,
        };
        assert!(by_name_and_date.matches(&lesson));

        let wrong_subject = LessonFilter {
            subject: Some(Subject::parse("Physics").unwrap()),
            ..by_name_and_date
        };
        assert!(!wrong_subject.matches(&lesson));
        assert!(LessonFilter::default().is_unfiltered());
    }
}
