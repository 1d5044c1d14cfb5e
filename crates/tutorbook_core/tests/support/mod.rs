//! Shared builders for integration tests.
#![allow(dead_code)]

use chrono::{Duration, Local};
use std::collections::BTreeSet;
use tutorbook_core::model::assignment::{Assignment, UniqueAssignmentList};
use tutorbook_core::model::datetime::{Date, Time};
use tutorbook_core::model::fields::{
    Address, AssignmentName, Email, Name, Phone, Subject, Tag,
};
use tutorbook_core::model::lesson::Lesson;
use tutorbook_core::model::student::Student;
use tutorbook_core::{RecordBook, RecordStore};

/// `days` after today in `d-M-yyyy` input form.
pub fn future_date(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%-d-%-m-%Y")
        .to_string()
}

pub fn today() -> String {
    Local::now().date_naive().format("%-d-%-m-%Y").to_string()
}

#[derive(Debug, Clone)]
pub struct StudentBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    subject: String,
    tags: Vec<String>,
    assignments: Vec<(String, bool)>,
}

impl Default for StudentBuilder {
    fn default() -> Self {
        Self {
            name: "Amy Bee".to_string(),
            phone: "85355255".to_string(),
            email: "amy@gmail.com".to_string(),
            address: "123, Jurong West Ave 6, #08-111".to_string(),
            subject: "Math".to_string(),
            tags: Vec::new(),
            assignments: Vec::new(),
        }
    }
}

impl StudentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = subject.to_string();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|tag| tag.to_string()).collect();
        self
    }

    pub fn with_assignment(mut self, name: &str, done: bool) -> Self {
        self.assignments.push((name.to_string(), done));
        self
    }

    pub fn build(self) -> Student {
        let tags: BTreeSet<Tag> = self.tags.into_iter().map(|tag| Tag::parse(tag).unwrap()).collect();
        let assignments = UniqueAssignmentList::from_vec(
            self.assignments
                .into_iter()
                .map(|(name, done)| Assignment::with_status(AssignmentName::parse(name).unwrap(), done))
                .collect(),
        )
        .unwrap();
        Student::new(
            Name::parse(self.name).unwrap(),
            Phone::parse(self.phone).unwrap(),
            Email::parse(self.email).unwrap(),
            Address::parse(self.address).unwrap(),
            Subject::parse(self.subject).unwrap(),
            tags,
        )
        .with_assignments(assignments)
    }
}

#[derive(Debug, Clone)]
pub struct LessonBuilder {
    name: String,
    date: String,
    time: String,
    subjects: Vec<String>,
}

impl Default for LessonBuilder {
    fn default() -> Self {
        Self {
            name: "Amy Bee".to_string(),
            date: future_date(30),
            time: "14:00".to_string(),
            subjects: vec!["CS2103T".to_string()],
        }
    }
}

impl LessonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn with_time(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    pub fn with_subjects(mut self, subjects: &[&str]) -> Self {
        self.subjects = subjects.iter().map(|subject| subject.to_string()).collect();
        self
    }

    pub fn build(self) -> Lesson {
        Lesson::new(
            Name::parse(self.name).unwrap(),
            Date::parse(&self.date).unwrap(),
            Time::parse(&self.time).unwrap(),
            self.subjects
                .into_iter()
                .map(|subject| Subject::parse(subject).unwrap())
                .collect(),
        )
        .unwrap()
    }
}

pub fn alice() -> Student {
    StudentBuilder::new()
        .with_name("Alice Pauline")
        .with_phone("94351253")
        .with_email("alice@example.com")
        .with_tags(&["friends"])
        .build()
}

pub fn benson() -> Student {
    StudentBuilder::new()
        .with_name("Benson Meier")
        .with_phone("98765432")
        .with_email("johnd@example.com")
        .with_subject("Physics")
        .with_tags(&["owesMoney", "friends"])
        .build()
}

pub fn carl() -> Student {
    StudentBuilder::new()
        .with_name("Carl Kurz")
        .with_phone("95352563")
        .with_email("heinz@example.com")
        .build()
}

pub fn typical_students() -> Vec<Student> {
    vec![alice(), benson(), carl()]
}

pub fn typical_store() -> RecordStore {
    RecordStore::new(RecordBook::from_records(typical_students(), Vec::new()).unwrap())
}
