//! SQLite-backed record storage.
//!
//! # Responsibility
//! - Read table rows into persisted shapes and convert them to entities.
//! - Write a whole record book in one immediate transaction.
//!
//! # Invariants
//! - Row order (`position`) preserves the in-memory list order.
//! - A failed save leaves the previously stored rows untouched.

use super::persisted::{
    PersistedAssignment, PersistedLesson, PersistedRecordBook, PersistedStudent,
};
use super::{schema, RecordStorage, StorageError, StorageResult};
use crate::model::record_book::RecordBook;
use log::{error, info};
use rusqlite::{params, Connection, TransactionBehavior};
use std::fs;
use std::path::Path;
use std::time::Instant;

pub struct SqliteRecordStorage {
    conn: Connection,
}

impl SqliteRecordStorage {
    /// Opens the data file at `path`, creating it and missing parent
    /// directories, and upgrades its schema.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Self::connect("file", || Connection::open(path))
    }

    /// Opens a private record book that lives as long as the value.
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::connect("memory", Connection::open_in_memory)
    }

    fn connect(
        mode: &'static str,
        connect: impl FnOnce() -> rusqlite::Result<Connection>,
    ) -> StorageResult<Self> {
        let started_at = Instant::now();
        let outcome = connect().map_err(StorageError::from).and_then(|mut conn| {
            schema::prepare(&mut conn)?;
            Ok(Self { conn })
        });
        match &outcome {
            Ok(_) => info!(
                "event=storage_open module=storage status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=storage_open module=storage status=error mode={mode} duration_ms={} error_code={} error={err}",
                started_at.elapsed().as_millis(),
                err.code()
            ),
        }
        outcome
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Reads stored rows without validating them.
    pub fn load_persisted(&self) -> StorageResult<PersistedRecordBook> {
        let mut students = Vec::new();
        let mut stmt = self.conn.prepare(
            "SELECT position, name, phone, email, address, subject
             FROM students
             ORDER BY position ASC;",
        )?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let position: i64 = row.get("position")?;
            students.push(PersistedStudent {
                name: row.get("name")?,
                phone: row.get("phone")?,
                email: row.get("email")?,
                address: row.get("address")?,
                subject: row.get("subject")?,
                tags: load_tags(&self.conn, position)?,
                assignments: load_assignments(&self.conn, position)?,
            });
        }

        let mut lessons = Vec::new();
        let mut stmt = self.conn.prepare(
            "SELECT name, date, time, subject
             FROM lessons
             ORDER BY position ASC;",
        )?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            lessons.push(PersistedLesson {
                subject: row.get("subject")?,
                name: row.get("name")?,
                date: row.get("date")?,
                time: row.get("time")?,
            });
        }

        Ok(PersistedRecordBook { students, lessons })
    }

    fn write_persisted(&mut self, persisted: &PersistedRecordBook) -> StorageResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute_batch(
            "DELETE FROM assignments;
             DELETE FROM student_tags;
             DELETE FROM students;
             DELETE FROM lessons;",
        )?;

        for (position, student) in (1_i64..).zip(&persisted.students) {
            tx.execute(
                "INSERT INTO students (position, name, phone, email, address, subject)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
                params![
                    position,
                    student.name,
                    student.phone,
                    student.email,
                    student.address,
                    student.subject,
                ],
            )?;
            for tag in &student.tags {
                tx.execute(
                    "INSERT OR IGNORE INTO student_tags (student_position, tag) VALUES (?1, ?2);",
                    params![position, tag],
                )?;
            }
            for (assignment_position, assignment) in (1_i64..).zip(&student.assignments) {
                tx.execute(
                    "INSERT INTO assignments (student_position, position, name, is_done)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        position,
                        assignment_position,
                        assignment.name,
                        assignment.done
                    ],
                )?;
            }
        }

        for (position, lesson) in (1_i64..).zip(&persisted.lessons) {
            tx.execute(
                "INSERT INTO lessons (position, name, date, time, subject)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                params![position, lesson.name, lesson.date, lesson.time, lesson.subject],
            )?;
        }

        tx.commit()?;
        Ok(())
    }
}

impl RecordStorage for SqliteRecordStorage {
    fn load(&mut self) -> StorageResult<RecordBook> {
        let started_at = Instant::now();
        info!("event=storage_load module=storage status=start");

        let outcome = self
            .load_persisted()
            .and_then(|persisted| persisted.to_model());
        match &outcome {
            Ok(book) => info!(
                "event=storage_load module=storage status=ok duration_ms={} students={} lessons={}",
                started_at.elapsed().as_millis(),
                book.students().len(),
                book.lessons().len()
            ),
            Err(err) => error!(
                "event=storage_load module=storage status=error duration_ms={} error_code={}",
                started_at.elapsed().as_millis(),
                err.code()
            ),
        }
        outcome
    }

    fn save(&mut self, book: &RecordBook) -> StorageResult<()> {
        let started_at = Instant::now();
        let outcome = self.write_persisted(&PersistedRecordBook::from(book));
        match &outcome {
            Ok(()) => info!(
                "event=storage_save module=storage status=ok duration_ms={} students={} lessons={}",
                started_at.elapsed().as_millis(),
                book.students().len(),
                book.lessons().len()
            ),
            Err(err) => error!(
                "event=storage_save module=storage status=error duration_ms={} error_code={} error={err}",
                started_at.elapsed().as_millis(),
                err.code()
            ),
        }
        outcome
    }
}

fn load_tags(conn: &Connection, student_position: i64) -> StorageResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT tag
         FROM student_tags
         WHERE student_position = ?1
         ORDER BY tag ASC;",
    )?;
    let mut rows = stmt.query([student_position])?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next()? {
        tags.push(row.get(0)?);
    }
    Ok(tags)
}

fn load_assignments(
    conn: &Connection,
    student_position: i64,
) -> StorageResult<Vec<PersistedAssignment>> {
    let mut stmt = conn.prepare(
        "SELECT name, is_done
         FROM assignments
         WHERE student_position = ?1
         ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([student_position])?;
    let mut assignments = Vec::new();
    while let Some(row) = rows.next()? {
        assignments.push(PersistedAssignment {
            name: row.get("name")?,
            done: row.get("is_done")?,
        });
    }
    Ok(assignments)
}

