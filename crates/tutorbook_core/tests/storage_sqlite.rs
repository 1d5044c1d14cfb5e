mod support;

use support::{alice, benson, future_date, LessonBuilder, StudentBuilder};
use tutorbook_core::model::datetime::Date;
use tutorbook_core::storage::{
    PersistedLesson, PersistedRecordBook, MESSAGE_DUPLICATE_LESSON,
};
use tutorbook_core::{RecordBook, RecordStorage, SqliteRecordStorage, StorageError};

fn sample_book() -> RecordBook {
    let amy = StudentBuilder::new()
        .with_tags(&["weekly", "sec3"])
        .with_assignment("Worksheet 1", true)
        .with_assignment("Essay", false)
        .build();
    let lessons = vec![
        LessonBuilder::new().with_subjects(&["Physics", "Math"]).build(),
        LessonBuilder::new()
            .with_name("Benson Meier")
            .with_time("09:00")
            .build(),
    ];
    RecordBook::from_records(vec![alice(), amy, benson()], lessons).unwrap()
}

#[test]
fn save_then_load_round_trips_every_field() {
    let mut storage = SqliteRecordStorage::open_in_memory().unwrap();
    let book = sample_book();

    storage.save(&book).unwrap();
    assert_eq!(storage.load().unwrap(), book);
}

#[test]
fn save_replaces_previous_contents() {
    let mut storage = SqliteRecordStorage::open_in_memory().unwrap();
    storage.save(&sample_book()).unwrap();

    let smaller = RecordBook::from_records(vec![benson()], Vec::new()).unwrap();
    storage.save(&smaller).unwrap();
    assert_eq!(storage.load().unwrap(), smaller);
}

#[test]
fn data_file_survives_reopen_and_parent_dirs_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("tutorbook.sqlite3");
    let book = sample_book();

    SqliteRecordStorage::open(&path).unwrap().save(&book).unwrap();
    let loaded = SqliteRecordStorage::open(&path).unwrap().load().unwrap();
    assert_eq!(loaded, book);
}

#[test]
fn null_lesson_column_reports_missing_field() {
    let mut storage = SqliteRecordStorage::open_in_memory().unwrap();
    storage
        .connection()
        .execute(
            "INSERT INTO lessons (position, name, date, time, subject)
             VALUES (1, 'Amy Bee', ?1, NULL, 'Math');",
            [future_date(3)],
        )
        .unwrap();

    let err = storage.load().unwrap_err();
    assert!(matches!(
        err,
        StorageError::MissingField {
            entity: "Lesson",
            field: "Time"
        }
    ));
    assert_eq!(err.to_string(), "Lesson's Time field is missing!");
}

#[test]
fn null_student_column_reports_missing_field() {
    let mut storage = SqliteRecordStorage::open_in_memory().unwrap();
    storage
        .connection()
        .execute(
            "INSERT INTO students (position, name, phone, email, address, subject)
             VALUES (1, 'Amy Bee', '85355255', NULL, 'Clementi', 'Math');",
            [],
        )
        .unwrap();
    assert_eq!(
        storage.load().unwrap_err().to_string(),
        "Student's Email field is missing!"
    );
}

#[test]
fn past_lesson_date_is_an_invalid_value() {
    let mut storage = SqliteRecordStorage::open_in_memory().unwrap();
    storage
        .connection()
        .execute(
            "INSERT INTO lessons (position, name, date, time, subject)
             VALUES (1, 'Amy Bee', '1-1-2000', '14:00', 'Math');",
            [],
        )
        .unwrap();
    assert!(matches!(
        storage.load().unwrap_err(),
        StorageError::InvalidValue(message) if message == Date::CONSTRAINTS
    ));
}

#[test]
fn duplicate_lesson_rows_are_rejected() {
    let mut storage = SqliteRecordStorage::open_in_memory().unwrap();
    for (position, subject) in [(1, "Math"), (2, "Physics")] {
        storage
            .connection()
            .execute(
                "INSERT INTO lessons (position, name, date, time, subject)
                 VALUES (?1, 'Amy Bee', ?2, '14:00', ?3);",
                rusqlite::params![position, future_date(5), subject],
            )
            .unwrap();
    }
    assert_eq!(
        storage.load().unwrap_err().to_string(),
        MESSAGE_DUPLICATE_LESSON
    );
}

#[test]
fn persisted_lesson_wire_shape() {
    let lesson = LessonBuilder::new()
        .with_date(&future_date(10))
        .with_subjects(&["Physics", "Math"])
        .build();
    let value = serde_json::to_value(PersistedLesson::from(&lesson)).unwrap();

    assert_eq!(value["subject"], "Math, Physics");
    assert_eq!(value["name"], "Amy Bee");
    assert_eq!(value["date"], future_date(10).as_str());
    assert_eq!(value["time"], "14:00");

    let back: PersistedLesson = serde_json::from_value(value).unwrap();
    assert_eq!(back.to_model().unwrap(), lesson);
}

#[test]
fn persisted_lesson_with_null_field_fails_with_field_name() {
    let json = format!(
        r#"{{"subject": "Math", "name": null, "date": "{}", "time": "14:00"}}"#,
        future_date(4)
    );
    let persisted: PersistedLesson = serde_json::from_str(&json).unwrap();
    assert_eq!(
        persisted.to_model().unwrap_err().to_string(),
        "Lesson's Name field is missing!"
    );
}

#[test]
fn persisted_record_book_defaults_missing_lists() {
    let persisted: PersistedRecordBook = serde_json::from_str("{}").unwrap();
    assert!(persisted.to_model().unwrap().is_empty());
}
