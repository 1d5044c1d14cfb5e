mod support;

use support::{typical_store, StudentBuilder};
use tutorbook_core::command::{
    AddAssignmentCommand, Command, DeleteAssignmentCommand, MarkAssignmentCommand, RecordKind,
    StudentTarget, UnmarkAssignmentCommand,
};
use tutorbook_core::model::fields::{AssignmentName, Name};
use tutorbook_core::store::StudentFilter;
use tutorbook_core::{parse_command, CommandError, Index, RecordBook, RecordStore};

fn first() -> StudentTarget {
    StudentTarget::Index(Index::from_one_based(1).unwrap())
}

fn worksheet() -> AssignmentName {
    AssignmentName::parse("Worksheet 1").unwrap()
}

fn amy_store() -> RecordStore {
    RecordStore::new(RecordBook::from_records(vec![StudentBuilder::new().build()], Vec::new()).unwrap())
}

#[test]
fn adding_the_same_assignment_twice_fails() {
    let mut store = amy_store();

    let result = Command::AddAssignment(AddAssignmentCommand::new(first(), worksheet()))
        .execute(&mut store)
        .unwrap();
    assert_eq!(result.feedback, "New assignment added to Amy Bee: Worksheet 1");

    let err = Command::AddAssignment(AddAssignmentCommand::new(first(), worksheet()))
        .execute(&mut store)
        .unwrap_err();
    assert_eq!(err, CommandError::DuplicateRecord(RecordKind::Assignment));
    assert_eq!(store.record_book().students()[0].assignments().len(), 1);
}

#[test]
fn mark_then_unmark_restores_the_flag() {
    let mut store = amy_store();
    Command::AddAssignment(AddAssignmentCommand::new(first(), worksheet()))
        .execute(&mut store)
        .unwrap();

    let is_done = |store: &RecordStore| {
        store.record_book().students()[0]
            .assignments()
            .get(&worksheet())
            .unwrap()
            .is_done()
    };

    Command::MarkAssignment(MarkAssignmentCommand::new(first(), worksheet()))
        .execute(&mut store)
        .unwrap();
    assert!(is_done(&store));

    // marking twice is idempotent
    Command::MarkAssignment(MarkAssignmentCommand::new(first(), worksheet()))
        .execute(&mut store)
        .unwrap();
    assert!(is_done(&store));

    Command::UnmarkAssignment(UnmarkAssignmentCommand::new(first(), worksheet()))
        .execute(&mut store)
        .unwrap();
    assert!(!is_done(&store));
}

#[test]
fn missing_assignment_is_reported_by_name() {
    let mut store = amy_store();
    let err = Command::MarkAssignment(MarkAssignmentCommand::new(first(), worksheet()))
        .execute(&mut store)
        .unwrap_err();
    assert_eq!(err, CommandError::AssignmentNotFound(worksheet()));

    let err = Command::DeleteAssignment(DeleteAssignmentCommand::new(first(), worksheet()))
        .execute(&mut store)
        .unwrap_err();
    assert_eq!(err, CommandError::AssignmentNotFound(worksheet()));
}

#[test]
fn delete_removes_only_the_named_assignment() {
    let mut store = RecordStore::new(
        RecordBook::from_records(
            vec![StudentBuilder::new()
                .with_assignment("Worksheet 1", false)
                .with_assignment("Essay", true)
                .build()],
            Vec::new(),
        )
        .unwrap(),
    );
    let result = Command::DeleteAssignment(DeleteAssignmentCommand::new(first(), worksheet()))
        .execute(&mut store)
        .unwrap();
    assert_eq!(result.feedback, "Deleted assignment from Amy Bee: Worksheet 1");

    let names: Vec<_> = store.record_book().students()[0]
        .assignments()
        .iter()
        .map(|assignment| assignment.name().to_string())
        .collect();
    assert_eq!(names, ["Essay"]);
}

#[test]
fn name_target_ignores_the_filtered_view() {
    let mut store = typical_store();
    store.set_student_filter(StudentFilter::NameKeywords(vec!["alice".to_string()]));

    let target = StudentTarget::Name(Name::parse("Carl Kurz").unwrap());
    Command::AddAssignment(AddAssignmentCommand::new(target, worksheet()))
        .execute(&mut store)
        .unwrap();

    let carl = store
        .record_book()
        .find_student(&Name::parse("Carl Kurz").unwrap())
        .unwrap();
    assert!(carl.assignments().contains(&worksheet()));
}

#[test]
fn unknown_student_name_is_not_found() {
    let mut store = typical_store();
    let name = Name::parse("Nobody Here").unwrap();
    let err = Command::AddAssignment(AddAssignmentCommand::new(
        StudentTarget::Name(name.clone()),
        worksheet(),
    ))
    .execute(&mut store)
    .unwrap_err();
    assert_eq!(err, CommandError::StudentNotFound(name));
}

#[test]
fn index_target_beyond_filtered_view_is_invalid() {
    let mut store = typical_store();
    store.set_student_filter(StudentFilter::NameKeywords(vec!["alice".to_string()]));
    let err = parse_command("addAssignment 2 as/Worksheet 1")
        .unwrap()
        .execute(&mut store)
        .unwrap_err();
    assert_eq!(err, CommandError::InvalidDisplayedIndex);
}

#[test]
fn failed_assignment_command_leaves_records_untouched() {
    let mut store = amy_store();
    let before = store.record_book().clone();
    parse_command("unmarkAssignment n/Amy Bee as/Essay")
        .unwrap()
        .execute(&mut store)
        .unwrap_err();
    assert_eq!(store.record_book(), &before);
}
