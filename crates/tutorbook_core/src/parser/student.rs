//! Parsers for student-level commands.

use super::tokenizer::{
    tokenize, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_SUBJECT, PREFIX_TAG,
};
use super::util::{parse_index, parse_tags, require_prefixes, required_value};
use super::{ParseError, Prefix};
use crate::command::{
    AddStudentCommand, Command, DeleteStudentCommand, EditStudentCommand, EditStudentDescriptor,
    FindCommand, ListStudentsCommand,
};
use crate::model::fields::{Address, Email, Name, Phone, Subject, Tag};
use crate::model::student::Student;
use std::collections::BTreeSet;

const STUDENT_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_SUBJECT,
    PREFIX_TAG,
];

const SINGLE_VALUED: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_SUBJECT,
];

pub(super) fn parse_add_student(arguments: &str) -> Result<Command, ParseError> {
    let usage = AddStudentCommand::USAGE;
    let map = tokenize(arguments, STUDENT_PREFIXES);
    require_prefixes(&map, SINGLE_VALUED, true, usage)?;
    map.ensure_single_valued(SINGLE_VALUED)?;

    let student = Student::new(
        Name::parse(required_value(&map, PREFIX_NAME, usage)?)?,
        Phone::parse(required_value(&map, PREFIX_PHONE, usage)?)?,
        Email::parse(required_value(&map, PREFIX_EMAIL, usage)?)?,
        Address::parse(required_value(&map, PREFIX_ADDRESS, usage)?)?,
        Subject::parse(required_value(&map, PREFIX_SUBJECT, usage)?)?,
        parse_tags(map.all_values(PREFIX_TAG))?,
    );
    Ok(Command::AddStudent(AddStudentCommand::new(student)))
}

pub(super) fn parse_edit_student(arguments: &str) -> Result<Command, ParseError> {
    let map = tokenize(arguments, STUDENT_PREFIXES);
    if map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: EditStudentCommand::USAGE,
        });
    }
    let index = parse_index(map.preamble())?;
    map.ensure_single_valued(SINGLE_VALUED)?;

    let descriptor = EditStudentDescriptor {
        name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::parse).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(Address::parse).transpose()?,
        subject: map.value(PREFIX_SUBJECT).map(Subject::parse).transpose()?,
        tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }
    Ok(Command::EditStudent(EditStudentCommand::new(index, descriptor)))
}

/// `None` when `t/` is absent; a lone empty `t/` clears every tag.
fn parse_tags_for_edit(values: &[String]) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => Ok(Some(parse_tags(values)?)),
    }
}

pub(super) fn parse_delete_student(arguments: &str) -> Result<Command, ParseError> {
    let trimmed = arguments.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: DeleteStudentCommand::USAGE,
        });
    }
    Ok(Command::DeleteStudent(DeleteStudentCommand::new(
        parse_index(trimmed)?,
    )))
}

pub(super) fn parse_find(arguments: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = arguments.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: FindCommand::USAGE,
        });
    }
    Ok(Command::Find(FindCommand::new(keywords)))
}

pub(super) fn parse_list_students(_arguments: &str) -> Result<Command, ParseError> {
    Ok(Command::ListStudents(ListStudentsCommand))
}

#[cfg(test)]
mod tests {
    use super::{parse_add_student, parse_delete_student, parse_edit_student, parse_find};
    use crate::command::{AddStudentCommand, Command, EditStudentCommand};
    use crate::model::fields::{Name, Phone};
    use crate::parser::tokenizer::{PREFIX_NAME, PREFIX_PHONE};
    use crate::parser::ParseError;

    const AMY: &str = " n/Amy Bee p/85355255 e/amy@gmail.com a/123 Clementi Ave s/Math";

    #[test]
    fn add_builds_a_validated_student() {
        let Ok(Command::AddStudent(command)) = parse_add_student(&format!("{AMY} t/friends t/friends"))
        else {
            panic!("expected addStudent");
        };
        let student = command.student();
        assert_eq!(student.name().as_str(), "Amy Bee");
        assert_eq!(student.address().as_str(), "123 Clementi Ave");
        assert_eq!(student.tags().len(), 1);
        assert!(student.assignments().is_empty());
    }

    #[test]
    fn add_requires_every_field_and_an_empty_preamble() {
        let missing_subject = " n/Amy Bee p/85355255 e/amy@gmail.com a/123 Clementi Ave";
        let usage = AddStudentCommand::USAGE;
        assert_eq!(
            parse_add_student(missing_subject),
            Err(ParseError::InvalidFormat { usage })
        );
        assert_eq!(
            parse_add_student(&format!(" junk{AMY}")),
            Err(ParseError::InvalidFormat { usage })
        );
    }

    #[test]
    fn add_reports_the_failing_field_constraints() {
        let bad_phone = " n/Amy Bee p/12 e/amy@gmail.com a/123 Clementi Ave s/Math";
        assert_eq!(
            parse_add_student(bad_phone),
            Err(ParseError::InvalidValue {
                message: Phone::CONSTRAINTS
            })
        );
    }

    #[test]
    fn add_rejects_repeated_single_valued_fields() {
        assert_eq!(
            parse_add_student(&format!("{AMY} n/Bob p/999")),
            Err(ParseError::DuplicatePrefixes(vec![PREFIX_NAME, PREFIX_PHONE]))
        );
    }

    #[test]
    fn edit_needs_index_and_a_field() {
        assert_eq!(
            parse_edit_student(" n/Amy"),
            Err(ParseError::InvalidFormat {
                usage: EditStudentCommand::USAGE
            })
        );
        assert_eq!(parse_edit_student(" 0 n/Amy"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_edit_student(" 1"), Err(ParseError::NoFieldEdited));
        assert_eq!(
            parse_edit_student(" 1 n/"),
            Err(ParseError::InvalidValue {
                message: Name::CONSTRAINTS
            })
        );
    }

    #[test]
    fn edit_with_empty_tag_clears_tags() {
        let Ok(Command::EditStudent(command)) = parse_edit_student(" 2 t/") else {
            panic!("expected editStudent");
        };
        assert_eq!(
            command,
            EditStudentCommand::new(
                crate::command::Index::from_one_based(2).expect("non-zero"),
                crate::command::EditStudentDescriptor {
                    tags: Some(Default::default()),
                    ..Default::default()
                }
            )
        );
    }

    #[test]
    fn delete_and_find_validate_their_arguments() {
        assert!(matches!(parse_delete_student(" 1"), Ok(Command::DeleteStudent(_))));
        assert_eq!(parse_delete_student(" x"), Err(ParseError::InvalidIndex));
        assert!(matches!(
            parse_delete_student("   "),
            Err(ParseError::InvalidFormat { .. })
        ));
        assert!(matches!(parse_find("  "), Err(ParseError::InvalidFormat { .. })));
        let Ok(Command::Find(find)) = parse_find(" amy  bob ") else {
            panic!("expected find");
        };
        assert_eq!(find.keywords(), &["amy".to_string(), "bob".to_string()]);
    }
}
