//! Self-validating scalar fields for students, lessons and assignments.
//!
//! # Responsibility
//! - Own the validation predicate and constraints message of every text field.
//! - Hand out field values only after validation succeeded.
//!
//! # Invariants
//! - A field value is immutable once constructed.
//! - Validation failures carry the field's constraints message verbatim, so
//!   parse-time and load-time diagnostics read the same.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static ALNUM_WORDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("valid alnum words regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S.*$").expect("valid address regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[[:alnum:]]+$").expect("valid tag regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[[:alnum:]]+([+_.-][[:alnum:]]+)*@([[:alnum:]]+(-[[:alnum:]]+)*\.)*[[:alnum:]]+(-[[:alnum:]]+)*$",
    )
    .expect("valid email regex")
});

/// Validation failure for one field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Field type name, e.g. `Name` or `Date`.
    pub field: &'static str,
    /// Human-readable constraints message of the field.
    pub constraints: &'static str,
}

impl FieldError {
    pub(crate) const fn new(field: &'static str, constraints: &'static str) -> Self {
        Self { field, constraints }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.constraints)
    }
}

impl Error for FieldError {}

macro_rules! text_field {
    (
        $(#[$meta:meta])*
        $name:ident, label = $label:literal, valid = $valid:path, constraints = $constraints:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Field type name used in diagnostics.
            pub const LABEL: &'static str = $label;
            /// Constraints message reported when validation fails.
            pub const CONSTRAINTS: &'static str = $constraints;

            /// Validates `value` and wraps it.
            pub fn parse(value: impl Into<String>) -> Result<Self, FieldError> {
                let value = value.into();
                if Self::is_valid(&value) {
                    Ok(Self(value))
                } else {
                    Err(FieldError::new(Self::LABEL, Self::CONSTRAINTS))
                }
            }

            /// Returns whether `value` satisfies this field's predicate.
            pub fn is_valid(value: &str) -> bool {
                $valid(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = FieldError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse(value)
            }
        }
    };
}

text_field!(
    /// Student full name. Also the weak identity key of a student.
    Name,
    label = "Name",
    valid = is_alnum_words,
    constraints = "Names should only contain alphanumeric characters and spaces, and it should not be blank"
);

text_field!(
    /// Contact phone number.
    Phone,
    label = "Phone",
    valid = is_phone,
    constraints = "Phone numbers should only contain numbers, and it should be at least 3 digits long"
);

text_field!(
    /// Contact email address.
    Email,
    label = "Email",
    valid = is_email,
    constraints = "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
        1. The local-part should only contain alphanumeric characters and these special characters, \
        excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
        2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
        separated by periods.\n\
        The domain name must:\n    \
        - end with a domain label at least 2 characters long\n    \
        - have each domain label start and end with alphanumeric characters\n    \
        - have each domain label consist of alphanumeric characters, separated only by hyphens, if any."
);

text_field!(
    /// Home address, free text.
    Address,
    label = "Address",
    valid = is_address,
    constraints = "Addresses can take any values, and it should not be blank"
);

text_field!(
    /// Subject taught to a student or covered by a lesson.
    Subject,
    label = "Subject",
    valid = is_alnum_words,
    constraints = "Subjects should only contain alphanumeric characters and spaces, and it should not be blank"
);

text_field!(
    /// Short label attached to a student.
    Tag,
    label = "Tag",
    valid = is_tag,
    constraints = "Tags names should be alphanumeric"
);

text_field!(
    /// Assignment title. Matched case-sensitively.
    AssignmentName,
    label = "Assignment",
    valid = is_alnum_words,
    constraints =
        "Assignment names should only contain alphanumeric characters and spaces, and it should not be blank"
);

fn is_alnum_words(value: &str) -> bool {
    ALNUM_WORDS_RE.is_match(value)
}

fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

fn is_address(value: &str) -> bool {
    ADDRESS_RE.is_match(value)
}

fn is_tag(value: &str) -> bool {
    TAG_RE.is_match(value)
}

fn is_email(value: &str) -> bool {
    if !EMAIL_RE.is_match(value) {
        return false;
    }
    // Regex guarantees one '@' and at least one domain label.
    value
        .rsplit(['.', '@'])
        .next()
        .is_some_and(|last_label| last_label.chars().count() >= 2)
}
