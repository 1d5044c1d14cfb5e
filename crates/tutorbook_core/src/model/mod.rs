//! Domain model for students, lessons and assignments.
//!
//! # Responsibility
//! - Define self-validating field types and the entities built from them.
//! - Enforce uniqueness of students, lessons and per-student assignments.
//!
//! # Invariants
//! - Entities are only constructed from already-validated fields.
//! - Weak identity (`Identity::is_same`) and full equality (`PartialEq`) are
//!   separate predicates and are never substituted for each other.

pub mod assignment;
pub mod datetime;
pub mod fields;
pub mod lesson;
pub mod record_book;
pub mod student;
pub mod unique_list;
