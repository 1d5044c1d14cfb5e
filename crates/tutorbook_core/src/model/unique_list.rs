//! Ordered collection that rejects weak-identity duplicates.
//!
//! # Invariants
//! - No two elements satisfy `Identity::is_same`.
//! - Insertion order is preserved; `set` keeps the replaced element's slot.
//! - Targets of `set`/`remove` are located by full equality.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Weak identity predicate used for duplicate rejection.
///
/// Kept separate from `PartialEq`, which is full structural equality.
pub trait Identity {
    fn is_same(&self, other: &Self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueListError {
    /// Operation would make two elements share an identity.
    Duplicate,
    /// Target element is not in the list.
    NotFound,
}

impl Display for UniqueListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate => f.write_str("operation would result in duplicate records"),
            Self::NotFound => f.write_str("record not found"),
        }
    }
}

impl Error for UniqueListError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identity + PartialEq> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from `items`, rejecting any same-identity pair.
    pub fn from_vec(items: Vec<T>) -> Result<Self, UniqueListError> {
        let mut list = Self::new();
        list.replace_all(items)?;
        Ok(list)
    }

    /// Returns whether an element with the same identity exists.
    pub fn contains(&self, candidate: &T) -> bool {
        self.items.iter().any(|item| item.is_same(candidate))
    }

    pub fn add(&mut self, item: T) -> Result<(), UniqueListError> {
        if self.contains(&item) {
            return Err(UniqueListError::Duplicate);
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// `edited` may share identity with `target`, but not with any other element.
    pub fn set(&mut self, target: &T, edited: T) -> Result<(), UniqueListError> {
        let position = self.position_of(target)?;
        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(idx, item)| idx != position && item.is_same(&edited));
        if collides {
            return Err(UniqueListError::Duplicate);
        }
        self.items[position] = edited;
        Ok(())
    }

    pub fn remove(&mut self, target: &T) -> Result<T, UniqueListError> {
        let position = self.position_of(target)?;
        Ok(self.items.remove(position))
    }

    /// Replaces the whole content. Leaves the list untouched on failure.
    pub fn replace_all(&mut self, items: Vec<T>) -> Result<(), UniqueListError> {
        for (idx, item) in items.iter().enumerate() {
            if items[idx + 1..].iter().any(|other| other.is_same(item)) {
                return Err(UniqueListError::Duplicate);
            }
        }
        self.items = items;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position_of(&self, target: &T) -> Result<usize, UniqueListError> {
        self.items
            .iter()
            .position(|item| item == target)
            .ok_or(UniqueListError::NotFound)
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
