//! Shared argument parsing helpers.

use super::tokenizer::{ArgumentMultimap, Prefix};
use super::ParseError;
use crate::command::Index;
use crate::model::fields::{FieldError, Subject, Tag};
use std::collections::BTreeSet;

/// Parses a one-based positional index. Only plain digits are accepted.
pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Fails with `InvalidFormat` unless every prefix is present and, when
/// `empty_preamble` is set, nothing precedes the first prefix.
pub(super) fn require_prefixes(
    map: &ArgumentMultimap,
    prefixes: &[Prefix],
    empty_preamble: bool,
    usage: &'static str,
) -> Result<(), ParseError> {
    let all_present = prefixes.iter().all(|prefix| map.contains(*prefix));
    if !all_present || (empty_preamble && !map.preamble().is_empty()) {
        return Err(ParseError::InvalidFormat { usage });
    }
    Ok(())
}

/// Value of a prefix already checked by `require_prefixes`.
pub(super) fn required_value<'a>(
    map: &'a ArgumentMultimap,
    prefix: Prefix,
    usage: &'static str,
) -> Result<&'a str, ParseError> {
    map.value(prefix).ok_or(ParseError::InvalidFormat { usage })
}

pub(super) fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>, FieldError> {
    values.iter().map(|value| Tag::parse(value.as_str())).collect()
}

pub(super) fn parse_subjects(values: &[String]) -> Result<BTreeSet<Subject>, FieldError> {
    values
        .iter()
        .map(|value| Subject::parse(value.as_str()))
        .collect()
}
