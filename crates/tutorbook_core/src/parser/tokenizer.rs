//! `prefix/value` argument tokenizer.
//!
//! # Invariants
//! - A prefix is only recognized when preceded by whitespace, so the
//!   argument tail must keep the whitespace that followed the command word.
//! - Values are trimmed; repeated prefixes keep every value in input order.

use super::ParseError;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Field marker such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_SUBJECT: Prefix = Prefix::new("s/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_DATE: Prefix = Prefix::new("d/");
pub const PREFIX_TIME: Prefix = Prefix::new("tm/");
pub const PREFIX_ASSIGNMENT: Prefix = Prefix::new("as/");

/// Tokenized arguments: free-text preamble plus values per prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognized prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    /// Fails when any of `prefixes` occurs more than once.
    pub fn ensure_single_valued(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let repeated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|prefix| self.all_values(*prefix).len() > 1)
            .collect();
        if repeated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(repeated))
        }
    }
}

/// Splits `arguments` on the given prefixes.
pub fn tokenize(arguments: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        for (at, _) in arguments.match_indices(prefix.as_str()) {
            let after_whitespace = arguments[..at]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace);
            if after_whitespace {
                positions.push((at, *prefix));
            }
        }
    }
    positions.sort_by_key(|(at, _)| *at);

    let preamble_end = positions.first().map_or(arguments.len(), |(at, _)| *at);
    let mut multimap = ArgumentMultimap {
        preamble: arguments[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (idx, (at, prefix)) in positions.iter().enumerate() {
        let value_start = at + prefix.as_str().len();
        let value_end = positions
            .get(idx + 1)
            .map_or(arguments.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(arguments[value_start..value_end].trim().to_string());
    }

    multimap
}
