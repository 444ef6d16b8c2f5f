//! Splits a command's argument string into a preamble and prefixed values.
//!
//! ```text
//!  "1 n/CS3219 t/Lecture t/Lab"
//!   ^ ^^^^^^^^ ^^^^^^^^^ ^^^^^
//!   | n/       t/        t/
//!   preamble
//! ```
//!
//! A prefix only counts when it starts the string or follows whitespace, so
//! `https://a/b` inside a value is never mistaken for a `b/` prefix. The
//! tokenizer keeps every occurrence; deciding that the last one wins (or that
//! all of them count, as for tags) is up to the parser.

use std::collections::HashMap;
use std::fmt;

/// A marker such as `n/` that introduces a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Result of [`tokenize`]: the preamble plus every value seen per prefix.
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

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|vals| vals.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn are_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.contains(*p))
    }
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            prefix_positions(args, *prefix)
                .into_iter()
                .map(move |pos| (pos, *prefix))
        })
        .collect();
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        let start = (pos + prefix.as_str().len()).min(end);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }

    multimap
}

fn prefix_positions(args: &str, prefix: Prefix) -> Vec<usize> {
    args.match_indices(prefix.as_str())
        .map(|(pos, _)| pos)
        .filter(|&pos| {
            pos == 0
                || args[..pos]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_whitespace)
        })
        .collect()
}
