//! One-based indexes into the displayed module list.
//!
//! Users always see and type one-based positions (`edit 1 ...`), while the
//! tracker stores modules in a zero-based `Vec`. [`Index`] is the only place
//! where the two are converted, so an off-by-one cannot leak elsewhere.

use std::fmt;
use std::str::FromStr;

/// A position in the displayed module list. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Returns `None` for zero.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        if one_based == 0 {
            None
        } else {
            Some(Self(one_based))
        }
    }

    pub fn from_zero_based(zero_based: usize) -> Self {
        Self(zero_based + 1)
    }

    pub fn one_based(self) -> usize {
        self.0
    }

    pub fn zero_based(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Index {
    type Err = String;

    /// Accepts a non-zero unsigned integer, ignoring surrounding whitespace.
    /// Signs, inner spaces and values beyond `u32::MAX` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("Invalid index format: {}", s));
        }
        let n: u32 = trimmed
            .parse()
            .map_err(|_| format!("Index out of range: {}", trimmed))?;
        Index::from_one_based(n as usize).ok_or_else(|| "Index must be positive".to_string())
    }
}
