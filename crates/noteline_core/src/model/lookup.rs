//! Tagged result for line-index lookups.

use serde::{Deserialize, Serialize};

/// Outcome of scanning a note for a structural line.
///
/// Absence is an expected outcome, so it is a variant rather than an error
/// or a magic index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineLookup {
    /// The line was found at this 0-based index.
    Found(usize),
    /// The note has no paragraphs at all.
    EmptyDocument,
    /// A delimited block was opened but never closed.
    Unterminated,
    /// The note has content but nothing matched.
    NotFound,
}

impl LineLookup {
    /// Returns the index for `Found`, `None` otherwise.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            _ => None,
        }
    }

    /// Returns the index for `Found`, else `default`.
    pub fn index_or(self, default: usize) -> usize {
        self.index().unwrap_or(default)
    }
}
