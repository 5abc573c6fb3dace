//! Document accessor contract and in-memory implementation.
//!
//! # Responsibility
//! - Define how structural algorithms read a note and request mutations.
//! - Keep paragraph numbering owned by the accessor, never by callers.
//!
//! # Invariants
//! - Every mutation re-indexes all paragraphs before returning.
//! - A `paragraphs()` snapshot cannot be held across a mutation: mutators
//!   take `&mut self`, so callers must re-fetch after each change.
//! - Removal addresses paragraphs by `ParagraphId`, not by position.

pub mod memory;
pub mod tokenize;

use crate::model::paragraph::{CharRange, NoteType, Paragraph, ParagraphId, ParagraphType};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DocumentResult<T> = Result<T, DocumentError>;

/// Failure raised by accessor mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Insert position is past the end of the note.
    IndexOutOfRange { index: usize, len: usize },
    /// No paragraph with this id exists in the note.
    ParagraphNotFound(ParagraphId),
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "paragraph index {index} out of range for note with {len} lines")
            }
            Self::ParagraphNotFound(id) => write!(f, "paragraph not found: {id}"),
        }
    }
}

impl Error for DocumentError {}

/// Read and mutation surface of one note.
pub trait NoteDocument {
    fn note_type(&self) -> NoteType;
    /// Bound date; only calendar notes carry one.
    fn date(&self) -> Option<NaiveDate>;
    fn filename(&self) -> &str;
    /// Full raw text, lines joined with `\n`.
    fn content(&self) -> &str;
    /// Ordered paragraph snapshot.
    fn paragraphs(&self) -> &[Paragraph];

    fn paragraph_count(&self) -> usize {
        self.paragraphs().len()
    }

    fn append_paragraph(&mut self, text: &str, kind: ParagraphType) -> DocumentResult<()>;

    fn prepend_paragraph(&mut self, text: &str, kind: ParagraphType) -> DocumentResult<()> {
        self.insert_paragraph(text, 0, kind)
    }

    /// Inserts before the paragraph currently at `index`; `index == len`
    /// appends.
    fn insert_paragraph(
        &mut self,
        text: &str,
        index: usize,
        kind: ParagraphType,
    ) -> DocumentResult<()>;

    fn remove_paragraph(&mut self, paragraph: &Paragraph) -> DocumentResult<()>;

    /// Removes every listed paragraph or none of them.
    fn remove_paragraphs(&mut self, paragraphs: &[Paragraph]) -> DocumentResult<()>;
}

/// Accessor with an attached editor selection.
pub trait NoteEditor: NoteDocument {
    /// Current selection, `None` when nothing is selected.
    fn selection(&self) -> Option<CharRange>;
}
