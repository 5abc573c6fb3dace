//! Mapping from character selections to paragraph index ranges.
//!
//! # Responsibility
//! - Translate an editor selection into the inclusive range of paragraph
//!   indexes it touches.
//!
//! # Invariants
//! - `ParagraphSpan::first <= ParagraphSpan::last`.
//! - Selection requests without an open editor fail instead of guessing.

use crate::document::NoteEditor;
use crate::model::paragraph::{CharRange, Paragraph};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inclusive range of paragraph indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphSpan {
    pub first: usize,
    pub last: usize,
}

impl ParagraphSpan {
    /// Number of paragraphs covered.
    pub fn line_count(&self) -> usize {
        self.last.saturating_sub(self.first) + 1
    }
}

/// Selection mapping failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No editor is open to read a selection from.
    NoOpenEditor,
    /// The editor has no active selection.
    NoSelection,
    /// The note has no paragraphs.
    EmptyDocument,
    /// No paragraph content starts at this offset.
    StartNotAligned(usize),
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoOpenEditor => write!(f, "no editor is open"),
            Self::NoSelection => write!(f, "editor has no selection"),
            Self::EmptyDocument => write!(f, "note has no paragraphs"),
            Self::StartNotAligned(offset) => {
                write!(f, "selection start {offset} is not at a paragraph start")
            }
        }
    }
}

impl Error for SelectionError {}

/// Maps a paragraph-aligned selection to the paragraphs it covers.
///
/// `first` is the first paragraph whose content starts at `selection.start`.
/// `last` is the last paragraph whose content ends at or before
/// `selection.end`, or `first` when there is none at or after `first`.
///
/// # Errors
/// - `EmptyDocument` when `paragraphs` is empty.
/// - `StartNotAligned` when no paragraph content starts at `selection.start`.
pub fn selected_paragraph_range(
    selection: CharRange,
    paragraphs: &[Paragraph],
) -> Result<ParagraphSpan, SelectionError> {
    if paragraphs.is_empty() {
        return Err(SelectionError::EmptyDocument);
    }

    let first = paragraphs
        .iter()
        .position(|p| p.content_range.start == selection.start)
        .ok_or(SelectionError::StartNotAligned(selection.start))?;
    let last = paragraphs
        .iter()
        .rposition(|p| p.content_range.end <= selection.end)
        .filter(|&index| index >= first)
        .unwrap_or(first);

    Ok(ParagraphSpan { first, last })
}

/// Content range of the paragraph whose line contains `offset`.
///
/// Offsets past the end of the note resolve to the last paragraph.
pub fn paragraph_range_at_offset(paragraphs: &[Paragraph], offset: usize) -> Option<CharRange> {
    paragraphs
        .iter()
        .find(|p| p.line_range().touches(offset))
        .or_else(|| paragraphs.last())
        .map(|p| p.content_range)
}

/// Paragraphs covered by the selection of `editor`.
///
/// The selection is first widened to whole paragraphs, so a caret in the
/// middle of a line selects that line.
///
/// # Errors
/// - `NoOpenEditor` when `editor` is `None`.
/// - `NoSelection` when the editor has no selection.
/// - `EmptyDocument` when the note has no paragraphs.
pub fn selected_lines<E: NoteEditor + ?Sized>(
    editor: Option<&E>,
) -> Result<ParagraphSpan, SelectionError> {
    let editor = editor.ok_or(SelectionError::NoOpenEditor)?;
    let selection = editor.selection().ok_or(SelectionError::NoSelection)?;
    let paragraphs = editor.paragraphs();

    let start = paragraph_range_at_offset(paragraphs, selection.start)
        .ok_or(SelectionError::EmptyDocument)?;
    let end = paragraph_range_at_offset(paragraphs, selection.end)
        .ok_or(SelectionError::EmptyDocument)?;
    selected_paragraph_range(CharRange::new(start.start, end.end), paragraphs)
}

#[cfg(test)]
mod tests {
    use super::{
        paragraph_range_at_offset, selected_lines, selected_paragraph_range, ParagraphSpan,
        SelectionError,
    };
    use crate::document::memory::MemoryNote;
    use crate::document::NoteDocument;
    use crate::model::paragraph::CharRange;

    // "# Title" [2,7) / "- one" [10,13) / "- two" [16,19) / "tail" [20,24)
    const SAMPLE: &str = "# Title\n- one\n- two\ntail";

    #[test]
    fn aligned_selection_maps_to_inclusive_span() {
        let note = MemoryNote::project("s.md", SAMPLE);
        let span = selected_paragraph_range(CharRange::new(10, 19), note.paragraphs()).unwrap();
        assert_eq!(span, ParagraphSpan { first: 1, last: 2 });
        assert_eq!(span.line_count(), 2);
    }

    #[test]
    fn end_inside_first_paragraph_collapses_to_start() {
        let note = MemoryNote::project("s.md", SAMPLE);
        let span = selected_paragraph_range(CharRange::new(16, 17), note.paragraphs()).unwrap();
        assert_eq!(span, ParagraphSpan { first: 2, last: 2 });
    }

    #[test]
    fn unaligned_start_is_rejected() {
        let note = MemoryNote::project("s.md", SAMPLE);
        let err = selected_paragraph_range(CharRange::new(11, 19), note.paragraphs()).unwrap_err();
        assert_eq!(err, SelectionError::StartNotAligned(11));

        let empty = MemoryNote::project("e.md", "");
        let err = selected_paragraph_range(CharRange::new(0, 0), empty.paragraphs()).unwrap_err();
        assert_eq!(err, SelectionError::EmptyDocument);
    }

    #[test]
    fn inverted_span_counts_one_line() {
        let span = ParagraphSpan { first: 3, last: 1 };
        assert_eq!(span.line_count(), 1);
    }

    #[test]
    fn offsets_resolve_to_containing_line() {
        let note = MemoryNote::project("s.md", SAMPLE);
        let paras = note.paragraphs();
        assert_eq!(paragraph_range_at_offset(paras, 8), Some(CharRange::new(10, 13)));
        assert_eq!(paragraph_range_at_offset(paras, 13), Some(CharRange::new(10, 13)));
        assert_eq!(paragraph_range_at_offset(paras, 14), Some(CharRange::new(16, 19)));
        assert_eq!(paragraph_range_at_offset(paras, 99), Some(CharRange::new(20, 24)));
        assert_eq!(paragraph_range_at_offset(&[], 0), None);
    }

    #[test]
    fn editor_selection_is_widened_to_whole_lines() {
        let mut note = MemoryNote::project("s.md", SAMPLE);
        note.select(CharRange::new(11, 17));
        assert_eq!(
            selected_lines(Some(&note)).unwrap(),
            ParagraphSpan { first: 1, last: 2 }
        );
    }

    #[test]
    fn editor_preconditions_fail_fast() {
        assert_eq!(
            selected_lines::<MemoryNote>(None).unwrap_err(),
            SelectionError::NoOpenEditor
        );

        let mut note = MemoryNote::project("s.md", SAMPLE);
        note.clear_selection();
        assert_eq!(selected_lines(Some(&note)).unwrap_err(), SelectionError::NoSelection);
    }
}
