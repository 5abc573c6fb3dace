//! Bounds of the active (not yet archived) part of a note.

use super::frontmatter::frontmatter_end_index;
use super::patterns::is_legacy_metadata;
use crate::document::{DocumentResult, NoteDocument};
use crate::model::paragraph::{NoteType, ParagraphType};
use crate::text::display_title;
use log::debug;
use std::ops::Range;

const DONE_HEADING: &str = "Done";
const CANCELLED_HEADING: &str = "Cancelled";
const ARCHIVE_HEADING_LEVEL: u8 = 2;

/// First line of the active body.
///
/// Skips the title or frontmatter of project notes, plus any legacy
/// hashtag metadata block that follows them. Calendar notes start at `0`.
///
/// # Errors
/// Propagates accessor failures from the normalization appends.
///
/// # Invariants
/// - An empty note gets one empty paragraph and the result is `0`.
/// - For project notes the returned index always addresses an existing
///   paragraph or the end of the note.
pub fn active_content_start<D: NoteDocument + ?Sized>(note: &mut D) -> DocumentResult<usize> {
    if note.paragraph_count() == 0 {
        debug!(
            "event=note_normalized module=structure status=ok reason=empty_note note={}",
            display_title(note)
        );
        note.append_paragraph("", ParagraphType::Empty)?;
        return Ok(0);
    }

    if note.note_type() == NoteType::Calendar {
        return Ok(0);
    }

    let mut start = frontmatter_end_index(note) + 1;
    if start == note.paragraph_count() {
        debug!(
            "event=note_normalized module=structure status=ok reason=no_body note={}",
            display_title(note)
        );
        note.append_paragraph("", ParagraphType::Empty)?;
    }

    let paragraphs = note.paragraphs();
    let starts_with_metadata = paragraphs
        .get(start)
        .is_some_and(|paragraph| is_legacy_metadata(&paragraph.content));
    if starts_with_metadata {
        let boundary = paragraphs[start..]
            .iter()
            .position(|p| p.kind.is_heading() || p.kind == ParagraphType::Empty);
        if let Some(offset) = boundary {
            start += offset + 1;
        }
    }

    Ok(start)
}

/// Line index where the archived part of the note begins.
///
/// The last level-2 `Done` heading wins, then the last level-2 `Cancelled`
/// heading; otherwise the whole note is active and the paragraph count is
/// returned. A match at line 0 is ignored.
pub fn active_content_end<D: NoteDocument + ?Sized>(note: &D) -> usize {
    let paragraphs = note.paragraphs();
    let mut done_heading = None;
    let mut cancelled_heading = None;

    // Every line is visited: later archive headings replace earlier ones.
    for (index, paragraph) in paragraphs.iter().enumerate() {
        if paragraph.heading_level != ARCHIVE_HEADING_LEVEL {
            continue;
        }
        if paragraph.content.starts_with(DONE_HEADING) {
            done_heading = Some(index);
        }
        if paragraph.content.starts_with(CANCELLED_HEADING) {
            cancelled_heading = Some(index);
        }
    }

    done_heading
        .filter(|&index| index > 0)
        .or(cancelled_heading.filter(|&index| index > 0))
        .unwrap_or(paragraphs.len())
}

/// Half-open line range of the active body.
///
/// # Errors
/// Propagates accessor failures from `active_content_start`.
pub fn active_content_range<D: NoteDocument + ?Sized>(
    note: &mut D,
) -> DocumentResult<Range<usize>> {
    let start = active_content_start(note)?;
    let end = active_content_end(note).max(start);
    Ok(start..end)
}
