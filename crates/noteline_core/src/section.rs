//! Heading section lookup and removal.
//!
//! # Responsibility
//! - Locate the section owned by a heading: the heading line plus every
//!   following line up to the next heading of the same or a higher level.
//! - Remove that section through the document accessor.
//!
//! # Invariants
//! - Heading matching is a case-sensitive prefix match on `content`.
//! - When several headings match, the last one in the note is used.
//! - The bounding heading is never part of the section.

use crate::document::{DocumentResult, NoteDocument};
use crate::model::lookup::LineLookup;
use crate::model::paragraph::Paragraph;
use crate::text::display_title;
use log::debug;
use std::ops::Range;

/// Level assumed for a matching heading that reports no level.
const DEFAULT_SECTION_LEVEL: u8 = 2;

/// Location of one heading section within a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    /// Line index of the heading itself.
    pub heading_index: usize,
    /// Level used to find the end of the section.
    pub heading_level: u8,
    /// Half-open line range of the body, heading excluded.
    pub body: Range<usize>,
}

/// Finds the section under the last heading whose content starts with
/// `heading_prefix`.
pub fn find_section(paragraphs: &[Paragraph], heading_prefix: &str) -> Option<SectionSpan> {
    let (heading_index, heading_level) = paragraphs
        .iter()
        .enumerate()
        .filter(|(_, p)| p.kind.is_heading() && p.content.starts_with(heading_prefix))
        .last()
        .map(|(index, p)| {
            let level = if p.heading_level == 0 {
                DEFAULT_SECTION_LEVEL
            } else {
                p.heading_level
            };
            (index, level)
        })?;

    let body_start = heading_index + 1;
    let body_len = paragraphs[body_start..]
        .iter()
        .take_while(|p| !(p.kind.is_heading() && p.heading_level <= heading_level))
        .count();

    Some(SectionSpan {
        heading_index,
        heading_level,
        body: body_start..body_start + body_len,
    })
}

/// Removes the section under the last heading starting with
/// `heading_prefix`.
///
/// Returns `Found(heading_index)` after removal, `NotFound` when no heading
/// matches and `EmptyDocument` for a note without paragraphs. Callers that
/// want the "last line" fallback can use
/// `lookup.index_or(count.saturating_sub(1))`.
///
/// # Errors
/// Propagates accessor removal failures.
pub fn remove_section<D: NoteDocument + ?Sized>(
    note: &mut D,
    heading_prefix: &str,
) -> DocumentResult<LineLookup> {
    // Owned copy: the accessor re-indexes once the heading is removed.
    let snapshot = note.paragraphs().to_vec();
    if snapshot.is_empty() {
        return Ok(LineLookup::EmptyDocument);
    }

    let Some(section) = find_section(&snapshot, heading_prefix) else {
        debug!(
            "event=section_missing module=section status=noop note={} heading={}",
            display_title(note),
            heading_prefix
        );
        return Ok(LineLookup::NotFound);
    };

    note.remove_paragraph(&snapshot[section.heading_index])?;
    let body = &snapshot[section.body.clone()];
    if !body.is_empty() {
        note.remove_paragraphs(body)?;
    }

    debug!(
        "event=section_removed module=section status=ok note={} heading_index={} level={} removed={}",
        display_title(note),
        section.heading_index,
        section.heading_level,
        body.len() + 1
    );
    Ok(LineLookup::Found(section.heading_index))
}

/// Index of the last line, `None` for an empty note.
pub fn last_line_index<D: NoteDocument + ?Sized>(note: &D) -> Option<usize> {
    note.paragraph_count().checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::{find_section, last_line_index, remove_section};
    use crate::document::memory::MemoryNote;
    use crate::document::NoteDocument;
    use crate::model::lookup::LineLookup;
    use crate::model::paragraph::{CharRange, Paragraph, ParagraphType};
    use uuid::Uuid;

    fn paragraphs(lines: &[(ParagraphType, u8, &str)]) -> Vec<Paragraph> {
        lines
            .iter()
            .enumerate()
            .map(|(line_index, &(kind, heading_level, content))| Paragraph {
                id: Uuid::new_v4(),
                line_index,
                kind,
                heading_level,
                prefix: String::new(),
                content: content.to_string(),
                raw_content: content.to_string(),
                content_range: CharRange::default(),
            })
            .collect()
    }

    #[test]
    fn heading_without_level_bounds_section_at_level_two() {
        let paras = paragraphs(&[
            (ParagraphType::Title, 1, "Root"),
            (ParagraphType::Title, 0, "Tasks"),
            (ParagraphType::Title, 3, "Sub"),
            (ParagraphType::Text, 0, "x"),
            (ParagraphType::Title, 2, "Next"),
            (ParagraphType::Text, 0, "y"),
        ]);
        let span = find_section(&paras, "Tasks").unwrap();
        assert_eq!(span.heading_index, 1);
        assert_eq!(span.heading_level, 2);
        assert_eq!(span.body, 2..4);
    }

    #[test]
    fn heading_kind_takes_part_in_section_lookup() {
        let paras = paragraphs(&[
            (ParagraphType::Title, 1, "Root"),
            (ParagraphType::Heading, 2, "Log"),
            (ParagraphType::Text, 0, "entry"),
            (ParagraphType::Heading, 3, "Detail"),
            (ParagraphType::Heading, 2, "Other"),
        ]);
        let span = find_section(&paras, "Log").unwrap();
        assert_eq!(span.heading_index, 1);
        assert_eq!(span.heading_level, 2);
        assert_eq!(span.body, 2..4);
    }

    #[test]
    fn section_stops_before_heading_of_same_level() {
        let note = MemoryNote::project("s.md", "# Title\n## Tasks\n- a\n- b\n## Done\n- c");
        let span = find_section(note.paragraphs(), "Tasks").unwrap();
        assert_eq!(span.heading_index, 1);
        assert_eq!(span.heading_level, 2);
        assert_eq!(span.body, 2..4);
    }

    #[test]
    fn deeper_headings_belong_to_the_section() {
        let note = MemoryNote::project("s.md", "# T\n## Tasks\n### Sub\nx\n# Next\ny");
        let span = find_section(note.paragraphs(), "Tasks").unwrap();
        assert_eq!(span.body, 2..4);
    }

    #[test]
    fn last_matching_heading_is_used() {
        let note = MemoryNote::project("s.md", "# T\n## Log\na\n## Log 2\nb");
        let span = find_section(note.paragraphs(), "Log").unwrap();
        assert_eq!(span.heading_index, 3);
        assert_eq!(span.body, 4..5);
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        let note = MemoryNote::project("s.md", "# T\n## tasks\na");
        assert!(find_section(note.paragraphs(), "Tasks").is_none());
    }

    #[test]
    fn remove_section_deletes_heading_and_body() {
        let mut note = MemoryNote::project("s.md", "# Title\n## Tasks\n- a\n- b\n## Done\n- c");
        assert_eq!(remove_section(&mut note, "Tasks").unwrap(), LineLookup::Found(1));
        assert_eq!(note.content(), "# Title\n## Done\n- c");
        assert_eq!(note.paragraphs()[1].line_index, 1);
    }

    #[test]
    fn heading_at_end_of_note_is_removed_alone() {
        let mut note = MemoryNote::project("s.md", "# Title\ntext\n## Notes");
        assert_eq!(remove_section(&mut note, "Notes").unwrap(), LineLookup::Found(2));
        assert_eq!(note.content(), "# Title\ntext");
    }

    #[test]
    fn missing_heading_is_a_noop() {
        let mut note = MemoryNote::project("s.md", "# Title\ntext");
        let lookup = remove_section(&mut note, "Nope").unwrap();
        assert_eq!(lookup, LineLookup::NotFound);
        assert_eq!(lookup.index_or(note.paragraph_count() - 1), 1);
        assert_eq!(last_line_index(&note), Some(1));
        assert_eq!(note.paragraph_count(), 2);
    }

    #[test]
    fn empty_note_reports_empty_document() {
        let mut note = MemoryNote::project("s.md", "");
        assert_eq!(remove_section(&mut note, "Tasks").unwrap(), LineLookup::EmptyDocument);
        assert_eq!(last_line_index(&note), None);
    }
}
