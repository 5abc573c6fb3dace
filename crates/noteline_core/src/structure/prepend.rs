//! Smart insertion point at the top of a note.

use super::patterns::{is_legacy_metadata, is_prepend_heading};
use crate::document::{DocumentResult, NoteDocument};
use crate::model::paragraph::{NoteType, ParagraphType};
use crate::text::display_title;
use log::warn;

const FRONTMATTER_OPEN: &str = "---";
const FRONTMATTER_CLOSE: [&str; 2] = ["---", "..."];

/// Line at which new content should be prepended.
///
/// Defaults to just after the title (`1`), or `0` for calendar notes. A
/// leading frontmatter block moves the point past its closing delimiter; a
/// legacy hashtag line under the title moves it past the next heading or
/// blank line. Unterminated frontmatter keeps the default and logs a warning.
pub fn smart_prepend_point<D: NoteDocument + ?Sized>(note: &D) -> usize {
    let default_line = match note.note_type() {
        NoteType::Calendar => 0,
        NoteType::Project => 1,
    };
    let lines: Vec<&str> = note.content().split('\n').collect();

    if lines.first() == Some(&FRONTMATTER_OPEN) {
        let closing = lines
            .iter()
            .skip(1)
            .position(|line| FRONTMATTER_CLOSE.contains(line));
        return match closing {
            Some(offset) => offset + 2,
            None => {
                warn!(
                    "event=frontmatter_unterminated module=structure status=fallback note={} line={}",
                    display_title(note),
                    default_line
                );
                default_line
            }
        };
    }

    if lines.get(1).is_some_and(|line| is_legacy_metadata(line)) {
        let boundary = lines
            .iter()
            .enumerate()
            .skip(2)
            .find(|(_, line)| is_prepend_heading(line) || line.is_empty());
        if let Some((index, _)) = boundary {
            return index + 1;
        }
    }

    default_line
}

/// Inserts `text` at the smart prepend point and returns the line used.
///
/// The point is clamped to the paragraph count so a title-less empty note
/// still accepts the insert.
///
/// # Errors
/// Propagates accessor insert failures.
pub fn smart_prepend_paragraph<D: NoteDocument + ?Sized>(
    note: &mut D,
    text: &str,
    kind: ParagraphType,
) -> DocumentResult<usize> {
    let line = smart_prepend_point(note).min(note.paragraph_count());
    note.insert_paragraph(text, line, kind)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::{smart_prepend_paragraph, smart_prepend_point};
    use crate::document::memory::MemoryNote;
    use crate::document::NoteDocument;
    use crate::model::paragraph::ParagraphType;
    use chrono::NaiveDate;

    #[test]
    fn defaults_depend_on_note_type() {
        let project = MemoryNote::project("p.md", "Title\nbody");
        assert_eq!(smart_prepend_point(&project), 1);

        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let calendar = MemoryNote::calendar(date, "first\nsecond");
        assert_eq!(smart_prepend_point(&calendar), 0);
    }

    #[test]
    fn frontmatter_moves_point_past_closing_delimiter() {
        let dashes = MemoryNote::project("p.md", "---\ntitle: x\n---\nbody");
        assert_eq!(smart_prepend_point(&dashes), 3);

        let dots = MemoryNote::project("p.md", "---\ntitle: x\n...\nbody");
        assert_eq!(smart_prepend_point(&dots), 3);
    }

    #[test]
    fn unterminated_frontmatter_keeps_default() {
        let note = MemoryNote::project("p.md", "---\ntitle: x\nbody");
        assert_eq!(smart_prepend_point(&note), 1);
    }

    #[test]
    fn legacy_metadata_moves_point_past_first_blank_line() {
        let note = MemoryNote::project("p.md", "Title\n#tag\na\n\nb");
        assert_eq!(smart_prepend_point(&note), 4);
    }

    #[test]
    fn legacy_metadata_moves_point_past_heading() {
        let note = MemoryNote::project("p.md", "Title\n#tag\n## Tasks\n\nb");
        assert_eq!(smart_prepend_point(&note), 3);
    }

    #[test]
    fn legacy_metadata_without_boundary_keeps_default() {
        let note = MemoryNote::project("p.md", "Title\n#tag\na\nb");
        assert_eq!(smart_prepend_point(&note), 1);
    }

    #[test]
    fn prepend_paragraph_inserts_at_point() {
        let mut note = MemoryNote::project("p.md", "---\ntitle: x\n---\nbody");
        let line = smart_prepend_paragraph(&mut note, "new task", ParagraphType::Open).unwrap();
        assert_eq!(line, 3);
        assert_eq!(note.content(), "---\ntitle: x\n---\n- [ ] new task\nbody");
    }

    #[test]
    fn prepend_paragraph_into_empty_project_note_appends() {
        let mut note = MemoryNote::project("p.md", "");
        let line = smart_prepend_paragraph(&mut note, "hello", ParagraphType::Text).unwrap();
        assert_eq!(line, 0);
        assert_eq!(note.content(), "hello");
    }
}
