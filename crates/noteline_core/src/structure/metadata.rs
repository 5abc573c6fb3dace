//! Metadata line lookup and creation.

use super::patterns::is_metadata_line;
use crate::document::{DocumentResult, NoteDocument};
use crate::model::lookup::LineLookup;
use crate::model::paragraph::ParagraphType;
use crate::text::display_title;
use log::warn;

const METADATA_LINE: usize = 1;

/// First line after the title that holds note metadata.
///
/// Matches `project:`/`metadata:` keys (case-insensitive), a leading
/// hashtag, or a `@review(..)`/`@reviewed(..)` mention.
pub fn find_metadata_line<D: NoteDocument + ?Sized>(note: &D) -> LineLookup {
    if note.paragraph_count() == 0 {
        return LineLookup::EmptyDocument;
    }
    note.content()
        .split('\n')
        .enumerate()
        .skip(1)
        .find(|(_, line)| is_metadata_line(line))
        .map_or(LineLookup::NotFound, |(index, _)| LineLookup::Found(index))
}

/// Metadata line index, inserting a blank line after the title when the
/// note has none.
///
/// # Errors
/// Propagates accessor insert failures.
pub fn metadata_line<D: NoteDocument + ?Sized>(note: &mut D) -> DocumentResult<usize> {
    if let LineLookup::Found(index) = find_metadata_line(note) {
        return Ok(index);
    }

    if note.paragraph_count() == 0 {
        note.append_paragraph("", ParagraphType::Empty)?;
    }
    warn!(
        "event=metadata_line_inserted module=structure status=ok note={} line={}",
        display_title(note),
        METADATA_LINE
    );
    note.insert_paragraph("", METADATA_LINE, ParagraphType::Empty)?;
    Ok(METADATA_LINE)
}
