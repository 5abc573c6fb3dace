//! Frontmatter block detection over paragraph types.

use crate::document::NoteDocument;
use crate::model::lookup::LineLookup;
use crate::model::paragraph::{Paragraph, ParagraphType};
use crate::text::display_title;
use log::warn;

/// Finds the closing delimiter of the first separator-delimited block.
///
/// The first `Separator` paragraph opens the block and the second closes
/// it. A block that is opened but never closed is `Unterminated`.
pub fn find_frontmatter_end(paragraphs: &[Paragraph]) -> LineLookup {
    if paragraphs.is_empty() {
        return LineLookup::EmptyDocument;
    }

    let mut opened = false;
    for (index, paragraph) in paragraphs.iter().enumerate() {
        if paragraph.kind != ParagraphType::Separator {
            continue;
        }
        if opened {
            return LineLookup::Found(index);
        }
        opened = true;
    }

    if opened {
        LineLookup::Unterminated
    } else {
        LineLookup::NotFound
    }
}

/// Line index of the closing frontmatter delimiter, or `0` when the note has
/// no complete frontmatter block.
pub fn frontmatter_end_index<D: NoteDocument + ?Sized>(note: &D) -> usize {
    match find_frontmatter_end(note.paragraphs()) {
        LineLookup::Found(index) => index,
        LineLookup::Unterminated => {
            warn!(
                "event=frontmatter_unterminated module=structure status=fallback note={}",
                display_title(note)
            );
            0
        }
        LineLookup::EmptyDocument | LineLookup::NotFound => 0,
    }
}
