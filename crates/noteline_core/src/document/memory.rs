//! In-memory note accessor.
//!
//! # Responsibility
//! - Tokenize raw note text into paragraphs.
//! - Apply insert/remove mutations and keep indexes, ranges and the raw
//!   `content` string in sync.
//!
//! # Invariants
//! - `content == raw_content of all paragraphs joined with '\n'`.
//! - `paragraphs[i].line_index == i` after every public call.
//! - Empty text produces zero paragraphs.

use super::tokenize::LineClassifier;
use super::{DocumentError, DocumentResult, NoteDocument, NoteEditor};
use crate::model::paragraph::{CharRange, NoteType, Paragraph, ParagraphType};
use chrono::NaiveDate;
use std::collections::HashSet;
use uuid::Uuid;

const SEPARATOR_MARKER: &str = "---";

/// Note held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryNote {
    note_type: NoteType,
    date: Option<NaiveDate>,
    filename: String,
    paragraphs: Vec<Paragraph>,
    content: String,
    selection: Option<CharRange>,
}

impl MemoryNote {
    /// Builds a project note from raw text.
    pub fn project(filename: impl Into<String>, text: &str) -> Self {
        Self::from_text(NoteType::Project, None, filename.into(), text)
    }

    /// Builds a calendar note for `date`, named `YYYYMMDD.md`.
    pub fn calendar(date: NaiveDate, text: &str) -> Self {
        let filename = format!("{}.md", date.format("%Y%m%d"));
        Self::from_text(NoteType::Calendar, Some(date), filename, text)
    }

    fn from_text(
        note_type: NoteType,
        date: Option<NaiveDate>,
        filename: String,
        text: &str,
    ) -> Self {
        let mut paragraphs = Vec::new();
        if !text.is_empty() {
            let mut classifier = LineClassifier::new();
            for line in text.split('\n') {
                let shape = classifier.classify(line);
                paragraphs.push(new_paragraph(
                    shape.kind,
                    shape.heading_level,
                    &line[..shape.prefix_len],
                    &line[shape.prefix_len..],
                ));
            }
        }

        let mut note = Self {
            note_type,
            date,
            filename,
            paragraphs,
            content: String::new(),
            selection: None,
        };
        note.reindex();
        note
    }

    /// Sets the editor selection.
    pub fn select(&mut self, range: CharRange) {
        self.selection = Some(range);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn reindex(&mut self) {
        let mut offset = 0usize;
        for (index, paragraph) in self.paragraphs.iter_mut().enumerate() {
            let content_start = offset + paragraph.prefix.chars().count();
            let content_end = content_start + paragraph.content.chars().count();
            paragraph.line_index = index;
            paragraph.content_range = CharRange::new(content_start, content_end);
            // +1 for the line break that follows every line but the last.
            offset = content_end + 1;
        }
        self.content = self
            .paragraphs
            .iter()
            .map(|paragraph| paragraph.raw_content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
    }
}

impl NoteDocument for MemoryNote {
    fn note_type(&self) -> NoteType {
        self.note_type
    }

    fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn filename(&self) -> &str {
        &self.filename
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    fn append_paragraph(&mut self, text: &str, kind: ParagraphType) -> DocumentResult<()> {
        let len = self.paragraphs.len();
        self.insert_paragraph(text, len, kind)
    }

    fn insert_paragraph(
        &mut self,
        text: &str,
        index: usize,
        kind: ParagraphType,
    ) -> DocumentResult<()> {
        let len = self.paragraphs.len();
        if index > len {
            return Err(DocumentError::IndexOutOfRange { index, len });
        }
        self.paragraphs.insert(index, render_paragraph(text, kind));
        self.reindex();
        Ok(())
    }

    fn remove_paragraph(&mut self, paragraph: &Paragraph) -> DocumentResult<()> {
        self.remove_paragraphs(std::slice::from_ref(paragraph))
    }

    fn remove_paragraphs(&mut self, paragraphs: &[Paragraph]) -> DocumentResult<()> {
        let known: HashSet<Uuid> = self.paragraphs.iter().map(|p| p.id).collect();
        if let Some(missing) = paragraphs.iter().find(|p| !known.contains(&p.id)) {
            return Err(DocumentError::ParagraphNotFound(missing.id));
        }
        let doomed: HashSet<Uuid> = paragraphs.iter().map(|p| p.id).collect();
        self.paragraphs.retain(|p| !doomed.contains(&p.id));
        self.reindex();
        Ok(())
    }
}

impl NoteEditor for MemoryNote {
    fn selection(&self) -> Option<CharRange> {
        self.selection
    }
}

fn new_paragraph(kind: ParagraphType, heading_level: u8, prefix: &str, content: &str) -> Paragraph {
    Paragraph {
        id: Uuid::new_v4(),
        line_index: 0,
        kind,
        heading_level,
        prefix: prefix.to_string(),
        content: content.to_string(),
        raw_content: format!("{prefix}{content}"),
        content_range: CharRange::default(),
    }
}

fn render_paragraph(text: &str, kind: ParagraphType) -> Paragraph {
    match kind {
        ParagraphType::Separator => {
            let marker = if text.is_empty() { SEPARATOR_MARKER } else { text };
            new_paragraph(kind, 0, marker, "")
        }
        _ => new_paragraph(
            kind,
            kind.default_heading_level(),
            kind.default_prefix(),
            text,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryNote;
    use crate::document::{DocumentError, NoteDocument};
    use crate::model::paragraph::{CharRange, NoteType, ParagraphType};
    use chrono::NaiveDate;

    #[test]
    fn empty_text_has_no_paragraphs() {
        let note = MemoryNote::project("empty.md", "");
        assert_eq!(note.paragraph_count(), 0);
        assert_eq!(note.content(), "");
    }

    #[test]
    fn parsing_assigns_indexes_and_content_ranges() {
        let note = MemoryNote::project("p.md", "# Title\n- item\n\nplain");
        let paras = note.paragraphs();
        assert_eq!(paras.len(), 4);
        assert_eq!(paras[0].kind, ParagraphType::Title);
        assert_eq!(paras[0].content, "Title");
        assert_eq!(paras[0].content_range, CharRange::new(2, 7));
        assert_eq!(paras[1].kind, ParagraphType::List);
        assert_eq!(paras[1].content_range, CharRange::new(10, 14));
        assert_eq!(paras[1].line_start(), 8);
        assert_eq!(paras[2].kind, ParagraphType::Empty);
        assert_eq!(paras[3].line_index, 3);
        assert_eq!(paras[3].content_range, CharRange::new(16, 21));
    }

    #[test]
    fn insert_and_remove_reindex_and_keep_content_in_sync() {
        let mut note = MemoryNote::project("p.md", "# Title\nbody");
        note.insert_paragraph("Tasks", 1, ParagraphType::Heading).unwrap();
        assert_eq!(note.content(), "# Title\n## Tasks\nbody");
        assert_eq!(note.paragraphs()[1].heading_level, 2);
        assert_eq!(note.paragraphs()[2].line_index, 2);

        let heading = note.paragraphs()[1].clone();
        note.remove_paragraph(&heading).unwrap();
        assert_eq!(note.content(), "# Title\nbody");
        assert_eq!(note.paragraphs()[1].line_index, 1);
    }

    #[test]
    fn insert_past_end_is_rejected() {
        let mut note = MemoryNote::project("p.md", "# Title");
        let err = note
            .insert_paragraph("x", 5, ParagraphType::Text)
            .unwrap_err();
        assert_eq!(err, DocumentError::IndexOutOfRange { index: 5, len: 1 });
    }

    #[test]
    fn removing_unknown_paragraph_leaves_note_untouched() {
        let mut note = MemoryNote::project("p.md", "# Title\na\nb");
        let other = MemoryNote::project("q.md", "a");
        let keep = note.paragraphs()[1].clone();
        let stranger = other.paragraphs()[0].clone();

        let err = note.remove_paragraphs(&[keep, stranger.clone()]).unwrap_err();
        assert_eq!(err, DocumentError::ParagraphNotFound(stranger.id));
        assert_eq!(note.paragraph_count(), 3);
    }

    #[test]
    fn separators_render_as_rule_and_calendar_names_use_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut note = MemoryNote::calendar(date, "");
        assert_eq!(note.note_type(), NoteType::Calendar);
        assert_eq!(note.filename(), "20261016.md");
        assert_eq!(note.date(), Some(date));

        note.append_paragraph("", ParagraphType::Separator).unwrap();
        note.prepend_paragraph("first", ParagraphType::Open).unwrap();
        assert_eq!(note.content(), "- [ ] first\n---");
    }
}
