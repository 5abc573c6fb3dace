//! Paragraph text helpers.
//!
//! # Responsibility
//! - Rebuild raw note text from paragraphs.
//! - Detect search terms that only occur inside URLs or link targets.
//! - Provide display names and diagnostic dumps for notes and paragraphs.

use crate::document::NoteDocument;
use crate::model::paragraph::{NoteType, Paragraph, ParagraphType};
use log::debug;
use regex::Regex;

/// Joins `raw_content` of `paragraphs` with `\n`, without a trailing break.
pub fn paragraphs_to_text(paragraphs: &[Paragraph]) -> String {
    paragraphs
        .iter()
        .map(|paragraph| paragraph.raw_content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns whether `term` occurs inside an `http(s)://` or `file:/` URL in
/// `text`. Case-sensitive.
pub fn term_in_url(term: &str, text: &str) -> bool {
    let pattern = format!(
        r"(?:https?://|file:/)[^\s]*?{}.*?(?:[\s.]|$)",
        regex::escape(term)
    );
    Regex::new(&pattern).is_ok_and(|re| re.is_match(text))
}

/// Returns whether `term` occurs inside the target of a markdown link
/// `[label](target)`. Case-sensitive.
pub fn term_in_markdown_path(term: &str, text: &str) -> bool {
    let pattern = format!(r"\[.+?\]\([^\s)]*?{}[^\s)]*?\)", regex::escape(term));
    Regex::new(&pattern).is_ok_and(|re| re.is_match(text))
}

/// Human-readable note name.
///
/// Dated calendar notes use the filename without extension (`20261016`).
/// Project notes use their first level-1 title, else the filename stem.
pub fn display_title<D: NoteDocument + ?Sized>(note: &D) -> String {
    if note.note_type() == NoteType::Calendar && note.date().is_some() {
        return filename_stem(note.filename()).to_string();
    }
    note.paragraphs()
        .iter()
        .find(|p| p.kind == ParagraphType::Title && p.heading_level == 1)
        .map(|p| p.content.trim().to_string())
        .unwrap_or_else(|| filename_stem(note.filename()).to_string())
}

fn filename_stem(filename: &str) -> &str {
    filename.split('.').next().unwrap_or_default()
}

/// First paragraph whose content equals `needle` exactly.
pub fn find_paragraph_by_content<'a>(
    paragraphs: &'a [Paragraph],
    needle: &str,
) -> Option<&'a Paragraph> {
    let found = paragraphs.iter().find(|p| p.content == needle);
    if found.is_none() {
        debug!(
            "event=paragraph_lookup module=text status=miss needle_chars={}",
            needle.chars().count()
        );
    }
    found
}

/// Pretty JSON dump of a paragraph for diagnostics.
pub fn describe_paragraph(paragraph: &Paragraph) -> String {
    serde_json::to_string_pretty(paragraph)
        .unwrap_or_else(|err| format!("<unprintable paragraph {}: {err}>", paragraph.id))
}
