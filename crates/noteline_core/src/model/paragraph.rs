//! Paragraph domain model.
//!
//! # Responsibility
//! - Describe one line of a note: its kind, heading level, text and position.
//! - Provide the character-range type used by selection mapping.
//!
//! # Invariants
//! - `raw_content == prefix + content` for every paragraph.
//! - `heading_level` is `0` unless `kind.is_heading()`.
//! - `id` is stable across re-indexing and never reused within a note.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a paragraph inside one note.
///
/// Line indexes shift on every insert/remove; the id does not, so removal
/// calls address paragraphs by id rather than by position.
pub type ParagraphId = Uuid;

/// Kind of note the paragraphs belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteType {
    /// Date-bound note without a title line.
    Calendar,
    /// Freeform note whose first line is the title.
    Project,
}

/// Semantic type of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphType {
    /// Markdown heading (`#` .. `######`).
    Title,
    /// Heading kind used by hosts that separate it from `Title`.
    Heading,
    Text,
    Empty,
    /// Horizontal rule; also delimits frontmatter.
    Separator,
    Code,
    Quote,
    List,
    /// Open task.
    Open,
    /// Completed task.
    Done,
    /// Cancelled task.
    Cancelled,
}

impl ParagraphType {
    /// Returns whether this kind carries a meaningful heading level.
    pub fn is_heading(self) -> bool {
        matches!(self, Self::Title | Self::Heading)
    }

    /// Markdown prefix used when a paragraph of this kind is created from
    /// plain text.
    pub fn default_prefix(self) -> &'static str {
        match self {
            Self::Title => "# ",
            Self::Heading => "## ",
            Self::Quote => "> ",
            Self::List => "* ",
            Self::Open => "- [ ] ",
            Self::Done => "- [x] ",
            Self::Cancelled => "- [-] ",
            Self::Text | Self::Empty | Self::Separator | Self::Code => "",
        }
    }

    /// Heading level implied by `default_prefix`.
    pub fn default_heading_level(self) -> u8 {
        match self {
            Self::Title => 1,
            Self::Heading => 2,
            _ => 0,
        }
    }
}

/// Half-open character offset range `[start, end)` within the note text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharRange {
    pub start: usize,
    pub end: usize,
}

impl CharRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns whether `offset` lies in `[start, end]`.
    ///
    /// The end is inclusive so a caret sitting at end-of-line still belongs
    /// to that line.
    pub fn touches(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// One line of a note as seen by structural algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Stable identity used by removal calls.
    pub id: ParagraphId,
    /// 0-based position inside the owning note.
    pub line_index: usize,
    /// Serialized as `type` to match host naming.
    #[serde(rename = "type")]
    pub kind: ParagraphType,
    /// 1..=6 for headings, 0 otherwise.
    pub heading_level: u8,
    /// Structural prefix stripped from `raw_content`.
    pub prefix: String,
    /// Line text without its structural prefix.
    pub content: String,
    /// Line text exactly as stored in the note.
    pub raw_content: String,
    /// Character range of `content` within the full note text.
    pub content_range: CharRange,
}

impl Paragraph {
    /// Character offset where this paragraph's line begins.
    pub fn line_start(&self) -> usize {
        self.content_range
            .start
            .saturating_sub(self.prefix.chars().count())
    }

    /// Character range of the whole line, prefix included.
    pub fn line_range(&self) -> CharRange {
        CharRange::new(self.line_start(), self.content_range.end)
    }
}
