//! Line classification for raw note text.
//!
//! Splits each line into `prefix + content` and assigns a `ParagraphType`.
//! Only fenced code needs state across lines.

use crate::model::paragraph::ParagraphType;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+").expect("valid heading regex"));
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})\s*$").expect("valid separator regex"));
static TASK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*] \[([ xX\-])\] ").expect("valid task regex"));
static LIST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-*] ").expect("valid list regex"));
static QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^> ?").expect("valid quote regex"));

const CODE_FENCE: &str = "```";

/// Classification of one raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    pub kind: ParagraphType,
    pub heading_level: u8,
    /// Byte length of the structural prefix.
    pub prefix_len: usize,
}

impl LineShape {
    fn plain(kind: ParagraphType) -> Self {
        Self {
            kind,
            heading_level: 0,
            prefix_len: 0,
        }
    }
}

/// Classifies lines in order, tracking fenced code blocks.
#[derive(Debug, Default)]
pub struct LineClassifier {
    in_code_fence: bool,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&mut self, line: &str) -> LineShape {
        if line.trim_start().starts_with(CODE_FENCE) {
            self.in_code_fence = !self.in_code_fence;
            return LineShape::plain(ParagraphType::Code);
        }
        if self.in_code_fence {
            return LineShape::plain(ParagraphType::Code);
        }
        classify_line(line)
    }
}

/// Classifies one line with no surrounding context.
pub fn classify_line(line: &str) -> LineShape {
    if line.trim().is_empty() {
        return LineShape {
            kind: ParagraphType::Empty,
            heading_level: 0,
            prefix_len: line.len(),
        };
    }
    if let Some(caps) = HEADING_RE.captures(line) {
        let hashes = caps.get(1).map_or(1, |m| m.as_str().len());
        return LineShape {
            kind: ParagraphType::Title,
            heading_level: hashes as u8,
            prefix_len: caps.get(0).map_or(0, |m| m.end()),
        };
    }
    if SEPARATOR_RE.is_match(line) {
        return LineShape {
            kind: ParagraphType::Separator,
            heading_level: 0,
            prefix_len: line.len(),
        };
    }
    if let Some(caps) = TASK_RE.captures(line) {
        let kind = match caps.get(1).map(|m| m.as_str()) {
            Some("x") | Some("X") => ParagraphType::Done,
            Some("-") => ParagraphType::Cancelled,
            _ => ParagraphType::Open,
        };
        return LineShape {
            kind,
            heading_level: 0,
            prefix_len: caps.get(0).map_or(0, |m| m.end()),
        };
    }
    if let Some(found) = LIST_RE.find(line) {
        return LineShape {
            kind: ParagraphType::List,
            heading_level: 0,
            prefix_len: found.end(),
        };
    }
    if let Some(found) = QUOTE_RE.find(line) {
        return LineShape {
            kind: ParagraphType::Quote,
            heading_level: 0,
            prefix_len: found.end(),
        };
    }
    LineShape::plain(ParagraphType::Text)
}
