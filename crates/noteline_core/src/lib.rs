//! Structural model and line-index algorithms for plain-text notes.
//! Locates frontmatter, legacy metadata, the active body and archived
//! sections, and tells callers where inserts and removals must land.

pub mod document;
pub mod logging;
pub mod model;
pub mod section;
pub mod selection;
pub mod structure;
pub mod text;

pub use document::memory::MemoryNote;
pub use document::{DocumentError, DocumentResult, NoteDocument, NoteEditor};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::lookup::LineLookup;
pub use model::paragraph::{CharRange, NoteType, Paragraph, ParagraphId, ParagraphType};
pub use section::{find_section, last_line_index, remove_section, SectionSpan};
pub use selection::{
    paragraph_range_at_offset, selected_lines, selected_paragraph_range, ParagraphSpan,
    SelectionError,
};
pub use structure::{
    active_content_end, active_content_range, active_content_start, find_frontmatter_end,
    find_metadata_line, frontmatter_end_index, metadata_line, smart_prepend_paragraph,
    smart_prepend_point,
};
pub use text::{
    describe_paragraph, display_title, find_paragraph_by_content, paragraphs_to_text,
    term_in_markdown_path, term_in_url,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
